// scheduler/tint.rs
// EMF-driven loop color. Green family while the induced current flows
// one way, orange the other, deepening with normalized intensity.

use palette::{Hsluv, IntoColor, Srgba};

const POSITIVE_HUE: f32 = 127.7;
const NEGATIVE_HUE: f32 = 42.0;

/// RGBA tint for the conducting loop. `intensity` is the clamped
/// normalized EMF intensity in [0, 1].
pub fn loop_tint(emf: f64, intensity: f64) -> [u8; 4] {
    let hue = if emf >= 0.0 { POSITIVE_HUE } else { NEGATIVE_HUE };
    let i = intensity as f32;
    let c = Hsluv::new(hue, 55.0 + 45.0 * i, 75.0 - 35.0 * i);
    let rgba: Srgba = c.into_color();
    [
        (rgba.red * 255.0) as u8,
        (rgba.green * 255.0) as u8,
        (rgba.blue * 255.0) as u8,
        (rgba.alpha * 255.0) as u8,
    ]
}
