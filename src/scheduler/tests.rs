// Cadence-policy and render-payload tests for the frame scheduler

use crate::config;
use crate::simulation::history::scaled_bounds;
use crate::simulation::physics::LoopConfig;
use crate::simulation::Simulation;

use super::cadence::{CadencePolicy, RenderTask};
use super::{geometry, tint};

fn reference() -> LoopConfig {
    LoopConfig::new(1, 1.0, 2.0, 0.5).unwrap()
}

#[cfg(test)]
mod cadences {
    use super::*;

    #[test]
    fn field_vectors_every_second_frame() {
        let policy = CadencePolicy::new();
        for frame in 0..40 {
            let due = policy.evaluate(frame, 100);
            assert_eq!(due.redraw_field_vectors, frame % 2 == 0);
        }
    }

    #[test]
    fn camera_every_fifth_frame() {
        let policy = CadencePolicy::new();
        for frame in 0..40 {
            assert_eq!(
                policy.evaluate(frame, 100).rotate_camera,
                frame % 5 == 0,
                "camera cadence wrong at frame {frame}"
            );
        }
    }

    #[test]
    fn text_every_third_frame() {
        let policy = CadencePolicy::new();
        for frame in 0..40 {
            assert_eq!(policy.evaluate(frame, 100).refresh_text, frame % 3 == 0);
        }
    }

    #[test]
    fn axis_rescale_waits_for_history() {
        let policy = CadencePolicy::new();
        // Divisor hit but history too shallow.
        assert!(!policy.due(RenderTask::AxisRescale, 0, 1));
        assert!(!policy.due(RenderTask::AxisRescale, 10, 10));
        // Both conditions met.
        assert!(policy.due(RenderTask::AxisRescale, 10, 11));
        assert!(policy.due(RenderTask::AxisRescale, 20, 100));
        // History deep enough but off-cadence.
        assert!(!policy.due(RenderTask::AxisRescale, 15, 100));
    }

    #[test]
    fn cadences_are_independent() {
        let policy = CadencePolicy::new();
        // Frame 30 hits field vectors, camera, rescale and text at once.
        let due = policy.evaluate(30, 100);
        assert!(due.redraw_field_vectors);
        assert!(due.rotate_camera);
        assert!(due.rescale_axes);
        assert!(due.refresh_text);
        // Frame 7 hits none of them.
        let due = policy.evaluate(7, 100);
        assert!(!due.redraw_field_vectors);
        assert!(!due.rotate_camera);
        assert!(!due.rescale_axes);
        assert!(!due.refresh_text);
    }
}

#[cfg(test)]
mod payloads {
    use super::*;

    #[test]
    fn camera_swings_around_base_azimuth() {
        let mut sim = Simulation::from_config(reference());
        for frame in 0..=5u64 {
            let update = sim.step(frame).unwrap();
            match frame {
                0 | 5 => {
                    let camera = update.camera.expect("camera due");
                    let t = frame as f64 * config::DT;
                    let expected = 45.0 + 15.0 * (0.3 * t).sin();
                    assert!((camera.azimuth - expected).abs() < 1e-12);
                    assert_eq!(camera.elevation, config::CAMERA_ELEVATION_DEG);
                }
                _ => assert!(update.camera.is_none()),
            }
        }
    }

    #[test]
    fn field_geometry_rebuilt_with_fresh_generation() {
        let mut sim = Simulation::from_config(reference());
        {
            let update = sim.step(0).unwrap();
            let geometry = update.field_geometry.expect("field redraw due at frame 0");
            assert_eq!(geometry.generation, 1);
            assert!(geometry.points_up);
            assert!(geometry.vectors_visible);
            assert_eq!(
                geometry.vectors.len(),
                config::FIELD_GRID_POINTS * config::FIELD_GRID_POINTS
            );
            // B=2 T at t=0, arrow z = B * scale.
            for vector in &geometry.vectors {
                assert!((vector.arrow.z - 0.8).abs() < 1e-6);
                assert_eq!(vector.origin.z, 0.0);
            }
            assert!(geometry.rings_visible);
            assert_eq!(geometry.rings.len(), 2);
            assert_eq!(geometry.rings[0].radius, 0.5);
            assert_eq!(geometry.rings[1].radius, 0.8);
            for ring in &geometry.rings {
                assert_eq!(ring.points.len(), config::FLUX_RING_SEGMENTS);
            }
        }
        assert!(sim.step(1).unwrap().field_geometry.is_none());
        let update = sim.step(2).unwrap();
        assert_eq!(update.field_geometry.unwrap().generation, 2);
    }

    #[test]
    fn weak_field_hides_vectors_then_rings() {
        let cfg = reference();
        // Intensity 0.045: everything hidden.
        let hidden = geometry::field_geometry(&cfg, 0.09, 1);
        assert!(!hidden.vectors_visible);
        assert!(!hidden.rings_visible);
        assert!(hidden.vectors.is_empty());
        assert!(hidden.rings.is_empty());
        // Intensity 0.075: vectors only.
        let partial = geometry::field_geometry(&cfg, 0.15, 2);
        assert!(partial.vectors_visible);
        assert!(!partial.rings_visible);
        // Intensity 0.25, negative field: everything, pointing down.
        let full = geometry::field_geometry(&cfg, -0.5, 3);
        assert!(full.vectors_visible);
        assert!(full.rings_visible);
        assert!(!full.points_up);
        assert!(full.vectors.iter().all(|v| v.arrow.z < 0.0));
    }

    #[test]
    fn degenerate_series_keeps_bounds() {
        // Identical values: no rescale.
        assert_eq!(scaled_bounds(&[1.0; 12]), None);
        // Distinct but within 1e-4 of each other: spread below the
        // guard, still no rescale.
        let flat: Vec<f64> = (0..12).map(|i| 1.0 + i as f64 * 1e-6).collect();
        assert_eq!(scaled_bounds(&flat), None);
        assert_eq!(scaled_bounds(&[]), None);
    }

    #[test]
    fn spread_series_rescales_with_margin() {
        let bounds = scaled_bounds(&[-1.0, 0.5, 2.0]).expect("spread well above guard");
        assert!((bounds.0 - (-1.1)).abs() < 1e-12);
        assert!((bounds.1 - 2.2).abs() < 1e-12);
    }

    #[test]
    fn axis_rescale_tracks_running_extrema() {
        let mut sim = Simulation::from_config(reference());
        for frame in 0..10 {
            sim.step(frame).unwrap();
        }
        let update = sim.step(10).unwrap();
        let axes = update.axes.expect("rescale due at frame 10 with 11 samples");
        assert!((axes.time_max - 0.5).abs() < 1e-12);
        // Field ran from ~0 (t=0.5) up to 2.0 (t=0).
        let (lo, hi) = axes.field_bounds.expect("field series has spread");
        assert!(lo.abs() < 1e-9);
        assert!((hi - 2.2).abs() < 1e-9);
        // EMF ran from 0 up to its 2π² peak.
        let (lo, hi) = axes.emf_bounds.expect("emf series has spread");
        assert!(lo.abs() < 1e-9);
        let peak = std::f64::consts::PI * std::f64::consts::PI * 2.0;
        assert!((hi - peak * config::AXIS_MARGIN).abs() < 1e-9);
    }

    #[test]
    fn near_constant_field_skips_y_rescale() {
        // A glacial oscillation leaves both series flatter than the
        // spread guard over the first eleven frames.
        let mut sim = Simulation::new(1, 1.0, 2.0, 1e-4).unwrap();
        for frame in 0..10 {
            sim.step(frame).unwrap();
        }
        let update = sim.step(10).unwrap();
        let axes = update.axes.expect("rescale cadence still fires");
        assert_eq!(axes.field_bounds, None);
        assert_eq!(axes.emf_bounds, None);
    }

    #[test]
    fn overlay_follows_text_cadence() {
        let mut sim = Simulation::from_config(reference());
        for frame in 0..=6u64 {
            let update = sim.step(frame).unwrap();
            if frame % 3 == 0 {
                let overlay = update.overlay.expect("text refresh due");
                assert_eq!(overlay.time, update.sample.time);
                assert_eq!(overlay.field, update.sample.field);
                assert_eq!(overlay.flux, update.sample.flux);
                assert_eq!(overlay.emf, update.sample.emf);
                assert_eq!(overlay.turns, 1);
                let expected_azimuth = 45.0 + 15.0 * (0.3 * update.sample.time).sin();
                assert!((overlay.azimuth - expected_azimuth).abs() < 1e-12);
            } else {
                assert!(update.overlay.is_none());
            }
        }
    }

    #[test]
    fn series_view_updates_every_frame() {
        let mut sim = Simulation::from_config(reference());
        for frame in 0..30u64 {
            let update = sim.step(frame).unwrap();
            assert_eq!(update.series.len(), frame as usize + 1);
            assert_eq!(*update.series.emf().last().unwrap(), update.sample.emf);
        }
    }

    #[test]
    fn loop_tint_tracks_emf_sign_and_intensity() {
        let positive = tint::loop_tint(1.0, 0.5);
        let negative = tint::loop_tint(-1.0, 0.5);
        assert_ne!(positive, negative);
        assert_eq!(positive[3], 255);
        assert_eq!(negative[3], 255);
        // Stronger EMF darkens the tint.
        let faint = tint::loop_tint(1.0, 0.0);
        let strong = tint::loop_tint(1.0, 1.0);
        assert_ne!(faint, strong);
    }
}
