// app/mod.rs
// Headless frame driver: produces frames at the nominal wall-clock
// tick and hands each FrameUpdate to a logging render collaborator.
// Frame production and consumption strictly alternate; the wall-clock
// tick never influences simulated time.

use std::thread;
use std::time::{Duration, Instant};

use tracing::{debug, error, info, warn};

use crate::config;
use crate::init_config::InitConfig;
use crate::simulation::Simulation;

pub mod state;

pub fn run() {
    tracing_subscriber::fmt::init();

    let params = match InitConfig::load_default() {
        Ok(cfg) => cfg,
        Err(err) => {
            warn!("faraday_config.toml not loaded ({err}); using defaults");
            InitConfig::default()
        }
    };

    let mut simulation = match Simulation::new(
        params.turns(),
        params.radius(),
        params.peak_field(),
        params.frequency(),
    ) {
        Ok(sim) => sim,
        Err(err) => {
            error!("rejected configuration: {err}");
            return;
        }
    };

    let frames = Simulation::total_frames(params.duration());
    info!(
        turns = simulation.config.turns(),
        radius_m = simulation.config.radius(),
        peak_field_t = simulation.config.peak_field(),
        frequency_hz = simulation.config.frequency(),
        area_m2 = simulation.config.area(),
        frames,
        "starting induction demo"
    );

    let tick = Duration::from_millis(config::FRAME_INTERVAL_MS);
    for frame in 0..frames as u64 {
        let frame_started = Instant::now();

        let update = match simulation.step(frame) {
            Ok(update) => update,
            Err(err) => {
                error!("frame {frame}: {err}");
                break;
            }
        };

        *state::SIM_TIME.lock() = update.sample.time;

        if let Some(geometry) = &update.field_geometry {
            debug!(
                generation = geometry.generation,
                vectors = geometry.vectors.len(),
                rings = geometry.rings.len(),
                points_up = geometry.points_up,
                "field redraw"
            );
        }
        if let Some(camera) = &update.camera {
            debug!(azimuth = camera.azimuth, "camera rotate");
        }
        if let Some(axes) = &update.axes {
            debug!(time_max = axes.time_max, "axis rescale");
        }
        if let Some(overlay) = &update.overlay {
            info!(
                time_s = overlay.time,
                field_t = overlay.field,
                flux_wb = overlay.flux,
                emf_v = overlay.emf,
                azimuth = overlay.azimuth,
                "overlay"
            );
        }

        if let Some(remaining) = tick.checked_sub(frame_started.elapsed()) {
            thread::sleep(remaining);
        }
    }

    info!(
        samples = simulation.history().len(),
        sim_time = *state::SIM_TIME.lock(),
        "induction demo finished"
    );
}
