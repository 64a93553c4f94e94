// simulation/simulation.rs
// Contains the Simulation struct and main methods (new, step, total_frames)

use crate::config;
use crate::error::SimError;
use crate::scheduler::cadence::CadencePolicy;
use crate::scheduler::frame_update::{AxesUpdate, FrameUpdate, TextOverlay};
use crate::scheduler::{geometry, tint};

use super::history::{scaled_bounds, History};
use super::physics::{LoopConfig, PhysicsSample};

/// The induction simulation: coil configuration, append-only history
/// and the frame scheduler state. One instance owns its history; the
/// rendering collaborator only ever sees it through the `FrameUpdate`
/// view or `history()`.
pub struct Simulation {
    pub config: LoopConfig,
    policy: CadencePolicy,
    history: History,
    next_frame: u64,
    field_generation: u64,
}

impl Simulation {
    pub fn new(turns: u32, radius: f64, peak_field: f64, frequency: f64) -> Result<Self, SimError> {
        Ok(Self::from_config(LoopConfig::new(
            turns, radius, peak_field, frequency,
        )?))
    }

    pub fn from_config(config: LoopConfig) -> Self {
        Self {
            config,
            policy: CadencePolicy::new(),
            history: History::new(),
            next_frame: 0,
            field_generation: 0,
        }
    }

    /// Number of frames for a requested duration: floor(duration / Δt).
    pub fn total_frames(duration: f64) -> usize {
        (duration / config::DT).floor() as usize
    }

    /// Read-only view of the four aligned time series.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Frame index `step` expects next.
    pub fn next_frame(&self) -> u64 {
        self.next_frame
    }

    /// Advance one animation frame. The physics is sampled and recorded
    /// unconditionally; only the rendering payloads are gated by the
    /// cadence policy.
    pub fn step(&mut self, frame: u64) -> Result<FrameUpdate<'_>, SimError> {
        if frame != self.next_frame {
            return Err(SimError::InvalidFrame {
                expected: self.next_frame,
                got: frame,
            });
        }
        self.next_frame += 1;

        let sample = self.config.sample(frame);
        self.history.push(&sample);

        let tasks = self.policy.evaluate(frame, self.history.len());

        let field_geometry = if tasks.redraw_field_vectors {
            self.field_generation += 1;
            Some(geometry::field_geometry(
                &self.config,
                sample.field,
                self.field_generation,
            ))
        } else {
            None
        };

        let camera = tasks
            .rotate_camera
            .then(|| geometry::camera_pose(sample.time));

        let axes = if tasks.rescale_axes {
            Some(AxesUpdate {
                time_max: self.history.time_max(),
                field_bounds: scaled_bounds(self.history.field()),
                emf_bounds: scaled_bounds(self.history.emf()),
            })
        } else {
            None
        };

        let overlay = tasks.refresh_text.then(|| self.overlay_for(&sample));

        let intensity = self.config.emf_normalized_intensity(sample.emf);
        let loop_tint = tint::loop_tint(sample.emf, intensity);

        Ok(FrameUpdate {
            frame,
            sample,
            series: &self.history,
            tasks,
            loop_tint,
            camera,
            field_geometry,
            axes,
            overlay,
        })
    }

    fn overlay_for(&self, sample: &PhysicsSample) -> TextOverlay {
        TextOverlay {
            time: sample.time,
            field: sample.field,
            flux: sample.flux,
            emf: sample.emf,
            turns: self.config.turns(),
            azimuth: geometry::camera_pose(sample.time).azimuth,
        }
    }
}
