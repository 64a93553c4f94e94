// scheduler/frame_update.rs
// The structured output of one scheduler step: the fresh physics
// sample, the running time-series view, and the per-cadence payloads
// that are due this frame.

use crate::simulation::history::History;
use crate::simulation::physics::PhysicsSample;

use super::cadence::DueTasks;
use super::geometry::{CameraPose, FieldGeometry};

/// New y-bounds for the two time-series plots plus the shared x-range.
/// A `None` bound means the series was too flat to rescale and the
/// renderer keeps its previous limits.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxesUpdate {
    /// Upper end of the time axis; the lower end is 0.
    pub time_max: f64,
    pub field_bounds: Option<(f64, f64)>,
    pub emf_bounds: Option<(f64, f64)>,
}

/// Current values for the on-screen readout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextOverlay {
    pub time: f64,
    pub field: f64,
    pub flux: f64,
    pub emf: f64,
    pub turns: u32,
    pub azimuth: f64,
}

/// Everything the external renderer needs for one frame. The sample,
/// series view and loop tint are refreshed every frame; the optional
/// payloads are present exactly when their cadence fired.
#[derive(Debug)]
pub struct FrameUpdate<'a> {
    pub frame: u64,
    pub sample: PhysicsSample,
    /// Read-only view of the full history; the two time-series curves
    /// are replotted from it every frame.
    pub series: &'a History,
    pub tasks: DueTasks,
    pub loop_tint: [u8; 4],
    pub camera: Option<CameraPose>,
    pub field_geometry: Option<FieldGeometry>,
    pub axes: Option<AxesUpdate>,
    pub overlay: Option<TextOverlay>,
}
