// scheduler/cadence.rs
// Declarative render-cadence policy. Each visual subsystem refreshes on
// its own frame-modulo divisor, independent of wall-clock time and of
// the physical values; the physics itself is sampled every frame.

use crate::config;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderTask {
    FieldVectors,
    CameraRotate,
    AxisRescale,
    TextRefresh,
}

/// One row of the policy table: refresh `task` whenever
/// `frame % interval == 0` and the history holds more than
/// `min_history` samples.
#[derive(Debug, Clone, Copy)]
pub struct Cadence {
    pub task: RenderTask,
    pub interval: u64,
    pub min_history: usize,
}

impl Cadence {
    fn is_due(&self, frame: u64, history_len: usize) -> bool {
        frame % self.interval == 0 && history_len > self.min_history
    }
}

/// Which subsystems are due this frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DueTasks {
    pub redraw_field_vectors: bool,
    pub rotate_camera: bool,
    pub rescale_axes: bool,
    pub refresh_text: bool,
}

/// The full cadence table, evaluated once per frame.
#[derive(Debug, Clone)]
pub struct CadencePolicy {
    cadences: [Cadence; 4],
}

impl CadencePolicy {
    pub fn new() -> Self {
        Self {
            cadences: [
                Cadence {
                    task: RenderTask::FieldVectors,
                    interval: config::FIELD_REDRAW_INTERVAL,
                    min_history: 0,
                },
                Cadence {
                    task: RenderTask::CameraRotate,
                    interval: config::CAMERA_ROTATE_INTERVAL,
                    min_history: 0,
                },
                Cadence {
                    task: RenderTask::AxisRescale,
                    interval: config::AXIS_RESCALE_INTERVAL,
                    min_history: config::AXIS_RESCALE_MIN_SAMPLES,
                },
                Cadence {
                    task: RenderTask::TextRefresh,
                    interval: config::TEXT_REFRESH_INTERVAL,
                    min_history: 0,
                },
            ],
        }
    }

    pub fn due(&self, task: RenderTask, frame: u64, history_len: usize) -> bool {
        self.cadences
            .iter()
            .find(|c| c.task == task)
            .map_or(false, |c| c.is_due(frame, history_len))
    }

    pub fn evaluate(&self, frame: u64, history_len: usize) -> DueTasks {
        let mut due = DueTasks::default();
        for cadence in &self.cadences {
            let hit = cadence.is_due(frame, history_len);
            match cadence.task {
                RenderTask::FieldVectors => due.redraw_field_vectors = hit,
                RenderTask::CameraRotate => due.rotate_camera = hit,
                RenderTask::AxisRescale => due.rescale_axes = hit,
                RenderTask::TextRefresh => due.refresh_text = hit,
            }
        }
        due
    }
}

impl Default for CadencePolicy {
    fn default() -> Self {
        Self::new()
    }
}
