// scheduler/mod.rs
// Re-exports and module declarations for the frame scheduler

pub mod cadence;
pub mod frame_update;
pub mod geometry;
pub mod tint;

pub use cadence::{CadencePolicy, DueTasks, RenderTask};
pub use frame_update::{AxesUpdate, FrameUpdate, TextOverlay};
pub use geometry::{CameraPose, FieldGeometry, FieldVector, FluxRing};

#[cfg(test)]
mod tests;
