// simulation/mod.rs
// Re-exports and module declarations for simulation submodules

pub mod history;
pub mod physics;
pub mod simulation;

pub use history::History;
pub use physics::{LoopConfig, PhysicsSample};
pub use simulation::Simulation;
