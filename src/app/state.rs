// app/state.rs
// Shared status published by the frame loop for observers.

use once_cell::sync::Lazy;
use parking_lot::Mutex;

/// Simulated time of the most recently produced frame.
pub static SIM_TIME: Lazy<Mutex<f64>> = Lazy::new(|| Mutex::new(0.0));
