use thiserror::Error;

/// Errors reported by the simulation core. Both are pre-condition
/// violations; the calling layer decides whether to re-prompt or abort.
#[derive(Debug, Error)]
pub enum SimError {
    /// A non-positive coil parameter was supplied at construction.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
    /// A frame index that is not the next one in sequence was passed to
    /// `step`. Frames start at 0 and increase by 1; anything else would
    /// desynchronize simulated time from the history series.
    #[error("frame {got} out of order (expected {expected})")]
    InvalidFrame { expected: u64, got: u64 },
}
