use thiserror::Error;

/// Top-level error type for the threed kernel.
///
/// The arithmetic itself never fails; only building values from
/// dynamically-sized input can.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ThreedError {
    #[error("expected {expected} components, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },
}

/// Convenience type alias for results using [`ThreedError`].
pub type Result<T> = std::result::Result<T, ThreedError>;
