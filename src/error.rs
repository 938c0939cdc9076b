use thiserror::Error;

/// Failures surfaced by layout synthesis, similarity scoring and staging.
///
/// Every kind reflects an invalid caller-supplied precondition (or an I/O
/// fault for staging); nothing is retried or recovered internally.
#[derive(Debug, Error)]
pub enum Error {
    /// A required aggregate input was absent or had no usable content.
    #[error("recognized block list is missing or has no usable content")]
    NullInput,
    /// The transcription is blank, so there is nothing to lay out.
    #[error("text is blank, nothing to lay out")]
    EmptyText,
    /// The block quadrilateral is missing entirely or lacks a corner.
    #[error("block position is missing or incomplete")]
    InvalidPosition,
    /// Corresponding point groups must have equal length.
    #[error("point groups differ in length ({left} vs {right})")]
    LengthMismatch { left: usize, right: usize },
    /// The point groups are empty.
    #[error("point groups are empty")]
    EmptyInput,
    /// Group scoring needs at least one unordered point pair.
    #[error("need at least two points per group, got {got}")]
    DegenerateInput { got: usize },
    #[error("temp staging failed: {0}")]
    Staging(#[from] std::io::Error),
}
