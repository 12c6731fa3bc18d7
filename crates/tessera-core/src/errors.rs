//! Error types for the Tessera layout engine.

use thiserror::Error;

use crate::types::Axis;

/// Top-level error type for a layout pass.
///
/// Configuration errors are caller mistakes and are reported before any
/// child is measured. Invariant violations indicate a defect in the layout
/// code driving the pass; the pass is aborted and nothing is placed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(#[from] ConfigError),

    #[error("invariant violation: {0}")]
    InvariantViolation(#[from] InvariantError),
}

impl LayoutError {
    /// Whether this error is an [`LayoutError::InvalidConfiguration`].
    pub fn is_configuration(&self) -> bool {
        matches!(self, LayoutError::InvalidConfiguration(_))
    }

    /// Whether this error is an [`LayoutError::InvariantViolation`].
    pub fn is_invariant(&self) -> bool {
        matches!(self, LayoutError::InvariantViolation(_))
    }
}

/// Caller-supplied parameters that violate a precondition.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("bucket count must be positive, got {count}")]
    InvalidBucketCount { count: usize },

    #[error("negative {axis} bound in constraints: min {min}, max {max}")]
    NegativeConstraint { axis: Axis, min: i32, max: i32 },

    #[error("malformed {axis} constraints: min {min} exceeds max {max}")]
    MalformedConstraints { axis: Axis, min: i32, max: i32 },

    #[error("layout requires a bounded {axis} constraint")]
    UnboundedConstraint { axis: Axis },

    #[error("child {index} reported a negative size {width}x{height}")]
    NegativeMeasurement { index: usize, width: i32, height: i32 },

    #[error("negative padding: start {start}, top {top}, end {end}, bottom {bottom}")]
    NegativePadding {
        start: i32,
        top: i32,
        end: i32,
        bottom: i32,
    },

    #[error("child index {index} out of range for {count} children")]
    ChildOutOfRange { index: usize, count: usize },
}

/// Internal safety checks that failed during a pass.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvariantError {
    #[error("child {index} measured more than once in a single pass")]
    DoubleMeasurement { index: usize },

    #[error("child {index} was never measured before placement")]
    Unmeasured { index: usize },

    #[error("child has no first baseline but baseline placement was requested")]
    MissingBaseline,
}

/// Convenience alias used across the layout crates.
pub type LayoutResult<T> = Result<T, LayoutError>;
