//! Error types for lofting.

use thiserror::Error;

/// Errors that can occur while closing curves or sections into a solid.
///
/// These signal programming defects in the caller (mismatched list
/// lengths), not data conditions: builds abort on them rather than
/// recovering.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoftError {
    /// The edge list and step list have different lengths.
    #[error("arity mismatch: {edges} edges but {steps} step counts")]
    ArityMismatch {
        /// Number of edges supplied.
        edges: usize,
        /// Number of step counts supplied.
        steps: usize,
    },

    /// Fewer than three edges cannot form a cross-section ring.
    #[error("too few edges: need at least 3, got {actual}")]
    TooFewEdges {
        /// Number of edges supplied.
        actual: usize,
    },

    /// Fewer than two sections cannot be skinned.
    #[error("too few sections: need at least 2, got {actual}")]
    TooFewSections {
        /// Number of sections supplied.
        actual: usize,
    },

    /// A section's point count differs from the first section's.
    #[error("section {index} has {actual} points, expected {expected}")]
    SectionMismatch {
        /// Index of the offending section.
        index: usize,
        /// Point count of the first section.
        expected: usize,
        /// Point count of the offending section.
        actual: usize,
    },

    /// A section has fewer than three points.
    #[error("section has fewer than 3 points")]
    EmptySection,
}

/// Result type for lofting operations.
pub type LoftResult<T> = Result<T, LoftError>;
