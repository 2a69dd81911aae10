//! Error types for wall construction and assembly.

use thiserror::Error;

/// Errors that can occur while building walls or bridges.
#[derive(Debug, Error, PartialEq)]
pub enum WallError {
    /// Lofting a cross-section ring or skinning a pair of sections failed.
    #[error("lofting failed: {0}")]
    Loft(#[from] case_loft::LoftError),
}

/// Result type for wall operations.
pub type WallResult<T> = Result<T, WallError>;
