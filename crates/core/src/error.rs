//! Error types for boxpack.

use thiserror::Error;

/// Result type alias for boxpack operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while preparing or checking a packing.
///
/// The packing algorithm itself cannot fail. These errors come from the
/// solver boundary: rejected input before packing, or a layout that failed
/// verification afterwards.
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid item provided (non-positive side or zero quantity).
    #[error("Invalid geometry: {0}")]
    InvalidGeometry(String),

    /// The produced layout broke the no-overlap or containment invariant.
    #[error("Layout violation: {0}")]
    LayoutViolation(String),
}
