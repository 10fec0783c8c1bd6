//! Error types for the layout engine
//!
//! Drag-time failures (out of bounds, collisions, no drop target, illegal
//! containment) are not errors: the placement and insertion entry points
//! return `None` for them. `LayoutError` covers what is left, which is
//! malformed input coming from configuration or block schemas.

use thiserror::Error;

/// Errors raised while loading configuration or registering block schemas
#[derive(Error, Debug)]
pub enum LayoutError {
    /// IO error while reading a configuration file
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error from serde_json
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// A size constraint is zero or negative where a positive value is required
    #[error("Invalid constraint for '{block_type}': {field} = {value}")]
    InvalidConstraint {
        block_type: String,
        field: &'static str,
        value: i32,
    },

    /// Grid configuration is unusable
    #[error("Invalid grid config: {0}")]
    InvalidConfig(String),

    /// No schema is registered for a block type
    #[error("Unknown block type: {0}")]
    UnknownBlockType(String),
}

/// Result type alias for layout operations
pub type LayoutResult<T> = Result<T, LayoutError>;
