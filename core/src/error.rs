//! Error types for the todo core.
//!
//! # Design
//! Store operations never fail: a lookup miss yields the empty sentinel.
//! Errors only arise when turning raw form values into typed inputs.

/// Errors returned by the form value parsers in `params`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TodoError {
    /// The value is not an unsigned 32-bit integer.
    #[error("invalid todo id: {0:?}")]
    InvalidId(String),

    /// The value is not a recognised boolean spelling.
    #[error("invalid boolean flag: {0:?}")]
    InvalidFlag(String),
}
