//! Shared error type.
//!
//! Sub-crates define their own error enums and wrap `LmError` as one variant
//! via `#[from]`.

use thiserror::Error;

/// The base error type for `lm-core` and a common variant for sub-crates.
#[derive(Debug, Error)]
pub enum LmError {
    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `lm-core`.
pub type LmResult<T> = Result<T, LmError>;
