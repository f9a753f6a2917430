//! Framework error type.
//!
//! Sub-crates define their own error enums and either convert into
//! `TrailError` via `From` impls or wrap it as one variant.  Both patterns
//! are acceptable; prefer whichever keeps error sites clean.

use thiserror::Error;

/// The top-level error type for `trail-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum TrailError {
    #[error("particle spacing must be positive, got {0}")]
    InvalidSpacing(f32),

    #[error("poll interval must be positive, got {0}")]
    InvalidPollInterval(f32),

    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for all `trail-*` crates.
pub type TrailResult<T> = Result<T, TrailError>;
