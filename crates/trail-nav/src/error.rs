//! Navigation-subsystem error type.

use thiserror::Error;

use trail_core::Waypoint;

/// Errors produced by `trail-nav`.
#[derive(Debug, Error)]
pub enum NavError {
    #[error("no path from {from} to {to}")]
    NoPath { from: Waypoint, to: Waypoint },

    #[error("height query ({x}, {z}) is outside the configured surface")]
    OutOfBounds { x: f32, z: f32 },

    #[error("no terrain surface configured")]
    NoSurface,

    #[error("invalid surface definition: {0}")]
    InvalidSurface(String),
}

pub type NavResult<T> = Result<T, NavError>;
