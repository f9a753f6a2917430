//! `trail-core` — foundational types for the navigation-trail framework.
//!
//! This crate is a dependency of every other `trail-*` crate.  It has no
//! `trail-*` dependencies and minimal external ones (only `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module       | Contents                                   |
//! |--------------|---------------------------------------------|
//! | [`point`]    | `Waypoint` 3-D point, distance, lerp        |
//! | [`handle`]   | `MarkerHandle` — renderer-issued marker id  |
//! | [`config`]   | `TrailConfig` — spacing, poll interval, …   |
//! | [`error`]    | `TrailError`, `TrailResult`                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod config;
pub mod error;
pub mod handle;
pub mod point;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::TrailConfig;
pub use error::{TrailError, TrailResult};
pub use handle::MarkerHandle;
pub use point::Waypoint;
