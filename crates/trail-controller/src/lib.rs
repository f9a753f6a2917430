//! `trail-controller` — path diffing and the recompute cycle.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                   |
//! |----------------|-------------------------------------------------------------|
//! | [`diff`]       | tail-anchored waypoint diff (`changed_count`)               |
//! | [`controller`] | `TrailController` — the poll-driven state machine           |
//! | [`builder`]    | `TrailControllerBuilder`                                    |
//! | [`observer`]   | `TrailObserver` callbacks, `NoopObserver`                   |
//! | [`error`]      | `ControllerError`, `ControllerResult<T>`                    |
//!
//! # Recompute model
//!
//! The controller is host-driven: the host calls
//! [`TrailController::poll`] and acts on the returned [`PollOutcome`] —
//! re-poll after the configured interval, or stop because the destination was
//! reached.  Each poll runs one full cycle: request a path, check the reach
//! threshold, diff the new corner sequence against the stored one, and trim +
//! regenerate exactly the trailing segments that changed.  The controller
//! never sleeps and never spawns threads; cancellation is a new
//! [`TrailController::set_destination`] call, honored at the top of the next
//! cycle.

pub mod builder;
pub mod controller;
pub mod diff;
pub mod error;
pub mod observer;


pub use builder::TrailControllerBuilder;
pub use controller::{ControllerState, PollOutcome, TrailController};
pub use diff::changed_count;
pub use error::{ControllerError, ControllerResult};
pub use observer::{NoopObserver, TrailObserver};
