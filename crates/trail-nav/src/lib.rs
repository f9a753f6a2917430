//! `trail-nav` — navigation and terrain collaborator interfaces.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                  |
//! |--------------|------------------------------------------------------------|
//! | [`provider`] | `PathProvider` trait, `StraightLineProvider`               |
//! | [`terrain`]  | `HeightSampler` trait, `HeightField`, `NoTerrain`          |
//! | [`error`]    | `NavError`, `NavResult<T>`                                 |
//!
//! # Pluggability
//!
//! The trail controller consumes paths and heights only through the
//! [`PathProvider`] and [`HeightSampler`] traits, so applications plug in a
//! real navigation-mesh solver and terrain surface without touching the
//! framework core.  The defaults shipped here ([`StraightLineProvider`],
//! [`HeightField`]) are sufficient for flat-world and synthetic-terrain use.

pub mod error;
pub mod provider;
pub mod terrain;


pub use error::{NavError, NavResult};
pub use provider::{PathProvider, StraightLineProvider, UnroutableProvider};
pub use terrain::{HeightField, HeightSampler, NoTerrain};
