//! `trail-segment` — marker placement and segment ownership.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                     |
//! |--------------|---------------------------------------------------------------|
//! | [`renderer`] | `MarkerRenderer` trait, `NullRenderer`, `RecordingRenderer`  |
//! | [`generate`] | evenly spaced, terrain-projected marker placement             |
//! | [`store`]    | `Marker`, `Segment`, `SegmentStore`                          |
//!
//! # Ownership model
//!
//! The [`SegmentStore`] owns its [`Segment`]s by value and each segment owns
//! its [`Marker`]s; a marker's renderer-side object lives exactly as long as
//! its segment does.  Destruction is a store operation
//! ([`SegmentStore::trim_tail`]), never ad-hoc handle juggling, so no
//! dangling handle can survive a trim.

pub mod generate;
pub mod renderer;
pub mod store;


pub use generate::generate_placements;
pub use renderer::{MarkerRenderer, NullRenderer, RecordingRenderer};
pub use store::{Marker, Segment, SegmentStore};
