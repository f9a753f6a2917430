//! Path-provider trait and the degenerate straight-line implementation.

use trail_core::Waypoint;

use crate::{NavError, NavResult};

/// Pluggable navigation path source.
///
/// Implementations wrap whatever actually solves paths — a navigation mesh,
/// a road graph, a remote service.  The controller only needs the corner
/// sequence.
///
/// # Contract
///
/// - A successful result contains at least the start and end point, ordered
///   from the querying agent (index 0) to the destination (last index).
/// - Return [`NavError::NoPath`] when the destination is unreachable; the
///   controller treats this as non-fatal and retries on its next poll.
///
/// `request_path` takes `&mut self` because real solvers cache queries and
/// maintain internal cursors.
pub trait PathProvider {
    /// Compute the corner sequence from `from` to `to`.
    fn request_path(&mut self, from: Waypoint, to: Waypoint) -> NavResult<Vec<Waypoint>>;
}

/// A provider that routes every query as a single straight segment.
///
/// Stands in for a real solver on obstacle-free ground: the returned path is
/// always `[from, to]`.  Useful for demos and as the simplest conforming
/// implementation.
pub struct StraightLineProvider;

impl PathProvider for StraightLineProvider {
    fn request_path(&mut self, from: Waypoint, to: Waypoint) -> NavResult<Vec<Waypoint>> {
        Ok(vec![from, to])
    }
}

/// A provider that always fails, for hosts that want to wire the controller
/// before a real solver exists.
pub struct UnroutableProvider;

impl PathProvider for UnroutableProvider {
    fn request_path(&mut self, from: Waypoint, to: Waypoint) -> NavResult<Vec<Waypoint>> {
        Err(NavError::NoPath { from, to })
    }
}
