//! Tail-anchored waypoint sequence diff.
//!
//! Recomputing a path for a moving agent typically keeps the
//! destination-side corners fixed and only perturbs corners near the agent,
//! so the diff walks both sequences from their tails and stops at the first
//! corner that moved.  Everything from that corner down to the agent end is
//! the changed span.

use trail_core::Waypoint;

/// Corners closer than this (by position-vector magnitude) count as unmoved.
///
/// Deliberately compares magnitudes rather than true point-to-point
/// distance; the regeneration behavior downstream is tuned to this exact
/// heuristic.
pub const CORNER_TOLERANCE: f32 = 0.5;

/// Tolerance-based corner equality: exactly equal, or magnitudes within
/// [`CORNER_TOLERANCE`].
#[inline]
fn corners_match(a: Waypoint, b: Waypoint) -> bool {
    a == b || (a.length() - b.length()).abs() < CORNER_TOLERANCE
}

/// Number of trailing waypoints that must be re-rendered when `old` is
/// replaced by `new`.
///
/// Walks both sequences from their own last index in lockstep (sequences of
/// different lengths stay tail-aligned).  At the first mismatching pair the
/// changed-count is `max(old_index, new_index) + 1` — the whole agent-side
/// span up to and including the mismatch.  If either sequence is exhausted
/// without a mismatch, the count is the length difference: the surviving
/// possibility is corners inserted or dropped at the agent end, and for two
/// identical sequences this is 0.
pub fn changed_count(old: &[Waypoint], new: &[Waypoint]) -> usize {
    let mut i = old.len();
    let mut j = new.len();
    while i > 0 && j > 0 {
        if !corners_match(old[i - 1], new[j - 1]) {
            // i and j are one past the mismatching indices.
            return i.max(j);
        }
        i -= 1;
        j -= 1;
    }
    old.len().abs_diff(new.len())
}
