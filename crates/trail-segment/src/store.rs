//! The `SegmentStore` — ordered, exclusively owned segment records.

use trail_core::{MarkerHandle, Waypoint};

use crate::MarkerRenderer;

/// One placed marker: its world position and the renderer's identity for it.
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub position: Waypoint,
    pub handle:   MarkerHandle,
}

/// The visual trail between one consecutive waypoint pair.
///
/// `index` ties the segment to its pair: segment `i` spans `waypoint[i] →
/// waypoint[i-1]`, and segment 0 is the sentinel self-pair anchoring the
/// agent end.  Created by a regenerate cycle, destroyed when
/// [`SegmentStore::trim_tail`] reaches it.
#[derive(Debug)]
pub struct Segment {
    /// Waypoint-pair index this segment renders.
    pub index: usize,
    /// Markers in ascending-`t` order, from `waypoint[index]` toward
    /// `waypoint[index - 1]`.
    pub markers: Vec<Marker>,
}

impl Segment {
    pub fn marker_count(&self) -> usize {
        self.markers.len()
    }
}

/// Ordered collection of live segments.
///
/// Append-at-tail, trim-from-tail: the tail always holds the segments
/// nearest the moving agent, which are exactly the ones a path recompute
/// invalidates first.  Segments are owned by value; removing one destroys
/// every marker it owns through the renderer and fully forgets the record.
#[derive(Default)]
pub struct SegmentStore {
    segments: Vec<Segment>,
}

impl SegmentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a freshly generated segment at the tail.
    pub fn append(&mut self, segment: Segment) {
        self.segments.push(segment);
    }

    /// Remove up to `count` segments from the tail, last-added first.
    ///
    /// `count` is clamped to the current store size — the store never
    /// attempts to remove more than exists.  Every marker owned by a removed
    /// segment is destroyed through `renderer`.  Returns the number of
    /// segments actually removed.
    pub fn trim_tail<M: MarkerRenderer>(&mut self, count: usize, renderer: &mut M) -> usize {
        let removable = count.min(self.segments.len());
        for _ in 0..removable {
            // Pop keeps strict last-added-first-removed order.
            let Some(segment) = self.segments.pop() else { break };
            for marker in &segment.markers {
                renderer.destroy(marker.handle);
            }
        }
        removable
    }

    /// Remove every segment (destination reached, or a new destination set).
    pub fn clear<M: MarkerRenderer>(&mut self, renderer: &mut M) -> usize {
        self.trim_tail(self.segments.len(), renderer)
    }

    /// Number of live segments.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Read-only view of the live segments in append order.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Total markers across all live segments.
    pub fn marker_count(&self) -> usize {
        self.segments.iter().map(Segment::marker_count).sum()
    }
}
