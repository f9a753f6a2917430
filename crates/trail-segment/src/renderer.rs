//! Marker renderer trait and the bundled implementations.

use trail_core::{MarkerHandle, Waypoint};

/// Pluggable host-side marker instantiation.
///
/// The framework treats marker objects as opaque: it asks for one at a
/// position, keeps the returned handle, and gives the handle back when the
/// owning segment is destroyed.  Implementations wrap whatever the host
/// scene actually is — game objects, GPU instances, debug gizmos.
pub trait MarkerRenderer {
    /// Instantiate a marker object at `position` and return its identity.
    fn create_marker(&mut self, position: Waypoint) -> MarkerHandle;

    /// Destroy the marker object behind `handle`.
    ///
    /// Called exactly once per handle, always before the owning segment's
    /// record is forgotten.
    fn destroy(&mut self, handle: MarkerHandle);
}

/// A [`MarkerRenderer`] that allocates handles but renders nothing.
///
/// Use when the trail state machine should run without any visual output.
#[derive(Default)]
pub struct NullRenderer {
    next: u64,
}

impl MarkerRenderer for NullRenderer {
    fn create_marker(&mut self, _position: Waypoint) -> MarkerHandle {
        let handle = MarkerHandle(self.next);
        self.next += 1;
        handle
    }

    fn destroy(&mut self, _handle: MarkerHandle) {}
}

/// A [`MarkerRenderer`] that records every create and destroy.
///
/// Backs the framework's own tests (exact destroy counts, idempotence) and
/// is handy for host-side debugging.
#[derive(Default)]
pub struct RecordingRenderer {
    next: u64,
    /// Handles created and not yet destroyed, with their positions.
    pub live: Vec<(MarkerHandle, Waypoint)>,
    /// Total `create_marker` calls over the renderer's lifetime.
    pub created: usize,
    /// Total `destroy` calls over the renderer's lifetime.
    pub destroyed: usize,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of markers currently alive.
    pub fn live_count(&self) -> usize {
        self.live.len()
    }

    /// `true` if every handle was destroyed at most once and only after
    /// being created.
    pub fn is_balanced(&self) -> bool {
        self.created == self.destroyed + self.live.len()
    }

    /// Positions of live markers in creation order.
    pub fn live_positions(&self) -> Vec<Waypoint> {
        self.live.iter().map(|(_, p)| *p).collect()
    }
}

impl MarkerRenderer for RecordingRenderer {
    fn create_marker(&mut self, position: Waypoint) -> MarkerHandle {
        let handle = MarkerHandle(self.next);
        self.next += 1;
        self.created += 1;
        self.live.push((handle, position));
        handle
    }

    fn destroy(&mut self, handle: MarkerHandle) {
        let before = self.live.len();
        self.live.retain(|(h, _)| *h != handle);
        debug_assert_eq!(before, self.live.len() + 1, "double destroy of {handle}");
        self.destroyed += 1;
    }
}
