//! Controller observer trait for progress reporting and instrumentation.

use trail_nav::NavError;

/// Callbacks invoked by [`TrailController::poll`][crate::TrailController::poll]
/// at key points in the recompute cycle.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — cycle printer
///
/// ```rust,ignore
/// struct CyclePrinter;
///
/// impl TrailObserver for CyclePrinter {
///     fn on_diff(&mut self, changed: usize) {
///         if changed > 0 {
///             println!("rebuilding {changed} trailing segments");
///         }
///     }
/// }
/// ```
pub trait TrailObserver {
    /// Called at the start of each recompute cycle with a monotonically
    /// increasing cycle number.
    fn on_cycle_start(&mut self, _cycle: u64) {}

    /// Called when the path provider cannot route to the destination.  The
    /// controller keeps its last known-good trail and retries next poll.
    fn on_path_failure(&mut self, _err: &NavError) {}

    /// Called after the diff with the number of trailing waypoints that
    /// changed (0 means the trail is left untouched this cycle).
    fn on_diff(&mut self, _changed: usize) {}

    /// Called after stale segments were destroyed.
    fn on_segments_cleared(&mut self, _segments: usize) {}

    /// Called after the changed span was regenerated.
    fn on_segments_spawned(&mut self, _segments: usize, _markers: usize) {}

    /// Called once when the agent comes within the reach threshold and the
    /// controller settles.
    fn on_settled(&mut self) {}
}

/// A [`TrailObserver`] that does nothing.  Use when you need to call `poll`
/// but don't want progress callbacks.
pub struct NoopObserver;

impl TrailObserver for NoopObserver {}
