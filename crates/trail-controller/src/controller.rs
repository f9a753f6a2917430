//! The `TrailController` and its recompute cycle.

use trail_core::{TrailConfig, Waypoint};
use trail_nav::{HeightSampler, NoTerrain, PathProvider};
use trail_segment::{generate_placements, Marker, MarkerRenderer, Segment, SegmentStore};

use crate::diff;
use crate::TrailObserver;

// ── States and outcomes ───────────────────────────────────────────────────────

/// Where the controller is in its lifecycle.
///
/// `Diffing` and `Regenerating` are transient — they are only observable
/// from inside a `poll` call (e.g. via observer callbacks); between polls
/// the controller rests in `Idle`, `AwaitingPath`, or `Settled`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ControllerState {
    /// No destination set; polling does nothing.
    Idle,
    /// A recompute cycle is due — the next poll will request a path.
    AwaitingPath,
    /// Comparing the fresh corner sequence against the stored one.
    Diffing,
    /// Trimming and respawning the changed trailing segments.
    Regenerating,
    /// Destination reached; terminal until the next `set_destination`.
    Settled,
}

/// What the host should do after a poll.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum PollOutcome {
    /// No destination is set; nothing to schedule.
    Idle,
    /// Run another cycle after `after_secs` (the configured poll interval).
    Repoll { after_secs: f32 },
    /// Destination reached; all segments cleared, stop polling.
    Settled,
}

// ── TrailController ───────────────────────────────────────────────────────────

/// Orchestrates the periodic recompute cycle.
///
/// One controller instance exclusively owns its [`SegmentStore`] and stored
/// waypoint sequence; the diff and generator stages are pure functions, so
/// there is no shared mutable state anywhere in a cycle.  The host drives
/// time: it calls [`poll`][Self::poll] and honors the returned
/// [`PollOutcome`], suspending for the poll interval between cycles.
///
/// # Type parameters
///
/// - `P`: the navigation solver ([`PathProvider`]).
/// - `M`: the marker host ([`MarkerRenderer`]).
/// - `H`: the terrain surface ([`HeightSampler`]); defaults to [`NoTerrain`]
///   for setups without height projection.
///
/// # Cancellation
///
/// [`set_destination`][Self::set_destination] supersedes any in-flight
/// schedule: it bumps the generation counter, clears every live segment, and
/// resets the stored sequence, so a stale `Repoll` directive the host still
/// holds simply starts the first cycle toward the new destination.  Hosts
/// that keep their own timers can compare [`generation`][Self::generation]
/// to discard them explicitly.
pub struct TrailController<P: PathProvider, M: MarkerRenderer, H: HeightSampler = NoTerrain> {
    config:   TrailConfig,
    provider: P,
    renderer: M,
    terrain:  Option<H>,

    /// Live segments, tail = nearest the agent.
    store: SegmentStore,
    /// Last known-good corner sequence (agent end at index 0).
    waypoints: Vec<Waypoint>,
    destination: Option<Waypoint>,
    destination_reached: bool,

    state: ControllerState,
    /// Bumped by every `set_destination`; identifies the current pursuit.
    generation: u64,
    /// Completed recompute cycles since construction.
    cycle: u64,
}

impl<P: PathProvider, M: MarkerRenderer, H: HeightSampler> TrailController<P, M, H> {
    pub(crate) fn from_parts(
        config:   TrailConfig,
        provider: P,
        renderer: M,
        terrain:  Option<H>,
    ) -> Self {
        Self {
            config,
            provider,
            renderer,
            terrain,
            store: SegmentStore::new(),
            waypoints: Vec::new(),
            destination: None,
            destination_reached: false,
            state: ControllerState::Idle,
            generation: 0,
            cycle: 0,
        }
    }

    // ── Public API ────────────────────────────────────────────────────────

    /// Begin pursuing `target`.
    ///
    /// Cancels whatever the controller was doing: the existing trail is
    /// destroyed immediately, the stored sequence is reset, and the next
    /// [`poll`][Self::poll] runs the first cycle toward `target`.  Callable
    /// from any state, including `Settled`.
    pub fn set_destination(&mut self, target: Waypoint) {
        self.generation += 1;
        self.destination = Some(target);
        self.destination_reached = false;
        self.waypoints.clear();
        self.store.clear(&mut self.renderer);
        self.state = ControllerState::AwaitingPath;
    }

    /// Run one recompute cycle.
    ///
    /// Requests a fresh path, checks the reach threshold, diffs, and
    /// rebuilds the changed trailing segments.  Navigation failures are
    /// absorbed: the last known-good trail stays up and the returned
    /// outcome still asks the host to re-poll.
    pub fn poll<O: TrailObserver>(&mut self, agent_pos: Waypoint, observer: &mut O) -> PollOutcome {
        // Top-of-cycle check: a settled or destination-less controller does
        // no work, so a stale host timer firing late is harmless.
        let Some(destination) = self.destination else {
            self.state = ControllerState::Idle;
            return PollOutcome::Idle;
        };
        if self.state == ControllerState::Settled {
            return PollOutcome::Settled;
        }

        self.cycle += 1;
        observer.on_cycle_start(self.cycle);

        // ── AWAITING_PATH: ask the solver for fresh corners ───────────────
        self.state = ControllerState::AwaitingPath;
        let new_waypoints = match self.provider.request_path(agent_pos, destination) {
            Ok(corners) => corners,
            Err(err) => {
                log::warn!("path request failed: {err}; keeping last known path");
                observer.on_path_failure(&err);
                return self.repoll();
            }
        };

        // ── DIFFING: settle or compute the changed span ───────────────────
        self.state = ControllerState::Diffing;
        if agent_pos.distance(destination) < self.config.reach_threshold {
            self.destination_reached = true;
            let cleared = self.store.clear(&mut self.renderer);
            if cleared > 0 {
                observer.on_segments_cleared(cleared);
            }
            self.state = ControllerState::Settled;
            observer.on_settled();
            return PollOutcome::Settled;
        }

        let changed = diff::changed_count(&self.waypoints, &new_waypoints);
        observer.on_diff(changed);
        if changed == 0 {
            return self.repoll();
        }

        // ── REGENERATING: adopt the new sequence, trim, respawn ───────────
        self.state = ControllerState::Regenerating;
        self.waypoints = new_waypoints;

        let cleared = self.store.trim_tail(changed, &mut self.renderer);
        if cleared > 0 {
            observer.on_segments_cleared(cleared);
        }
        // Clamp to the sequence length so no spawn can index out of bounds.
        let (segments, markers) = self.spawn_segments(changed.min(self.waypoints.len()));
        observer.on_segments_spawned(segments, markers);

        self.repoll()
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn state(&self) -> ControllerState {
        self.state
    }

    pub fn destination_reached(&self) -> bool {
        self.destination_reached
    }

    /// The pursuit generation, bumped by each `set_destination`.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// The last known-good corner sequence.
    pub fn waypoints(&self) -> &[Waypoint] {
        &self.waypoints
    }

    /// The live segments.
    pub fn store(&self) -> &SegmentStore {
        &self.store
    }

    /// The marker renderer (e.g. for host-side inspection).
    pub fn renderer(&self) -> &M {
        &self.renderer
    }

    // ── Internals ─────────────────────────────────────────────────────────

    fn repoll(&mut self) -> PollOutcome {
        self.state = ControllerState::AwaitingPath;
        PollOutcome::Repoll { after_secs: self.config.poll_interval_secs }
    }

    /// Spawn segments for waypoint-pair indices `count-1 ..= 0`, appending
    /// toward the agent so the store tail stays agent-side.
    ///
    /// Index `i > 0` spans `waypoints[i] → waypoints[i-1]`; index 0 has no
    /// predecessor and becomes the sentinel self-pair, which the generator
    /// resolves to a single marker anchoring the agent end.
    fn spawn_segments(&mut self, count: usize) -> (usize, usize) {
        let mut marker_total = 0;
        for i in (0..count).rev() {
            let from = self.waypoints[i];
            let to = if i == 0 { from } else { self.waypoints[i - 1] };

            let placements = generate_placements(
                from,
                to,
                self.config.particle_spacing,
                self.terrain.as_ref(),
                self.config.vertical_offset,
            );
            marker_total += placements.len();

            let markers = placements
                .into_iter()
                .map(|position| Marker {
                    position,
                    handle: self.renderer.create_marker(position),
                })
                .collect();
            self.store.append(Segment { index: i, markers });
        }
        (count, marker_total)
    }
}
