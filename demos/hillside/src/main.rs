//! hillside — smallest end-to-end scenario for the navigation-trail framework.
//!
//! An agent wanders across a synthetic hillside toward a beacon while the
//! trail controller re-renders the marker trail between them each poll.
//! The agent's movement is jittered so path recomputes genuinely perturb the
//! agent-side corners, exercising the incremental diff: most cycles rebuild
//! only one or two trailing segments.
//!
//! Run with `RUST_LOG=warn cargo run -p hillside` to also see degradation
//! warnings (none are expected on this surface).

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use trail_controller::{PollOutcome, TrailControllerBuilder, TrailObserver};
use trail_core::{TrailConfig, Waypoint};
use trail_nav::{HeightField, NavError, StraightLineProvider};
use trail_segment::RecordingRenderer;

// ── Constants ─────────────────────────────────────────────────────────────────

const SEED:       u64 = 42;
const STEP:       f32 = 0.9;  // agent ground speed per poll, world units
const JITTER:     f32 = 0.6;  // lateral wobble per poll
const MAX_POLLS:  u32 = 200;

// ── Terrain ───────────────────────────────────────────────────────────────────

/// A 41×41 grid over x,z ∈ [-50, 50]: gentle rolling bumps up to ~3 units.
fn build_hillside() -> HeightField {
    let mut rows = Vec::with_capacity(41);
    for r in 0..41 {
        let z = -50.0 + r as f32 * 2.5;
        let mut row = Vec::with_capacity(41);
        for c in 0..41 {
            let x = -50.0 + c as f32 * 2.5;
            row.push(3.0 * (x / 15.0).sin() * (z / 15.0).cos());
        }
        rows.push(row);
    }
    HeightField::from_rows(-50.0, -50.0, 2.5, rows).expect("static grid is well-formed")
}

// ── Observer ──────────────────────────────────────────────────────────────────

#[derive(Default)]
struct CycleReport {
    cycle:    u64,
    changed:  usize,
    cleared:  usize,
    spawned:  usize,
    markers:  usize,
    failures: usize,
}

impl TrailObserver for CycleReport {
    fn on_cycle_start(&mut self, cycle: u64) {
        self.cycle = cycle;
        self.changed = 0;
        self.cleared = 0;
        self.spawned = 0;
        self.markers = 0;
    }
    fn on_path_failure(&mut self, err: &NavError) {
        self.failures += 1;
        println!("  path failure: {err}");
    }
    fn on_diff(&mut self, changed: usize) {
        self.changed = changed;
    }
    fn on_segments_cleared(&mut self, segments: usize) {
        self.cleared = segments;
    }
    fn on_segments_spawned(&mut self, segments: usize, markers: usize) {
        self.spawned = segments;
        self.markers = markers;
    }
    fn on_settled(&mut self) {
        println!("  destination reached — trail cleared");
    }
}

// ── Main ──────────────────────────────────────────────────────────────────────

fn main() {
    env_logger::init();

    let config = TrailConfig { particle_spacing: 1.0, ..TrailConfig::default() };
    let target = Waypoint::new(35.0, 0.0, 20.0);
    let mut agent = Waypoint::new(-30.0, 0.0, -25.0);

    let mut controller =
        TrailControllerBuilder::new(config, StraightLineProvider, RecordingRenderer::new())
            .terrain(build_hillside())
            .build()
            .expect("default-derived config is valid");
    controller.set_destination(target);

    let mut rng = SmallRng::seed_from_u64(SEED);
    let mut report = CycleReport::default();

    println!("agent {agent} → beacon {target}");

    for _ in 0..MAX_POLLS {
        match controller.poll(agent, &mut report) {
            PollOutcome::Settled => break,
            PollOutcome::Idle => unreachable!("destination was set"),
            PollOutcome::Repoll { .. } => {}
        }

        if report.changed > 0 {
            println!(
                "cycle {:>3}: {} corners changed, {} segments cleared, {} spawned ({} markers) — {} live segments / {} markers",
                report.cycle,
                report.changed,
                report.cleared,
                report.spawned,
                report.markers,
                controller.store().len(),
                controller.store().marker_count(),
            );
        }

        // Advance the agent one step toward the beacon, with lateral wobble.
        let distance = agent.distance(target);
        let t = (STEP / distance).min(1.0);
        agent = agent.lerp(target, t);
        agent.x += rng.gen_range(-JITTER..=JITTER);
        agent.z += rng.gen_range(-JITTER..=JITTER);
    }

    let renderer = controller.renderer();
    println!(
        "done after {} cycles: {} markers created, {} destroyed, {} still live, {} path failures",
        report.cycle, renderer.created, renderer.destroyed, renderer.live_count(), report.failures,
    );
    assert!(renderer.is_balanced(), "every marker destroyed exactly once");
}
