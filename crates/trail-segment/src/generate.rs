//! Evenly spaced marker placement along one path segment.

use trail_core::Waypoint;
use trail_nav::HeightSampler;

/// Compute the ordered marker positions for the segment `from → to`.
///
/// The segment emits `ceil(distance / spacing)` placements, floored at one
/// so a zero-length segment (the sentinel self-pair at the agent end of the
/// trail) still anchors a single marker instead of dividing by zero.
/// Placement `j` sits at `t = j / count` along the segment, so the first
/// placement always coincides with `from` and the last stops one step short
/// of `to` — the next segment's `t = 0` marker covers that corner.
///
/// With a sampler, each placement's vertical coordinate is replaced by the
/// terrain height under it plus `vertical_offset`.  A failed sample (outside
/// the surface, or no surface configured) degrades that placement to the
/// path-plane height and logs a warning; it never aborts generation.
///
/// `spacing` must be positive — validated once at controller setup.
pub fn generate_placements<S: HeightSampler>(
    from:            Waypoint,
    to:              Waypoint,
    spacing:         f32,
    sampler:         Option<&S>,
    vertical_offset: f32,
) -> Vec<Waypoint> {
    debug_assert!(spacing > 0.0, "spacing validated at setup");

    let distance = from.distance(to);
    let count = ((distance / spacing).ceil() as usize).max(1);
    let step = 1.0 / count as f32;

    let mut placements = Vec::with_capacity(count);
    for j in 0..count {
        let t = j as f32 * step;
        let mut position = from.lerp(to, t);

        if let Some(sampler) = sampler {
            match sampler.height_at(position.x, position.z) {
                Ok(height) => position = position.with_y(height + vertical_offset),
                Err(err) => {
                    log::warn!(
                        "height sample failed at ({:.3}, {:.3}): {err}; using path height",
                        position.x,
                        position.z
                    );
                }
            }
        }

        placements.push(position);
    }
    placements
}
