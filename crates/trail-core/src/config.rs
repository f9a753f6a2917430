//! Trail configuration surface.

use crate::{TrailError, TrailResult};

/// Tunable parameters for a trail controller instance.
///
/// Typically loaded from a TOML/JSON file by the application crate (enable
/// the `serde` feature) and validated once before the poll loop starts —
/// configuration errors are fatal at setup, never mid-cycle.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrailConfig {
    /// Distance between consecutive markers along a segment, in world units.
    /// Must be positive; values in `(0, 1]` keep trails visually continuous.
    pub particle_spacing: f32,

    /// Seconds between path recompute cycles.  The controller reports this
    /// back to the host after each cycle; it never sleeps itself.
    pub poll_interval_secs: f32,

    /// Agent-to-destination distance below which the trail settles and
    /// polling stops.
    pub reach_threshold: f32,

    /// Added to every terrain-sampled height so markers rest on the surface
    /// rather than intersecting it.
    pub vertical_offset: f32,
}

impl Default for TrailConfig {
    fn default() -> Self {
        Self {
            particle_spacing:   0.5,
            poll_interval_secs: 0.3,
            reach_threshold:    1.5,
            vertical_offset:    0.5,
        }
    }
}

impl TrailConfig {
    /// Reject unusable parameter combinations.
    ///
    /// # Errors
    ///
    /// - [`TrailError::InvalidSpacing`] if `particle_spacing <= 0` (it is a
    ///   divisor in marker-count math);
    /// - [`TrailError::InvalidPollInterval`] if `poll_interval_secs <= 0`.
    pub fn validate(&self) -> TrailResult<()> {
        if !(self.particle_spacing > 0.0) {
            return Err(TrailError::InvalidSpacing(self.particle_spacing));
        }
        if !(self.poll_interval_secs > 0.0) {
            return Err(TrailError::InvalidPollInterval(self.poll_interval_secs));
        }
        Ok(())
    }
}
