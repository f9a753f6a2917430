//! The 3-D waypoint type and its vector helpers.
//!
//! `Waypoint` uses `f32` components — trail geometry lives at human scale
//! (metres, tens of metres), where single precision is exact far beyond the
//! 0.5-unit tolerances used elsewhere in the framework.

/// A point on a computed navigation path.
///
/// Index 0 of a waypoint sequence is the corner nearest the moving agent;
/// the last index is the destination.  `y` is the vertical axis; terrain
/// sampling operates on the `(x, z)` horizontal plane.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Waypoint {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Waypoint {
    #[inline]
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Euclidean distance to `other`.
    pub fn distance(self, other: Waypoint) -> f32 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        let dz = other.z - self.z;
        (dx * dx + dy * dy + dz * dz).sqrt()
    }

    /// Magnitude of the position vector (distance from the origin).
    pub fn length(self) -> f32 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// Per-axis linear interpolation from `self` toward `other`.
    ///
    /// `t = 0` yields `self`, `t = 1` yields `other`.  `t` is not clamped;
    /// callers that step `t` in `[0, 1)` get points strictly inside the
    /// segment.
    pub fn lerp(self, other: Waypoint, t: f32) -> Waypoint {
        Waypoint {
            x: self.x + (other.x - self.x) * t,
            y: self.y + (other.y - self.y) * t,
            z: self.z + (other.z - self.z) * t,
        }
    }

    /// Replace the vertical component, keeping the horizontal position.
    #[inline]
    pub fn with_y(self, y: f32) -> Waypoint {
        Waypoint { y, ..self }
    }
}

impl std::fmt::Display for Waypoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.3}, {:.3}, {:.3})", self.x, self.y, self.z)
    }
}
