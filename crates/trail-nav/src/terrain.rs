//! Terrain height sampling.
//!
//! # Data layout
//!
//! [`HeightField`] stores a rectangular grid of height samples in row-major
//! order (one row per `z` step, one column per `x` step).  A world-space
//! query is mapped into grid space and answered by **bilinear interpolation**
//! between the four surrounding samples, so heights vary smoothly between
//! grid points rather than stepping at cell boundaries.

use crate::{NavError, NavResult};

/// Pluggable terrain height source.
///
/// Queried by the segment generator for every marker placement so markers
/// rest on the ground instead of floating at path height.
pub trait HeightSampler {
    /// Terrain height at horizontal position `(x, z)`.
    ///
    /// Returns [`NavError::OutOfBounds`] for queries outside the configured
    /// surface and [`NavError::NoSurface`] when no surface exists at all.
    /// Callers degrade to path-plane height on any error.
    fn height_at(&self, x: f32, z: f32) -> NavResult<f32>;
}

/// The absent terrain surface.
///
/// Exists so controllers built without terrain still have a concrete
/// `HeightSampler` type parameter; every query reports
/// [`NavError::NoSurface`].
pub struct NoTerrain;

impl HeightSampler for NoTerrain {
    fn height_at(&self, _x: f32, _z: f32) -> NavResult<f32> {
        Err(NavError::NoSurface)
    }
}

// ── HeightField ───────────────────────────────────────────────────────────────

/// A rectangular grid of height samples with bilinear interpolation.
///
/// The grid origin is the world position of sample `(0, 0)`; sample
/// `(col, row)` sits at `(origin_x + col * cell_size, origin_z + row *
/// cell_size)`.  Queries anywhere inside the outer sample rectangle succeed;
/// anything outside is [`NavError::OutOfBounds`].
pub struct HeightField {
    origin_x:  f32,
    origin_z:  f32,
    cell_size: f32,
    cols:      usize,
    rows:      usize,
    /// Row-major samples, length `cols * rows`.
    heights:   Vec<f32>,
}

impl HeightField {
    /// Build a field from per-row sample vectors.
    ///
    /// # Errors
    ///
    /// [`NavError::InvalidSurface`] if the grid is smaller than 2×2, the rows
    /// are ragged, or `cell_size` is not positive.
    pub fn from_rows(
        origin_x:  f32,
        origin_z:  f32,
        cell_size: f32,
        rows:      Vec<Vec<f32>>,
    ) -> NavResult<Self> {
        if !(cell_size > 0.0) {
            return Err(NavError::InvalidSurface(format!(
                "cell size must be positive, got {cell_size}"
            )));
        }
        let row_count = rows.len();
        let col_count = rows.first().map_or(0, Vec::len);
        if row_count < 2 || col_count < 2 {
            return Err(NavError::InvalidSurface(format!(
                "grid must be at least 2x2, got {row_count}x{col_count}"
            )));
        }
        if rows.iter().any(|r| r.len() != col_count) {
            return Err(NavError::InvalidSurface("ragged sample rows".into()));
        }

        let mut heights = Vec::with_capacity(row_count * col_count);
        for row in &rows {
            heights.extend_from_slice(row);
        }
        Ok(Self {
            origin_x,
            origin_z,
            cell_size,
            cols: col_count,
            rows: row_count,
            heights,
        })
    }

    /// A level surface covering `cols × rows` samples at uniform `height`.
    pub fn flat(
        origin_x:  f32,
        origin_z:  f32,
        cell_size: f32,
        cols:      usize,
        rows:      usize,
        height:    f32,
    ) -> NavResult<Self> {
        Self::from_rows(origin_x, origin_z, cell_size, vec![vec![height; cols]; rows])
    }

    /// World-space extent of the surface as `(min_x, min_z, max_x, max_z)`.
    pub fn bounds(&self) -> (f32, f32, f32, f32) {
        (
            self.origin_x,
            self.origin_z,
            self.origin_x + (self.cols - 1) as f32 * self.cell_size,
            self.origin_z + (self.rows - 1) as f32 * self.cell_size,
        )
    }

    #[inline]
    fn sample(&self, col: usize, row: usize) -> f32 {
        self.heights[row * self.cols + col]
    }
}

impl HeightSampler for HeightField {
    fn height_at(&self, x: f32, z: f32) -> NavResult<f32> {
        // Grid-space coordinates: sample (0,0) at (0.0, 0.0), one unit per cell.
        let gx = (x - self.origin_x) / self.cell_size;
        let gz = (z - self.origin_z) / self.cell_size;

        let max_x = (self.cols - 1) as f32;
        let max_z = (self.rows - 1) as f32;
        if !(0.0..=max_x).contains(&gx) || !(0.0..=max_z).contains(&gz) {
            return Err(NavError::OutOfBounds { x, z });
        }

        // Lower-left sample of the containing cell; clamp so queries exactly
        // on the far edge interpolate within the last cell.
        let c0 = (gx.floor() as usize).min(self.cols - 2);
        let r0 = (gz.floor() as usize).min(self.rows - 2);
        let fx = gx - c0 as f32;
        let fz = gz - r0 as f32;

        let h00 = self.sample(c0, r0);
        let h10 = self.sample(c0 + 1, r0);
        let h01 = self.sample(c0, r0 + 1);
        let h11 = self.sample(c0 + 1, r0 + 1);

        let near = h00 + (h10 - h00) * fx;
        let far  = h01 + (h11 - h01) * fx;
        Ok(near + (far - near) * fz)
    }
}
