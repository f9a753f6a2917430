//! Strongly typed marker handle.
//!
//! Renderers issue one `MarkerHandle` per instantiated marker object and
//! accept it back on destroy.  The inner integer is `pub` so renderer
//! implementations can index their own tables directly; everyone else should
//! treat the handle as opaque.

use std::fmt;

/// Identity of one placed marker, issued by a `MarkerRenderer`.
///
/// `u64` so monotonically allocating renderers never wrap over the life of a
/// process.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MarkerHandle(pub u64);

impl MarkerHandle {
    /// Sentinel meaning "no valid handle".
    pub const INVALID: MarkerHandle = MarkerHandle(u64::MAX);
}

impl Default for MarkerHandle {
    /// Returns the `INVALID` sentinel so uninitialized handles are visibly invalid.
    #[inline(always)]
    fn default() -> Self {
        Self::INVALID
    }
}

impl fmt::Display for MarkerHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MarkerHandle({})", self.0)
    }
}
