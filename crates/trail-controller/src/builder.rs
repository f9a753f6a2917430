//! Fluent builder for constructing a [`TrailController`].

use trail_core::TrailConfig;
use trail_nav::{HeightSampler, NoTerrain, PathProvider};
use trail_segment::MarkerRenderer;

use crate::{ControllerResult, TrailController};

/// Fluent builder for [`TrailController<P, M, H>`].
///
/// # Required inputs
///
/// - [`TrailConfig`] — spacing, poll interval, reach threshold, offset
/// - `P: PathProvider` — the navigation solver
/// - `M: MarkerRenderer` — the marker host
///
/// # Optional inputs
///
/// | Method         | Default                                          |
/// |----------------|---------------------------------------------------|
/// | `.terrain(s)`  | none — markers keep path-plane height             |
///
/// # Example
///
/// ```rust,ignore
/// let mut controller =
///     TrailControllerBuilder::new(TrailConfig::default(), provider, renderer)
///         .terrain(height_field)
///         .build()?;
/// controller.set_destination(target);
/// ```
pub struct TrailControllerBuilder<P: PathProvider, M: MarkerRenderer, H: HeightSampler = NoTerrain>
{
    config:   TrailConfig,
    provider: P,
    renderer: M,
    terrain:  Option<H>,
}

impl<P: PathProvider, M: MarkerRenderer> TrailControllerBuilder<P, M> {
    /// Create a builder with all required inputs and no terrain.
    pub fn new(config: TrailConfig, provider: P, renderer: M) -> Self {
        Self { config, provider, renderer, terrain: None }
    }
}

impl<P: PathProvider, M: MarkerRenderer, H: HeightSampler> TrailControllerBuilder<P, M, H> {
    /// Supply the terrain surface markers are projected onto.
    ///
    /// Without one, markers stay at path-plane height and no vertical offset
    /// is applied.
    pub fn terrain<H2: HeightSampler>(self, terrain: H2) -> TrailControllerBuilder<P, M, H2> {
        TrailControllerBuilder {
            config:   self.config,
            provider: self.provider,
            renderer: self.renderer,
            terrain:  Some(terrain),
        }
    }

    /// Validate the configuration and return a ready controller.
    ///
    /// # Errors
    ///
    /// [`ControllerError::Config`][crate::ControllerError::Config] if the
    /// configuration is rejected (non-positive spacing or poll interval) —
    /// configuration is checked exactly once, before any cycle runs.
    pub fn build(self) -> ControllerResult<TrailController<P, M, H>> {
        self.config.validate()?;
        Ok(TrailController::from_parts(
            self.config,
            self.provider,
            self.renderer,
            self.terrain,
        ))
    }
}
