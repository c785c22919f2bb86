//! Grow-then-render pipeline producing a finished pattern

use std::time::Instant;

use image::Rgba;
use tracing::debug;

use crate::algorithm::grower::{SpanningTree, grow_tree};
use crate::io::configuration::{
    DEFAULT_COLOR_A, DEFAULT_COLOR_B, DEFAULT_HEIGHT, DEFAULT_SEED, DEFAULT_WIDTH,
};
use crate::io::error::Result;
use crate::render::renderer::{PixelBuffer, render};
use crate::render::weights::DepthWeight;
use crate::spatial::{DepthMap, Torus};

/// Parameters of one generated pattern
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PatternConfig {
    /// Seed of the priority generator
    pub seed: u64,
    /// Image width in pixels
    pub width: usize,
    /// Image height in pixels
    pub height: usize,
    /// Color at weight 1
    pub color_a: Rgba<u8>,
    /// Color at weight 0
    pub color_b: Rgba<u8>,
}

impl Default for PatternConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            color_a: Rgba(DEFAULT_COLOR_A),
            color_b: Rgba(DEFAULT_COLOR_B),
        }
    }
}

impl PatternConfig {
    /// Validate the dimensions and build the grid they describe
    ///
    /// # Errors
    ///
    /// Returns `SkyError::InvalidParameter` if either dimension is zero or
    /// exceeds the grid limit
    pub fn validate(&self) -> Result<Torus> {
        Torus::new(self.width, self.height)
    }
}

/// A grown spanning tree together with the colors it will be rendered with
#[derive(Debug, Clone)]
pub struct SkyPattern {
    config: PatternConfig,
    tree: SpanningTree,
}

impl SkyPattern {
    /// Validate the configuration and grow the tree
    ///
    /// # Errors
    ///
    /// Returns `SkyError::InvalidParameter` for invalid dimensions, before
    /// any growth work starts
    pub fn grow(config: PatternConfig) -> Result<Self> {
        let torus = config.validate()?;

        let start = Instant::now();
        let tree = grow_tree(config.seed, torus);
        let stats = tree.stats();
        debug!(
            seed = config.seed,
            width = torus.width(),
            height = torus.height(),
            pops = stats.pops,
            enqueued = stats.enqueued,
            recommits = stats.recommits,
            max_depth = ?tree.depths().max_depth(),
            elapsed = ?start.elapsed(),
            "spanning tree grown"
        );

        Ok(Self { config, tree })
    }

    /// Configuration the pattern was grown from
    pub const fn config(&self) -> &PatternConfig {
        &self.config
    }

    /// The grown tree
    pub const fn tree(&self) -> &SpanningTree {
        &self.tree
    }

    /// Depth of every cell
    pub const fn depths(&self) -> &DepthMap {
        self.tree.depths()
    }

    /// Shade the grown tree into a pixel buffer
    ///
    /// # Errors
    ///
    /// Returns an error if the depth map cannot be converted into an image
    pub fn render<W: DepthWeight + ?Sized>(&self, weight: &W) -> Result<PixelBuffer> {
        let start = Instant::now();
        let buffer = render(
            self.tree.depths(),
            self.config.color_a,
            self.config.color_b,
            weight,
        )?;
        debug!(
            pixels = self.tree.torus().cell_count(),
            elapsed = ?start.elapsed(),
            "pattern rendered"
        );
        Ok(buffer)
    }
}

/// Grow a tree for `config` and render it with `weight`
///
/// # Errors
///
/// Returns `SkyError::InvalidParameter` for invalid dimensions; nothing is
/// grown or rendered in that case
pub fn generate_pattern<W: DepthWeight + ?Sized>(
    config: &PatternConfig,
    weight: &W,
) -> Result<PixelBuffer> {
    SkyPattern::grow(*config)?.render(weight)
}
