//! Command-line interface for generating a single sky pattern PNG

use crate::algorithm::executor::{PatternConfig, SkyPattern};
use crate::io::configuration::{
    DEFAULT_HEIGHT, DEFAULT_OUTPUT, DEFAULT_SEED, DEFAULT_SINE_PERIOD, DEFAULT_WIDTH,
};
use crate::io::error::Result;
use crate::io::image::export_png;
use crate::io::progress::{Phase, ProgressManager};
use crate::render::color::parse_color;
use crate::render::weights::{DepthWeight, LinearFalloff, SineFalloff};
use clap::{Parser, ValueEnum};
use image::Rgba;
use std::path::PathBuf;
use tracing::info;

/// Depth-to-weight curve selectable from the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Falloff {
    /// `1 - sin(depth / scale)`
    Sine,
    /// `1 - depth / scale`
    Linear,
}

impl Falloff {
    /// Build the weight strategy for this curve
    ///
    /// # Errors
    ///
    /// Returns `SkyError::InvalidParameter` if `scale` is not finite and positive
    pub fn build(self, scale: f64) -> Result<Box<dyn DepthWeight>> {
        let weight: Box<dyn DepthWeight> = match self {
            Self::Sine => Box::new(SineFalloff::new(scale)?),
            Self::Linear => Box::new(LinearFalloff::new(scale)?),
        };
        Ok(weight)
    }
}

#[derive(Parser, Debug)]
#[command(name = "skypattern")]
#[command(
    author,
    version,
    about = "Generate sky-like patterns from random spanning trees on a torus"
)]
/// Command-line arguments for the pattern generation tool
pub struct Cli {
    /// Output PNG path
    #[arg(short, long, value_name = "FILE", default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Random seed for reproducible generation
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Width in pixels
    #[arg(short = 'w', long, default_value_t = DEFAULT_WIDTH)]
    pub width: usize,

    /// Height in pixels (defaults to the width)
    #[arg(short = 'H', long)]
    pub height: Option<usize>,

    /// Color near the root, as r,g,b[,a] or #rrggbb[aa]
    #[arg(short = 'a', long, value_parser = parse_color, default_value = "70,140,200,255")]
    pub color_a: Rgba<u8>,

    /// Color deep in the tree, as r,g,b[,a] or #rrggbb[aa]
    #[arg(short = 'b', long, value_parser = parse_color, default_value = "230,245,255,255")]
    pub color_b: Rgba<u8>,

    /// Depth-to-weight curve
    #[arg(short, long, value_enum, default_value_t = Falloff::Sine)]
    pub falloff: Falloff,

    /// Depth scale of the falloff curve
    #[arg(long, default_value_t = DEFAULT_SINE_PERIOD)]
    pub scale: f64,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Pattern parameters described by the arguments
    pub fn pattern_config(&self) -> PatternConfig {
        PatternConfig {
            seed: self.seed,
            width: self.width,
            height: self.height.unwrap_or(self.width),
            color_a: self.color_a,
            color_b: self.color_b,
        }
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

impl Default for Cli {
    fn default() -> Self {
        let config = PatternConfig::default();
        Self {
            output: PathBuf::from(DEFAULT_OUTPUT),
            seed: config.seed,
            width: config.width,
            height: Some(DEFAULT_HEIGHT),
            color_a: config.color_a,
            color_b: config.color_b,
            falloff: Falloff::Sine,
            scale: DEFAULT_SINE_PERIOD,
            quiet: false,
        }
    }
}

/// Runs one generate-and-save job with progress reporting
pub struct PatternJob {
    cli: Cli,
    progress: ProgressManager,
}

impl PatternJob {
    /// Create a job for the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress = if cli.should_show_progress() {
            let name = cli.output.file_name().unwrap_or_default().to_string_lossy();
            ProgressManager::new(&name)
        } else {
            ProgressManager::hidden()
        };

        Self { cli, progress }
    }

    /// Grow, render and write the pattern
    ///
    /// All parameters are validated before growth starts, so a bad
    /// argument never leaves a partial file behind.
    ///
    /// # Errors
    ///
    /// Returns an error if a parameter is invalid or the PNG cannot be written
    pub fn run(&self) -> Result<()> {
        let config = self.cli.pattern_config();
        config.validate()?;
        let weight = self.cli.falloff.build(self.cli.scale)?;

        self.progress.start(Phase::Grow);
        let pattern = SkyPattern::grow(config)?;
        self.progress.complete(Phase::Grow);

        self.progress.start(Phase::Render);
        let buffer = pattern.render(&*weight)?;
        self.progress.complete(Phase::Render);

        self.progress.start(Phase::Export);
        export_png(&buffer, &self.cli.output)?;
        self.progress.complete(Phase::Export);

        self.progress.finish();
        info!(
            path = %self.cli.output.display(),
            width = buffer.width(),
            height = buffer.height(),
            "pattern written"
        );
        Ok(())
    }

    /// Phases completed so far
    pub fn completed_phases(&self) -> u64 {
        self.progress.completed()
    }
}
