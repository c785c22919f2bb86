//! Pattern constants and runtime configuration defaults

// Default values for configurable parameters
/// Fixed seed for reproducible generation
pub const DEFAULT_SEED: u64 = 0;

/// Default image width in pixels
pub const DEFAULT_WIDTH: usize = 1024;

/// Default image height in pixels
pub const DEFAULT_HEIGHT: usize = 1024;

/// Color used where the weight is 1 (near the root)
pub const DEFAULT_COLOR_A: [u8; 4] = [70, 140, 200, 255];

/// Color used where the weight is 0 (deep in the tree)
pub const DEFAULT_COLOR_B: [u8; 4] = [230, 245, 255, 255];

/// Depth divisor of the default sine falloff
pub const DEFAULT_SINE_PERIOD: f64 = 500.0;

// Safety limit to prevent excessive memory allocation
/// Maximum allowed grid dimension
pub const MAX_GRID_DIMENSION: usize = 10_000;

// Output settings
/// File written when no output path is given
pub const DEFAULT_OUTPUT: &str = "image.png";

/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 30;
