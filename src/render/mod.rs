//! Depth-to-color rendering

/// Channel interpolation and color parsing
pub mod color;
/// Per-cell shading and the data-parallel render pass
pub mod renderer;
/// Depth-to-weight strategies
pub mod weights;
