//! Procedural sky patterns grown from randomized spanning trees on a toroidal grid
//!
//! A random-priority frontier grows a spanning tree outward from the top-left
//! cell, recording each cell's tree depth. The depth map is then mapped through
//! a weight function into a two-color gradient to produce an RGBA image.

#![forbid(unsafe_code)]

/// Spanning-tree growth and the end-to-end generation pipeline
pub mod algorithm;
/// Input/output operations, configuration and error handling
pub mod io;
/// Depth-to-color rendering and color interpolation
pub mod render;
/// Toroidal grid topology and depth storage
pub mod spatial;

pub use algorithm::executor::{PatternConfig, generate_pattern};
pub use io::error::{Result, SkyError};
pub use render::renderer::PixelBuffer;
