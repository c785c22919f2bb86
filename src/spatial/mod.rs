//! Spatial data structures for the toroidal grid
//!
//! This module contains spatial-related functionality including:
//! - Grid dimensions, wrap-around and neighbourhoods
//! - Per-cell depth storage produced by tree growth

/// Depth map storage with the unvisited sentinel
pub mod depth;
/// Toroidal grid topology and cell coordinates
pub mod torus;

pub use depth::DepthMap;
pub use torus::{Cell, Torus};
