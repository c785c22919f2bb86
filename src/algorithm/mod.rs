/// End-to-end pattern generation pipeline
pub mod executor;
/// Random-priority frontier of pending tree edges
pub mod frontier;
/// Spanning-tree growth producing per-cell depths
pub mod grower;
