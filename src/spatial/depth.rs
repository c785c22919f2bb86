//! Dense per-cell depth storage for a grown spanning tree

use ndarray::Array2;

use crate::spatial::torus::{Cell, Torus};

/// Sentinel depth of a cell that growth has not committed yet
pub const UNVISITED: i64 = -1;

/// Tree depth of every cell, stored as a `height × width` array
///
/// Starts with every cell at `UNVISITED`. Once growth completes every cell
/// holds a depth `>= 0` and only the root holds `0`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepthMap {
    depths: Array2<i64>,
}

impl DepthMap {
    /// Create a map with every cell unvisited
    pub fn unvisited(torus: &Torus) -> Self {
        Self {
            depths: Array2::from_elem((torus.height(), torus.width()), UNVISITED),
        }
    }

    /// Number of columns
    pub fn width(&self) -> usize {
        self.depths.ncols()
    }

    /// Number of rows
    pub fn height(&self) -> usize {
        self.depths.nrows()
    }

    /// Depth at a cell, `None` outside the map
    pub fn get(&self, cell: Cell) -> Option<i64> {
        self.depths.get((cell.y, cell.x)).copied()
    }

    pub(crate) fn set(&mut self, cell: Cell, depth: i64) {
        if let Some(slot) = self.depths.get_mut((cell.y, cell.x)) {
            *slot = depth;
        }
    }

    /// Check if a cell has been committed by growth
    pub fn is_visited(&self, cell: Cell) -> bool {
        self.get(cell).is_some_and(|depth| depth != UNVISITED)
    }

    /// Check if no cell remains at the unvisited sentinel
    pub fn is_complete(&self) -> bool {
        self.depths.iter().all(|&depth| depth >= 0)
    }

    /// Depth of the growth root, `Some(0)` once growth has started
    pub fn root_depth(&self) -> Option<i64> {
        self.get(Torus::root())
    }

    /// Largest committed depth, `None` if nothing is visited
    pub fn max_depth(&self) -> Option<i64> {
        self.depths.iter().copied().filter(|&d| d >= 0).max()
    }

    /// Read-only view of the underlying `(row, column)` array
    pub const fn as_array(&self) -> &Array2<i64> {
        &self.depths
    }
}
