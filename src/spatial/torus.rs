//! Toroidal grid topology with wrap-around in both axes
//!
//! Every cell has exactly four neighbours: stepping off any edge lands on the
//! opposite edge. Degenerate grids one cell wide or tall wrap onto themselves,
//! so a cell can be its own horizontal or vertical neighbour.

use crate::io::configuration::MAX_GRID_DIMENSION;
use crate::io::error::{Result, invalid_parameter};

/// Integer cell coordinate on the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    /// Column, `0 <= x < width`
    pub x: usize,
    /// Row, `0 <= y < height`
    pub y: usize,
}

impl Cell {
    /// Create a cell at column `x`, row `y`
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

/// Validated dimensions of a `width × height` toroidal lattice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Torus {
    width: usize,
    height: usize,
}

impl Torus {
    /// Create a torus after validating both dimensions
    ///
    /// # Errors
    ///
    /// Returns `SkyError::InvalidParameter` if either dimension is zero or
    /// exceeds `MAX_GRID_DIMENSION`
    pub fn new(width: usize, height: usize) -> Result<Self> {
        validate_dimension("width", width)?;
        validate_dimension("height", height)?;
        Ok(Self { width, height })
    }

    /// Number of columns
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Number of rows
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Total number of cells
    pub const fn cell_count(&self) -> usize {
        self.width * self.height
    }

    /// The fixed growth root at the top-left corner
    pub const fn root() -> Cell {
        Cell::new(0, 0)
    }

    /// Check if a cell lies inside the lattice
    pub const fn contains(&self, cell: Cell) -> bool {
        cell.x < self.width && cell.y < self.height
    }

    /// Row-major index of a cell
    pub const fn index(&self, cell: Cell) -> usize {
        cell.y * self.width + cell.x
    }

    /// Wrapped neighbours in the order up, down, left, right
    pub const fn neighbors(&self, cell: Cell) -> [Cell; 4] {
        let up = if cell.y == 0 {
            self.height - 1
        } else {
            cell.y - 1
        };
        let down = if cell.y + 1 >= self.height {
            0
        } else {
            cell.y + 1
        };
        let left = if cell.x == 0 { self.width - 1 } else { cell.x - 1 };
        let right = if cell.x + 1 >= self.width {
            0
        } else {
            cell.x + 1
        };

        [
            Cell::new(cell.x, up),
            Cell::new(cell.x, down),
            Cell::new(left, cell.y),
            Cell::new(right, cell.y),
        ]
    }

    /// Check if `b` is one wrapped step away from `a`
    pub fn are_adjacent(&self, a: Cell, b: Cell) -> bool {
        self.neighbors(a).contains(&b)
    }

    /// Shortest hop count between two cells with wrap-around
    pub const fn distance(&self, a: Cell, b: Cell) -> usize {
        let dx = a.x.abs_diff(b.x);
        let dy = a.y.abs_diff(b.y);
        let wrapped_dx = if dx * 2 > self.width {
            self.width - dx
        } else {
            dx
        };
        let wrapped_dy = if dy * 2 > self.height {
            self.height - dy
        } else {
            dy
        };
        wrapped_dx + wrapped_dy
    }

    /// All cells in row-major order
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.height).flat_map(move |y| (0..self.width).map(move |x| Cell::new(x, y)))
    }
}

fn validate_dimension(parameter: &'static str, value: usize) -> Result<()> {
    if value == 0 {
        return Err(invalid_parameter(parameter, &value, &"must be positive"));
    }
    if value > MAX_GRID_DIMENSION {
        return Err(invalid_parameter(
            parameter,
            &value,
            &format!("must not exceed {MAX_GRID_DIMENSION}"),
        ));
    }
    Ok(())
}
