//! Randomized spanning-tree growth over the toroidal grid
//!
//! Growth starts from the root with a zero-length seed edge. Each popped edge
//! discovers the still-unvisited neighbours of its target, queues an edge to
//! each of them under a fresh random key, and then commits the target at the
//! source depth plus the edge length.
//!
//! The unvisited check happens at discovery, not at commit. A cell reachable
//! from several committed cells can therefore be queued more than once, and
//! every pop of such a duplicate commits the target again, overwriting its
//! depth with the depth through the later edge. The resulting depths are the
//! lengths of walks through the tree rather than shortest hop distances,
//! which gives the rendered pattern its irregular boundaries.

use ndarray::Array2;
use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::algorithm::frontier::{Candidate, Frontier};
use crate::io::error::Result;
use crate::spatial::{Cell, DepthMap, Torus};

/// Counters collected while growing one tree
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GrowthStats {
    /// Edges popped from the frontier, including the seed edge
    pub pops: usize,
    /// Edges pushed onto the frontier, including the seed edge
    pub enqueued: usize,
    /// Pops that committed a target that was already committed
    pub recommits: usize,
}

/// Completed growth result
#[derive(Debug, Clone)]
pub struct SpanningTree {
    torus: Torus,
    depths: DepthMap,
    parents: Array2<Option<Cell>>,
    stats: GrowthStats,
}

impl SpanningTree {
    /// Grid the tree spans
    pub const fn torus(&self) -> &Torus {
        &self.torus
    }

    /// Depth of every cell
    pub const fn depths(&self) -> &DepthMap {
        &self.depths
    }

    /// Take the depth map, dropping parent links
    pub fn into_depths(self) -> DepthMap {
        self.depths
    }

    /// Source of the edge that last committed `cell`
    ///
    /// `None` for the root and for cells outside the grid.
    pub fn parent(&self, cell: Cell) -> Option<Cell> {
        self.parents.get((cell.y, cell.x)).copied().flatten()
    }

    /// Growth counters
    pub const fn stats(&self) -> GrowthStats {
        self.stats
    }
}

/// Grow a tree over a `width × height` torus from a seed and return its depths
///
/// # Errors
///
/// Returns `SkyError::InvalidParameter` if a dimension is zero or too large;
/// no growth work is done in that case.
pub fn grow(seed: u64, width: usize, height: usize) -> Result<DepthMap> {
    let torus = Torus::new(width, height)?;
    Ok(grow_tree(seed, torus).into_depths())
}

/// Grow a tree from a seed, keeping parent links and counters
pub fn grow_tree(seed: u64, torus: Torus) -> SpanningTree {
    let mut rng = StdRng::seed_from_u64(seed);
    grow_with_rng(&mut rng, torus)
}

/// Grow a tree drawing every priority key from `rng`
///
/// The generator is consumed in a fixed order (seed edge first, then one draw
/// per discovered neighbour in up, down, left, right order), so equal
/// generator states always produce equal trees.
pub fn grow_with_rng<R: Rng>(rng: &mut R, torus: Torus) -> SpanningTree {
    let root = Torus::root();
    let mut depths = DepthMap::unvisited(&torus);
    let mut parents = Array2::from_elem((torus.height(), torus.width()), None);
    let mut stats = GrowthStats::default();

    depths.set(root, 0);

    let mut frontier = Frontier::new();
    frontier.push(Candidate::seed(root, rng.random()));

    while let Some(candidate) = frontier.pop() {
        stats.pops += 1;
        let target = candidate.target();

        for neighbor in torus.neighbors(target) {
            if !depths.is_visited(neighbor) {
                frontier.push(Candidate::step(target, neighbor, rng.random()));
            }
        }

        // Unconditional: a duplicate edge overwrites the earlier commit
        if let Some(source_depth) = depths.get(candidate.source()) {
            if candidate.hops() > 0 {
                if depths.is_visited(target) {
                    stats.recommits += 1;
                }
                if let Some(parent) = parents.get_mut((target.y, target.x)) {
                    *parent = Some(candidate.source());
                }
            }
            depths.set(target, source_depth + candidate.hops());
        }
    }

    stats.enqueued = frontier.pushed();

    SpanningTree {
        torus,
        depths,
        parents,
        stats,
    }
}
