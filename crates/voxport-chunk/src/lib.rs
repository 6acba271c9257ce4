//! Voxel grid storage and the neighbour-source abstraction generators query.
#![forbid(unsafe_code)]

pub mod dump;

use hashbrown::HashMap;
use thiserror::Error;
use voxport_blocks::Block;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("({x},{y},{z}) is outside the {sx}x{sy}x{sz} grid")]
    OutOfBounds {
        x: i32,
        y: i32,
        z: i32,
        sx: usize,
        sy: usize,
        sz: usize,
    },
    #[error("expected {expected} blocks, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },
    #[error("a {sx}x{sy}x{sz} grid is too large")]
    TooLarge { sx: usize, sy: usize, sz: usize },
    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },
}

/// Voxel lookup by integer coordinate. Positions nobody stored read as air.
pub trait NeighborSource {
    fn block_at(&self, x: i32, y: i32, z: i32) -> Block;
}

/// Dense, bounds-checked box of voxels; the input of one export job.
#[derive(Clone, Debug, PartialEq)]
pub struct VoxelGrid {
    pub sx: usize,
    pub sy: usize,
    pub sz: usize,
    blocks: Vec<Block>,
}

/// Cell count of an `sx`x`sy`x`sz` grid, `None` when a side does not fit an `i32`
/// coordinate or the product overflows.
pub fn grid_volume(sx: usize, sy: usize, sz: usize) -> Option<usize> {
    let max = i32::MAX as usize;
    if sx > max || sy > max || sz > max {
        return None;
    }
    sx.checked_mul(sy)?.checked_mul(sz)
}

impl VoxelGrid {
    /// An all-air grid.
    ///
    /// Panics if the dimensions are too large to address; see [`VoxelGrid::try_new`].
    pub fn new(sx: usize, sy: usize, sz: usize) -> Self {
        match Self::try_new(sx, sy, sz) {
            Ok(g) => g,
            Err(e) => panic!("{e}"),
        }
    }

    pub fn try_new(sx: usize, sy: usize, sz: usize) -> Result<Self, GridError> {
        let volume = grid_volume(sx, sy, sz).ok_or(GridError::TooLarge { sx, sy, sz })?;
        Ok(VoxelGrid {
            sx,
            sy,
            sz,
            blocks: vec![Block::AIR; volume],
        })
    }

    /// Wraps a flat `y`-major, then `z`, then `x` block vector.
    pub fn from_blocks(
        sx: usize,
        sy: usize,
        sz: usize,
        blocks: Vec<Block>,
    ) -> Result<Self, GridError> {
        let expected = grid_volume(sx, sy, sz).ok_or(GridError::TooLarge { sx, sy, sz })?;
        if blocks.len() != expected {
            return Err(GridError::DimensionMismatch {
                expected,
                actual: blocks.len(),
            });
        }
        Ok(VoxelGrid { sx, sy, sz, blocks })
    }

    #[inline]
    pub fn dims(&self) -> (usize, usize, usize) {
        (self.sx, self.sy, self.sz)
    }

    #[inline]
    pub fn idx(&self, x: usize, y: usize, z: usize) -> usize {
        (y * self.sz + z) * self.sx + x
    }

    #[inline]
    pub fn contains(&self, x: i32, y: i32, z: i32) -> bool {
        x >= 0
            && y >= 0
            && z >= 0
            && (x as usize) < self.sx
            && (y as usize) < self.sy
            && (z as usize) < self.sz
    }

    /// Whether `(x,y,z)` is inside the grid and touches its outer boundary.
    #[inline]
    pub fn on_shell(&self, x: i32, y: i32, z: i32) -> bool {
        self.contains(x, y, z)
            && (x == 0
                || y == 0
                || z == 0
                || x as usize == self.sx - 1
                || y as usize == self.sy - 1
                || z as usize == self.sz - 1)
    }

    fn checked_idx(&self, x: i32, y: i32, z: i32) -> Result<usize, GridError> {
        if !self.contains(x, y, z) {
            return Err(GridError::OutOfBounds {
                x,
                y,
                z,
                sx: self.sx,
                sy: self.sy,
                sz: self.sz,
            });
        }
        Ok(self.idx(x as usize, y as usize, z as usize))
    }

    pub fn get(&self, x: i32, y: i32, z: i32) -> Result<Block, GridError> {
        self.checked_idx(x, y, z).map(|i| self.blocks[i])
    }

    pub fn set(&mut self, x: i32, y: i32, z: i32, block: Block) -> Result<(), GridError> {
        let i = self.checked_idx(x, y, z)?;
        self.blocks[i] = block;
        Ok(())
    }

    #[inline]
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn is_all_air(&self) -> bool {
        self.blocks.iter().all(|b| b.is_air())
    }

    /// Every cell with its coordinate, in storage order.
    pub fn iter(&self) -> impl Iterator<Item = ((i32, i32, i32), Block)> + '_ {
        let (sx, sz) = (self.sx, self.sz);
        self.blocks.iter().enumerate().map(move |(i, &b)| {
            let x = i % sx;
            let z = (i / sx) % sz;
            let y = i / (sx * sz);
            ((x as i32, y as i32, z as i32), b)
        })
    }
}

impl NeighborSource for VoxelGrid {
    #[inline]
    fn block_at(&self, x: i32, y: i32, z: i32) -> Block {
        self.get(x, y, z).unwrap_or(Block::AIR)
    }
}

/// Sparse map of voxels around an origin, for tests and one-off meshing.
#[derive(Clone, Debug, Default)]
pub struct SparseNeighborhood {
    cells: HashMap<(i32, i32, i32), Block>,
}

impl SparseNeighborhood {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, x: i32, y: i32, z: i32, block: Block) -> Self {
        self.insert(x, y, z, block);
        self
    }

    pub fn insert(&mut self, x: i32, y: i32, z: i32, block: Block) {
        if block.is_air() {
            self.cells.remove(&(x, y, z));
        } else {
            self.cells.insert((x, y, z), block);
        }
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

impl NeighborSource for SparseNeighborhood {
    #[inline]
    fn block_at(&self, x: i32, y: i32, z: i32) -> Block {
        self.cells.get(&(x, y, z)).copied().unwrap_or(Block::AIR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_bounds_is_an_error_not_a_clamp() {
        let mut g = VoxelGrid::new(2, 2, 2);
        let err = g.set(2, 0, 0, Block::new(1, 0)).unwrap_err();
        assert!(matches!(err, GridError::OutOfBounds { x: 2, .. }));
        assert!(g.get(-1, 0, 0).is_err());
        assert!(g.is_all_air());
    }

    #[test]
    fn overflowing_dimensions_are_rejected() {
        let huge = usize::MAX / 2;
        assert!(matches!(
            VoxelGrid::try_new(huge, huge, 2),
            Err(GridError::TooLarge { .. })
        ));
        assert!(matches!(
            VoxelGrid::from_blocks(huge, 3, 3, Vec::new()),
            Err(GridError::TooLarge { .. })
        ));
        assert_eq!(grid_volume(4, 2, 3), Some(24));
    }

    #[test]
    fn neighbor_source_reads_air_past_the_edge() {
        let mut g = VoxelGrid::new(1, 1, 1);
        g.set(0, 0, 0, Block::new(1, 0)).unwrap();
        assert_eq!(g.block_at(0, 0, 0), Block::new(1, 0));
        assert_eq!(g.block_at(0, 1, 0), Block::AIR);
        assert_eq!(g.block_at(-5, 0, 9), Block::AIR);
    }

    #[test]
    fn shell_of_a_three_cube_leaves_the_centre() {
        let g = VoxelGrid::new(3, 3, 3);
        let inner: Vec<_> = g.iter().filter(|((x, y, z), _)| !g.on_shell(*x, *y, *z)).collect();
        assert_eq!(inner.len(), 1);
        assert_eq!(inner[0].0, (1, 1, 1));
    }

    #[test]
    fn wrong_length_is_rejected() {
        let err = VoxelGrid::from_blocks(2, 1, 1, vec![Block::AIR]).unwrap_err();
        assert_eq!(err, GridError::DimensionMismatch { expected: 2, actual: 1 });
    }
}
