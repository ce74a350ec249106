//! Dense voxel storage for one generated chunk.
//!
//! A [`VoxelGrid`] owns a flat `Vec<Voxel>` of `x * y * z` cells. All access
//! goes through [`GridDims::index`], the single place that turns coordinates
//! into a linear offset, so bounds safety is enforced once: reads outside the
//! grid return [`Voxel::EMPTY`] and writes outside the grid are ignored.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use glam::IVec3;
use serde::{Deserialize, Serialize};

use crate::voxel::Voxel;

/// Side length used by the reference chunk size.
pub const REFERENCE_SIZE: usize = 64;

/// Chunk extent along each axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridDims {
    pub x: usize,
    pub y: usize,
    pub z: usize,
}

impl GridDims {
    /// The 64×64×64 chunk the built-in settings are tuned for.
    pub const REFERENCE: Self = Self::cube(REFERENCE_SIZE);

    pub const fn new(x: usize, y: usize, z: usize) -> Self {
        Self { x, y, z }
    }

    /// Equal extent on every axis.
    pub const fn cube(size: usize) -> Self {
        Self::new(size, size, size)
    }

    /// Total number of cells.
    pub const fn volume(&self) -> usize {
        self.x * self.y * self.z
    }

    /// Extents as signed integers, for coordinate arithmetic that may go negative.
    pub fn signed(&self) -> (i32, i32, i32) {
        (self.x as i32, self.y as i32, self.z as i32)
    }

    /// Returns `true` if `(x, y, z)` lies inside the grid.
    #[inline]
    pub fn contains(&self, x: i32, y: i32, z: i32) -> bool {
        x >= 0
            && y >= 0
            && z >= 0
            && (x as usize) < self.x
            && (y as usize) < self.y
            && (z as usize) < self.z
    }

    /// Returns `true` if the column `(x, z)` lies inside the grid.
    #[inline]
    pub fn contains_column(&self, x: i32, z: i32) -> bool {
        x >= 0 && z >= 0 && (x as usize) < self.x && (z as usize) < self.z
    }

    /// Linear offset of `(x, y, z)`, x varying fastest:
    /// `x + y * X + z * X * Y`. `None` when out of range.
    #[inline]
    pub fn index(&self, x: i32, y: i32, z: i32) -> Option<usize> {
        if !self.contains(x, y, z) {
            return None;
        }
        let (x, y, z) = (x as usize, y as usize, z as usize);
        Some(x + y * self.x + z * self.x * self.y)
    }

    /// Inverse of [`GridDims::index`].
    pub fn position(&self, index: usize) -> IVec3 {
        let x = index % self.x;
        let y = (index / self.x) % self.y;
        let z = index / (self.x * self.y);
        IVec3::new(x as i32, y as i32, z as i32)
    }
}

impl Default for GridDims {
    fn default() -> Self {
        Self::REFERENCE
    }
}

/// A fixed-size dense grid of voxels, exclusively owned by one generation call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VoxelGrid {
    dims: GridDims,
    voxels: Vec<Voxel>,
}

impl VoxelGrid {
    /// Creates a grid filled with [`Voxel::EMPTY`].
    pub fn new(dims: GridDims) -> Self {
        Self {
            dims,
            voxels: vec![Voxel::EMPTY; dims.volume()],
        }
    }

    pub fn dims(&self) -> GridDims {
        self.dims
    }

    /// Returns the voxel at `(x, y, z)`, or empty when out of range.
    #[inline]
    pub fn get(&self, x: i32, y: i32, z: i32) -> Voxel {
        match self.dims.index(x, y, z) {
            Some(i) => self.voxels[i],
            None => Voxel::EMPTY,
        }
    }

    /// Writes `voxel` at `(x, y, z)`.
    ///
    /// Returns `false` and leaves the grid untouched when out of range.
    #[inline]
    pub fn set(&mut self, x: i32, y: i32, z: i32, voxel: Voxel) -> bool {
        match self.dims.index(x, y, z) {
            Some(i) => {
                self.voxels[i] = voxel;
                true
            }
            None => false,
        }
    }

    /// Writes `voxel` only if the current cell satisfies `pred`.
    ///
    /// Returns `true` when the write happened.
    #[inline]
    pub fn set_if(
        &mut self,
        x: i32,
        y: i32,
        z: i32,
        voxel: Voxel,
        pred: impl FnOnce(Voxel) -> bool,
    ) -> bool {
        match self.dims.index(x, y, z) {
            Some(i) if pred(self.voxels[i]) => {
                self.voxels[i] = voxel;
                true
            }
            _ => false,
        }
    }

    /// Scans column `(x, z)` from the top down and returns the first `y`
    /// whose voxel matches `hit`. The scan gives up early (returning `None`)
    /// at the first voxel matching `stop`.
    pub fn top_where(
        &self,
        x: i32,
        z: i32,
        mut hit: impl FnMut(Voxel) -> bool,
        mut stop: impl FnMut(Voxel) -> bool,
    ) -> Option<i32> {
        if !self.dims.contains_column(x, z) {
            return None;
        }
        for y in (0..self.dims.y as i32).rev() {
            let voxel = self.get(x, y, z);
            if hit(voxel) {
                return Some(y);
            }
            if stop(voxel) {
                return None;
            }
        }
        None
    }

    /// Number of cells. Always `dims().volume()`.
    pub fn len(&self) -> usize {
        self.voxels.len()
    }

    /// Returns `true` for a zero-volume grid.
    pub fn is_empty(&self) -> bool {
        self.voxels.is_empty()
    }

    /// Number of cells holding `voxel`.
    pub fn count(&self, voxel: Voxel) -> usize {
        self.voxels.iter().filter(|&&v| v == voxel).count()
    }

    /// Iterates over every non-empty cell with its position.
    pub fn occupied(&self) -> impl Iterator<Item = (IVec3, Voxel)> + '_ {
        self.voxels
            .iter()
            .enumerate()
            .filter(|(_, v)| !v.is_empty())
            .map(|(i, &v)| (self.dims.position(i), v))
    }

    /// Raw cells in linear-index order.
    pub fn as_slice(&self) -> &[Voxel] {
        &self.voxels
    }

    /// Hands the raw cells to the caller.
    pub fn into_voxels(self) -> Vec<Voxel> {
        self.voxels
    }

    /// Digest of the dimensions and every cell, for determinism comparison.
    pub fn content_hash(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        self.dims.hash(&mut hasher);
        self.voxels.hash(&mut hasher);
        hasher.finish()
    }
}

impl From<VoxelGrid> for Vec<Voxel> {
    fn from(grid: VoxelGrid) -> Self {
        grid.voxels
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_grid_is_empty_with_full_length() {
        let grid = VoxelGrid::new(GridDims::REFERENCE);
        assert_eq!(grid.len(), 64 * 64 * 64);
        assert_eq!(grid.count(Voxel::EMPTY), grid.len());
        assert_eq!(grid.occupied().count(), 0);
    }

    #[test]
    fn test_linear_index_x_fastest() {
        let dims = GridDims::new(4, 3, 2);
        assert_eq!(dims.index(0, 0, 0), Some(0));
        assert_eq!(dims.index(1, 0, 0), Some(1));
        assert_eq!(dims.index(0, 1, 0), Some(4));
        assert_eq!(dims.index(0, 0, 1), Some(12));
        assert_eq!(dims.index(3, 2, 1), Some(23));
        assert_eq!(dims.index(4, 0, 0), None);
    }

    #[test]
    fn test_position_inverts_index() {
        let dims = GridDims::new(5, 7, 3);
        for i in 0..dims.volume() {
            let p = dims.position(i);
            assert_eq!(dims.index(p.x, p.y, p.z), Some(i));
        }
    }

    #[test]
    fn test_out_of_range_get_returns_empty() {
        let mut grid = VoxelGrid::new(GridDims::cube(8));
        for z in 0..8 {
            for y in 0..8 {
                for x in 0..8 {
                    grid.set(x, y, z, Voxel::STONE);
                }
            }
        }
        let outside = [
            (-1, 0, 0),
            (0, -1, 0),
            (0, 0, -1),
            (8, 0, 0),
            (0, 8, 0),
            (0, 0, 8),
            (i32::MIN, i32::MAX, 3),
        ];
        for (x, y, z) in outside {
            assert_eq!(grid.get(x, y, z), Voxel::EMPTY, "({x}, {y}, {z})");
        }
    }

    #[test]
    fn test_out_of_range_set_is_noop() {
        let mut grid = VoxelGrid::new(GridDims::cube(4));
        assert!(!grid.set(4, 0, 0, Voxel::SAND));
        assert!(!grid.set(0, -1, 0, Voxel::SAND));
        assert_eq!(grid.count(Voxel::SAND), 0);
        assert!(grid.set(3, 3, 3, Voxel::SAND));
        assert_eq!(grid.get(3, 3, 3), Voxel::SAND);
    }

    #[test]
    fn test_set_if_respects_predicate() {
        let mut grid = VoxelGrid::new(GridDims::cube(4));
        grid.set(1, 1, 1, Voxel::ROCK);
        assert!(!grid.set_if(1, 1, 1, Voxel::SAND, Voxel::is_empty));
        assert_eq!(grid.get(1, 1, 1), Voxel::ROCK);
        assert!(grid.set_if(2, 1, 1, Voxel::SAND, Voxel::is_empty));
        assert_eq!(grid.get(2, 1, 1), Voxel::SAND);
    }

    #[test]
    fn test_top_where_finds_highest_match() {
        let mut grid = VoxelGrid::new(GridDims::cube(8));
        grid.set(2, 1, 2, Voxel::SAND);
        grid.set(2, 4, 2, Voxel::SAND);
        assert_eq!(grid.top_where(2, 2, Voxel::is_sand, |_| false), Some(4));
        assert_eq!(grid.top_where(3, 3, Voxel::is_sand, |_| false), None);
        assert_eq!(grid.top_where(9, 2, Voxel::is_sand, |_| false), None);
    }

    #[test]
    fn test_top_where_stops_early() {
        let mut grid = VoxelGrid::new(GridDims::cube(8));
        grid.set(0, 2, 0, Voxel::SAND);
        grid.set(0, 5, 0, Voxel::WATER);
        let found = grid.top_where(0, 0, Voxel::is_sand, |v| v == Voxel::WATER);
        assert_eq!(found, None);
    }

    #[test]
    fn test_content_hash_tracks_cells() {
        let mut a = VoxelGrid::new(GridDims::cube(4));
        let b = a.clone();
        assert_eq!(a.content_hash(), b.content_hash());
        a.set(0, 0, 0, Voxel::GRASS);
        assert_ne!(a.content_hash(), b.content_hash());
    }

    #[test]
    fn test_occupied_reports_positions() {
        let mut grid = VoxelGrid::new(GridDims::new(3, 4, 5));
        grid.set(2, 3, 4, Voxel::PEBBLE);
        let cells: Vec<_> = grid.occupied().collect();
        assert_eq!(cells, vec![(IVec3::new(2, 3, 4), Voxel::PEBBLE)]);
    }

    #[test]
    fn test_into_voxels_preserves_order() {
        let dims = GridDims::new(2, 2, 2);
        let mut grid = VoxelGrid::new(dims);
        grid.set(1, 0, 1, Voxel::GRASS);
        let raw: Vec<Voxel> = grid.into();
        assert_eq!(raw.len(), 8);
        assert_eq!(raw[dims.index(1, 0, 1).unwrap()], Voxel::GRASS);
    }
}
