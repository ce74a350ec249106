//! Per-column surface heights.

use voxbiome_voxel::{GridDims, Voxel, VoxelGrid};

/// One optional height per `(x, z)` column, indexed `x + z * dims.x`.
///
/// Feature passes that scan every column for their ground build one of these
/// once and look heights up instead of rescanning the column each time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColumnHeights {
    dims: GridDims,
    heights: Vec<Option<i32>>,
}

impl ColumnHeights {
    /// Heights computed by `f(x, z)` for every column.
    pub fn from_fn(dims: GridDims, mut f: impl FnMut(i32, i32) -> Option<i32>) -> Self {
        let (sx, _, sz) = dims.signed();
        let mut heights = Vec::with_capacity(dims.x * dims.z);
        for z in 0..sz {
            for x in 0..sx {
                heights.push(f(x, z));
            }
        }
        Self { dims, heights }
    }

    /// Top-down scan of every column with [`VoxelGrid::top_where`].
    pub fn scan(
        grid: &VoxelGrid,
        mut hit: impl FnMut(Voxel) -> bool,
        mut stop: impl FnMut(Voxel) -> bool,
    ) -> Self {
        Self::from_fn(grid.dims(), |x, z| grid.top_where(x, z, &mut hit, &mut stop))
    }

    /// Height of column `(x, z)`; `None` if unset or outside the grid.
    #[inline]
    pub fn get(&self, x: i32, z: i32) -> Option<i32> {
        if !self.dims.contains_column(x, z) {
            return None;
        }
        self.heights[x as usize + z as usize * self.dims.x]
    }

    /// Number of columns that have a height.
    pub fn found(&self) -> usize {
        self.heights.iter().filter(|h| h.is_some()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_fn_layout() {
        let heights = ColumnHeights::from_fn(GridDims::new(3, 1, 2), |x, z| Some(x * 10 + z));
        assert_eq!(heights.get(2, 1), Some(21));
        assert_eq!(heights.get(0, 1), Some(1));
        assert_eq!(heights.get(3, 0), None);
        assert_eq!(heights.get(-1, 0), None);
        assert_eq!(heights.found(), 6);
    }

    #[test]
    fn test_scan_matches_column_helper() {
        let mut grid = VoxelGrid::new(GridDims::cube(4));
        grid.set(0, 2, 0, Voxel::SAND);
        grid.set(1, 1, 1, Voxel::SAND);
        grid.set(1, 3, 1, Voxel::WATER);
        let heights = ColumnHeights::scan(&grid, Voxel::is_sand, |v| v == Voxel::WATER);
        assert_eq!(heights.get(0, 0), Some(2));
        assert_eq!(heights.get(1, 1), None);
        assert_eq!(heights.get(3, 3), None);
        assert_eq!(heights.found(), 1);
    }
}
