//! Flat test plain: one material up to a fixed height, nothing else.

use voxbiome_config::FlatSettings;
use voxbiome_voxel::{GridDims, VoxelGrid};

use super::BiomeGenerator;
use crate::chunk::{FeatureSummary, GeneratedChunk};

pub const FLAT_ID: &str = "test_plain";

/// Baseline generator for checking grid and layering mechanics in isolation.
#[derive(Clone, Debug, Default)]
pub struct FlatGenerator {
    settings: FlatSettings,
}

impl FlatGenerator {
    pub fn new(settings: FlatSettings) -> Self {
        Self { settings }
    }

    /// Number of filled layers, `floor(height * height_fraction)` within `[0, height]`.
    pub fn fill_height(&self, dims: GridDims) -> i32 {
        let sy = dims.y as i32;
        ((dims.y as f64 * self.settings.height_fraction).floor() as i32).clamp(0, sy)
    }
}

impl BiomeGenerator for FlatGenerator {
    fn id(&self) -> &str {
        FLAT_ID
    }

    fn generate(&self, dims: GridDims, scoped_seed: &str) -> GeneratedChunk {
        let mut grid = VoxelGrid::new(dims);
        let (sx, _, sz) = dims.signed();
        let top = self.fill_height(dims);

        for z in 0..sz {
            for y in 0..top {
                for x in 0..sx {
                    grid.set(x, y, z, self.settings.material);
                }
            }
        }
        tracing::debug!(layers = top, "flat fill");

        GeneratedChunk::new(FLAT_ID, scoped_seed, grid, FeatureSummary::default())
    }
}
