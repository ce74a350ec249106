//! The result of one generation call.

use voxbiome_voxel::{Voxel, VoxelGrid};

/// Counts of what the feature passes asked for and what they managed to place.
///
/// Placement is rejection sampled with capped attempts, so `*_placed` may fall
/// short of `*_requested` but never exceeds it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FeatureSummary {
    pub trees_requested: u32,
    pub trees_placed: u32,
    pub rocks_requested: u32,
    pub rocks_placed: u32,
    pub pebbles_placed: u32,
    pub grass_placed: u32,
    pub hills_raised: u32,
    pub caves_carved: u32,
}

/// A finished chunk, handed to the caller by value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneratedChunk {
    /// Registry id of the biome that produced it.
    pub biome_id: String,
    /// Seed string the streams were derived from.
    pub scoped_seed: String,
    pub grid: VoxelGrid,
    pub summary: FeatureSummary,
}

impl GeneratedChunk {
    pub fn new(
        biome_id: impl Into<String>,
        scoped_seed: impl Into<String>,
        grid: VoxelGrid,
        summary: FeatureSummary,
    ) -> Self {
        Self {
            biome_id: biome_id.into(),
            scoped_seed: scoped_seed.into(),
            grid,
            summary,
        }
    }

    /// The flat voxel array, `x + y * X + z * X * Y` ordered.
    pub fn into_voxels(self) -> Vec<Voxel> {
        self.grid.into_voxels()
    }
}
