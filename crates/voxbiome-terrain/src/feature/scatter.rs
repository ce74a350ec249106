//! Single-voxel surface decorations: beach rocks, beach grass and pebbles.

use rand::Rng;
use voxbiome_config::{BeachGrassSettings, PebbleSettings, RockSettings};
use voxbiome_voxel::{Voxel, VoxelGrid};

use crate::column::ColumnHeights;
use crate::seed::StreamExt;

/// Ground a forest decoration may sit on.
pub fn is_forest_ground(v: Voxel) -> bool {
    matches!(
        v,
        Voxel::GRASS | Voxel::DIRT_MEDIUM | Voxel::FOREST_FLOOR_DETAIL
    )
}

/// Places rocks one voxel above dry sand. Returns `(requested, placed)`.
pub fn place_rocks<R: Rng + ?Sized>(
    grid: &mut VoxelGrid,
    rng: &mut R,
    settings: &RockSettings,
    water_level: i32,
) -> (u32, u32) {
    let (sx, _, sz) = grid.dims().signed();
    let requested = rng.between(settings.count_min as i32, settings.count_max as i32).max(0) as u32;
    let mut placed = 0;

    for _ in 0..requested {
        for _ in 0..settings.max_placement_attempts {
            let x = rng.below(sx);
            let z = rng.below(sz);
            let Some(surface) = grid.top_where(x, z, Voxel::is_sand, |v| v == Voxel::WATER) else {
                continue;
            };
            if surface >= water_level
                && grid.set_if(x, surface + 1, z, Voxel::ROCK, Voxel::is_empty)
            {
                tracing::trace!(x, y = surface + 1, z, "rock");
                placed += 1;
                break;
            }
        }
    }
    (requested, placed)
}

/// Turns dry sand surfaces into beach grass away from the waterline.
///
/// A column qualifies when its top voxel is sand at or above water level and
/// no water lies within `min_distance_from_water` cells along the four axis
/// directions at the surface height. Each qualifying column is then rolled
/// against the density. Returns the number of grass voxels placed.
pub fn place_beach_grass<R: Rng + ?Sized>(
    grid: &mut VoxelGrid,
    rng: &mut R,
    settings: &BeachGrassSettings,
    water_level: i32,
) -> u32 {
    let surfaces = ColumnHeights::scan(grid, Voxel::is_sand, |v| !v.is_empty());
    let (sx, _, sz) = grid.dims().signed();
    let mut placed = 0;

    for x in 0..sx {
        for z in 0..sz {
            let Some(y) = surfaces.get(x, z) else {
                continue;
            };
            if y < water_level {
                continue;
            }
            let near_water = (1..=settings.min_distance_from_water).any(|d| {
                [(x + d, z), (x - d, z), (x, z + d), (x, z - d)]
                    .into_iter()
                    .any(|(nx, nz)| grid.get(nx, y, nz) == Voxel::WATER)
            });
            if !near_water && rng.chance(settings.density) {
                grid.set(x, y, z, Voxel::BEACH_GRASS);
                placed += 1;
            }
        }
    }
    placed
}

/// Scatters pebbles on top of forest ground, stopping at the per-chunk cap.
pub fn place_pebbles<R: Rng + ?Sized>(
    grid: &mut VoxelGrid,
    rng: &mut R,
    settings: &PebbleSettings,
) -> u32 {
    let ground = ColumnHeights::scan(grid, is_forest_ground, |v| !v.is_empty());
    let (sx, _, sz) = grid.dims().signed();
    let mut placed = 0;

    'columns: for x in 0..sx {
        for z in 0..sz {
            if placed >= settings.max_per_chunk {
                break 'columns;
            }
            let Some(y) = ground.get(x, z) else {
                continue;
            };
            if y < settings.max_y
                && rng.chance(settings.density)
                && grid.set_if(x, y + 1, z, Voxel::PEBBLE, Voxel::is_empty)
            {
                placed += 1;
            }
        }
    }
    placed
}
