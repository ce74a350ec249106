//! Forest: rolling grass floor over dirt and stone, pebbles, a border hill
//! with an optional cave, and conifers.

use rand::Rng;
use voxbiome_config::ForestSettings;
use voxbiome_voxel::{GridDims, Voxel, VoxelGrid};

use super::BiomeGenerator;
use crate::chunk::{FeatureSummary, GeneratedChunk};
use crate::feature::{ConiferPlanter, HillBuilder, place_pebbles};
use crate::layering::{Band, MixZone, Shaded, fill_banded_column};
use crate::noise_field::NoiseField;
use crate::seed::{StreamExt, derive_stream};

pub const FOREST_ID: &str = "forest";

#[derive(Clone, Debug, Default)]
pub struct ForestGenerator {
    settings: ForestSettings,
}

impl ForestGenerator {
    pub fn new(settings: ForestSettings) -> Self {
        Self { settings }
    }

    /// Hill-free surface height of column `(x, z)`, clamped into the grid.
    fn natural_surface(&self, terrain: &NoiseField, dims: GridDims, x: i32, z: i32) -> i32 {
        let s = &self.settings;
        let base = (dims.y as f64 * s.base_height_factor).floor();
        let offset = terrain.normalized(
            x as f64,
            z as f64,
            s.terrain_noise_scale,
            s.terrain_noise_amplitude,
        );
        ((base + offset).floor() as i32).min(dims.y as i32 - 1).max(0)
    }

    fn stone(&self) -> Shaded {
        match &self.settings.stone_variations {
            Some(v) => Shaded::new(
                Voxel::STONE,
                Voxel::STONE_LIGHT,
                v.light_chance,
                Voxel::STONE_DARK,
                v.dark_chance,
            ),
            None => Shaded::solid(Voxel::STONE),
        }
    }

    /// Grass, a bare dirt patch, or floor detail, from a single draw.
    fn surface_material<R: Rng + ?Sized>(&self, rng: &mut R) -> Voxel {
        let s = &self.settings;
        let r = rng.unit();
        if r < s.surface_dirt_patch_chance {
            Voxel::DIRT_MEDIUM
        } else if r < s.surface_dirt_patch_chance + s.floor_detail_chance {
            Voxel::FOREST_FLOOR_DETAIL
        } else {
            Voxel::GRASS
        }
    }

    fn shape_terrain<R: Rng + ?Sized>(
        &self,
        grid: &mut VoxelGrid,
        rng: &mut R,
        natural: impl Fn(i32, i32) -> i32,
    ) {
        let (sx, _, sz) = grid.dims().signed();
        let bands = [
            Band::layers(self.settings.dirt_layer_depth, Shaded::solid(Voxel::DIRT_MEDIUM)),
            Band::rest(self.stone()),
        ];
        let mix = self
            .settings
            .dirt_stone_transition
            .as_ref()
            .map(|t| MixZone {
                depth: t.depth,
                chance: t.mix_chance,
            });

        for x in 0..sx {
            for z in 0..sz {
                let surface = natural(x, z);
                grid.set(x, surface, z, self.surface_material(rng));
                fill_banded_column(grid, x, z, surface, &bands, mix, rng);
            }
        }
    }
}

impl BiomeGenerator for ForestGenerator {
    fn id(&self) -> &str {
        FOREST_ID
    }

    fn generate(&self, dims: GridDims, scoped_seed: &str) -> GeneratedChunk {
        let s = &self.settings;
        let mut rng = derive_stream(scoped_seed, "");
        let terrain = NoiseField::from_rng(&mut rng);
        let placement = NoiseField::from_rng(&mut derive_stream(scoped_seed, "_forest_trees"));
        let natural = |x: i32, z: i32| self.natural_surface(&terrain, dims, x, z);

        let mut grid = VoxelGrid::new(dims);
        self.shape_terrain(&mut grid, &mut rng, &natural);
        tracing::debug!(dirt_depth = s.dirt_layer_depth, "forest terrain");

        let mut summary = FeatureSummary::default();

        if let Some(pebbles) = &s.pebbles {
            summary.pebbles_placed = place_pebbles(&mut grid, &mut rng, pebbles);
            tracing::debug!(placed = summary.pebbles_placed, "pebbles");
        }

        if let Some(hills) = &s.border_hills {
            let builder = HillBuilder {
                settings: hills,
                stone: self.stone(),
                dirt: Voxel::DIRT_MEDIUM,
                natural_surface: &natural,
            };
            let (raised, caves) = builder.build(&mut grid, &mut rng);
            summary.hills_raised = raised;
            summary.caves_carved = caves;
            tracing::debug!(hills = raised, caves, "border hills");
        }

        let planter = ConiferPlanter {
            settings: &s.trees,
            placement: &placement,
            natural_surface: &natural,
        };
        let (requested, placed) = planter.plant_all(&mut grid, &mut rng);
        summary.trees_requested = requested;
        summary.trees_placed = placed;
        tracing::debug!(placed, requested, "conifers");

        GeneratedChunk::new(FOREST_ID, scoped_seed, grid, summary)
    }
}
