//! Beach: sandy slope along +Z into a flooded shoreline, palms, rocks, grass.

use rand::Rng;
use voxbiome_config::BeachSettings;
use voxbiome_voxel::{GridDims, Voxel, VoxelGrid};

use super::BiomeGenerator;
use crate::chunk::{FeatureSummary, GeneratedChunk};
use crate::feature::{PalmPlanter, place_beach_grass, place_rocks};
use crate::layering::{Band, Shaded, fill_banded_column};
use crate::noise_field::NoiseField;
use crate::seed::derive_stream;

pub const BEACH_ID: &str = "beach";

/// Heights derived from the settings for one chunk size.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BeachProfile {
    pub water_level: i32,
    /// First z of the slope. May be negative, in which case every column slopes.
    pub slope_start_z: i32,
    pub inland_height: i32,
    pub dune_amplitude: f64,
}

#[derive(Clone, Debug, Default)]
pub struct BeachGenerator {
    settings: BeachSettings,
}

impl BeachGenerator {
    pub fn new(settings: BeachSettings) -> Self {
        Self { settings }
    }

    pub fn profile(&self, dims: GridDims) -> BeachProfile {
        let s = &self.settings;
        let water_level = (dims.y as f64 * s.water_level_factor).floor() as i32;
        BeachProfile {
            water_level,
            slope_start_z: (dims.z as f64 * s.beach_start_z_factor).floor() as i32,
            inland_height: water_level + s.inland_height_offset,
            dune_amplitude: dims.y as f64 * s.dune_variation_factor,
        }
    }

    fn sand(&self) -> Shaded {
        let shades = &self.settings.sand_shades;
        Shaded::new(
            Voxel::SAND,
            Voxel::SAND_LIGHT,
            shades.light_chance,
            Voxel::SAND_DARK,
            shades.dark_chance,
        )
    }

    /// Surface height of column `(x, z)` before clamping to the grid.
    fn surface_height(&self, p: &BeachProfile, dims: GridDims, dunes: &NoiseField, x: i32, z: i32) -> i32 {
        let noise = dunes.normalized(
            x as f64,
            z as f64,
            self.settings.general_noise_scale,
            p.dune_amplitude,
        );
        if z < p.slope_start_z {
            return (p.inland_height as f64 + noise).floor() as i32;
        }
        let run = (dims.z as i32 - 1 - p.slope_start_z).max(1) as f64;
        let progress = (z - p.slope_start_z) as f64 / run;
        let fade = 1.0 - progress;
        let shore = (p.water_level - 1) as f64;
        let y = (p.inland_height as f64 * fade + shore * progress + noise * fade).floor() as i32;
        y.max(p.water_level - 2)
    }

    /// Heightmap, sand layering and flooding for every column.
    fn shape_terrain<R: Rng + ?Sized>(
        &self,
        grid: &mut VoxelGrid,
        rng: &mut R,
        p: &BeachProfile,
        dunes: &NoiseField,
    ) -> usize {
        let dims = grid.dims();
        let (sx, sy, sz) = dims.signed();
        let sand = self.sand();
        let bands = [
            Band::layers(self.settings.sand_band_depth, sand),
            Band::rest(Shaded::solid(Voxel::SANDSTONE)),
        ];
        let flood_from = p.slope_start_z - self.settings.flood_margin;
        let mut flooded = 0;

        for x in 0..sx {
            for z in 0..sz {
                let surface = self.surface_height(p, dims, dunes, x, z).min(sy - 1).max(0);
                fill_banded_column(grid, x, z, surface, &bands, None, rng);

                // A submerged top cell is water, not sand.
                if z >= flood_from && surface < p.water_level {
                    for y in surface..p.water_level.min(sy) {
                        grid.set(x, y, z, Voxel::WATER);
                        flooded += 1;
                    }
                } else {
                    grid.set(x, surface, z, sand.pick(rng));
                }
            }
        }
        flooded
    }
}

impl BiomeGenerator for BeachGenerator {
    fn id(&self) -> &str {
        BEACH_ID
    }

    fn generate(&self, dims: GridDims, scoped_seed: &str) -> GeneratedChunk {
        let s = &self.settings;
        let mut rng = derive_stream(scoped_seed, "");
        let dunes = NoiseField::from_rng(&mut rng);
        let placement = NoiseField::from_rng(&mut derive_stream(scoped_seed, "trees"));
        let curve = NoiseField::from_rng(&mut derive_stream(scoped_seed, "trunkCurve"));

        let mut grid = VoxelGrid::new(dims);
        let profile = self.profile(dims);
        let flooded = self.shape_terrain(&mut grid, &mut rng, &profile, &dunes);
        tracing::debug!(
            water_level = profile.water_level,
            slope_start_z = profile.slope_start_z,
            flooded,
            "beach terrain"
        );

        let mut summary = FeatureSummary {
            trees_requested: s.trees.count,
            ..Default::default()
        };
        summary.trees_placed = PalmPlanter {
            settings: &s.trees,
            water_level: profile.water_level,
            placement: &placement,
            curve: &curve,
        }
        .plant_all(&mut grid, &mut rng);
        tracing::debug!(placed = summary.trees_placed, requested = summary.trees_requested, "palms");

        if let Some(rocks) = &s.rocks {
            let (requested, placed) = place_rocks(&mut grid, &mut rng, rocks, profile.water_level);
            summary.rocks_requested = requested;
            summary.rocks_placed = placed;
            tracing::debug!(placed, requested, "rocks");
        }

        if let Some(grass) = &s.beach_grass {
            summary.grass_placed = place_beach_grass(&mut grid, &mut rng, grass, profile.water_level);
            tracing::debug!(placed = summary.grass_placed, "beach grass");
        }

        GeneratedChunk::new(BEACH_ID, scoped_seed, grid, summary)
    }
}
