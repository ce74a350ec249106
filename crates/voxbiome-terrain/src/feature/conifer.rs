//! Conifers: straight thick trunk under a stack of shrinking leaf disks.

use glam::IVec2;
use rand::Rng;
use voxbiome_config::ForestTreeSettings;
use voxbiome_voxel::{Voxel, VoxelGrid};

use super::scatter::is_forest_ground;
use crate::noise_field::NoiseField;
use crate::seed::StreamExt;

/// Places conifers on flat-enough forest ground.
pub struct ConiferPlanter<'a, F> {
    pub settings: &'a ForestTreeSettings,
    /// Placement field; sites below the threshold are rejected.
    pub placement: &'a NoiseField,
    /// Surface height of the terrain before any hill.
    pub natural_surface: F,
}

impl<F: Fn(i32, i32) -> i32> ConiferPlanter<'_, F> {
    /// Draws a tree count and plants that many, skipping trees whose attempts
    /// run out. Returns `(requested, placed)`.
    pub fn plant_all<R: Rng + ?Sized>(&self, grid: &mut VoxelGrid, rng: &mut R) -> (u32, u32) {
        let s = self.settings;
        let requested = rng.between(s.count_min as i32, s.count_max as i32).max(0) as u32;
        let mut bases: Vec<IVec2> = Vec::with_capacity(requested as usize);

        for _ in 0..requested {
            if let Some((base, surface)) = self.find_site(grid, rng, &bases) {
                self.grow(grid, rng, base, surface);
                bases.push(base);
            }
        }
        (requested, bases.len() as u32)
    }

    /// Rejection samples a tree base. Returns the column and its ground height.
    pub fn find_site<R: Rng + ?Sized>(
        &self,
        grid: &VoxelGrid,
        rng: &mut R,
        others: &[IVec2],
    ) -> Option<(IVec2, i32)> {
        let s = self.settings;
        let (sx, _, sz) = grid.dims().signed();
        let min_dist_sq = s.min_distance * s.min_distance;

        for _ in 0..s.max_placement_attempts {
            let base = IVec2::new(rng.below(sx), rng.below(sz));

            let crowded = others
                .iter()
                .any(|o| ((base - *o).length_squared() as f64) < min_dist_sq);
            if crowded {
                continue;
            }
            let noise = self
                .placement
                .unit(base.x as f64, base.y as f64, s.placement_noise_scale);
            if noise < s.placement_threshold {
                continue;
            }
            // Pebbles lie on the ground; look through them.
            let Some(surface) = grid.top_where(base.x, base.y, is_forest_ground, |v| {
                !v.is_empty() && v != Voxel::PEBBLE
            }) else {
                continue;
            };
            if surface > (self.natural_surface)(base.x, base.y) + s.max_hill_rise {
                continue;
            }
            return Some((base, surface));
        }
        None
    }

    /// Grows a tree at `base` standing on ground height `surface`.
    pub fn grow<R: Rng + ?Sized>(
        &self,
        grid: &mut VoxelGrid,
        rng: &mut R,
        base: IVec2,
        surface: i32,
    ) {
        let s = self.settings;
        let (_, sy, _) = grid.dims().signed();
        let trunk_height = rng.between(s.min_height, s.max_height);
        let trunk_top = surface + trunk_height;
        let thickness = s.trunk_thickness.max(1);
        let offset = thickness / 2;

        for y in (surface + 1..=trunk_top).filter(|&y| y < sy) {
            for dx in 0..thickness {
                for dz in 0..thickness {
                    grid.set_if(
                        base.x - offset + dx,
                        y,
                        base.y - offset + dz,
                        Voxel::FOREST_TRUNK,
                        Voxel::is_empty,
                    );
                }
            }
        }

        let layers = rng.between(s.leaf_layers_min as i32, s.leaf_layers_max as i32).max(1);
        let base_radius = s.base_leaf_radius_max * (0.7 + rng.unit() * 0.3);
        let layer_height = s.leaf_layer_height.max(1);

        for layer in 0..layers {
            let progress = layer as f64 / ((layers - 1) as f64 + f64::EPSILON);
            let radius = ((base_radius * (1.0 - progress * 0.85)).ceil() as i32).max(1);
            let center_y = trunk_top + 1 + layer * layer_height + layer_height / 2;

            for dy in -(layer_height / 2)..=(layer_height + 1) / 2 {
                let y = center_y + dy;
                if y <= surface || y >= sy {
                    continue;
                }
                self.leaf_disk(grid, rng, IVec2::new(base.x, base.y), y, radius);
            }
        }
        tracing::trace!(x = base.x, z = base.y, surface, trunk_height, layers, "conifer");
    }

    fn leaf_disk<R: Rng + ?Sized>(
        &self,
        grid: &mut VoxelGrid,
        rng: &mut R,
        center: IVec2,
        y: i32,
        radius: i32,
    ) {
        let dims = grid.dims();
        for dx in -radius..=radius {
            for dz in -radius..=radius {
                if dx * dx + dz * dz > radius * radius {
                    continue;
                }
                let (x, z) = (center.x + dx, center.y + dz);
                if !dims.contains_column(x, z) {
                    continue;
                }
                let current = grid.get(x, y, z);
                if current.is_empty() || current.is_leaf() {
                    let leaf = if rng.chance(self.settings.alt_leaf_chance) {
                        Voxel::FOREST_LEAVES_ALT
                    } else {
                        Voxel::FOREST_LEAVES
                    };
                    grid.set(x, y, z, leaf);
                }
            }
        }
    }
}
