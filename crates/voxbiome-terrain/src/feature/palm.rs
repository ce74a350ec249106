//! Palm trees: curved trunk, drooping frond rings.

use std::f64::consts::{PI, TAU};

use glam::{IVec2, IVec3};
use rand::Rng;
use voxbiome_config::BeachTreeSettings;
use voxbiome_voxel::{Voxel, VoxelGrid};

use crate::noise_field::NoiseField;
use crate::seed::{StreamExt, det_cos, det_sin};

/// Offset on the curve-noise x input so the two trunk axes bend independently.
const CURVE_Z_OFFSET: f64 = 100.0;

/// Palms may grow into empty cells and displace water.
fn palm_can_replace(v: Voxel) -> bool {
    v.is_empty() || v == Voxel::WATER
}

/// Places palm trees on dry sand.
pub struct PalmPlanter<'a> {
    pub settings: &'a BeachTreeSettings,
    pub water_level: i32,
    /// Placement bias field, sampled in `[0, 1]`.
    pub placement: &'a NoiseField,
    /// Lateral trunk curve field.
    pub curve: &'a NoiseField,
}

impl PalmPlanter<'_> {
    /// Tries to place `settings.count` palms. Returns how many were placed.
    pub fn plant_all<R: Rng + ?Sized>(&self, grid: &mut VoxelGrid, rng: &mut R) -> u32 {
        let mut placed = 0;
        for i in 0..self.settings.count {
            match self.find_site(grid, rng) {
                Some(base) => {
                    self.grow(grid, rng, base);
                    placed += 1;
                }
                None => tracing::trace!(tree = i, "no palm site found"),
            }
        }
        placed
    }

    /// Rejection samples a trunk footprint whose cells are all dry sand at
    /// nearly the same height. Returns the footprint corner and its height.
    pub fn find_site<R: Rng + ?Sized>(&self, grid: &VoxelGrid, rng: &mut R) -> Option<IVec3> {
        let (sx, _, sz) = grid.dims().signed();
        let thickness = self.settings.trunk_thickness.max(1);
        let scale = self.settings.placement_noise_scale;

        for attempt in 0..self.settings.max_placement_attempts {
            let x = rng.below(sx - thickness);
            let z = rng.below(sz - thickness);

            if attempt < self.settings.noise_relax_after
                && self.placement.unit(x as f64, z as f64, scale) < self.settings.placement_threshold
            {
                continue;
            }

            if let Some(surface) = self.footprint_surface(grid, IVec2::new(x, z), thickness) {
                tracing::trace!(x, z, surface, attempt, "palm site");
                return Some(IVec3::new(x, surface, z));
            }
        }
        None
    }

    /// Common sand height under the footprint at `corner`, if it qualifies.
    fn footprint_surface(&self, grid: &VoxelGrid, corner: IVec2, thickness: i32) -> Option<i32> {
        let dims = grid.dims();
        let mut surface: Option<i32> = None;

        for dx in 0..thickness {
            for dz in 0..thickness {
                let (cx, cz) = (corner.x + dx, corner.y + dz);
                if !dims.contains_column(cx, cz) {
                    return None;
                }
                let y = grid.top_where(cx, cz, Voxel::is_sand, |v| v == Voxel::WATER)?;
                if y < self.water_level {
                    return None;
                }
                match surface {
                    None => surface = Some(y),
                    Some(s) if (s - y).abs() > 1 => return None,
                    Some(_) => {}
                }
            }
        }

        // The trunk sits at the first cell's height; every cell must be sand there.
        let surface = surface?;
        for dx in 0..thickness {
            for dz in 0..thickness {
                if !grid.get(corner.x + dx, surface, corner.y + dz).is_sand() {
                    return None;
                }
            }
        }
        Some(surface)
    }

    /// Grows one palm whose footprint corner is `base.xz` and ground is `base.y`.
    pub fn grow<R: Rng + ?Sized>(&self, grid: &mut VoxelGrid, rng: &mut R, base: IVec3) {
        let s = self.settings;
        let (sx, sy, sz) = grid.dims().signed();
        let thickness = s.trunk_thickness.max(1);
        let height = rng.between(s.min_height, s.max_height).max(1);
        let reach = s.curve_factor * (thickness as f64 + 0.5);

        let mut tip = IVec2::new(base.x + thickness / 2, base.z + thickness / 2);
        for h in 1..=height {
            let taper = det_sin(h as f64 / height as f64 * PI);
            let bend_x = self.curve.sample(tip.x as f64 * 0.1, h as f64 * 0.2);
            let bend_z = self
                .curve
                .sample(tip.y as f64 * 0.1 + CURVE_Z_OFFSET, h as f64 * 0.2);

            let nx = (tip.x as f64 + taper * bend_x * reach).round() as i32;
            let nz = (tip.y as f64 + taper * bend_z * reach).round() as i32;
            tip = IVec2::new(nx.min(sx - thickness).max(0), nz.min(sz - thickness).max(0));

            let y = base.y + h;
            for dx in 0..thickness {
                for dz in 0..thickness {
                    grid.set_if(tip.x + dx, y, tip.y + dz, Voxel::PALM_TRUNK, palm_can_replace);
                }
            }
        }

        let crown = IVec3::new(
            tip.x + thickness / 2,
            base.y + height + 1,
            tip.y + thickness / 2,
        );
        for layer in 0..s.frond_layers as i32 {
            let layer_y = crown.y + layer;
            if layer_y >= sy {
                continue;
            }
            self.frond_ring(grid, rng, IVec3::new(crown.x, layer_y, crown.z), layer, sy);
        }
    }

    /// One ring of fronds radiating from `center`, shorter and sparser per layer.
    fn frond_ring<R: Rng + ?Sized>(
        &self,
        grid: &mut VoxelGrid,
        rng: &mut R,
        center: IVec3,
        layer: i32,
        sy: i32,
    ) {
        let radius = self.settings.frond_radius;
        let fronds = 8 - layer * 2;
        let length = (radius - layer as f64 * 1.5).max(1.0);

        for f in 0..fronds.max(0) {
            let angle = f as f64 / fronds as f64 * TAU + (rng.unit() - 0.5) * 0.5;
            let (cos, sin) = (det_cos(angle), det_sin(angle));
            let (mut fx, mut fz) = (center.x, center.z);

            let mut step = 0;
            while (step as f64) < length {
                let jitter_x = 1.0 + (rng.unit() - 0.5) * 0.3;
                let jitter_z = 1.0 + (rng.unit() - 0.5) * 0.3;
                let droop = (step as f64 / length).powi(2) * (radius / 2.0);
                step += 1;

                fx = (fx as f64 + cos * jitter_x).round() as i32;
                fz = (fz as f64 + sin * jitter_z).round() as i32;
                let fy = (center.y as f64 - droop).round() as i32;

                if fy < self.water_level - 1 {
                    break;
                }
                if fy >= sy || fy < 0 {
                    continue;
                }
                if !grid.dims().contains_column(fx, fz) {
                    break;
                }
                grid.set_if(fx, fy, fz, Voxel::PALM_FROND, palm_can_replace);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::derive_stream;
    use voxbiome_voxel::GridDims;

    fn sand_floor(dims: GridDims, height: i32) -> VoxelGrid {
        let mut grid = VoxelGrid::new(dims);
        let (sx, _, sz) = dims.signed();
        for x in 0..sx {
            for z in 0..sz {
                for y in 0..=height {
                    grid.set(x, y, z, Voxel::SAND);
                }
            }
        }
        grid
    }

    fn fields() -> (NoiseField, NoiseField) {
        (
            NoiseField::from_rng(&mut derive_stream("palm", "trees")),
            NoiseField::from_rng(&mut derive_stream("palm", "trunkCurve")),
        )
    }

    #[test]
    fn test_site_requires_dry_sand() {
        let settings = BeachTreeSettings::default();
        let (placement, curve) = fields();
        let planter = PalmPlanter {
            settings: &settings,
            water_level: 10,
            placement: &placement,
            curve: &curve,
        };
        // Sand entirely below the water level never qualifies.
        let grid = sand_floor(GridDims::cube(32), 5);
        assert!(planter.find_site(&grid, &mut derive_stream("a", "")).is_none());

        let grid = sand_floor(GridDims::cube(32), 12);
        let site = planter.find_site(&grid, &mut derive_stream("a", "")).unwrap();
        assert_eq!(site.y, 12);
    }

    #[test]
    fn test_grown_palm_stays_in_grid_and_above_ground() {
        let settings = BeachTreeSettings::default();
        let (placement, curve) = fields();
        let planter = PalmPlanter {
            settings: &settings,
            water_level: 4,
            placement: &placement,
            curve: &curve,
        };
        let mut grid = sand_floor(GridDims::cube(32), 6);
        let mut rng = derive_stream("grow", "");
        planter.grow(&mut grid, &mut rng, IVec3::new(14, 6, 14));

        let trunk = grid.count(Voxel::PALM_TRUNK);
        assert!(trunk >= settings.min_height as usize);
        assert!(grid.count(Voxel::PALM_FROND) > 0);
        for (pos, v) in grid.occupied() {
            if v == Voxel::PALM_TRUNK {
                assert!(pos.y > 6);
            }
        }

        // Fronds stop short of dipping under the waterline.
        let flooded = PalmPlanter {
            water_level: 24,
            ..planter
        };
        let mut grid = sand_floor(GridDims::cube(32), 6);
        flooded.grow(&mut grid, &mut rng, IVec3::new(14, 6, 14));
        assert!(grid.count(Voxel::PALM_TRUNK) > 0);
        for (pos, v) in grid.occupied() {
            if v == Voxel::PALM_FROND {
                assert!(pos.y >= 23, "frond at {pos}");
            }
        }
    }

    #[test]
    fn test_plant_all_respects_count() {
        let settings = BeachTreeSettings {
            count: 3,
            ..Default::default()
        };
        let (placement, curve) = fields();
        let planter = PalmPlanter {
            settings: &settings,
            water_level: 2,
            placement: &placement,
            curve: &curve,
        };
        let mut grid = sand_floor(GridDims::cube(48), 4);
        let placed = planter.plant_all(&mut grid, &mut derive_stream("all", ""));
        assert!(placed <= 3);
    }
}
