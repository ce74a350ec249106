//! Border hills and the caves tunnelled into them.

use glam::{DVec2, IVec2};
use rand::Rng;
use voxbiome_config::{BorderHillSettings, CaveSettings};
use voxbiome_voxel::{Voxel, VoxelGrid};

use crate::column::ColumnHeights;
use crate::layering::Shaded;
use crate::seed::StreamExt;

/// Chunk edge a hill hugs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Edge {
    NegX,
    PosX,
    NegZ,
    PosZ,
}

impl Edge {
    fn from_index(i: i32) -> Self {
        match i {
            0 => Self::NegX,
            1 => Self::PosX,
            2 => Self::NegZ,
            _ => Self::PosZ,
        }
    }

    /// Direction pointing from this edge into the chunk.
    pub fn inward(self) -> IVec2 {
        match self {
            Self::NegX => IVec2::X,
            Self::PosX => IVec2::NEG_X,
            Self::NegZ => IVec2::Y,
            Self::PosZ => IVec2::NEG_Y,
        }
    }
}

/// A raised hill. `center` is in `(x, z)` voxel coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hill {
    pub edge: Edge,
    pub center: DVec2,
    pub radius: f64,
    pub height: f64,
}

/// Raises hills against the chunk edges and carves their caves.
pub struct HillBuilder<'a, F> {
    pub settings: &'a BorderHillSettings,
    /// Material of the raised interior and of buried ground.
    pub stone: Shaded,
    /// Subsoil that turns to stone when buried.
    pub dirt: Voxel,
    /// Surface height of the terrain before any hill, for any column.
    pub natural_surface: F,
}

impl<F: Fn(i32, i32) -> i32> HillBuilder<'_, F> {
    /// Rolls the hill chance and builds every hill. Returns `(hills, caves)`.
    pub fn build<R: Rng + ?Sized>(&self, grid: &mut VoxelGrid, rng: &mut R) -> (u32, u32) {
        if !rng.chance(self.settings.chance) {
            return (0, 0);
        }
        let count = 1 + rng.below(self.settings.max_hills as i32);
        let mut caves = 0;

        for _ in 0..count {
            let hill = self.sample_hill(grid, rng);
            let raised = self.raise(grid, rng, &hill);
            tracing::trace!(
                edge = ?hill.edge,
                center = ?hill.center,
                radius = hill.radius,
                height = hill.height,
                raised,
                "hill"
            );

            if let Some(cave) = &self.settings.cave
                && rng.chance(cave.chance)
                && hill.height >= cave.min_hill_height
            {
                self.carve_cave(grid, &hill, cave);
                caves += 1;
            }
        }
        (count as u32, caves)
    }

    fn sample_hill<R: Rng + ?Sized>(&self, grid: &VoxelGrid, rng: &mut R) -> Hill {
        let s = self.settings;
        let (sx, _, sz) = grid.dims().signed();
        let radius = rng.span(s.min_radius, s.max_radius);
        let height = rng.span(s.min_height, s.max_height);
        let edge = Edge::from_index(rng.below(4));
        let offset = rng.below(s.border_proximity as i32) as f64;

        let center = match edge {
            Edge::NegX => DVec2::new(offset, rng.unit() * sz as f64),
            Edge::PosX => DVec2::new((sx - 1) as f64 - offset, rng.unit() * sz as f64),
            Edge::NegZ => DVec2::new(rng.unit() * sx as f64, offset),
            Edge::PosZ => DVec2::new(rng.unit() * sx as f64, (sz - 1) as f64 - offset),
        };
        Hill {
            edge,
            center,
            radius,
            height,
        }
    }

    /// Adds a parabolic mound over every column within the hill radius.
    /// Returns the number of columns that gained height.
    fn raise<R: Rng + ?Sized>(&self, grid: &mut VoxelGrid, rng: &mut R, hill: &Hill) -> u32 {
        let sy = grid.dims().y as i32;
        // Pebbles count as sitting on the ground, not as the ground.
        let ground = ColumnHeights::scan(grid, |v| !v.is_empty() && v != Voxel::PEBBLE, |_| false);
        let reach = hill.radius.ceil() as i32;
        let radius_sq = hill.radius * hill.radius;
        let mut raised = 0;

        for dx in -reach..=reach {
            for dz in -reach..=reach {
                let dist_sq = (dx * dx + dz * dz) as f64;
                if dist_sq > radius_sq {
                    continue;
                }
                let x = (hill.center.x + dx as f64).floor() as i32;
                let z = (hill.center.y + dz as f64).floor() as i32;
                let Some(old_top) = ground.get(x, z) else {
                    continue;
                };

                let extra = (hill.height * (1.0 - dist_sq / radius_sq)).floor() as i32;
                let new_top = old_top + extra;
                let cap = grid.get(x, old_top, z);

                for y in old_top + 1..=new_top.min(sy - 1) {
                    let current = grid.get(x, y, z);
                    if current.is_empty() || current == Voxel::PEBBLE {
                        let v = if y < new_top {
                            self.stone.pick(rng)
                        } else {
                            cap
                        };
                        grid.set(x, y, z, v);
                    }
                }

                if new_top > old_top {
                    raised += 1;
                    grid.set(x, old_top, z, self.stone.pick(rng));
                    for y in (0..old_top).rev() {
                        let v = grid.get(x, y, z);
                        if v == self.dirt {
                            grid.set(x, y, z, self.stone.pick(rng));
                        } else if v.is_stone() || v.is_empty() {
                            break;
                        }
                    }
                }
            }
        }
        raised
    }

    /// Tunnels from the hill's slope towards the chunk interior until the
    /// tunnel leaves the chunk. Only cells above the natural surface are
    /// cleared, so the base terrain is never exposed.
    fn carve_cave(&self, grid: &mut VoxelGrid, hill: &Hill, cave: &CaveSettings) {
        let (sx, _, sz) = grid.dims().signed();
        let dir = hill.edge.inward();
        let half_reach = hill.radius * 0.5;
        let entrance = IVec2::new(
            (hill.center.x + dir.x as f64 * half_reach).floor() as i32,
            (hill.center.y + dir.y as f64 * half_reach).floor() as i32,
        );
        let floor_y = (self.natural_surface)(entrance.x, entrance.y) + cave.floor_offset;
        let half_width = cave.entrance_width / 2;
        // Perpendicular to the tunnel in the horizontal plane.
        let across = IVec2::new(dir.y.abs(), dir.x.abs());
        let max_steps = sx.max(sz);
        let mut cleared = 0;

        for step in 0..=max_steps {
            let at = entrance + dir * step;
            if !grid.dims().contains_column(at.x, at.y) {
                break;
            }
            for w in -half_width..=half_width {
                let col = at + across * w;
                let natural = (self.natural_surface)(col.x, col.y);
                for h in 0..cave.entrance_height {
                    let y = floor_y + h;
                    if y > natural && !grid.get(col.x, y, col.y).is_empty() {
                        grid.set(col.x, y, col.y, Voxel::EMPTY);
                        cleared += 1;
                    }
                }
            }
        }
        tracing::trace!(entrance = ?entrance, floor_y, cleared, "cave");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::derive_stream;
    use voxbiome_voxel::GridDims;

    const FLOOR: i32 = 10;

    fn grassland(dims: GridDims) -> VoxelGrid {
        let mut grid = VoxelGrid::new(dims);
        let (sx, _, sz) = dims.signed();
        for x in 0..sx {
            for z in 0..sz {
                for y in 0..FLOOR - 3 {
                    grid.set(x, y, z, Voxel::STONE);
                }
                for y in FLOOR - 3..FLOOR {
                    grid.set(x, y, z, Voxel::DIRT_MEDIUM);
                }
                grid.set(x, FLOOR, z, Voxel::GRASS);
            }
        }
        grid
    }

    fn builder(settings: &BorderHillSettings) -> HillBuilder<'_, impl Fn(i32, i32) -> i32> {
        HillBuilder {
            settings,
            stone: Shaded::solid(Voxel::STONE),
            dirt: Voxel::DIRT_MEDIUM,
            natural_surface: |_, _| FLOOR,
        }
    }

    #[test]
    fn test_hill_raises_ground_with_grass_cap() {
        let settings = BorderHillSettings {
            cave: None,
            ..Default::default()
        };
        let mut grid = grassland(GridDims::cube(48));
        let (hills, caves) = builder(&settings).build(&mut grid, &mut derive_stream("hill", ""));
        assert_eq!(hills, 1);
        assert_eq!(caves, 0);

        let mut tallest = FLOOR;
        for x in 0..48 {
            for z in 0..48 {
                let top = grid.top_where(x, z, |v| !v.is_empty(), |_| false).unwrap();
                assert_eq!(grid.get(x, top, z), Voxel::GRASS);
                tallest = tallest.max(top);
                if top > FLOOR {
                    // Old surface and buried dirt became stone.
                    for y in FLOOR - 3..=FLOOR {
                        assert_eq!(grid.get(x, y, z), Voxel::STONE);
                    }
                }
            }
        }
        assert!(tallest >= FLOOR + 8, "hill peak only {tallest}");
    }

    #[test]
    fn test_cave_never_cuts_natural_terrain() {
        let settings = BorderHillSettings::default();
        let mut grid = grassland(GridDims::cube(48));
        let before = grid.clone();
        let (_, caves) = builder(&settings).build(&mut grid, &mut derive_stream("cave", ""));
        assert_eq!(caves, 1);

        for (pos, v) in before.occupied() {
            if pos.y < FLOOR {
                // Only buried soil changes below the natural surface.
                let now = grid.get(pos.x, pos.y, pos.z);
                assert!(now == v || now.is_stone(), "{pos:?} {v:?} -> {now:?}");
            }
        }
    }

    #[test]
    fn test_zero_chance_builds_nothing() {
        let settings = BorderHillSettings {
            chance: 0.0,
            ..Default::default()
        };
        let mut grid = grassland(GridDims::cube(16));
        let before = grid.clone();
        assert_eq!(builder(&settings).build(&mut grid, &mut derive_stream("x", "")), (0, 0));
        assert_eq!(grid, before);
    }

    #[test]
    fn test_inward_directions() {
        assert_eq!(Edge::NegX.inward(), IVec2::X);
        assert_eq!(Edge::PosZ.inward(), IVec2::NEG_Y);
    }
}
