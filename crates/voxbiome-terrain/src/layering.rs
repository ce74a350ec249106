//! Vertical material banding under a column's surface.
//!
//! A column is filled from `surface - 1` down to `y = 0` with a stack of
//! [`Band`]s. Where two bands meet, an optional [`MixZone`] lets voxels on
//! either side of the boundary swap to the neighbouring band's material so the
//! layers do not end in a hard line. Draws are taken top-down, one column at a
//! time, so output depends only on the stream and the scan order.

use rand::Rng;
use voxbiome_voxel::{Voxel, VoxelGrid};

use crate::seed::StreamExt;

/// A material that may be recoloured per voxel into a light or dark variant.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Shaded {
    pub base: Voxel,
    pub light: Voxel,
    pub light_chance: f64,
    pub dark: Voxel,
    pub dark_chance: f64,
}

impl Shaded {
    /// Always `base`; never draws from the stream.
    pub const fn solid(base: Voxel) -> Self {
        Self {
            base,
            light: base,
            light_chance: 0.0,
            dark: base,
            dark_chance: 0.0,
        }
    }

    pub const fn new(
        base: Voxel,
        light: Voxel,
        light_chance: f64,
        dark: Voxel,
        dark_chance: f64,
    ) -> Self {
        Self {
            base,
            light,
            light_chance,
            dark,
            dark_chance,
        }
    }

    /// Picks a shade. Takes one draw unless both chances are zero.
    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> Voxel {
        if self.light_chance <= 0.0 && self.dark_chance <= 0.0 {
            return self.base;
        }
        let r = rng.unit();
        if r < self.light_chance {
            self.light
        } else if r < self.light_chance + self.dark_chance {
            self.dark
        } else {
            self.base
        }
    }
}

/// One band of the stack. `depth: None` extends to the bottom of the grid.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Band {
    pub depth: Option<i32>,
    pub material: Shaded,
}

impl Band {
    pub const fn layers(depth: i32, material: Shaded) -> Self {
        Self {
            depth: Some(depth),
            material,
        }
    }

    pub const fn rest(material: Shaded) -> Self {
        Self {
            depth: None,
            material,
        }
    }
}

/// Probabilistic swap across every band boundary.
///
/// The lowest `depth` layers of the upper band may take the lower band's
/// material and the highest `depth` layers of the lower band may take the
/// upper band's material, each with probability `chance`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MixZone {
    pub depth: i32,
    pub chance: f64,
}

/// Fills column `(x, z)` below `surface` with `bands`.
///
/// The surface voxel itself is left alone. Depths below the last band stay
/// untouched, so a stack ending in a finite band leaves the bottom empty.
pub fn fill_banded_column<R: Rng + ?Sized>(
    grid: &mut VoxelGrid,
    x: i32,
    z: i32,
    surface: i32,
    bands: &[Band],
    mix: Option<MixZone>,
    rng: &mut R,
) {
    let mut band = 0;
    // Depth of the deepest layer of the current band (inclusive).
    let mut band_floor = bands.first().and_then(|b| b.depth).unwrap_or(i32::MAX);
    let mut band_top = 1;

    for y in (0..surface).rev() {
        let depth = surface - y;
        while depth > band_floor {
            band += 1;
            if band >= bands.len() {
                return;
            }
            band_top = band_floor + 1;
            band_floor = match bands[band].depth {
                Some(d) => band_floor.saturating_add(d),
                None => i32::MAX,
            };
        }

        let current = &bands[band];
        let voxel = match mix {
            // Lower part of this band, above the next boundary: roll first.
            Some(m) if band + 1 < bands.len() && depth > band_floor.saturating_sub(m.depth) => {
                if rng.chance(m.chance) {
                    bands[band + 1].material.pick(rng)
                } else {
                    current.material.pick(rng)
                }
            }
            // Upper part of this band, below the previous boundary: shade first.
            Some(m) if band > 0 && depth < band_top.saturating_add(m.depth) => {
                let own = current.material.pick(rng);
                if rng.chance(m.chance) {
                    bands[band - 1].material.pick(rng)
                } else {
                    own
                }
            }
            _ => current.material.pick(rng),
        };
        grid.set(x, y, z, voxel);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::derive_stream;
    use voxbiome_voxel::GridDims;

    fn column(grid: &VoxelGrid, x: i32, z: i32) -> Vec<Voxel> {
        (0..grid.dims().y as i32).map(|y| grid.get(x, y, z)).collect()
    }

    #[test]
    fn test_plain_bands_without_mixing() {
        let mut grid = VoxelGrid::new(GridDims::new(1, 10, 1));
        let bands = [
            Band::layers(3, Shaded::solid(Voxel::SAND)),
            Band::rest(Shaded::solid(Voxel::SANDSTONE)),
        ];
        let mut rng = derive_stream("bands", "");
        fill_banded_column(&mut grid, 0, 0, 8, &bands, None, &mut rng);
        let col = column(&grid, 0, 0);
        assert!(col[..5].iter().all(|&v| v == Voxel::SANDSTONE));
        assert!(col[5..8].iter().all(|&v| v == Voxel::SAND));
        // The surface and above are not written.
        assert!(col[8..].iter().all(|&v| v == Voxel::EMPTY));
    }

    #[test]
    fn test_finite_stack_leaves_bottom_empty() {
        let mut grid = VoxelGrid::new(GridDims::new(1, 10, 1));
        let bands = [Band::layers(2, Shaded::solid(Voxel::DIRT_DARK))];
        let mut rng = derive_stream("bands", "");
        fill_banded_column(&mut grid, 0, 0, 6, &bands, None, &mut rng);
        let col = column(&grid, 0, 0);
        assert_eq!(col[5], Voxel::DIRT_DARK);
        assert_eq!(col[4], Voxel::DIRT_DARK);
        assert_eq!(col[3], Voxel::EMPTY);
    }

    #[test]
    fn test_mixing_confined_to_boundary_zone() {
        let dirt = Voxel::DIRT_MEDIUM;
        let bands = [
            Band::layers(5, Shaded::solid(dirt)),
            Band::rest(Shaded::solid(Voxel::STONE)),
        ];
        let mix = MixZone {
            depth: 2,
            chance: 0.5,
        };
        let mut grid = VoxelGrid::new(GridDims::new(16, 32, 16));
        let mut rng = derive_stream("mix", "");
        let surface = 20;
        for x in 0..16 {
            for z in 0..16 {
                fill_banded_column(&mut grid, x, z, surface, &bands, Some(mix), &mut rng);
            }
        }

        let mut swapped_up = 0;
        let mut swapped_down = 0;
        for x in 0..16 {
            for z in 0..16 {
                for y in 0..surface {
                    let depth = surface - y;
                    let v = grid.get(x, y, z);
                    match depth {
                        1..=3 => assert_eq!(v, dirt),
                        4..=5 => swapped_down += usize::from(v == Voxel::STONE),
                        6..=7 => swapped_up += usize::from(v == dirt),
                        _ => assert_eq!(v, Voxel::STONE, "depth {depth}"),
                    }
                }
            }
        }
        assert!(swapped_down > 0 && swapped_down < 512);
        assert!(swapped_up > 0 && swapped_up < 512);
    }

    #[test]
    fn test_shaded_pick_distribution() {
        let sand = Shaded::new(Voxel::SAND, Voxel::SAND_LIGHT, 0.2, Voxel::SAND_DARK, 0.2);
        let mut rng = derive_stream("shades", "");
        let picks: Vec<_> = (0..5000).map(|_| sand.pick(&mut rng)).collect();
        let light = picks.iter().filter(|&&v| v == Voxel::SAND_LIGHT).count();
        let dark = picks.iter().filter(|&&v| v == Voxel::SAND_DARK).count();
        let plain = picks.iter().filter(|&&v| v == Voxel::SAND).count();
        assert_eq!(light + dark + plain, 5000);
        assert!((700..1300).contains(&light));
        assert!((700..1300).contains(&dark));
    }

    #[test]
    fn test_solid_never_draws() {
        let mut a = derive_stream("solid", "");
        let b = a.clone();
        assert_eq!(Shaded::solid(Voxel::STONE).pick(&mut a), Voxel::STONE);
        assert_eq!(a, b);
    }

    #[test]
    fn test_same_stream_same_column() {
        let bands = [
            Band::layers(3, Shaded::new(Voxel::SAND, Voxel::SAND_LIGHT, 0.3, Voxel::SAND_DARK, 0.3)),
            Band::rest(Shaded::solid(Voxel::SANDSTONE)),
        ];
        let mut a = VoxelGrid::new(GridDims::new(1, 16, 1));
        let mut b = a.clone();
        fill_banded_column(&mut a, 0, 0, 12, &bands, None, &mut derive_stream("s", ""));
        fill_banded_column(&mut b, 0, 0, 12, &bands, None, &mut derive_stream("s", ""));
        assert_eq!(a, b);
    }
}
