//! Plain-text renderings of a generated chunk.

use std::fmt::Write;

use voxbiome_terrain::{BiomeRegistry, FeatureSummary};
use voxbiome_voxel::{MaterialPalette, Voxel, VoxelGrid};

/// Height ramp for the map, lowest first.
const RAMP: &[u8] = b".:-=+*#%@";

pub fn biome_list(registry: &BiomeRegistry) -> String {
    let mut out = String::new();
    for entry in registry.entries() {
        let asset = entry.environment_asset.as_deref().unwrap_or("-");
        let _ = writeln!(out, "{:<12} {:<12} {}", entry.id(), entry.display_name, asset);
    }
    out
}

/// Non-empty materials by descending count.
pub fn histogram(grid: &VoxelGrid, palette: &MaterialPalette) -> String {
    let mut counts = [0usize; 256];
    for v in grid.as_slice() {
        counts[v.0 as usize] += 1;
    }
    let mut rows: Vec<(Voxel, usize)> = counts
        .iter()
        .enumerate()
        .skip(1)
        .filter(|(_, n)| **n > 0)
        .map(|(code, &n)| (Voxel(code as u8), n))
        .collect();
    rows.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));

    let total = grid.len().max(1) as f64;
    let mut out = String::new();
    for (voxel, n) in rows {
        let name = palette.get(voxel).map_or("unknown", |d| d.name.as_str());
        let _ = writeln!(out, "{:>3} {:<20} {:>8} {:>6.2}%", voxel.0, name, n, n as f64 * 100.0 / total);
    }
    out
}

pub fn summary(s: &FeatureSummary) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "trees  {}/{}", s.trees_placed, s.trees_requested);
    let _ = writeln!(out, "rocks  {}/{}", s.rocks_placed, s.rocks_requested);
    let _ = writeln!(out, "pebbles {}  grass {}", s.pebbles_placed, s.grass_placed);
    let _ = writeln!(out, "hills  {}  caves {}", s.hills_raised, s.caves_carved);
    out
}

/// Top-down view, one character per column: `~` water, `T` tree, blank for
/// an empty column, otherwise a height shade.
pub fn height_map(grid: &VoxelGrid) -> String {
    let (sx, sy, sz) = grid.dims().signed();
    let mut out = String::with_capacity(((sx + 1) * sz.max(0)) as usize);
    for z in 0..sz {
        for x in 0..sx {
            let top = grid.top_where(x, z, |v| !v.is_empty(), |_| false);
            let c = match top.map(|y| (y, grid.get(x, y, z))) {
                None => ' ',
                Some((_, Voxel::WATER)) => '~',
                Some((_, v)) if is_tree(v) => 'T',
                Some((y, _)) => {
                    let i = (y as usize * RAMP.len()) / sy.max(1) as usize;
                    RAMP[i.min(RAMP.len() - 1)] as char
                }
            };
            out.push(c);
        }
        out.push('\n');
    }
    out
}

fn is_tree(v: Voxel) -> bool {
    v.is_leaf() || matches!(v, Voxel::PALM_TRUNK | Voxel::PALM_FROND | Voxel::FOREST_TRUNK)
}

#[cfg(test)]
mod tests {
    use super::*;
    use voxbiome_config::BiomeSettings;
    use voxbiome_voxel::GridDims;

    #[test]
    fn test_histogram_orders_by_count() {
        let mut grid = VoxelGrid::new(GridDims::cube(4));
        for x in 0..4 {
            grid.set(x, 0, 0, Voxel::SAND);
        }
        grid.set(0, 1, 0, Voxel::WATER);
        let text = histogram(&grid, &MaterialPalette::builtin());
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("sand"));
        assert!(lines[1].contains("water"));
    }

    #[test]
    fn test_height_map_symbols() {
        let mut grid = VoxelGrid::new(GridDims::new(3, 8, 1));
        grid.set(0, 7, 0, Voxel::GRASS);
        grid.set(1, 2, 0, Voxel::WATER);
        grid.set(1, 1, 0, Voxel::SAND);
        assert_eq!(height_map(&grid), "%~ \n");
    }

    #[test]
    fn test_biome_list_has_every_entry() {
        let text = biome_list(&BiomeRegistry::standard(&BiomeSettings::default()));
        assert_eq!(text.lines().count(), 3);
        assert!(text.contains("/forest.hdr"));
        assert!(text.starts_with("beach"));
    }
}
