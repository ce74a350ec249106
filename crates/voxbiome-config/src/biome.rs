//! Per-biome generation settings.
//!
//! Each biome gets one immutable record of tuning values. The defaults are the
//! values the built-in biomes were tuned with on a 64³ chunk. Optional
//! sub-records switch a pass off entirely when absent (`None` in RON), which
//! is how a biome opts out of pebbles, hills, stone colouring and so on.

use serde::{Deserialize, Serialize};
use voxbiome_voxel::Voxel;

/// Settings for every built-in biome.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct BiomeSettings {
    pub beach: BeachSettings,
    pub forest: ForestSettings,
    pub flat: FlatSettings,
}

// ---------------------------------------------------------------------------
// Beach
// ---------------------------------------------------------------------------

/// Sandy slope running down into a flooded shoreline along +Z.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct BeachSettings {
    /// Display name.
    pub name: String,
    /// Environment map handed to the renderer untouched.
    pub environment_asset: Option<String>,
    /// Water level as a fraction of chunk height.
    pub water_level_factor: f64,
    /// Z (fraction of chunk depth) where the slope begins. Negative values
    /// start the slope before the chunk, so the whole chunk slopes.
    pub beach_start_z_factor: f64,
    /// Inland surface height above water level, in voxels.
    pub inland_height_offset: i32,
    /// Dune noise amplitude as a fraction of chunk height.
    pub dune_variation_factor: f64,
    /// Spatial divisor for the dune noise.
    pub general_noise_scale: f64,
    /// Depth of the loose sand band under the surface; sandstone below.
    pub sand_band_depth: i32,
    /// How far inland of the slope start flooding may reach, in voxels.
    pub flood_margin: i32,
    pub sand_shades: SandShades,
    pub trees: BeachTreeSettings,
    pub rocks: Option<RockSettings>,
    pub beach_grass: Option<BeachGrassSettings>,
}

/// Chances of a sand voxel being the light or dark shade.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SandShades {
    pub light_chance: f64,
    pub dark_chance: f64,
}

/// Palm trees.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct BeachTreeSettings {
    /// Trees attempted per chunk.
    pub count: u32,
    pub min_height: i32,
    pub max_height: i32,
    /// Frond length of the lowest layer, in voxels.
    pub frond_radius: f64,
    /// Trunk footprint is `thickness × thickness`.
    pub trunk_thickness: i32,
    /// Strength of the lateral trunk curve.
    pub curve_factor: f64,
    pub placement_noise_scale: f64,
    /// Placement noise (in `[0, 1]`) a site must reach while the bias holds.
    pub placement_threshold: f64,
    /// Attempts after which the placement-noise bias is dropped.
    pub noise_relax_after: u32,
    pub max_placement_attempts: u32,
    pub frond_layers: u32,
}

/// Single-voxel rocks sitting on dry sand.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RockSettings {
    pub count_min: u32,
    pub count_max: u32,
    pub max_placement_attempts: u32,
}

/// Grass tufts replacing dry sand away from the waterline.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct BeachGrassSettings {
    /// Per-column chance for an eligible column.
    pub density: f64,
    /// Lateral radius that must be free of water on all four axes.
    pub min_distance_from_water: i32,
}

impl Default for BeachSettings {
    fn default() -> Self {
        Self {
            name: "Beach".to_string(),
            environment_asset: Some("/sunset.hdr".to_string()),
            water_level_factor: 1.0 / 6.0,
            beach_start_z_factor: -0.08,
            inland_height_offset: 1,
            dune_variation_factor: 1.0 / 12.0,
            general_noise_scale: 40.0,
            sand_band_depth: 3,
            flood_margin: 5,
            sand_shades: SandShades::default(),
            trees: BeachTreeSettings::default(),
            rocks: Some(RockSettings::default()),
            beach_grass: Some(BeachGrassSettings::default()),
        }
    }
}

impl Default for SandShades {
    fn default() -> Self {
        Self {
            light_chance: 0.2,
            dark_chance: 0.2,
        }
    }
}

impl Default for BeachTreeSettings {
    fn default() -> Self {
        Self {
            count: 2,
            min_height: 15,
            max_height: 20,
            frond_radius: 5.0,
            trunk_thickness: 2,
            curve_factor: 0.15,
            placement_noise_scale: 20.0,
            placement_threshold: 0.35,
            noise_relax_after: 5,
            max_placement_attempts: 50,
            frond_layers: 3,
        }
    }
}

impl Default for RockSettings {
    fn default() -> Self {
        Self {
            count_min: 4,
            count_max: 8,
            max_placement_attempts: 20,
        }
    }
}

impl Default for BeachGrassSettings {
    fn default() -> Self {
        Self {
            density: 0.03,
            min_distance_from_water: 3,
        }
    }
}

// ---------------------------------------------------------------------------
// Forest
// ---------------------------------------------------------------------------

/// Rolling forest floor with conifers, pebbles and a border hill.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ForestSettings {
    pub name: String,
    pub environment_asset: Option<String>,
    /// Average floor height as a fraction of chunk height.
    pub base_height_factor: f64,
    pub terrain_noise_scale: f64,
    pub terrain_noise_amplitude: f64,
    /// Chance a surface voxel is bare dirt instead of grass.
    pub surface_dirt_patch_chance: f64,
    /// Chance (checked after the dirt roll) of a floor-detail voxel.
    pub floor_detail_chance: f64,
    /// Dirt voxels directly under the surface; stone below.
    pub dirt_layer_depth: i32,
    pub trees: ForestTreeSettings,
    pub pebbles: Option<PebbleSettings>,
    pub border_hills: Option<BorderHillSettings>,
    pub stone_variations: Option<StoneVariations>,
    pub dirt_stone_transition: Option<DirtStoneTransition>,
}

/// Conifers: straight trunk, stacked shrinking leaf disks.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ForestTreeSettings {
    pub count_min: u32,
    pub count_max: u32,
    pub min_height: i32,
    pub max_height: i32,
    pub trunk_thickness: i32,
    pub leaf_layers_min: u32,
    pub leaf_layers_max: u32,
    pub leaf_layer_height: i32,
    pub base_leaf_radius_max: f64,
    pub placement_noise_scale: f64,
    pub placement_threshold: f64,
    /// Minimum distance between tree bases.
    pub min_distance: f64,
    pub max_placement_attempts: u32,
    /// Chance a leaf voxel uses the alternate colour.
    pub alt_leaf_chance: f64,
    /// Largest rise of the ground above the natural floor a tree may stand on.
    pub max_hill_rise: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PebbleSettings {
    pub density: f64,
    pub max_per_chunk: u32,
    /// Pebbles are only placed on ground strictly below this height.
    pub max_y: i32,
}

/// Hills raised against one chunk edge.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct BorderHillSettings {
    pub chance: f64,
    pub max_hills: u32,
    pub min_radius: f64,
    pub max_radius: f64,
    pub min_height: f64,
    pub max_height: f64,
    /// Hill centres sit at most this many voxels in from the edge.
    pub border_proximity: u32,
    pub cave: Option<CaveSettings>,
}

/// Tunnel carved into a sufficiently tall hill.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CaveSettings {
    pub chance: f64,
    pub min_hill_height: f64,
    pub entrance_width: i32,
    pub entrance_height: i32,
    /// Cave floor height above the natural surface at the entrance.
    pub floor_offset: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct StoneVariations {
    pub light_chance: f64,
    pub dark_chance: f64,
}

/// Probabilistic mixing where the dirt band meets stone.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DirtStoneTransition {
    /// Layers on each side of the boundary that may swap.
    pub depth: i32,
    pub mix_chance: f64,
}

impl Default for ForestSettings {
    fn default() -> Self {
        Self {
            name: "Forest".to_string(),
            environment_asset: Some("/forest.hdr".to_string()),
            base_height_factor: 1.0 / 3.0,
            terrain_noise_scale: 30.0,
            terrain_noise_amplitude: 5.0,
            surface_dirt_patch_chance: 0.30,
            floor_detail_chance: 0.10,
            dirt_layer_depth: 5,
            trees: ForestTreeSettings::default(),
            pebbles: Some(PebbleSettings::default()),
            border_hills: Some(BorderHillSettings::default()),
            stone_variations: Some(StoneVariations::default()),
            dirt_stone_transition: Some(DirtStoneTransition::default()),
        }
    }
}

impl Default for ForestTreeSettings {
    fn default() -> Self {
        Self {
            count_min: 30,
            count_max: 40,
            min_height: 8,
            max_height: 15,
            trunk_thickness: 2,
            leaf_layers_min: 3,
            leaf_layers_max: 5,
            leaf_layer_height: 2,
            base_leaf_radius_max: 4.0,
            placement_noise_scale: 20.0,
            placement_threshold: 0.4,
            min_distance: 5.0,
            max_placement_attempts: 30,
            alt_leaf_chance: 0.3,
            max_hill_rise: 3,
        }
    }
}

impl Default for PebbleSettings {
    fn default() -> Self {
        Self {
            density: 0.05,
            max_per_chunk: 50,
            max_y: 62,
        }
    }
}

impl Default for BorderHillSettings {
    fn default() -> Self {
        Self {
            chance: 1.0,
            max_hills: 1,
            min_radius: 10.0,
            max_radius: 12.0,
            min_height: 9.0,
            max_height: 13.0,
            border_proximity: 5,
            cave: Some(CaveSettings::default()),
        }
    }
}

impl Default for CaveSettings {
    fn default() -> Self {
        Self {
            chance: 1.0,
            min_hill_height: 5.0,
            entrance_width: 5,
            entrance_height: 5,
            floor_offset: 1,
        }
    }
}

impl Default for StoneVariations {
    fn default() -> Self {
        Self {
            light_chance: 0.2,
            dark_chance: 0.2,
        }
    }
}

impl Default for DirtStoneTransition {
    fn default() -> Self {
        Self {
            depth: 2,
            mix_chance: 0.35,
        }
    }
}

// ---------------------------------------------------------------------------
// Flat test plain
// ---------------------------------------------------------------------------

/// A single material up to a fixed fraction of the chunk height.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct FlatSettings {
    pub name: String,
    pub environment_asset: Option<String>,
    /// Filled cells are `y < floor(height * height_fraction)`.
    pub height_fraction: f64,
    pub material: Voxel,
}

impl Default for FlatSettings {
    fn default() -> Self {
        Self {
            name: "Test Plain".to_string(),
            environment_asset: None,
            height_fraction: 0.25,
            material: Voxel::GRASS,
        }
    }
}
