//! Material palette: maps [`Voxel`] codes to [`MaterialDef`] metadata.
//!
//! The palette is what the presentation layer needs to turn a grid into
//! meshes: a name, a transparency mode and a display colour per code. Empty is
//! always code 0.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::voxel::Voxel;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Transparency mode for a material.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Transparency {
    /// Fully blocks visibility.
    Opaque,
    /// Partially transparent (water).
    SemiTransparent,
    /// Completely transparent (empty).
    FullyTransparent,
}

/// Descriptor for one material code.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MaterialDef {
    /// Human-readable name (e.g. "sand", "water").
    pub name: String,
    /// Transparency mode.
    pub transparency: Transparency,
    /// Display colour as `0xRRGGBB`.
    pub color: u32,
}

impl MaterialDef {
    fn opaque(name: &str, color: u32) -> Self {
        Self {
            name: name.to_string(),
            transparency: Transparency::Opaque,
            color,
        }
    }
}

/// Errors that can occur during material registration.
#[derive(Debug, Error)]
pub enum PaletteError {
    /// A material with the same name has already been registered.
    #[error("duplicate material name: {0}")]
    DuplicateName(String),
    /// All 256 codes have been consumed.
    #[error("material palette is full (max 256 materials)")]
    Full,
}

// ---------------------------------------------------------------------------
// Palette
// ---------------------------------------------------------------------------

/// Dense code → material table with reverse lookup by name.
pub struct MaterialPalette {
    /// `index == Voxel.0`.
    materials: Vec<MaterialDef>,
    name_to_code: FxHashMap<String, Voxel>,
}

impl MaterialPalette {
    /// Creates a palette with only empty registered.
    pub fn new() -> Self {
        let empty = MaterialDef {
            name: "empty".to_string(),
            transparency: Transparency::FullyTransparent,
            color: 0x000000,
        };
        let mut name_to_code = FxHashMap::default();
        name_to_code.insert(empty.name.clone(), Voxel::EMPTY);
        Self {
            materials: vec![empty],
            name_to_code,
        }
    }

    /// The palette every built-in generator writes into.
    ///
    /// Registration order matches the [`Voxel`] constants, so the returned
    /// codes line up with them one to one.
    pub fn builtin() -> Self {
        let defs = [
            MaterialDef::opaque("mushroom_cap", 0xB22222),
            MaterialDef::opaque("mushroom_stem", 0xF5F5DC),
            MaterialDef::opaque("grass", 0x2E6F40),
            MaterialDef::opaque("dirt_light", 0x9B7653),
            MaterialDef::opaque("dirt_medium", 0x70543E),
            MaterialDef::opaque("dirt_dark", 0x4F3A2B),
            MaterialDef::opaque("sand", 0xF4E0AC),
            MaterialDef::opaque("sandstone", 0xD8C08C),
            MaterialDef {
                name: "water".to_string(),
                transparency: Transparency::SemiTransparent,
                color: 0x4682B4,
            },
            MaterialDef::opaque("palm_trunk", 0x8B4513),
            MaterialDef::opaque("palm_frond", 0x228B22),
            MaterialDef::opaque("sand_light", 0xF8E8BC),
            MaterialDef::opaque("sand_dark", 0xE0D09C),
            MaterialDef::opaque("rock", 0x888888),
            MaterialDef::opaque("beach_grass", 0xA0A070),
            MaterialDef::opaque("forest_trunk", 0x5D4037),
            MaterialDef::opaque("forest_leaves", 0x2E7D32),
            MaterialDef::opaque("forest_floor_detail", 0x4A3B31),
            MaterialDef::opaque("pebble", 0xA9A9A9),
            MaterialDef::opaque("stone", 0x808080),
            MaterialDef::opaque("stone_light", 0x989898),
            MaterialDef::opaque("stone_dark", 0x686868),
            MaterialDef::opaque("forest_leaves_alt", 0x558B2F),
        ];

        let mut palette = Self::new();
        for def in defs {
            // Names above are unique and far below the code limit.
            if let Err(err) = palette.register(def) {
                tracing::error!("built-in material rejected: {err}");
            }
        }
        palette
    }

    /// Registers a material and returns its assigned code.
    ///
    /// # Errors
    ///
    /// Returns [`PaletteError::DuplicateName`] if the name is taken, or
    /// [`PaletteError::Full`] once all 256 codes are in use.
    pub fn register(&mut self, def: MaterialDef) -> Result<Voxel, PaletteError> {
        if self.name_to_code.contains_key(&def.name) {
            return Err(PaletteError::DuplicateName(def.name));
        }
        if self.materials.len() > u8::MAX as usize {
            return Err(PaletteError::Full);
        }

        let code = Voxel(self.materials.len() as u8);
        self.name_to_code.insert(def.name.clone(), code);
        self.materials.push(def);
        Ok(code)
    }

    /// Returns the definition for a code, or `None` if it was never registered.
    pub fn get(&self, voxel: Voxel) -> Option<&MaterialDef> {
        self.materials.get(voxel.0 as usize)
    }

    /// Returns the code for a named material.
    pub fn lookup_by_name(&self, name: &str) -> Option<Voxel> {
        self.name_to_code.get(name).copied()
    }

    /// Number of registered materials, including empty.
    pub fn len(&self) -> usize {
        self.materials.len()
    }

    /// Returns `true` if only empty is registered.
    pub fn is_empty(&self) -> bool {
        self.materials.len() <= 1
    }

    /// Returns `true` if the material lets light through (fully or partly).
    ///
    /// Unknown codes are treated like empty.
    pub fn is_transparent(&self, voxel: Voxel) -> bool {
        match self.get(voxel) {
            Some(def) => def.transparency != Transparency::Opaque,
            None => true,
        }
    }
}

impl Default for MaterialPalette {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
