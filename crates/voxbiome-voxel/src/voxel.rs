//! The voxel material code space.
//!
//! A [`Voxel`] is a single byte. Code `0` is reserved for empty space so that a
//! zero-filled buffer is an empty chunk. Codes are open-ended: generators may
//! write any value and the palette decides how it is drawn.

use serde::{Deserialize, Serialize};

/// Material code stored in every grid cell.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Voxel(pub u8);

impl Voxel {
    /// Empty space (air).
    pub const EMPTY: Self = Self(0);
    pub const MUSHROOM_CAP: Self = Self(1);
    pub const MUSHROOM_STEM: Self = Self(2);
    pub const GRASS: Self = Self(3);
    pub const DIRT_LIGHT: Self = Self(4);
    pub const DIRT_MEDIUM: Self = Self(5);
    pub const DIRT_DARK: Self = Self(6);
    pub const SAND: Self = Self(7);
    pub const SANDSTONE: Self = Self(8);
    pub const WATER: Self = Self(9);
    pub const PALM_TRUNK: Self = Self(10);
    pub const PALM_FROND: Self = Self(11);
    pub const SAND_LIGHT: Self = Self(12);
    pub const SAND_DARK: Self = Self(13);
    pub const ROCK: Self = Self(14);
    pub const BEACH_GRASS: Self = Self(15);
    pub const FOREST_TRUNK: Self = Self(16);
    pub const FOREST_LEAVES: Self = Self(17);
    pub const FOREST_FLOOR_DETAIL: Self = Self(18);
    pub const PEBBLE: Self = Self(19);
    pub const STONE: Self = Self(20);
    pub const STONE_LIGHT: Self = Self(21);
    pub const STONE_DARK: Self = Self(22);
    pub const FOREST_LEAVES_ALT: Self = Self(23);

    /// Returns `true` for the reserved empty code.
    #[inline]
    pub fn is_empty(self) -> bool {
        self == Self::EMPTY
    }

    /// Any of the three sand shades.
    #[inline]
    pub fn is_sand(self) -> bool {
        matches!(self, Self::SAND | Self::SAND_LIGHT | Self::SAND_DARK)
    }

    /// Base stone or one of its colour variants.
    #[inline]
    pub fn is_stone(self) -> bool {
        matches!(self, Self::STONE | Self::STONE_LIGHT | Self::STONE_DARK)
    }

    /// Either forest leaf colour.
    #[inline]
    pub fn is_leaf(self) -> bool {
        matches!(self, Self::FOREST_LEAVES | Self::FOREST_LEAVES_ALT)
    }
}

impl From<u8> for Voxel {
    fn from(code: u8) -> Self {
        Self(code)
    }
}

impl From<Voxel> for u8 {
    fn from(voxel: Voxel) -> Self {
        voxel.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_is_zero_and_default() {
        assert_eq!(Voxel::EMPTY.0, 0);
        assert_eq!(Voxel::default(), Voxel::EMPTY);
        assert!(Voxel::EMPTY.is_empty());
        assert!(!Voxel::GRASS.is_empty());
    }

    #[test]
    fn test_material_groups() {
        assert!(Voxel::SAND_DARK.is_sand());
        assert!(!Voxel::SANDSTONE.is_sand());
        assert!(Voxel::STONE_LIGHT.is_stone());
        assert!(!Voxel::PEBBLE.is_stone());
        assert!(Voxel::FOREST_LEAVES_ALT.is_leaf());
        assert!(!Voxel::PALM_FROND.is_leaf());
    }

    #[test]
    fn test_open_code_space() {
        let custom = Voxel::from(200u8);
        assert_eq!(u8::from(custom), 200);
        assert!(!custom.is_empty());
    }
}
