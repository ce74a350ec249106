//! Face directions and visibility rules for turning a grid into geometry.
//!
//! The grid is the only thing handed to the meshing side. Solid materials are
//! drawn per voxel; flood-fill materials such as water are drawn as one
//! seamless shell, which needs the rule implemented here: a face is emitted
//! only when the neighbour across it is a different material. Neighbours
//! outside the grid read as empty, so chunk borders always get a face.

use glam::IVec3;

use crate::grid::VoxelGrid;
use crate::palette::MaterialPalette;
use crate::voxel::Voxel;

/// One of the six axis directions a voxel face can point.
///
/// The discriminant is the bit index inside [`VisibleFaces`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum FaceDirection {
    PosX = 0,
    NegX = 1,
    PosY = 2,
    NegY = 3,
    PosZ = 4,
    NegZ = 5,
}

impl FaceDirection {
    /// All six directions in bit order.
    pub const ALL: [FaceDirection; 6] = [
        Self::PosX,
        Self::NegX,
        Self::PosY,
        Self::NegY,
        Self::PosZ,
        Self::NegZ,
    ];

    /// Unit step towards the neighbour across this face.
    pub fn step(self) -> IVec3 {
        match self {
            Self::PosX => IVec3::X,
            Self::NegX => IVec3::NEG_X,
            Self::PosY => IVec3::Y,
            Self::NegY => IVec3::NEG_Y,
            Self::PosZ => IVec3::Z,
            Self::NegZ => IVec3::NEG_Z,
        }
    }

    /// Unit normal for vertex data.
    pub fn normal(self) -> [f32; 3] {
        let s = self.step();
        [s.x as f32, s.y as f32, s.z as f32]
    }

    pub fn opposite(self) -> Self {
        match self {
            Self::PosX => Self::NegX,
            Self::NegX => Self::PosX,
            Self::PosY => Self::NegY,
            Self::NegY => Self::PosY,
            Self::PosZ => Self::NegZ,
            Self::NegZ => Self::PosZ,
        }
    }
}

/// Bitmask of which of a voxel's six faces are visible.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct VisibleFaces(pub u8);

impl VisibleFaces {
    pub const NONE: Self = Self(0);
    pub const ALL: Self = Self(0b0011_1111);

    pub fn is_visible(self, direction: FaceDirection) -> bool {
        self.0 & (1 << direction as u8) != 0
    }

    pub fn set_visible(&mut self, direction: FaceDirection) {
        self.0 |= 1 << direction as u8;
    }

    /// Number of visible faces (0–6).
    pub fn count(self) -> u32 {
        self.0.count_ones()
    }
}

/// One quad of a flood-fill material's outer shell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FluidFace {
    /// Cell the face belongs to.
    pub position: IVec3,
    /// Direction the face points.
    pub direction: FaceDirection,
}

/// Faces of the voxel at `pos` whose neighbour holds a different material.
fn faces_against_other(grid: &VoxelGrid, pos: IVec3, voxel: Voxel) -> VisibleFaces {
    let mut faces = VisibleFaces::NONE;
    for dir in FaceDirection::ALL {
        let n = pos + dir.step();
        if grid.get(n.x, n.y, n.z) != voxel {
            faces.set_visible(dir);
        }
    }
    faces
}

/// Collects every face of `material` that borders something else.
///
/// Interior faces between two cells of `material` are skipped, which is what
/// makes a translucent body of water render as a single surface.
pub fn fluid_surface(grid: &VoxelGrid, material: Voxel) -> Vec<FluidFace> {
    let mut out = Vec::new();
    for (position, voxel) in grid.occupied() {
        if voxel != material {
            continue;
        }
        let faces = faces_against_other(grid, position, voxel);
        for direction in FaceDirection::ALL {
            if faces.is_visible(direction) {
                out.push(FluidFace {
                    position,
                    direction,
                });
            }
        }
    }
    out
}

/// Per-cell visible-face masks for the whole grid.
///
/// A face is visible when its neighbour is empty, when the cell itself is
/// transparent and the neighbour is a different material, or when an opaque
/// cell borders a transparent one. Empty cells get [`VisibleFaces::NONE`].
/// The result is indexed like the grid.
pub fn compute_visible_faces(grid: &VoxelGrid, palette: &MaterialPalette) -> Vec<VisibleFaces> {
    let dims = grid.dims();
    let mut result = vec![VisibleFaces::NONE; dims.volume()];

    for (i, &voxel) in grid.as_slice().iter().enumerate() {
        if voxel.is_empty() {
            continue;
        }
        let pos = dims.position(i);
        let self_transparent = palette.is_transparent(voxel);
        let mut faces = VisibleFaces::NONE;

        for dir in FaceDirection::ALL {
            let n = pos + dir.step();
            let neighbour = grid.get(n.x, n.y, n.z);
            if neighbour.is_empty() {
                faces.set_visible(dir);
            } else if self_transparent {
                if neighbour != voxel {
                    faces.set_visible(dir);
                }
            } else if palette.is_transparent(neighbour) {
                faces.set_visible(dir);
            }
        }
        result[i] = faces;
    }

    result
}
