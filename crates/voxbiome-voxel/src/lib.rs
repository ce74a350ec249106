//! Voxel codes, the material palette, dense chunk grids, and face visibility.

pub mod faces;
pub mod grid;
pub mod palette;
pub mod voxel;

pub use faces::{FaceDirection, FluidFace, VisibleFaces, compute_visible_faces, fluid_surface};
pub use grid::{GridDims, VoxelGrid};
pub use palette::{MaterialDef, MaterialPalette, PaletteError, Transparency};
pub use voxel::Voxel;
