//! Deterministic procedural terrain: seeded streams and noise, column
//! layering, feature passes, and the per-biome generators behind a registry.
//!
//! ```no_run
//! use voxbiome_config::BiomeSettings;
//! use voxbiome_terrain::BiomeRegistry;
//! use voxbiome_voxel::GridDims;
//!
//! let registry = BiomeRegistry::standard(&BiomeSettings::default());
//! let chunk = registry.generate("beach", "hello world", GridDims::REFERENCE)?;
//! assert_eq!(chunk.grid.len(), 64 * 64 * 64);
//! # Ok::<(), voxbiome_terrain::TerrainError>(())
//! ```

pub mod biome;
pub mod chunk;
pub mod column;
pub mod error;
pub mod feature;
pub mod layering;
pub mod noise_field;
pub mod seed;

pub use biome::{
    BEACH_ID, BeachGenerator, BeachProfile, BiomeEntry, BiomeGenerator, BiomeRegistry, FLAT_ID,
    FOREST_ID, FlatGenerator, ForestGenerator,
};
pub use chunk::{FeatureSummary, GeneratedChunk};
pub use column::ColumnHeights;
pub use error::TerrainError;
pub use noise_field::NoiseField;
pub use seed::{StreamExt, derive_scoped_seed, derive_stream, seed_hash};
