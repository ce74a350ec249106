//! Configuration for voxbiome.
//!
//! Holds the per-biome generation settings and the application config that
//! wraps them. Everything persists to disk as RON, missing fields fall back to
//! defaults, and CLI flags (clap) override the loaded values.

mod biome;
mod cli;
mod config;
mod error;

pub use biome::{
    BeachGrassSettings, BeachSettings, BeachTreeSettings, BiomeSettings, BorderHillSettings,
    CaveSettings, DirtStoneTransition, FlatSettings, ForestSettings, ForestTreeSettings,
    PebbleSettings, RockSettings, SandShades, StoneVariations,
};
pub use cli::CliArgs;
pub use config::{ChunkConfig, Config, DebugConfig, GenerationConfig};
pub use error::ConfigError;
