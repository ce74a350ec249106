//! Application config with defaults and RON persistence.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use voxbiome_voxel::GridDims;

use crate::biome::BiomeSettings;
use crate::error::ConfigError;

const CONFIG_FILE: &str = "config.ron";

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Grid extents.
    pub chunk: ChunkConfig,
    /// Which biome to build and from which seed.
    pub generation: GenerationConfig,
    /// Tuning values for every biome.
    pub biomes: BiomeSettings,
    /// Logging.
    pub debug: DebugConfig,
}

/// Chunk extents in voxels.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ChunkConfig {
    pub size_x: usize,
    pub size_y: usize,
    pub size_z: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct GenerationConfig {
    /// Registry id of the biome (e.g. "beach", "forest").
    pub biome: String,
    /// User seed. Empty picks a fresh random seed on every run.
    pub seed: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    /// Log filter (e.g. "debug", "info,voxbiome_terrain=trace").
    pub log_level: String,
}

impl Default for ChunkConfig {
    fn default() -> Self {
        Self {
            size_x: 64,
            size_y: 64,
            size_z: 64,
        }
    }
}

impl ChunkConfig {
    pub fn dims(&self) -> GridDims {
        GridDims::new(self.size_x, self.size_y, self.size_z)
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            biome: "beach".to_string(),
            seed: "hello world".to_string(),
        }
    }
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

// --- Load / Save / Reload ---

impl Config {
    /// Platform config directory for voxbiome.
    pub fn default_dir() -> Result<PathBuf, ConfigError> {
        dirs::config_dir()
            .map(|dir| dir.join("voxbiome"))
            .ok_or(ConfigError::NoConfigDir)
    }

    /// Loads `config.ron` from `config_dir`, writing a default one if absent.
    pub fn load_or_create(config_dir: &Path) -> Result<Self, ConfigError> {
        let path = config_dir.join(CONFIG_FILE);

        if path.exists() {
            let config = Self::read(&path)?;
            log::info!("Loaded config from {}", path.display());
            Ok(config)
        } else {
            let config = Config::default();
            config.save(config_dir)?;
            log::info!("Created default config at {}", path.display());
            Ok(config)
        }
    }

    /// Writes `config.ron` into `config_dir`, creating the directory.
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        std::fs::create_dir_all(config_dir).map_err(|source| ConfigError::Write {
            path: config_dir.to_path_buf(),
            source,
        })?;

        let path = config_dir.join(CONFIG_FILE);
        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(4)
            .enumerate_arrays(false);
        let serialized = ron::ser::to_string_pretty(self, pretty)?;

        std::fs::write(&path, serialized).map_err(|source| ConfigError::Write { path, source })
    }

    /// Rejects values the generators cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let c = &self.chunk;
        if c.size_x == 0 || c.size_y == 0 || c.size_z == 0 {
            return Err(ConfigError::Invalid(format!(
                "chunk size must be non-zero, got {}x{}x{}",
                c.size_x, c.size_y, c.size_z
            )));
        }
        if c.size_x > 1024 || c.size_y > 1024 || c.size_z > 1024 {
            return Err(ConfigError::Invalid(format!(
                "chunk size {}x{}x{} exceeds 1024 on some axis",
                c.size_x, c.size_y, c.size_z
            )));
        }
        if self.generation.biome.is_empty() {
            return Err(ConfigError::Invalid("biome id is empty".to_string()));
        }
        Ok(())
    }

    fn read(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(ron::from_str(&contents)?)
    }
}
