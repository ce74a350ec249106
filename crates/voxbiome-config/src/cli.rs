//! Command-line arguments.

use std::path::PathBuf;

use clap::Parser;

use crate::Config;

/// Generate one voxel chunk for a biome and print what came out.
///
/// CLI values override settings loaded from `config.ron`.
#[derive(Parser, Debug, Default)]
#[command(name = "voxbiome", about = "Procedural voxel biome generator")]
pub struct CliArgs {
    /// Biome id (e.g. beach, forest, test_plain).
    #[arg(long)]
    pub biome: Option<String>,

    /// Seed string. An empty string picks a random seed.
    #[arg(long)]
    pub seed: Option<String>,

    /// Cubic chunk size in voxels.
    #[arg(long)]
    pub size: Option<usize>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// List registered biomes and exit.
    #[arg(long)]
    pub list_biomes: bool,

    /// Print a top-down height map of the generated chunk.
    #[arg(long)]
    pub map: bool,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(ref biome) = args.biome {
            self.generation.biome = biome.clone();
        }
        if let Some(ref seed) = args.seed {
            self.generation.seed = seed.clone();
        }
        if let Some(size) = args.size {
            self.chunk.size_x = size;
            self.chunk.size_y = size;
            self.chunk.size_z = size;
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_override() {
        let mut config = Config::default();
        let args = CliArgs {
            biome: Some("forest".to_string()),
            size: Some(32),
            ..Default::default()
        };
        config.apply_cli_overrides(&args);
        assert_eq!(config.generation.biome, "forest");
        assert_eq!(config.chunk.size_x, 32);
        assert_eq!(config.chunk.size_z, 32);
        // Non-overridden fields retain defaults
        assert_eq!(config.generation.seed, "hello world");
        assert_eq!(config.debug.log_level, "info");
    }

    #[test]
    fn test_cli_no_override() {
        let original = Config::default();
        let mut config = Config::default();
        config.apply_cli_overrides(&CliArgs::default());
        assert_eq!(config, original);
    }

    #[test]
    fn test_parse_flags() {
        let args = CliArgs::parse_from([
            "voxbiome", "--biome", "beach", "--seed", "", "--map", "--size", "16",
        ]);
        assert_eq!(args.biome.as_deref(), Some("beach"));
        assert_eq!(args.seed.as_deref(), Some(""));
        assert_eq!(args.size, Some(16));
        assert!(args.map);
        assert!(!args.list_biomes);
    }
}
