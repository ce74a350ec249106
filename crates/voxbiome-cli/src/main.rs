//! `voxbiome`: generate one chunk and print what is in it.
//!
//! Run with: `cargo run -p voxbiome-cli -- --biome forest --seed moss --map`

mod report;

use std::process::ExitCode;

use clap::Parser;
use tracing::info;
use voxbiome_config::{CliArgs, Config};
use voxbiome_terrain::BiomeRegistry;
use voxbiome_voxel::MaterialPalette;

fn main() -> ExitCode {
    let args = CliArgs::parse();

    let config_dir = match args.config.clone().map_or_else(Config::default_dir, Ok) {
        Ok(dir) => dir,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    // Load or create config, then apply CLI overrides
    let mut config = Config::load_or_create(&config_dir).unwrap_or_else(|e| {
        eprintln!("Failed to load config: {e}, using defaults");
        Config::default()
    });
    config.apply_cli_overrides(&args);
    if let Err(e) = config.validate() {
        eprintln!("{e}");
        return ExitCode::FAILURE;
    }

    let log_dir = config_dir.join("logs");
    if let Err(e) = voxbiome_log::init_logging(Some(&log_dir), cfg!(debug_assertions), Some(&config)) {
        eprintln!("logging disabled: {e}");
    }

    let registry = BiomeRegistry::standard(&config.biomes);
    if args.list_biomes {
        print!("{}", report::biome_list(&registry));
        return ExitCode::SUCCESS;
    }

    let dims = config.chunk.dims();
    info!(
        "Generating {} with seed {:?} at {}x{}x{}",
        config.generation.biome, config.generation.seed, dims.x, dims.y, dims.z
    );
    let chunk = match registry.generate(&config.generation.biome, &config.generation.seed, dims) {
        Ok(chunk) => chunk,
        Err(e) => {
            eprintln!("{e}");
            eprintln!("available biomes: {}", registry.ids().collect::<Vec<_>>().join(", "));
            return ExitCode::FAILURE;
        }
    };

    let palette = MaterialPalette::builtin();
    println!("biome: {}  seed: {}", chunk.biome_id, chunk.scoped_seed);
    print!("{}", report::histogram(&chunk.grid, &palette));
    print!("{}", report::summary(&chunk.summary));
    if args.map {
        print!("{}", report::height_map(&chunk.grid));
    }
    ExitCode::SUCCESS
}
