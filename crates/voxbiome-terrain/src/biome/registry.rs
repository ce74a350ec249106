//! Biome registry: maps biome ids to generators with display metadata.

use std::time::Instant;

use hashbrown::HashMap;
use voxbiome_config::BiomeSettings;
use voxbiome_voxel::GridDims;

use super::{BeachGenerator, FlatGenerator, ForestGenerator};
use crate::chunk::GeneratedChunk;
use crate::error::TerrainError;
use crate::seed::derive_scoped_seed;

/// Builds one chunk of a single biome.
///
/// Implementations must be pure: the output depends only on `dims`, the
/// scoped seed and the generator's own immutable settings.
pub trait BiomeGenerator: Send + Sync {
    /// Registry id, e.g. `"beach"`.
    fn id(&self) -> &str;

    /// Generates a chunk from an already scoped seed.
    fn generate(&self, dims: GridDims, scoped_seed: &str) -> GeneratedChunk;
}

/// A registered biome.
pub struct BiomeEntry {
    /// Human-readable name for menus.
    pub display_name: String,
    /// Environment asset passed through to the renderer unresolved.
    pub environment_asset: Option<String>,
    generator: Box<dyn BiomeGenerator>,
}

impl BiomeEntry {
    pub fn new(
        generator: impl BiomeGenerator + 'static,
        display_name: impl Into<String>,
        environment_asset: Option<String>,
    ) -> Self {
        Self {
            display_name: display_name.into(),
            environment_asset,
            generator: Box::new(generator),
        }
    }

    pub fn id(&self) -> &str {
        self.generator.id()
    }

    pub fn generator(&self) -> &dyn BiomeGenerator {
        self.generator.as_ref()
    }
}

impl std::fmt::Debug for BiomeEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BiomeEntry")
            .field("id", &self.id())
            .field("display_name", &self.display_name)
            .field("environment_asset", &self.environment_asset)
            .finish()
    }
}

/// Stores registered biomes in registration order with O(1) lookup by id.
#[derive(Debug, Default)]
pub struct BiomeRegistry {
    entries: Vec<BiomeEntry>,
    id_to_index: HashMap<String, usize>,
}

impl BiomeRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with the built-in `beach`, `forest` and `test_plain` biomes.
    pub fn standard(settings: &BiomeSettings) -> Self {
        let mut registry = Self::new();
        let builtin = [
            BiomeEntry::new(
                BeachGenerator::new(settings.beach.clone()),
                settings.beach.name.clone(),
                settings.beach.environment_asset.clone(),
            ),
            BiomeEntry::new(
                ForestGenerator::new(settings.forest.clone()),
                settings.forest.name.clone(),
                settings.forest.environment_asset.clone(),
            ),
            BiomeEntry::new(
                FlatGenerator::new(settings.flat.clone()),
                settings.flat.name.clone(),
                settings.flat.environment_asset.clone(),
            ),
        ];
        for entry in builtin {
            if let Err(e) = registry.register(entry) {
                tracing::error!("built-in biome rejected: {e}");
            }
        }
        registry
    }

    /// Adds a biome.
    ///
    /// # Errors
    ///
    /// Returns [`TerrainError::DuplicateBiome`] if the id is taken.
    pub fn register(&mut self, entry: BiomeEntry) -> Result<(), TerrainError> {
        let id = entry.id().to_string();
        if self.id_to_index.contains_key(&id) {
            return Err(TerrainError::DuplicateBiome(id));
        }
        self.id_to_index.insert(id, self.entries.len());
        self.entries.push(entry);
        Ok(())
    }

    /// Looks up a biome by id.
    pub fn get(&self, biome_id: &str) -> Option<&BiomeEntry> {
        self.id_to_index.get(biome_id).map(|&i| &self.entries[i])
    }

    /// Ids in registration order.
    pub fn ids(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(BiomeEntry::id)
    }

    /// Entries in registration order.
    pub fn entries(&self) -> &[BiomeEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Scopes `user_seed` to `biome_id` and runs that biome's generator.
    ///
    /// An empty `user_seed` gives a random terrain; anything else is
    /// reproducible.
    ///
    /// # Errors
    ///
    /// Returns [`TerrainError::NotFound`] for an unknown id. No fallback biome
    /// is substituted.
    pub fn generate(
        &self,
        biome_id: &str,
        user_seed: &str,
        dims: GridDims,
    ) -> Result<GeneratedChunk, TerrainError> {
        let entry = self
            .get(biome_id)
            .ok_or_else(|| TerrainError::NotFound(biome_id.to_string()))?;
        let scoped_seed = derive_scoped_seed(biome_id, user_seed);

        let start = Instant::now();
        let chunk = entry.generator.generate(dims, &scoped_seed);
        tracing::info!(
            biome = biome_id,
            seed = %scoped_seed,
            size = ?(dims.x, dims.y, dims.z),
            elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
            "generated chunk"
        );
        Ok(chunk)
    }
}
