//! Errors raised by the biome registry.

/// Biome lookup and registration failures.
///
/// Generation itself cannot fail once a biome is found.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum TerrainError {
    /// No biome is registered under this id.
    #[error("unknown biome: {0}")]
    NotFound(String),

    /// A biome with this id is already registered.
    #[error("duplicate biome id: {0}")]
    DuplicateBiome(String),
}
