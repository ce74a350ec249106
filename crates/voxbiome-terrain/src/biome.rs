//! Per-biome generators and the registry that dispatches to them.
//!
//! Each generator owns its settings record and runs its passes in a fixed
//! order: heightmap and layering first, then feature passes that read and
//! mutate the grid left by the previous pass.

mod beach;
mod flat;
mod forest;
mod registry;

pub use beach::{BEACH_ID, BeachGenerator, BeachProfile};
pub use flat::{FLAT_ID, FlatGenerator};
pub use forest::{FOREST_ID, ForestGenerator};
pub use registry::{BiomeEntry, BiomeGenerator, BiomeRegistry};
