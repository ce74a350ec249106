//! Feature passes: structures placed on finished terrain.
//!
//! Every pass reads the grid left by the passes before it and writes in place.
//! Sites are found by rejection sampling with a capped number of attempts; a
//! feature whose attempts run out is skipped, not reported as an error.

mod conifer;
mod hill;
mod palm;
mod scatter;

pub use conifer::ConiferPlanter;
pub use hill::{Edge, Hill, HillBuilder};
pub use palm::PalmPlanter;
pub use scatter::{is_forest_ground, place_beach_grass, place_pebbles, place_rocks};
