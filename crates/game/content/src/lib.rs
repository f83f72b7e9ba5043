//! Data-driven content definitions and loaders.
//!
//! This crate reads game data files and turns them into `icy-core` values:
//! - Game configuration (data-driven via TOML)
//! - Scenarios, i.e. initial boards with penguins, hazards and food (data-driven via RON)
//!
//! Everything a scenario places goes through the `GameState` spawn helpers, so
//! a loaded board obeys the same occupancy rules as one built in code.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{
    ConfigLoader, FoodSpec, HazardSpec, LoadResult, PenguinSpec, ScenarioData, ScenarioLoader,
};
