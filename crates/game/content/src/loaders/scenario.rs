//! Scenario loader.
//!
//! A scenario is the initial board: who stands where, which hazards are out,
//! and where the food lies. The board size comes from [`GameConfig`].

use std::path::Path;

use anyhow::Context;
use icy_core::{Food, FoodKind, GameConfig, GameState, HazardKind, PenguinKind, Position};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PenguinSpec {
    pub name: String,
    pub kind: PenguinKind,
    pub position: Position,
    #[serde(default)]
    pub is_player: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HazardSpec {
    pub kind: HazardKind,
    pub position: Position,
    /// Only meaningful for holes.
    #[serde(default)]
    pub plugged: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoodSpec {
    pub kind: FoodKind,
    pub weight: u8,
    pub position: Position,
}

/// Scenario layout as written in RON files.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScenarioData {
    #[serde(default)]
    pub penguins: Vec<PenguinSpec>,
    #[serde(default)]
    pub hazards: Vec<HazardSpec>,
    #[serde(default)]
    pub food: Vec<FoodSpec>,
}

impl ScenarioData {
    /// Builds the board. Penguins spawn first, then hazards, then food, each in
    /// file order, so entity ids follow the file.
    pub fn build(&self, config: &GameConfig) -> LoadResult<GameState> {
        let mut state = GameState::from_config(config).context("Invalid grid size")?;

        for spec in &self.penguins {
            state
                .spawn_penguin(spec.name.as_str(), spec.kind, spec.position, spec.is_player)
                .with_context(|| format!("Cannot place penguin {}", spec.name))?;
        }

        for spec in &self.hazards {
            let id = state
                .spawn_hazard(spec.kind, spec.position)
                .with_context(|| format!("Cannot place {} at {}", spec.kind, spec.position))?;
            if spec.plugged {
                state
                    .hazard_mut(id)
                    .ok_or_else(|| anyhow::anyhow!("Hazard {} vanished after spawn", id))?
                    .plug()
                    .with_context(|| format!("Cannot plug hazard at {}", spec.position))?;
            }
        }

        for spec in &self.food {
            let food = Food::new(spec.kind, spec.weight)
                .with_context(|| format!("Invalid food at {}", spec.position))?;
            state
                .place_food(food, spec.position)
                .with_context(|| format!("Cannot place {} at {}", spec.kind, spec.position))?;
        }

        tracing::debug!(
            penguins = self.penguins.len(),
            hazards = self.hazards.len(),
            food = self.food.len(),
            size = config.grid_size,
            "scenario built"
        );
        Ok(state)
    }
}

/// Loader for scenarios from RON files.
pub struct ScenarioLoader;

impl ScenarioLoader {
    /// Load a scenario from a RON file and build its board.
    pub fn load(path: &Path, config: &GameConfig) -> LoadResult<GameState> {
        let content = read_file(path)?;
        Self::parse(&content)?
            .build(config)
            .with_context(|| format!("Invalid scenario {}", path.display()))
    }

    /// Parse scenario data from RON text without building the board.
    pub fn parse(content: &str) -> LoadResult<ScenarioData> {
        ron::from_str(content).map_err(|e| anyhow::anyhow!("Failed to parse scenario RON: {}", e))
    }
}
