//! Authoritative game state representation.
//!
//! This module owns the board, the penguin roster, and the hazards. Callers
//! read this state freely but mutate entities exclusively through the engine;
//! the spawn helpers here are for building the initial board.
pub mod types;

pub use types::{
    CollisionRule, Direction, Food, FoodError, FoodKind, Grid, GridError, Hazard, HazardError,
    HazardId, HazardKind, Occupant, Penguin, PenguinId, PenguinKind, PenguinStatus, Position,
    SpecialState,
};

use crate::config::GameConfig;
use crate::error::{ErrorSeverity, GameError};

/// Canonical snapshot of the deterministic game state.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct GameState {
    pub grid: Grid,
    penguins: Vec<Penguin>,
    hazards: Vec<Hazard>,
}

impl GameState {
    /// Creates an empty board of the given side length.
    pub fn new(size: usize) -> Result<Self, GridError> {
        Ok(Self {
            grid: Grid::new(size)?,
            penguins: Vec::new(),
            hazards: Vec::new(),
        })
    }

    pub fn from_config(config: &GameConfig) -> Result<Self, GridError> {
        Self::new(config.grid_size)
    }

    /// Adds a penguin at `position`. Ids are assigned in spawn order.
    pub fn spawn_penguin(
        &mut self,
        name: impl Into<String>,
        kind: PenguinKind,
        position: Position,
        is_player: bool,
    ) -> Result<PenguinId, GridError> {
        let id = PenguinId(self.penguins.len() as u32);
        self.grid.place(Occupant::Penguin(id), position)?;
        self.penguins
            .push(Penguin::new(id, name, kind, position).with_player(is_player));
        Ok(id)
    }

    /// Adds a hazard at `position`. Ids are assigned in spawn order.
    pub fn spawn_hazard(
        &mut self,
        kind: HazardKind,
        position: Position,
    ) -> Result<HazardId, GridError> {
        let id = HazardId(self.hazards.len() as u32);
        self.grid.place(Occupant::Hazard(id), position)?;
        self.hazards.push(Hazard::new(id, kind, position));
        Ok(id)
    }

    pub fn place_food(&mut self, food: Food, position: Position) -> Result<(), GridError> {
        self.grid.place(Occupant::Food(food), position)
    }

    pub fn penguin(&self, id: PenguinId) -> Option<&Penguin> {
        self.penguins.get(id.0 as usize)
    }

    pub fn penguin_mut(&mut self, id: PenguinId) -> Option<&mut Penguin> {
        self.penguins.get_mut(id.0 as usize)
    }

    pub fn hazard(&self, id: HazardId) -> Option<&Hazard> {
        self.hazards.get(id.0 as usize)
    }

    pub fn hazard_mut(&mut self, id: HazardId) -> Option<&mut Hazard> {
        self.hazards.get_mut(id.0 as usize)
    }

    /// All penguins in spawn order, removed ones included.
    pub fn penguins(&self) -> &[Penguin] {
        &self.penguins
    }

    pub fn hazards(&self) -> &[Hazard] {
        &self.hazards
    }

    /// Penguins still on the ice.
    pub fn active_penguins(&self) -> impl Iterator<Item = &Penguin> {
        self.penguins.iter().filter(|penguin| !penguin.is_removed())
    }

    /// Checks that the grid and the entity records agree.
    ///
    /// Nothing is corrected; the first disagreement found is returned.
    pub fn validate(&self) -> Result<(), ConsistencyError> {
        for penguin in &self.penguins {
            let on_grid = self.grid.occupant(penguin.position) == Some(Occupant::Penguin(penguin.id));
            if penguin.is_removed() {
                if self.locate(Occupant::Penguin(penguin.id)).is_some() {
                    return Err(ConsistencyError::RemovedPenguinOnGrid(penguin.id));
                }
            } else if !on_grid {
                return Err(ConsistencyError::PenguinNotOnGrid {
                    penguin: penguin.id,
                    position: penguin.position,
                });
            }
            if penguin.is_sliding() {
                return Err(ConsistencyError::PenguinStillSliding(penguin.id));
            }
        }

        for hazard in &self.hazards {
            let on_grid = self.grid.occupant(hazard.position) == Some(Occupant::Hazard(hazard.id));
            if !hazard.active {
                if self.locate(Occupant::Hazard(hazard.id)).is_some() {
                    return Err(ConsistencyError::InactiveHazardOnGrid(hazard.id));
                }
            } else if !on_grid {
                return Err(ConsistencyError::HazardNotOnGrid {
                    hazard: hazard.id,
                    position: hazard.position,
                });
            }
            if hazard.sliding_direction().is_some() {
                return Err(ConsistencyError::HazardStillSliding(hazard.id));
            }
        }

        for (position, occupant) in self.grid.occupied() {
            let known = match occupant {
                Occupant::Penguin(id) => self.penguin(id).is_some(),
                Occupant::Hazard(id) => self.hazard(id).is_some(),
                Occupant::Food(_) => true,
            };
            if !known {
                return Err(ConsistencyError::UnknownOccupant { position, occupant });
            }
        }

        Ok(())
    }

    fn locate(&self, occupant: Occupant) -> Option<Position> {
        self.grid
            .occupied()
            .find(|(_, candidate)| *candidate == occupant)
            .map(|(position, _)| position)
    }
}

/// Disagreement between the grid and entity records.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConsistencyError {
    #[error("penguin {penguin} records {position} but is not there")]
    PenguinNotOnGrid {
        penguin: PenguinId,
        position: Position,
    },

    #[error("removed penguin {0} is still on the grid")]
    RemovedPenguinOnGrid(PenguinId),

    #[error("penguin {0} is still marked as sliding")]
    PenguinStillSliding(PenguinId),

    #[error("hazard {hazard} records {position} but is not there")]
    HazardNotOnGrid { hazard: HazardId, position: Position },

    #[error("inactive hazard {0} is still on the grid")]
    InactiveHazardOnGrid(HazardId),

    #[error("hazard {0} is still marked as sliding")]
    HazardStillSliding(HazardId),

    #[error("unknown occupant {occupant:?} at {position}")]
    UnknownOccupant {
        position: Position,
        occupant: Occupant,
    },

    #[error("grid rejected a move: {0}")]
    Grid(#[from] GridError),
}

impl GameError for ConsistencyError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Internal
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::PenguinNotOnGrid { .. } => "PENGUIN_NOT_ON_GRID",
            Self::RemovedPenguinOnGrid(_) => "REMOVED_PENGUIN_ON_GRID",
            Self::PenguinStillSliding(_) => "PENGUIN_STILL_SLIDING",
            Self::HazardNotOnGrid { .. } => "HAZARD_NOT_ON_GRID",
            Self::InactiveHazardOnGrid(_) => "INACTIVE_HAZARD_ON_GRID",
            Self::HazardStillSliding(_) => "HAZARD_STILL_SLIDING",
            Self::UnknownOccupant { .. } => "UNKNOWN_OCCUPANT",
            Self::Grid(_) => "GRID_DESYNC",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spawn_assigns_sequential_ids() {
        let mut state = GameState::new(5).unwrap();
        let first = state
            .spawn_penguin("P1", PenguinKind::King, Position::new(0, 0), true)
            .unwrap();
        let second = state
            .spawn_penguin("P2", PenguinKind::Royal, Position::new(0, 1), false)
            .unwrap();
        assert_eq!(first, PenguinId(0));
        assert_eq!(second, PenguinId(1));
        assert!(state.penguin(first).unwrap().is_player);
        assert!(state.validate().is_ok());
    }

    #[test]
    fn spawn_on_occupied_square_fails_without_side_effects() {
        let mut state = GameState::new(5).unwrap();
        state
            .spawn_hazard(HazardKind::SeaLion, Position::new(2, 2))
            .unwrap();
        assert!(
            state
                .spawn_penguin("P1", PenguinKind::Emperor, Position::new(2, 2), false)
                .is_err()
        );
        assert!(state.penguins().is_empty());
    }

    #[test]
    fn validate_detects_desync() {
        let mut state = GameState::new(5).unwrap();
        let id = state
            .spawn_penguin("P1", PenguinKind::King, Position::new(1, 1), false)
            .unwrap();
        state.grid.remove(Position::new(1, 1));

        assert_eq!(
            state.validate(),
            Err(ConsistencyError::PenguinNotOnGrid {
                penguin: id,
                position: Position::new(1, 1),
            })
        );
    }

    #[test]
    fn validate_detects_removed_penguin_left_on_grid() {
        let mut state = GameState::new(5).unwrap();
        let id = state
            .spawn_penguin("P1", PenguinKind::King, Position::new(1, 1), false)
            .unwrap();
        state
            .penguin_mut(id)
            .unwrap()
            .settle(PenguinStatus::Removed);

        assert_eq!(
            state.validate(),
            Err(ConsistencyError::RemovedPenguinOnGrid(id))
        );
    }
}
