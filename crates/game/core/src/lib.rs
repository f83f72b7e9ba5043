//! Deterministic rules for the Icy Terrain board game.
//!
//! `icy-core` defines the canonical rules (board, penguins, hazards, food,
//! sliding and collisions) and exposes pure APIs that turn loops, scenario
//! loaders and tests can share. All entity mutation during play flows through
//! [`engine::GameEngine`], and supporting crates depend on the types
//! re-exported here.
pub mod action;
pub mod config;
pub mod engine;
pub mod error;
pub mod scoreboard;
pub mod state;

pub use action::{
    Action, ActionResult, ActionTransition, CollisionEffect, HoleAction, HoleCommand, Mover,
    PenguinActionError, RecoverAction, SlideAction, SlideError, SlideOutcome, SlideReport,
    UseSpecialAction,
};
pub use config::GameConfig;
pub use engine::{ExecuteError, GameEngine, TransitionPhase, TransitionPhaseError};
pub use error::{ErrorSeverity, GameError};
pub use scoreboard::{ScoreEntry, Scoreboard};
pub use state::{
    CollisionRule, ConsistencyError, Direction, Food, FoodError, FoodKind, GameState, Grid,
    GridError, Hazard, HazardError, HazardId, HazardKind, Occupant, Penguin, PenguinId,
    PenguinKind, PenguinStatus, Position, SpecialState,
};
