pub mod common;
pub mod food;
pub mod grid;
pub mod hazard;
pub mod penguin;

// Re-export common types
pub use common::{Direction, HazardId, PenguinId, Position};

// Re-export food types
pub use food::{Food, FoodError, FoodKind};

// Re-export board occupancy
pub use grid::{Grid, GridError, Occupant};

// Re-export hazard types
pub use hazard::{CollisionRule, Hazard, HazardError, HazardKind};

// Re-export penguin types
pub use penguin::{Penguin, PenguinKind, PenguinStatus, SpecialState};
