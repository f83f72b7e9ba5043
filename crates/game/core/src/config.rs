/// Game configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    /// Side length of the square board.
    pub grid_size: usize,
    /// Squares a King penguin traverses before its special action halts the slide.
    pub king_halt_after: u8,
    /// Squares an Emperor penguin traverses before its special action halts the slide.
    pub emperor_halt_after: u8,
}

impl GameConfig {
    // ===== compile-time constants =====
    pub const MIN_FOOD_WEIGHT: u8 = 1;
    pub const MAX_FOOD_WEIGHT: u8 = 5;
    /// Largest board side accepted by `Grid::new`.
    pub const MAX_GRID_SIZE: usize = 1024;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_GRID_SIZE: usize = 10;
    pub const DEFAULT_KING_HALT_AFTER: u8 = 5;
    pub const DEFAULT_EMPEROR_HALT_AFTER: u8 = 3;

    pub fn new() -> Self {
        Self {
            grid_size: Self::DEFAULT_GRID_SIZE,
            king_halt_after: Self::DEFAULT_KING_HALT_AFTER,
            emperor_halt_after: Self::DEFAULT_EMPEROR_HALT_AFTER,
        }
    }

    pub fn with_grid_size(grid_size: usize) -> Self {
        Self {
            grid_size,
            ..Self::new()
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
