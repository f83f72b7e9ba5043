use super::{Food, HazardId, PenguinId, Position};
use crate::config::GameConfig;
use crate::error::{ErrorSeverity, GameError};

/// The single thing a square can hold.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Occupant {
    Penguin(PenguinId),
    Hazard(HazardId),
    Food(Food),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    #[error("grid size must be at least 1")]
    InvalidSize,

    #[error("grid size {size} exceeds the maximum of {max}", max = GameConfig::MAX_GRID_SIZE)]
    TooLarge { size: usize },

    #[error("position {position} is outside the grid")]
    OutOfBounds { position: Position },

    #[error("position {position} is already occupied by {occupant:?}")]
    Occupied {
        position: Position,
        occupant: Occupant,
    },

    #[error("position {position} is empty")]
    Empty { position: Position },
}

impl GameError for GridError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidSize => "GRID_INVALID_SIZE",
            Self::TooLarge { .. } => "GRID_TOO_LARGE",
            Self::OutOfBounds { .. } => "GRID_OUT_OF_BOUNDS",
            Self::Occupied { .. } => "GRID_OCCUPIED",
            Self::Empty { .. } => "GRID_EMPTY",
        }
    }
}

/// Square N×N board holding at most one occupant per square.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Grid {
    size: usize,
    cells: Vec<Option<Occupant>>,
}

impl Grid {
    pub fn new(size: usize) -> Result<Self, GridError> {
        if size == 0 {
            return Err(GridError::InvalidSize);
        }
        let cells = size
            .checked_mul(size)
            .filter(|_| size <= GameConfig::MAX_GRID_SIZE)
            .ok_or(GridError::TooLarge { size })?;
        Ok(Self {
            size,
            cells: vec![None; cells],
        })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn contains(&self, position: Position) -> bool {
        position.is_valid(self.size)
    }

    fn index(&self, position: Position) -> Option<usize> {
        self.contains(position)
            .then(|| position.row as usize * self.size + position.col as usize)
    }

    fn position_of(&self, index: usize) -> Position {
        Position::new((index / self.size) as i32, (index % self.size) as i32)
    }

    pub fn occupant(&self, position: Position) -> Option<Occupant> {
        self.index(position).and_then(|index| self.cells[index])
    }

    pub fn is_empty_at(&self, position: Position) -> bool {
        self.contains(position) && self.occupant(position).is_none()
    }

    /// Puts `occupant` on an empty, valid square.
    pub fn place(&mut self, occupant: Occupant, position: Position) -> Result<(), GridError> {
        let index = self
            .index(position)
            .ok_or(GridError::OutOfBounds { position })?;
        if let Some(existing) = self.cells[index] {
            return Err(GridError::Occupied {
                position,
                occupant: existing,
            });
        }
        self.cells[index] = Some(occupant);
        Ok(())
    }

    /// Clears a square and returns what was there. Empty or invalid squares are a no-op.
    pub fn remove(&mut self, position: Position) -> Option<Occupant> {
        let index = self.index(position)?;
        self.cells[index].take()
    }

    /// Moves whatever sits on `from` to the empty square `to`.
    pub fn relocate(&mut self, from: Position, to: Position) -> Result<(), GridError> {
        let occupant = self
            .occupant(from)
            .ok_or(GridError::Empty { position: from })?;
        self.place(occupant, to)?;
        self.remove(from);
        Ok(())
    }

    /// All occupied squares in row-major order.
    pub fn occupied(&self) -> impl Iterator<Item = (Position, Occupant)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter_map(|(index, cell)| cell.map(|occupant| (self.position_of(index), occupant)))
    }

    /// Unoccupied squares in row-major order.
    pub fn empty_positions(&self) -> Vec<Position> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_none())
            .map(|(index, _)| self.position_of(index))
            .collect()
    }

    /// Unoccupied squares on the outer ring, in row-major order.
    pub fn empty_edge_positions(&self) -> Vec<Position> {
        self.empty_positions()
            .into_iter()
            .filter(|position| position.is_edge(self.size))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::FoodKind;

    #[test]
    fn zero_size_is_rejected() {
        assert_eq!(Grid::new(0), Err(GridError::InvalidSize));
    }

    #[test]
    fn oversized_grid_is_rejected() {
        let size = GameConfig::MAX_GRID_SIZE + 1;
        assert_eq!(Grid::new(size), Err(GridError::TooLarge { size }));
        assert_eq!(
            Grid::new(usize::MAX),
            Err(GridError::TooLarge { size: usize::MAX })
        );
        assert_eq!(
            Grid::new(GameConfig::MAX_GRID_SIZE).map(|grid| grid.size()),
            Ok(GameConfig::MAX_GRID_SIZE)
        );
    }

    #[test]
    fn place_rejects_invalid_and_occupied_squares() {
        let mut grid = Grid::new(3).unwrap();
        let penguin = Occupant::Penguin(PenguinId(0));

        assert_eq!(
            grid.place(penguin, Position::new(3, 0)),
            Err(GridError::OutOfBounds {
                position: Position::new(3, 0)
            })
        );

        grid.place(penguin, Position::new(1, 1)).unwrap();
        assert!(matches!(
            grid.place(Occupant::Hazard(HazardId(0)), Position::new(1, 1)),
            Err(GridError::Occupied { .. })
        ));
        assert_eq!(grid.occupant(Position::new(1, 1)), Some(penguin));
    }

    #[test]
    fn remove_is_noop_on_empty_square() {
        let mut grid = Grid::new(3).unwrap();
        assert_eq!(grid.remove(Position::new(0, 0)), None);
        assert_eq!(grid.remove(Position::new(-1, 0)), None);

        let food = Occupant::Food(Food::new(FoodKind::Mackerel, 3).unwrap());
        grid.place(food, Position::new(2, 2)).unwrap();
        assert_eq!(grid.remove(Position::new(2, 2)), Some(food));
        assert!(grid.is_empty_at(Position::new(2, 2)));
    }

    #[test]
    fn empty_positions_skip_occupied() {
        let mut grid = Grid::new(3).unwrap();
        grid.place(Occupant::Penguin(PenguinId(0)), Position::new(0, 0))
            .unwrap();
        grid.place(Occupant::Hazard(HazardId(0)), Position::new(1, 1))
            .unwrap();

        let empty = grid.empty_positions();
        assert_eq!(empty.len(), 7);
        assert!(!empty.contains(&Position::new(0, 0)));
        assert!(!empty.contains(&Position::new(1, 1)));
    }

    #[test]
    fn empty_edge_positions_exclude_interior() {
        let mut grid = Grid::new(4).unwrap();
        grid.place(Occupant::Penguin(PenguinId(0)), Position::new(0, 1))
            .unwrap();

        let edge = grid.empty_edge_positions();
        // 12 ring squares, one taken.
        assert_eq!(edge.len(), 11);
        assert!(edge.iter().all(|position| position.is_edge(4)));
        assert!(!edge.contains(&Position::new(1, 1)));
        assert!(!edge.contains(&Position::new(0, 1)));
    }

    #[test]
    fn relocate_moves_occupant() {
        let mut grid = Grid::new(3).unwrap();
        let hazard = Occupant::Hazard(HazardId(2));
        grid.place(hazard, Position::new(0, 0)).unwrap();
        grid.relocate(Position::new(0, 0), Position::new(0, 2))
            .unwrap();
        assert_eq!(grid.occupant(Position::new(0, 2)), Some(hazard));
        assert_eq!(grid.occupant(Position::new(0, 0)), None);
    }
}
