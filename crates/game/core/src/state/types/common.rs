use std::fmt;

/// Identifier of a penguin, assigned in spawn order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PenguinId(pub u32);

impl fmt::Display for PenguinId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "P{}", self.0 + 1)
    }
}

/// Identifier of a hazard, assigned in spawn order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HazardId(pub u32);

impl fmt::Display for HazardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "H{}", self.0)
    }
}

/// Discrete board position expressed as (row, column).
///
/// Coordinates are signed so a step past the edge is still representable;
/// whether it lies on the board is answered by [`Position::is_valid`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub row: i32,
    pub col: i32,
}

impl Position {
    pub const ORIGIN: Self = Self { row: 0, col: 0 };

    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Returns the adjacent position one square in `direction`.
    #[inline]
    pub const fn next(self, direction: Direction) -> Self {
        let (dr, dc) = direction.delta();
        Self {
            row: self.row + dr,
            col: self.col + dc,
        }
    }

    /// Returns true if the position lies on a board of side `size`.
    #[inline]
    pub fn is_valid(self, size: usize) -> bool {
        self.row >= 0 && self.col >= 0 && (self.row as usize) < size && (self.col as usize) < size
    }

    /// Returns true if the position lies on the outer ring of a board of side `size`.
    pub fn is_edge(self, size: usize) -> bool {
        if !self.is_valid(size) {
            return false;
        }
        let last = size - 1;
        self.row == 0 || self.col == 0 || self.row as usize == last || self.col as usize == last
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::ORIGIN
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// One of the four sliding directions.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// (row, column) offset of a single step.
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }

    pub const fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn next_then_opposite_returns_to_start() {
        let size = 10;
        for row in 0..size as i32 {
            for col in 0..size as i32 {
                let origin = Position::new(row, col);
                for direction in Direction::ALL {
                    assert_eq!(origin.next(direction).next(direction.opposite()), origin);
                }
            }
        }
    }

    #[test]
    fn step_past_edge_is_invalid() {
        assert!(!Position::new(0, 4).next(Direction::Up).is_valid(10));
        assert!(!Position::new(9, 4).next(Direction::Down).is_valid(10));
        assert!(!Position::new(4, 0).next(Direction::Left).is_valid(10));
        assert!(!Position::new(4, 9).next(Direction::Right).is_valid(10));
        assert!(Position::new(4, 8).next(Direction::Right).is_valid(10));
    }

    #[test]
    fn edge_detection_covers_outer_ring_only() {
        assert!(Position::new(0, 5).is_edge(10));
        assert!(Position::new(5, 9).is_edge(10));
        assert!(!Position::new(5, 5).is_edge(10));
        assert!(!Position::new(-1, 5).is_edge(10));
    }

    #[test]
    fn direction_parses_case_insensitively() {
        assert_eq!(Direction::from_str("UP").unwrap(), Direction::Up);
        assert_eq!(Direction::from_str("right").unwrap(), Direction::Right);
        assert_eq!(Direction::Left.to_string(), "left");
    }
}
