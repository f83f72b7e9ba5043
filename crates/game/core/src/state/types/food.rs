use crate::config::GameConfig;
use crate::error::{ErrorSeverity, GameError};

/// Kinds of food that can be scattered on the ice.
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
pub enum FoodKind {
    Krill,
    Crustacean,
    Anchovy,
    Squid,
    Mackerel,
}

/// A food item. Immutable once created; moves by value from the grid into a
/// penguin's collection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Food {
    kind: FoodKind,
    weight: u8,
}

impl Food {
    /// Creates a food item, rejecting weights outside the configured range.
    pub fn new(kind: FoodKind, weight: u8) -> Result<Self, FoodError> {
        if !(GameConfig::MIN_FOOD_WEIGHT..=GameConfig::MAX_FOOD_WEIGHT).contains(&weight) {
            return Err(FoodError::WeightOutOfRange { weight });
        }
        Ok(Self { kind, weight })
    }

    pub fn kind(self) -> FoodKind {
        self.kind
    }

    pub fn weight(self) -> u8 {
        self.weight
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FoodError {
    #[error(
        "food weight {weight} outside {}..={}",
        GameConfig::MIN_FOOD_WEIGHT,
        GameConfig::MAX_FOOD_WEIGHT
    )]
    WeightOutOfRange { weight: u8 },
}

impl GameError for FoodError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::WeightOutOfRange { .. } => "FOOD_WEIGHT_OUT_OF_RANGE",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_weights_one_through_five() {
        for weight in 1..=5 {
            assert_eq!(Food::new(FoodKind::Krill, weight).unwrap().weight(), weight);
        }
    }

    #[test]
    fn rejects_weights_outside_range() {
        assert_eq!(
            Food::new(FoodKind::Squid, 0),
            Err(FoodError::WeightOutOfRange { weight: 0 })
        );
        assert!(Food::new(FoodKind::Squid, 6).is_err());
    }
}
