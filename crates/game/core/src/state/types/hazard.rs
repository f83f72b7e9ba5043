use super::{Direction, HazardId, Position};
use crate::error::{ErrorSeverity, GameError};

/// Obstacle categories found on the ice.
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
pub enum HazardKind {
    HeavyIceBlock,
    LightIceBlock,
    SeaLion,
    HoleInIce,
}

impl HazardKind {
    /// Whether a collision sets this hazard in motion.
    pub const fn can_slide(self) -> bool {
        matches!(self, HazardKind::LightIceBlock | HazardKind::SeaLion)
    }
}

/// What happens to a penguin that runs into a hazard.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CollisionRule {
    /// Lose the lightest food item and stop in front of the block.
    LoseLightestFood,
    /// Stop in front, skip a turn, and push the block along.
    StunAndPush,
    /// Rebound one square and push the sea lion along.
    BounceAndPush,
    /// Fall through the ice and leave the game.
    Fall,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Hazard {
    pub id: HazardId,
    pub kind: HazardKind,
    pub position: Position,
    /// Inactive hazards have left the board (fell into water or plugged a hole).
    pub active: bool,
    plugged: bool,
    sliding: Option<Direction>,
}

impl Hazard {
    pub fn new(id: HazardId, kind: HazardKind, position: Position) -> Self {
        Self {
            id,
            kind,
            position,
            active: true,
            plugged: false,
            sliding: None,
        }
    }

    pub fn can_slide(&self) -> bool {
        self.kind.can_slide()
    }

    pub fn is_plugged(&self) -> bool {
        self.plugged
    }

    /// Only a plugged hole can be crossed.
    pub fn allows_passage(&self) -> bool {
        self.kind == HazardKind::HoleInIce && self.plugged
    }

    pub fn sliding_direction(&self) -> Option<Direction> {
        self.sliding
    }

    /// Effect on a penguin running into this hazard; `None` when the square can be crossed.
    pub fn collision_rule(&self) -> Option<CollisionRule> {
        match self.kind {
            HazardKind::HeavyIceBlock => Some(CollisionRule::LoseLightestFood),
            HazardKind::LightIceBlock => Some(CollisionRule::StunAndPush),
            HazardKind::SeaLion => Some(CollisionRule::BounceAndPush),
            HazardKind::HoleInIce if self.plugged => None,
            HazardKind::HoleInIce => Some(CollisionRule::Fall),
        }
    }

    pub fn plug(&mut self) -> Result<(), HazardError> {
        self.set_plugged(true)
    }

    pub fn unplug(&mut self) -> Result<(), HazardError> {
        self.set_plugged(false)
    }

    /// Flips the plugged state, returning the new value.
    pub fn toggle_plug(&mut self) -> Result<bool, HazardError> {
        self.set_plugged(!self.plugged)?;
        Ok(self.plugged)
    }

    fn set_plugged(&mut self, plugged: bool) -> Result<(), HazardError> {
        if self.kind != HazardKind::HoleInIce {
            return Err(HazardError::NotAHole {
                hazard: self.id,
                kind: self.kind,
            });
        }
        self.plugged = plugged;
        Ok(())
    }

    pub(crate) fn start_sliding(&mut self, direction: Direction) {
        self.sliding = Some(direction);
    }

    pub(crate) fn stop_sliding(&mut self) {
        self.sliding = None;
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum HazardError {
    #[error("hazard {hazard} is a {kind}, not a hole")]
    NotAHole { hazard: HazardId, kind: HazardKind },

    #[error("hazard {0} not found")]
    NotFound(HazardId),
}

impl GameError for HazardError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::NotAHole { .. } => "HAZARD_NOT_A_HOLE",
            Self::NotFound(_) => "HAZARD_NOT_FOUND",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hole() -> Hazard {
        Hazard::new(HazardId(0), HazardKind::HoleInIce, Position::new(3, 3))
    }

    #[test]
    fn plugged_hole_allows_passage() {
        let mut hole = hole();
        assert!(!hole.allows_passage());
        assert_eq!(hole.collision_rule(), Some(CollisionRule::Fall));

        hole.plug().unwrap();
        assert!(hole.allows_passage());
        assert_eq!(hole.collision_rule(), None);
    }

    #[test]
    fn plug_unplug_round_trips() {
        let mut hole = hole();
        let before = hole.clone();
        hole.plug().unwrap();
        hole.unplug().unwrap();
        assert_eq!(hole, before);

        assert!(hole.toggle_plug().unwrap());
        assert!(!hole.toggle_plug().unwrap());
        assert_eq!(hole, before);
    }

    #[test]
    fn only_holes_can_be_plugged() {
        let mut block = Hazard::new(HazardId(4), HazardKind::HeavyIceBlock, Position::ORIGIN);
        assert_eq!(
            block.plug(),
            Err(HazardError::NotAHole {
                hazard: HazardId(4),
                kind: HazardKind::HeavyIceBlock,
            })
        );
    }

    #[test]
    fn slidable_kinds() {
        assert!(HazardKind::LightIceBlock.can_slide());
        assert!(HazardKind::SeaLion.can_slide());
        assert!(!HazardKind::HeavyIceBlock.can_slide());
        assert!(!HazardKind::HoleInIce.can_slide());
    }
}
