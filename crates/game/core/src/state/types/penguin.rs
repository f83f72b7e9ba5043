use super::{Direction, Food, PenguinId, Position};

/// Penguin species. Each carries a distinct one-time special action.
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
pub enum PenguinKind {
    /// Stops after the fifth square of a slide.
    King,
    /// Stops after the third square of a slide.
    Emperor,
    /// Takes one free step in any direction before sliding.
    Royal,
    /// Jumps over the next hazard in its path.
    Rockhopper,
}

/// Lifecycle status of a penguin. Replaces independent stunned/removed/sliding flags.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PenguinStatus {
    #[default]
    Active,
    /// Skips its next turn.
    Stunned,
    Sliding(Direction),
    /// Fell into a hole or off the ice. Soft-deleted: the record stays for scoring.
    Removed,
}

/// One-shot latch guarding a penguin's special action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SpecialState {
    #[default]
    Ready,
    /// Activated; applies to the penguin's next slide.
    Armed,
    Spent,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Penguin {
    pub id: PenguinId,
    pub name: String,
    pub kind: PenguinKind,
    pub position: Position,
    pub is_player: bool,
    status: PenguinStatus,
    special: SpecialState,
    foods: Vec<Food>,
}

impl Penguin {
    pub fn new(id: PenguinId, name: impl Into<String>, kind: PenguinKind, position: Position) -> Self {
        Self {
            id,
            name: name.into(),
            kind,
            position,
            is_player: false,
            status: PenguinStatus::Active,
            special: SpecialState::Ready,
            foods: Vec::new(),
        }
    }

    pub fn with_player(mut self, is_player: bool) -> Self {
        self.is_player = is_player;
        self
    }

    pub fn status(&self) -> PenguinStatus {
        self.status
    }

    pub fn special_state(&self) -> SpecialState {
        self.special
    }

    /// Collected food in pickup order.
    pub fn foods(&self) -> &[Food] {
        &self.foods
    }

    pub fn total_weight(&self) -> u32 {
        self.foods.iter().map(|food| u32::from(food.weight())).sum()
    }

    pub fn is_removed(&self) -> bool {
        self.status == PenguinStatus::Removed
    }

    pub fn is_stunned(&self) -> bool {
        self.status == PenguinStatus::Stunned
    }

    pub fn is_sliding(&self) -> bool {
        matches!(self.status, PenguinStatus::Sliding(_))
    }

    pub fn sliding_direction(&self) -> Option<Direction> {
        match self.status {
            PenguinStatus::Sliding(direction) => Some(direction),
            _ => None,
        }
    }

    /// Activates the special action. Returns `false` if it was already used.
    pub fn use_special_action(&mut self) -> bool {
        if self.special != SpecialState::Ready {
            return false;
        }
        self.special = SpecialState::Armed;
        true
    }

    pub fn has_used_special_action(&self) -> bool {
        self.special != SpecialState::Ready
    }

    /// True for a Rockhopper whose jump is armed for the next slide.
    pub fn is_prepared_to_jump(&self) -> bool {
        self.kind == PenguinKind::Rockhopper && self.special == SpecialState::Armed
    }

    /// Consumes an armed special action, returning whether one was armed.
    pub(crate) fn consume_special(&mut self) -> bool {
        if self.special == SpecialState::Armed {
            self.special = SpecialState::Spent;
            true
        } else {
            false
        }
    }

    pub(crate) fn collect(&mut self, food: Food) {
        self.foods.push(food);
    }

    /// Removes the lightest food item; the earliest collected wins ties.
    pub(crate) fn drop_lightest(&mut self) -> Option<Food> {
        let index = self
            .foods
            .iter()
            .enumerate()
            .min_by_key(|(index, food)| (food.weight(), *index))
            .map(|(index, _)| index)?;
        Some(self.foods.remove(index))
    }

    pub(crate) fn start_sliding(&mut self, direction: Direction) {
        self.status = PenguinStatus::Sliding(direction);
    }

    pub(crate) fn settle(&mut self, status: PenguinStatus) {
        self.status = status;
    }

    /// Ends a stun. Returns `true` if the penguin was stunned, meaning its turn is skipped.
    pub fn recover(&mut self) -> bool {
        if self.status == PenguinStatus::Stunned {
            self.status = PenguinStatus::Active;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::FoodKind;

    fn food(weight: u8) -> Food {
        Food::new(FoodKind::Krill, weight).unwrap()
    }

    fn penguin(kind: PenguinKind) -> Penguin {
        Penguin::new(PenguinId(0), "P1", kind, Position::new(0, 0))
    }

    #[test]
    fn special_action_latches_once() {
        let mut penguin = penguin(PenguinKind::King);
        assert!(penguin.use_special_action());
        assert!(!penguin.use_special_action());
        assert!(penguin.consume_special());
        assert!(!penguin.use_special_action());
        assert_eq!(penguin.special_state(), SpecialState::Spent);
    }

    #[test]
    fn drop_lightest_prefers_first_on_ties() {
        let mut penguin = penguin(PenguinKind::Emperor);
        let first = Food::new(FoodKind::Squid, 2).unwrap();
        let second = Food::new(FoodKind::Anchovy, 2).unwrap();
        penguin.collect(food(4));
        penguin.collect(first);
        penguin.collect(second);

        assert_eq!(penguin.drop_lightest(), Some(first));
        assert_eq!(penguin.foods(), &[food(4), second]);
    }

    #[test]
    fn drop_lightest_on_empty_collection_is_none() {
        let mut penguin = penguin(PenguinKind::Royal);
        assert_eq!(penguin.drop_lightest(), None);
    }

    #[test]
    fn only_armed_rockhopper_is_prepared_to_jump() {
        let mut rockhopper = penguin(PenguinKind::Rockhopper);
        assert!(!rockhopper.is_prepared_to_jump());
        rockhopper.use_special_action();
        assert!(rockhopper.is_prepared_to_jump());

        let mut king = penguin(PenguinKind::King);
        king.use_special_action();
        assert!(!king.is_prepared_to_jump());
    }

    #[test]
    fn recover_clears_stun_only() {
        let mut penguin = penguin(PenguinKind::King);
        assert!(!penguin.recover());
        penguin.settle(PenguinStatus::Stunned);
        assert!(penguin.recover());
        assert_eq!(penguin.status(), PenguinStatus::Active);
    }
}
