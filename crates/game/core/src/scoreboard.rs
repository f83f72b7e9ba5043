//! Final standings by collected food weight.

use crate::state::{GameState, PenguinId, PenguinKind};

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScoreEntry {
    /// 1-based place; tied penguins get consecutive places in spawn order.
    pub rank: usize,
    pub penguin: PenguinId,
    pub name: String,
    pub kind: PenguinKind,
    pub is_player: bool,
    pub food_count: usize,
    pub total_weight: u32,
    pub removed: bool,
}

/// Penguins ranked by total food weight, heaviest first.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Scoreboard {
    entries: Vec<ScoreEntry>,
}

impl Scoreboard {
    /// Ranks every penguin, removed ones included. Ties keep spawn order.
    pub fn from_state(state: &GameState) -> Self {
        let mut penguins: Vec<_> = state.penguins().iter().collect();
        // stable
        penguins.sort_by(|a, b| b.total_weight().cmp(&a.total_weight()));

        let entries = penguins
            .into_iter()
            .enumerate()
            .map(|(index, penguin)| ScoreEntry {
                rank: index + 1,
                penguin: penguin.id,
                name: penguin.name.clone(),
                kind: penguin.kind,
                is_player: penguin.is_player,
                food_count: penguin.foods().len(),
                total_weight: penguin.total_weight(),
                removed: penguin.is_removed(),
            })
            .collect();

        Self { entries }
    }

    pub fn entries(&self) -> &[ScoreEntry] {
        &self.entries
    }

    pub fn leader(&self) -> Option<&ScoreEntry> {
        self.entries.first()
    }

    pub fn entry(&self, penguin: PenguinId) -> Option<&ScoreEntry> {
        self.entries.iter().find(|entry| entry.penguin == penguin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{Food, FoodKind, Position};

    fn feed(state: &mut GameState, id: PenguinId, weights: &[u8]) {
        let penguin = state.penguin_mut(id).unwrap();
        for &weight in weights {
            penguin.collect(Food::new(FoodKind::Anchovy, weight).unwrap());
        }
    }

    #[test]
    fn ranks_by_weight_and_keeps_spawn_order_on_ties() {
        let mut state = GameState::new(10).unwrap();
        let first = state
            .spawn_penguin("P1", PenguinKind::King, Position::new(0, 0), true)
            .unwrap();
        let second = state
            .spawn_penguin("P2", PenguinKind::Emperor, Position::new(0, 1), false)
            .unwrap();
        let third = state
            .spawn_penguin("P3", PenguinKind::Royal, Position::new(0, 2), false)
            .unwrap();
        feed(&mut state, first, &[2, 1]);
        feed(&mut state, second, &[5, 4]);
        feed(&mut state, third, &[3]);

        let board = Scoreboard::from_state(&state);
        let order: Vec<_> = board.entries().iter().map(|entry| entry.penguin).collect();
        assert_eq!(order, vec![second, first, third]);
        assert_eq!(board.leader().unwrap().total_weight, 9);
        assert_eq!(board.entry(third).unwrap().rank, 3);
        assert_eq!(board.entry(first).unwrap().food_count, 2);
        assert!(board.entry(first).unwrap().is_player);
    }

    #[test]
    fn empty_roster_has_no_leader() {
        let state = GameState::new(3).unwrap();
        assert!(Scoreboard::from_state(&state).leader().is_none());
    }
}
