use crate::action::{ActionTransition, PenguinActionError};
use crate::config::GameConfig;
use crate::state::{GameState, PenguinId};

/// Clears a stun at the start of the penguin's turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RecoverAction {
    pub penguin: PenguinId,
}

impl RecoverAction {
    pub fn new(penguin: PenguinId) -> Self {
        Self { penguin }
    }
}

impl ActionTransition for RecoverAction {
    type Error = PenguinActionError;
    /// Whether the penguin was stunned and so loses this turn.
    type Result = bool;

    fn apply(
        &self,
        state: &mut GameState,
        _config: &GameConfig,
    ) -> Result<Self::Result, Self::Error> {
        let penguin = state
            .penguin_mut(self.penguin)
            .ok_or(PenguinActionError::UnknownPenguin(self.penguin))?;
        let skipped = penguin.recover();
        if skipped {
            tracing::debug!(penguin = %self.penguin, "stunned penguin skips turn");
        }
        Ok(skipped)
    }
}
