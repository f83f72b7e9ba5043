use crate::action::{ActionTransition, PenguinActionError};
use crate::config::GameConfig;
use crate::state::{GameState, PenguinId};

/// Arms a penguin's one-time special action for its next slide.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UseSpecialAction {
    pub penguin: PenguinId,
}

impl UseSpecialAction {
    pub fn new(penguin: PenguinId) -> Self {
        Self { penguin }
    }
}

impl ActionTransition for UseSpecialAction {
    type Error = PenguinActionError;
    /// Whether the action was newly activated.
    type Result = bool;

    fn pre_validate(&self, state: &GameState, _config: &GameConfig) -> Result<(), Self::Error> {
        let penguin = state
            .penguin(self.penguin)
            .ok_or(PenguinActionError::UnknownPenguin(self.penguin))?;
        if penguin.is_removed() {
            return Err(PenguinActionError::PenguinRemoved(self.penguin));
        }
        Ok(())
    }

    fn apply(
        &self,
        state: &mut GameState,
        _config: &GameConfig,
    ) -> Result<Self::Result, Self::Error> {
        let penguin = state
            .penguin_mut(self.penguin)
            .ok_or(PenguinActionError::UnknownPenguin(self.penguin))?;
        let activated = penguin.use_special_action();
        if activated {
            tracing::debug!(penguin = %self.penguin, kind = %penguin.kind, "special action armed");
        } else {
            tracing::debug!(penguin = %self.penguin, "special action already used");
        }
        Ok(activated)
    }
}
