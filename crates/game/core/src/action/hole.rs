use crate::action::ActionTransition;
use crate::config::GameConfig;
use crate::state::{GameState, HazardError, HazardId};

/// Game-master change to a hole's plugged state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HoleCommand {
    Plug,
    Unplug,
    Toggle,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HoleAction {
    pub hole: HazardId,
    pub command: HoleCommand,
}

impl HoleAction {
    pub fn new(hole: HazardId, command: HoleCommand) -> Self {
        Self { hole, command }
    }
}

impl ActionTransition for HoleAction {
    type Error = HazardError;
    /// Plugged state after the command.
    type Result = bool;

    fn apply(
        &self,
        state: &mut GameState,
        _config: &GameConfig,
    ) -> Result<Self::Result, Self::Error> {
        let hole = state
            .hazard_mut(self.hole)
            .ok_or(HazardError::NotFound(self.hole))?;
        match self.command {
            HoleCommand::Plug => hole.plug()?,
            HoleCommand::Unplug => hole.unplug()?,
            HoleCommand::Toggle => {
                hole.toggle_plug()?;
            }
        }
        tracing::debug!(hole = %self.hole, command = ?self.command, plugged = hole.is_plugged(), "hole updated");
        Ok(hole.is_plugged())
    }
}
