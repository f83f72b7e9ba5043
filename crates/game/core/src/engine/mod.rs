//! Action execution pipeline.
//!
//! The [`GameEngine`] is the authoritative reducer for [`GameState`]. It
//! drives every action through the transition phases and surfaces rich error
//! information for the caller. Turn order lives outside the core; the engine
//! only resolves one action at a time.

mod errors;
mod transition;

pub use errors::{ExecuteError, TransitionPhase, TransitionPhaseError};

use crate::action::{
    Action, ActionResult, ActionTransition, HoleAction, HoleCommand, RecoverAction, SlideAction,
    SlideReport, UseSpecialAction,
};
use crate::config::GameConfig;
use crate::state::{Direction, GameState, HazardId, PenguinId};

/// Game engine that manages action execution.
///
/// All state mutations flow through the three-phase action pipeline:
/// pre_validate → apply → post_validate
pub struct GameEngine<'a> {
    state: &'a mut GameState,
    config: &'a GameConfig,
}

impl<'a> GameEngine<'a> {
    /// Creates a new game engine over the given state.
    pub fn new(state: &'a mut GameState, config: &'a GameConfig) -> Self {
        Self { state, config }
    }

    pub fn state(&self) -> &GameState {
        self.state
    }

    /// Executes an action by routing it through the transition pipeline.
    pub fn execute(&mut self, action: &Action) -> Result<ActionResult, ExecuteError> {
        match action {
            Action::Slide(transition) => self
                .run(action, transition, ExecuteError::Slide)
                .map(ActionResult::Slide),
            Action::UseSpecial(transition) => self
                .run(action, transition, ExecuteError::UseSpecial)
                .map(ActionResult::UseSpecial),
            Action::Hole(transition) => self
                .run(action, transition, ExecuteError::Hole)
                .map(ActionResult::Hole),
            Action::Recover(transition) => self
                .run(action, transition, ExecuteError::Recover)
                .map(ActionResult::Recover),
        }
    }

    /// Slides a penguin in `direction` and reports where it ended up.
    pub fn resolve_slide(
        &mut self,
        penguin: PenguinId,
        direction: Direction,
    ) -> Result<SlideReport, ExecuteError> {
        self.slide(SlideAction::penguin(penguin, direction))
    }

    /// Runs a fully specified slide, e.g. a Royal slide with its free step.
    pub fn slide(&mut self, action: SlideAction) -> Result<SlideReport, ExecuteError> {
        self.run(&action.into(), &action, ExecuteError::Slide)
    }

    /// Arms a penguin's special action. Returns `false` if it was already used.
    pub fn use_special_action(&mut self, penguin: PenguinId) -> Result<bool, ExecuteError> {
        let action = UseSpecialAction::new(penguin);
        self.run(&action.into(), &action, ExecuteError::UseSpecial)
    }

    /// Applies a plug/unplug command to a hole. Returns the new plugged state.
    pub fn command_hole(
        &mut self,
        hole: HazardId,
        command: HoleCommand,
    ) -> Result<bool, ExecuteError> {
        let action = HoleAction::new(hole, command);
        self.run(&action.into(), &action, ExecuteError::Hole)
    }

    /// Clears a stun. Returns `true` if the penguin loses this turn.
    pub fn recover(&mut self, penguin: PenguinId) -> Result<bool, ExecuteError> {
        let action = RecoverAction::new(penguin);
        self.run(&action.into(), &action, ExecuteError::Recover)
    }

    fn run<T>(
        &mut self,
        action: &Action,
        transition: &T,
        wrap: fn(TransitionPhaseError<T::Error>) -> ExecuteError,
    ) -> Result<T::Result, ExecuteError>
    where
        T: ActionTransition,
    {
        transition::drive_transition(transition, self.state, self.config).map_err(|error| {
            let error = wrap(error);
            tracing::warn!(
                action = action.as_str(),
                phase = error.phase().as_str(),
                %error,
                "action rejected"
            );
            error
        })
    }
}
