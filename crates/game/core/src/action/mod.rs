//! Action domain.
//!
//! Every state change a turn can make is one of the [`Action`] variants. Each
//! variant is a small struct implementing [`ActionTransition`], so the engine
//! can drive it through the same `pre_validate → apply → post_validate`
//! pipeline.
//!
//! # Module Structure
//!
//! - `slide`: sliding movement and collision resolution (the core rules)
//! - `special`: arming a penguin's one-time special action
//! - `hole`: game-master plug/unplug of holes in the ice
//! - `recover`: clearing a stun at the start of a turn
//! - `error`: errors shared by penguin-only actions

pub mod error;
pub mod hole;
pub mod recover;
pub mod slide;
pub mod special;
mod transition;

pub use error::PenguinActionError;
pub use hole::{HoleAction, HoleCommand};
pub use recover::RecoverAction;
pub use slide::{
    CollisionEffect, Mover, SlideAction, SlideError, SlideOutcome, SlideReport,
};
pub use special::UseSpecialAction;
pub use transition::ActionTransition;

/// A single state transition requested by the turn loop.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Action {
    Slide(SlideAction),
    UseSpecial(UseSpecialAction),
    Hole(HoleAction),
    Recover(RecoverAction),
}

impl Action {
    /// Short name used in logs.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Action::Slide(_) => "slide",
            Action::UseSpecial(_) => "use_special",
            Action::Hole(_) => "hole",
            Action::Recover(_) => "recover",
        }
    }
}

impl From<SlideAction> for Action {
    fn from(action: SlideAction) -> Self {
        Action::Slide(action)
    }
}

impl From<UseSpecialAction> for Action {
    fn from(action: UseSpecialAction) -> Self {
        Action::UseSpecial(action)
    }
}

impl From<HoleAction> for Action {
    fn from(action: HoleAction) -> Self {
        Action::Hole(action)
    }
}

impl From<RecoverAction> for Action {
    fn from(action: RecoverAction) -> Self {
        Action::Recover(action)
    }
}

/// Action-specific result returned by the engine.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum ActionResult {
    Slide(SlideReport),
    /// Whether the special action was newly armed.
    UseSpecial(bool),
    /// Plugged state after the command.
    Hole(bool),
    /// Whether the penguin was stunned and loses the turn.
    Recover(bool),
}
