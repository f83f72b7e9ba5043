//! Error types for the action execution pipeline.

use crate::action::{ActionTransition, HoleAction, RecoverAction, SlideAction, UseSpecialAction};
use crate::error::{ErrorSeverity, GameError};

/// Identifies which stage of the transition pipeline produced an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TransitionPhase {
    PreValidate,
    Apply,
    PostValidate,
}

impl TransitionPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransitionPhase::PreValidate => "pre_validate",
            TransitionPhase::Apply => "apply",
            TransitionPhase::PostValidate => "post_validate",
        }
    }
}

/// Associates a transition phase with the underlying error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransitionPhaseError<E> {
    pub phase: TransitionPhase,
    pub error: E,
}

impl<E> TransitionPhaseError<E> {
    pub fn new(phase: TransitionPhase, error: E) -> Self {
        Self { phase, error }
    }
}

impl<E: std::fmt::Display> std::fmt::Display for TransitionPhaseError<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} failed: {}", self.phase.as_str(), self.error)
    }
}

impl<E: std::fmt::Display + std::fmt::Debug> std::error::Error for TransitionPhaseError<E> {}

/// Errors surfaced while executing an action through the game engine.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ExecuteError {
    #[error("slide action failed: {0}")]
    Slide(TransitionPhaseError<<SlideAction as ActionTransition>::Error>),

    #[error("special action failed: {0}")]
    UseSpecial(TransitionPhaseError<<UseSpecialAction as ActionTransition>::Error>),

    #[error("hole action failed: {0}")]
    Hole(TransitionPhaseError<<HoleAction as ActionTransition>::Error>),

    #[error("recover action failed: {0}")]
    Recover(TransitionPhaseError<<RecoverAction as ActionTransition>::Error>),
}

impl ExecuteError {
    /// Pipeline phase that rejected the action.
    pub fn phase(&self) -> TransitionPhase {
        match self {
            Self::Slide(inner) => inner.phase,
            Self::UseSpecial(inner) => inner.phase,
            Self::Hole(inner) => inner.phase,
            Self::Recover(inner) => inner.phase,
        }
    }
}

impl GameError for ExecuteError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Slide(inner) => inner.error.severity(),
            Self::UseSpecial(inner) => inner.error.severity(),
            Self::Hole(inner) => inner.error.severity(),
            Self::Recover(inner) => inner.error.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Slide(inner) => inner.error.error_code(),
            Self::UseSpecial(inner) => inner.error.error_code(),
            Self::Hole(inner) => inner.error.error_code(),
            Self::Recover(inner) => inner.error.error_code(),
        }
    }
}
