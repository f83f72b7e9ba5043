use crate::error::{ErrorSeverity, GameError};
use crate::state::PenguinId;

/// Errors for actions that only touch a single penguin's own state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PenguinActionError {
    #[error("penguin {0} not found")]
    UnknownPenguin(PenguinId),

    #[error("penguin {0} has been removed from the game")]
    PenguinRemoved(PenguinId),
}

impl GameError for PenguinActionError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownPenguin(_) => "PENGUIN_UNKNOWN",
            Self::PenguinRemoved(_) => "PENGUIN_REMOVED",
        }
    }
}
