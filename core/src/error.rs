use thiserror::Error;

/// Reason an engine action was rejected.
///
/// The state-returning operations treat every variant as a silent no-op; the `try_*` variants
/// surface them so callers and tests can tell rejections apart.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("No game in progress, moves are not accepted")]
    NotPlaying,
    #[error("Cell already revealed")]
    AlreadyRevealed,
    #[error("Cell is flagged")]
    Flagged,
    #[error("All flags are already placed")]
    FlagLimitReached,
}

pub type Result<T> = core::result::Result<T, GameError>;
