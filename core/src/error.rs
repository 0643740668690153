use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid tile index")]
    InvalidTile,
    #[error("Mole and hazard claims overlap")]
    OverlappingClaims,
    #[error("Unknown difficulty")]
    UnknownDifficulty,
    #[error("Round already started, reload to play again")]
    AlreadyStarted,
}

/// Failure to start audio playback.
///
/// Never surfaced to the player; a rejected cue simply stays silent.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum SoundError {
    #[error("Audio element unavailable")]
    Unavailable,
    #[error("Playback rejected by the host")]
    Rejected,
}

pub type Result<T> = core::result::Result<T, GameError>;
