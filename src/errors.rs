use thiserror::Error;

/// Errors surfaced by the coaching core.
#[derive(Error, Debug)]
pub enum CoachError {
    #[error("Exercise not found: {0}")]
    ExerciseNotFound(String),
    #[error("Difficulty rating must be between 1 and 5, got {0}")]
    InvalidDifficultyRating(u8),
}
