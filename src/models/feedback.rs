use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::CoachError;

/// Lowest difficulty rating a user can report
pub const MIN_DIFFICULTY_RATING: u8 = 1;
/// Highest difficulty rating a user can report
pub const MAX_DIFFICULTY_RATING: u8 = 5;

/// Qualitative rating of movement technique
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormQuality {
    Poor,
    Fair,
    Good,
    Excellent,
}

impl FormQuality {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Poor => "poor",
            Self::Fair => "fair",
            Self::Good => "good",
            Self::Excellent => "excellent",
        }
    }
}

impl fmt::Display for FormQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single reported outcome of attempting an exercise.
/// Immutable once constructed; the difficulty rating is validated up front.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserFeedback {
    pub exercise_id: String,
    /// Perceived difficulty on a 1-5 scale (1 = too easy, 5 = impossible)
    pub difficulty_rating: u8,
    pub form_quality: FormQuality,
    pub completed_reps: u32,
    pub target_reps: u32,
    pub recorded_at: DateTime<Utc>,
}

impl UserFeedback {
    pub fn new(
        exercise_id: impl Into<String>,
        difficulty_rating: u8,
        form_quality: FormQuality,
        completed_reps: u32,
        target_reps: u32,
    ) -> Result<Self, CoachError> {
        if !(MIN_DIFFICULTY_RATING..=MAX_DIFFICULTY_RATING).contains(&difficulty_rating) {
            return Err(CoachError::InvalidDifficultyRating(difficulty_rating));
        }

        Ok(Self {
            exercise_id: exercise_id.into(),
            difficulty_rating,
            form_quality,
            completed_reps,
            target_reps,
            recorded_at: Utc::now(),
        })
    }

    /// Whether the user hit the prescribed rep target
    pub fn met_target(&self) -> bool {
        self.completed_reps >= self.target_reps
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use proptest::prelude::*;

    #[test]
    fn accepts_ratings_within_scale() {
        for rating in MIN_DIFFICULTY_RATING..=MAX_DIFFICULTY_RATING {
            let feedback = UserFeedback::new("wall_pushup", rating, FormQuality::Good, 10, 12);
            assert!(feedback.is_ok(), "rating {} should be accepted", rating);
        }
    }

    #[test]
    fn rejects_rating_of_zero() {
        let feedback = UserFeedback::new("wall_pushup", 0, FormQuality::Good, 10, 12);
        assert_matches!(feedback, Err(CoachError::InvalidDifficultyRating(0)));
    }

    #[test]
    fn met_target_compares_completed_to_target() {
        let short = UserFeedback::new("wall_pushup", 3, FormQuality::Good, 8, 12).unwrap();
        assert!(!short.met_target());

        let exact = UserFeedback::new("wall_pushup", 3, FormQuality::Good, 12, 12).unwrap();
        assert!(exact.met_target());

        let over = UserFeedback::new("wall_pushup", 3, FormQuality::Good, 15, 12).unwrap();
        assert!(over.met_target());
    }

    proptest! {
        #[test]
        fn only_the_1_to_5_band_constructs(rating in any::<u8>()) {
            let result = UserFeedback::new("wall_pushup", rating, FormQuality::Fair, 5, 10);
            let in_band = (MIN_DIFFICULTY_RATING..=MAX_DIFFICULTY_RATING).contains(&rating);
            prop_assert_eq!(result.is_ok(), in_band);
        }
    }
}
