use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

use super::{DifficultyLevel, UserFeedback};

/// Session-scoped user profile. Never persisted; mutated only through
/// `add_feedback` and `record_workout`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: Uuid,
    pub name: String,
    pub goals: Vec<String>,
    pub experience_level: DifficultyLevel,
    pub completed_workouts: u32,
    /// Exercise id -> feedback in chronological (insertion) order
    pub exercise_history: HashMap<String, Vec<UserFeedback>>,
    pub created_at: DateTime<Utc>,
}

impl UserProfile {
    pub fn new(name: impl Into<String>, goals: Vec<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            goals,
            experience_level: DifficultyLevel::default(),
            completed_workouts: 0,
            exercise_history: HashMap::new(),
            created_at: Utc::now(),
        }
    }

    pub fn with_experience_level(mut self, level: DifficultyLevel) -> Self {
        self.experience_level = level;
        self
    }

    /// Append feedback to the history for its exercise, creating the list
    /// if this is the first report for that exercise.
    pub fn add_feedback(&mut self, feedback: UserFeedback) {
        self.exercise_history
            .entry(feedback.exercise_id.clone())
            .or_default()
            .push(feedback);
    }

    /// Recorded feedback for one exercise, oldest first. Empty when the
    /// exercise has never been reported on.
    pub fn history(&self, exercise_id: &str) -> &[UserFeedback] {
        self.exercise_history
            .get(exercise_id)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn latest_feedback(&self, exercise_id: &str) -> Option<&UserFeedback> {
        self.history(exercise_id).last()
    }

    pub fn record_workout(&mut self) {
        self.completed_workouts += 1;
    }
}
