use serde::{Deserialize, Serialize};
use std::fmt;

/// Difficulty tier used for both exercises and user experience levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DifficultyLevel {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
}

impl DifficultyLevel {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
        }
    }

    /// Display-friendly capitalized label
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Beginner => "Beginner",
            Self::Intermediate => "Intermediate",
            Self::Advanced => "Advanced",
        }
    }
}

impl fmt::Display for DifficultyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Movement pattern an exercise trains
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExerciseCategory {
    Push,
    Pull,
    Squat,
    Hinge,
    Core,
    Mobility,
}

impl ExerciseCategory {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Push => "push",
            Self::Pull => "pull",
            Self::Squat => "squat",
            Self::Hinge => "hinge",
            Self::Core => "core",
            Self::Mobility => "mobility",
        }
    }
}

impl fmt::Display for ExerciseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A catalog entry describing a single movement with coaching metadata.
/// Immutable once loaded into the library.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Exercise {
    /// Unique catalog key, e.g. "wall_pushup"
    pub id: String,
    /// Display name
    pub name: String,
    /// Short description of the movement
    pub description: String,
    pub category: ExerciseCategory,
    pub difficulty: DifficultyLevel,
    /// Default prescription
    pub sets: u32,
    pub reps: u32,
    /// Ordered coaching cues, most important first
    pub form_cues: Vec<String>,
    pub common_mistakes: Vec<String>,
    /// Next exercise in the progression chain, if any
    pub progression_id: Option<String>,
}

impl Exercise {
    /// The most salient form cue
    pub fn primary_cue(&self) -> Option<&str> {
        self.form_cues.first().map(String::as_str)
    }
}
