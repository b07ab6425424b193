use serde::{Deserialize, Serialize};

/// One exercise prescription inside a generated workout
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkoutExercise {
    pub exercise_id: String,
    pub name: String,
    pub sets: u32,
    pub reps: u32,
    pub form_cues: Vec<String>,
}

/// A generated, structured session: warm-up, main exercises, cool-down
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Workout {
    pub name: String,
    pub focus: String,
    pub warm_up: Vec<String>,
    pub exercises: Vec<WorkoutExercise>,
    pub cool_down: Vec<String>,
}

/// Technique briefing for a single exercise
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormGuidance {
    /// Display name of the exercise
    pub exercise: String,
    pub description: String,
    /// Ordered form cues
    pub key_points: Vec<String>,
    pub common_mistakes: Vec<String>,
    /// The single most important cue to hold in mind
    pub focus_tip: String,
}
