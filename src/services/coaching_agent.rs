use std::sync::Arc;

use tracing::{debug, info};

use crate::errors::CoachError;
use crate::models::{
    Advice, DifficultyLevel, Exercise, FormGuidance, FormQuality, NextAction, UserFeedback,
    UserProfile, Workout, WorkoutExercise,
};
use crate::services::ExerciseLibrary;

/// A rating at or below this, with the rep target met, means the exercise
/// has become too easy.
const TOO_EASY_MAX_RATING: u8 = 1;
/// A rating at or above this means the exercise is currently too hard.
const TOO_HARD_MIN_RATING: u8 = 4;
/// Main-block size for a generated session.
const MAIN_EXERCISE_COUNT: usize = 4;

const WARM_UP: [&str; 5] = [
    "Arm circles - 10 forward, 10 backward",
    "Shoulder rolls - 10 each direction",
    "Cat-cow stretch - 8 slow reps",
    "Leg swings - 10 per side",
    "March in place - 60 seconds",
];

const COOL_DOWN: [&str; 4] = [
    "Doorway chest stretch - 30 seconds",
    "Standing quad stretch - 30 seconds per side",
    "Child's pose - 60 seconds",
    "Slow nasal breathing - 10 breaths",
];

/// Rule-based coach for one user. Owns the profile and shares the
/// read-only exercise library.
pub struct CoachingAgent {
    user: UserProfile,
    library: Arc<ExerciseLibrary>,
}

impl CoachingAgent {
    pub fn new(user: UserProfile, library: Arc<ExerciseLibrary>) -> Self {
        Self { user, library }
    }

    pub fn user(&self) -> &UserProfile {
        &self.user
    }

    pub fn user_mut(&mut self) -> &mut UserProfile {
        &mut self.user
    }

    pub fn library(&self) -> &ExerciseLibrary {
        &self.library
    }

    /// Generate a session for the user's current experience level.
    ///
    /// Selection is deterministic: walking the catalog in insertion order,
    /// take at most one exercise per movement category up to the main-block
    /// size, then top up with any remaining same-level exercises if the
    /// category pass came in short.
    pub fn generate_workout(&self) -> Workout {
        let level = self.user.experience_level;
        info!(user = %self.user.name, level = %level, "generating workout");

        let pool = self.library.list_by_difficulty(level);

        let mut selected: Vec<&Exercise> = Vec::with_capacity(MAIN_EXERCISE_COUNT);
        for &exercise in &pool {
            if selected.len() == MAIN_EXERCISE_COUNT {
                break;
            }
            if !selected.iter().any(|e| e.category == exercise.category) {
                selected.push(exercise);
            }
        }
        for &exercise in &pool {
            if selected.len() == MAIN_EXERCISE_COUNT {
                break;
            }
            if !selected.iter().any(|e| e.id == exercise.id) {
                selected.push(exercise);
            }
        }
        debug!(count = selected.len(), "selected main exercises");

        let exercises = selected
            .into_iter()
            .map(|e| WorkoutExercise {
                exercise_id: e.id.clone(),
                name: e.name.clone(),
                sets: e.sets,
                reps: e.reps,
                form_cues: e.form_cues.clone(),
            })
            .collect();

        Workout {
            name: format!("{} Bodyweight Session", level.label()),
            focus: Self::focus_for(level),
            warm_up: WARM_UP.iter().map(|s| (*s).to_string()).collect(),
            exercises,
            cool_down: COOL_DOWN.iter().map(|s| (*s).to_string()).collect(),
        }
    }

    /// Technique briefing for one exercise. Fails when the id is unknown.
    pub fn provide_form_guidance(&self, exercise_id: &str) -> Result<FormGuidance, CoachError> {
        let exercise = self.library.get_exercise(exercise_id)?;

        let focus_tip = exercise
            .primary_cue()
            .map(str::to_string)
            .unwrap_or_else(|| format!("Move through every {} rep with control", exercise.name));

        Ok(FormGuidance {
            exercise: exercise.name.clone(),
            description: exercise.description.clone(),
            key_points: exercise.form_cues.clone(),
            common_mistakes: exercise.common_mistakes.clone(),
            focus_tip,
        })
    }

    /// Assess one feedback record and produce adaptive advice.
    ///
    /// Pure function of the feedback and the static catalog; prior history
    /// is tracked on the profile but never consulted here. Branches are
    /// evaluated in strict precedence: poor form preempts every other
    /// signal, then "too easy with target met", then "too hard", then
    /// maintain.
    pub fn assess_and_adapt(&self, feedback: &UserFeedback) -> Result<Advice, CoachError> {
        let exercise = self.library.get_exercise(&feedback.exercise_id)?;
        info!(
            exercise = %exercise.id,
            rating = feedback.difficulty_rating,
            form = %feedback.form_quality,
            "assessing feedback"
        );

        if feedback.form_quality == FormQuality::Poor {
            return Ok(Advice {
                assessment: format!(
                    "Your {} form needs attention before we add any load or volume.",
                    exercise.name
                ),
                next_action: NextAction::FocusOnForm,
                encouragement:
                    "Slowing down to fix technique now is what makes the next progression possible."
                        .to_string(),
                progression_advice: None,
                form_feedback: Some(exercise.common_mistakes.clone()),
            });
        }

        if feedback.difficulty_rating <= TOO_EASY_MAX_RATING && feedback.met_target() {
            let (next_action, progression_advice) =
                match self.library.get_progression(&feedback.exercise_id)? {
                    Some(next) => (
                        NextAction::SuggestProgression,
                        format!(
                            "You've outgrown {}. Next session, try {}: {}",
                            exercise.name,
                            next.name,
                            next.description
                        ),
                    ),
                    None => (
                        NextAction::IncreaseVolume,
                        format!(
                            "{} is the top of this chain. Add a set or 2-3 reps per set to keep it challenging.",
                            exercise.name
                        ),
                    ),
                };

            return Ok(Advice {
                assessment: format!(
                    "{} completed at full reps with room to spare - you've mastered this level.",
                    exercise.name
                ),
                next_action,
                encouragement: "Excellent work. That consistency is exactly how strength is built."
                    .to_string(),
                progression_advice: Some(progression_advice),
                form_feedback: None,
            });
        }

        if feedback.difficulty_rating >= TOO_HARD_MIN_RATING {
            return Ok(Advice {
                assessment: format!(
                    "{} is too demanding right now ({} of {} reps at rating {}/5).",
                    exercise.name,
                    feedback.completed_reps,
                    feedback.target_reps,
                    feedback.difficulty_rating
                ),
                next_action: NextAction::ReduceDifficulty,
                encouragement:
                    "Scaling back is not a setback - it keeps every rep productive and safe."
                        .to_string(),
                progression_advice: None,
                form_feedback: None,
            });
        }

        Ok(Advice {
            assessment: format!(
                "{} is pitched right for you at the moment - challenging but doable.",
                exercise.name
            ),
            next_action: NextAction::MaintainCurrent,
            encouragement: "Keep showing up. Steady reps at this level are doing their job."
                .to_string(),
            progression_advice: None,
            form_feedback: None,
        })
    }

    fn focus_for(level: DifficultyLevel) -> String {
        match level {
            DifficultyLevel::Beginner => "Full-body foundational strength with controlled form",
            DifficultyLevel::Intermediate => "Harder movement variations and more time under tension",
            DifficultyLevel::Advanced => "Strength endurance on the top progressions",
        }
        .to_string()
    }
}
