use std::collections::HashMap;

use crate::errors::CoachError;
use crate::models::{DifficultyLevel, Exercise, ExerciseCategory};

/// Immutable in-memory exercise catalog. Built once at startup and passed
/// explicitly to the agent; all lookups are pure reads over insertion order.
#[derive(Debug, Clone)]
pub struct ExerciseLibrary {
    exercises: Vec<Exercise>,
    index: HashMap<String, usize>,
}

impl ExerciseLibrary {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            exercises: Vec::with_capacity(capacity),
            index: HashMap::with_capacity(capacity),
        }
    }

    fn insert(&mut self, exercise: Exercise) {
        debug_assert!(
            !self.index.contains_key(&exercise.id),
            "duplicate exercise id {}",
            exercise.id
        );
        self.index.insert(exercise.id.clone(), self.exercises.len());
        self.exercises.push(exercise);
    }

    /// Look up an exercise by catalog id.
    pub fn get_exercise(&self, id: &str) -> Result<&Exercise, CoachError> {
        self.index
            .get(id)
            .map(|&i| &self.exercises[i])
            .ok_or_else(|| CoachError::ExerciseNotFound(id.to_string()))
    }

    /// All exercises at one difficulty tier, in catalog insertion order.
    pub fn list_by_difficulty(&self, level: DifficultyLevel) -> Vec<&Exercise> {
        self.exercises
            .iter()
            .filter(|e| e.difficulty == level)
            .collect()
    }

    pub fn get_beginner_exercises(&self) -> Vec<&Exercise> {
        self.list_by_difficulty(DifficultyLevel::Beginner)
    }

    /// All exercises for one movement pattern, in catalog insertion order.
    pub fn list_by_category(&self, category: ExerciseCategory) -> Vec<&Exercise> {
        self.exercises
            .iter()
            .filter(|e| e.category == category)
            .collect()
    }

    /// The next exercise in the progression chain, or `None` at chain end.
    /// Fails only when `id` itself is unknown.
    pub fn get_progression(&self, id: &str) -> Result<Option<&Exercise>, CoachError> {
        let exercise = self.get_exercise(id)?;
        Ok(exercise
            .progression_id
            .as_deref()
            .and_then(|next_id| self.index.get(next_id))
            .map(|&i| &self.exercises[i]))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Exercise> {
        self.exercises.iter()
    }

    pub fn len(&self) -> usize {
        self.exercises.len()
    }

    pub fn is_empty(&self) -> bool {
        self.exercises.is_empty()
    }

    /// The standard beginner-focused bodyweight catalog.
    pub fn standard() -> Self {
        let mut library = Self::with_capacity(14);

        library.insert(Exercise {
            id: "wall_pushup".to_string(),
            name: "Wall Push-up".to_string(),
            description: "Standing push-up against a wall, the entry point for all pressing work."
                .to_string(),
            category: ExerciseCategory::Push,
            difficulty: DifficultyLevel::Beginner,
            sets: 3,
            reps: 12,
            form_cues: strings(&[
                "Keep your body in a straight line from head to heels",
                "Lower until your nose almost touches the wall",
                "Press through your whole palm, not just the heel of the hand",
                "Brace your core so your hips don't sag",
            ]),
            common_mistakes: strings(&[
                "Bending at the hips instead of staying rigid",
                "Flaring elbows straight out to the sides",
                "Rushing the lowering phase",
            ]),
            progression_id: Some("incline_pushup".to_string()),
        });

        library.insert(Exercise {
            id: "incline_pushup".to_string(),
            name: "Incline Push-up".to_string(),
            description: "Push-up with hands elevated on a sturdy surface such as a table or bench."
                .to_string(),
            category: ExerciseCategory::Push,
            difficulty: DifficultyLevel::Beginner,
            sets: 3,
            reps: 10,
            form_cues: strings(&[
                "Set your hands just outside shoulder width",
                "Keep elbows at roughly 45 degrees from your torso",
                "Lower your chest to the edge under control",
            ]),
            common_mistakes: strings(&[
                "Reaching with the head instead of moving the chest",
                "Letting the lower back arch",
            ]),
            progression_id: Some("knee_pushup".to_string()),
        });

        library.insert(Exercise {
            id: "knee_pushup".to_string(),
            name: "Knee Push-up".to_string(),
            description: "Floor push-up from the knees, bridging the gap to the full movement."
                .to_string(),
            category: ExerciseCategory::Push,
            difficulty: DifficultyLevel::Intermediate,
            sets: 3,
            reps: 10,
            form_cues: strings(&[
                "Form a straight line from head to knees",
                "Lower your chest to about a fist's height off the floor",
                "Squeeze your glutes throughout the set",
            ]),
            common_mistakes: strings(&[
                "Piking the hips upward",
                "Only lowering halfway down",
            ]),
            progression_id: Some("pushup".to_string()),
        });

        library.insert(Exercise {
            id: "pushup".to_string(),
            name: "Push-up".to_string(),
            description: "The full floor push-up on toes.".to_string(),
            category: ExerciseCategory::Push,
            difficulty: DifficultyLevel::Intermediate,
            sets: 3,
            reps: 8,
            form_cues: strings(&[
                "Lock your body into one rigid plank",
                "Touch your chest lightly to the floor each rep",
                "Exhale as you press up",
            ]),
            common_mistakes: strings(&[
                "Sagging hips",
                "Half-depth reps",
                "Hands drifting forward of the shoulders",
            ]),
            progression_id: Some("diamond_pushup".to_string()),
        });

        library.insert(Exercise {
            id: "diamond_pushup".to_string(),
            name: "Diamond Push-up".to_string(),
            description: "Push-up with hands together under the chest, emphasizing the triceps."
                .to_string(),
            category: ExerciseCategory::Push,
            difficulty: DifficultyLevel::Advanced,
            sets: 3,
            reps: 6,
            form_cues: strings(&[
                "Form a diamond with thumbs and index fingers under your sternum",
                "Keep elbows tracking back, not out",
            ]),
            common_mistakes: strings(&[
                "Shrugging the shoulders toward the ears",
                "Letting the elbows flare wide",
            ]),
            progression_id: None,
        });

        library.insert(Exercise {
            id: "doorway_row".to_string(),
            name: "Doorway Row".to_string(),
            description: "Standing row holding a door frame, leaning back with straight arms."
                .to_string(),
            category: ExerciseCategory::Pull,
            difficulty: DifficultyLevel::Beginner,
            sets: 3,
            reps: 10,
            form_cues: strings(&[
                "Pull your chest to the frame by driving the elbows back",
                "Squeeze your shoulder blades together at the top",
                "Keep your body straight, pivoting at the heels",
            ]),
            common_mistakes: strings(&[
                "Pulling with the arms only and leaving the shoulder blades loose",
                "Bending at the hips during the pull",
            ]),
            progression_id: Some("inverted_row".to_string()),
        });

        library.insert(Exercise {
            id: "inverted_row".to_string(),
            name: "Inverted Row".to_string(),
            description: "Horizontal row under a sturdy table or low bar, body held straight."
                .to_string(),
            category: ExerciseCategory::Pull,
            difficulty: DifficultyLevel::Intermediate,
            sets: 3,
            reps: 8,
            form_cues: strings(&[
                "Start each rep from fully extended arms",
                "Lead the pull with your chest, not your chin",
                "Hold your hips level with your shoulders",
            ]),
            common_mistakes: strings(&[
                "Letting the hips drop into a jackknife",
                "Craning the neck toward the bar",
            ]),
            progression_id: Some("pullup".to_string()),
        });

        library.insert(Exercise {
            id: "pullup".to_string(),
            name: "Pull-up".to_string(),
            description: "Full hanging pull-up from a dead hang to chin over the bar.".to_string(),
            category: ExerciseCategory::Pull,
            difficulty: DifficultyLevel::Advanced,
            sets: 3,
            reps: 5,
            form_cues: strings(&[
                "Start every rep from a dead hang",
                "Drive the elbows down toward your ribs",
                "Control the descent for a full two seconds",
            ]),
            common_mistakes: strings(&[
                "Kipping or swinging for momentum",
                "Stopping short of chin over bar",
            ]),
            progression_id: None,
        });

        library.insert(Exercise {
            id: "assisted_squat".to_string(),
            name: "Assisted Squat".to_string(),
            description: "Squat holding a door frame or chair back for balance and support."
                .to_string(),
            category: ExerciseCategory::Squat,
            difficulty: DifficultyLevel::Beginner,
            sets: 3,
            reps: 10,
            form_cues: strings(&[
                "Sit back and down as if reaching for a chair",
                "Keep your heels planted the whole rep",
                "Use the support for balance, not to pull yourself up",
            ]),
            common_mistakes: strings(&[
                "Rising onto the toes",
                "Knees collapsing inward",
            ]),
            progression_id: Some("bodyweight_squat".to_string()),
        });

        library.insert(Exercise {
            id: "bodyweight_squat".to_string(),
            name: "Bodyweight Squat".to_string(),
            description: "Free-standing squat to at least parallel depth.".to_string(),
            category: ExerciseCategory::Squat,
            difficulty: DifficultyLevel::Beginner,
            sets: 3,
            reps: 12,
            form_cues: strings(&[
                "Push your knees out in line with your toes",
                "Keep your chest tall as you descend",
                "Break parallel if your mobility allows",
                "Drive up through your mid-foot",
            ]),
            common_mistakes: strings(&[
                "Heels lifting off the ground",
                "Rounding the lower back at depth",
                "Shallow depth",
            ]),
            progression_id: Some("split_squat".to_string()),
        });

        library.insert(Exercise {
            id: "split_squat".to_string(),
            name: "Split Squat".to_string(),
            description: "Static lunge-position squat, one foot forward and one back.".to_string(),
            category: ExerciseCategory::Squat,
            difficulty: DifficultyLevel::Intermediate,
            sets: 3,
            reps: 8,
            form_cues: strings(&[
                "Drop the back knee straight down toward the floor",
                "Keep your torso upright",
                "Keep the front heel heavy",
            ]),
            common_mistakes: strings(&[
                "Lunging the front knee far past the toes",
                "Leaning the torso forward to shorten the range",
            ]),
            progression_id: None,
        });

        library.insert(Exercise {
            id: "glute_bridge".to_string(),
            name: "Glute Bridge".to_string(),
            description: "Supine hip bridge, lifting the hips by squeezing the glutes.".to_string(),
            category: ExerciseCategory::Hinge,
            difficulty: DifficultyLevel::Beginner,
            sets: 3,
            reps: 12,
            form_cues: strings(&[
                "Drive through your heels to lift the hips",
                "Squeeze your glutes hard at the top",
                "Keep your ribs down to avoid arching the back",
            ]),
            common_mistakes: strings(&[
                "Pushing through the toes",
                "Hyperextending the lower back at the top",
            ]),
            progression_id: None,
        });

        library.insert(Exercise {
            id: "dead_bug".to_string(),
            name: "Dead Bug".to_string(),
            description:
                "Supine core drill extending opposite arm and leg while the back stays flat."
                    .to_string(),
            category: ExerciseCategory::Core,
            difficulty: DifficultyLevel::Beginner,
            sets: 3,
            reps: 10,
            form_cues: strings(&[
                "Press your lower back into the floor before every rep",
                "Move slowly, one opposite arm and leg at a time",
                "Breathe out as the limbs extend",
            ]),
            common_mistakes: strings(&[
                "Lower back arching off the floor",
                "Holding the breath",
            ]),
            progression_id: Some("plank".to_string()),
        });

        library.insert(Exercise {
            id: "plank".to_string(),
            name: "Plank".to_string(),
            description: "Front plank hold on forearms; reps are seconds held.".to_string(),
            category: ExerciseCategory::Core,
            difficulty: DifficultyLevel::Intermediate,
            sets: 3,
            reps: 30,
            form_cues: strings(&[
                "Stack elbows directly under the shoulders",
                "Squeeze glutes and quads to lock the line",
                "Look at the floor to keep a neutral neck",
            ]),
            common_mistakes: strings(&[
                "Hips sagging toward the floor",
                "Hips piked high to make the hold easier",
            ]),
            progression_id: None,
        });

        library
    }
}

impl Default for ExerciseLibrary {
    fn default() -> Self {
        Self::standard()
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn standard_catalog_ids_are_unique() {
        let library = ExerciseLibrary::standard();
        let ids: HashSet<&str> = library.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids.len(), library.len());
    }

    #[test]
    fn every_progression_id_resolves() {
        let library = ExerciseLibrary::standard();
        for exercise in library.iter() {
            if let Some(next_id) = exercise.progression_id.as_deref() {
                assert!(
                    library.contains(next_id),
                    "{} points at missing progression {}",
                    exercise.id,
                    next_id
                );
            }
        }
    }

    #[test]
    fn every_exercise_carries_coaching_material() {
        let library = ExerciseLibrary::standard();
        for exercise in library.iter() {
            assert!(!exercise.form_cues.is_empty(), "{} has no cues", exercise.id);
            assert!(
                !exercise.common_mistakes.is_empty(),
                "{} has no mistakes",
                exercise.id
            );
            assert!(exercise.sets > 0 && exercise.reps > 0);
        }
    }
}
