use std::sync::Arc;

use assert_matches::assert_matches;
use pretty_assertions::assert_eq;

use calistheniq::models::{DifficultyLevel, FormQuality, NextAction, UserFeedback, UserProfile};
use calistheniq::services::{CoachingAgent, ExerciseLibrary};
use calistheniq::CoachError;

fn coach_for(level: DifficultyLevel) -> CoachingAgent {
    let user = UserProfile::new("Test User", vec![]).with_experience_level(level);
    CoachingAgent::new(user, Arc::new(ExerciseLibrary::standard()))
}

fn beginner_coach() -> CoachingAgent {
    coach_for(DifficultyLevel::Beginner)
}

#[test]
fn user_profile_starts_with_defaults() {
    let profile = UserProfile::new("Test User", vec![]);

    assert_eq!(profile.name, "Test User");
    assert_eq!(profile.experience_level, DifficultyLevel::Beginner);
    assert_eq!(profile.completed_workouts, 0);
    assert!(profile.exercise_history.is_empty());
}

#[test]
fn add_feedback_appends_in_call_order() {
    let mut profile = UserProfile::new("Test User", vec![]);

    for reps in [8, 10, 12] {
        let feedback =
            UserFeedback::new("wall_pushup", 3, FormQuality::Good, reps, 12).unwrap();
        profile.add_feedback(feedback);
    }

    let history = profile.history("wall_pushup");
    assert_eq!(history.len(), 3);
    let recorded: Vec<u32> = history.iter().map(|f| f.completed_reps).collect();
    assert_eq!(recorded, vec![8, 10, 12]);
    assert_eq!(profile.latest_feedback("wall_pushup").unwrap().completed_reps, 12);
}

#[test]
fn history_of_untracked_exercise_is_empty() {
    let profile = UserProfile::new("Test User", vec![]);

    assert!(profile.history("pullup").is_empty());
    assert!(profile.latest_feedback("pullup").is_none());
}

#[test]
fn record_workout_increments_the_counter() {
    let mut profile = UserProfile::new("Test User", vec![]);
    profile.record_workout();
    profile.record_workout();

    assert_eq!(profile.completed_workouts, 2);
}

#[test]
fn good_form_in_the_middle_band_maintains_current() {
    let coach = beginner_coach();
    let feedback = UserFeedback::new("wall_pushup", 3, FormQuality::Good, 12, 12).unwrap();

    let advice = coach.assess_and_adapt(&feedback).unwrap();

    assert_eq!(advice.next_action, NextAction::MaintainCurrent);
    assert!(!advice.assessment.is_empty());
    assert!(!advice.encouragement.is_empty());
    assert!(advice.progression_advice.is_none());
    assert!(advice.form_feedback.is_none());
}

#[test]
fn too_easy_with_target_met_suggests_the_progression() {
    let coach = beginner_coach();
    let feedback = UserFeedback::new("wall_pushup", 1, FormQuality::Excellent, 15, 12).unwrap();

    let advice = coach.assess_and_adapt(&feedback).unwrap();

    assert_eq!(advice.next_action, NextAction::SuggestProgression);
    let progression = advice.progression_advice.unwrap();
    assert!(progression.contains("Incline Push-up"));
}

#[test]
fn too_easy_at_chain_end_increases_volume() {
    let coach = coach_for(DifficultyLevel::Advanced);
    let feedback = UserFeedback::new("pullup", 1, FormQuality::Excellent, 8, 5).unwrap();

    let advice = coach.assess_and_adapt(&feedback).unwrap();

    assert_eq!(advice.next_action, NextAction::IncreaseVolume);
    assert!(advice.progression_advice.is_some());
}

#[test]
fn too_easy_without_target_met_still_maintains() {
    let coach = beginner_coach();
    let feedback = UserFeedback::new("wall_pushup", 1, FormQuality::Good, 8, 12).unwrap();

    let advice = coach.assess_and_adapt(&feedback).unwrap();

    assert_eq!(advice.next_action, NextAction::MaintainCurrent);
}

#[test]
fn poor_form_preempts_every_other_signal() {
    let coach = beginner_coach();

    // Even a "too easy, target met" report defers to poor form
    let feedback =
        UserFeedback::new("bodyweight_squat", 1, FormQuality::Poor, 15, 12).unwrap();
    let advice = coach.assess_and_adapt(&feedback).unwrap();

    assert_eq!(advice.next_action, NextAction::FocusOnForm);
    let form_feedback = advice.form_feedback.unwrap();
    assert!(!form_feedback.is_empty());
    assert!(advice.progression_advice.is_none());
}

#[test]
fn too_hard_reduces_difficulty() {
    let coach = beginner_coach();

    for rating in [4, 5] {
        let feedback =
            UserFeedback::new("pushup", rating, FormQuality::Good, 4, 8).unwrap();
        let advice = coach.assess_and_adapt(&feedback).unwrap();
        assert_eq!(advice.next_action, NextAction::ReduceDifficulty);
    }
}

#[test]
fn assessment_is_a_pure_function_of_the_feedback() {
    let coach = beginner_coach();
    let feedback = UserFeedback::new("wall_pushup", 3, FormQuality::Good, 12, 12).unwrap();

    let first = coach.assess_and_adapt(&feedback).unwrap();
    let second = coach.assess_and_adapt(&feedback).unwrap();

    assert_eq!(first, second);
}

#[test]
fn assessment_ignores_recorded_history() {
    let mut coach = beginner_coach();
    for _ in 0..5 {
        let poor = UserFeedback::new("wall_pushup", 5, FormQuality::Poor, 2, 12).unwrap();
        coach.user_mut().add_feedback(poor);
    }

    let feedback = UserFeedback::new("wall_pushup", 3, FormQuality::Good, 12, 12).unwrap();
    let advice = coach.assess_and_adapt(&feedback).unwrap();
    let fresh = beginner_coach().assess_and_adapt(&feedback).unwrap();

    assert_eq!(advice, fresh);
}

#[test]
fn assessment_of_unknown_exercise_fails() {
    let coach = beginner_coach();
    let feedback = UserFeedback::new("muscle_up", 3, FormQuality::Good, 5, 5).unwrap();

    let err = coach.assess_and_adapt(&feedback).unwrap_err();
    assert_matches!(err, CoachError::ExerciseNotFound(id) if id == "muscle_up");
}

#[test]
fn generated_workout_is_complete_and_well_referenced() {
    let coach = beginner_coach();
    let workout = coach.generate_workout();

    assert!(!workout.name.is_empty());
    assert!(!workout.focus.is_empty());
    assert!(!workout.warm_up.is_empty());
    assert!(!workout.exercises.is_empty());
    assert!(!workout.cool_down.is_empty());

    for exercise in &workout.exercises {
        assert!(coach.library().contains(&exercise.exercise_id));
        assert!(exercise.sets > 0 && exercise.reps > 0);
    }
}

#[test]
fn beginner_workout_draws_only_beginner_exercises() {
    let coach = beginner_coach();
    let workout = coach.generate_workout();

    for exercise in &workout.exercises {
        let entry = coach.library().get_exercise(&exercise.exercise_id).unwrap();
        assert_eq!(entry.difficulty, DifficultyLevel::Beginner);
    }
}

#[test]
fn workout_generation_is_deterministic() {
    let coach = beginner_coach();

    let first: Vec<String> = coach
        .generate_workout()
        .exercises
        .iter()
        .map(|e| e.exercise_id.clone())
        .collect();
    let second: Vec<String> = coach
        .generate_workout()
        .exercises
        .iter()
        .map(|e| e.exercise_id.clone())
        .collect();

    assert_eq!(first, second);
}

#[test]
fn advanced_workout_still_returns_exercises() {
    let coach = coach_for(DifficultyLevel::Advanced);
    let workout = coach.generate_workout();

    assert!(!workout.exercises.is_empty());
}

#[test]
fn form_guidance_for_wall_pushup_matches_the_catalog() {
    let coach = beginner_coach();
    let guidance = coach.provide_form_guidance("wall_pushup").unwrap();

    assert_eq!(guidance.exercise, "Wall Push-up");
    assert!(!guidance.key_points.is_empty());
    assert!(!guidance.common_mistakes.is_empty());
    assert_eq!(guidance.focus_tip, guidance.key_points[0]);
}

#[test]
fn form_guidance_for_unknown_exercise_fails() {
    let coach = beginner_coach();

    let err = coach.provide_form_guidance("planche").unwrap_err();
    assert_matches!(err, CoachError::ExerciseNotFound(_));
}

#[test]
fn serialized_advice_only_carries_the_keys_its_branch_set() {
    let coach = beginner_coach();

    let maintain = coach
        .assess_and_adapt(&UserFeedback::new("wall_pushup", 3, FormQuality::Good, 12, 12).unwrap())
        .unwrap();
    let json = serde_json::to_value(&maintain).unwrap();
    assert_eq!(json["next_action"], "maintain_current");
    assert!(json.get("progression_advice").is_none());
    assert!(json.get("form_feedback").is_none());

    let form = coach
        .assess_and_adapt(&UserFeedback::new("wall_pushup", 3, FormQuality::Poor, 8, 12).unwrap())
        .unwrap();
    let json = serde_json::to_value(&form).unwrap();
    assert_eq!(json["next_action"], "focus_on_form");
    assert!(json.get("form_feedback").is_some());
    assert!(json.get("progression_advice").is_none());

    let progress = coach
        .assess_and_adapt(
            &UserFeedback::new("wall_pushup", 1, FormQuality::Excellent, 15, 12).unwrap(),
        )
        .unwrap();
    let json = serde_json::to_value(&progress).unwrap();
    assert_eq!(json["next_action"], "suggest_progression");
    assert!(json.get("progression_advice").is_some());
    assert!(json.get("form_feedback").is_none());
}
