//! Shared console rendering for workouts, guidance, and advice.

use console::style;

use calistheniq::models::{Advice, FormGuidance, NextAction, UserProfile, Workout};
use calistheniq::services::ExerciseLibrary;

pub fn print_workout(workout: &Workout) {
    println!();
    println!("{}", style(&workout.name).bold());
    println!("Focus: {}", workout.focus);
    println!();

    println!("{}", style("Warm-up").cyan().bold());
    for item in &workout.warm_up {
        println!("  - {}", item);
    }
    println!();

    println!("{}", style("Main workout").cyan().bold());
    for (i, exercise) in workout.exercises.iter().enumerate() {
        println!("  {}. {}", i + 1, style(&exercise.name).bold());
        println!("     {} sets x {} reps", exercise.sets, exercise.reps);
        if let Some(cue) = exercise.form_cues.first() {
            println!("     Key cue: {}", cue);
        }
    }
    println!();

    println!("{}", style("Cool-down").cyan().bold());
    for item in &workout.cool_down {
        println!("  - {}", item);
    }
    println!();
}

pub fn print_guidance(guidance: &FormGuidance) {
    println!();
    println!("{}", style(&guidance.exercise).bold());
    println!("{}", guidance.description);
    println!();
    println!("{}", style("Key points").cyan().bold());
    for (i, point) in guidance.key_points.iter().enumerate() {
        println!("  {}. {}", i + 1, point);
    }
    println!();
    println!("{}", style("Common mistakes").cyan().bold());
    for mistake in &guidance.common_mistakes {
        println!("  - {}", mistake);
    }
    println!();
    println!("Focus tip: {}", style(&guidance.focus_tip).green());
    println!();
}

pub fn print_advice(advice: &Advice) {
    println!();
    println!("{} {}", style("Coach:").bold(), advice.assessment);

    match advice.next_action {
        NextAction::FocusOnForm => {
            if let Some(feedback) = &advice.form_feedback {
                println!("{}", style("Watch out for:").yellow().bold());
                for item in feedback {
                    println!("  - {}", item);
                }
            }
        }
        NextAction::SuggestProgression | NextAction::IncreaseVolume => {
            if let Some(progression) = &advice.progression_advice {
                println!("{} {}", style("Next step:").green().bold(), progression);
            }
        }
        NextAction::ReduceDifficulty | NextAction::MaintainCurrent => {}
    }

    println!("{}", style(&advice.encouragement).italic());
    println!();
}

pub fn print_progress(user: &UserProfile, library: &ExerciseLibrary) {
    println!();
    println!("{}", style("Progress summary").bold());
    println!("Completed workouts: {}", user.completed_workouts);
    println!("Exercises tracked: {}", user.exercise_history.len());

    // Catalog order keeps the listing stable across runs
    for exercise in library.iter() {
        let history = user.history(&exercise.id);
        if history.is_empty() {
            continue;
        }
        println!();
        println!("  {}", style(&exercise.name).bold());
        println!("    Sessions: {}", history.len());
        if let Some(latest) = user.latest_feedback(&exercise.id) {
            println!(
                "    Latest: {} of {} reps, form {}",
                latest.completed_reps, latest.target_reps, latest.form_quality
            );
        }
    }
    println!();
}
