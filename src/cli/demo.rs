//! Scripted demo session showing the coaching loop without interaction.

use std::sync::Arc;

use anyhow::Result;
use console::style;

use calistheniq::models::{FormQuality, UserFeedback, UserProfile};
use calistheniq::services::{CoachingAgent, ExerciseLibrary};

use super::render;

pub fn run() -> Result<()> {
    let divider = "=".repeat(70);
    println!("{}", divider);
    println!("  CalisthenIQ Demo - Rule-Based Calisthenics Coach");
    println!("{}", divider);
    println!();

    let user = UserProfile::new(
        "Demo User",
        vec![
            "Build upper body strength".to_string(),
            "Improve core stability".to_string(),
        ],
    );
    println!("Profile created for {}", style(&user.name).bold());
    println!("Goals: {}", user.goals.join(", "));

    let library = Arc::new(ExerciseLibrary::standard());
    let mut coach = CoachingAgent::new(user, library);

    println!();
    println!("{}", style("Generating personalized workout...").cyan());
    let workout = coach.generate_workout();
    render::print_workout(&workout);
    coach.user_mut().record_workout();

    println!("{}", style("Form guidance for Wall Push-up...").cyan());
    let guidance = coach.provide_form_guidance("wall_pushup")?;
    render::print_guidance(&guidance);

    // Scenario 1: good form, appropriate difficulty
    println!("{}", style("Scenario 1: Good Form, Appropriate Difficulty").bold());
    let feedback = UserFeedback::new("wall_pushup", 3, FormQuality::Good, 12, 12)?;
    let advice = coach.assess_and_adapt(&feedback)?;
    render::print_advice(&advice);
    coach.user_mut().add_feedback(feedback);

    // Scenario 2: too easy, perfect form
    println!("{}", style("Scenario 2: Exercise Too Easy, Perfect Form").bold());
    let feedback = UserFeedback::new("wall_pushup", 1, FormQuality::Excellent, 15, 12)?;
    let advice = coach.assess_and_adapt(&feedback)?;
    render::print_advice(&advice);
    coach.user_mut().add_feedback(feedback);

    // Scenario 3: poor form overrides everything else
    println!("{}", style("Scenario 3: Poor Form - Technique Work Needed").bold());
    let feedback = UserFeedback::new("bodyweight_squat", 4, FormQuality::Poor, 8, 12)?;
    let advice = coach.assess_and_adapt(&feedback)?;
    render::print_advice(&advice);
    coach.user_mut().add_feedback(feedback);

    render::print_progress(coach.user(), coach.library());

    println!("{}", divider);
    println!("  Demo complete. Run 'calistheniq coach' for an interactive session.");
    println!("{}", divider);

    Ok(())
}
