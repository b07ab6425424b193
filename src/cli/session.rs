//! Interactive coaching session driven by terminal prompts.

use std::sync::Arc;

use anyhow::Result;
use console::style;
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};

use calistheniq::config::AppConfig;
use calistheniq::models::{DifficultyLevel, FormQuality, UserFeedback, UserProfile};
use calistheniq::services::{CoachingAgent, ExerciseLibrary};

use super::render;

const LEVELS: [DifficultyLevel; 3] = [
    DifficultyLevel::Beginner,
    DifficultyLevel::Intermediate,
    DifficultyLevel::Advanced,
];

const FORM_QUALITIES: [FormQuality; 4] = [
    FormQuality::Poor,
    FormQuality::Fair,
    FormQuality::Good,
    FormQuality::Excellent,
];

pub fn run(config: &AppConfig) -> Result<()> {
    let theme = ColorfulTheme::default();

    println!("{}", style("Welcome to CalisthenIQ").bold());
    println!();

    let name: String = Input::with_theme(&theme)
        .with_prompt("Your name")
        .default(config.user_name.clone())
        .interact_text()?;

    let goals_raw: String = Input::with_theme(&theme)
        .with_prompt("Your goals (comma separated)")
        .allow_empty(true)
        .interact_text()?;
    let goals: Vec<String> = goals_raw
        .split(',')
        .map(str::trim)
        .filter(|g| !g.is_empty())
        .map(str::to_string)
        .collect();

    let level_labels: Vec<&str> = LEVELS.iter().map(|l| l.label()).collect();
    let level_idx = Select::with_theme(&theme)
        .with_prompt("Experience level")
        .items(&level_labels)
        .default(0)
        .interact()?;

    let user = UserProfile::new(name, goals).with_experience_level(LEVELS[level_idx]);
    let library = Arc::new(ExerciseLibrary::standard());
    let mut coach = CoachingAgent::new(user, library);

    loop {
        println!();
        let choice = Select::with_theme(&theme)
            .with_prompt("What would you like to do?")
            .items(&[
                "Generate a workout",
                "Get form guidance",
                "Log exercise feedback",
                "Show progress",
                "Quit",
            ])
            .default(0)
            .interact()?;

        match choice {
            0 => {
                let workout = coach.generate_workout();
                render::print_workout(&workout);
                let completed = Confirm::with_theme(&theme)
                    .with_prompt("Mark this workout as completed?")
                    .default(true)
                    .interact()?;
                if completed {
                    coach.user_mut().record_workout();
                }
            }
            1 => {
                let id = select_exercise(&theme, &coach)?;
                let guidance = coach.provide_form_guidance(&id)?;
                render::print_guidance(&guidance);
            }
            2 => log_feedback(&theme, &mut coach)?,
            3 => render::print_progress(coach.user(), coach.library()),
            _ => break,
        }
    }

    println!("See you next session, {}!", coach.user().name);
    Ok(())
}

fn select_exercise(theme: &ColorfulTheme, coach: &CoachingAgent) -> Result<String> {
    // Selection index follows catalog order
    let entries: Vec<(String, String)> = coach
        .library()
        .iter()
        .map(|e| (e.id.clone(), format!("{} ({})", e.name, e.difficulty)))
        .collect();
    let labels: Vec<&str> = entries.iter().map(|(_, label)| label.as_str()).collect();

    let idx = Select::with_theme(theme)
        .with_prompt("Which exercise?")
        .items(&labels)
        .default(0)
        .interact()?;

    Ok(entries[idx].0.clone())
}

fn log_feedback(theme: &ColorfulTheme, coach: &mut CoachingAgent) -> Result<()> {
    let id = select_exercise(theme, coach)?;
    let default_target = coach.library().get_exercise(&id).map(|e| e.reps).unwrap_or(10);

    let rating: u8 = Input::with_theme(theme)
        .with_prompt("How hard was it? (1 = too easy, 5 = impossible)")
        .interact_text()?;

    let form_labels: Vec<&str> = FORM_QUALITIES.iter().map(|f| f.as_str()).collect();
    let form_idx = Select::with_theme(theme)
        .with_prompt("How was your form?")
        .items(&form_labels)
        .default(2)
        .interact()?;

    let target_reps: u32 = Input::with_theme(theme)
        .with_prompt("Target reps")
        .default(default_target)
        .interact_text()?;

    let completed_reps: u32 = Input::with_theme(theme)
        .with_prompt("Completed reps")
        .interact_text()?;

    let feedback = match UserFeedback::new(
        id,
        rating,
        FORM_QUALITIES[form_idx],
        completed_reps,
        target_reps,
    ) {
        Ok(feedback) => feedback,
        Err(err) => {
            println!("{}", style(err).red());
            return Ok(());
        }
    };

    let advice = coach.assess_and_adapt(&feedback)?;
    render::print_advice(&advice);

    // Recording is the caller's call, after the assessment
    coach.user_mut().add_feedback(feedback);
    Ok(())
}
