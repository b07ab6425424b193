//! Exercise catalog listing.

use anyhow::Result;
use console::style;

use calistheniq::models::{DifficultyLevel, Exercise};
use calistheniq::services::ExerciseLibrary;

pub fn run(level: Option<DifficultyLevel>, json: bool) -> Result<()> {
    let library = ExerciseLibrary::standard();
    let exercises: Vec<&Exercise> = match level {
        Some(level) => library.list_by_difficulty(level),
        None => library.iter().collect(),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&exercises)?);
        return Ok(());
    }

    println!();
    for exercise in &exercises {
        println!(
            "{:<18} {} [{} / {}] {} sets x {} reps",
            exercise.id,
            style(&exercise.name).bold(),
            exercise.category,
            exercise.difficulty,
            exercise.sets,
            exercise.reps
        );
        if let Some(next) = &exercise.progression_id {
            println!("{:<18} progresses to {}", "", next);
        }
    }
    println!();
    println!("{} exercises", exercises.len());

    Ok(())
}
