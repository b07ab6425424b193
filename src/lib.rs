//! CalisthenIQ - rule-based calisthenics coaching for beginners.
//!
//! The crate is built around two services: an [`services::ExerciseLibrary`]
//! holding the static exercise catalog, and a [`services::CoachingAgent`]
//! that generates workouts, explains form, and adapts to user feedback.

pub mod config;
pub mod errors;
pub mod models;
pub mod services;

pub use errors::CoachError;
pub use models::{
    Advice, DifficultyLevel, Exercise, ExerciseCategory, FormGuidance, FormQuality, NextAction,
    UserFeedback, UserProfile, Workout, WorkoutExercise,
};
pub use services::{CoachingAgent, ExerciseLibrary};
