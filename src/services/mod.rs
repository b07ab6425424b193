// Business logic services

pub mod coaching_agent;
pub mod exercise_library;

pub use coaching_agent::CoachingAgent;
pub use exercise_library::ExerciseLibrary;
