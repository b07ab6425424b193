// Data models for the coaching core

pub mod advice;
pub mod exercise;
pub mod feedback;
pub mod user;
pub mod workout;

pub use advice::*;
pub use exercise::*;
pub use feedback::*;
pub use user::*;
pub use workout::*;
