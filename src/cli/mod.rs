mod catalog;
mod demo;
mod render;
mod session;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};

use calistheniq::config::AppConfig;
use calistheniq::models::DifficultyLevel;

#[derive(Parser)]
#[command(name = "calistheniq")]
#[command(about = "Rule-based calisthenics coach for beginners", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a scripted demo coaching session
    Demo,
    /// Start an interactive coaching session
    Coach,
    /// List the exercise catalog
    Exercises {
        /// Only show exercises at this difficulty level
        #[arg(long, value_enum)]
        level: Option<LevelArg>,
        /// Emit the catalog as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LevelArg {
    Beginner,
    Intermediate,
    Advanced,
}

impl From<LevelArg> for DifficultyLevel {
    fn from(level: LevelArg) -> Self {
        match level {
            LevelArg::Beginner => Self::Beginner,
            LevelArg::Intermediate => Self::Intermediate,
            LevelArg::Advanced => Self::Advanced,
        }
    }
}

impl Cli {
    pub fn execute(self, config: &AppConfig) -> Result<()> {
        match self.command {
            Commands::Demo => demo::run(),
            Commands::Coach => session::run(config),
            Commands::Exercises { level, json } => catalog::run(level.map(Into::into), json),
        }
    }
}
