use serde::{Deserialize, Serialize};
use std::fmt;

/// What the coach wants the user to do next
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NextAction {
    FocusOnForm,
    SuggestProgression,
    IncreaseVolume,
    ReduceDifficulty,
    MaintainCurrent,
}

impl NextAction {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::FocusOnForm => "focus_on_form",
            Self::SuggestProgression => "suggest_progression",
            Self::IncreaseVolume => "increase_volume",
            Self::ReduceDifficulty => "reduce_difficulty",
            Self::MaintainCurrent => "maintain_current",
        }
    }
}

impl fmt::Display for NextAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Coaching response to a single piece of feedback.
/// `assessment`, `next_action` and `encouragement` are always present;
/// the optional fields are serialized only on the branches that set them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Advice {
    pub assessment: String,
    pub next_action: NextAction,
    pub encouragement: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub progression_advice: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub form_feedback: Option<Vec<String>>,
}
