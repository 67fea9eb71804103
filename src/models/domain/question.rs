use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::{AppError, AppResult};

use super::localized_text::LocalizedText;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ExamType {
    Cgl,
    Chsl,
    Dp,
}

impl fmt::Display for ExamType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExamType::Cgl => write!(f, "CGL"),
            ExamType::Chsl => write!(f, "CHSL"),
            ExamType::Dp => write!(f, "DP"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Question {
    pub id: String,
    pub prompt: LocalizedText,
    pub options: Vec<LocalizedText>,
    pub correct_answer: LocalizedText,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<LocalizedText>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
}

impl Question {
    /// Index of the option the correct answer refers to, if any. The answer
    /// key is stored by value, not by index, so this is a bilingual match
    /// against each option.
    pub fn correct_option_index(&self) -> Option<usize> {
        self.options
            .iter()
            .position(|option| option.matches(&self.correct_answer))
    }

    /// A question is gradable only when its answer key actually refers to
    /// one of its options. Bulk edits to the bank have produced questions
    /// where this no longer holds.
    pub fn validate_gradable(&self) -> AppResult<()> {
        if self.correct_option_index().is_none() {
            return Err(AppError::ValidationError(format!(
                "question '{}' is ungradable: correct answer does not match any option",
                self.id
            )));
        }
        Ok(())
    }
}
