use std::collections::HashMap;

use serde::Deserialize;
use validator::Validate;

use crate::errors::AppResult;
use crate::models::domain::{AnswerSet, ExamType, Question};

/// Both answer shapes observed on the wire. Older clients send positional
/// option indices; newer ones send selected values keyed by question id.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum AnswerPayload {
    ByIndex(Vec<Option<i64>>),
    ByValue(HashMap<String, Option<String>>),
}

impl AnswerPayload {
    pub fn to_answer_set(&self, snapshot: &[Question]) -> AppResult<AnswerSet> {
        match self {
            AnswerPayload::ByIndex(indices) => AnswerSet::from_indices(indices, snapshot),
            AnswerPayload::ByValue(map) => AnswerSet::from_value_map(map, snapshot),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SubmitAttemptRequest {
    #[validate(length(min = 1, max = 100))]
    pub user_id: String,

    #[validate(length(min = 1, max = 100))]
    pub test_id: String,

    pub exam_type: ExamType,

    #[validate(length(min = 1, max = 100))]
    pub subject: String,

    pub answers: AnswerPayload,

    /// The exact questions shown to the user. Required unless the snapshot
    /// fallback is enabled in config.
    #[serde(default)]
    pub questions_snapshot: Vec<Question>,

    #[validate(range(min = 0))]
    pub time_taken_secs: i64,

    // Client-declared summary, kept for wire compatibility with older
    // clients. The recorder recomputes everything except time_taken_secs.
    #[serde(default)]
    pub declared_score: Option<f64>,
    #[serde(default)]
    pub declared_correct_count: Option<u32>,
}
