use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::answer_set::AnswerSet;
use super::localized_text::LocalizedText;
use super::question::{ExamType, Question};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AnswerVerdict {
    Correct,
    Incorrect,
    Unattempted,
}

/// Per-question grading outcome, persisted with the attempt so review never
/// has to consult the live question bank.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct QuestionResult {
    pub question_id: String,
    pub selected: Option<String>,
    pub verdict: AnswerVerdict,
    pub correct_answer: LocalizedText,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<LocalizedText>,
}

impl QuestionResult {
    pub fn is_correct(&self) -> bool {
        self.verdict == AnswerVerdict::Correct
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct AttemptSummary {
    pub score: f64,
    pub total_marks: f64,
    pub correct_count: u32,
    pub incorrect_count: u32,
    pub unattempted_count: u32,
    pub percentage: f64,
    pub passed: bool,
}

/// One graded, persisted record of a user completing a test. Immutable once
/// created; the embedded snapshot is the sole source of truth for review,
/// since the live question bank is mutated over time by offline bulk edits.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Attempt {
    pub id: String,
    pub user_id: String,
    pub test_id: String,
    pub exam_type: ExamType,
    pub subject: String,
    pub summary: AttemptSummary,
    pub time_taken_secs: i64,
    pub answers: AnswerSet,
    pub questions_snapshot: Vec<Question>,
    pub question_results: Vec<QuestionResult>,
    /// Set when the snapshot was backfilled from the live bank at submission
    /// time because the client sent none.
    pub snapshot_fallback_used: bool,
    pub submitted_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Attempt {
    /// Legacy attempts recorded before snapshot capture have an empty
    /// snapshot; review falls back to the live bank for those only.
    pub fn has_snapshot(&self) -> bool {
        !self.questions_snapshot.is_empty()
    }
}
