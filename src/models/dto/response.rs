use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::domain::{
    AnswerSet, Attempt, AttemptSummary, ExamType, LocalizedText, Question, QuestionResult,
};

/// Question as served to a test taker: no answer key, no explanation.
#[derive(Debug, Clone, Serialize)]
pub struct PublicQuestion {
    pub id: String,
    pub prompt: LocalizedText,
    pub options: Vec<LocalizedText>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
}

impl From<&Question> for PublicQuestion {
    fn from(question: &Question) -> Self {
        PublicQuestion {
            id: question.id.clone(),
            prompt: question.prompt.clone(),
            options: question.options.clone(),
            subject: question.subject.clone(),
        }
    }
}

/// A reviewable attempt. `questions` is always the attempt's own stored
/// snapshot; only a legacy attempt with no snapshot falls back to the live
/// bank, in which case `snapshot_missing` is set so callers know the
/// questions may have diverged from what the user actually saw.
#[derive(Debug, Clone, Serialize)]
pub struct AttemptReview {
    pub attempt_id: String,
    pub user_id: String,
    pub test_id: String,
    pub exam_type: ExamType,
    pub subject: String,
    pub summary: AttemptSummary,
    pub time_taken_secs: i64,
    pub answers: AnswerSet,
    pub questions: Vec<Question>,
    pub results: Vec<QuestionResult>,
    pub snapshot_missing: bool,
    pub submitted_at: DateTime<Utc>,
}

impl AttemptReview {
    pub fn from_snapshot(attempt: Attempt) -> Self {
        Self::build(attempt, None)
    }

    pub fn with_live_questions(attempt: Attempt, questions: Vec<Question>) -> Self {
        Self::build(attempt, Some(questions))
    }

    fn build(attempt: Attempt, live_questions: Option<Vec<Question>>) -> Self {
        let snapshot_missing = live_questions.is_some();
        let questions = live_questions.unwrap_or_else(|| attempt.questions_snapshot.clone());

        AttemptReview {
            attempt_id: attempt.id,
            user_id: attempt.user_id,
            test_id: attempt.test_id,
            exam_type: attempt.exam_type,
            subject: attempt.subject,
            summary: attempt.summary,
            time_taken_secs: attempt.time_taken_secs,
            answers: attempt.answers,
            questions,
            results: attempt.question_results,
            snapshot_missing,
            submitted_at: attempt.submitted_at,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct LeaderboardEntry {
    pub rank: u32,
    pub display_name: String,
    pub score: f64,
    pub total_marks: f64,
    pub time_taken_secs: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn public_question_strips_answer_key() {
        let question = Question {
            id: "q-1".to_string(),
            prompt: LocalizedText::english("Pick one"),
            options: vec![LocalizedText::english("A"), LocalizedText::english("B")],
            correct_answer: LocalizedText::english("A"),
            explanation: Some(LocalizedText::english("because")),
            subject: Some("maths".to_string()),
        };

        let public = PublicQuestion::from(&question);
        let json = serde_json::to_string(&public).unwrap();
        assert!(!json.contains("correct_answer"));
        assert!(!json.contains("explanation"));
        assert!(json.contains("\"id\":\"q-1\""));
    }
}
