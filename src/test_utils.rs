#[cfg(test)]
pub mod fixtures {
    use chrono::Utc;

    use crate::models::domain::{
        AnswerSet, Attempt, AttemptSummary, ExamType, LocalizedText, Question,
    };
    use crate::models::dto::{AnswerPayload, SubmitAttemptRequest};

    /// Bilingual question with the given options and answer key.
    pub fn question(id: &str, options: &[(&str, &str)], correct: (&str, &str)) -> Question {
        Question {
            id: id.to_string(),
            prompt: LocalizedText::bilingual("Pick the right option", "सही विकल्प चुनें"),
            options: options
                .iter()
                .map(|(en, hi)| LocalizedText::bilingual(*en, *hi))
                .collect(),
            correct_answer: LocalizedText::bilingual(correct.0, correct.1),
            explanation: None,
            subject: Some("maths".to_string()),
        }
    }

    /// Three English-only questions with correct answers A, B, C.
    pub fn snapshot_abc() -> Vec<Question> {
        [("q-1", "A"), ("q-2", "B"), ("q-3", "C")]
            .iter()
            .map(|(id, correct)| Question {
                id: id.to_string(),
                prompt: LocalizedText::english("Pick the right option"),
                options: vec![
                    LocalizedText::english("A"),
                    LocalizedText::english("B"),
                    LocalizedText::english("C"),
                ],
                correct_answer: LocalizedText::english(*correct),
                explanation: Some(LocalizedText::english("standard explanation")),
                subject: None,
            })
            .collect()
    }

    /// Submission for "test-1" with all questions unattempted by default.
    pub fn submit_request(snapshot: Vec<Question>) -> SubmitAttemptRequest {
        SubmitAttemptRequest {
            user_id: "user-1".to_string(),
            test_id: "test-1".to_string(),
            exam_type: ExamType::Cgl,
            subject: "maths".to_string(),
            answers: AnswerPayload::ByIndex(vec![None; snapshot.len()]),
            questions_snapshot: snapshot,
            time_taken_secs: 300,
            declared_score: None,
            declared_correct_count: None,
        }
    }

    /// Persisted attempt owned by `user_id`, carrying the standard snapshot.
    pub fn attempt_for(user_id: &str, test_id: &str, id: &str) -> Attempt {
        Attempt {
            id: id.to_string(),
            user_id: user_id.to_string(),
            test_id: test_id.to_string(),
            exam_type: ExamType::Cgl,
            subject: "maths".to_string(),
            summary: AttemptSummary {
                score: 2.0,
                total_marks: 6.0,
                correct_count: 1,
                incorrect_count: 0,
                unattempted_count: 2,
                percentage: 33.33,
                passed: false,
            },
            time_taken_secs: 300,
            answers: AnswerSet::from_selections(vec![Some("A".to_string()), None, None]),
            questions_snapshot: snapshot_abc(),
            question_results: vec![],
            snapshot_fallback_used: false,
            submitted_at: Utc::now(),
            created_at: Some(Utc::now()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;

    #[test]
    fn test_fixture_snapshot_is_gradable() {
        for q in snapshot_abc() {
            assert!(q.validate_gradable().is_ok());
        }
    }

    #[test]
    fn test_fixture_bilingual_question_is_gradable() {
        let q = question("q-hi", &[("Four", "चार"), ("Five", "पाँच")], ("Four", "चार"));
        assert_eq!(q.correct_option_index(), Some(0));
    }

    #[test]
    fn test_fixture_attempt_belongs_to_user() {
        let attempt = attempt_for("user-9", "test-2", "a-1");
        assert_eq!(attempt.user_id, "user-9");
        assert!(attempt.has_snapshot());
    }
}
