use crate::errors::{AppError, AppResult};
use crate::models::domain::{AnswerSet, AnswerVerdict, AttemptSummary, Question, QuestionResult};

/// Marking scheme observed across all exam types: +2 per correct answer,
/// -0.5 per wrong one, pass at 40 percent.
pub const MARKS_PER_CORRECT: f64 = 2.0;
pub const NEGATIVE_MARK: f64 = 0.5;
pub const PASS_PERCENTAGE: f64 = 40.0;

#[derive(Clone, Debug, PartialEq)]
pub struct GradedOutcome {
    pub summary: AttemptSummary,
    pub results: Vec<QuestionResult>,
}

/// Pure grading function. Operates only on the question snapshot and the
/// canonical answer set handed to it; never touches the live question bank,
/// the clock, or any other state.
pub struct Scorer;

impl Scorer {
    pub fn grade(snapshot: &[Question], answers: &AnswerSet) -> AppResult<GradedOutcome> {
        if snapshot.is_empty() {
            return Err(AppError::ValidationError(
                "cannot grade an empty question set".to_string(),
            ));
        }
        if answers.len() != snapshot.len() {
            return Err(AppError::ValidationError(format!(
                "expected {} answers, got {}",
                snapshot.len(),
                answers.len()
            )));
        }

        let mut results = Vec::with_capacity(snapshot.len());
        let mut correct_count: u32 = 0;
        let mut incorrect_count: u32 = 0;

        for (question, selected) in snapshot.iter().zip(answers.selections()) {
            question.validate_gradable()?;

            let verdict = match selected.as_deref() {
                None => AnswerVerdict::Unattempted,
                Some(value) if question.correct_answer.matches_str(value) => {
                    AnswerVerdict::Correct
                }
                Some(_) => AnswerVerdict::Incorrect,
            };

            match verdict {
                AnswerVerdict::Correct => correct_count += 1,
                AnswerVerdict::Incorrect => incorrect_count += 1,
                AnswerVerdict::Unattempted => {}
            }

            results.push(QuestionResult {
                question_id: question.id.clone(),
                selected: selected.clone(),
                verdict,
                correct_answer: question.correct_answer.clone(),
                explanation: question.explanation.clone(),
            });
        }

        let total_questions = snapshot.len() as u32;
        let unattempted_count = total_questions - correct_count - incorrect_count;

        let raw_score = f64::from(correct_count) * MARKS_PER_CORRECT
            - f64::from(incorrect_count) * NEGATIVE_MARK;
        let score = raw_score.max(0.0);
        let total_marks = f64::from(total_questions) * MARKS_PER_CORRECT;
        let percentage = round2(f64::from(correct_count) / f64::from(total_questions) * 100.0);
        let passed = percentage >= PASS_PERCENTAGE;

        Ok(GradedOutcome {
            summary: AttemptSummary {
                score,
                total_marks,
                correct_count,
                incorrect_count,
                unattempted_count,
                percentage,
                passed,
            },
            results,
        })
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
