use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;
use validator::Validate;

use crate::{
    config::Config,
    errors::{AppError, AppResult},
    models::domain::{Attempt, Question},
    models::dto::{AttemptReview, PublicQuestion, SubmitAttemptRequest},
    repositories::{AttemptRepository, QuestionStore},
    services::scorer::Scorer,
};

pub struct AttemptService {
    attempts: Arc<dyn AttemptRepository>,
    question_store: Arc<dyn QuestionStore>,
    config: Arc<Config>,
}

impl AttemptService {
    pub fn new(
        attempts: Arc<dyn AttemptRepository>,
        question_store: Arc<dyn QuestionStore>,
        config: Arc<Config>,
    ) -> Self {
        Self {
            attempts,
            question_store,
            config,
        }
    }

    /// Questions for a test as served to a test taker: answer keys and
    /// explanations stripped.
    pub async fn get_test_paper(&self, test_id: &str) -> AppResult<Vec<PublicQuestion>> {
        let questions = self.question_store.fetch_questions(test_id).await?;
        if questions.is_empty() {
            return Err(AppError::NotFound(format!(
                "No questions found for test '{}'",
                test_id
            )));
        }
        Ok(questions.iter().map(PublicQuestion::from).collect())
    }

    /// Record exactly one immutable attempt. The summary is always
    /// recomputed server-side from the snapshot; client-declared numbers are
    /// ignored except for time taken.
    pub async fn submit_attempt(&self, req: SubmitAttemptRequest) -> AppResult<Attempt> {
        req.validate()?;

        let (snapshot, fallback_used) = self.resolve_snapshot(&req).await?;
        let answers = req.answers.to_answer_set(&snapshot)?;
        let graded = Scorer::grade(&snapshot, &answers)?;

        if let Some(declared) = req.declared_score {
            if (declared - graded.summary.score).abs() > f64::EPSILON {
                log::warn!(
                    "Client-declared score {} for test {} disagrees with recomputed {}; ignoring",
                    declared,
                    req.test_id,
                    graded.summary.score
                );
            }
        }

        let now = Utc::now();
        let attempt = Attempt {
            id: Uuid::new_v4().to_string(),
            user_id: req.user_id,
            test_id: req.test_id,
            exam_type: req.exam_type,
            subject: req.subject,
            summary: graded.summary,
            time_taken_secs: req.time_taken_secs,
            answers,
            questions_snapshot: snapshot,
            question_results: graded.results,
            snapshot_fallback_used: fallback_used,
            submitted_at: now,
            created_at: Some(now),
        };

        self.attempts.create(attempt).await
    }

    async fn resolve_snapshot(
        &self,
        req: &SubmitAttemptRequest,
    ) -> AppResult<(Vec<Question>, bool)> {
        if !req.questions_snapshot.is_empty() {
            return Ok((req.questions_snapshot.clone(), false));
        }

        if !self.config.snapshot_fallback_enabled {
            return Err(AppError::MissingSnapshot(
                "submission has no question snapshot; resend with the questions shown to the user"
                    .to_string(),
            ));
        }

        log::warn!(
            "Submission for test {} has no snapshot; falling back to the live question bank",
            req.test_id
        );
        let questions = self.question_store.fetch_questions(&req.test_id).await?;
        if questions.is_empty() {
            return Err(AppError::MissingSnapshot(format!(
                "no questions found for test '{}'",
                req.test_id
            )));
        }
        Ok((questions, true))
    }

    /// The attempt is returned only to its owner. A nonexistent id and an
    /// id owned by someone else produce the identical error, so callers
    /// cannot probe for other users' attempts.
    pub async fn get_attempt(
        &self,
        attempt_id: &str,
        requesting_user_id: &str,
    ) -> AppResult<AttemptReview> {
        let attempt = self
            .attempts
            .find_by_id(attempt_id)
            .await?
            .filter(|a| a.user_id == requesting_user_id)
            .ok_or_else(|| Self::attempt_not_found(attempt_id))?;

        self.review(attempt).await
    }

    fn attempt_not_found(attempt_id: &str) -> AppError {
        AppError::NotFound(format!("Attempt with id '{}' not found", attempt_id))
    }

    async fn review(&self, attempt: Attempt) -> AppResult<AttemptReview> {
        if attempt.has_snapshot() {
            return Ok(AttemptReview::from_snapshot(attempt));
        }

        // Legacy attempt recorded before snapshot capture; best-effort view
        // from the live bank, flagged as such on the review.
        let questions = self.question_store.fetch_questions(&attempt.test_id).await?;
        Ok(AttemptReview::with_live_questions(attempt, questions))
    }

    pub async fn get_last_attempt(
        &self,
        test_id: &str,
        user_id: &str,
    ) -> AppResult<Option<AttemptReview>> {
        match self
            .attempts
            .find_latest_by_user_and_test(user_id, test_id)
            .await?
        {
            Some(attempt) => Ok(Some(self.review(attempt).await?)),
            None => Ok(None),
        }
    }

    /// Batched form of `get_last_attempt`. Test ids whose latest attempt
    /// already embeds a snapshot never touch the live bank; the rest share
    /// one batched lookup.
    pub async fn get_last_attempts(
        &self,
        test_ids: &[String],
        user_id: &str,
    ) -> AppResult<HashMap<String, Option<AttemptReview>>> {
        let mut latest = self.attempts.find_latest_for_tests(user_id, test_ids).await?;

        let snapshotless: Vec<String> = latest
            .values()
            .filter(|attempt| !attempt.has_snapshot())
            .map(|attempt| attempt.test_id.clone())
            .collect();

        let mut live_questions = if snapshotless.is_empty() {
            HashMap::new()
        } else {
            self.question_store
                .fetch_questions_batch(&snapshotless)
                .await?
        };

        let mut reviews = HashMap::with_capacity(test_ids.len());
        for test_id in test_ids {
            let review = match latest.remove(test_id) {
                None => None,
                Some(attempt) if attempt.has_snapshot() => {
                    Some(AttemptReview::from_snapshot(attempt))
                }
                Some(attempt) => {
                    let questions = live_questions.remove(&attempt.test_id).unwrap_or_default();
                    Some(AttemptReview::with_live_questions(attempt, questions))
                }
            };
            reviews.insert(test_id.clone(), review);
        }

        Ok(reviews)
    }

    /// Explicit bulk-clear, the only way attempts are ever deleted.
    pub async fn clear_attempts(&self, user_id: &str) -> AppResult<u64> {
        let deleted = self.attempts.delete_by_user(user_id).await?;
        log::info!("Cleared {} attempts for user {}", deleted, user_id);
        Ok(deleted)
    }
}
