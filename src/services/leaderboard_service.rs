use std::sync::Arc;

use crate::{
    errors::AppResult,
    models::dto::LeaderboardEntry,
    repositories::{AttemptRepository, UserRepository},
};

pub struct LeaderboardService {
    attempts: Arc<dyn AttemptRepository>,
    users: Arc<dyn UserRepository>,
}

impl LeaderboardService {
    pub fn new(attempts: Arc<dyn AttemptRepository>, users: Arc<dyn UserRepository>) -> Self {
        Self { attempts, users }
    }

    /// Ranking for one test: score descending, ties broken by ascending
    /// time taken. The sort is re-applied here so the ordering holds no
    /// matter what the repository returns.
    pub async fn get_leaderboard(
        &self,
        test_id: &str,
        limit: i64,
    ) -> AppResult<Vec<LeaderboardEntry>> {
        let mut attempts = self.attempts.find_by_test(test_id, limit).await?;

        attempts.sort_by(|a, b| {
            b.summary
                .score
                .total_cmp(&a.summary.score)
                .then(a.time_taken_secs.cmp(&b.time_taken_secs))
        });

        let user_ids: Vec<String> = attempts.iter().map(|a| a.user_id.clone()).collect();
        let display_names = self.users.find_display_names(&user_ids).await?;

        Ok(attempts
            .into_iter()
            .enumerate()
            .map(|(index, attempt)| LeaderboardEntry {
                rank: (index + 1) as u32,
                display_name: display_names
                    .get(&attempt.user_id)
                    .cloned()
                    .unwrap_or_else(|| "Anonymous".to_string()),
                score: attempt.summary.score,
                total_marks: attempt.summary.total_marks,
                time_taken_secs: attempt.time_taken_secs,
            })
            .collect())
    }
}
