use std::collections::HashMap;

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{bson::doc, options::IndexOptions, Collection, IndexModel};

use crate::{config::Config, db::Database, errors::AppResult, models::domain::Attempt};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AttemptRepository: Send + Sync {
    /// Single atomic insert; attempts are never updated after creation.
    async fn create(&self, attempt: Attempt) -> AppResult<Attempt>;
    async fn find_by_id(&self, id: &str) -> AppResult<Option<Attempt>>;
    async fn find_latest_by_user_and_test(
        &self,
        user_id: &str,
        test_id: &str,
    ) -> AppResult<Option<Attempt>>;
    /// Latest attempt per test id for one user, resolved in a single query.
    async fn find_latest_for_tests(
        &self,
        user_id: &str,
        test_ids: &[String],
    ) -> AppResult<HashMap<String, Attempt>>;
    /// Attempts for a test ordered by score descending, ties broken by
    /// ascending time taken.
    async fn find_by_test(&self, test_id: &str, limit: i64) -> AppResult<Vec<Attempt>>;
    /// Bulk-clear, the only deletion path for attempts.
    async fn delete_by_user(&self, user_id: &str) -> AppResult<u64>;
}

pub struct MongoAttemptRepository {
    collection: Collection<Attempt>,
}

impl MongoAttemptRepository {
    pub fn new(db: &Database, config: &Config) -> Self {
        let collection = db.get_collection(&config.attempts_collection);
        Self { collection }
    }

    pub async fn ensure_indexes(&self) -> AppResult<()> {
        log::info!("Creating indexes for attempts collection");

        let id_index = IndexModel::builder()
            .keys(doc! { "id": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("id_unique".to_string())
                    .build(),
            )
            .build();

        let user_test_index = IndexModel::builder()
            .keys(doc! { "user_id": 1, "test_id": 1, "submitted_at": -1 })
            .options(
                IndexOptions::builder()
                    .name("user_test_submitted".to_string())
                    .build(),
            )
            .build();

        let leaderboard_index = IndexModel::builder()
            .keys(doc! { "test_id": 1, "summary.score": -1 })
            .options(
                IndexOptions::builder()
                    .name("test_score".to_string())
                    .build(),
            )
            .build();

        self.collection.create_index(id_index).await?;
        self.collection.create_index(user_test_index).await?;
        self.collection.create_index(leaderboard_index).await?;

        log::info!("Successfully created indexes for attempts collection");
        Ok(())
    }
}

#[async_trait]
impl AttemptRepository for MongoAttemptRepository {
    async fn create(&self, attempt: Attempt) -> AppResult<Attempt> {
        self.collection.insert_one(&attempt).await?;
        Ok(attempt)
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<Attempt>> {
        let attempt = self.collection.find_one(doc! { "id": id }).await?;
        Ok(attempt)
    }

    async fn find_latest_by_user_and_test(
        &self,
        user_id: &str,
        test_id: &str,
    ) -> AppResult<Option<Attempt>> {
        let attempt = self
            .collection
            .find_one(doc! { "user_id": user_id, "test_id": test_id })
            .sort(doc! { "submitted_at": -1 })
            .await?;
        Ok(attempt)
    }

    async fn find_latest_for_tests(
        &self,
        user_id: &str,
        test_ids: &[String],
    ) -> AppResult<HashMap<String, Attempt>> {
        let attempts: Vec<Attempt> = self
            .collection
            .find(doc! {
                "user_id": user_id,
                "test_id": { "$in": test_ids }
            })
            .sort(doc! { "submitted_at": -1 })
            .await?
            .try_collect()
            .await?;

        // Sorted newest first, so the first occurrence per test id wins.
        let mut latest = HashMap::new();
        for attempt in attempts {
            latest
                .entry(attempt.test_id.clone())
                .or_insert(attempt);
        }
        Ok(latest)
    }

    async fn find_by_test(&self, test_id: &str, limit: i64) -> AppResult<Vec<Attempt>> {
        let attempts = self
            .collection
            .find(doc! { "test_id": test_id })
            .sort(doc! { "summary.score": -1, "time_taken_secs": 1 })
            .limit(limit)
            .await?
            .try_collect()
            .await?;
        Ok(attempts)
    }

    async fn delete_by_user(&self, user_id: &str) -> AppResult<u64> {
        let result = self
            .collection
            .delete_many(doc! { "user_id": user_id })
            .await?;
        Ok(result.deleted_count)
    }
}
