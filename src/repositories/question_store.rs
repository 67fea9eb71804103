use std::collections::HashMap;

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{bson::doc, options::IndexOptions, Collection, IndexModel};
use serde::{Deserialize, Serialize};

use crate::{config::Config, db::Database, errors::AppResult, models::domain::Question};

/// Read-only view of the current question bank. The bank is mutated offline
/// by bulk-editing tools; this crate only reads it, and only as a documented
/// fallback — grading and review always prefer the attempt's own snapshot.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QuestionStore: Send + Sync {
    async fn fetch_questions(&self, test_id: &str) -> AppResult<Vec<Question>>;

    /// Single batched lookup; absent test ids are simply missing from the
    /// returned map.
    async fn fetch_questions_batch(
        &self,
        test_ids: &[String],
    ) -> AppResult<HashMap<String, Vec<Question>>>;
}

/// One document per test: the ordered question list for that test id.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct QuestionBank {
    pub test_id: String,
    pub questions: Vec<Question>,
}

pub struct MongoQuestionStore {
    collection: Collection<QuestionBank>,
}

impl MongoQuestionStore {
    pub fn new(db: &Database, config: &Config) -> Self {
        let collection = db.get_collection(&config.question_banks_collection);
        Self { collection }
    }

    pub async fn ensure_indexes(&self) -> AppResult<()> {
        log::info!("Creating indexes for question banks collection");

        let test_id_index = IndexModel::builder()
            .keys(doc! { "test_id": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("test_id_unique".to_string())
                    .build(),
            )
            .build();

        self.collection.create_index(test_id_index).await?;
        Ok(())
    }
}

#[async_trait]
impl QuestionStore for MongoQuestionStore {
    async fn fetch_questions(&self, test_id: &str) -> AppResult<Vec<Question>> {
        let bank = self
            .collection
            .find_one(doc! { "test_id": test_id })
            .await?;
        Ok(bank.map(|b| b.questions).unwrap_or_default())
    }

    async fn fetch_questions_batch(
        &self,
        test_ids: &[String],
    ) -> AppResult<HashMap<String, Vec<Question>>> {
        let banks: Vec<QuestionBank> = self
            .collection
            .find(doc! { "test_id": { "$in": test_ids } })
            .await?
            .try_collect()
            .await?;

        Ok(banks
            .into_iter()
            .map(|bank| (bank.test_id, bank.questions))
            .collect())
    }
}
