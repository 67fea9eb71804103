use std::collections::HashMap;

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{bson::doc, options::IndexOptions, Collection, IndexModel};

use crate::{config::Config, db::Database, errors::AppResult, models::domain::User};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Display names for a set of user ids, in one query. Unknown ids are
    /// simply absent from the map.
    async fn find_display_names(&self, user_ids: &[String])
        -> AppResult<HashMap<String, String>>;
}

pub struct MongoUserRepository {
    collection: Collection<User>,
}

impl MongoUserRepository {
    pub fn new(db: &Database, config: &Config) -> Self {
        let collection = db.get_collection(&config.users_collection);
        Self { collection }
    }

    pub async fn ensure_indexes(&self) -> AppResult<()> {
        log::info!("Creating indexes for users collection");

        let id_index = IndexModel::builder()
            .keys(doc! { "id": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("id_unique".to_string())
                    .build(),
            )
            .build();

        self.collection.create_index(id_index).await?;
        Ok(())
    }
}

#[async_trait]
impl UserRepository for MongoUserRepository {
    async fn find_display_names(
        &self,
        user_ids: &[String],
    ) -> AppResult<HashMap<String, String>> {
        let users: Vec<User> = self
            .collection
            .find(doc! { "id": { "$in": user_ids } })
            .await?
            .try_collect()
            .await?;

        Ok(users
            .into_iter()
            .map(|user| (user.id, user.display_name))
            .collect())
    }
}
