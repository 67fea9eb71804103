use std::sync::Arc;

use crate::{
    config::Config,
    db::Database,
    errors::AppResult,
    repositories::{MongoAttemptRepository, MongoQuestionStore, MongoUserRepository},
    services::{AttemptService, LeaderboardService},
};

/// Wiring for an embedding transport layer: repositories behind their
/// traits, services behind `Arc`s.
#[derive(Clone)]
pub struct AppState {
    pub attempt_service: Arc<AttemptService>,
    pub leaderboard_service: Arc<LeaderboardService>,
    pub config: Arc<Config>,
}

impl AppState {
    pub async fn new(config: Config) -> AppResult<Self> {
        let db = Database::connect(&config).await?;
        let config = Arc::new(config);

        let attempt_repository = Arc::new(MongoAttemptRepository::new(&db, &config));
        attempt_repository.ensure_indexes().await?;

        let question_store = Arc::new(MongoQuestionStore::new(&db, &config));
        question_store.ensure_indexes().await?;

        let user_repository = Arc::new(MongoUserRepository::new(&db, &config));
        user_repository.ensure_indexes().await?;

        let attempt_service = Arc::new(AttemptService::new(
            attempt_repository.clone(),
            question_store,
            config.clone(),
        ));
        let leaderboard_service = Arc::new(LeaderboardService::new(
            attempt_repository,
            user_repository,
        ));

        Ok(Self {
            attempt_service,
            leaderboard_service,
            config,
        })
    }
}
