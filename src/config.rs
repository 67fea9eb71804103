use std::env;

#[derive(Clone, Debug)]
pub struct Config {
    pub mongo_conn_string: String,
    pub mongo_db_name: String,
    pub attempts_collection: String,
    pub question_banks_collection: String,
    pub users_collection: String,
    /// When true, a submission arriving without a question snapshot falls
    /// back to the live question bank for that test id. Review of such an
    /// attempt may disagree with what the user actually saw.
    pub snapshot_fallback_enabled: bool,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            mongo_conn_string: env::var("MONGO_CONN_STRING")
                .unwrap_or_else(|_| "mongodb://localhost:27017".to_string()),
            mongo_db_name: env::var("MONGO_DB_NAME")
                .unwrap_or_else(|_| "pariksha-local".to_string()),
            attempts_collection: env::var("ATTEMPTS_COLLECTION")
                .unwrap_or_else(|_| "attempts".to_string()),
            question_banks_collection: env::var("QUESTION_BANKS_COLLECTION")
                .unwrap_or_else(|_| "question_banks".to_string()),
            users_collection: env::var("USERS_COLLECTION").unwrap_or_else(|_| "users".to_string()),
            snapshot_fallback_enabled: env::var("SNAPSHOT_FALLBACK_ENABLED")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
        }
    }

    pub fn test_config() -> Self {
        Self {
            mongo_conn_string: "mongodb://localhost:27017".to_string(),
            mongo_db_name: "pariksha-test".to_string(),
            attempts_collection: "attempts".to_string(),
            question_banks_collection: "question_banks".to_string(),
            users_collection: "users".to_string(),
            snapshot_fallback_enabled: false,
        }
    }
}
