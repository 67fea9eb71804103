use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Minimal user record. Account management lives elsewhere; this crate only
/// needs display names for the leaderboard.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct User {
    pub id: String,
    pub display_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}
