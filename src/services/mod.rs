pub mod attempt_service;
pub mod leaderboard_service;
pub mod scorer;

pub use attempt_service::AttemptService;
pub use leaderboard_service::LeaderboardService;
pub use scorer::{GradedOutcome, Scorer};
