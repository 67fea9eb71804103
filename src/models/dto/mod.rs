pub mod request;
pub mod response;

pub use request::{AnswerPayload, SubmitAttemptRequest};
pub use response::{AttemptReview, LeaderboardEntry, PublicQuestion};
