pub mod answer_set;
pub mod attempt;
pub mod localized_text;
pub mod question;
pub mod user;

pub use answer_set::AnswerSet;
pub use attempt::{AnswerVerdict, Attempt, AttemptSummary, QuestionResult};
pub use localized_text::LocalizedText;
pub use question::{ExamType, Question};
pub use user::User;
