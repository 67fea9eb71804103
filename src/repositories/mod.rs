pub mod attempt_repository;
pub mod question_store;
pub mod user_repository;

pub use attempt_repository::{AttemptRepository, MongoAttemptRepository};
pub use question_store::{MongoQuestionStore, QuestionBank, QuestionStore};
pub use user_repository::{MongoUserRepository, UserRepository};

#[cfg(test)]
pub use attempt_repository::MockAttemptRepository;
#[cfg(test)]
pub use question_store::MockQuestionStore;
#[cfg(test)]
pub use user_repository::MockUserRepository;
