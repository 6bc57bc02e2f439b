//! PostgreSQL adapters.

mod goal_repository;
mod user_context_reader;

pub use goal_repository::PostgresGoalRepository;
pub use user_context_reader::PostgresUserContextReader;
