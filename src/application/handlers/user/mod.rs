//! User handlers.

mod fetch_context;

pub use fetch_context::FetchUserContextHandler;
