//! In-memory adapters.

mod in_memory_wellness_store;

pub use in_memory_wellness_store::InMemoryWellnessStore;
