//! Tool executor adapters.

mod wellness_tool_executor;

pub use wellness_tool_executor::WellnessToolExecutor;
