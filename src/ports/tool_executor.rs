//! Tool Executor Port - Interface for executing model-requested tools.
//!
//! # Design
//!
//! - Tools are invoked by name with JSON arguments
//! - The caller identity is already injected into the arguments as `user_id`
//! - Unknown tool names are an error, not a panic
//!
//! # Example
//!
//! ```ignore
//! use async_trait::async_trait;
//! use tabi::ports::{ToolExecutor, ToolExecutionError};
//!
//! struct NoopExecutor;
//!
//! #[async_trait]
//! impl ToolExecutor for NoopExecutor {
//!     async fn execute(&self, call: &ToolCall) -> Result<serde_json::Value, ToolExecutionError> {
//!         Err(ToolExecutionError::UnknownTool(call.name().to_string()))
//!     }
//! }
//! ```

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::conversation::tools::ToolCall;
use crate::domain::foundation::{DomainError, ValidationError};

/// Port for executing tools.
#[async_trait]
pub trait ToolExecutor: Send + Sync {
    /// Execute a tool and return its JSON result.
    ///
    /// # Returns
    ///
    /// * `Ok(Value)` - Tool executed; the value is handed to the model
    /// * `Err(ToolExecutionError)` - Unknown tool, bad arguments, or a store failure
    async fn execute(&self, call: &ToolCall) -> Result<serde_json::Value, ToolExecutionError>;
}

/// Errors that can occur during tool execution.
#[derive(Debug, Clone, Error)]
pub enum ToolExecutionError {
    /// No tool with this name
    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    /// Arguments did not match the tool's schema
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    /// Parameter validation failed
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// Domain error during execution
    #[error("{}", .0.message)]
    Domain(#[from] DomainError),
}

impl ToolExecutionError {
    /// Creates an invalid arguments error.
    pub fn invalid_arguments(message: impl Into<String>) -> Self {
        Self::InvalidArguments(message.into())
    }
}
