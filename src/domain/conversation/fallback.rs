//! Fixed sentences returned when the model gives nothing usable.

/// The model answered with neither text nor tool calls.
pub const GENERIC_REPLY: &str =
    "I'm here to help with your wellness journey! What would you like to work on today?";

/// A model call failed.
pub const TROUBLE_REPLY: &str =
    "I'm having trouble processing that right now. Could you try rephrasing your request?";

/// Tools ran, at least one failed, and the follow-up reply was empty.
pub const TOOL_ERROR_REPLY: &str =
    "I had trouble adding that goal. Could you clarify your goal or try again?";

/// Tools ran, all succeeded, and the follow-up reply was empty.
pub const TOOL_SUCCESS_REPLY: &str =
    "I've noted your goal request. What would you like to work on next?";

/// Chat title when there is nothing to summarize.
pub const EMPTY_SUMMARY: &str = "New Chat";

/// Chat title when summarizing failed.
pub const FAILED_SUMMARY: &str = "Chat Summary";

/// Picks the sentence for an empty reply after tool execution.
pub fn after_tools(any_tool_failed: bool) -> &'static str {
    if any_tool_failed {
        TOOL_ERROR_REPLY
    } else {
        TOOL_SUCCESS_REPLY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn after_tools_reports_failure_only_when_a_tool_failed() {
        assert_eq!(after_tools(true), TOOL_ERROR_REPLY);
        assert_eq!(after_tools(false), TOOL_SUCCESS_REPLY);
    }
}
