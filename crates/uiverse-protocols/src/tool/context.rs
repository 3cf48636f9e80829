//! Tool execution context.

/// Context for tool execution.
#[derive(Debug, Clone)]
pub struct ToolContext {
    /// Session ID for the current invocation, used for log correlation.
    pub session_id: String,
}

impl ToolContext {
    /// Create a new tool context.
    pub fn new(session_id: impl Into<String>) -> Self {
        Self {
            session_id: session_id.into(),
        }
    }
}
