//! Framework listing tool.

use async_trait::async_trait;

use uiverse_protocols::{Tool, ToolContext, ToolDefinition, ToolError, ToolResult};

use crate::strategy::Framework;

/// List the supported framework names as Markdown. No browser interaction
/// and no state; the order is fixed.
pub struct ListFrameworksTool {
    definition: ToolDefinition,
}

impl ListFrameworksTool {
    pub fn new() -> Self {
        Self {
            definition: ToolDefinition::new(
                "list_supported_frameworks",
                "List Supported Frameworks",
                "List the framework names extraction supports (Markdown)",
            ),
        }
    }

    /// The static listing, shared with the CLI.
    pub fn listing() -> String {
        let items: Vec<String> = Framework::ALL
            .iter()
            .map(|f| format!("- {}", f.name()))
            .collect();
        format!("### Supported frameworks {}", items.join(" "))
    }
}

impl Default for ListFrameworksTool {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Tool for ListFrameworksTool {
    fn definition(&self) -> &ToolDefinition {
        &self.definition
    }

    async fn execute(
        &self,
        _params: serde_json::Value,
        _ctx: ToolContext,
    ) -> Result<ToolResult, ToolError> {
        Ok(ToolResult::success(Self::listing()))
    }
}
