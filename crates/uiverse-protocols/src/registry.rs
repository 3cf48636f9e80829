//! Tool registry for managing available tools.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::error::ToolError;
use crate::tool::{Tool, ToolDefinition};

/// Registry for managing tools, keyed by tool id.
pub struct ToolRegistry {
    tools: RwLock<HashMap<String, Arc<dyn Tool>>>,
}

impl ToolRegistry {
    /// Create a new tool registry.
    pub fn new() -> Self {
        Self {
            tools: RwLock::new(HashMap::new()),
        }
    }

    /// Register a tool. Registering the same id twice is an error.
    pub fn register(&self, tool: Arc<dyn Tool>) -> Result<(), ToolError> {
        let id = tool.definition().id.clone();
        let mut tools = self.tools.write();
        if tools.contains_key(&id) {
            return Err(ToolError::AlreadyRegistered(id));
        }
        tools.insert(id, tool);
        Ok(())
    }

    /// Get a tool by id.
    pub fn get(&self, id: &str) -> Option<Arc<dyn Tool>> {
        self.tools.read().get(id).cloned()
    }

    /// List all tool definitions, sorted by id.
    pub fn list(&self) -> Vec<ToolDefinition> {
        let mut definitions: Vec<ToolDefinition> = self
            .tools
            .read()
            .values()
            .map(|t| t.definition().clone())
            .collect();
        definitions.sort_by(|a, b| a.id.cmp(&b.id));
        definitions
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tool::{ToolContext, ToolResult};
    use async_trait::async_trait;

    struct MockTool {
        definition: ToolDefinition,
    }

    impl MockTool {
        fn new(id: &str) -> Self {
            Self {
                definition: ToolDefinition::new(id, "Mock", "A mock tool"),
            }
        }
    }

    #[async_trait]
    impl Tool for MockTool {
        fn definition(&self) -> &ToolDefinition {
            &self.definition
        }

        async fn execute(
            &self,
            _params: serde_json::Value,
            _ctx: ToolContext,
        ) -> Result<ToolResult, ToolError> {
            Ok(ToolResult::success("executed"))
        }
    }

    #[test]
    fn test_registry_creation() {
        let registry = ToolRegistry::new();
        assert!(registry.list().is_empty());
    }

    #[test]
    fn test_register_tool() {
        let registry = ToolRegistry::new();
        registry.register(Arc::new(MockTool::new("t1"))).unwrap();
        assert_eq!(registry.list().len(), 1);
    }

    #[test]
    fn test_register_duplicate() {
        let registry = ToolRegistry::new();
        registry.register(Arc::new(MockTool::new("t1"))).unwrap();
        let result = registry.register(Arc::new(MockTool::new("t1")));
        assert!(matches!(result, Err(ToolError::AlreadyRegistered(_))));
    }

    #[test]
    fn test_get_tool() {
        let registry = ToolRegistry::new();
        registry.register(Arc::new(MockTool::new("t1"))).unwrap();
        assert!(registry.get("t1").is_some());
        assert!(registry.get("nonexistent").is_none());
    }

    #[test]
    fn test_list_sorted() {
        let registry = ToolRegistry::new();
        registry.register(Arc::new(MockTool::new("b"))).unwrap();
        registry.register(Arc::new(MockTool::new("a"))).unwrap();
        let ids: Vec<String> = registry.list().into_iter().map(|d| d.id).collect();
        assert_eq!(ids, vec!["a", "b"]);
    }
}
