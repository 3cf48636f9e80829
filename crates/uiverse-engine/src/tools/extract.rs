//! Extraction tools.

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;
use tracing::debug;

use uiverse_protocols::{Tool, ToolContext, ToolDefinition, ToolError, ToolResult};

use crate::browser::SessionConfig;
use crate::dispatch;
use crate::strategy::Framework;

use super::map_extract_error;

// ============================================================================
// Extract Snippet Tool
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct ExtractParams {
    pub framework: String,
    pub url: String,
}

/// Extract a component's code for an explicit framework + link pair.
pub struct ExtractTool {
    definition: ToolDefinition,
    config: SessionConfig,
}

impl ExtractTool {
    pub fn new(config: SessionConfig) -> Self {
        Self {
            definition: ToolDefinition::new(
                "extract_snippet",
                "Extract Snippet",
                "Extract a uiverse.io component's source code for a framework, \
                 returned as single-line Markdown",
            )
            .with_parameters_schema(json!({
                "type": "object",
                "properties": {
                    "framework": {
                        "type": "string",
                        "description": "One of HTML, React, Vue, Svelte, Lit (case-insensitive)"
                    },
                    "url": {
                        "type": "string",
                        "description": "Component page link, starting with https://uiverse.io/"
                    }
                },
                "required": ["framework", "url"]
            })),
            config,
        }
    }
}

#[async_trait]
impl Tool for ExtractTool {
    fn definition(&self) -> &ToolDefinition {
        &self.definition
    }

    async fn execute(
        &self,
        params: serde_json::Value,
        _ctx: ToolContext,
    ) -> Result<ToolResult, ToolError> {
        let params: ExtractParams = serde_json::from_value(params)
            .map_err(|e| ToolError::InvalidParameters(e.to_string()))?;

        let framework: Framework = params
            .framework
            .parse()
            .map_err(map_extract_error)?;

        debug!(%framework, url = %params.url, "Running extraction tool");

        let markdown = dispatch::run_extraction(framework, &params.url, &self.config)
            .await
            .map_err(map_extract_error)?;

        Ok(ToolResult::success(markdown))
    }
}

// ============================================================================
// Parse-and-Extract Tool
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct ParseAndExtractParams {
    pub query: String,
}

/// Parse a `"<framework> <link>"` query and extract.
pub struct ParseAndExtractTool {
    definition: ToolDefinition,
    config: SessionConfig,
}

impl ParseAndExtractTool {
    pub fn new(config: SessionConfig) -> Self {
        Self {
            definition: ToolDefinition::new(
                "parse_and_extract",
                "Parse and Extract",
                "Parse a \"<framework> <link>\" query and extract the component's \
                 code; a link that is only the site prefix returns a notice",
            )
            .with_parameters_schema(json!({
                "type": "object",
                "properties": {
                    "query": {
                        "type": "string",
                        "description": "Framework name and component link separated by a space, \
                                        e.g. \"HTML https://uiverse.io/Na3ar-17/evil-dragon-24\""
                    }
                },
                "required": ["query"]
            })),
            config,
        }
    }
}

#[async_trait]
impl Tool for ParseAndExtractTool {
    fn definition(&self) -> &ToolDefinition {
        &self.definition
    }

    async fn execute(
        &self,
        params: serde_json::Value,
        _ctx: ToolContext,
    ) -> Result<ToolResult, ToolError> {
        let params: ParseAndExtractParams = serde_json::from_value(params)
            .map_err(|e| ToolError::InvalidParameters(e.to_string()))?;

        let markdown = dispatch::run_query(&params.query, &self.config)
            .await
            .map_err(map_extract_error)?;

        Ok(ToolResult::success(markdown))
    }
}
