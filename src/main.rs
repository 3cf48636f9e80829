//! uiverse-extractor - extract uiverse.io component code via a headless browser.
//!
//! Main entry point: wires the extraction tools into a registry and exposes
//! them as CLI subcommands plus a line-oriented stdio mode for agents.

use std::sync::Arc;

use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

use uiverse_engine::SessionConfig;
use uiverse_engine::tools::{ExtractTool, ListFrameworksTool, ParseAndExtractTool};
use uiverse_protocols::{Tool, ToolContext, ToolRegistry};

/// uiverse-extractor CLI.
#[derive(Parser)]
#[command(name = "uiverse-extractor")]
#[command(about = "Extract uiverse.io component source code as single-line Markdown")]
#[command(version)]
struct Cli {
    /// Run the browser with a visible window instead of headless
    #[arg(long, global = true)]
    headed: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract component code for a framework from a uiverse.io page
    Extract {
        /// One of HTML, React, Vue, Svelte, Lit (case-insensitive)
        framework: String,

        /// Component page link, e.g. https://uiverse.io/Na3ar-17/evil-dragon-24
        url: String,
    },

    /// Parse a "<framework> <link>" query and extract
    Query {
        /// Framework name and component link separated by a space
        query: String,
    },

    /// List supported frameworks
    Frameworks,

    /// Serve queries over stdio: one query per line in, one Markdown line out
    Serve,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = SessionConfig {
        headless: !cli.headed,
        ..SessionConfig::default()
    };

    let registry = build_registry(config)?;

    match cli.command {
        Commands::Extract { framework, url } => {
            let output = invoke(
                &registry,
                "extract_snippet",
                serde_json::json!({"framework": framework, "url": url}),
            )
            .await?;
            println!("{}", output);
        }
        Commands::Query { query } => {
            let output = invoke(
                &registry,
                "parse_and_extract",
                serde_json::json!({"query": query}),
            )
            .await?;
            println!("{}", output);
        }
        Commands::Frameworks => {
            let output =
                invoke(&registry, "list_supported_frameworks", serde_json::json!({})).await?;
            println!("{}", output);
        }
        Commands::Serve => {
            serve(&registry).await?;
        }
    }

    Ok(())
}

/// Register the tool surface.
fn build_registry(config: SessionConfig) -> anyhow::Result<ToolRegistry> {
    let registry = ToolRegistry::new();
    registry
        .register(Arc::new(ExtractTool::new(config.clone())))
        .context("registering extract_snippet")?;
    registry
        .register(Arc::new(ParseAndExtractTool::new(config)))
        .context("registering parse_and_extract")?;
    registry
        .register(Arc::new(ListFrameworksTool::new()))
        .context("registering list_supported_frameworks")?;
    Ok(registry)
}

/// Invoke a registered tool once and return its content.
async fn invoke(
    registry: &ToolRegistry,
    tool_id: &str,
    params: serde_json::Value,
) -> anyhow::Result<String> {
    let tool = registry
        .get(tool_id)
        .with_context(|| format!("tool {} not registered", tool_id))?;
    let ctx = ToolContext::new(tool_id);
    let result = tool.execute(params, ctx).await?;
    if !result.success {
        bail!(result.error.unwrap_or_else(|| "tool failed".to_string()));
    }
    Ok(result.content)
}

/// Line-oriented stdio transport: each stdin line is a query, each stdout
/// line is the single-line Markdown result (or an error line).
async fn serve(registry: &ToolRegistry) -> anyhow::Result<()> {
    let stdin = BufReader::new(tokio::io::stdin());
    let mut lines = stdin.lines();

    debug!("Serving queries over stdio");

    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }
        match invoke(
            registry,
            "parse_and_extract",
            serde_json::json!({"query": line}),
        )
        .await
        {
            Ok(output) => println!("{}", output),
            Err(e) => {
                error!("Query failed: {:#}", e);
                println!("error: {:#}", e);
            }
        }
    }

    Ok(())
}
