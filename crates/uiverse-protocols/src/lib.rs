//! # Uiverse Protocols
//!
//! Tool surface contracts for the uiverse extractor: the [`Tool`] trait, its
//! definition/result types, and the [`ToolRegistry`] the binary dispatches
//! from. Contains only the callable-tool interface - the extraction engine
//! itself lives in `uiverse-engine`.

pub mod error;
pub mod registry;
pub mod tool;

pub use error::ToolError;
pub use registry::ToolRegistry;
pub use tool::{Tool, ToolContext, ToolDefinition, ToolResult};
