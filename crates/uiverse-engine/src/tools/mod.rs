//! Callable tools exposed to the dispatch layer.

mod extract;
mod frameworks;

pub use extract::*;
pub use frameworks::*;

use uiverse_protocols::ToolError;

use crate::error::ExtractError;

/// Map engine errors to the tool error taxonomy: input problems are
/// caller-fixable parameters, session failures are execution failures.
pub(crate) fn map_extract_error(error: ExtractError) -> ToolError {
    match error {
        ExtractError::Session(e) => ToolError::ExecutionFailed(e.to_string()),
        other => ToolError::InvalidParameters(other.to_string()),
    }
}
