//! DOM-text fallback extraction.
//!
//! Used only when the clipboard path yields nothing: probe an ordered list
//! of candidate locators and take the first non-empty visible text. This is
//! the terminal fallback; callers do not retry beyond it.

use tracing::debug;

use crate::cdp::PageSession;
use crate::locator::{self, Locator};

/// Return the first candidate's rendered text, skipping locators that error
/// during matching or yield only blank text. Empty string when every
/// candidate comes up dry.
pub async fn first_matching_text(
    page: &PageSession,
    scope: Option<&Locator>,
    candidates: &[Locator],
) -> String {
    for candidate in candidates {
        match locator::count(page, scope, candidate).await {
            Ok(0) => continue,
            Ok(_) => match locator::inner_text(page, scope, candidate).await {
                Ok(Some(text)) if !text.trim().is_empty() => return text,
                Ok(_) => continue,
                Err(e) => {
                    debug!(?candidate, "Fallback text read failed: {}", e);
                    continue;
                }
            },
            Err(e) => {
                debug!(?candidate, "Fallback locator failed: {}", e);
                continue;
            }
        }
    }
    String::new()
}
