//! Clipboard polling.
//!
//! The site's copy action populates the clipboard some time after the click
//! resolves, and there is no completion signal for the clipboard write
//! itself. The only reliable read is a bounded poll: a read that throws
//! (permission race, focus loss) counts as an empty attempt, not a failure.

use std::time::Duration;

use tracing::debug;

use crate::cdp::PageSession;

/// Poll the clipboard until it holds non-blank text, up to `attempts` reads
/// spaced `interval` apart. Returns an empty string when the budget runs out;
/// never errors.
pub async fn read_nonempty(page: &PageSession, attempts: u32, interval: Duration) -> String {
    for attempt in 0..attempts {
        match page.evaluate("navigator.clipboard.readText()").await {
            Ok(value) => {
                if let Some(text) = value.as_str() {
                    if !text.trim().is_empty() {
                        return text.to_string();
                    }
                }
            }
            Err(e) => {
                debug!(attempt, "Clipboard read failed: {}", e);
            }
        }
        tokio::time::sleep(interval).await;
    }
    String::new()
}
