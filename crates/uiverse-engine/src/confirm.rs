//! Click-and-confirm protocol.
//!
//! A single click-and-wait is not reliable against the site's animations and
//! network jitter, so the copy trigger is driven by a bounded retry loop:
//! click, wait for the visible "copied" affordance, back off linearly on any
//! failure. Each attempt produces an explicit [`AttemptOutcome`] rather than
//! a swallowed exception, so the timing policy stays testable.

use std::time::Duration;

use tracing::debug;

use crate::cdp::{CdpError, PageSession};
use crate::locator::{self, Locator};

/// How long to wait for the confirmation affordance after a click.
pub const CONFIRM_TIMEOUT: Duration = Duration::from_millis(15_000);

/// Bounded retry with linear backoff.
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    /// Number of click attempts before giving up.
    pub attempts: u32,
    /// Backoff step; attempt `n` (zero-based) sleeps `step * (n + 1)`.
    pub backoff_step: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            attempts: 3,
            backoff_step: Duration::from_millis(500),
        }
    }
}

impl RetryPolicy {
    /// Delay to sleep after the given zero-based attempt fails.
    pub fn delay(&self, attempt: u32) -> Duration {
        self.backoff_step * (attempt + 1)
    }
}

/// What a single click-and-confirm attempt produced.
#[derive(Debug)]
pub enum AttemptOutcome {
    /// The confirmation affordance appeared.
    Confirmed,
    /// The trigger never became visible or the confirmation never appeared.
    TimedOut(String),
    /// The browser call itself failed.
    Failed(CdpError),
}

/// Click `trigger` and wait for an element matching `confirmation_selector`
/// whose text contains `confirmation_text`, retrying per `policy`.
///
/// Returns `false` after exhausting all attempts; never errors. A `false`
/// return means the clipboard content cannot be trusted and the caller must
/// fall back to DOM text.
pub async fn click_and_confirm(
    page: &PageSession,
    scope: Option<&Locator>,
    trigger: &Locator,
    confirmation_selector: &str,
    confirmation_text: &str,
    policy: &RetryPolicy,
    trigger_timeout: Duration,
) -> bool {
    let confirmation = Locator::css_with_text(confirmation_selector, confirmation_text);

    for attempt in 0..policy.attempts {
        match run_attempt(page, scope, trigger, &confirmation, trigger_timeout).await {
            AttemptOutcome::Confirmed => {
                debug!(attempt, "Copy confirmed");
                return true;
            }
            outcome => {
                debug!(attempt, ?outcome, "Copy attempt failed, backing off");
                tokio::time::sleep(policy.delay(attempt)).await;
            }
        }
    }

    false
}

async fn run_attempt(
    page: &PageSession,
    scope: Option<&Locator>,
    trigger: &Locator,
    confirmation: &Locator,
    trigger_timeout: Duration,
) -> AttemptOutcome {
    match locator::wait_visible(page, scope, trigger, trigger_timeout).await {
        Ok((x, y)) => {
            if let Err(e) = page.click(x, y).await {
                return AttemptOutcome::Failed(e);
            }
        }
        Err(CdpError::Timeout(msg)) => return AttemptOutcome::TimedOut(msg),
        Err(e) => return AttemptOutcome::Failed(e),
    }

    match locator::wait_present(page, scope, confirmation, CONFIRM_TIMEOUT).await {
        Ok(()) => AttemptOutcome::Confirmed,
        Err(CdpError::Timeout(msg)) => AttemptOutcome::TimedOut(msg),
        Err(e) => AttemptOutcome::Failed(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_policy() {
        let policy = RetryPolicy::default();
        assert_eq!(policy.attempts, 3);
        assert_eq!(policy.backoff_step, Duration::from_millis(500));
    }

    #[test]
    fn test_linear_backoff_schedule() {
        let policy = RetryPolicy::default();
        assert_eq!(policy.delay(0), Duration::from_millis(500));
        assert_eq!(policy.delay(1), Duration::from_millis(1000));
        assert_eq!(policy.delay(2), Duration::from_millis(1500));
    }

    #[test]
    fn test_worst_case_is_bounded() {
        let policy = RetryPolicy::default();
        let backoff_total: Duration = (0..policy.attempts).map(|a| policy.delay(a)).sum();
        let trigger_timeout = Duration::from_millis(20_000);
        let worst_case =
            (trigger_timeout + CONFIRM_TIMEOUT) * policy.attempts + backoff_total;
        assert_eq!(worst_case, Duration::from_millis(108_000));
    }
}
