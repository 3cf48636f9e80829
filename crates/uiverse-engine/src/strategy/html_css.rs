//! HTML+CSS extraction: the tab-based page with CSS/HTML copy buttons.
//!
//! A subset of components uses a single-copy page template instead of the
//! CSS/HTML tabs; it is recognized by the co-presence of "HTML" and
//! "TailwindCSS" labels plus the HTML-logo SVG, and handled by clicking the
//! generic copy button directly before falling back to the tab flow.

use std::time::Duration;

use tracing::debug;

use crate::browser::{BrowsingSession, SessionError};
use crate::clipboard;
use crate::confirm::{self, RetryPolicy};
use crate::fallback;
use crate::locator::{self, Locator};
use crate::markdown::{Fragment, FragmentKind};

use super::{TAB_CLIPBOARD_ATTEMPTS, TAB_CLIPBOARD_INTERVAL};

/// Path data of the HTML-logo icon on the single-copy page template.
const HTML_ICON_PATH: &str = "M12 18.178l4.62-1.256.623-6.778H9.026L8.822 7.89h8.626l.227-2.211H6.325l.636 6.678h7.82l-.261 2.866-2.52.667-2.52-.667-.158-1.844h-2.27l.329 3.544L12 18.178zM3 2h18l-1.623 18L12 22l-7.377-2L3 2z";

/// Visibility bound for the generic copy button on the single-copy template.
const DIRECT_COPY_TIMEOUT: Duration = Duration::from_millis(5_000);

/// Settle time after the direct copy click; this template has no "copied"
/// affordance to wait on.
const DIRECT_COPY_SETTLE: Duration = Duration::from_millis(1_000);

pub(super) async fn extract(session: &BrowsingSession) -> Result<Vec<Fragment>, SessionError> {
    let page = session.page();
    let timeout = session.default_timeout();
    let policy = RetryPolicy::default();

    if detect_single_copy_layout(session).await {
        debug!("Single-copy page template detected");
        if click_copy_button_direct(session).await {
            let combined =
                clipboard::read_nonempty(page, TAB_CLIPBOARD_ATTEMPTS, TAB_CLIPBOARD_INTERVAL)
                    .await;
            if !combined.trim().is_empty() {
                return Ok(vec![Fragment::new(FragmentKind::HtmlCss, combined)]);
            }
        }
        debug!("Direct copy failed, falling back to the tab flow");
    }

    let css_ok = confirm::click_and_confirm(
        page,
        None,
        &Locator::css("button.copy-all.CSS"),
        "button.copy-all.CSS .copy-all__text",
        "Copied",
        &policy,
        timeout,
    )
    .await;
    let mut css_code = if css_ok {
        clipboard::read_nonempty(page, TAB_CLIPBOARD_ATTEMPTS, TAB_CLIPBOARD_INTERVAL).await
    } else {
        String::new()
    };

    // Switch to the HTML tab; if it never shows up the fallback locators
    // below still get a chance.
    if let Err(e) = locator::click(page, None, &Locator::role("tab", "HTML"), timeout).await {
        debug!("HTML tab not clickable: {}", e);
    }

    let html_ok = confirm::click_and_confirm(
        page,
        None,
        &Locator::css("button.copy-all.HTML"),
        "button.copy-all.HTML .copy-all__text",
        "Copied",
        &policy,
        timeout,
    )
    .await;
    let mut html_code = if html_ok {
        clipboard::read_nonempty(page, TAB_CLIPBOARD_ATTEMPTS, TAB_CLIPBOARD_INTERVAL).await
    } else {
        String::new()
    };

    if css_code.trim().is_empty() {
        css_code = fallback::first_matching_text(
            page,
            None,
            &[
                Locator::css(r#"[data-language="css"]"#),
                Locator::css_with_text("pre", "{"),
                Locator::css_with_text("code", "{"),
            ],
        )
        .await;
    }

    if html_code.trim().is_empty() {
        html_code = fallback::first_matching_text(
            page,
            None,
            &[
                Locator::css(r#"[data-language="html"]"#),
                Locator::css_with_text("pre", "<"),
                Locator::css_with_text("code", "<"),
                Locator::css("textarea"),
            ],
        )
        .await;
    }

    Ok(vec![
        Fragment::new(FragmentKind::Html, html_code),
        Fragment::new(FragmentKind::Css, css_code),
    ])
}

/// Probe for the single-copy page template: "HTML" and "TailwindCSS" labels
/// plus the HTML-logo icon, all present at once.
async fn detect_single_copy_layout(session: &BrowsingSession) -> bool {
    let page = session.page();
    let icon = Locator::css(format!(r#"path[d="{}"]"#, HTML_ICON_PATH));

    for probe in [Locator::text("HTML"), Locator::text("TailwindCSS"), icon] {
        match locator::count(page, None, &probe).await {
            Ok(n) if n > 0 => continue,
            Ok(_) => return false,
            Err(e) => {
                debug!("Single-copy probe failed: {}", e);
                return false;
            }
        }
    }
    true
}

/// Try the generic copy-button selectors one by one; the first one that is
/// present and clickable wins. Returns whether a click landed.
async fn click_copy_button_direct(session: &BrowsingSession) -> bool {
    let page = session.page();
    let candidates = [
        Locator::css_with_text("button", "copy"),
        Locator::css_with_text("button", "Copy"),
        Locator::css_with_text("[role='button']", "copy"),
        Locator::css_with_text("[role='button']", "Copy"),
        Locator::css(".copy-btn"),
        Locator::css(".copy-button"),
    ];

    for candidate in &candidates {
        match locator::count(page, None, candidate).await {
            Ok(0) => continue,
            Ok(_) => {
                if let Err(e) = locator::click(page, None, candidate, DIRECT_COPY_TIMEOUT).await {
                    debug!(?candidate, "Direct copy click failed: {}", e);
                    continue;
                }
                tokio::time::sleep(DIRECT_COPY_SETTLE).await;
                return true;
            }
            Err(e) => {
                debug!(?candidate, "Direct copy probe failed: {}", e);
                continue;
            }
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icon_path_is_the_html_logo() {
        assert!(HTML_ICON_PATH.starts_with("M12 18.178"));
        assert!(HTML_ICON_PATH.ends_with("L3 2z"));
    }

    #[test]
    fn test_direct_copy_bounds() {
        assert_eq!(DIRECT_COPY_TIMEOUT, Duration::from_millis(5_000));
        assert_eq!(DIRECT_COPY_SETTLE, Duration::from_millis(1_000));
    }
}
