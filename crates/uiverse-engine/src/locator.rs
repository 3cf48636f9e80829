//! Playwright-style locators expressed over CDP.
//!
//! uiverse.io's copy affordances are addressed the way the site's UI is
//! built: CSS classes, ARIA roles, and visible text. A [`Locator`] compiles
//! to a JavaScript probe evaluated in the page, which keeps text filtering
//! and role lookup consistent with what a real user sees. Clicks resolve the
//! first visible match to its center point and dispatch a trusted mouse
//! event through the Input domain.

use std::time::Duration;

use serde_json::Value;

use crate::cdp::{CdpError, PageSession};

/// Poll interval for visibility/presence waits.
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// A way to address elements on the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Locator {
    /// Plain CSS selector.
    Css(String),
    /// CSS selector filtered to elements whose visible text contains `text`.
    CssWithText { selector: String, text: String },
    /// ARIA role (explicit or implicit) with an accessible-name match.
    Role { role: String, name: String },
    /// Leaf element whose collapsed text equals the given string.
    Text(String),
}

impl Locator {
    pub fn css(selector: impl Into<String>) -> Self {
        Locator::Css(selector.into())
    }

    pub fn css_with_text(selector: impl Into<String>, text: impl Into<String>) -> Self {
        Locator::CssWithText {
            selector: selector.into(),
            text: text.into(),
        }
    }

    pub fn role(role: impl Into<String>, name: impl Into<String>) -> Self {
        Locator::Role {
            role: role.into(),
            name: name.into(),
        }
    }

    pub fn text(text: impl Into<String>) -> Self {
        Locator::Text(text.into())
    }

    /// JSON descriptor consumed by the in-page probe helpers.
    fn descriptor(&self) -> Value {
        match self {
            Locator::Css(selector) => serde_json::json!({"css": selector}),
            Locator::CssWithText { selector, text } => {
                serde_json::json!({"css": selector, "text": text})
            }
            Locator::Role { role, name } => serde_json::json!({"role": role, "name": name}),
            Locator::Text(text) => serde_json::json!({"exact": text}),
        }
    }
}

/// Shared in-page helpers: text collapsing, visibility, and locator matching.
const PROBE_HELPERS: &str = r#"
const collapse = (s) => (s || '').replace(/\s+/g, ' ').trim();
const visible = (el) => !!(el.offsetWidth || el.offsetHeight || el.getClientRects().length);
const implicitRole = {
  button: "button, [role='button']",
  tab: "[role='tab']",
  menuitem: "[role='menuitem']",
  dialog: "dialog, [role='dialog']",
};
const accessibleName = (el) =>
  collapse(el.getAttribute('aria-label') || (el.innerText !== undefined ? el.innerText : el.textContent));
const find = (root, loc) => {
  if (loc.css !== undefined) {
    let matches = Array.from(root.querySelectorAll(loc.css));
    if (loc.text !== undefined) {
      matches = matches.filter((el) =>
        collapse(el.innerText !== undefined ? el.innerText : el.textContent).includes(loc.text));
    }
    return matches;
  }
  if (loc.role !== undefined) {
    const selector = implicitRole[loc.role] || "[role='" + loc.role + "']";
    return Array.from(root.querySelectorAll(selector)).filter((el) => {
      if (!loc.name) return true;
      const name = accessibleName(el);
      return name === loc.name || name.startsWith(loc.name + ' ');
    });
  }
  const leaves = [];
  for (const el of root.querySelectorAll('*')) {
    if (el.childElementCount === 0 && collapse(el.textContent) === loc.exact) leaves.push(el);
  }
  return leaves;
};
"#;

/// Build a probe expression: resolve the scope root (if any), collect
/// matches, then run `action` over `matches`.
fn probe_expression(scope: Option<&Locator>, target: &Locator, action: &str) -> String {
    let scope_desc = scope.map(|s| s.descriptor()).unwrap_or(Value::Null);
    format!(
        "(() => {{{helpers}\nconst scopeLoc = {scope};\nlet root = document;\n\
         if (scopeLoc) {{\n  const scopes = find(document, scopeLoc);\n  \
         if (scopes.length === 0) return null;\n  root = scopes[0];\n}}\n\
         const matches = find(root, {target});\n{action}\n}})()",
        helpers = PROBE_HELPERS,
        scope = scope_desc,
        target = target.descriptor(),
        action = action,
    )
}

/// Number of elements matching the locator (0 when the scope is absent).
pub async fn count(
    page: &PageSession,
    scope: Option<&Locator>,
    target: &Locator,
) -> Result<u64, CdpError> {
    let expr = probe_expression(scope, target, "return matches.length;");
    let value = page.evaluate(&expr).await?;
    Ok(value.as_u64().unwrap_or(0))
}

/// Rendered text of the first match, if any.
pub async fn inner_text(
    page: &PageSession,
    scope: Option<&Locator>,
    target: &Locator,
) -> Result<Option<String>, CdpError> {
    let expr = probe_expression(
        scope,
        target,
        "const el = matches[0];\n\
         if (!el) return null;\n\
         return el.innerText !== undefined ? el.innerText : el.textContent;",
    );
    let value = page.evaluate(&expr).await?;
    Ok(value.as_str().map(str::to_string))
}

/// Form value of the first match (textarea/input), if any.
pub async fn input_value(
    page: &PageSession,
    scope: Option<&Locator>,
    target: &Locator,
) -> Result<Option<String>, CdpError> {
    let expr = probe_expression(
        scope,
        target,
        "const el = matches[0];\n\
         if (!el) return null;\n\
         return el.value !== undefined ? el.value : null;",
    );
    let value = page.evaluate(&expr).await?;
    Ok(value.as_str().map(str::to_string))
}

/// Viewport center of the first visible match, if any.
pub async fn visible_center(
    page: &PageSession,
    scope: Option<&Locator>,
    target: &Locator,
) -> Result<Option<(f64, f64)>, CdpError> {
    let expr = probe_expression(
        scope,
        target,
        "const el = matches.find(visible);\n\
         if (!el) return null;\n\
         const r = el.getBoundingClientRect();\n\
         return { x: r.x + r.width / 2, y: r.y + r.height / 2 };",
    );
    let value = page.evaluate(&expr).await?;
    match (value["x"].as_f64(), value["y"].as_f64()) {
        (Some(x), Some(y)) => Ok(Some((x, y))),
        _ => Ok(None),
    }
}

/// Wait until the locator has a visible match, returning its center.
pub async fn wait_visible(
    page: &PageSession,
    scope: Option<&Locator>,
    target: &Locator,
    timeout: Duration,
) -> Result<(f64, f64), CdpError> {
    let start = std::time::Instant::now();
    loop {
        if let Some(center) = visible_center(page, scope, target).await? {
            return Ok(center);
        }
        if start.elapsed() > timeout {
            return Err(CdpError::Timeout(format!(
                "Waiting for {:?} to become visible timed out",
                target
            )));
        }
        tokio::time::sleep(POLL_INTERVAL).await;
    }
}

/// Wait until the locator matches at least one element.
pub async fn wait_present(
    page: &PageSession,
    scope: Option<&Locator>,
    target: &Locator,
    timeout: Duration,
) -> Result<(), CdpError> {
    let start = std::time::Instant::now();
    loop {
        if count(page, scope, target).await? > 0 {
            return Ok(());
        }
        if start.elapsed() > timeout {
            return Err(CdpError::Timeout(format!(
                "Waiting for {:?} to appear timed out",
                target
            )));
        }
        tokio::time::sleep(POLL_INTERVAL).await;
    }
}

/// Wait for the locator to become visible, then click its center.
pub async fn click(
    page: &PageSession,
    scope: Option<&Locator>,
    target: &Locator,
    timeout: Duration,
) -> Result<(), CdpError> {
    let (x, y) = wait_visible(page, scope, target, timeout).await?;
    page.click(x, y).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_css_descriptor() {
        let loc = Locator::css("button.copy-all.CSS");
        assert_eq!(
            loc.descriptor(),
            serde_json::json!({"css": "button.copy-all.CSS"})
        );
    }

    #[test]
    fn test_css_with_text_descriptor() {
        let loc = Locator::css_with_text("pre", "{");
        assert_eq!(loc.descriptor(), serde_json::json!({"css": "pre", "text": "{"}));
    }

    #[test]
    fn test_role_descriptor() {
        let loc = Locator::role("menuitem", "Svelte");
        assert_eq!(
            loc.descriptor(),
            serde_json::json!({"role": "menuitem", "name": "Svelte"})
        );
    }

    #[test]
    fn test_text_descriptor() {
        let loc = Locator::text("TailwindCSS");
        assert_eq!(loc.descriptor(), serde_json::json!({"exact": "TailwindCSS"}));
    }

    #[test]
    fn test_probe_expression_without_scope() {
        let expr = probe_expression(None, &Locator::css("textarea"), "return matches.length;");
        assert!(expr.contains("const scopeLoc = null;"));
        assert!(expr.contains(r#"{"css":"textarea"}"#));
        assert!(expr.contains("return matches.length;"));
        assert!(expr.contains("querySelectorAll"));
    }

    #[test]
    fn test_probe_expression_with_scope() {
        let scope = Locator::role("dialog", "");
        let expr = probe_expression(
            Some(&scope),
            &Locator::css("button.copy-all"),
            "return matches.length;",
        );
        assert!(expr.contains(r#""role":"dialog""#));
        assert!(expr.contains(r#""name":"""#));
        assert!(expr.contains(r#"{"css":"button.copy-all"}"#));
    }

    #[test]
    fn test_probe_expression_escapes_quotes() {
        let loc = Locator::css(r#"path[d="M12 18.178l4.62-1.256"]"#);
        let expr = probe_expression(None, &loc, "return matches.length;");
        // The selector's quotes must arrive JSON-escaped inside the JS literal.
        assert!(expr.contains(r#"path[d=\"M12 18.178l4.62-1.256\"]"#));
    }

    #[test]
    fn test_helpers_cover_roles_used_by_strategies() {
        for role in ["button", "tab", "menuitem", "dialog"] {
            assert!(PROBE_HELPERS.contains(role));
        }
    }
}
