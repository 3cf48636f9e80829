//! Framework extraction strategies.
//!
//! One strategy per supported framework, all sharing the same shape:
//! navigate, drive the copy affordance, poll the clipboard, fall back to DOM
//! text, emit fragments. The HTML+CSS page uses per-language tabs; the four
//! component frameworks share a menu-then-dialog flow.

mod dialog;
mod html_css;

use std::str::FromStr;
use std::time::Duration;

use tracing::info;

use crate::browser::{BrowsingSession, SessionConfig, SessionError};
use crate::error::ExtractError;
use crate::markdown::{self, Fragment, FragmentKind};

/// Clipboard polling budget for the tab-based HTML+CSS flow.
pub(crate) const TAB_CLIPBOARD_ATTEMPTS: u32 = 6;
pub(crate) const TAB_CLIPBOARD_INTERVAL: Duration = Duration::from_millis(250);

/// Clipboard polling budget for the dialog flow.
pub(crate) const DIALOG_CLIPBOARD_ATTEMPTS: u32 = 10;
pub(crate) const DIALOG_CLIPBOARD_INTERVAL: Duration = Duration::from_millis(200);

/// A supported target framework.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Framework {
    Html,
    React,
    Vue,
    Svelte,
    Lit,
}

impl Framework {
    /// All supported frameworks, in the order they are listed to callers.
    pub const ALL: [Framework; 5] = [
        Framework::Html,
        Framework::React,
        Framework::Vue,
        Framework::Svelte,
        Framework::Lit,
    ];

    /// Canonical display name; doubles as the menu-item label on the site.
    pub fn name(&self) -> &'static str {
        match self {
            Framework::Html => "HTML",
            Framework::React => "React",
            Framework::Vue => "Vue",
            Framework::Svelte => "Svelte",
            Framework::Lit => "Lit",
        }
    }

    /// Fragment kind for the code this framework's strategy produces.
    pub(crate) fn fragment_kind(&self) -> FragmentKind {
        match self {
            Framework::Html => FragmentKind::Html,
            Framework::React => FragmentKind::React,
            Framework::Vue => FragmentKind::Vue,
            Framework::Svelte => FragmentKind::Svelte,
            Framework::Lit => FragmentKind::Lit,
        }
    }
}

impl FromStr for Framework {
    type Err = ExtractError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "html" => Ok(Framework::Html),
            "react" => Ok(Framework::React),
            "vue" => Ok(Framework::Vue),
            "svelte" => Ok(Framework::Svelte),
            "lit" => Ok(Framework::Lit),
            _ => Err(ExtractError::UnsupportedFramework(s.to_string())),
        }
    }
}

impl std::fmt::Display for Framework {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Extract the given framework's code from a component page.
///
/// Owns the whole session lifecycle: the browser is launched for this call
/// alone and torn down on every exit path, including strategy errors.
pub async fn extract(
    framework: Framework,
    url: &str,
    config: &SessionConfig,
) -> Result<String, ExtractError> {
    info!(%framework, url, "Starting extraction");

    let session = BrowsingSession::open(config.clone()).await?;
    let result = run(framework, url, &session).await;
    session.close().await;

    let fragments = result?;
    Ok(markdown::render(&fragments))
}

async fn run(
    framework: Framework,
    url: &str,
    session: &BrowsingSession,
) -> Result<Vec<Fragment>, SessionError> {
    session.navigate(url).await?;

    match framework {
        Framework::Html => html_css::extract(session).await,
        other => dialog::extract(session, other).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_order() {
        let names: Vec<&str> = Framework::ALL.iter().map(|f| f.name()).collect();
        assert_eq!(names, vec!["HTML", "React", "Vue", "Svelte", "Lit"]);
    }

    #[test]
    fn test_from_str_case_insensitive() {
        assert_eq!("react".parse::<Framework>().unwrap(), Framework::React);
        assert_eq!("React".parse::<Framework>().unwrap(), Framework::React);
        assert_eq!("REACT".parse::<Framework>().unwrap(), Framework::React);
        assert_eq!("html".parse::<Framework>().unwrap(), Framework::Html);
        assert_eq!(" Svelte ".parse::<Framework>().unwrap(), Framework::Svelte);
    }

    #[test]
    fn test_from_str_unknown() {
        let err = "angular".parse::<Framework>().unwrap_err();
        assert!(matches!(err, ExtractError::UnsupportedFramework(name) if name == "angular"));
    }

    #[test]
    fn test_display_matches_name() {
        for framework in Framework::ALL {
            assert_eq!(framework.to_string(), framework.name());
        }
    }

    #[test]
    fn test_fragment_kinds() {
        assert_eq!(Framework::Html.fragment_kind(), FragmentKind::Html);
        assert_eq!(Framework::Lit.fragment_kind(), FragmentKind::Lit);
    }
}
