//! Single-line Markdown assembly.
//!
//! Every extracted fragment is flattened to one line (callers embed results
//! in contexts that cannot carry raw newlines) and rendered into a fixed
//! section template.

/// What a fragment contains; drives the section label and fence language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FragmentKind {
    Html,
    Css,
    /// Combined markup+styles from the site's single-copy page template.
    HtmlCss,
    React,
    Vue,
    Svelte,
    Lit,
    /// Free-text description shown in the framework dialog.
    Description,
}

impl FragmentKind {
    /// Section heading label.
    pub fn label(&self) -> &'static str {
        match self {
            FragmentKind::Html => "HTML",
            FragmentKind::Css => "CSS",
            FragmentKind::HtmlCss => "HTML+CSS",
            FragmentKind::React => "React",
            FragmentKind::Vue => "Vue",
            FragmentKind::Svelte => "Svelte",
            FragmentKind::Lit => "Lit",
            FragmentKind::Description => "Description",
        }
    }

    /// Code-fence language; `None` renders without a fence.
    pub fn language(&self) -> Option<&'static str> {
        match self {
            FragmentKind::Html | FragmentKind::HtmlCss => Some("html"),
            FragmentKind::Css => Some("css"),
            FragmentKind::React => Some("tsx"),
            FragmentKind::Vue => Some("vue"),
            FragmentKind::Svelte => Some("svelte"),
            FragmentKind::Lit => Some("js"),
            FragmentKind::Description => None,
        }
    }
}

/// One extracted piece of content, produced by a strategy step.
#[derive(Debug, Clone)]
pub struct Fragment {
    pub kind: FragmentKind,
    pub text: String,
}

impl Fragment {
    pub fn new(kind: FragmentKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }
}

/// Replace carriage returns and newlines with single spaces.
pub fn one_line(text: &str) -> String {
    text.replace('\r', " ").replace('\n', " ")
}

/// Render fragments into the final single-line Markdown document, in the
/// order the strategy produced them, joined by single spaces.
pub fn render(fragments: &[Fragment]) -> String {
    fragments
        .iter()
        .map(render_fragment)
        .collect::<Vec<_>>()
        .join(" ")
}

fn render_fragment(fragment: &Fragment) -> String {
    let text = one_line(&fragment.text);
    match fragment.kind.language() {
        Some(lang) => format!("### {} ```{} {} ```", fragment.kind.label(), lang, text),
        None => format!("### {} {}", fragment.kind.label(), text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_line_strips_newlines() {
        assert_eq!(one_line("a\nb\r\nc"), "a b  c");
        assert_eq!(one_line(".btn {\n  color: red;\n}"), ".btn {   color: red; }");
    }

    #[test]
    fn test_one_line_idempotent() {
        let once = one_line("line1\nline2\r\n");
        assert_eq!(one_line(&once), once);
    }

    #[test]
    fn test_one_line_empty() {
        assert_eq!(one_line(""), "");
    }

    #[test]
    fn test_render_html_then_css() {
        let fragments = vec![
            Fragment::new(FragmentKind::Html, "<button>hi</button>"),
            Fragment::new(FragmentKind::Css, ".btn { color: red; }"),
        ];
        let out = render(&fragments);
        assert!(out.starts_with("### HTML ```html <button>hi</button> ```"));
        assert!(out.contains("### CSS ```css .btn { color: red; } ```"));
    }

    #[test]
    fn test_render_contains_no_newlines() {
        let fragments = vec![
            Fragment::new(FragmentKind::React, "const A = () => {\n  return null;\n};"),
            Fragment::new(FragmentKind::Description, "A button.\nWith styles."),
        ];
        let out = render(&fragments);
        assert!(!out.contains('\n'));
        assert!(!out.contains('\r'));
    }

    #[test]
    fn test_render_description_without_fence() {
        let out = render(&[Fragment::new(FragmentKind::Description, "Glowing button")]);
        assert_eq!(out, "### Description Glowing button");
    }

    #[test]
    fn test_render_empty_fragment_keeps_section() {
        let out = render(&[Fragment::new(FragmentKind::Svelte, "")]);
        assert_eq!(out, "### Svelte ```svelte  ```");
    }

    #[test]
    fn test_render_preserves_strategy_order() {
        let fragments = vec![
            Fragment::new(FragmentKind::Description, "desc"),
            Fragment::new(FragmentKind::React, "code"),
        ];
        let out = render(&fragments);
        let desc_pos = out.find("### Description").unwrap();
        let react_pos = out.find("### React").unwrap();
        assert!(desc_pos < react_pos);
    }

    #[test]
    fn test_languages() {
        assert_eq!(FragmentKind::Html.language(), Some("html"));
        assert_eq!(FragmentKind::HtmlCss.language(), Some("html"));
        assert_eq!(FragmentKind::Css.language(), Some("css"));
        assert_eq!(FragmentKind::React.language(), Some("tsx"));
        assert_eq!(FragmentKind::Vue.language(), Some("vue"));
        assert_eq!(FragmentKind::Svelte.language(), Some("svelte"));
        assert_eq!(FragmentKind::Lit.language(), Some("js"));
        assert_eq!(FragmentKind::Description.language(), None);
    }
}
