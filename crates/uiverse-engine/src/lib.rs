//! uiverse.io extraction engine.
//!
//! Drives a real headless Chrome instance over the Chrome DevTools Protocol
//! (CDP), triggers uiverse.io's own copy-to-clipboard UI, and reads the result
//! back from the browser clipboard, falling back to visible DOM text when the
//! clipboard path yields nothing. Pure Rust, no Node.js sidecar.
//!
//! ```text
//! ┌──────────────────┐    WebSocket     ┌──────────────────┐
//! │  uiverse-engine  │ ◄──────────────► │ headless Chrome  │
//! │   (this crate)   │       CDP        │   (per call)     │
//! └──────────────────┘                  └──────────────────┘
//! ```
//!
//! ## Isolation
//!
//! Every extraction call launches its own Chrome process with a fresh
//! throwaway profile on a free debugging port, and tears it down on every
//! exit path. Nothing is shared or cached across calls, so concurrent
//! extractions cannot contaminate each other's clipboard or cookie state.
//!
//! ## Extraction flow
//!
//! Navigate → locate the copy control → (open framework menu → select
//! variant)? → click-and-confirm the copy → poll the clipboard → fall back to
//! DOM text if the clipboard stays empty → render single-line Markdown.
//! Flaky-UI failures degrade to empty fragments; only launch and navigation
//! failures surface as errors.

pub mod browser;
pub mod cdp;
pub mod clipboard;
pub mod confirm;
pub mod dispatch;
mod error;
pub mod fallback;
pub mod locator;
pub mod markdown;
pub mod strategy;
pub mod tools;

pub use browser::{BrowsingSession, SessionConfig, SessionError};
pub use cdp::{CdpClient, CdpError, PageSession};
pub use error::ExtractError;
pub use locator::Locator;
pub use markdown::{Fragment, FragmentKind};
pub use strategy::{Framework, extract};
