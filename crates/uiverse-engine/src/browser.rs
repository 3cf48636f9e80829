//! Per-call browser session lifecycle.
//!
//! Each extraction call gets its own Chrome process with a throwaway profile
//! on a free debugging port. No pooling, no reuse: calls are infrequent, and
//! a fresh browser guarantees clipboard and cookie state cannot leak between
//! calls. `close` runs on every exit path; `Drop` kills the child as a
//! backstop if a panic skipped it.

use std::path::PathBuf;
use std::process::Stdio;
use std::sync::Arc;
use std::time::Duration;

use tempfile::TempDir;
use thiserror::Error;
use tokio::process::{Child, Command};
use tracing::{debug, info};

use crate::cdp::{CdpClient, CdpError, PageSession, ResourceType};

/// Origin granted clipboard access in every session.
const SITE_ORIGIN: &str = "https://uiverse.io";

/// Session errors. Anything here is fatal for the extraction call; flaky-UI
/// failures are absorbed further up and never reach this type.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Chrome not found. Please install Google Chrome or Chromium.")]
    ChromeNotFound,

    #[error("Failed to launch Chrome: {0}")]
    LaunchFailed(String),

    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    #[error("Navigation failed: {0}")]
    NavigationFailed(String),

    #[error(transparent)]
    Cdp(#[from] CdpError),
}

/// Fixed per-call browser configuration.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// User agent presented to the site.
    pub user_agent: String,
    /// Viewport width.
    pub viewport_width: u32,
    /// Viewport height.
    pub viewport_height: u32,
    /// Default timeout applied to page waits unless overridden.
    pub default_timeout: Duration,
    /// Whether to run Chrome in headless mode.
    pub headless: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
                         AppleWebKit/537.36 (KHTML, like Gecko) \
                         Chrome/120.0.0.0 Safari/537.36"
                .to_string(),
            viewport_width: 1280,
            viewport_height: 900,
            default_timeout: Duration::from_millis(20_000),
            headless: true,
        }
    }
}

/// A browsing session owned by a single extraction call: one Chrome process,
/// one CDP connection, one page.
pub struct BrowsingSession {
    chrome: Child,
    /// Throwaway profile; removed from disk when the session is dropped.
    _profile_dir: TempDir,
    client: CdpClient,
    page: Arc<PageSession>,
    config: SessionConfig,
}

impl BrowsingSession {
    /// Launch a browser and prepare a configured page.
    ///
    /// Grants clipboard permissions, overrides the user agent and viewport,
    /// and installs the resource filter that aborts image/media/font
    /// requests.
    pub async fn open(config: SessionConfig) -> Result<Self, SessionError> {
        let chrome_path = find_chrome().ok_or(SessionError::ChromeNotFound)?;

        let profile_dir = TempDir::with_prefix("uiverse-profile-")
            .map_err(|e| SessionError::LaunchFailed(format!("profile dir: {}", e)))?;
        let debug_port = free_port().await?;

        let mut cmd = Command::new(&chrome_path);
        cmd.arg(format!("--remote-debugging-port={}", debug_port))
            .arg(format!("--user-data-dir={}", profile_dir.path().display()))
            .arg("--no-first-run")
            .arg("--no-default-browser-check")
            .arg("--disable-background-networking")
            .arg("--disable-extensions")
            .arg("--disable-sync")
            .arg("--disable-translate")
            .arg("--metrics-recording-only")
            .arg(format!(
                "--window-size={},{}",
                config.viewport_width, config.viewport_height
            ))
            .arg("about:blank")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .kill_on_drop(true);

        if config.headless {
            cmd.arg("--headless=new");
        }

        let chrome = cmd
            .spawn()
            .map_err(|e| SessionError::LaunchFailed(e.to_string()))?;

        info!(port = debug_port, "Launched Chrome for extraction session");

        let endpoint = format!("http://127.0.0.1:{}", debug_port);
        wait_for_ready(&endpoint, Duration::from_secs(15)).await?;

        let client = CdpClient::connect(&endpoint)
            .await
            .map_err(|e| SessionError::ConnectionFailed(e.to_string()))?;

        client.grant_clipboard_permissions(SITE_ORIGIN).await?;

        let page = Arc::new(client.new_page(None).await?);
        page.set_user_agent(&config.user_agent).await?;
        page.set_viewport(config.viewport_width, config.viewport_height)
            .await?;
        Arc::clone(&page)
            .block_resource_types(&[ResourceType::Image, ResourceType::Media, ResourceType::Font])
            .await?;

        debug!(port = debug_port, "Browser session ready");

        Ok(Self {
            chrome,
            _profile_dir: profile_dir,
            client,
            page,
            config,
        })
    }

    /// The page this session drives.
    pub fn page(&self) -> &Arc<PageSession> {
        &self.page
    }

    /// Default timeout applied to page waits.
    pub fn default_timeout(&self) -> Duration {
        self.config.default_timeout
    }

    /// Navigate the session's page and wait for it to load.
    pub async fn navigate(&self, url: &str) -> Result<(), SessionError> {
        self.page
            .navigate(url, self.config.default_timeout)
            .await
            .map_err(|e| match e {
                CdpError::NavigationFailed(msg) => SessionError::NavigationFailed(msg),
                other => SessionError::Cdp(other),
            })
    }

    /// Tear the session down. Never fails; callers invoke this on every exit
    /// path, success or not.
    pub async fn close(mut self) {
        if let Err(e) = self.client.close_page(self.page.target_id()).await {
            debug!("Target close failed (may already be gone): {}", e);
        }
        if let Err(e) = self.client.close_browser().await {
            debug!("Browser.close failed (may already be gone): {}", e);
        }
        let _ = self.chrome.kill().await;
        debug!("Browser session closed");
    }
}

impl Drop for BrowsingSession {
    fn drop(&mut self) {
        // Backstop for the panic path; `close` already killed the child on
        // normal paths.
        let _ = self.chrome.start_kill();
    }
}

/// Find a Chrome/Chromium executable on this system.
pub fn find_chrome() -> Option<PathBuf> {
    #[cfg(target_os = "macos")]
    {
        let paths = [
            "/Applications/Google Chrome.app/Contents/MacOS/Google Chrome",
            "/Applications/Chromium.app/Contents/MacOS/Chromium",
            "/Applications/Microsoft Edge.app/Contents/MacOS/Microsoft Edge",
        ];
        for path in &paths {
            let p = PathBuf::from(path);
            if p.exists() {
                return Some(p);
            }
        }
    }

    #[cfg(target_os = "linux")]
    {
        let paths = [
            "/usr/bin/google-chrome",
            "/usr/bin/google-chrome-stable",
            "/usr/bin/chromium",
            "/usr/bin/chromium-browser",
            "/snap/bin/chromium",
        ];
        for path in &paths {
            let p = PathBuf::from(path);
            if p.exists() {
                return Some(p);
            }
        }
    }

    #[cfg(target_os = "windows")]
    {
        let paths = [
            r"C:\Program Files\Google\Chrome\Application\chrome.exe",
            r"C:\Program Files (x86)\Google\Chrome\Application\chrome.exe",
        ];
        for path in &paths {
            let p = PathBuf::from(path);
            if p.exists() {
                return Some(p);
            }
        }
    }

    None
}

/// Pick a free TCP port for the debugging endpoint.
async fn free_port() -> Result<u16, SessionError> {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .map_err(|e| SessionError::LaunchFailed(format!("port probe: {}", e)))?;
    let port = listener
        .local_addr()
        .map_err(|e| SessionError::LaunchFailed(format!("port probe: {}", e)))?
        .port();
    drop(listener);
    Ok(port)
}

/// Poll the debugging endpoint until Chrome answers.
async fn wait_for_ready(endpoint: &str, timeout: Duration) -> Result<(), SessionError> {
    let url = format!("{}/json/version", endpoint);
    let start = std::time::Instant::now();

    loop {
        if reqwest::get(&url).await.is_ok() {
            return Ok(());
        }
        if start.elapsed() > timeout {
            return Err(SessionError::LaunchFailed(format!(
                "Chrome did not become ready within {:?}",
                timeout
            )));
        }
        tokio::time::sleep(Duration::from_millis(200)).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default_identity() {
        let config = SessionConfig::default();
        assert!(config.user_agent.contains("Chrome/120.0.0.0"));
        assert!(config.user_agent.contains("Windows NT 10.0"));
        assert_eq!(config.viewport_width, 1280);
        assert_eq!(config.viewport_height, 900);
    }

    #[test]
    fn test_config_default_timeout() {
        let config = SessionConfig::default();
        assert_eq!(config.default_timeout, Duration::from_millis(20_000));
        assert!(config.headless);
    }

    #[tokio::test]
    async fn test_free_port_is_nonzero() {
        let port = free_port().await.unwrap();
        assert!(port > 0);
    }
}
