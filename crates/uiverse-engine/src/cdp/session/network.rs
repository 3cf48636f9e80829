//! Identity, viewport, and network-filter configuration for a page session.

use std::sync::Arc;

use serde_json::{Value, json};
use tracing::{debug, trace, warn};

use crate::cdp::error::CdpError;
use crate::cdp::protocol::ResourceType;

use super::core::PageSession;

impl PageSession {
    /// Override the user agent string for this page.
    pub async fn set_user_agent(&self, user_agent: &str) -> Result<(), CdpError> {
        self.call(
            "Emulation.setUserAgentOverride",
            Some(json!({"userAgent": user_agent})),
        )
        .await?;
        Ok(())
    }

    /// Override the viewport size for this page.
    pub async fn set_viewport(&self, width: u32, height: u32) -> Result<(), CdpError> {
        self.call(
            "Emulation.setDeviceMetricsOverride",
            Some(json!({
                "width": width,
                "height": height,
                "deviceScaleFactor": 1.0,
                "mobile": false,
            })),
        )
        .await?;
        Ok(())
    }

    /// Abort all requests of the given resource types.
    ///
    /// Enables the Fetch domain with one pattern per blocked type, so only
    /// matching requests ever pause; a spawned pump answers each paused
    /// request with `Fetch.failRequest`. The pump drains this session's event
    /// channel and ends when the CDP connection closes.
    pub async fn block_resource_types(
        self: Arc<Self>,
        types: &[ResourceType],
    ) -> Result<(), CdpError> {
        let patterns: Vec<Value> = types
            .iter()
            .map(|t| json!({"urlPattern": "*", "resourceType": t}))
            .collect();

        self.call("Fetch.enable", Some(json!({"patterns": patterns})))
            .await?;

        let mut event_rx = self
            .event_rx
            .lock()
            .take()
            .ok_or_else(|| CdpError::InvalidResponse("Event channel already taken".to_string()))?;

        let session = Arc::clone(&self);
        tokio::spawn(async move {
            while let Some(event) = event_rx.recv().await {
                if event.method.as_deref() != Some("Fetch.requestPaused") {
                    continue;
                }
                let Some(request_id) = event
                    .params
                    .as_ref()
                    .and_then(|p| p["requestId"].as_str())
                    .map(str::to_string)
                else {
                    continue;
                };
                trace!("Aborting blocked request {}", request_id);
                if let Err(e) = session
                    .call(
                        "Fetch.failRequest",
                        Some(json!({
                            "requestId": request_id,
                            "errorReason": "BlockedByClient",
                        })),
                    )
                    .await
                {
                    warn!("Failed to abort request: {}", e);
                }
            }
            trace!("Resource filter pump finished");
        });

        debug!("Resource filter installed: {:?}", types);
        Ok(())
    }
}
