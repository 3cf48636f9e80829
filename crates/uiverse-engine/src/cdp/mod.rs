//! Chrome DevTools Protocol client.

mod client;
mod error;
mod protocol;
mod session;

pub use client::CdpClient;
pub use error::CdpError;
pub use protocol::{BrowserVersion, CdpRequest, CdpResponse, PageInfo, ResourceType};
pub use session::PageSession;
