use super::*;
use serde_json::json;

#[test]
fn test_request_serialization() {
    let request = CdpRequest {
        id: 7,
        method: "Page.navigate".to_string(),
        params: Some(json!({"url": "https://uiverse.io/"})),
        session_id: Some("SESSION".to_string()),
    };
    let value = serde_json::to_value(&request).unwrap();
    assert_eq!(value["id"], 7);
    assert_eq!(value["method"], "Page.navigate");
    assert_eq!(value["sessionId"], "SESSION");
    assert_eq!(value["params"]["url"], "https://uiverse.io/");
}

#[test]
fn test_request_serialization_skips_missing_fields() {
    let request = CdpRequest {
        id: 1,
        method: "Browser.close".to_string(),
        params: None,
        session_id: None,
    };
    let value = serde_json::to_value(&request).unwrap();
    assert!(value.get("params").is_none());
    assert!(value.get("sessionId").is_none());
}

#[test]
fn test_response_deserialization_result() {
    let raw = r#"{"id":3,"result":{"frameId":"F1"}}"#;
    let response: CdpResponse = serde_json::from_str(raw).unwrap();
    assert_eq!(response.id, Some(3));
    assert!(response.error.is_none());
    assert_eq!(response.result.unwrap()["frameId"], "F1");
}

#[test]
fn test_response_deserialization_error() {
    let raw = r#"{"id":4,"error":{"code":-32000,"message":"Not allowed"}}"#;
    let response: CdpResponse = serde_json::from_str(raw).unwrap();
    let error = response.error.unwrap();
    assert_eq!(error.code, -32000);
    assert_eq!(error.message, "Not allowed");
}

#[test]
fn test_response_deserialization_event() {
    let raw = r#"{"method":"Fetch.requestPaused","params":{"requestId":"R1"},"sessionId":"S1"}"#;
    let response: CdpResponse = serde_json::from_str(raw).unwrap();
    assert!(response.id.is_none());
    assert_eq!(response.method.as_deref(), Some("Fetch.requestPaused"));
    assert_eq!(response.session_id.as_deref(), Some("S1"));
    assert_eq!(response.params.unwrap()["requestId"], "R1");
}

#[test]
fn test_browser_version_deserialization() {
    let raw = r#"{
        "Browser": "Chrome/120.0.0.0",
        "Protocol-Version": "1.3",
        "User-Agent": "Mozilla/5.0",
        "webSocketDebuggerUrl": "ws://127.0.0.1:9222/devtools/browser/abc"
    }"#;
    let version: BrowserVersion = serde_json::from_str(raw).unwrap();
    assert_eq!(version.browser, "Chrome/120.0.0.0");
    assert!(version.web_socket_debugger_url.starts_with("ws://"));
}

#[test]
fn test_page_info_deserialization() {
    let raw = r#"{
        "id": "T1",
        "type": "page",
        "title": "uiverse",
        "url": "about:blank",
        "webSocketDebuggerUrl": "ws://127.0.0.1:9222/devtools/page/T1"
    }"#;
    let info: PageInfo = serde_json::from_str(raw).unwrap();
    assert_eq!(info.id, "T1");
    assert_eq!(info.page_type, "page");
}

#[test]
fn test_mouse_enums_serialize_to_cdp_names() {
    assert_eq!(serde_json::to_value(MouseButton::Left).unwrap(), "left");
    assert_eq!(
        serde_json::to_value(MouseEventType::MousePressed).unwrap(),
        "mousePressed"
    );
}

#[test]
fn test_resource_type_serializes_to_cdp_names() {
    assert_eq!(serde_json::to_value(ResourceType::Image).unwrap(), "Image");
    assert_eq!(serde_json::to_value(ResourceType::Media).unwrap(), "Media");
    assert_eq!(serde_json::to_value(ResourceType::Font).unwrap(), "Font");
}
