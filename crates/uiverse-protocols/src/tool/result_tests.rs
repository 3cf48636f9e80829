use super::*;

#[test]
fn test_result_success() {
    let result = ToolResult::success("done");
    assert!(result.success);
    assert_eq!(result.content, "done");
    assert!(result.error.is_none());
}

#[test]
fn test_result_error() {
    let result = ToolResult::error("boom");
    assert!(!result.success);
    assert!(result.content.is_empty());
    assert_eq!(result.error.as_deref(), Some("boom"));
}

#[test]
fn test_result_serialization_skips_missing_error() {
    let result = ToolResult::success("ok");
    let json = serde_json::to_value(&result).unwrap();
    assert!(json.get("error").is_none());
    assert_eq!(json["success"], true);
}

#[test]
fn test_result_roundtrip() {
    let result = ToolResult::error("nope");
    let json = serde_json::to_string(&result).unwrap();
    let back: ToolResult = serde_json::from_str(&json).unwrap();
    assert!(!back.success);
    assert_eq!(back.error.as_deref(), Some("nope"));
}
