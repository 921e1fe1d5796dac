use super::*;

// =============================================================
// ChatRequest
// =============================================================

#[test]
fn chat_request_omits_unset_optional_fields() {
    let req = ChatRequest {
        message: "wireless earbuds".to_owned(),
        thread_id: None,
        max_search_queries: None,
        max_search_loops: None,
    };
    let value = serde_json::to_value(&req).unwrap();
    assert_eq!(value, serde_json::json!({ "message": "wireless earbuds" }));
}

#[test]
fn chat_request_serializes_all_fields() {
    let req = ChatRequest {
        message: "budget keyboard".to_owned(),
        thread_id: Some("user-1-abc".to_owned()),
        max_search_queries: Some(3),
        max_search_loops: Some(2),
    };
    let value = serde_json::to_value(&req).unwrap();
    assert_eq!(
        value,
        serde_json::json!({
            "message": "budget keyboard",
            "thread_id": "user-1-abc",
            "max_search_queries": 3,
            "max_search_loops": 2,
        })
    );
}

// =============================================================
// ChatResponse
// =============================================================

#[test]
fn chat_response_decodes_full_payload() {
    let raw = r#"{
        "message": "Here are a few picks",
        "thread_id": "user-1-abc",
        "sources": [{"title": "Review", "url": "https://example.com/r", "short_url": "https://ex.co/r"}],
        "processing_time": 5.23,
        "search_queries_used": ["budget earbuds"],
        "is_clarification": false
    }"#;
    let resp: ChatResponse = serde_json::from_str(raw).unwrap();
    assert_eq!(resp.message, "Here are a few picks");
    assert_eq!(resp.sources.len(), 1);
    assert_eq!(resp.sources[0].short_url.as_deref(), Some("https://ex.co/r"));
    assert_eq!(resp.processing_time, Some(5.23));
    assert_eq!(resp.search_queries_used, vec!["budget earbuds".to_owned()]);
    assert!(!resp.is_clarification);
}

#[test]
fn chat_response_defaults_missing_collections() {
    let raw = r#"{"message": "Which budget?", "thread_id": "t"}"#;
    let resp: ChatResponse = serde_json::from_str(raw).unwrap();
    assert!(resp.sources.is_empty());
    assert!(resp.search_queries_used.is_empty());
    assert_eq!(resp.processing_time, None);
    assert!(!resp.is_clarification);
}

#[test]
fn chat_response_accepts_null_processing_time() {
    let raw = r#"{"message": "m", "thread_id": "t", "processing_time": null}"#;
    let resp: ChatResponse = serde_json::from_str(raw).unwrap();
    assert_eq!(resp.processing_time, None);
}

// =============================================================
// Source / ErrorResponse helpers
// =============================================================

#[test]
fn source_label_prefers_title() {
    let source = Source { title: "Review".to_owned(), url: "https://example.com".to_owned(), short_url: None };
    assert_eq!(source.label(), "Review");
}

#[test]
fn source_label_falls_back_to_url_for_blank_title() {
    let source = Source { title: "  ".to_owned(), url: "https://example.com".to_owned(), short_url: None };
    assert_eq!(source.label(), "https://example.com");
}

#[test]
fn error_response_reason_prefers_detail() {
    let body: ErrorResponse = serde_json::from_str(r#"{"error": "Invalid request", "detail": "bad input"}"#).unwrap();
    assert_eq!(body.reason().as_deref(), Some("bad input"));
}

#[test]
fn error_response_reason_falls_back_to_error() {
    let body: ErrorResponse = serde_json::from_str(r#"{"error": "Invalid request"}"#).unwrap();
    assert_eq!(body.reason().as_deref(), Some("Invalid request"));
}

#[test]
fn error_response_reason_none_when_empty() {
    let body: ErrorResponse = serde_json::from_str(r#"{"detail": ""}"#).unwrap();
    assert_eq!(body.reason(), None);
}

#[test]
fn error_response_reason_joins_validation_messages() {
    let raw = r#"{"detail": [
        {"loc": ["body", "message"], "msg": "String should have at least 1 character", "type": "string_too_short"},
        {"loc": ["body", "max_search_loops"], "msg": "Input should be less than or equal to 5", "type": "less_than_equal"}
    ]}"#;
    let body: ErrorResponse = serde_json::from_str(raw).unwrap();
    assert_eq!(
        body.reason().as_deref(),
        Some("String should have at least 1 character; Input should be less than or equal to 5")
    );
}

#[test]
fn error_response_reason_falls_back_to_error_for_unstructured_detail() {
    let body: ErrorResponse = serde_json::from_str(r#"{"error": "Invalid request", "detail": {"code": 7}}"#).unwrap();
    assert_eq!(body.reason().as_deref(), Some("Invalid request"));
}
