use pulsebase_errors::prelude::*;

#[test]
fn builder_carries_code_messages_and_meta() {
    let err = ErrorBuilder::new(codes::NET_SERVER_STATUS)
        .user_msg("Server rejected the request.")
        .dev_msg("status 503")
        .retry(classify_status(503))
        .meta(serde_json::json!({ "status": 503, "content": "busy" }))
        .build();

    assert_eq!(err.code, codes::NET_SERVER_STATUS);
    assert_eq!(err.code.as_str(), "net.server_status");
    assert_eq!(err.retry, RetryClass::Transient);
    assert_eq!(err.meta_u64("status"), Some(503));
    assert_eq!(err.meta_str("content"), Some("busy"));
    assert!(err.to_string().contains("net.server_status"));
    assert!(err.to_string().contains("status 503"));
}

#[test]
fn status_classification() {
    assert_eq!(classify_status(500), RetryClass::Transient);
    assert_eq!(classify_status(502), RetryClass::Transient);
    assert_eq!(classify_status(429), RetryClass::Transient);
    assert_eq!(classify_status(400), RetryClass::Permanent);
    assert_eq!(classify_status(404), RetryClass::Permanent);
    assert_eq!(classify_status(401), RetryClass::Permanent);
}

#[test]
fn builder_defaults_are_permanent_and_bare() {
    let err = ErrorBuilder::new(codes::SCHEMA_VALIDATION)
        .user_msg("Invalid input.")
        .build();
    assert_eq!(err.retry, RetryClass::Permanent);
    assert!(err.message_dev.is_none());
    assert!(err.meta.is_none());
}
