//! Tests for domain error formatting

use blogctx_domain::Error;

#[test]
fn test_error_messages_carry_category() {
    assert_eq!(
        Error::embedding("quota").to_string(),
        "Embedding provider error: quota"
    );
    assert_eq!(Error::store("offline").to_string(), "Store error: offline");
    assert_eq!(
        Error::invalid_argument("empty message").to_string(),
        "Invalid argument: empty message"
    );
}

#[test]
fn test_json_error_converts() {
    let parse = serde_json::from_str::<serde_json::Value>("{not json");
    let err: Error = parse.unwrap_err().into();
    assert!(matches!(err, Error::Json { .. }));
}

#[test]
fn test_io_error_keeps_source() {
    let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
    let err = Error::io_with_source("Failed to write posts.json", io);

    assert_eq!(err.to_string(), "I/O error: Failed to write posts.json");
    assert!(std::error::Error::source(&err).is_some());
}
