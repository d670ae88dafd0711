//! Tests for the error context extension

use blogctx_domain::Error;
use blogctx_infrastructure::error_ext::ErrorContext;

fn io_failure() -> std::result::Result<(), std::io::Error> {
    Err(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"))
}

#[test]
fn test_context_wraps_as_infrastructure() {
    let err = io_failure().context("Reading store").unwrap_err();

    assert!(matches!(err, Error::Infrastructure { .. }));
    assert_eq!(err.to_string(), "Infrastructure error: Reading store: gone");
}

#[test]
fn test_with_context_is_lazy() {
    let mut called = false;
    let ok: std::result::Result<u8, std::io::Error> = Ok(1);

    let value = ok
        .with_context(|| {
            called = true;
            "unused"
        })
        .unwrap();

    assert_eq!(value, 1);
    assert!(!called);
}

#[test]
fn test_typed_contexts_pick_variant() {
    assert!(matches!(
        io_failure().io_context("write").unwrap_err(),
        Error::Io { .. }
    ));

    let err = io_failure().config_context("parse").unwrap_err();
    assert!(matches!(err, Error::Configuration { .. }));
    assert!(std::error::Error::source(&err).is_some());
}
