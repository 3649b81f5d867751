//! Error Extension Tests

use uicb_domain::Error;
use uicb_infrastructure::error_ext::ErrorContext;

fn failing_io() -> std::result::Result<(), std::io::Error> {
    Err(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"))
}

#[test]
fn test_io_context() {
    let error = failing_io().io_context("Reading catalog").unwrap_err();
    match error {
        Error::Io { message, source } => {
            assert_eq!(message, "Reading catalog: gone");
            assert!(source.is_some());
        }
        other => panic!("Expected Io error, got {other:?}"),
    }
}

#[test]
fn test_config_context() {
    let error = failing_io().config_context("Loading config").unwrap_err();
    assert!(matches!(error, Error::Configuration { .. }));
    assert!(error.to_string().contains("Loading config: gone"));
}

#[test]
fn test_with_config_context_is_lazy() {
    let mut called = false;
    let ok: std::result::Result<u8, std::io::Error> = Ok(1);
    let value = ok
        .with_config_context(|| {
            called = true;
            "never"
        })
        .expect("ok passes through");

    assert_eq!(value, 1);
    assert!(!called);
}
