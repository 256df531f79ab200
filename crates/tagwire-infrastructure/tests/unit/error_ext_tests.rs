//! Unit tests for error context extensions

use tagwire_domain::Error;
use tagwire_infrastructure::ErrorContext;

fn failing() -> std::result::Result<(), std::io::Error> {
    Err(std::io::Error::other("disk on fire"))
}

#[test]
fn test_context_wraps_as_internal() {
    let err = failing().context("Saving failed").unwrap_err();
    match err {
        Error::Internal { message, source } => {
            assert_eq!(message, "Saving failed: disk on fire");
            assert!(source.is_some());
        }
        other => panic!("Expected Internal error, got {other:?}"),
    }
}

#[test]
fn test_with_context_is_lazy() {
    let ok: std::result::Result<u8, std::io::Error> = Ok(1);
    let value = ok
        .with_context(|| -> String { panic!("context must not be built on success") })
        .unwrap();
    assert_eq!(value, 1);
}

#[test]
fn test_config_context_wraps_as_configuration() {
    let err = failing().config_context("Reading config").unwrap_err();
    assert!(matches!(err, Error::Configuration { source: Some(_), .. }));
    assert!(err.to_string().contains("Reading config"));
}
