//! Unit tests for consumer option resolution

use tagwire_application::resolve_options;
use tagwire_domain::Error;
use tagwire_domain::value_objects::{ComponentId, IndexMode, ResolvedOptions, Tag};

fn consumer() -> ComponentId {
    ComponentId::new("app.consumer")
}

fn consumer_tag() -> Tag {
    Tag::new("tag.consumer")
}

#[test]
fn test_defaults() {
    let options = resolve_options(&consumer(), &consumer_tag().with("tag", "app.handler")).unwrap();
    assert_eq!(options, ResolvedOptions::new("app.handler"));
    assert!(options.use_reference);
    assert!(!options.multiple);
    assert!(options.index_mode.is_none());
}

#[test]
fn test_key_implies_index_by_key() {
    let tag = consumer_tag().with("tag", "app.handler").with("key", "alias");
    let options = resolve_options(&consumer(), &tag).unwrap();
    assert_eq!(options.index_mode, Some(IndexMode::Key));
    assert_eq!(options.key_attribute.as_deref(), Some("alias"));
}

#[test]
fn test_index_by_class_with_all_flags() {
    let tag = consumer_tag()
        .with("tag", "app.handler")
        .with("index-by", "class")
        .with("reference", false)
        .with("instanceof", "App\\HandlerInterface")
        .with("multiple", true);
    let options = resolve_options(&consumer(), &tag).unwrap();
    assert_eq!(options.index_mode, Some(IndexMode::Class));
    assert!(!options.use_reference);
    assert!(options.multiple);
    assert_eq!(options.required_type.as_deref(), Some("App\\HandlerInterface"));
}

#[test]
fn test_string_flags_are_accepted() {
    let tag = consumer_tag()
        .with("tag", "app.handler")
        .with("reference", "false")
        .with("multiple", "1");
    let options = resolve_options(&consumer(), &tag).unwrap();
    assert!(!options.use_reference);
    assert!(options.multiple);
}

#[test]
fn test_missing_tag_attribute() {
    let err = resolve_options(&consumer(), &consumer_tag().with("method", "add")).unwrap_err();
    match err {
        Error::AttributeMissing {
            component,
            attribute,
            tag,
        } => {
            assert_eq!(component, "app.consumer");
            assert_eq!(attribute, "tag");
            assert_eq!(tag, "tag.consumer");
        }
        other => panic!("Expected AttributeMissing, got {other:?}"),
    }
}

#[test]
fn test_unknown_index_by_value() {
    let tag = consumer_tag().with("tag", "app.handler").with("index-by", "name");
    let err = resolve_options(&consumer(), &tag).unwrap_err();
    assert!(matches!(err, Error::InvalidConfiguration { .. }));
    assert!(err.to_string().contains("name"));
}

#[test]
fn test_index_by_key_without_key() {
    let tag = consumer_tag().with("tag", "app.handler").with("index-by", "key");
    let err = resolve_options(&consumer(), &tag).unwrap_err();
    match err {
        Error::InvalidConfiguration { component, message } => {
            assert_eq!(component, "app.consumer");
            assert!(message.contains("key"));
        }
        other => panic!("Expected InvalidConfiguration, got {other:?}"),
    }
}

#[test]
fn test_missing_tag_reported_before_invalid_index() {
    let tag = consumer_tag().with("index-by", "bogus");
    let err = resolve_options(&consumer(), &tag).unwrap_err();
    assert!(matches!(err, Error::AttributeMissing { .. }));
}
