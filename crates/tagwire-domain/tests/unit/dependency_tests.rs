//! Unit tests for dependency handles and collections

use indexmap::IndexMap;
use tagwire_domain::value_objects::{
    ComponentId, DependencyCollection, DependencyHandle, EntryName, IndexMode, WiringValue,
};

fn reference(id: &str) -> DependencyHandle {
    DependencyHandle::Reference(ComponentId::new(id))
}

#[test]
fn test_handle_modes() {
    let id = ComponentId::new("app.mailer");
    let reference = DependencyHandle::new(id.clone(), true);
    let identity = DependencyHandle::new(id.clone(), false);
    assert!(reference.is_reference());
    assert!(!identity.is_reference());
    assert_eq!(reference.component_id(), &id);
    assert_eq!(reference.to_string(), "@app.mailer");
    assert_eq!(identity.to_string(), "app.mailer");
}

#[test]
fn test_sequence_entries_are_positional() {
    let collection = DependencyCollection::Sequence(vec![reference("a"), reference("b")]);
    let entries = collection.entries();
    assert_eq!(entries[1].0, EntryName::Position(1));
    assert_eq!(entries[1].1, WiringValue::Handle(reference("b")));
}

#[test]
fn test_grouped_handles_flatten_in_order() {
    let mut map = IndexMap::new();
    map.insert("x".to_string(), vec![reference("a"), reference("b")]);
    map.insert("y".to_string(), vec![reference("c")]);
    let collection = DependencyCollection::Grouped(map);
    assert_eq!(collection.len(), 2);
    let ids: Vec<&str> = collection
        .handles()
        .into_iter()
        .map(|h| h.component_id().as_str())
        .collect();
    assert_eq!(ids, vec!["a", "b", "c"]);
}

#[test]
fn test_index_mode_parse() {
    assert_eq!(IndexMode::parse("key"), Some(IndexMode::Key));
    assert_eq!(IndexMode::parse("class"), Some(IndexMode::Class));
    assert_eq!(IndexMode::parse("Key"), None);
    assert_eq!(IndexMode::Class.to_string(), "class");
}
