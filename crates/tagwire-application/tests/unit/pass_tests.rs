//! Unit tests for the pass orchestrator

use crate::test_utils::{FakeRegistry, reference};
use tagwire_application::{PassReport, TaggedConsumerPass};
use tagwire_domain::Error;
use tagwire_domain::value_objects::{
    ComponentId, DependencyCollection, Tag, WiringDirective, WiringValue,
};

fn consumer(target: &str) -> Tag {
    Tag::new("tag.consumer").with("tag", target)
}

#[test]
fn test_default_consumer_tag() {
    assert_eq!(TaggedConsumerPass::default().consumer_tag(), "tag.consumer");
}

#[test]
fn test_wires_each_consumer_occurrence() {
    let mut registry = FakeRegistry::new();
    registry
        .add(
            "chain",
            "Chain",
            vec![
                consumer("app.a").with("method", "addA"),
                consumer("app.b"),
            ],
        )
        .add("a1", "A", vec![Tag::new("app.a")])
        .add("b1", "B", vec![Tag::new("app.b")]);

    let report = TaggedConsumerPass::default().process(&mut registry).unwrap();
    assert_eq!(
        report,
        PassReport {
            consumers: 1,
            occurrences: 2,
            directives: 2,
        }
    );
    assert_eq!(
        registry.target("chain").directives,
        vec![
            WiringDirective::method_call(
                "addA",
                vec![
                    WiringValue::Handle(reference("a1")),
                    WiringValue::Name(tagwire_domain::EntryName::Position(0)),
                ]
            ),
            WiringDirective::argument(WiringValue::Collection(DependencyCollection::Sequence(
                vec![reference("b1")]
            ))),
        ]
    );
    assert!(registry.target("a1").directives.is_empty());
}

#[test]
fn test_custom_consumer_tag() {
    let mut registry = FakeRegistry::new();
    registry
        .add("ignored", "I", vec![consumer("app.a")])
        .add(
            "used",
            "U",
            vec![Tag::new("my.consumer").with("tag", "app.a")],
        )
        .add("a1", "A", vec![Tag::new("app.a")]);

    let report = TaggedConsumerPass::new("my.consumer")
        .process(&mut registry)
        .unwrap();
    assert_eq!(report.consumers, 1);
    assert!(registry.target("ignored").directives.is_empty());
    assert_eq!(registry.target("used").directives.len(), 1);
}

#[test]
fn test_plan_does_not_touch_targets() {
    let mut registry = FakeRegistry::new();
    registry
        .add("chain", "Chain", vec![consumer("app.a")])
        .add("a1", "A", vec![Tag::new("app.a")]);

    let plan = TaggedConsumerPass::default().plan(&registry).unwrap();
    assert_eq!(plan.report().directives, 1);
    assert!(plan.consumer(&ComponentId::new("chain")).is_some());
    assert!(registry.target("chain").directives.is_empty());
}

#[test]
fn test_error_in_second_occurrence_leaves_consumer_unwired() {
    let mut registry = FakeRegistry::new();
    registry
        .add(
            "chain",
            "Chain",
            vec![consumer("app.a"), Tag::new("tag.consumer").with("method", "add")],
        )
        .add("a1", "A", vec![Tag::new("app.a")]);

    let err = TaggedConsumerPass::default()
        .process(&mut registry)
        .unwrap_err();
    match err {
        Error::AttributeMissing {
            component,
            attribute,
            ..
        } => {
            assert_eq!(component, "chain");
            assert_eq!(attribute, "tag");
        }
        other => panic!("Expected AttributeMissing, got {other:?}"),
    }
    assert!(registry.target("chain").directives.is_empty());
}

#[test]
fn test_type_mismatch_aborts_before_wiring() {
    let mut registry = FakeRegistry::new();
    registry
        .add(
            "chain",
            "Chain",
            vec![consumer("app.a").with("instanceof", "App\\HandlerInterface")],
        )
        .add("a1", "App\\Alpha", vec![Tag::new("app.a")])
        .add("a2", "App\\Stranger", vec![Tag::new("app.a")])
        .parent("App\\Alpha", "App\\HandlerInterface");

    let err = TaggedConsumerPass::default()
        .process(&mut registry)
        .unwrap_err();
    assert!(matches!(err, Error::TypeMismatch { .. }));
    assert!(registry.target("chain").directives.is_empty());
}

#[test]
fn test_no_consumers() {
    let mut registry = FakeRegistry::new();
    registry.add("a1", "A", vec![Tag::new("app.a")]);
    let report = TaggedConsumerPass::default().process(&mut registry).unwrap();
    assert_eq!(report, PassReport::default());
}

#[test]
fn test_missing_target_leaves_every_consumer_unwired() {
    let mut registry = FakeRegistry::new();
    registry
        .add("first", "First", vec![consumer("app.a")])
        .add("second", "Second", vec![consumer("app.a")])
        .add("a1", "A", vec![Tag::new("app.a")]);
    registry.targets.remove(&ComponentId::new("second"));

    let err = TaggedConsumerPass::default()
        .process(&mut registry)
        .unwrap_err();
    assert!(matches!(err, Error::ComponentNotFound { ref component } if component == "second"));
    assert!(registry.target("first").directives.is_empty());
}
