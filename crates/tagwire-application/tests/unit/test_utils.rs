//! Minimal registry and wiring target fakes for engine tests

use std::collections::HashMap;
use tagwire_domain::error::{Error, Result};
use tagwire_domain::ports::{ComponentRegistry, TaggedComponents, WiringTarget, WiringTargets};
use tagwire_domain::value_objects::{ComponentId, DependencyHandle, Tag, WiringDirective, WiringValue};

/// Registry keeping components in insertion order
#[derive(Default)]
pub struct FakeRegistry {
    components: Vec<(ComponentId, String, Vec<Tag>)>,
    parents: HashMap<String, Vec<String>>,
    pub targets: HashMap<ComponentId, RecordingTarget>,
}

impl FakeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, id: &str, class: &str, tags: Vec<Tag>) -> &mut Self {
        self.components
            .push((ComponentId::new(id), class.to_string(), tags));
        self.targets
            .insert(ComponentId::new(id), RecordingTarget::default());
        self
    }

    pub fn parent(&mut self, class: &str, parent: &str) -> &mut Self {
        self.parents
            .entry(class.to_string())
            .or_default()
            .push(parent.to_string());
        self
    }

    pub fn target(&self, id: &str) -> &RecordingTarget {
        &self.targets[&ComponentId::new(id)]
    }
}

impl ComponentRegistry for FakeRegistry {
    fn find_by_tag(&self, tag: &str) -> TaggedComponents {
        self.components
            .iter()
            .filter_map(|(id, _, tags)| {
                let matching: Vec<Tag> = tags.iter().filter(|t| t.name() == tag).cloned().collect();
                (!matching.is_empty()).then(|| (id.clone(), matching))
            })
            .collect()
    }

    fn declared_class(&self, id: &ComponentId) -> Result<String> {
        self.components
            .iter()
            .find(|(candidate, _, _)| candidate == id)
            .map(|(_, class, _)| class.clone())
            .ok_or_else(|| Error::component_not_found(id.as_str()))
    }

    fn is_subtype_of(&self, class: &str, required: &str) -> bool {
        class == required
            || self
                .parents
                .get(class)
                .is_some_and(|ps| ps.iter().any(|p| self.is_subtype_of(p, required)))
    }
}

impl WiringTargets for FakeRegistry {
    type Target = RecordingTarget;

    fn wiring_target(&mut self, id: &ComponentId) -> Result<&mut RecordingTarget> {
        self.targets
            .get_mut(id)
            .ok_or_else(|| Error::component_not_found(id.as_str()))
    }
}

/// Wiring target recording every directive it receives
#[derive(Debug, Default)]
pub struct RecordingTarget {
    pub directives: Vec<WiringDirective>,
}

impl WiringTarget for RecordingTarget {
    fn add_method_call(&mut self, method: &str, arguments: Vec<WiringValue>) {
        self.directives
            .push(WiringDirective::method_call(method, arguments));
    }

    fn add_argument(&mut self, value: WiringValue) {
        self.directives.push(WiringDirective::argument(value));
    }
}

pub fn reference(id: &str) -> DependencyHandle {
    DependencyHandle::Reference(ComponentId::new(id))
}

pub fn identity(id: &str) -> DependencyHandle {
    DependencyHandle::Identity(ComponentId::new(id))
}
