//! In-memory component registry
//!
//! Registration-ordered registry implementing both engine ports: it answers
//! tag and type queries and owns one [`ComponentDefinition`] per component
//! for the pass to wire into.
//!
//! ## Example
//!
//! ```rust
//! use tagwire_domain::value_objects::Tag;
//! use tagwire_infrastructure::adapters::InMemoryRegistry;
//!
//! let mut registry = InMemoryRegistry::new();
//! registry
//!     .register("app.mailer", "App\\Mailer")
//!     .tag(Tag::new("app.transport").with("alias", "smtp"));
//! registry.declare_type("App\\Mailer", ["App\\TransportInterface"]);
//!
//! assert_eq!(registry.len(), 1);
//! ```

use super::definition::ComponentDefinition;
use indexmap::IndexMap;
use std::collections::{HashMap, HashSet, VecDeque};
use tagwire_domain::error::{Error, Result};
use tagwire_domain::ports::{ComponentRegistry, TaggedComponents, WiringTargets};
use tagwire_domain::value_objects::{ComponentId, Tag};

#[derive(Debug, Clone)]
struct RegisteredComponent {
    tags: Vec<Tag>,
    definition: ComponentDefinition,
}

/// In-memory registry of components, their tags and type hierarchy
#[derive(Debug, Clone, Default)]
pub struct InMemoryRegistry {
    components: IndexMap<ComponentId, RegisteredComponent>,
    supertypes: HashMap<String, Vec<String>>,
}

impl InMemoryRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a component with its declared class
    ///
    /// Registering an existing id replaces the component but keeps its
    /// position in iteration order.
    pub fn register(
        &mut self,
        id: impl Into<ComponentId>,
        class: impl Into<String>,
    ) -> ComponentBuilder<'_> {
        let id = id.into();
        let component = RegisteredComponent {
            tags: Vec::new(),
            definition: ComponentDefinition::new(class),
        };
        let entry = match self.components.entry(id) {
            indexmap::map::Entry::Occupied(mut occupied) => {
                occupied.insert(component);
                occupied.into_mut()
            }
            indexmap::map::Entry::Vacant(vacant) => vacant.insert(component),
        };
        ComponentBuilder { component: entry }
    }

    /// Append a tag occurrence to a registered component
    pub fn add_tag(&mut self, id: &ComponentId, tag: Tag) -> Result<()> {
        self.components
            .get_mut(id)
            .ok_or_else(|| Error::component_not_found(id.as_str()))?
            .tags
            .push(tag);
        Ok(())
    }

    /// Declare the direct supertypes (parents, implemented interfaces) of a class
    pub fn declare_type<I, S>(&mut self, class: impl Into<String>, supertypes: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.supertypes
            .entry(class.into())
            .or_default()
            .extend(supertypes.into_iter().map(Into::into));
        self
    }

    /// Wired definition of a component
    pub fn definition(&self, id: &ComponentId) -> Option<&ComponentDefinition> {
        self.components.get(id).map(|c| &c.definition)
    }

    /// Tags declared by a component
    pub fn tags(&self, id: &ComponentId) -> Option<&[Tag]> {
        self.components.get(id).map(|c| c.tags.as_slice())
    }

    /// Registered ids in registration order
    pub fn ids(&self) -> impl Iterator<Item = &ComponentId> {
        self.components.keys()
    }

    /// Number of registered components
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// Whether no component is registered
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }
}

impl ComponentRegistry for InMemoryRegistry {
    fn find_by_tag(&self, tag: &str) -> TaggedComponents {
        self.components
            .iter()
            .filter_map(|(id, component)| {
                let occurrences: Vec<Tag> = component
                    .tags
                    .iter()
                    .filter(|t| t.name() == tag)
                    .cloned()
                    .collect();
                (!occurrences.is_empty()).then(|| (id.clone(), occurrences))
            })
            .collect()
    }

    fn declared_class(&self, id: &ComponentId) -> Result<String> {
        self.components
            .get(id)
            .map(|c| c.definition.class().to_string())
            .ok_or_else(|| Error::component_not_found(id.as_str()))
    }

    fn is_subtype_of(&self, class: &str, required: &str) -> bool {
        let mut seen: HashSet<&str> = HashSet::new();
        let mut queue: VecDeque<&str> = VecDeque::from([class]);
        while let Some(current) = queue.pop_front() {
            if current == required {
                return true;
            }
            if !seen.insert(current) {
                continue;
            }
            if let Some(parents) = self.supertypes.get(current) {
                queue.extend(parents.iter().map(String::as_str));
            }
        }
        false
    }
}

impl WiringTargets for InMemoryRegistry {
    type Target = ComponentDefinition;

    fn wiring_target(&mut self, id: &ComponentId) -> Result<&mut ComponentDefinition> {
        self.components
            .get_mut(id)
            .map(|c| &mut c.definition)
            .ok_or_else(|| Error::component_not_found(id.as_str()))
    }
}

/// Builder returned by [`InMemoryRegistry::register`] for attaching tags
pub struct ComponentBuilder<'a> {
    component: &'a mut RegisteredComponent,
}

impl ComponentBuilder<'_> {
    /// Attach a tag occurrence
    pub fn tag(&mut self, tag: Tag) -> &mut Self {
        self.component.tags.push(tag);
        self
    }
}
