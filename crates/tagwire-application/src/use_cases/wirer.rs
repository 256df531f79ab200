//! Consumer Wirer
//!
//! Translates a collected [`DependencyCollection`] into wiring directives for
//! the consumer, following the consumer tag's `method` and `bulk` attributes:
//!
//! | `method` | `bulk` | Directives |
//! |----------|--------|------------|
//! | set | true | one `method(collection)` |
//! | set | false / unset | one `method(value, name)` per entry |
//! | unset | false | one argument per entry |
//! | unset | true / unset | one argument holding the collection |

use super::attributes::AttributeAccessor;
use tagwire_domain::constants::{ATTR_BULK, ATTR_METHOD};
use tagwire_domain::error::Result;
use tagwire_domain::ports::WiringTarget;
use tagwire_domain::value_objects::{
    ComponentId, DependencyCollection, Tag, WiringDirective, WiringValue,
};

/// Plans and applies consumer wiring
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsumerWirer;

impl ConsumerWirer {
    /// Create a wirer
    pub fn new() -> Self {
        Self
    }

    /// Plan the directives for one consumer-tag occurrence
    ///
    /// Only a non-boolean `bulk` value can fail, and it fails before any
    /// directive exists.
    pub fn plan(
        &self,
        component: &ComponentId,
        consumer_tag: &Tag,
        dependencies: &DependencyCollection,
    ) -> Result<Vec<WiringDirective>> {
        let attrs = AttributeAccessor::new(component, consumer_tag);
        let bulk = attrs.optional_boolean(ATTR_BULK)?;

        let directives = match attrs.optional_string(ATTR_METHOD) {
            Some(method) if bulk == Some(true) => vec![WiringDirective::method_call(
                method,
                vec![WiringValue::Collection(dependencies.clone())],
            )],
            Some(method) => dependencies
                .entries()
                .into_iter()
                .map(|(name, value)| {
                    WiringDirective::method_call(
                        method.clone(),
                        vec![value, WiringValue::Name(name)],
                    )
                })
                .collect(),
            None if bulk == Some(false) => dependencies
                .entries()
                .into_iter()
                .map(|(_, value)| WiringDirective::argument(value))
                .collect(),
            None => vec![WiringDirective::argument(WiringValue::Collection(
                dependencies.clone(),
            ))],
        };
        Ok(directives)
    }

    /// Plan the directives and apply them to `target`
    pub fn wire<T>(
        &self,
        target: &mut T,
        component: &ComponentId,
        consumer_tag: &Tag,
        dependencies: &DependencyCollection,
    ) -> Result<()>
    where
        T: WiringTarget + ?Sized,
    {
        for directive in self.plan(component, consumer_tag, dependencies)? {
            target.apply(directive);
        }
        Ok(())
    }
}
