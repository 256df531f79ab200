//! Dependency Collector
//!
//! Gathers the components declaring a tag into a [`DependencyCollection`].
//!
//! ## Algorithm
//!
//! ```text
//! find_by_tag(target)            registry order, one entry per tag occurrence
//!        │
//!        ▼
//! instanceof check               once per component
//!        │
//!        ▼
//! bucket by numeric `order`      ordered groups + one unordered group
//!        │                       (indexing applied inside each bucket)
//!        ▼
//! fold ascending order keys, unordered group last
//! ```
//!
//! Merging follows the collection shape: sequences concatenate, indexed maps
//! overwrite (later group wins, so unordered entries win every tie), grouped
//! maps concatenate per key.

use super::attributes::AttributeAccessor;
use indexmap::IndexMap;
use tagwire_domain::constants::ATTR_ORDER;
use tagwire_domain::error::{Error, Result};
use tagwire_domain::ports::ComponentRegistry;
use tagwire_domain::value_objects::{
    ComponentId, DependencyCollection, DependencyHandle, IndexMode, Order, ResolvedOptions, Tag,
};
use tracing::{debug, warn};

/// Collects, orders and indexes tagged components
#[derive(Debug, Clone, Copy, Default)]
pub struct DependencyCollector;

impl DependencyCollector {
    /// Create a collector
    pub fn new() -> Self {
        Self
    }

    /// Collect every component declaring `options.target_tag`
    ///
    /// No match yields an empty collection, not an error.
    ///
    /// # Errors
    ///
    /// - [`Error::TypeMismatch`] when a component fails `instanceof`
    /// - [`Error::AttributeMissing`] when indexing by key and an occurrence
    ///   lacks the key attribute
    /// - registry errors from `declared_class`
    pub fn collect<R>(&self, registry: &R, options: &ResolvedOptions) -> Result<DependencyCollection>
    where
        R: ComponentRegistry + ?Sized,
    {
        let tagged = registry.find_by_tag(&options.target_tag);
        let mut groups = OrderGroups::new(options);

        for (id, occurrences) in &tagged {
            let class = Self::checked_class(registry, id, options)?;
            let handle = DependencyHandle::new(id.clone(), options.use_reference);

            for tag in occurrences {
                let index = Self::index_of(id, tag, class.as_deref(), options)?;
                groups
                    .bucket(Self::order_of(id, tag))
                    .insert(index, handle.clone());
            }
        }

        let collection = groups.fold();
        debug!(
            tag = %options.target_tag,
            components = tagged.len(),
            entries = collection.len(),
            "Collected tagged components"
        );
        Ok(collection)
    }

    /// Declared class, fetched only when `instanceof` or class indexing needs it
    fn checked_class<R>(
        registry: &R,
        id: &ComponentId,
        options: &ResolvedOptions,
    ) -> Result<Option<String>>
    where
        R: ComponentRegistry + ?Sized,
    {
        let needs_class =
            options.required_type.is_some() || options.index_mode == Some(IndexMode::Class);
        if !needs_class {
            return Ok(None);
        }

        let class = registry.declared_class(id)?;
        if let Some(required) = &options.required_type {
            if !registry.is_subtype_of(&class, required) {
                return Err(Error::type_mismatch(id.as_str(), class, required.as_str()));
            }
        }
        Ok(Some(class))
    }

    fn index_of(
        id: &ComponentId,
        tag: &Tag,
        class: Option<&str>,
        options: &ResolvedOptions,
    ) -> Result<Option<String>> {
        match (options.index_mode, &options.key_attribute) {
            (Some(IndexMode::Key), Some(key)) => {
                AttributeAccessor::new(id, tag).string(key).map(Some)
            }
            (Some(IndexMode::Class), _) => Ok(class.map(str::to_string)),
            // Resolved options never index by key without a key attribute.
            (Some(IndexMode::Key), None) | (None, _) => Ok(None),
        }
    }

    fn order_of(id: &ComponentId, tag: &Tag) -> Option<Order> {
        let value = tag.get(ATTR_ORDER)?;
        let order = value.as_order();
        if order.is_none() {
            warn!(
                component = %id,
                order = %value,
                "Non-numeric order attribute, component is treated as unordered"
            );
        }
        order
    }
}

/// Per-collection buckets: one per numeric order plus the unordered one
struct OrderGroups {
    ordered: Vec<(Order, DependencyCollection)>,
    unordered: DependencyCollection,
    template: DependencyCollection,
}

impl OrderGroups {
    fn new(options: &ResolvedOptions) -> Self {
        let template = match (options.index_mode, options.multiple) {
            (None, _) => DependencyCollection::Sequence(Vec::new()),
            (Some(_), false) => DependencyCollection::Indexed(IndexMap::new()),
            (Some(_), true) => DependencyCollection::Grouped(IndexMap::new()),
        };
        Self {
            ordered: Vec::new(),
            unordered: template.clone(),
            template,
        }
    }

    fn bucket(&mut self, order: Option<Order>) -> Bucket<'_> {
        let Some(order) = order else {
            return Bucket(&mut self.unordered);
        };
        let position = match self
            .ordered
            .iter()
            .position(|(existing, _)| *existing == order)
        {
            Some(position) => position,
            None => {
                self.ordered.push((order, self.template.clone()));
                self.ordered.len() - 1
            }
        };
        Bucket(&mut self.ordered[position].1)
    }

    fn fold(mut self) -> DependencyCollection {
        self.ordered.sort_by_key(|(order, _)| *order);
        let mut result = self.template;
        for (_, group) in self.ordered {
            merge(&mut result, group);
        }
        merge(&mut result, self.unordered);
        result
    }
}

struct Bucket<'a>(&'a mut DependencyCollection);

impl Bucket<'_> {
    fn insert(self, index: Option<String>, handle: DependencyHandle) {
        match (self.0, index) {
            (DependencyCollection::Indexed(map), Some(index)) => {
                map.insert(index, handle);
            }
            (DependencyCollection::Grouped(map), Some(index)) => {
                map.entry(index).or_default().push(handle);
            }
            (DependencyCollection::Sequence(list), _) => list.push(handle),
            // Class indexing without a known class cannot happen: the class
            // is always fetched when indexing by class.
            (_, None) => {}
        }
    }
}

fn merge(into: &mut DependencyCollection, from: DependencyCollection) {
    match (into, from) {
        (DependencyCollection::Sequence(into), DependencyCollection::Sequence(from)) => {
            into.extend(from);
        }
        (DependencyCollection::Indexed(into), DependencyCollection::Indexed(from)) => {
            into.extend(from);
        }
        (DependencyCollection::Grouped(into), DependencyCollection::Grouped(from)) => {
            for (index, handles) in from {
                into.entry(index).or_default().extend(handles);
            }
        }
        // Every bucket is cloned from the same template.
        _ => unreachable!("order groups always share one collection shape"),
    }
}
