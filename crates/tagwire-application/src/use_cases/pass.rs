//! Pass Orchestrator
//!
//! Finds every consumer component and wires the dependencies each of its
//! consumer tags asks for.
//!
//! ## Flow
//!
//! ```text
//! find_by_tag(consumer_tag)
//!        │  for each consumer, for each consumer-tag occurrence
//!        ▼
//! resolve_options ──► DependencyCollector::collect ──► ConsumerWirer::plan
//!        │
//!        ▼
//! WiringPlan (every directive, nothing applied yet)
//!        │
//!        ▼
//! commit: apply directives to each consumer's wiring target
//! ```
//!
//! Planning reads the registry only. Directives are applied once the whole
//! plan succeeded, so a configuration error never leaves a consumer
//! partially wired.

use super::collector::DependencyCollector;
use super::options::resolve_options;
use super::wirer::ConsumerWirer;
use indexmap::IndexMap;
use serde::Serialize;
use std::fmt;
use tagwire_domain::constants::DEFAULT_CONSUMER_TAG;
use tagwire_domain::error::Result;
use tagwire_domain::ports::{ComponentRegistry, WiringTarget, WiringTargets};
use tagwire_domain::value_objects::{ComponentId, WiringDirective};
use tracing::{debug, info};

/// Directives planned for one consumer
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConsumerPlan {
    /// Number of consumer-tag occurrences processed
    pub occurrences: usize,
    /// Directives in application order
    pub directives: Vec<WiringDirective>,
}

/// Every directive of a pass, per consumer in registry order
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct WiringPlan {
    consumers: IndexMap<ComponentId, ConsumerPlan>,
}

impl WiringPlan {
    /// Planned consumers in registry order
    pub fn consumers(&self) -> impl Iterator<Item = (&ComponentId, &ConsumerPlan)> {
        self.consumers.iter()
    }

    /// Plan of a single consumer
    pub fn consumer(&self, id: &ComponentId) -> Option<&ConsumerPlan> {
        self.consumers.get(id)
    }

    /// Whether no consumer was found
    pub fn is_empty(&self) -> bool {
        self.consumers.is_empty()
    }

    /// Summary of the plan
    pub fn report(&self) -> PassReport {
        PassReport {
            consumers: self.consumers.len(),
            occurrences: self.consumers.values().map(|c| c.occurrences).sum(),
            directives: self.consumers.values().map(|c| c.directives.len()).sum(),
        }
    }
}

/// Outcome summary of a wiring pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PassReport {
    /// Consumer components wired
    pub consumers: usize,
    /// Consumer-tag occurrences processed
    pub occurrences: usize,
    /// Directives applied
    pub directives: usize,
}

impl fmt::Display for PassReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} consumer(s), {} tag occurrence(s), {} directive(s)",
            self.consumers, self.occurrences, self.directives
        )
    }
}

/// Wires tagged dependencies into consumer components
#[derive(Debug, Clone)]
pub struct TaggedConsumerPass {
    consumer_tag: String,
    collector: DependencyCollector,
    wirer: ConsumerWirer,
}

impl Default for TaggedConsumerPass {
    fn default() -> Self {
        Self::new(DEFAULT_CONSUMER_TAG)
    }
}

impl TaggedConsumerPass {
    /// Create a pass handling components tagged `consumer_tag`
    pub fn new(consumer_tag: impl Into<String>) -> Self {
        Self {
            consumer_tag: consumer_tag.into(),
            collector: DependencyCollector::new(),
            wirer: ConsumerWirer::new(),
        }
    }

    /// Name of the tag marking consumers
    pub fn consumer_tag(&self) -> &str {
        &self.consumer_tag
    }

    /// Plan the wiring of every consumer without touching any target
    ///
    /// Stops at the first error.
    pub fn plan<R>(&self, registry: &R) -> Result<WiringPlan>
    where
        R: ComponentRegistry + ?Sized,
    {
        let mut plan = WiringPlan::default();

        for (id, occurrences) in registry.find_by_tag(&self.consumer_tag) {
            let mut directives = Vec::new();
            for tag in &occurrences {
                let options = resolve_options(&id, tag)?;
                let dependencies = self.collector.collect(registry, &options)?;
                let planned = self.wirer.plan(&id, tag, &dependencies)?;
                debug!(
                    consumer = %id,
                    tag = %options.target_tag,
                    dependencies = dependencies.len(),
                    directives = planned.len(),
                    "Planned consumer wiring"
                );
                directives.extend(planned);
            }
            plan.consumers.insert(
                id,
                ConsumerPlan {
                    occurrences: occurrences.len(),
                    directives,
                },
            );
        }

        Ok(plan)
    }

    /// Apply a plan to the consumers' wiring targets
    ///
    /// Every target is looked up before the first directive is applied, so a
    /// missing target fails the commit with nothing wired.
    pub fn commit<C>(&self, container: &mut C, plan: WiringPlan) -> Result<PassReport>
    where
        C: WiringTargets + ?Sized,
    {
        for id in plan.consumers.keys() {
            container.wiring_target(id)?;
        }

        let report = plan.report();
        for (id, consumer) in plan.consumers {
            let target = container.wiring_target(&id)?;
            for directive in consumer.directives {
                target.apply(directive);
            }
        }
        Ok(report)
    }

    /// Plan and commit the wiring of every consumer
    pub fn process<C>(&self, container: &mut C) -> Result<PassReport>
    where
        C: ComponentRegistry + WiringTargets + ?Sized,
    {
        let plan = self.plan(&*container)?;
        let report = self.commit(container, plan)?;
        info!(
            consumer_tag = %self.consumer_tag,
            consumers = report.consumers,
            directives = report.directives,
            "Tagged consumer pass complete"
        );
        Ok(report)
    }
}
