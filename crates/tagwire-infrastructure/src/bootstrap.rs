//! Engine bootstrap
//!
//! Builds a configured [`TaggedConsumerPass`] and runs it over a container.

use crate::config::{ConfigLoader, EngineConfig};
use tagwire_application::{PassReport, TaggedConsumerPass};
use tagwire_domain::error::Result;
use tagwire_domain::ports::{ComponentRegistry, WiringTargets};
use tracing::info;

/// Create the wiring pass described by `config`
pub fn create_pass(config: &EngineConfig) -> TaggedConsumerPass {
    info!(consumer_tag = %config.consumer_tag, "Creating tagged consumer pass");
    TaggedConsumerPass::new(config.consumer_tag.clone())
}

/// Load configuration from the default sources and create the pass
pub fn create_pass_from_env() -> Result<TaggedConsumerPass> {
    let config = ConfigLoader::new().load()?;
    Ok(create_pass(&config))
}

/// Run the configured pass over `container`
pub fn run_pass<C>(config: &EngineConfig, container: &mut C) -> Result<PassReport>
where
    C: ComponentRegistry + WiringTargets + ?Sized,
{
    create_pass(config).process(container)
}
