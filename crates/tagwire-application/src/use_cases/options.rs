//! Option Resolver
//!
//! Turns a consumer-tag declaration into [`ResolvedOptions`], validating the
//! attribute combination before any registry scan happens.

use super::attributes::AttributeAccessor;
use tagwire_domain::constants::{
    ATTR_INDEX_BY, ATTR_INSTANCEOF, ATTR_KEY, ATTR_MULTIPLE, ATTR_REFERENCE, ATTR_TAG,
};
use tagwire_domain::error::{Error, Result};
use tagwire_domain::value_objects::{ComponentId, IndexMode, ResolvedOptions, Tag};

/// Resolve the options of one consumer-tag occurrence
///
/// `key` without `index-by` is shorthand for `index-by = "key"`.
///
/// # Errors
///
/// - [`Error::AttributeMissing`] when `tag` is absent
/// - [`Error::InvalidConfiguration`] for an unknown `index-by` value, for
///   `index-by = "key"` without `key`, or for non-boolean flags
pub fn resolve_options(component: &ComponentId, consumer_tag: &Tag) -> Result<ResolvedOptions> {
    let attrs = AttributeAccessor::new(component, consumer_tag);

    let key_attribute = attrs.optional_string(ATTR_KEY);
    let index_by = attrs.optional_string(ATTR_INDEX_BY);
    let target_tag = attrs.string(ATTR_TAG)?;
    let use_reference = attrs.boolean(ATTR_REFERENCE, true)?;
    let required_type = attrs.optional_string(ATTR_INSTANCEOF);
    let multiple = attrs.boolean(ATTR_MULTIPLE, false)?;

    let index_mode = match (index_by, &key_attribute) {
        (Some(value), _) => Some(IndexMode::parse(&value).ok_or_else(|| {
            Error::invalid_configuration(
                component.as_str(),
                format!(
                    "unsupported \"{ATTR_INDEX_BY}\" value \"{value}\" on tag \"{}\", expected \"key\" or \"class\"",
                    consumer_tag.name()
                ),
            )
        })?),
        (None, Some(_)) => Some(IndexMode::Key),
        (None, None) => None,
    };

    if index_mode == Some(IndexMode::Key) && key_attribute.is_none() {
        return Err(Error::invalid_configuration(
            component.as_str(),
            format!(
                "tag \"{}\" indexes by key but has no \"{ATTR_KEY}\" attribute",
                consumer_tag.name()
            ),
        ));
    }

    Ok(ResolvedOptions {
        target_tag,
        index_mode,
        key_attribute,
        use_reference,
        required_type,
        multiple,
    })
}
