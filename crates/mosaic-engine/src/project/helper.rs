//! Configuration helper
//!
//! Pure functions mapping declared property descriptors and a content store
//! to resolved property views, and applying updates to the store.

use std::collections::BTreeMap;

use super::content::ContentStore;
use super::property::PropertyDescriptor;

/// Resolve every declared property against the stored content.
///
/// Each view is a copy of its descriptor whose value is the stored value, or
/// the declared default when nothing is stored.
pub fn properties(
    descriptors: &[PropertyDescriptor],
    content: &ContentStore,
) -> BTreeMap<String, PropertyDescriptor> {
    descriptors
        .iter()
        .map(|descriptor| {
            let mut view = descriptor.clone();
            if let Some(value) = content.get(descriptor.name()) {
                view.set_value(value);
            }
            (descriptor.name().to_string(), view)
        })
        .collect()
}

/// Store `new_value` for a declared property.
///
/// Returns `false`, leaving the content untouched, when `name` is not declared.
pub fn update_property(
    descriptors: &[PropertyDescriptor],
    content: &mut ContentStore,
    name: &str,
    new_value: &str,
) -> bool {
    if !descriptors.iter().any(|descriptor| descriptor.name() == name) {
        return false;
    }
    content.set(name, new_value);
    true
}
