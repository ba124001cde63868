//! Composite object configuration
//!
//! The configuration of a placed composite object owns a content store and
//! one configuration per child object. Child configurations are created
//! lazily: the first lookup of a declared child clones the default
//! configuration from the type definition, later lookups return that same
//! instance.
//!
//! The type definition lives in a separately-stored registry and can drift:
//! the type may be missing, and children may be renamed or removed. Every
//! operation degrades softly in those cases.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

use super::configuration::ObjectConfiguration;
use super::content::ContentStore;
use super::error::ConfigurationError;
use super::helper;
use super::property::{PropertyDescriptor, PropertyType};
use super::registry::TypeRegistry;
use super::resources::ResourceWalker;

/// Serialized shape of a composite configuration
#[derive(Debug, Default, Serialize, Deserialize)]
struct SerializedCustomConfiguration {
    #[serde(default)]
    content: ContentStore,
    #[serde(default, rename = "childrenContent")]
    children_content: BTreeMap<String, Value>,
}

/// Configuration of one placed composite object
#[derive(Debug, Clone, Default)]
pub struct CustomObjectConfiguration {
    /// Fully-qualified composite type name
    type_name: String,
    content: ContentStore,
    /// Materialized children; only ever holds children declared by the type
    children: BTreeMap<String, Box<ObjectConfiguration>>,
    /// Child trees loaded while the type could not be resolved
    stale_children: BTreeMap<String, Value>,
}

impl CustomObjectConfiguration {
    /// Create an empty configuration for a composite type
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            ..Self::default()
        }
    }

    /// Fully-qualified composite type name
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// Stored property values
    pub fn content(&self) -> &ContentStore {
        &self.content
    }

    /// Names of the children materialized so far
    pub fn materialized_children(&self) -> impl Iterator<Item = &str> {
        self.children.keys().map(String::as_str)
    }

    /// Names of child trees kept aside because the type was unresolved
    pub fn stale_children(&self) -> impl Iterator<Item = &str> {
        self.stale_children.keys().map(String::as_str)
    }

    /// Get an already materialized child, without creating it
    pub fn child_configuration(&self, name: &str) -> Option<&ObjectConfiguration> {
        self.children.get(name).map(|child| &**child)
    }

    /// Get the configuration of a declared child, materializing it on first access.
    ///
    /// Fails when the type cannot be resolved or does not declare `name`; the
    /// failure is reported as a warning and nothing is created.
    pub fn child_configuration_mut(
        &mut self,
        registry: &dyn TypeRegistry,
        name: &str,
    ) -> Result<&mut ObjectConfiguration, ConfigurationError> {
        match self.materialize_child(registry, name) {
            Ok(child) => Ok(child),
            Err(err) => {
                tracing::warn!("{}", err);
                Err(err)
            }
        }
    }

    fn materialize_child(
        &mut self,
        registry: &dyn TypeRegistry,
        name: &str,
    ) -> Result<&mut ObjectConfiguration, ConfigurationError> {
        let definition = registry
            .get_type(&self.type_name)
            .ok_or_else(|| ConfigurationError::UnresolvedType(self.type_name.clone()))?;
        let declared = definition
            .child(name)
            .ok_or_else(|| ConfigurationError::UnknownChild {
                type_name: self.type_name.clone(),
                child: name.to_string(),
            })?;

        match self.children.entry(name.to_string()) {
            Entry::Occupied(entry) => Ok(&mut **entry.into_mut()),
            Entry::Vacant(entry) => {
                let mut configuration = declared.configuration.clone();
                if let Some(stale) = self.stale_children.remove(name) {
                    if let Err(err) = configuration.deserialize(registry, &stale) {
                        tracing::debug!("Dropping stale tree of child {}: {}", name, err);
                    }
                }
                Ok(&mut **entry.insert(Box::new(configuration)))
            }
        }
    }

    /// Resolved property views; empty when the type cannot be resolved
    pub fn properties(&self, registry: &dyn TypeRegistry) -> BTreeMap<String, PropertyDescriptor> {
        match registry.get_type(&self.type_name) {
            Some(definition) => helper::properties(&definition.properties, &self.content),
            None => BTreeMap::new(),
        }
    }

    /// Store a new value for a declared property.
    ///
    /// Returns `false` when the type cannot be resolved or does not declare
    /// the property. The value is stored as given, without coercion.
    pub fn update_property(
        &mut self,
        registry: &dyn TypeRegistry,
        name: &str,
        new_value: &str,
    ) -> bool {
        match registry.get_type(&self.type_name) {
            Some(definition) => {
                helper::update_property(&definition.properties, &mut self.content, name, new_value)
            }
            None => false,
        }
    }

    /// Serialize the content and every materialized child.
    ///
    /// Children never accessed are absent, so they keep following their
    /// type's defaults.
    pub fn serialize(&self) -> Value {
        let mut children_content: Map<String, Value> = self
            .stale_children
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();
        for (name, child) in &self.children {
            children_content.insert(name.clone(), child.serialize());
        }

        let mut element = Map::new();
        element.insert("content".to_string(), self.content.to_value());
        element.insert("childrenContent".to_string(), Value::Object(children_content));
        Value::Object(element)
    }

    /// Load content and child trees.
    ///
    /// Each child tree is deserialized into the child materialized through
    /// the same path as [`Self::child_configuration_mut`]. Trees of children
    /// the type no longer declares are ignored. When the type itself cannot
    /// be resolved, child trees are kept aside untouched until it can.
    ///
    /// On error the configuration is left as it was before the call.
    pub fn deserialize(
        &mut self,
        registry: &dyn TypeRegistry,
        element: &Value,
    ) -> Result<(), ConfigurationError> {
        let mut loaded = self.clone();
        loaded.load(registry, element)?;
        *self = loaded;
        Ok(())
    }

    fn load(
        &mut self,
        registry: &dyn TypeRegistry,
        element: &Value,
    ) -> Result<(), ConfigurationError> {
        let serialized = SerializedCustomConfiguration::deserialize(element)?;
        self.content = serialized.content;
        self.stale_children.clear();

        if !registry.has_type(&self.type_name) {
            tracing::debug!(
                "Keeping {} child trees of unresolved type {}",
                serialized.children_content.len(),
                self.type_name
            );
            self.stale_children = serialized.children_content;
            return Ok(());
        }

        for (name, child_element) in &serialized.children_content {
            match self.materialize_child(registry, name) {
                Ok(child) => child.deserialize(registry, child_element)?,
                Err(err) => tracing::debug!("Ignoring serialized child: {}", err),
            }
        }
        Ok(())
    }

    /// Visit resource properties of this configuration, then of every declared child.
    ///
    /// A name rewritten by the walker is stored back as the property value.
    /// Every declared child is visited, materializing it if needed.
    pub fn expose_resources(
        &mut self,
        registry: &dyn TypeRegistry,
        walker: &mut dyn ResourceWalker,
    ) {
        let properties = self.properties(registry);
        for (name, property) in &properties {
            if property.property_type() != &PropertyType::Resource {
                continue;
            }
            let Some(kind) = property.resource_kind() else {
                tracing::debug!("Resource property {} has no known resource kind", name);
                continue;
            };

            let old_value = property.value();
            let new_value = walker.expose(kind, old_value);
            if new_value != old_value {
                self.update_property(registry, name, &new_value);
            }
        }

        let Some(definition) = registry.get_type(&self.type_name) else {
            return;
        };
        for declared in &definition.objects {
            if let Ok(child) = self.child_configuration_mut(registry, &declared.name) {
                child.expose_resources(registry, walker);
            }
        }
    }
}
