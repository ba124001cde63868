//! Object configurations
//!
//! An object configuration is the per-instance, serializable state of one
//! placed object. The set of configuration kinds is closed: composite
//! objects use [`CustomObjectConfiguration`], every other object kind is
//! carried verbatim by [`OpaqueObjectConfiguration`].

use serde_json::Value;
use std::collections::BTreeMap;

use super::custom::CustomObjectConfiguration;
use super::error::ConfigurationError;
use super::property::PropertyDescriptor;
use super::registry::TypeRegistry;
use super::resources::ResourceWalker;

/// Configuration of one object, of any kind.
///
/// Cloning is always deep: a cloned composite configuration owns clones of
/// all of its children.
#[derive(Debug, Clone)]
pub enum ObjectConfiguration {
    /// Composite object built from a type definition
    Custom(CustomObjectConfiguration),
    /// Built-in object kind handled outside this crate
    Opaque(OpaqueObjectConfiguration),
}

impl ObjectConfiguration {
    /// Create an empty composite configuration
    pub fn custom(type_name: impl Into<String>) -> Self {
        ObjectConfiguration::Custom(CustomObjectConfiguration::new(type_name))
    }

    /// Create an opaque configuration holding `content` verbatim
    pub fn opaque(type_name: impl Into<String>, content: Value) -> Self {
        ObjectConfiguration::Opaque(OpaqueObjectConfiguration::new(type_name, content))
    }

    /// Object type name
    pub fn type_name(&self) -> &str {
        match self {
            ObjectConfiguration::Custom(custom) => custom.type_name(),
            ObjectConfiguration::Opaque(opaque) => opaque.type_name(),
        }
    }

    /// Resolved property views, keyed by property name
    pub fn properties(&self, registry: &dyn TypeRegistry) -> BTreeMap<String, PropertyDescriptor> {
        match self {
            ObjectConfiguration::Custom(custom) => custom.properties(registry),
            ObjectConfiguration::Opaque(_) => BTreeMap::new(),
        }
    }

    /// Store a new property value; returns whether the property was accepted
    pub fn update_property(
        &mut self,
        registry: &dyn TypeRegistry,
        name: &str,
        new_value: &str,
    ) -> bool {
        match self {
            ObjectConfiguration::Custom(custom) => {
                custom.update_property(registry, name, new_value)
            }
            ObjectConfiguration::Opaque(_) => false,
        }
    }

    /// Serialize to a configuration tree
    pub fn serialize(&self) -> Value {
        match self {
            ObjectConfiguration::Custom(custom) => custom.serialize(),
            ObjectConfiguration::Opaque(opaque) => opaque.serialize(),
        }
    }

    /// Load state from a configuration tree
    pub fn deserialize(
        &mut self,
        registry: &dyn TypeRegistry,
        element: &Value,
    ) -> Result<(), ConfigurationError> {
        match self {
            ObjectConfiguration::Custom(custom) => custom.deserialize(registry, element),
            ObjectConfiguration::Opaque(opaque) => {
                opaque.deserialize(element);
                Ok(())
            }
        }
    }

    /// Visit every resource referenced by this configuration and its children
    pub fn expose_resources(
        &mut self,
        registry: &dyn TypeRegistry,
        walker: &mut dyn ResourceWalker,
    ) {
        match self {
            ObjectConfiguration::Custom(custom) => custom.expose_resources(registry, walker),
            ObjectConfiguration::Opaque(_) => {}
        }
    }

    /// Borrow as a composite configuration
    pub fn as_custom(&self) -> Option<&CustomObjectConfiguration> {
        match self {
            ObjectConfiguration::Custom(custom) => Some(custom),
            ObjectConfiguration::Opaque(_) => None,
        }
    }

    /// Mutably borrow as a composite configuration
    pub fn as_custom_mut(&mut self) -> Option<&mut CustomObjectConfiguration> {
        match self {
            ObjectConfiguration::Custom(custom) => Some(custom),
            ObjectConfiguration::Opaque(_) => None,
        }
    }
}

impl From<CustomObjectConfiguration> for ObjectConfiguration {
    fn from(custom: CustomObjectConfiguration) -> Self {
        ObjectConfiguration::Custom(custom)
    }
}

/// Configuration of an object kind this crate does not interpret.
///
/// Exposes no properties and no resources; serializes back exactly the tree
/// it was given.
#[derive(Debug, Clone, PartialEq)]
pub struct OpaqueObjectConfiguration {
    type_name: String,
    content: Value,
}

impl OpaqueObjectConfiguration {
    /// Create an opaque configuration
    pub fn new(type_name: impl Into<String>, content: Value) -> Self {
        Self {
            type_name: type_name.into(),
            content,
        }
    }

    /// Object type name
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// Stored tree
    pub fn content(&self) -> &Value {
        &self.content
    }

    fn serialize(&self) -> Value {
        self.content.clone()
    }

    fn deserialize(&mut self, element: &Value) {
        self.content = element.clone();
    }
}
