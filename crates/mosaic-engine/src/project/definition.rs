//! Composite type definitions
//!
//! The declarative description of a composite object type: its properties,
//! its named child objects with their default configurations, and its
//! user-authored events functions.

use serde::{Deserialize, Serialize};

use super::configuration::ObjectConfiguration;
use super::property::PropertyDescriptor;

/// A child object declared by a composite type
#[derive(Debug, Clone)]
pub struct ChildObject {
    /// Child name, unique within its parent type
    pub name: String,
    /// Default configuration cloned into each placed instance on first access
    pub configuration: ObjectConfiguration,
}

impl ChildObject {
    /// Create a child declaration
    pub fn new(name: impl Into<String>, configuration: ObjectConfiguration) -> Self {
        Self {
            name: name.into(),
            configuration,
        }
    }
}

/// A user-authored events function of a composite type.
///
/// The event graph is opaque to this crate and handed to the function body
/// compiler untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventsFunction {
    /// Logical function name
    pub name: String,
    /// Display name
    #[serde(default, rename = "fullName")]
    pub full_name: String,
    /// Event graph
    #[serde(default)]
    pub events: serde_json::Value,
}

impl EventsFunction {
    /// Create a function with an empty event graph
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            full_name: String::new(),
            events: serde_json::Value::Array(Vec::new()),
        }
    }
}

/// Definition of one composite object type
#[derive(Debug, Clone, Default)]
pub struct TypeDefinition {
    /// Type name, also the generated class name
    pub name: String,
    /// Display name
    pub full_name: String,
    /// Declared properties, in declaration order
    pub properties: Vec<PropertyDescriptor>,
    /// Declared child objects, in declaration order
    pub objects: Vec<ChildObject>,
    /// Declared events functions, in declaration order
    pub functions: Vec<EventsFunction>,
}

impl TypeDefinition {
    /// Create an empty definition
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Set the display name
    pub fn with_full_name(mut self, full_name: impl Into<String>) -> Self {
        self.full_name = full_name.into();
        self
    }

    /// Declare a property
    pub fn with_property(mut self, property: PropertyDescriptor) -> Self {
        self.properties.push(property);
        self
    }

    /// Declare a child object
    pub fn with_child(mut self, child: ChildObject) -> Self {
        self.objects.push(child);
        self
    }

    /// Declare an events function
    pub fn with_function(mut self, function: EventsFunction) -> Self {
        self.functions.push(function);
        self
    }

    /// Look up a declared property
    pub fn property(&self, name: &str) -> Option<&PropertyDescriptor> {
        self.properties.iter().find(|p| p.name() == name)
    }

    /// Look up a declared child object
    pub fn child(&self, name: &str) -> Option<&ChildObject> {
        self.objects.iter().find(|c| c.name == name)
    }

    /// Check if a child object is declared
    pub fn has_child(&self, name: &str) -> bool {
        self.child(name).is_some()
    }

    /// Look up a declared events function
    pub fn function(&self, name: &str) -> Option<&EventsFunction> {
        self.functions.iter().find(|f| f.name == name)
    }

    /// Check if an events function is declared
    pub fn has_function(&self, name: &str) -> bool {
        self.function(name).is_some()
    }

    /// Remove a child declaration, returning it
    pub fn remove_child(&mut self, name: &str) -> Option<ChildObject> {
        let index = self.objects.iter().position(|c| c.name == name)?;
        Some(self.objects.remove(index))
    }
}
