//! Property descriptors
//!
//! A property descriptor is the immutable declaration of one property of a
//! composite type: its name, declared type, default value, type-specific extra
//! information, and visibility.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Declared type of a property.
///
/// Serialized with the spellings used by project files. Unrecognized
/// spellings are kept in [`PropertyType::Unknown`] so they round-trip.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PropertyType {
    /// Free text
    String,
    /// Numeric value stored as text
    Number,
    /// `"true"` / `"false"`
    Boolean,
    /// One of the values listed in the extra information
    Choice,
    /// Color stored as text (e.g. `"255;0;0"`)
    Color,
    /// Reference to a project resource; the sub-kind is the first extra-info entry
    Resource,
    /// Any other declared type
    Unknown(String),
}

impl PropertyType {
    /// The project-file spelling of this type
    pub fn as_str(&self) -> &str {
        match self {
            PropertyType::String => "String",
            PropertyType::Number => "Number",
            PropertyType::Boolean => "Boolean",
            PropertyType::Choice => "Choice",
            PropertyType::Color => "Color",
            PropertyType::Resource => "resource",
            PropertyType::Unknown(name) => name,
        }
    }
}

impl From<String> for PropertyType {
    fn from(name: String) -> Self {
        match name.as_str() {
            "String" => PropertyType::String,
            "Number" => PropertyType::Number,
            "Boolean" => PropertyType::Boolean,
            "Choice" => PropertyType::Choice,
            "Color" => PropertyType::Color,
            "resource" => PropertyType::Resource,
            _ => PropertyType::Unknown(name),
        }
    }
}

impl From<&str> for PropertyType {
    fn from(name: &str) -> Self {
        PropertyType::from(name.to_string())
    }
}

impl From<PropertyType> for String {
    fn from(ty: PropertyType) -> Self {
        match ty {
            PropertyType::Unknown(name) => name,
            other => other.as_str().to_string(),
        }
    }
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Category of a resource-typed property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ResourceKind {
    /// Image resource
    Image,
    /// Audio resource
    Audio,
    /// Font resource
    Font,
    /// Video resource
    Video,
    /// JSON resource
    Json,
    /// Bitmap font resource
    BitmapFont,
}

impl ResourceKind {
    /// All kinds, in walker callback order
    pub const ALL: [ResourceKind; 6] = [
        ResourceKind::Image,
        ResourceKind::Audio,
        ResourceKind::Font,
        ResourceKind::Video,
        ResourceKind::Json,
        ResourceKind::BitmapFont,
    ];

    /// Parse a sub-kind as written in a property's extra information
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "image" => Some(ResourceKind::Image),
            "audio" => Some(ResourceKind::Audio),
            "font" => Some(ResourceKind::Font),
            "video" => Some(ResourceKind::Video),
            "json" => Some(ResourceKind::Json),
            "bitmapFont" => Some(ResourceKind::BitmapFont),
            _ => None,
        }
    }

    /// The extra-information spelling of this kind
    pub fn as_str(self) -> &'static str {
        match self {
            ResourceKind::Image => "image",
            ResourceKind::Audio => "audio",
            ResourceKind::Font => "font",
            ResourceKind::Video => "video",
            ResourceKind::Json => "json",
            ResourceKind::BitmapFont => "bitmapFont",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Declaration of one property of a composite type.
///
/// Descriptors owned by a type definition carry the default value in `value`.
/// Descriptors returned by a configuration's property query carry the
/// instance's current value instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyDescriptor {
    name: String,
    #[serde(rename = "type")]
    property_type: PropertyType,
    #[serde(default)]
    value: String,
    #[serde(default, rename = "extraInformation")]
    extra_info: Vec<String>,
    #[serde(default)]
    hidden: bool,
}

impl PropertyDescriptor {
    /// Create a visible descriptor with an empty default value
    pub fn new(name: impl Into<String>, property_type: impl Into<PropertyType>) -> Self {
        Self {
            name: name.into(),
            property_type: property_type.into(),
            value: String::new(),
            extra_info: Vec::new(),
            hidden: false,
        }
    }

    /// Set the value
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    /// Append one extra-information entry
    pub fn with_extra_info(mut self, info: impl Into<String>) -> Self {
        self.extra_info.push(info.into());
        self
    }

    /// Mark the property as hidden from users
    pub fn hidden(mut self) -> Self {
        self.hidden = true;
        self
    }

    /// Property name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared type
    pub fn property_type(&self) -> &PropertyType {
        &self.property_type
    }

    /// Default value, or current value for a resolved property view
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Replace the value
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    /// Type-specific extra information
    pub fn extra_info(&self) -> &[String] {
        &self.extra_info
    }

    /// Whether the property is hidden from users
    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    /// Resource sub-kind, when this is a resource property with a known kind
    pub fn resource_kind(&self) -> Option<ResourceKind> {
        if self.property_type != PropertyType::Resource {
            return None;
        }
        self.extra_info
            .first()
            .and_then(|kind| ResourceKind::from_name(kind))
    }
}
