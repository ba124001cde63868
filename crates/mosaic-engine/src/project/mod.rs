//! Composite object types and their configurations
//!
//! This module provides:
//! - Property descriptors and the flat content store backing property values
//! - The type registry interface and a project-backed implementation
//! - Object configurations, including the recursive composite configuration
//! - Resource walking over a configuration tree

mod configuration;
mod content;
mod custom;
mod definition;
mod error;
pub mod helper;
mod loader;
mod property;
mod registry;
mod resources;

pub use configuration::{ObjectConfiguration, OpaqueObjectConfiguration};
pub use content::ContentStore;
pub use custom::CustomObjectConfiguration;
pub use definition::{ChildObject, EventsFunction, TypeDefinition};
pub use error::{ConfigurationError, ProjectError};
pub use property::{PropertyDescriptor, PropertyType, ResourceKind};
pub use registry::{qualified_name, Project, TypeRegistry};
pub use resources::{ResourceCollector, ResourceRenamer, ResourceWalker};
