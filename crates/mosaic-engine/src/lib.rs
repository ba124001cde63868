//! Mosaic Engine
//!
//! This crate provides the two halves of composite ("custom") object support:
//! - **Project**: type definitions, property descriptors, and the recursive,
//!   serializable configuration tree of a placed composite object (`project` module)
//! - **Codegen**: the generator that turns a composite type definition into the
//!   source of its runtime class (`codegen` module)
//!
//! # Example
//!
//! ```rust,ignore
//! use mosaic_engine::{CustomObjectConfiguration, Project};
//!
//! let project = Project::from_json(&std::fs::read_to_string("game.json")?)?;
//!
//! let mut config = CustomObjectConfiguration::new("Platformer::Hero");
//! config.update_property(&project, "speed", "42");
//! let tree = config.serialize();
//! ```

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]

// ============================================================================
// Core Modules
// ============================================================================

/// Project module: type definitions, configuration tree, and resource walking
pub mod project;

/// Codegen module: runtime object source generation
pub mod codegen;

// ============================================================================
// Re-exports
// ============================================================================

pub use project::{
    qualified_name, ChildObject, ConfigurationError, ContentStore, CustomObjectConfiguration,
    EventsFunction, ObjectConfiguration, OpaqueObjectConfiguration, Project, ProjectError,
    PropertyDescriptor, PropertyType, ResourceCollector, ResourceKind, ResourceRenamer,
    ResourceWalker, TypeDefinition, TypeRegistry,
};

pub use codegen::{
    identity_method_names, FunctionBodyCompiler, FunctionCompilation, GeneratedObjectCode,
    MethodNames, ObjectCodeGenerationRequest, ObjectCodeGenerator, SkeletonBodyCompiler,
};
