//! Type Registry
//!
//! Lookup service for composite type definitions, keyed by fully-qualified
//! type name (`<Extension>::<Object>`).

use rustc_hash::FxHashMap;

use super::definition::TypeDefinition;
use super::error::ProjectError;

/// Read-only query interface over composite type definitions.
///
/// Configurations never own a registry; it is borrowed for the duration of
/// each operation that needs to resolve a type.
pub trait TypeRegistry {
    /// Get a type definition by fully-qualified name
    fn get_type(&self, type_name: &str) -> Option<&TypeDefinition>;

    /// Check if a type is defined
    fn has_type(&self, type_name: &str) -> bool {
        self.get_type(type_name).is_some()
    }
}

/// Build the fully-qualified name of a composite type
pub fn qualified_name(extension: &str, object: &str) -> String {
    format!("{}::{}", extension, object)
}

/// A composite type registered in a project
#[derive(Debug, Clone)]
struct RegisteredType {
    extension: String,
    definition: TypeDefinition,
}

/// Composite types of one project, in declaration order
#[derive(Debug, Clone, Default)]
pub struct Project {
    types: Vec<RegisteredType>,
    /// fully-qualified name → position in `types`
    index: FxHashMap<String, usize>,
}

impl Project {
    /// Create an empty project
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a composite type under `extension`
    pub fn insert_type(
        &mut self,
        extension: impl Into<String>,
        definition: TypeDefinition,
    ) -> Result<(), ProjectError> {
        let extension = extension.into();
        let name = qualified_name(&extension, &definition.name);
        if self.index.contains_key(&name) {
            return Err(ProjectError::DuplicateType(name));
        }
        self.index.insert(name, self.types.len());
        self.types.push(RegisteredType {
            extension,
            definition,
        });
        Ok(())
    }

    /// Unregister a composite type, returning its definition
    pub fn remove_type(&mut self, type_name: &str) -> Option<TypeDefinition> {
        let position = self.index.remove(type_name)?;
        let removed = self.types.remove(position);
        self.rebuild_index();
        Some(removed.definition)
    }

    /// Get a mutable type definition by fully-qualified name
    pub fn get_type_mut(&mut self, type_name: &str) -> Option<&mut TypeDefinition> {
        let position = *self.index.get(type_name)?;
        Some(&mut self.types[position].definition)
    }

    /// Extension declaring a type
    pub fn extension_of(&self, type_name: &str) -> Option<&str> {
        let position = *self.index.get(type_name)?;
        Some(&self.types[position].extension)
    }

    /// Iterate over `(extension, definition)` pairs in declaration order
    pub fn types(&self) -> impl Iterator<Item = (&str, &TypeDefinition)> {
        self.types
            .iter()
            .map(|t| (t.extension.as_str(), &t.definition))
    }

    /// Fully-qualified names of all types, in declaration order
    pub fn type_names(&self) -> Vec<String> {
        self.types()
            .map(|(extension, definition)| qualified_name(extension, &definition.name))
            .collect()
    }

    /// Number of registered types
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Check if the project has no types
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    fn rebuild_index(&mut self) {
        self.index = self
            .types
            .iter()
            .enumerate()
            .map(|(i, t)| (qualified_name(&t.extension, &t.definition.name), i))
            .collect();
    }
}

impl TypeRegistry for Project {
    fn get_type(&self, type_name: &str) -> Option<&TypeDefinition> {
        let position = *self.index.get(type_name)?;
        Some(&self.types[position].definition)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_lookup() {
        let mut project = Project::new();
        project
            .insert_type("Platformer", TypeDefinition::new("Hero"))
            .unwrap();
        project
            .insert_type("Platformer", TypeDefinition::new("Inventory"))
            .unwrap();

        assert!(project.has_type("Platformer::Hero"));
        assert!(!project.has_type("Hero"));
        assert_eq!(project.extension_of("Platformer::Inventory"), Some("Platformer"));
        assert_eq!(
            project.type_names(),
            vec!["Platformer::Hero".to_string(), "Platformer::Inventory".to_string()]
        );
    }

    #[test]
    fn test_duplicate_type_rejected() {
        let mut project = Project::new();
        project.insert_type("Ext", TypeDefinition::new("A")).unwrap();
        let err = project.insert_type("Ext", TypeDefinition::new("A")).unwrap_err();
        assert!(matches!(err, ProjectError::DuplicateType(name) if name == "Ext::A"));
    }

    #[test]
    fn test_remove_keeps_other_lookups_valid() {
        let mut project = Project::new();
        project.insert_type("Ext", TypeDefinition::new("A")).unwrap();
        project.insert_type("Ext", TypeDefinition::new("B")).unwrap();
        project.insert_type("Ext", TypeDefinition::new("C")).unwrap();

        assert!(project.remove_type("Ext::A").is_some());
        assert!(!project.has_type("Ext::A"));
        assert_eq!(project.get_type("Ext::C").map(|t| t.name.as_str()), Some("C"));
        assert_eq!(project.len(), 2);
    }
}
