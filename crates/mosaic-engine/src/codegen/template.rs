//! Runtime class skeleton
//!
//! The generated class is a fixed sequence of text pieces and named slots.
//! Rendering concatenates pieces in order and writes each slot's fragment
//! in place, so names that look like slot markers are never rewritten.

/// A named hole in the skeleton
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    /// Namespace object holding the generated class
    CodeNamespace,
    /// Class name, also the object type name
    ClassName,
    /// Display name of the object type
    FullName,
    /// Extension declaring the object type
    ExtensionName,
    /// Property initialization statements
    InitializeProperties,
    /// Hot-reload diff statements
    UpdateFromObjectData,
    /// Property accessors
    Properties,
    /// Methods attached to the prototype
    Methods,
}

/// One element of a skeleton
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Piece {
    /// Literal text
    Text(&'static str),
    /// Fragment written at render time
    Slot(Slot),
}

use self::Piece::{Slot as S, Text as T};

/// Skeleton of a generated runtime object class
pub const RUNTIME_OBJECT_SKELETON: &[Piece] = &[
    T("\n"),
    S(Slot::CodeNamespace),
    T(" = "),
    S(Slot::CodeNamespace),
    T(" || {};\n\n/**\n * Object generated from "),
    S(Slot::FullName),
    T("\n */\n"),
    S(Slot::CodeNamespace),
    T("."),
    S(Slot::ClassName),
    T(" = class "),
    S(Slot::ClassName),
    T(" extends gdjs.CustomRuntimeObject {\n"),
    T("  constructor(runtimeScene, objectData) {\n"),
    T("    super(runtimeScene, objectData);\n"),
    T("    this._runtimeScene = runtimeScene;\n\n"),
    T("    this._onceTriggers = new gdjs.OnceTriggers();\n"),
    T("    this._behaviorData = {};\n"),
    T("    "),
    S(Slot::InitializeProperties),
    T("\n  }\n\n"),
    T("  // Hot-reload:\n"),
    T("  updateFromObjectData(oldObjectData, newObjectData) {\n"),
    T("    "),
    S(Slot::UpdateFromObjectData),
    T("\n\n    this.onHotReloading(this.getInstanceContainer());\n"),
    T("    return true;\n"),
    T("  }\n\n"),
    T("  // Properties:\n  "),
    S(Slot::Properties),
    T("\n}\n\n// Methods:\n"),
    S(Slot::Methods),
    T("\n\ngdjs.registerObject(\""),
    S(Slot::ExtensionName),
    T("::"),
    S(Slot::ClassName),
    T("\", "),
    S(Slot::CodeNamespace),
    T("."),
    S(Slot::ClassName),
    T(");\n"),
];

/// Fragments filling the slots of a skeleton
#[derive(Debug, Clone, Default)]
pub struct Fragments<'a> {
    /// Namespace object holding the generated class
    pub code_namespace: &'a str,
    /// Class name
    pub class_name: &'a str,
    /// Display name
    pub full_name: &'a str,
    /// Extension name
    pub extension_name: &'a str,
    /// Property initialization statements
    pub initialize_properties: String,
    /// Hot-reload diff statements
    pub update_from_object_data: String,
    /// Property accessors
    pub properties: String,
    /// Prototype methods
    pub methods: String,
}

impl Fragments<'_> {
    fn get(&self, slot: Slot) -> &str {
        match slot {
            Slot::CodeNamespace => self.code_namespace,
            Slot::ClassName => self.class_name,
            Slot::FullName => self.full_name,
            Slot::ExtensionName => self.extension_name,
            Slot::InitializeProperties => &self.initialize_properties,
            Slot::UpdateFromObjectData => &self.update_from_object_data,
            Slot::Properties => &self.properties,
            Slot::Methods => &self.methods,
        }
    }
}

/// Render a skeleton with its fragments
pub fn render(skeleton: &[Piece], fragments: &Fragments<'_>) -> String {
    let mut output = String::new();
    for piece in skeleton {
        match piece {
            Piece::Text(text) => output.push_str(text),
            Piece::Slot(slot) => output.push_str(fragments.get(*slot)),
        }
    }
    output
}
