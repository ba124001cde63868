//! Object Code Generator
//!
//! Generates the runtime class of one composite object type: property
//! initialization, accessors, the hot-reload diff and one prototype method
//! per events function.

use rustc_hash::FxHashMap;
use std::collections::BTreeSet;

use super::function::{FunctionBodyCompiler, FunctionCompilation};
use super::literal::property_value_code;
use super::template::{render, Fragments, RUNTIME_OBJECT_SKELETON};
use crate::project::{PropertyDescriptor, TypeDefinition};

/// Logical function name → generated method identifier
pub type MethodNames = FxHashMap<String, String>;

/// Creation hook, its method also calls the base class hook
pub const ON_CREATED: &str = "onCreated";

/// Per-frame hook run before the events of the scene
pub const DO_STEP_PRE_EVENTS: &str = "doStepPreEvents";

/// Identifier emitted for functions missing from the method names
pub const UNKNOWN_FUNCTION_NAME: &str = "UNKNOWN_FUNCTION_fix_objectMethodMangledNames_please";

const TRIGGER_STORAGE: &str = "that._onceTriggers";
const ON_CREATED_EPILOGUE: &str = "gdjs.CustomRuntimeObject.prototype.onCreated.call(this);\n";
const DO_STEP_PRE_EVENTS_PRELUDE: &str = "this._onceTriggers.startNewFrame();";

/// Method identifiers equal to the logical function names
pub fn identity_method_names(definition: &TypeDefinition) -> MethodNames {
    definition
        .functions
        .iter()
        .map(|function| (function.name.clone(), function.name.clone()))
        .collect()
}

/// Inputs of one generation
#[derive(Debug, Clone, Copy)]
pub struct ObjectCodeGenerationRequest<'a> {
    /// Extension declaring the type, used for registration
    pub extension_name: &'a str,
    /// Type to generate
    pub type_definition: &'a TypeDefinition,
    /// Namespace object holding the generated class
    pub code_namespace: &'a str,
    /// Generated identifier of each function
    pub method_names: &'a MethodNames,
    /// Compiling for the runtime rather than for an editor preview
    pub compiling_for_runtime: bool,
}

/// Output of one generation
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GeneratedObjectCode {
    /// Source of the runtime class and its methods
    pub code: String,
    /// Files the generated methods depend on
    pub include_files: BTreeSet<String>,
}

/// Generator of runtime object classes.
///
/// Holds no state between generations: identical requests produce identical
/// output.
pub struct ObjectCodeGenerator<'c> {
    compiler: &'c dyn FunctionBodyCompiler,
}

impl<'c> ObjectCodeGenerator<'c> {
    /// Create a generator compiling method bodies with `compiler`
    pub fn new(compiler: &'c dyn FunctionBodyCompiler) -> Self {
        Self { compiler }
    }

    /// Name of the getter generated for a property
    pub fn getter_name(property_name: &str) -> String {
        format!("_get{}", property_name)
    }

    /// Name of the setter generated for a property
    pub fn setter_name(property_name: &str) -> String {
        format!("_set{}", property_name)
    }

    /// Generate the complete runtime source of a composite type
    pub fn generate(&self, request: &ObjectCodeGenerationRequest<'_>) -> GeneratedObjectCode {
        let definition = request.type_definition;
        let mut include_files = BTreeSet::new();

        let fragments = Fragments {
            code_namespace: request.code_namespace,
            class_name: &definition.name,
            full_name: &definition.full_name,
            extension_name: request.extension_name,
            initialize_properties: Self::initialize_properties_code(&definition.properties),
            update_from_object_data: Self::update_from_object_data_code(&definition.properties),
            properties: Self::properties_code(&definition.properties),
            methods: self.methods_code(request, &mut include_files),
        };

        tracing::debug!(
            "Generated runtime object {} with {} methods",
            definition.name,
            definition.functions.len()
        );

        GeneratedObjectCode {
            code: render(RUNTIME_OBJECT_SKELETON, &fragments),
            include_files,
        }
    }

    // =========================================================================
    // Properties
    // =========================================================================

    fn initialize_properties_code(properties: &[PropertyDescriptor]) -> String {
        properties
            .iter()
            .map(|property| {
                if property.is_hidden() {
                    Self::initialize_from_default_code(property)
                } else {
                    Self::initialize_from_data_code(property)
                }
            })
            .collect()
    }

    fn initialize_from_data_code(property: &PropertyDescriptor) -> String {
        let name = property.name();
        format!(
            "\n    this._objectData.content.{name} = objectData.content.{name} !== undefined ? objectData.content.{name} : {default};",
            name = name,
            default = property_value_code(property),
        )
    }

    fn initialize_from_default_code(property: &PropertyDescriptor) -> String {
        format!(
            "\n    this._objectData.content.{} = {};",
            property.name(),
            property_value_code(property)
        )
    }

    fn properties_code(properties: &[PropertyDescriptor]) -> String {
        properties.iter().map(Self::accessors_code).collect()
    }

    fn accessors_code(property: &PropertyDescriptor) -> String {
        let name = property.name();
        format!(
            "\n  {getter}() {{\n    return this._objectData.content.{name} !== undefined ? this._objectData.content.{name} : {default};\n  }}\n  {setter}(newValue) {{\n    this._objectData.content.{name} = newValue;\n  }}",
            getter = Self::getter_name(name),
            setter = Self::setter_name(name),
            name = name,
            default = property_value_code(property),
        )
    }

    fn update_from_object_data_code(properties: &[PropertyDescriptor]) -> String {
        let mut code = String::from("super.updateFromObjectData(oldObjectData, newObjectData);");
        for property in properties {
            code.push_str(&format!(
                "\n    if (oldObjectData.content.{name} !== newObjectData.content.{name})\n      this._objectData.content.{name} = newObjectData.content.{name};",
                name = property.name()
            ));
        }
        code
    }

    // =========================================================================
    // Methods
    // =========================================================================

    fn methods_code(
        &self,
        request: &ObjectCodeGenerationRequest<'_>,
        include_files: &mut BTreeSet<String>,
    ) -> String {
        let definition = request.type_definition;
        let class_path = format!("{}.{}", request.code_namespace, definition.name);
        let mut code = String::new();

        for function in &definition.functions {
            let method_name = match request.method_names.get(&function.name) {
                Some(name) => name.as_str(),
                None => {
                    tracing::warn!(
                        "No method name for function {} of {}",
                        function.name,
                        definition.name
                    );
                    UNKNOWN_FUNCTION_NAME
                }
            };

            let compilation = FunctionCompilation {
                type_definition: definition,
                function,
                method_namespace: format!("{}.prototype.{}Context", class_path, method_name),
                fully_qualified_name: format!("{}.prototype.{}", class_path, method_name),
                trigger_storage: TRIGGER_STORAGE,
                prelude: if function.name == DO_STEP_PRE_EVENTS {
                    DO_STEP_PRE_EVENTS_PRELUDE
                } else {
                    ""
                },
                epilogue: if function.name == ON_CREATED {
                    ON_CREATED_EPILOGUE
                } else {
                    ""
                },
                compiling_for_runtime: request.compiling_for_runtime,
            };
            code.push_str(&self.compiler.compile(&compilation, include_files));
        }

        if !definition.has_function(DO_STEP_PRE_EVENTS) {
            code.push_str(&format!(
                "\n{}.prototype.{} = function() {{\n  {}\n}};\n",
                class_path, DO_STEP_PRE_EVENTS, DO_STEP_PRE_EVENTS_PRELUDE
            ));
        }

        code
    }
}
