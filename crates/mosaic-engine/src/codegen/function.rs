//! Function body compilation
//!
//! Events functions are compiled to method source by a [`FunctionBodyCompiler`].
//! The object generator only decides the names and the extra code wrapped
//! around each body.

use std::collections::BTreeSet;

use crate::project::{EventsFunction, TypeDefinition};

/// Everything a body compiler needs to emit one method
#[derive(Debug, Clone)]
pub struct FunctionCompilation<'a> {
    /// Composite type declaring the function
    pub type_definition: &'a TypeDefinition,
    /// Function to compile
    pub function: &'a EventsFunction,
    /// Namespace for per-invocation state
    pub method_namespace: String,
    /// Fully-qualified name the method is assigned to
    pub fully_qualified_name: String,
    /// Expression of the one-shot trigger storage
    pub trigger_storage: &'a str,
    /// Code run before the events
    pub prelude: &'a str,
    /// Code run after the events
    pub epilogue: &'a str,
    /// Compiling for the runtime rather than for an editor preview
    pub compiling_for_runtime: bool,
}

/// Compiles the event graph of one function into method source
pub trait FunctionBodyCompiler {
    /// Emit the method source, adding any file the code depends on to `include_files`
    fn compile(
        &self,
        compilation: &FunctionCompilation<'_>,
        include_files: &mut BTreeSet<String>,
    ) -> String;
}

/// Body compiler emitting the method shell only.
///
/// Events are not compiled: the body holds the prelude and the epilogue.
#[derive(Debug, Clone, Default)]
pub struct SkeletonBodyCompiler {
    include_files: Vec<String>,
}

impl SkeletonBodyCompiler {
    /// Create a compiler with no include files
    pub fn new() -> Self {
        Self::default()
    }

    /// Report `file` as a dependency of every compiled method
    pub fn with_include_file(mut self, file: impl Into<String>) -> Self {
        self.include_files.push(file.into());
        self
    }
}

impl FunctionBodyCompiler for SkeletonBodyCompiler {
    fn compile(
        &self,
        compilation: &FunctionCompilation<'_>,
        include_files: &mut BTreeSet<String>,
    ) -> String {
        include_files.extend(self.include_files.iter().cloned());

        let mut code = String::new();
        code.push('\n');
        code.push_str(&compilation.method_namespace);
        code.push_str(" = {};\n");
        code.push_str(&compilation.fully_qualified_name);
        code.push_str(" = function(parentEventsFunctionContext) {\n");
        code.push_str("var that = this;\n");
        if !compilation.compiling_for_runtime {
            code.push_str("// Editor preview\n");
        }
        for extra in [compilation.prelude, compilation.epilogue] {
            if extra.is_empty() {
                continue;
            }
            code.push_str(extra);
            if !extra.ends_with('\n') {
                code.push('\n');
            }
        }
        code.push_str("return;\n}\n");
        code
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn compilation<'a>(
        definition: &'a TypeDefinition,
        function: &'a EventsFunction,
        prelude: &'a str,
        epilogue: &'a str,
    ) -> FunctionCompilation<'a> {
        FunctionCompilation {
            type_definition: definition,
            function,
            method_namespace: "ns.Hero.prototype.jumpContext".to_string(),
            fully_qualified_name: "ns.Hero.prototype.jump".to_string(),
            trigger_storage: "that._onceTriggers",
            prelude,
            epilogue,
            compiling_for_runtime: true,
        }
    }

    #[test]
    fn test_skeleton_method() {
        let definition = TypeDefinition::new("Hero");
        let function = EventsFunction::new("jump");
        let mut includes = BTreeSet::new();

        let code = SkeletonBodyCompiler::new().compile(
            &compilation(&definition, &function, "", ""),
            &mut includes,
        );

        assert_eq!(
            code,
            "\nns.Hero.prototype.jumpContext = {};\n\
             ns.Hero.prototype.jump = function(parentEventsFunctionContext) {\n\
             var that = this;\n\
             return;\n}\n"
        );
        assert!(includes.is_empty());
    }

    #[test]
    fn test_prelude_before_epilogue() {
        let definition = TypeDefinition::new("Hero");
        let function = EventsFunction::new("jump");
        let mut includes = BTreeSet::new();

        let code = SkeletonBodyCompiler::new()
            .with_include_file("extensions/jump.js")
            .compile(
                &compilation(&definition, &function, "before();", "after();\n"),
                &mut includes,
            );

        let prelude = code.find("before();\n").unwrap();
        let epilogue = code.find("after();\n").unwrap();
        assert!(prelude < epilogue);
        assert!(includes.contains("extensions/jump.js"));
    }
}
