//! Runtime code generation for composite object types
//!
//! # Pipeline
//!
//! ```text
//! TypeDefinition → ObjectCodeGenerator → runtime class source
//!                        ↓
//!               FunctionBodyCompiler (one call per events function)
//! ```
//!
//! The generated class is assembled by writing fragments into the named
//! slots of a fixed skeleton (see [`template`]).

mod function;
pub mod literal;
mod object;
pub mod template;

pub use function::{FunctionBodyCompiler, FunctionCompilation, SkeletonBodyCompiler};
pub use object::{
    identity_method_names, GeneratedObjectCode, MethodNames, ObjectCodeGenerationRequest,
    ObjectCodeGenerator, DO_STEP_PRE_EVENTS, ON_CREATED, UNKNOWN_FUNCTION_NAME,
};
