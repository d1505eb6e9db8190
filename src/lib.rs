pub mod language;
pub mod tools;

pub use language::{
    ast::{Expression, Literal, Traverser},
    builtins::BuiltinRegistry,
    call::{check_call, CallCheckOptions, CallResolution},
    errors::{Diagnostic, Diagnostics, SignatureError},
    function::{Function, SyntaxNode},
    signature::{DependentSignature, FunctionSignature, Parameter, StaticFunctionSignature},
    span::Span,
    types::Type,
};
