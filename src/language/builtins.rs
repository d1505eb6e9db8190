use crate::language::{
    ast::Expression,
    errors::{Diagnostics, SignatureError},
    function::Function,
    signature::{
        expect_arity, expect_string_literal, FunctionSignature, Parameter,
        StaticFunctionSignature,
    },
    types::Type,
};
use std::{
    collections::{BTreeMap, HashMap},
    sync::OnceLock,
};

/// The built-in functions, keyed by their exact name.
///
/// Built once and read-only afterwards, so it can be shared between checker
/// workers without locking.
#[derive(Debug)]
pub struct BuiltinRegistry {
    functions: HashMap<String, Function>,
}

impl BuiltinRegistry {
    pub fn new() -> Self {
        let functions: HashMap<String, Function> = builtin_functions()
            .into_iter()
            .map(|function| (function.name().to_string(), function))
            .collect();
        tracing::debug!(count = functions.len(), "built-in function registry ready");
        Self { functions }
    }

    /// Process-wide registry, built on first use.
    pub fn global() -> &'static BuiltinRegistry {
        static REGISTRY: OnceLock<BuiltinRegistry> = OnceLock::new();
        REGISTRY.get_or_init(BuiltinRegistry::new)
    }

    /// Exact, case-sensitive lookup. A miss is not an error here.
    pub fn lookup(&self, name: &str) -> Option<&Function> {
        self.functions.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.functions.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.functions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }

    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.functions.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Functions in name order.
    pub fn iter(&self) -> impl Iterator<Item = &Function> {
        self.functions
            .iter()
            .collect::<BTreeMap<_, _>>()
            .into_values()
    }
}

impl Default for BuiltinRegistry {
    fn default() -> Self {
        Self::new()
    }
}

fn unary(name: &str, parameter: &str, ty: Type, returns: Type) -> Function {
    Function::new(
        name,
        StaticFunctionSignature::new(vec![Parameter::new(parameter, ty)], returns),
    )
}

fn builtin_functions() -> Vec<Function> {
    vec![
        unary("fileAsset", "path", Type::String, Type::Asset),
        unary("mimeType", "path", Type::String, Type::Asset),
        unary("toJSON", "value", Type::Any, Type::String),
        unary("fileArchive", "path", Type::String, Type::Archive),
        unary("readFile", "path", Type::String, Type::String),
        Function::new(
            "element",
            FunctionSignature::dependent("element type of list", element_signature),
        ),
        Function::new(
            "secret",
            FunctionSignature::dependent("type of wrapped value", secret_signature),
        ),
        Function::new(
            "convert",
            FunctionSignature::dependent("type named by literal", convert_signature),
        ),
    ]
}

fn unresolved(diagnostics: Diagnostics) -> (StaticFunctionSignature, Diagnostics) {
    (StaticFunctionSignature::unresolved(), diagnostics)
}

/// `element(list, index)` returns the element type of `list`.
fn element_signature(arguments: &[Expression]) -> (StaticFunctionSignature, Diagnostics) {
    if let Err(diagnostics) = expect_arity("element", arguments, &["list", "index"], Some(2)) {
        return unresolved(diagnostics);
    }
    let list = &arguments[0];
    let element = match list.static_type() {
        Type::List(element) => element.as_ref().clone(),
        Type::Any => Type::Any,
        other => {
            let diagnostic = SignatureError::ArgumentTypeMismatch {
                parameter: "list".into(),
                expected: Type::list(Type::Any),
                found: other.clone(),
            }
            .into_diagnostic(list.span());
            return unresolved(diagnostic.into());
        }
    };
    (
        StaticFunctionSignature::new(
            vec![
                Parameter::new("list", Type::list(element.clone())),
                Parameter::new("index", Type::Number),
            ],
            element,
        ),
        Diagnostics::new(),
    )
}

/// `secret(value)` has the type of its argument.
fn secret_signature(arguments: &[Expression]) -> (StaticFunctionSignature, Diagnostics) {
    if let Err(diagnostics) = expect_arity("secret", arguments, &["value"], Some(1)) {
        return unresolved(diagnostics);
    }
    let ty = arguments[0].static_type().clone();
    (
        StaticFunctionSignature::new(vec![Parameter::new("value", ty.clone())], ty),
        Diagnostics::new(),
    )
}

/// `convert(value, "type")` has the type named by its second argument.
fn convert_signature(arguments: &[Expression]) -> (StaticFunctionSignature, Diagnostics) {
    if let Err(diagnostics) = expect_arity("convert", arguments, &["value", "type"], Some(2)) {
        return unresolved(diagnostics);
    }
    let type_argument = &arguments[1];
    let name = match expect_string_literal(type_argument, "type") {
        Ok(name) => name,
        Err(diagnostic) => return unresolved(diagnostic.into()),
    };
    let Some(target) = Type::from_name(name) else {
        let diagnostic = SignatureError::UnknownTypeName {
            name: name.to_string(),
        }
        .into_diagnostic(type_argument.span());
        return unresolved(diagnostic.into());
    };
    (
        StaticFunctionSignature::new(
            vec![
                Parameter::new("value", Type::Any),
                Parameter::new("type", Type::String),
            ],
            target,
        ),
        Diagnostics::new(),
    )
}

#[cfg(test)]
mod tests;
