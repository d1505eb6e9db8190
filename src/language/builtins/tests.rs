use super::*;
use crate::language::{ast::Literal, span::Span};

fn resolve(name: &str, arguments: &[Expression]) -> (StaticFunctionSignature, Diagnostics) {
    BuiltinRegistry::new()
        .lookup(name)
        .unwrap_or_else(|| panic!("builtin `{name}`"))
        .get_signature(arguments)
}

#[test]
fn lookup_is_exact_and_case_sensitive() {
    let registry = BuiltinRegistry::new();
    for name in ["fileAsset", "mimeType", "toJSON"] {
        let function = registry.lookup(name).expect("builtin");
        assert_eq!(function.name(), name);
    }
    assert!(registry.lookup("unknownFn").is_none());
    assert!(registry.lookup("tojson").is_none());
    assert!(registry.lookup("FileAsset").is_none());
    assert!(!registry.contains(""));
}

#[test]
fn names_are_sorted() {
    let registry = BuiltinRegistry::new();
    assert_eq!(
        registry.names(),
        vec![
            "convert",
            "element",
            "fileArchive",
            "fileAsset",
            "mimeType",
            "readFile",
            "secret",
            "toJSON"
        ]
    );
    let iterated: Vec<&str> = registry.iter().map(Function::name).collect();
    assert_eq!(iterated, registry.names());
    assert_eq!(registry.len(), 8);
}

#[test]
fn global_registry_is_shared() {
    let first = BuiltinRegistry::global() as *const BuiltinRegistry;
    let second = BuiltinRegistry::global() as *const BuiltinRegistry;
    assert_eq!(first, second);
    assert!(BuiltinRegistry::global().contains("toJSON"));
}

#[test]
fn spec_builtins_are_static() {
    let registry = BuiltinRegistry::new();
    for name in ["fileAsset", "mimeType", "toJSON", "fileArchive", "readFile"] {
        let function = registry.lookup(name).expect("builtin");
        assert!(!function.signature().is_dependent(), "{name} should be static");
    }
    for name in ["element", "secret", "convert"] {
        let function = registry.lookup(name).expect("builtin");
        assert!(function.signature().is_dependent(), "{name} should be dependent");
    }
}

#[test]
fn mime_type_takes_a_path() {
    let (signature, diagnostics) = resolve("mimeType", &[Expression::string("a.png", Span::new(9, 16))]);
    assert!(diagnostics.is_empty());
    assert_eq!(signature.to_string(), "(path string) -> asset");
}

#[test]
fn element_returns_list_element_type() {
    let arguments = [
        Expression::typed(Type::list(Type::String), Span::new(8, 13)),
        Expression::literal(Literal::Number(0), Span::new(15, 16)),
    ];
    let (signature, diagnostics) = resolve("element", &arguments);
    assert!(diagnostics.is_empty());
    assert_eq!(signature.return_type(), &Type::String);
    assert_eq!(signature.parameters()[0].ty(), &Type::list(Type::String));

    let dynamic = [
        Expression::typed(Type::Any, Span::new(8, 13)),
        Expression::typed(Type::Number, Span::new(15, 16)),
    ];
    let (signature, diagnostics) = resolve("element", &dynamic);
    assert!(diagnostics.is_empty());
    assert_eq!(signature.return_type(), &Type::Any);
}

#[test]
fn element_rejects_non_lists() {
    let arguments = [
        Expression::typed(Type::Asset, Span::new(8, 13)),
        Expression::literal(Literal::Number(0), Span::new(15, 16)),
    ];
    let (signature, diagnostics) = resolve("element", &arguments);
    assert_eq!(signature, StaticFunctionSignature::unresolved());
    let diag = diagnostics.iter().next().expect("diagnostic");
    assert_eq!(diag.span, Span::new(8, 13));
    assert_eq!(diag.message, "argument `list` expects `list(any)`, found `asset`");
}

#[test]
fn element_reports_missing_index() {
    let (_, diagnostics) =
        resolve("element", &[Expression::typed(Type::list(Type::Bool), Span::new(8, 13))]);
    assert_eq!(diagnostics.len(), 1);
    let diag = diagnostics.iter().next().expect("diagnostic");
    assert_eq!(
        diag.message,
        "missing required argument `index` in call to `element`"
    );
}

#[test]
fn secret_keeps_argument_type() {
    let (signature, diagnostics) =
        resolve("secret", &[Expression::typed(Type::map(Type::Number), Span::new(7, 12))]);
    assert!(diagnostics.is_empty());
    assert_eq!(signature.return_type(), &Type::map(Type::Number));
}

#[test]
fn convert_reads_type_from_literal() {
    let arguments = [
        Expression::typed(Type::Any, Span::new(8, 9)),
        Expression::string("asset", Span::new(11, 18)),
    ];
    let (signature, diagnostics) = resolve("convert", &arguments);
    assert!(diagnostics.is_empty());
    assert_eq!(signature.return_type(), &Type::Asset);
}

#[test]
fn convert_diagnoses_bad_type_arguments() {
    let cases = [
        (
            Expression::string("widget", Span::new(11, 19)),
            "unknown type name `widget`",
        ),
        (
            Expression::literal(Literal::Bool(true), Span::new(11, 15)),
            "argument `type` must be a string literal, found a bool literal",
        ),
        (
            Expression::typed(Type::String, Span::new(11, 15)),
            "argument `type` must be a string literal",
        ),
    ];
    for (type_argument, message) in cases {
        let span = type_argument.span();
        let arguments = [Expression::typed(Type::Any, Span::new(8, 9)), type_argument];
        let (signature, diagnostics) = resolve("convert", &arguments);
        assert_eq!(signature, StaticFunctionSignature::unresolved());
        assert_eq!(diagnostics.len(), 1);
        let diag = diagnostics.iter().next().expect("diagnostic");
        assert_eq!(diag.message, message);
        assert_eq!(diag.span, span);
    }
}

#[test]
fn convert_diagnoses_extra_arguments() {
    let arguments = [
        Expression::typed(Type::Any, Span::new(8, 9)),
        Expression::string("bool", Span::new(11, 17)),
        Expression::string("extra", Span::new(19, 26)),
    ];
    let (_, diagnostics) = resolve("convert", &arguments);
    assert_eq!(diagnostics.len(), 1);
    let diag = diagnostics.iter().next().expect("diagnostic");
    assert_eq!(diag.span, Span::new(19, 26));
    assert_eq!(diag.code.as_deref(), Some("E0602"));
}
