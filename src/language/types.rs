use std::fmt;

/// A type handle as seen by signature resolution.
///
/// Handles are compared by value; this crate never looks inside a type beyond
/// the container shapes that dependent built-ins need to compute element types.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Type {
    /// The generic type. Accepts, and is accepted by, every other type.
    Any,
    Bool,
    Number,
    String,
    Asset,
    Archive,
    List(Box<Type>),
    Map(Box<Type>),
}

impl Type {
    pub fn list(element: Type) -> Self {
        Type::List(Box::new(element))
    }

    pub fn map(element: Type) -> Self {
        Type::Map(Box::new(element))
    }

    /// Parses a primitive or domain type from its canonical name.
    pub fn from_name(name: &str) -> Option<Type> {
        match name {
            "any" => Some(Type::Any),
            "bool" => Some(Type::Bool),
            "number" => Some(Type::Number),
            "string" => Some(Type::String),
            "asset" => Some(Type::Asset),
            "archive" => Some(Type::Archive),
            _ => None,
        }
    }

    pub fn canonical_name(&self) -> String {
        match self {
            Type::Any => "any".into(),
            Type::Bool => "bool".into(),
            Type::Number => "number".into(),
            Type::String => "string".into(),
            Type::Asset => "asset".into(),
            Type::Archive => "archive".into(),
            Type::List(element) => format!("list({})", element.canonical_name()),
            Type::Map(element) => format!("map({})", element.canonical_name()),
        }
    }

    /// Whether a value of type `other` may be passed where `self` is expected.
    pub fn accepts(&self, other: &Type) -> bool {
        match (self, other) {
            (Type::Any, _) | (_, Type::Any) => true,
            (Type::List(expected), Type::List(actual))
            | (Type::Map(expected), Type::Map(actual)) => expected.accepts(actual),
            (expected, actual) => expected == actual,
        }
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.canonical_name())
    }
}
