use crate::language::{span::Span, types::Type};

#[derive(Clone, Debug, PartialEq)]
pub enum Literal {
    Null,
    Bool(bool),
    Number(i64),
    String(String),
}

impl Literal {
    pub fn kind_name(&self) -> &'static str {
        match self {
            Literal::Null => "null",
            Literal::Bool(_) => "bool",
            Literal::Number(_) => "number",
            Literal::String(_) => "string",
        }
    }

    pub fn ty(&self) -> Type {
        match self {
            Literal::Null => Type::Any,
            Literal::Bool(_) => Type::Bool,
            Literal::Number(_) => Type::Number,
            Literal::String(_) => Type::String,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ExprKind {
    Literal(Literal),
    /// Anything whose value is not known at check time.
    Opaque,
}

/// A call argument: its literal value when constant, and its already-computed type.
#[derive(Clone, Debug, PartialEq)]
pub struct Expression {
    pub kind: ExprKind,
    pub ty: Type,
    pub span: Span,
}

impl Expression {
    pub fn literal(value: Literal, span: Span) -> Self {
        Self {
            ty: value.ty(),
            kind: ExprKind::Literal(value),
            span,
        }
    }

    pub fn string(value: impl Into<String>, span: Span) -> Self {
        Self::literal(Literal::String(value.into()), span)
    }

    pub fn typed(ty: Type, span: Span) -> Self {
        Self {
            kind: ExprKind::Opaque,
            ty,
            span,
        }
    }

    pub fn literal_value(&self) -> Option<&Literal> {
        match &self.kind {
            ExprKind::Literal(value) => Some(value),
            ExprKind::Opaque => None,
        }
    }

    pub fn static_type(&self) -> &Type {
        &self.ty
    }

    pub fn span(&self) -> Span {
        self.span
    }
}

/// One step of member or index access, e.g. `.foo` or `[0]`.
#[derive(Clone, Debug, PartialEq)]
pub enum Traverser {
    Attr { name: String, span: Span },
    Index { key: Literal, span: Span },
}

impl Traverser {
    pub fn attr(name: impl Into<String>, span: Span) -> Self {
        Traverser::Attr {
            name: name.into(),
            span,
        }
    }

    pub fn index(key: Literal, span: Span) -> Self {
        Traverser::Index { key, span }
    }

    pub fn source_range(&self) -> Span {
        match self {
            Traverser::Attr { span, .. } | Traverser::Index { span, .. } => *span,
        }
    }

    pub fn describe(&self) -> String {
        match self {
            Traverser::Attr { name, .. } => format!(".{name}"),
            Traverser::Index { key, .. } => match key {
                Literal::String(value) => format!("[\"{value}\"]"),
                Literal::Number(value) => format!("[{value}]"),
                Literal::Bool(value) => format!("[{value}]"),
                Literal::Null => "[null]".into(),
            },
        }
    }
}
