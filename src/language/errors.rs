use crate::language::{span::Span, types::Type};
use thiserror::Error;

/// Failures raised while resolving or checking a call, or traversing a function.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum SignatureError {
    #[error("missing required argument `{parameter}` in call to `{function}`")]
    MissingArgument { function: String, parameter: String },
    #[error("`{function}` expects at most {expected} arguments, got {received}")]
    TooManyArguments {
        function: String,
        expected: usize,
        received: usize,
    },
    #[error("argument `{parameter}` must be a {expected} literal")]
    ExpectedLiteral { parameter: String, expected: String },
    #[error("argument `{parameter}` must be a {expected} literal, found a {found} literal")]
    WrongLiteralKind {
        parameter: String,
        expected: String,
        found: String,
    },
    #[error("unknown type name `{name}`")]
    UnknownTypeName { name: String },
    #[error("argument `{parameter}` expects `{expected}`, found `{found}`")]
    ArgumentTypeMismatch {
        parameter: String,
        expected: Type,
        found: Type,
    },
    #[error("cannot traverse function `{function}`")]
    NotTraversable { function: String },
}

impl SignatureError {
    pub fn code(&self) -> &'static str {
        match self {
            SignatureError::MissingArgument { .. } => "E0601",
            SignatureError::TooManyArguments { .. } => "E0602",
            SignatureError::ExpectedLiteral { .. } => "E0603",
            SignatureError::WrongLiteralKind { .. } => "E0604",
            SignatureError::UnknownTypeName { .. } => "E0605",
            SignatureError::ArgumentTypeMismatch { .. } => "E0606",
            SignatureError::NotTraversable { .. } => "E0610",
        }
    }

    fn help(&self) -> Option<String> {
        match self {
            SignatureError::ExpectedLiteral { .. } => {
                Some("the value must be known when the configuration is checked".into())
            }
            SignatureError::UnknownTypeName { .. } => Some(
                "expected one of `any`, `bool`, `number`, `string`, `asset`, `archive`".into(),
            ),
            SignatureError::NotTraversable { function } => {
                Some(format!("call the function instead, e.g. `{function}(...)`"))
            }
            _ => None,
        }
    }

    pub fn into_diagnostic(self, span: Span) -> Diagnostic {
        let mut diagnostic = Diagnostic::error(span, self.to_string()).with_code(self.code());
        if let Some(help) = self.help() {
            diagnostic = diagnostic.with_help(help);
        }
        diagnostic
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Diagnostic {
    pub severity: Severity,
    pub span: Span,
    pub message: String,
    pub code: Option<String>,
    pub help: Option<String>,
}

impl Diagnostic {
    pub fn error(span: Span, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            span,
            message: message.into(),
            code: None,
            help: None,
        }
    }

    pub fn warning(span: Span, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            ..Self::error(span, message)
        }
    }

    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }

    pub fn display_message(&self) -> String {
        if let Some(code) = &self.code {
            format!("[{code}] {}", self.message)
        } else {
            self.message.clone()
        }
    }
}

/// Zero or more diagnostics, in the order they were raised.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Diagnostics {
    items: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, diagnostic: Diagnostic) {
        self.items.push(diagnostic);
    }

    pub fn extend(&mut self, other: Diagnostics) {
        self.items.extend(other.items);
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn has_errors(&self) -> bool {
        self.items.iter().any(Diagnostic::is_error)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Diagnostic> {
        self.items.iter()
    }

    /// Points diagnostics raised without a location at `span`.
    pub fn anchor(mut self, span: Span) -> Self {
        for diagnostic in &mut self.items {
            if diagnostic.span.is_synthetic() {
                diagnostic.span = span;
            }
        }
        self
    }
}

impl From<Diagnostic> for Diagnostics {
    fn from(diagnostic: Diagnostic) -> Self {
        Self {
            items: vec![diagnostic],
        }
    }
}

impl IntoIterator for Diagnostics {
    type Item = Diagnostic;
    type IntoIter = std::vec::IntoIter<Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a Diagnostic;
    type IntoIter = std::slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
