use crate::language::{
    ast::{Expression, Traverser},
    errors::{Diagnostics, SignatureError},
    signature::{FunctionSignature, StaticFunctionSignature},
    span::Span,
    types::Type,
};

/// Where a function was declared.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SyntaxNode {
    /// Built-in functions have no source text.
    None,
    Declaration(Span),
}

impl SyntaxNode {
    pub fn span(&self) -> Span {
        match self {
            SyntaxNode::None => Span::synthetic(),
            SyntaxNode::Declaration(span) => *span,
        }
    }
}

/// A named callable value. It can be called but never traversed.
#[derive(Clone, Debug)]
pub struct Function {
    name: String,
    signature: FunctionSignature,
    syntax: SyntaxNode,
}

impl Function {
    pub fn new(name: impl Into<String>, signature: impl Into<FunctionSignature>) -> Self {
        Self {
            name: name.into(),
            signature: signature.into(),
            syntax: SyntaxNode::None,
        }
    }

    pub fn with_declaration(mut self, span: Span) -> Self {
        self.syntax = SyntaxNode::Declaration(span);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn signature(&self) -> &FunctionSignature {
        &self.signature
    }

    pub fn syntax_node(&self) -> SyntaxNode {
        self.syntax
    }

    /// Resolves the signature for one call site. Results are not cached.
    pub fn get_signature(
        &self,
        arguments: &[Expression],
    ) -> (StaticFunctionSignature, Diagnostics) {
        tracing::debug!(
            function = %self.name,
            dependent = self.signature.is_dependent(),
            arguments = arguments.len(),
            "resolving call signature"
        );
        self.signature.resolve(arguments)
    }

    /// Member and index access on a bare function is always an error. The
    /// result is typed `any` so the enclosing expression can still be checked.
    pub fn traverse(&self, traverser: &Traverser) -> (Type, Diagnostics) {
        tracing::debug!(
            function = %self.name,
            access = %traverser.describe(),
            "rejected traversal of function"
        );
        let diagnostic = SignatureError::NotTraversable {
            function: self.name.clone(),
        }
        .into_diagnostic(traverser.source_range());
        (Type::Any, diagnostic.into())
    }
}
