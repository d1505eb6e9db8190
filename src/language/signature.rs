use crate::language::{
    ast::{Expression, Literal},
    errors::{Diagnostic, Diagnostics, SignatureError},
    span::Span,
    types::Type,
};
use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Parameter {
    name: String,
    ty: Type,
}

impl Parameter {
    pub fn new(name: impl Into<String>, ty: Type) -> Self {
        let name = name.into();
        debug_assert!(!name.is_empty(), "parameter names must not be empty");
        Self { name, ty }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn ty(&self) -> &Type {
        &self.ty
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name, self.ty)
    }
}

/// The parameters and return type of a function, fixed for every call site.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct StaticFunctionSignature {
    parameters: Vec<Parameter>,
    varargs: Option<Parameter>,
    return_type: Type,
}

impl StaticFunctionSignature {
    pub fn new(parameters: Vec<Parameter>, return_type: Type) -> Self {
        Self {
            parameters,
            varargs: None,
            return_type,
        }
    }

    pub fn with_varargs(mut self, parameter: Parameter) -> Self {
        self.varargs = Some(parameter);
        self
    }

    /// Placeholder returned with diagnostics when a call's signature cannot be
    /// resolved. Accepts anything and produces `any`.
    pub fn unresolved() -> Self {
        Self::new(Vec::new(), Type::Any).with_varargs(Parameter::new("args", Type::Any))
    }

    pub fn parameters(&self) -> &[Parameter] {
        &self.parameters
    }

    pub fn varargs(&self) -> Option<&Parameter> {
        self.varargs.as_ref()
    }

    pub fn return_type(&self) -> &Type {
        &self.return_type
    }

    /// Minimum and (when there are no varargs) maximum argument count.
    pub fn arity_range(&self) -> (usize, Option<usize>) {
        let min = self.parameters.len();
        (min, self.varargs.is_none().then_some(min))
    }

    /// The parameter an argument at `index` binds to.
    pub fn parameter_for(&self, index: usize) -> Option<&Parameter> {
        self.parameters.get(index).or(self.varargs.as_ref())
    }

    /// A static signature resolves to itself, whatever the arguments.
    pub fn resolve(&self, _arguments: &[Expression]) -> (StaticFunctionSignature, Diagnostics) {
        (self.clone(), Diagnostics::new())
    }
}

impl fmt::Display for StaticFunctionSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut rendered: Vec<String> = self.parameters.iter().map(ToString::to_string).collect();
        if let Some(varargs) = &self.varargs {
            rendered.push(format!("{} ...{}", varargs.name, varargs.ty));
        }
        write!(f, "({}) -> {}", rendered.join(", "), self.return_type)
    }
}

pub type SignatureResolver = fn(&[Expression]) -> (StaticFunctionSignature, Diagnostics);

/// A signature computed from the arguments of each call.
///
/// The resolver is a plain function pointer, so it cannot hold state between
/// calls: resolving the same arguments twice gives the same answer.
#[derive(Clone, Copy)]
pub struct DependentSignature {
    description: &'static str,
    resolver: SignatureResolver,
}

impl DependentSignature {
    pub fn new(description: &'static str, resolver: SignatureResolver) -> Self {
        Self {
            description,
            resolver,
        }
    }

    pub fn description(&self) -> &'static str {
        self.description
    }

    pub fn resolve(&self, arguments: &[Expression]) -> (StaticFunctionSignature, Diagnostics) {
        (self.resolver)(arguments)
    }
}

impl fmt::Debug for DependentSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DependentSignature")
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}

#[derive(Clone, Debug)]
pub enum FunctionSignature {
    Static(StaticFunctionSignature),
    Dependent(DependentSignature),
}

impl FunctionSignature {
    pub fn dependent(description: &'static str, resolver: SignatureResolver) -> Self {
        FunctionSignature::Dependent(DependentSignature::new(description, resolver))
    }

    pub fn is_dependent(&self) -> bool {
        matches!(self, FunctionSignature::Dependent(_))
    }

    pub fn resolve(&self, arguments: &[Expression]) -> (StaticFunctionSignature, Diagnostics) {
        match self {
            FunctionSignature::Static(signature) => signature.resolve(arguments),
            FunctionSignature::Dependent(signature) => {
                let (resolved, diagnostics) = signature.resolve(arguments);
                tracing::trace!(
                    kind = signature.description(),
                    arguments = arguments.len(),
                    errors = diagnostics.len(),
                    "resolved dependent signature"
                );
                (resolved, diagnostics)
            }
        }
    }
}

impl From<StaticFunctionSignature> for FunctionSignature {
    fn from(signature: StaticFunctionSignature) -> Self {
        FunctionSignature::Static(signature)
    }
}

/// Checks the argument count of a call for a dependent resolver.
///
/// `parameters` names the expected positions; `max` is `None` when trailing
/// arguments are allowed. Missing arguments are reported without a location so
/// the caller can anchor them to the call.
pub fn expect_arity(
    function: &str,
    arguments: &[Expression],
    parameters: &[&str],
    max: Option<usize>,
) -> Result<(), Diagnostics> {
    let mut diagnostics = Diagnostics::new();
    if let Some(missing) = parameters.get(arguments.len()) {
        diagnostics.push(
            SignatureError::MissingArgument {
                function: function.to_string(),
                parameter: (*missing).to_string(),
            }
            .into_diagnostic(Span::synthetic()),
        );
    }
    if let Some(max) = max {
        for extra in arguments.iter().skip(max) {
            diagnostics.push(
                SignatureError::TooManyArguments {
                    function: function.to_string(),
                    expected: max,
                    received: arguments.len(),
                }
                .into_diagnostic(extra.span()),
            );
        }
    }
    if diagnostics.is_empty() {
        Ok(())
    } else {
        Err(diagnostics)
    }
}

/// Reads a string literal argument, or explains why the argument is not one.
pub fn expect_string_literal<'a>(
    argument: &'a Expression,
    parameter: &str,
) -> Result<&'a str, Diagnostic> {
    match argument.literal_value() {
        Some(Literal::String(value)) => Ok(value),
        Some(other) => Err(SignatureError::WrongLiteralKind {
            parameter: parameter.to_string(),
            expected: "string".into(),
            found: other.kind_name().into(),
        }
        .into_diagnostic(argument.span())),
        None => Err(SignatureError::ExpectedLiteral {
            parameter: parameter.to_string(),
            expected: "string".into(),
        }
        .into_diagnostic(argument.span())),
    }
}
