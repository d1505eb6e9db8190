use crate::language::{
    ast::Expression,
    errors::{Diagnostics, SignatureError},
    function::Function,
    signature::StaticFunctionSignature,
    span::Span,
    types::Type,
};

#[derive(Clone, Debug)]
pub struct CallCheckOptions {
    /// Report missing and extra arguments. When off, missing arguments are
    /// treated as `any` and extra arguments are ignored.
    pub strict_arity: bool,
}

impl Default for CallCheckOptions {
    fn default() -> Self {
        Self { strict_arity: true }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct CallResolution {
    pub signature: StaticFunctionSignature,
    pub return_type: Type,
    pub diagnostics: Diagnostics,
}

/// Resolves a call's signature and checks its arguments against it.
///
/// Never fails outright: a call whose signature cannot be resolved is typed
/// `any` and carries the resolver's diagnostics.
pub fn check_call(
    function: &Function,
    arguments: &[Expression],
    call_span: Span,
    options: &CallCheckOptions,
) -> CallResolution {
    let (signature, diagnostics) = function.get_signature(arguments);
    let mut diagnostics = diagnostics.anchor(call_span);
    if diagnostics.has_errors() {
        return CallResolution {
            signature,
            return_type: Type::Any,
            diagnostics,
        };
    }

    if options.strict_arity {
        if let Some(missing) = signature.parameters().get(arguments.len()) {
            diagnostics.push(
                SignatureError::MissingArgument {
                    function: function.name().to_string(),
                    parameter: missing.name().to_string(),
                }
                .into_diagnostic(call_span),
            );
        }
        if signature.varargs().is_none() {
            let expected = signature.parameters().len();
            for extra in arguments.iter().skip(expected) {
                diagnostics.push(
                    SignatureError::TooManyArguments {
                        function: function.name().to_string(),
                        expected,
                        received: arguments.len(),
                    }
                    .into_diagnostic(extra.span()),
                );
            }
        }
    }

    for (index, argument) in arguments.iter().enumerate() {
        let Some(parameter) = signature.parameter_for(index) else {
            break;
        };
        if !parameter.ty().accepts(argument.static_type()) {
            diagnostics.push(
                SignatureError::ArgumentTypeMismatch {
                    parameter: parameter.name().to_string(),
                    expected: parameter.ty().clone(),
                    found: argument.static_type().clone(),
                }
                .into_diagnostic(argument.span()),
            );
        }
    }

    let return_type = signature.return_type().clone();
    CallResolution {
        signature,
        return_type,
        diagnostics,
    }
}
