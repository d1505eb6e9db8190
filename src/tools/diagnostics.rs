use crate::language::errors::{Diagnostic as CheckDiagnostic, Diagnostics, Severity};
use miette::{Diagnostic, LabeledSpan, NamedSource, Report, SourceCode, SourceSpan};
use std::{fmt::Display, path::Path};
use thiserror::Error;

#[derive(Debug, Error, Clone)]
#[error("{message}")]
pub struct SignatureDiagnostic {
    src: NamedSource<String>,
    span: SourceSpan,
    code: Option<String>,
    help: Option<String>,
    severity: miette::Severity,
    message: String,
}

impl SignatureDiagnostic {
    pub fn from_diagnostic(src: NamedSource<String>, diagnostic: &CheckDiagnostic) -> Self {
        Self {
            src,
            span: diagnostic.span.to_source_span(),
            code: diagnostic.code.clone(),
            help: diagnostic.help.clone(),
            severity: match diagnostic.severity {
                Severity::Error => miette::Severity::Error,
                Severity::Warning => miette::Severity::Warning,
            },
            message: diagnostic.message.clone(),
        }
    }
}

impl Diagnostic for SignatureDiagnostic {
    fn code<'a>(&'a self) -> Option<Box<dyn Display + 'a>> {
        self.code
            .as_ref()
            .map(|code| Box::new(code) as Box<dyn Display + 'a>)
    }

    fn severity(&self) -> Option<miette::Severity> {
        Some(self.severity)
    }

    fn help<'a>(&'a self) -> Option<Box<dyn Display + 'a>> {
        self.help
            .as_ref()
            .map(|help| Box::new(help) as Box<dyn Display + 'a>)
    }

    fn source_code(&self) -> Option<&dyn SourceCode> {
        Some(&self.src)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        Some(Box::new(std::iter::once(LabeledSpan::new_with_span(
            Some(self.message.clone()),
            self.span,
        ))))
    }
}

pub fn to_reports(path: &Path, source: &str, diagnostics: &Diagnostics) -> Vec<SignatureDiagnostic> {
    let named = NamedSource::new(path.display().to_string(), source.to_string());
    diagnostics
        .iter()
        .map(|diagnostic| SignatureDiagnostic::from_diagnostic(named.clone(), diagnostic))
        .collect()
}

/// Prints each diagnostic as a report on stderr. Returns whether any were errors.
pub fn emit_diagnostics(path: &Path, source: &str, diagnostics: &Diagnostics) -> bool {
    for report in to_reports(path, source, diagnostics) {
        eprintln!("{:?}", Report::new(report));
    }
    diagnostics.has_errors()
}
