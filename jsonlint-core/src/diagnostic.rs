use std::fmt;

use serde::Serialize;
use thiserror::Error;

use crate::span::Span;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

impl Severity {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single reported problem. `position` is the character offset of the character that was
/// being examined when the problem was detected.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Diagnostic {
    pub message: String,
    pub position: usize,
    pub severity: Severity,
}

impl Diagnostic {
    pub fn error(message: impl Into<String>, position: usize) -> Self {
        Diagnostic {
            message: message.into(),
            position,
            severity: Severity::Error,
        }
    }

    pub fn warning(message: impl Into<String>, position: usize) -> Self {
        Diagnostic {
            message: message.into(),
            position,
            severity: Severity::Warning,
        }
    }

    /// The zero-width span an editor should anchor this diagnostic to.
    pub const fn span(&self) -> Span {
        Span::point(self.position)
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {}: {}", self.severity, self.position, self.message)
    }
}

/// Why a document did not validate cleanly.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The document violates the grammar. `warnings` holds whatever was collected before the
    /// violation was hit.
    #[error("{error}")]
    Fatal {
        error: Diagnostic,
        warnings: Vec<Diagnostic>,
    },
    /// The document is grammatically valid but raised at least one warning.
    #[error("document raised {} warning(s)", .0.len())]
    Warnings(Vec<Diagnostic>),
}

impl ValidationError {
    pub fn fatal(&self) -> Option<&Diagnostic> {
        match self {
            ValidationError::Fatal { error, .. } => Some(error),
            ValidationError::Warnings(_) => None,
        }
    }

    pub fn warnings(&self) -> &[Diagnostic] {
        match self {
            ValidationError::Fatal { warnings, .. } => warnings,
            ValidationError::Warnings(warnings) => warnings,
        }
    }

    /// Every diagnostic in the order it was raised: warnings first, then the fatal error if
    /// there is one.
    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        match self {
            ValidationError::Fatal {
                error,
                mut warnings,
            } => {
                warnings.push(error);
                warnings
            }
            ValidationError::Warnings(warnings) => warnings,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fatal_diagnostics_come_after_warnings() {
        let err = ValidationError::Fatal {
            error: Diagnostic::error("Bad number", 9),
            warnings: vec![Diagnostic::warning("Duplicate key \"a\"", 4)],
        };
        assert_eq!(err.fatal().map(|d| d.position), Some(9));
        assert_eq!(err.warnings().len(), 1);

        let all = err.into_diagnostics();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].severity, Severity::Warning);
        assert!(all[1].is_error());
    }

    #[test]
    fn display_includes_position() {
        let d = Diagnostic::error("Syntax error", 3);
        assert_eq!(d.to_string(), "error at 3: Syntax error");
        assert_eq!(d.span(), Span::point(3));
    }

    #[test]
    fn severity_serializes_lowercase() {
        let d = Diagnostic::warning("Not a safe integer", 17);
        let json = serde_json::to_value(&d).unwrap();
        assert_eq!(json["severity"], "warning");
        assert_eq!(json["position"], 17);
    }
}
