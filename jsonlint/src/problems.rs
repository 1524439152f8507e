//! Turning validator diagnostics into editor-style problems: a `from..to` character range, a
//! severity and a message.

use jsonlint_core::{Diagnostic, Severity, ValidationError, Validator};
use serde::Serialize;
use tracing::*;

use crate::fallback::{self, FallbackError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ProblemSource {
    Validator,
    Fallback,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Problem {
    /// Character offsets into the document. Validator problems are zero-width markers.
    pub from: usize,
    pub to: usize,
    pub severity: Severity,
    pub message: String,
    pub source: ProblemSource,
}

impl Problem {
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl From<Diagnostic> for Problem {
    fn from(diag: Diagnostic) -> Self {
        let span = diag.span();
        Problem {
            from: span.lo,
            to: span.hi,
            severity: diag.severity,
            message: diag.message,
            source: ProblemSource::Validator,
        }
    }
}

fn from_fallback_error(src: &str, err: &FallbackError<'_>) -> Problem {
    // Combinator spans are byte offsets; everything we report is in characters.
    let range = err.span().into_range();
    Problem {
        from: char_offset(src, range.start),
        to: char_offset(src, range.end),
        severity: Severity::Error,
        message: err.to_string(),
        source: ProblemSource::Fallback,
    }
}

fn char_offset(src: &str, byte: usize) -> usize {
    match src.get(..byte) {
        Some(prefix) => prefix.chars().count(),
        None => src.chars().count(),
    }
}

/// All problems found in one document, in the order they were raised.
#[instrument(level = "debug", skip_all)]
pub fn check(validator: &Validator, src: &str, run_fallback: bool) -> Vec<Problem> {
    let result = validator.validate(src);

    // The fallback grammar only gets a say when the validator found no fatal problem.
    let fatal = matches!(result, Err(ValidationError::Fatal { .. }));

    let mut problems: Vec<Problem> = match result {
        Ok(()) => Vec::new(),
        Err(err) => err.into_diagnostics().into_iter().map(Problem::from).collect(),
    };

    if run_fallback && !fatal {
        let errors = fallback::check(src);
        if !errors.is_empty() {
            warn!(
                count = errors.len(),
                "fallback parser rejected a document the validator accepted"
            );
        }
        problems.extend(errors.iter().map(|e| from_fallback_error(src, e)));
    }

    problems
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fatal_error_follows_warnings() {
        let problems = check(&Validator::new(), r#"{"a": 1, "a": [01]}"#, true);
        assert_eq!(problems.len(), 2);
        assert_eq!(problems[0].severity, Severity::Warning);
        assert_eq!(problems[1].message, "Bad number");
        assert_eq!((problems[1].from, problems[1].to), (16, 16));
        assert!(problems
            .iter()
            .all(|p| p.source == ProblemSource::Validator));
    }

    #[test]
    fn clean_document_has_no_problems() {
        assert!(check(&Validator::new(), r#"{"a": [true, null]}"#, true).is_empty());
    }

    #[test]
    fn warnings_only() {
        let problems = check(&Validator::new(), "[9007199254740993]", true);
        assert_eq!(problems.len(), 1);
        assert!(!problems[0].is_error());
    }

    #[test]
    fn fallback_errors_are_reported_in_characters() {
        let src = r#"["é", "ü",]"#;
        let errors = fallback::check(src);
        assert!(!errors.is_empty());

        let range = errors[0].span().into_range();
        let problem = from_fallback_error(src, &errors[0]);
        assert_eq!(problem.source, ProblemSource::Fallback);
        assert!(problem.is_error());
        assert_eq!(problem.message, errors[0].to_string());
        assert_eq!(problem.from, src[..range.start].chars().count());
        assert_eq!(problem.to, src[..range.end].chars().count());
        assert!(problem.from <= problem.to);
        // Both accented letters sit before the trailing comma and take two bytes each.
        assert_eq!(range.start - problem.from, 2);
    }

    #[test]
    fn byte_offsets_become_char_offsets() {
        assert_eq!(char_offset("éé1", 4), 2);
        assert_eq!(char_offset("ab", 10), 2);
    }
}
