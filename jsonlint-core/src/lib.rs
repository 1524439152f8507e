//! A strict JSON grammar validator. We hand-roll a single-pass recursive-descent scanner instead
//! of reaching for a deserialization library, because the only thing we care about is *where*
//! and *why* a document is malformed. No value tree is built: the output is a list of
//! diagnostics anchored to character offsets in the source, suitable for an editor's problems
//! panel.
//!
//! The grammar is strict JSON. Comments, trailing commas and unquoted keys are rejected with a
//! fatal diagnostic, and there is no error recovery: the first fatal problem ends the scan.
//! Duplicate object keys and integers outside the safe integer range are reported as
//! warnings and do not stop the scan.
//!
//! ```
//! use jsonlint_core::{validate, Severity, ValidationError};
//!
//! assert!(validate(r#"{"a": [1, 2, 3]}"#).is_ok());
//!
//! let Err(ValidationError::Warnings(warnings)) = validate(r#"{"a": 1, "a": 2}"#) else {
//!     panic!("expected a warning bag");
//! };
//! assert_eq!(warnings[0].severity, Severity::Warning);
//! ```

mod diagnostic;
mod literal;
mod quote;
mod scanner;
mod span;
mod structure;

pub use diagnostic::{Diagnostic, Severity, ValidationError};
pub use span::Span;

use scanner::Scanner;
use tracing::*;

/// How many arrays and objects a default [`Validator`] lets be open at once. Each one costs a
/// recursive call, so an unbounded limit lets hostile input overflow the stack.
pub const DEFAULT_MAX_DEPTH: usize = 512;

/// Validates `source` with the default [`Validator`], which nests at most [`DEFAULT_MAX_DEPTH`]
/// containers.
pub fn validate(source: &str) -> Result<(), ValidationError> {
    Validator::new().validate(source)
}

/// Validation settings. Every call to [`Validator::validate`] gets its own scanning state, so a
/// single validator can be shared freely between threads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Validator {
    max_depth: Option<usize>,
}

impl Default for Validator {
    fn default() -> Self {
        Validator::new()
    }
}

impl Validator {
    pub const fn new() -> Self {
        Validator {
            max_depth: Some(DEFAULT_MAX_DEPTH),
        }
    }

    /// Limit the number of arrays and objects that may be open at the same time. Exceeding the
    /// limit is a fatal `Nesting too deep` error. `None` removes the limit, which is only safe for
    /// trusted input.
    pub const fn with_max_depth(mut self, max_depth: Option<usize>) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub const fn max_depth(&self) -> Option<usize> {
        self.max_depth
    }

    /// Scan exactly one JSON value surrounded by optional whitespace.
    ///
    /// - `Ok(())` if the document is well-formed and raised no warnings.
    /// - [`ValidationError::Warnings`] if it is well-formed but raised warnings.
    /// - [`ValidationError::Fatal`] on the first grammar violation, carrying the warnings seen
    ///   before it.
    #[instrument(level = "debug", skip_all, fields(len = source.len()))]
    pub fn validate(&self, source: &str) -> Result<(), ValidationError> {
        let mut scanner = Scanner::new(source, self.max_depth);

        let outcome = scanner.scan_document();
        let warnings = scanner.into_warnings();

        match outcome {
            Err(error) => {
                debug!(%error, warnings = warnings.len(), "fatal");
                Err(ValidationError::Fatal { error, warnings })
            }
            Ok(()) if !warnings.is_empty() => {
                debug!(warnings = warnings.len(), "valid with warnings");
                Err(ValidationError::Warnings(warnings))
            }
            Ok(()) => {
                debug!("valid");
                Ok(())
            }
        }
    }
}
