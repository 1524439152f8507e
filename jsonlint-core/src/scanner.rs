//! The scanning context and its cursor primitives. Each validation gets its own [`Scanner`]; the
//! literal and structural scanners live in `literal.rs` and `structure.rs` as further `impl`
//! blocks on the same type.

use std::str::Chars;

use tracing::*;

use crate::diagnostic::Diagnostic;
use crate::quote::quoted;

/// A fatal grammar violation short-circuits the whole scan.
pub(crate) type ScanResult<T = ()> = Result<T, Diagnostic>;

pub(crate) struct Scanner<'a> {
    chars: Chars<'a>,
    /// Offset (in characters) of the next unread character. Keeps counting past the end of the
    /// input so that `at - 1` always names the character being examined.
    at: usize,
    /// The most recently consumed character, `None` once the input is exhausted.
    pub(crate) current: Option<char>,
    warnings: Vec<Diagnostic>,
    pub(crate) depth: usize,
    pub(crate) max_depth: Option<usize>,
}

impl<'a> Scanner<'a> {
    pub(crate) fn new(source: &'a str, max_depth: Option<usize>) -> Self {
        Scanner {
            chars: source.chars(),
            at: 0,
            // A whitespace sentinel, so the first `skip_white` fetches the first real character.
            current: Some(' '),
            warnings: Vec::new(),
            depth: 0,
            max_depth,
        }
    }

    pub(crate) fn into_warnings(self) -> Vec<Diagnostic> {
        self.warnings
    }

    /// One full document: a value, optional trailing whitespace, then end of input.
    pub(crate) fn scan_document(&mut self) -> ScanResult {
        self.scan_value()?;
        self.skip_white();
        if self.current.is_some() {
            return Err(self.fatal("Syntax error"));
        }
        Ok(())
    }

    /// Consume the next character and make it current.
    pub(crate) fn advance(&mut self) -> Option<char> {
        self.current = self.chars.next();
        self.at += 1;
        self.current
    }

    /// Like [`Scanner::advance`], but first insist that the current character is `expected`.
    pub(crate) fn expect(&mut self, expected: char) -> ScanResult<Option<char>> {
        if self.current != Some(expected) {
            return Err(self.fatal(format!(
                "Expected {} instead of {}",
                quoted(Some(expected)),
                quoted(self.current)
            )));
        }
        Ok(self.advance())
    }

    pub(crate) fn skip_white(&mut self) {
        while matches!(self.current, Some(' ' | '\t' | '\n' | '\r')) {
            self.advance();
        }
    }

    pub(crate) fn current_is_digit(&self) -> bool {
        matches!(self.current, Some('0'..='9'))
    }

    fn position(&self) -> usize {
        self.at.saturating_sub(1)
    }

    pub(crate) fn fatal(&self, message: impl Into<String>) -> Diagnostic {
        let diag = Diagnostic::error(message, self.position());
        trace!(%diag, "fatal");
        diag
    }

    pub(crate) fn warn(&mut self, message: impl Into<String>) {
        let diag = Diagnostic::warning(message, self.position());
        trace!(%diag, "warning");
        self.warnings.push(diag);
    }
}
