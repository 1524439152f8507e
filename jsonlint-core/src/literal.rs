//! Scanners for the atomic literals: numbers, strings and the three keywords.

use tracing::*;

use crate::quote::quoted;
use crate::scanner::{ScanResult, Scanner};

/// The largest integer an IEEE 754 double represents without rounding, `2^53 - 1`.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

impl Scanner<'_> {
    /// Scan a number starting at a `-` or a digit. Integer-shaped literals that an `f64` cannot
    /// hold exactly raise a `Not a safe integer` warning; anything that does not parse to a
    /// finite `f64` is fatal.
    pub(crate) fn scan_number(&mut self) -> ScanResult {
        trace!("number");
        let mut number = String::new();

        if self.current == Some('-') {
            number.push('-');
            self.advance();
        }

        match self.current {
            Some('0') => {
                number.push('0');
                self.advance();
                if self.current_is_digit() {
                    return Err(self.fatal("Bad number"));
                }
            }
            Some('1'..='9') => self.take_digits(&mut number),
            _ => return Err(self.fatal("No number after minus sign")),
        }

        if !matches!(self.current, Some('.' | 'e' | 'E')) && !is_safe_integer(&number) {
            self.warn("Not a safe integer");
        }

        if self.current == Some('.') {
            number.push('.');
            self.advance();
            if !self.current_is_digit() {
                return Err(self.fatal("Unterminated fractional number"));
            }
            self.take_digits(&mut number);
        }

        if let Some(e @ ('e' | 'E')) = self.current {
            number.push(e);
            self.advance();
            if let Some(sign @ ('-' | '+')) = self.current {
                number.push(sign);
                self.advance();
            }
            // A missing exponent is left for the finiteness check below.
            self.take_digits(&mut number);
        }

        match number.parse::<f64>() {
            Ok(n) if n.is_finite() => Ok(()),
            _ => Err(self.fatal("Bad number")),
        }
    }

    fn take_digits(&mut self, buf: &mut String) {
        while let Some(d @ '0'..='9') = self.current {
            buf.push(d);
            self.advance();
        }
    }

    /// Scan a string literal and return its decoded value as UTF-16 code units. `\u` escapes may
    /// name lone surrogates, which a Rust `String` cannot hold, so keys are compared in this
    /// form.
    pub(crate) fn scan_string(&mut self) -> ScanResult<Vec<u16>> {
        trace!("string");
        self.expect('"')?;

        let mut value = Vec::new();
        while let Some(ch) = self.current {
            match ch {
                '"' => {
                    self.advance();
                    return Ok(value);
                }
                '\\' => {
                    self.scan_escape(&mut value)?;
                    self.advance();
                }
                ch if ch < ' ' => return Err(self.fatal("Bad control character")),
                ch => {
                    value.extend_from_slice(ch.encode_utf16(&mut [0; 2]));
                    self.advance();
                }
            }
        }

        Err(self.fatal("Unterminated string"))
    }

    /// Decode one escape sequence. Entered on the backslash; leaves the cursor on the last
    /// character of the sequence.
    fn scan_escape(&mut self, value: &mut Vec<u16>) -> ScanResult {
        let unit = match self.advance() {
            Some('u') => {
                let mut unit: u16 = 0;
                for _ in 0..4 {
                    let Some(digit) = self.advance().and_then(|c| c.to_digit(16)) else {
                        return Err(self.fatal("Bad unicode escape"));
                    };
                    unit = unit * 16 + digit as u16;
                }
                unit
            }
            Some('"') => 0x22,
            Some('\\') => 0x5C,
            Some('/') => 0x2F,
            Some('b') => 0x08,
            Some('f') => 0x0C,
            Some('n') => 0x0A,
            Some('r') => 0x0D,
            Some('t') => 0x09,
            _ => return Err(self.fatal("Bad escaped character")),
        };
        value.push(unit);
        Ok(())
    }

    /// Scan one of `true`, `false` or `null`.
    pub(crate) fn scan_word(&mut self) -> ScanResult {
        trace!("word");
        let word = match self.current {
            Some('t') => "true",
            Some('f') => "false",
            Some('n') => "null",
            _ => return Err(self.fatal(format!("Unexpected {}", quoted(self.current)))),
        };

        for expected in word.chars() {
            self.expect(expected)?;
        }
        Ok(())
    }
}

fn is_safe_integer(literal: &str) -> bool {
    literal
        .parse::<f64>()
        .map_or(false, |n| n.abs() <= MAX_SAFE_INTEGER)
}

#[cfg(test)]
mod tests {
    use crate::scanner::Scanner;
    use crate::Diagnostic;

    /// Run `f` on a scanner primed on the first character of `src`.
    fn scan<T>(
        src: &str,
        f: impl FnOnce(&mut Scanner<'_>) -> Result<T, Diagnostic>,
    ) -> (Result<T, Diagnostic>, Scanner<'_>) {
        let mut s = Scanner::new(src, None);
        s.advance();
        let res = f(&mut s);
        (res, s)
    }

    #[test]
    fn string_value_is_decoded() {
        let (res, s) = scan(r#""a\né\"" rest"#, |s| s.scan_string());
        let expected: Vec<u16> = "a\né\"".encode_utf16().collect();
        assert_eq!(res.unwrap(), expected);
        assert_eq!(s.current, Some(' '));
    }

    #[test]
    fn lone_surrogate_escape_is_kept() {
        let (res, _) = scan(r#""\uD800""#, |s| s.scan_string());
        assert_eq!(res.unwrap(), vec![0xD800]);
    }

    #[test]
    fn unicode_escape_position_points_at_bad_digit() {
        let (res, _) = scan(r#""\u12x4""#, |s| s.scan_string());
        let err = res.unwrap_err();
        assert_eq!(err.message, "Bad unicode escape");
        assert_eq!(err.position, 5);
    }

    #[test]
    fn raw_newline_is_a_control_character() {
        let (res, _) = scan("\"ab\ncd\"", |s| s.scan_string());
        let err = res.unwrap_err();
        assert_eq!(err.message, "Bad control character");
        assert_eq!(err.position, 3);
    }

    #[test]
    fn escape_at_end_of_input() {
        let (res, _) = scan("\"ab\\", |s| s.scan_string());
        assert_eq!(res.unwrap_err().message, "Bad escaped character");
    }

    #[test]
    fn number_stops_on_first_non_digit() {
        let (res, s) = scan("-12.5e+3,", |s| s.scan_number());
        assert!(res.is_ok());
        assert_eq!(s.current, Some(','));
        assert!(s.into_warnings().is_empty());
    }

    #[test]
    fn empty_exponent_is_a_bad_number() {
        let (res, _) = scan("1e]", |s| s.scan_number());
        assert_eq!(res.unwrap_err().message, "Bad number");
    }

    #[test]
    fn overflowing_exponent_is_a_bad_number() {
        let (res, _) = scan("1e999", |s| s.scan_number());
        assert_eq!(res.unwrap_err().message, "Bad number");
    }

    #[test]
    fn safe_integer_boundary() {
        let (res, s) = scan("9007199254740991", |s| s.scan_number());
        assert!(res.is_ok());
        assert!(s.into_warnings().is_empty());

        let (res, s) = scan("-9007199254740992", |s| s.scan_number());
        assert!(res.is_ok());
        let warnings = s.into_warnings();
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].message, "Not a safe integer");
        assert_eq!(warnings[0].position, 17);
    }

    #[test]
    fn fractional_literals_skip_the_safe_integer_check() {
        let (res, s) = scan("9007199254740993.0", |s| s.scan_number());
        assert!(res.is_ok());
        assert!(s.into_warnings().is_empty());
    }

    #[test]
    fn misspelled_keyword() {
        let (res, _) = scan("nul", |s| s.scan_word());
        let err = res.unwrap_err();
        assert_eq!(err.message, r#"Expected "l" instead of end of input"#);
        assert_eq!(err.position, 3);

        let (res, _) = scan("fals3", |s| s.scan_word());
        assert_eq!(res.unwrap_err().message, r#"Expected "e" instead of "3""#);
    }
}
