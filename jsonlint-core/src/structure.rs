//! The generic value dispatcher and the two container scanners. These are mutually recursive:
//! a container scans its members with [`Scanner::scan_value`], which in turn may open another
//! container.

use indexmap::IndexSet;
use tracing::*;

use crate::quote::{quoted, quoted_key};
use crate::scanner::{ScanResult, Scanner};

impl Scanner<'_> {
    pub(crate) fn scan_value(&mut self) -> ScanResult {
        self.skip_white();
        match self.current {
            Some('{') => self.scan_object(),
            Some('[') => self.scan_array(),
            Some('"') => self.scan_string().map(drop),
            Some('-' | '0'..='9') => self.scan_number(),
            _ => self.scan_word(),
        }
    }

    pub(crate) fn scan_array(&mut self) -> ScanResult {
        trace!(depth = self.depth, "array");
        self.enter()?;
        self.expect('[')?;
        self.skip_white();

        if self.current == Some(']') {
            self.advance();
            return self.leave();
        }

        while self.current.is_some() {
            // Only reachable right after a comma.
            if self.current == Some(']') {
                return Err(self.fatal("Trailing comma in array"));
            }

            self.scan_value()?;
            self.skip_white();

            match self.current {
                Some(']') => {
                    self.advance();
                    return self.leave();
                }
                Some(',') => {
                    self.advance();
                    self.skip_white();
                }
                _ => {
                    return Err(self.fatal(format!(
                        r#"Expected "," or "]" instead of {}"#,
                        quoted(self.current)
                    )))
                }
            }
        }

        Err(self.fatal("Unterminated array"))
    }

    pub(crate) fn scan_object(&mut self) -> ScanResult {
        trace!(depth = self.depth, "object");
        self.enter()?;
        self.expect('{')?;
        self.skip_white();

        if self.current == Some('}') {
            self.advance();
            return self.leave();
        }

        // Keys seen so far in this object only; nested objects get their own.
        let mut keys: IndexSet<Vec<u16>> = IndexSet::new();

        while self.current.is_some() {
            if self.current == Some('}') {
                return Err(self.fatal("Trailing comma in object"));
            }

            let key = self.scan_string()?;
            self.skip_white();
            self.expect(':')?;

            if keys.contains(&key) {
                self.warn(format!("Duplicate key {}", quoted_key(&key)));
            } else {
                keys.insert(key);
            }

            self.scan_value()?;
            self.skip_white();

            match self.current {
                Some('}') => {
                    self.advance();
                    return self.leave();
                }
                Some(',') => {
                    self.advance();
                    self.skip_white();
                }
                _ => {
                    return Err(self.fatal(format!(
                        r#"Expected "," or "}}" instead of {}"#,
                        quoted(self.current)
                    )))
                }
            }
        }

        Err(self.fatal("Expected '\"'"))
    }

    /// Open a container, failing if that exceeds the configured nesting limit.
    fn enter(&mut self) -> ScanResult {
        self.depth += 1;
        match self.max_depth {
            Some(max) if self.depth > max => Err(self.fatal("Nesting too deep")),
            _ => Ok(()),
        }
    }

    fn leave(&mut self) -> ScanResult {
        self.depth -= 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::scanner::Scanner;

    #[test]
    fn nested_objects_track_keys_separately() {
        let mut s = Scanner::new(r#"{"a": {"a": 1}, "b": {"a": 2}}"#, None);
        assert!(s.scan_document().is_ok());
        assert!(s.into_warnings().is_empty());
    }

    #[test]
    fn depth_is_restored_after_each_container() {
        let mut s = Scanner::new("[[1], {\"k\": [2]}, []]", Some(3));
        assert!(s.scan_document().is_ok());
        assert_eq!(s.depth, 0);
    }

    #[test]
    fn depth_limit_is_fatal() {
        let mut s = Scanner::new("[[[1]]]", Some(2));
        let err = s.scan_document().unwrap_err();
        assert_eq!(err.message, "Nesting too deep");
        assert_eq!(err.position, 2);
    }

    #[test]
    fn escaped_duplicate_keys_are_detected() {
        let mut s = Scanner::new(r#"{"ab": 1, "a\u0062": 2}"#, None);
        assert!(s.scan_document().is_ok());
        let warnings = s.into_warnings();
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].message, r#"Duplicate key "ab""#);
    }
}
