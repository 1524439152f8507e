//! Rendering of offending characters inside diagnostic messages.

/// Render the character under the cursor for an "expected X instead of Y" message. End of input
/// is spelled out, a double quote is wrapped in single quotes so it stays readable, and
/// everything else is written as a JSON string literal so control characters and backslashes
/// show up escaped.
pub(crate) fn quoted(ch: Option<char>) -> String {
    match ch {
        None => "end of input".to_string(),
        Some('"') => "'\"'".to_string(),
        Some(ch) => string_literal(ch.encode_utf8(&mut [0; 4])),
    }
}

/// Render an object key as a JSON string literal. Unpaired surrogates are written back as
/// `\uXXXX` escapes, so distinct keys never render the same.
pub(crate) fn quoted_key(key: &[u16]) -> String {
    let mut out = String::from("\"");
    let mut run = String::new();
    for unit in char::decode_utf16(key.iter().copied()) {
        match unit {
            Ok(ch) => run.push(ch),
            Err(e) => {
                push_escaped(&mut out, &run);
                run.clear();
                out.push_str(&format!("\\u{:04x}", e.unpaired_surrogate()));
            }
        }
    }
    push_escaped(&mut out, &run);
    out.push('"');
    out
}

/// Append `s` escaped as the inside of a JSON string literal.
fn push_escaped(out: &mut String, s: &str) {
    let literal = string_literal(s);
    out.push_str(&literal[1..literal.len() - 1]);
}

fn string_literal(s: &str) -> String {
    // Serializing a `&str` cannot fail; fall back to debug formatting all the same.
    serde_json::to_string(s).unwrap_or_else(|_| format!("{s:?}"))
}
