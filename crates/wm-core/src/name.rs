//! Name codec: component, note, and label names ↔ their literal form in map text.
//!
//! A name is written either as a bare token (`Simple Component`) or, when it
//! contains characters that would collide with statement syntax, as a
//! double-quoted token with `\n` and `\"` escapes (`"bar\nbaz"`).

/// Characters that cannot appear in a bare token.
const QUOTE_TRIGGERS: &[char] = &['\n', '\r', '"', '[', ']'];

/// The evolve override arrow. A bare name containing it would be split in two.
pub const OVERRIDE_ARROW: &str = "->";

/// Whether `name` must be written as a quoted token.
///
/// The empty name never quotes: it encodes to a zero-length bare token.
pub fn needs_quoting(name: &str) -> bool {
    if name.is_empty() {
        return false;
    }
    name.contains(QUOTE_TRIGGERS)
        || name.contains(OVERRIDE_ARROW)
        || name.starts_with(char::is_whitespace)
        || name.ends_with(char::is_whitespace)
}

/// Encode a name into its canonical textual form.
pub fn encode_name(name: &str) -> String {
    if !needs_quoting(name) {
        return name.to_string();
    }

    let mut out = String::with_capacity(name.len() + 2);
    out.push('"');
    let mut chars = name.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => {
                // CRLF from a multi-line text box collapses into one newline escape
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
                out.push_str("\\n");
            }
            _ => out.push(c),
        }
    }
    out.push('"');
    out
}

/// Decode a token (bare or quoted) back into the in-memory name.
///
/// Bare tokens pass through unchanged. An unterminated quoted token decodes
/// its whole body, so a half-typed name still resolves.
pub fn decode_name(token: &str) -> String {
    if !token.starts_with('"') {
        return token.to_string();
    }
    let end = quoted_token_len(token).map_or(token.len(), |len| len - 1);
    unescape(&token[1..end])
}

/// Byte length of the quoted token at the start of `input`, closing quote
/// included. Escaped quotes (`\"`) do not terminate the token.
///
/// Returns `None` if `input` does not start with `"` or the token is unterminated.
pub fn quoted_token_len(input: &str) -> Option<usize> {
    let body = input.strip_prefix('"')?;
    let mut escaped = false;
    for (i, c) in body.char_indices() {
        match c {
            _ if escaped => escaped = false,
            '\\' => escaped = true,
            '"' => return Some(i + 2),
            _ => {}
        }
    }
    None
}

fn unescape(body: &str) -> String {
    let mut out = String::with_capacity(body.len());
    let mut chars = body.chars().peekable();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.peek() {
            Some('n') => {
                out.push('\n');
                chars.next();
            }
            Some('"') => {
                out.push('"');
                chars.next();
            }
            _ => out.push('\\'),
        }
    }
    out
}

/// Normalize a decoded name for identity comparison.
///
/// Literal `\n` escapes count as newlines, every whitespace run collapses to a
/// single space, and ASCII letters are lowercased. No Unicode normalization.
pub fn normalize_name(name: &str) -> String {
    name.replace("\\n", "\n")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_ascii_lowercase()
}

/// Case-insensitive, whitespace-collapsing name equality.
pub fn names_match(a: &str, b: &str) -> bool {
    normalize_name(a) == normalize_name(b)
}
