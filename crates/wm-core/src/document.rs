//! Map text as an immutable sequence of lines.
//!
//! Lines are addressed 1-indexed from the outside. The document splits on
//! `\n` only, so a `\r` before the break stays with its line and CRLF text
//! round-trips byte-for-byte.

use std::fmt;

/// An immutable map text document.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Document {
    lines: Vec<String>,
}

impl Document {
    /// Split map text into lines.
    pub fn parse(text: &str) -> Self {
        Self {
            lines: text.split('\n').map(str::to_string).collect(),
        }
    }

    /// Reassemble the full map text.
    pub fn to_text(&self) -> String {
        self.lines.join("\n")
    }

    /// Content of the 1-indexed line, without its `\r` terminator.
    pub fn line(&self, number: usize) -> Option<&str> {
        let raw = self.raw_line(number)?;
        Some(raw.strip_suffix('\r').unwrap_or(raw))
    }

    /// The 1-indexed line exactly as stored.
    pub fn raw_line(&self, number: usize) -> Option<&str> {
        let index = number.checked_sub(1)?;
        self.lines.get(index).map(String::as_str)
    }

    /// Iterate `(line_number, content)` pairs, content without `\r`.
    pub fn lines(&self) -> impl Iterator<Item = (usize, &str)> {
        self.lines.iter().enumerate().map(|(i, raw)| {
            let content = raw.strip_suffix('\r').unwrap_or(raw);
            (i + 1, content)
        })
    }

    /// Return a new document with the 1-indexed line's content replaced.
    ///
    /// The original line's `\r` terminator is carried over. Returns `None`
    /// when the line does not exist.
    #[must_use = "documents are immutable; the replaced copy is the result"]
    pub fn with_line(&self, number: usize, content: &str) -> Option<Self> {
        let index = number.checked_sub(1)?;
        let raw = self.lines.get(index)?;
        let mut replacement = content.to_string();
        if raw.ends_with('\r') {
            replacement.push('\r');
        }
        let mut lines = self.lines.clone();
        lines[index] = replacement;
        Some(Self { lines })
    }

    /// 1-indexed numbers of lines that differ between `self` and `other`.
    /// Lines present in only one of the two documents count as changed.
    pub fn changed_lines(&self, other: &Document) -> Vec<usize> {
        let longest = self.lines.len().max(other.lines.len());
        (0..longest)
            .filter(|&i| self.lines.get(i) != other.lines.get(i))
            .map(|i| i + 1)
            .collect()
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}
