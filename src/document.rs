//! Document snapshot and line-shape utilities.
//!
//! The engine never runs a YAML grammar over the document: in-progress
//! documents are syntactically invalid most of the time, so everything
//! works on lines, leading whitespace, and `key:` shapes.

/// Read-only view of the document supplied by the host for one request.
///
/// The snapshot does not own the text and is rebuilt per request; nothing
/// derived from it survives across edits.
#[derive(Debug, Clone)]
pub struct DocumentSnapshot<'a> {
    lines: Vec<&'a str>,
}

impl<'a> DocumentSnapshot<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            lines: text.lines().collect(),
        }
    }

    /// Line at `index`, or `None` when out of range.
    ///
    /// Cursor positions can point one line past the end of the text (a
    /// trailing newline without content), so callers treat `None` as an
    /// empty line rather than an error.
    pub fn line(&self, index: usize) -> Option<&'a str> {
        self.lines.get(index).copied()
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn lines(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.lines.iter().copied()
    }
}

/// Number of leading whitespace characters on a line.
pub fn indent_level(line: &str) -> usize {
    line.chars().take_while(|c| c.is_whitespace()).count()
}

/// Whether a line is empty or whitespace only.
pub fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

/// Extract the key of a `key:` line.
///
/// The key is a maximal run of non-whitespace, non-colon characters
/// immediately followed by `:`. Sequence-marker lines (`- Name:`) and free
/// text yield `None`.
pub fn key_token(line: &str) -> Option<&str> {
    let trimmed = line.trim_start();
    let end = trimmed.find(|c: char| c == ':' || c.is_whitespace())?;
    if end == 0 || !trimmed[end..].starts_with(':') {
        return None;
    }
    Some(&trimmed[..end])
}

/// Extract the identifier of a `- Name:` sequence-element line.
///
/// Whitespace is allowed after the dash and before the colon.
pub fn sequence_element_key(line: &str) -> Option<&str> {
    let rest = line.trim_start().strip_prefix('-')?.trim_start();
    let end = rest.find(|c: char| c == ':' || c.is_whitespace())?;
    if end == 0 {
        return None;
    }
    rest[end..]
        .trim_start()
        .starts_with(':')
        .then(|| &rest[..end])
}
