use thiserror::Error;

use super::chunk::CodeChunk;

/// Marker line that stops the conversion early.
pub const END_MARKER: &str = "## @end@";

#[derive(Debug, Error)]
pub enum FormatError {
    #[error("header line has no level stars after \"### \": {0:?}")]
    HeaderWithoutStars(String),
}

/// Classification of a single right-trimmed input line.
///
/// Variants are mutually exclusive; [`classify`] tries the rules in
/// declaration order and the first match wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineClass<'a> {
    /// The [`END_MARKER`] line. Emits nothing and stops the conversion.
    EndMarker,
    /// Line ending with `@`, exported as an explicit blank line.
    BlankOverride,
    /// `### ` line; `level` is the star count, `text` the remainder.
    Header { level: usize, text: &'a str },
    /// `## ` line, a comment that stays inside a code chunk.
    CodeComment(&'a str),
    /// `#` line, plain markdown text.
    Comment(&'a str),
    /// Any other non-empty line.
    Code(&'a str),
    /// Zero-length line, dropped from the output.
    Empty,
}

/// Whether this line stops the conversion.
pub fn is_end_marker(line: &str) -> bool {
    line == END_MARKER
}

/// Classify one right-trimmed line.
///
/// The only fatal case is a header line without any level stars; everything
/// else degrades to plain comment or code.
pub fn classify(line: &str) -> Result<LineClass<'_>, FormatError> {
    if is_end_marker(line) {
        Ok(LineClass::EndMarker)
    } else if line.ends_with('@') {
        Ok(LineClass::BlankOverride)
    } else if let Some(rest) = line.strip_prefix("### ") {
        // Order matters: strip the prefix, strip the padding, then count
        // stars. Reordering changes behavior on inputs like "###   **Title".
        let rest = rest.trim_start();
        let text = rest.trim_start_matches('*');
        let level = rest.len() - text.len();
        if level == 0 {
            return Err(FormatError::HeaderWithoutStars(line.to_string()));
        }
        Ok(LineClass::Header {
            level,
            text: text.trim_start(),
        })
    } else if line.starts_with("## ") {
        // Drop exactly one '#' so the chunk keeps a "# " comment.
        Ok(LineClass::CodeComment(&line[1..]))
    } else if line.starts_with('#') {
        Ok(LineClass::Comment(line.trim_start_matches(['#', ' '])))
    } else if line.is_empty() {
        Ok(LineClass::Empty)
    } else {
        Ok(LineClass::Code(line))
    }
}

impl LineClass<'_> {
    /// Markdown output for this line, `None` when the line emits nothing.
    pub fn emit(&self) -> Option<String> {
        match self {
            LineClass::EndMarker | LineClass::Empty => None,
            LineClass::BlankOverride => Some(String::new()),
            LineClass::Header { level, text } => {
                Some(format!("{} {}", "#".repeat(level + 1), text))
            }
            LineClass::CodeComment(text) | LineClass::Code(text) => Some(CodeChunk::wrap(text)),
            LineClass::Comment(text) => Some((*text).to_string()),
        }
    }
}
