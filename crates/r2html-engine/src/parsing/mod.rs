//! # Script-to-markdown conversion
//!
//! Turns an annotated R script into R markdown in two phases:
//!
//! 1. **Line classification** (`classify`): each right-trimmed line is
//!    classified independently and transformed into its markdown form
//! 2. **Chunk merging** (`chunk`): a global pass over the assembled output
//!    collapses adjacent single-line code chunks into one chunk
//!
//! Classification rules, tried in order (first match wins):
//!
//! - `## @end@` stops the conversion; the rest of the input is discarded
//! - a line ending with `@` becomes an explicit blank line
//! - a line starting with `### ` becomes a header; the number of leading
//!   stars after the prefix sets the level
//! - a line starting with `## ` becomes a comment inside a code chunk
//! - a line starting with `#` becomes plain markdown text
//! - any other non-empty line becomes code inside a code chunk
//! - empty lines are dropped

pub mod chunk;
pub mod classify;

pub use chunk::{CodeChunk, merge_adjacent_chunks};
pub use classify::{END_MARKER, FormatError, LineClass, classify, is_end_marker};

/// Result of converting a whole script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    /// Merged markdown text, ready to be written to an `.Rmd` file.
    pub markdown: String,
    /// Whether the end marker cut the input short.
    pub truncated: bool,
}

/// Classify and transform a single raw line.
///
/// Returns the markdown output for the line, or `None` when the line emits
/// nothing (end marker, empty line). An empty `Some` string is a deliberate
/// blank line.
pub fn transform_line(line: &str) -> Result<Option<String>, FormatError> {
    Ok(classify(line)?.emit())
}

/// Convert a sequence of raw script lines into markdown.
///
/// Lines are right-trimmed and transformed one by one. The loop stops as
/// soon as the end marker is seen and draws nothing further from the
/// iterator. The chunk merge pass runs once over the fully assembled output,
/// not incrementally, so that chunks produced by different rules still
/// coalesce.
pub fn convert<I, S>(lines: I) -> Result<Conversion, FormatError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out = String::new();
    let mut truncated = false;

    for raw in lines {
        let line = raw.as_ref().trim_end();
        if is_end_marker(line) {
            truncated = true;
            break;
        }
        if let Some(text) = transform_line(line)? {
            out.push_str(&text);
            out.push('\n');
        }
    }

    Ok(Conversion {
        markdown: merge_adjacent_chunks(&out),
        truncated,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn convert_stops_at_end_marker() {
        let lines = ["x <- 1", "## @end@", "y <- 2", "### broken header"];
        let result = convert(lines).unwrap();

        assert!(result.truncated);
        assert_eq!(result.markdown, "```{r}\nx <- 1\n```\n");
    }

    #[test]
    fn convert_without_end_marker_is_not_truncated() {
        let result = convert(["x <- 1"]).unwrap();
        assert!(!result.truncated);
    }

    #[test]
    fn adjacent_code_lines_share_one_chunk() {
        let result = convert(["x <- 1", "y <- 2"]).unwrap();
        assert_eq!(result.markdown, "```{r}\nx <- 1\ny <- 2\n```\n");
    }

    #[test]
    fn code_comment_merges_with_following_code() {
        // Different rules produce these two chunks, the merge pass still
        // joins them.
        let result = convert(["## a comment kept in the chunk", "x <- 1"]).unwrap();
        assert_eq!(
            result.markdown,
            "```{r}\n# a comment kept in the chunk\nx <- 1\n```\n"
        );
    }

    #[test]
    fn empty_lines_emit_nothing() {
        let result = convert(["", "", ""]).unwrap();
        assert_eq!(result.markdown, "");
    }

    #[test]
    fn blank_override_emits_an_empty_line() {
        let result = convert(["@"]).unwrap();
        assert_eq!(result.markdown, "\n");
    }

    #[test]
    fn header_without_stars_aborts_the_conversion() {
        let result = convert(["x <- 1", "### Title"]);
        assert!(matches!(result, Err(FormatError::HeaderWithoutStars(_))));
    }

    #[test]
    fn transform_line_emits_nothing_for_end_marker() {
        assert_eq!(transform_line("## @end@").unwrap(), None);
    }

    #[test]
    fn input_lines_are_right_trimmed() {
        let result = convert(["# hello   \t"]).unwrap();
        assert_eq!(result.markdown, "hello\n");
    }

    #[test]
    fn trailing_whitespace_does_not_hide_the_blank_override() {
        let result = convert(["some text @   "]).unwrap();
        assert_eq!(result.markdown, "\n");
    }
}
