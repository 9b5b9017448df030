/// Fence delimiters for an R code chunk, as knitr expects them.
pub struct CodeChunk;

impl CodeChunk {
    pub const OPEN: &'static str = "```{r}";
    pub const CLOSE: &'static str = "```";

    /// Wrap a single line in its own chunk.
    ///
    /// Adjacent chunks are collapsed later by [`merge_adjacent_chunks`], so
    /// per-line wrapping keeps the emitter stateless.
    pub fn wrap(line: &str) -> String {
        format!("{}\n{}\n{}", Self::OPEN, line, Self::CLOSE)
    }
}

/// Remove every close-fence/open-fence pair with nothing in between, so
/// consecutive single-line chunks end up in one contiguous chunk.
pub fn merge_adjacent_chunks(text: &str) -> String {
    let seam = format!("{}\n{}\n", CodeChunk::CLOSE, CodeChunk::OPEN);
    text.replace(&seam, "")
}
