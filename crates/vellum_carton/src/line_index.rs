//! Line index for mapping byte offsets to line/column positions.
//!
//! Diagnostics carry byte offsets; reporters need 1-based line and column
//! numbers. The index records the start offset of every line once, then
//! answers lookups with a binary search.

use memchr::memchr_iter;

/// Precomputed line start offsets for a source text.
#[derive(Debug, Clone)]
pub struct LineIndex {
    /// Byte offset where each line starts (first entry is always 0)
    line_starts: Vec<u32>,
    /// Total source length in bytes
    len: u32,
}

impl LineIndex {
    /// Build an index over `source` (SIMD-accelerated newline scan)
    pub fn new(source: &str) -> Self {
        let bytes = source.as_bytes();
        let mut line_starts = Vec::with_capacity(bytes.len() / 32 + 1);
        line_starts.push(0);
        line_starts.extend(memchr_iter(b'\n', bytes).map(|pos| (pos + 1) as u32));

        Self {
            line_starts,
            len: bytes.len() as u32,
        }
    }

    /// Number of lines in the source
    #[inline]
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Convert a byte offset into a 1-based `(line, column)` pair.
    ///
    /// Offsets past the end of the source are clamped to the end.
    /// Columns count bytes, matching the offsets diagnostics carry.
    pub fn line_col(&self, offset: u32) -> (u32, u32) {
        let offset = offset.min(self.len);
        let line = match self.line_starts.binary_search(&offset) {
            Ok(exact) => exact,
            Err(next) => next - 1,
        };
        let column = offset - self.line_starts[line];
        (line as u32 + 1, column + 1)
    }
}
