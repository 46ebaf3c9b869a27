//! Source location tracking for error reporting.
//!
//! Dictionaries are parsed one file at a time, so positions are plain
//! byte offsets; a `LineIndex` converts them to the 1-based line/column
//! pairs that error messages carry. The caller attaches the file path
//! when it surfaces an error.

/// Line start table for one source file.
///
/// `line_starts[0]` is always 0; lookups binary-search the table, so
/// building the index once per parse keeps error paths cheap.
#[derive(Debug, Clone)]
pub struct LineIndex {
    line_starts: Vec<u32>,
}

impl LineIndex {
    /// Index the line starts of `source`.
    pub fn new(source: &str) -> Self {
        let mut line_starts = vec![0u32];
        for (offset, byte) in source.bytes().enumerate() {
            if byte == b'\n' {
                line_starts.push(offset as u32 + 1);
            }
        }
        Self { line_starts }
    }

    /// Convert a byte offset to a 1-based (line, column) pair.
    ///
    /// Offsets past the end of the source map to the last line.
    pub fn line_col(&self, offset: u32) -> (u32, u32) {
        let line = match self.line_starts.binary_search(&offset) {
            Ok(idx) => idx,
            Err(idx) => idx - 1,
        };
        let col = offset - self.line_starts[line];
        (line as u32 + 1, col + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_col_single_line() {
        let index = LineIndex::new("dimensions [0 1 -1 0 0 0 0];");
        assert_eq!(index.line_col(0), (1, 1));
        assert_eq!(index.line_col(11), (1, 12));
    }

    #[test]
    fn test_line_col_multi_line() {
        let index = LineIndex::new("a 1;\nb 2;\nc 3;\n");
        assert_eq!(index.line_col(0), (1, 1));
        assert_eq!(index.line_col(5), (2, 1));
        assert_eq!(index.line_col(8), (2, 4));
        assert_eq!(index.line_col(10), (3, 1));
    }

    #[test]
    fn test_line_col_past_end() {
        let index = LineIndex::new("a 1;");
        assert_eq!(index.line_col(100), (1, 101));
    }
}
