//! Foundation types shared by every other module.
//!
//! - [`LineIndex`] - byte offset to 1-based line conversion
//!
//! This module has NO dependencies on other yangtree modules.

/// Maps byte offsets into a document to 1-based physical line numbers.
///
/// Built once per parse and queried for every token, so lookups are a
/// binary search over precomputed line starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineIndex {
    /// Byte offset of the first character of each line, always starting with 0.
    line_starts: Vec<usize>,
}

impl LineIndex {
    pub fn new(text: &str) -> Self {
        let mut line_starts = vec![0];
        for (offset, byte) in text.bytes().enumerate() {
            if byte == b'\n' {
                line_starts.push(offset + 1);
            }
        }
        Self { line_starts }
    }

    /// 1-based line containing `offset`. Offsets past the end of the
    /// document map to the last line.
    pub fn line_of(&self, offset: usize) -> usize {
        self.line_starts.partition_point(|&start| start <= offset)
    }

    /// Number of physical lines (at least 1, even for an empty document).
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_has_one_line() {
        let index = LineIndex::new("");
        assert_eq!(index.line_count(), 1);
        assert_eq!(index.line_of(0), 1);
    }

    #[test]
    fn offsets_map_to_lines() {
        let index = LineIndex::new("ab\ncd\nef");
        assert_eq!(index.line_of(0), 1);
        assert_eq!(index.line_of(2), 1);
        assert_eq!(index.line_of(3), 2);
        assert_eq!(index.line_of(6), 3);
        assert_eq!(index.line_count(), 3);
    }

    #[test]
    fn offset_past_end_maps_to_last_line() {
        let index = LineIndex::new("a\nb");
        assert_eq!(index.line_of(100), 2);
    }
}
