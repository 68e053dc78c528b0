//! Byte offset to line/column conversion.

/// Start offset of every line, for `O(log L)` line lookups.
///
/// ```
/// use sable_diagnostic::span_utils::LineOffsetTable;
///
/// let table = LineOffsetTable::build("int x = 1;\nx += 2;");
/// assert_eq!(table.offset_to_line_col(0), (1, 1));
/// assert_eq!(table.offset_to_line_col(13), (2, 3));
/// ```
#[derive(Clone, Debug, Default)]
pub struct LineOffsetTable {
    offsets: Vec<u32>,
}

impl LineOffsetTable {
    pub fn build(source: &str) -> Self {
        let mut offsets = vec![0u32];
        offsets.extend(
            source
                .bytes()
                .enumerate()
                .filter(|&(_, b)| b == b'\n')
                .filter_map(|(i, _)| u32::try_from(i + 1).ok()),
        );
        LineOffsetTable { offsets }
    }

    /// 1-based line containing `offset`.
    pub fn line_from_offset(&self, offset: u32) -> u32 {
        let idx = match self.offsets.binary_search(&offset) {
            Ok(exact) => exact,
            Err(insert) => insert.saturating_sub(1),
        };
        u32::try_from(idx).unwrap_or(u32::MAX).saturating_add(1)
    }

    /// 1-based `(line, column)`; columns count bytes.
    pub fn offset_to_line_col(&self, offset: u32) -> (u32, u32) {
        let line = self.line_from_offset(offset);
        let start = self.line_start(line);
        (line, offset - start + 1)
    }

    fn line_start(&self, line: u32) -> u32 {
        self.offsets
            .get(line.saturating_sub(1) as usize)
            .copied()
            .unwrap_or(0)
    }

    /// Text of a 1-based line, without its newline.
    pub fn line_text<'s>(&self, source: &'s str, line: u32) -> &'s str {
        let start = self.line_start(line) as usize;
        let end = self
            .offsets
            .get(line as usize)
            .map_or(source.len(), |next| (*next as usize).saturating_sub(1));
        source.get(start..end.max(start)).unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookups_across_lines() {
        let src = "a\nbc\n\ndef";
        let table = LineOffsetTable::build(src);
        assert_eq!(table.offset_to_line_col(0), (1, 1));
        assert_eq!(table.offset_to_line_col(3), (2, 2));
        assert_eq!(table.offset_to_line_col(5), (3, 1));
        assert_eq!(table.offset_to_line_col(8), (4, 3));
    }

    #[test]
    fn line_text_strips_newline() {
        let src = "first\nsecond\nthird";
        let table = LineOffsetTable::build(src);
        assert_eq!(table.line_text(src, 1), "first");
        assert_eq!(table.line_text(src, 2), "second");
        assert_eq!(table.line_text(src, 3), "third");
    }

    #[test]
    fn offset_past_last_newline() {
        let table = LineOffsetTable::build("x\n  y");
        assert_eq!(table.offset_to_line_col(4), (2, 3));
    }
}
