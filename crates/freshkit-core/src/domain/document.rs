//! A minimal text document with cursor positions and block-comment lookup.
//!
//! Positions follow the editor convention: zero-based line and character.
//! Offsets are byte offsets into the document text; callers are expected
//! to pass positions that fall on character boundaries (documents come
//! from source files, not arbitrary binary).

use std::ops::Range;

/// A zero-based (line, character) cursor position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub line: u32,
    pub character: u32,
}

impl Position {
    pub const fn new(line: u32, character: u32) -> Self {
        Self { line, character }
    }
}

/// In-memory document text with precomputed line starts.
#[derive(Debug, Clone)]
pub struct Document {
    text: String,
    line_starts: Vec<usize>,
}

impl Document {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let mut line_starts = vec![0];
        for (i, b) in text.bytes().enumerate() {
            if b == b'\n' {
                line_starts.push(i + 1);
            }
        }
        Self { text, line_starts }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// The text of one line, without the trailing newline.
    ///
    /// Out-of-range lines read as empty, matching how completion requests
    /// behave on positions past the end of the document.
    pub fn line_text(&self, line: u32) -> &str {
        let Some(&start) = self.line_starts.get(line as usize) else {
            return "";
        };
        let end = self
            .line_starts
            .get(line as usize + 1)
            .map_or(self.text.len(), |next| next - 1);
        &self.text[start..end]
    }

    /// Byte offset of a position, clamped to the line end and document end.
    pub fn offset_at(&self, position: Position) -> usize {
        let Some(&start) = self.line_starts.get(position.line as usize) else {
            return self.text.len();
        };
        let line_end = start + self.line_text(position.line).len();
        (start + position.character as usize).min(line_end)
    }

    /// Locate the block comment enclosing `position`.
    ///
    /// Searches backward from the cursor for the nearest `/**` opener,
    /// then forward from the opener for the nearest `*/`. Returns `None`
    /// when either marker is absent.
    pub fn block_comment_at(&self, position: Position) -> Option<Range<usize>> {
        let offset = self.offset_at(position);

        // An opener counts when it starts at or before the cursor.
        let search_end = (offset + "/**".len()).min(self.text.len());
        let start = self.text[..search_end].rfind("/**")?;

        let close = self.text[start..].find("*/")?;
        let end = start + close + "*/".len();

        Some(start..end)
    }
}
