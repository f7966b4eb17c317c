//! Immutable cursor over source text.
//!
//! A [`Cursor`] is a `(source, offset)` pair. It never mutates: every read
//! returns a fresh cursor advanced past what was consumed, so a parser can
//! hold on to an earlier cursor and restart from it for free. That is the
//! whole backtracking story of the engine.
//!
//! # Offsets
//!
//! The offset is a byte index that always sits on a `char` boundary.
//! Reads are character-level (Unicode scalar values), not grapheme-level.
//!
//! # Line Positions
//!
//! [`Cursor::line_position`] rescans the consumed prefix, which is O(offset).
//! It is only meant for failure reporting, never for the success path.

use std::fmt;

use crate::EndOfInput;

/// Zero-based line and column of a cursor.
///
/// Columns count characters, not bytes. `\n` starts a new line; every other
/// character (including `\r`) advances the column.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LinePosition {
    /// Zero-based line number.
    pub line: usize,
    /// Zero-based column within the line, in characters.
    pub column: usize,
}

impl LinePosition {
    pub const fn new(line: usize, column: usize) -> Self {
        LinePosition { line, column }
    }
}

impl fmt::Display for LinePosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.line, self.column)
    }
}

/// Immutable position into a source text.
///
/// # Invariant
///
/// `offset <= source.len()` and `offset` lies on a `char` boundary.
/// Both are upheld by construction: cursors only ever advance by the
/// UTF-8 width of characters they have read.
///
/// Two cursors are equal when they point at the same offset of the same
/// source buffer; the text itself is never compared.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'s> {
    source: &'s str,
    offset: usize,
}

impl PartialEq for Cursor<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.offset == other.offset
            && self.source.as_ptr() == other.source.as_ptr()
            && self.source.len() == other.source.len()
    }
}

impl Eq for Cursor<'_> {}

impl<'s> Cursor<'s> {
    /// Create a cursor at the start of `source`.
    pub fn new(source: &'s str) -> Self {
        Cursor { source, offset: 0 }
    }

    /// The full source text this cursor points into.
    #[inline]
    pub fn source(&self) -> &'s str {
        self.source
    }

    /// Current byte offset into the source.
    #[inline]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// The unread remainder of the source.
    #[inline]
    pub fn rest(&self) -> &'s str {
        &self.source[self.offset..]
    }

    /// Returns `true` if every character has been consumed.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.offset >= self.source.len()
    }

    /// Read the character at the cursor.
    ///
    /// Returns the character and a cursor advanced past it, or
    /// [`EndOfInput`] if nothing is left to read.
    #[inline]
    pub fn read_one(self) -> Result<(char, Cursor<'s>), EndOfInput> {
        match self.rest().chars().next() {
            Some(c) => Ok((c, self.advance(c.len_utf8()))),
            None => Err(EndOfInput::new(self.offset)),
        }
    }

    /// Read the next `n` characters as one contiguous slice.
    ///
    /// Fails with [`EndOfInput`] if fewer than `n` characters remain; the
    /// cursor itself is unaffected either way. `read_n(0)` always succeeds
    /// with an empty slice.
    pub fn read_n(self, n: usize) -> Result<(&'s str, Cursor<'s>), EndOfInput> {
        let rest = self.rest();
        let mut chars = rest.chars();
        let mut len = 0;
        for _ in 0..n {
            match chars.next() {
                Some(c) => len += c.len_utf8(),
                None => return Err(EndOfInput::new(self.offset)),
            }
        }
        Ok((&rest[..len], self.advance(len)))
    }

    /// Zero-based `(line, column)` of the cursor.
    ///
    /// Newlines are located with `memchr`; only the characters of the
    /// current line are decoded to count the column.
    pub fn line_position(&self) -> LinePosition {
        let consumed = &self.source.as_bytes()[..self.offset];
        let line = memchr::memchr_iter(b'\n', consumed).count();
        let line_start = memchr::memrchr(b'\n', consumed).map_or(0, |nl| nl + 1);
        let column = self.source[line_start..self.offset].chars().count();
        LinePosition { line, column }
    }

    #[inline]
    fn advance(self, len: usize) -> Cursor<'s> {
        debug_assert!(
            self.offset + len <= self.source.len(),
            "cursor advanced past end of source"
        );
        Cursor {
            source: self.source,
            offset: self.offset + len,
        }
    }
}
