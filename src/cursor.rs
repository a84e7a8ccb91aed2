//! # Field Cursor
//!
//! Bounded tokenizer over the comma-delimited fields of a sentence payload.
//!
//! The cursor always sits on a boundary byte: initially the separator that opens the
//! payload, then the separator or terminator that closed the previous field. The field
//! under the cursor is the run of bytes after that position up to the next `,`, `*` or
//! end of input, and it may be at most [`MAX_FIELD_LEN`] - 1 bytes long.

use nom::{Parser, bytes::complete::take_till};

use crate::IResult;

/// Number of bytes the cursor looks ahead for the next boundary.
pub const MAX_FIELD_LEN: usize = 16;

/// Separates two fields.
pub const FIELD_SEPARATOR: char = ',';

/// Ends the fields of a sentence and introduces the checksum trailer.
pub const TERMINATOR: char = '*';

/// What ends the field under the cursor.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Boundary {
    /// A `,` follows, so there is another field.
    Separator,
    /// A `*` or the end of input follows: the sentence ended cleanly.
    Terminator,
    /// No boundary within [`MAX_FIELD_LEN`] bytes: the sentence is malformed.
    Overflow,
}

/// The field under a [`FieldCursor`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field<'a> {
    /// Field content, without the surrounding boundaries.
    pub text: &'a str,
    /// What ends the field.
    pub end: Boundary,
}

impl Field<'_> {
    /// A field is empty when a boundary immediately follows the previous one.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Position of the scanner within a payload span.
///
/// The cursor is a plain value: every scan creates its own, so concurrent scans of
/// different sentences never share state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldCursor<'a> {
    payload: &'a str,
    pos: usize,
}

impl<'a> FieldCursor<'a> {
    /// Places a cursor on the first byte of `payload`, which is expected to be the
    /// separator that precedes the first field.
    pub fn new(payload: &'a str) -> Self {
        Self { payload, pos: 0 }
    }

    /// Byte offset of the cursor within the payload.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Returns `true` when the cursor rests on a `*` or past the end of the payload.
    pub fn at_terminator(&self) -> bool {
        matches!(self.payload.as_bytes().get(self.pos), None | Some(b'*'))
    }

    /// Returns the field following the cursor without moving it.
    pub fn current(&self) -> Field<'a> {
        let rest = self.payload.get(self.pos + 1..).unwrap_or("");
        let mut limit = rest.len().min(MAX_FIELD_LEN);
        while !rest.is_char_boundary(limit) {
            limit -= 1;
        }
        let window = &rest[..limit];

        let text = match field_text(window) {
            Ok((_, text)) => text,
            Err(_) => window,
        };

        let truncated = text.len() == window.len() && window.len() < rest.len();
        let end = if text.len() >= MAX_FIELD_LEN || truncated {
            Boundary::Overflow
        } else {
            match rest[text.len()..].chars().next() {
                Some(FIELD_SEPARATOR) => Boundary::Separator,
                _ => Boundary::Terminator,
            }
        };

        Field { text, end }
    }

    /// Moves the cursor onto the boundary that ends the current field.
    ///
    /// On [`Boundary::Overflow`] the cursor moves to the end of the look-ahead window, so
    /// a single advance never moves it more than [`MAX_FIELD_LEN`] bytes.
    pub fn advance(&mut self) -> Boundary {
        let field = self.current();
        self.pos = (self.pos + 1 + field.text.len()).min(self.payload.len());
        field.end
    }
}

fn field_text(i: &str) -> IResult<&str, &str> {
    take_till(|c: char| c == FIELD_SEPARATOR || c == TERMINATOR).parse(i)
}
