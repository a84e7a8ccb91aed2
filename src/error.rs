//! # Error Types
//!
//! This module defines the error types used throughout the NMEA decoding library.

use nom::error::{ErrorKind, FromExternalError, ParseError};

use crate::{cursor::MAX_FIELD_LEN, identifier::PayloadId, scan::Directive};

/// Holds the result of parsing functions.
///
/// It depends on the input type `I`, the output type `O`, and the error type `E`
/// (by default `nom::error::Error<I>`).
///
/// The `Ok` side is a pair containing the remainder of the input (the part of the data that
/// was not parsed) and the produced value. The `Err` side contains an instance of `nom::Err`.
///
/// Outside of the parsing code, you can use the [nom::Finish::finish] method to convert
/// it to a more common result type.
pub type IResult<I, O, E = nom::error::Error<I>> = nom::IResult<I, O, Error<I, E>>;

/// Represents all possible errors that can occur while framing or decoding a sentence.
///
/// Framing and routing errors are reported before anything is written to a record.
/// Scan errors ([`Error::InvalidField`], [`Error::FieldOverflow`]) abort the remaining
/// directives but keep the fields written so far, so a record whose scan failed must be
/// treated as partial and discarded.
#[derive(Debug, PartialEq, thiserror::Error)]
pub enum Error<I, E = nom::error::Error<I>> {
    /// The sentence does not begin with the `$` start marker.
    #[error("sentence does not start with '$'")]
    MissingStartMarker,

    /// The provided input contains non-ASCII characters.
    ///
    /// NMEA sentences must be ASCII-only for fixed-width identifier slicing and checksum
    /// calculation.
    #[error("sentence contains non-ASCII characters")]
    NonAscii,

    /// The checksum trailer of the sentence does not match its body.
    #[error("checksum mismatch: expected {expected:#04X}, found {found:#04X}")]
    ChecksumMismatch {
        /// The checksum calculated from the sentence body
        expected: u8,
        /// The checksum found in the `*hh` trailer
        found: u8,
    },

    /// The sentence was routed to a decoder for a different payload type.
    ///
    /// This is a routing mismatch rather than a parse failure; nothing has been written.
    #[error("expected a {expected:?} sentence, found {found:?}")]
    UnsupportedPayload {
        /// The payload type handled by the decoder
        expected: PayloadId,
        /// The payload type resolved while framing
        found: PayloadId,
    },

    /// The payload type has no decoder.
    ///
    /// Contains the three-letter payload code for reference.
    #[error("no decoder for payload {0:?}")]
    UnrecognizedMessage(I),

    /// The sentence has no payload span to scan.
    #[error("sentence has no payload")]
    EmptyPayload,

    /// A field does not conform to the directive scanning it.
    #[error("field {index} is not a valid {directive:?}: {field:?}")]
    InvalidField {
        /// Zero-based position of the field in the payload
        index: usize,
        /// The directive that rejected the field
        directive: Directive,
        /// The raw field content
        field: I,
    },

    /// A field runs past the maximum field length without reaching a separator or terminator.
    #[error("field {index} is not closed within {} bytes", MAX_FIELD_LEN)]
    FieldOverflow {
        /// Zero-based position of the field in the payload
        index: usize,
    },

    /// The input could not be parsed by one of the underlying nom parsers.
    #[error("parsing error: {0:?}")]
    ParsingError(E),
}

impl<I, E> ParseError<I> for Error<I, E>
where
    E: ParseError<I>,
{
    fn from_error_kind(input: I, kind: ErrorKind) -> Self {
        Error::ParsingError(E::from_error_kind(input, kind))
    }

    fn append(_: I, _: ErrorKind, other: Self) -> Self {
        other
    }
}

impl<I, E, EX> FromExternalError<I, EX> for Error<I, E>
where
    E: FromExternalError<I, EX>,
{
    fn from_external_error(input: I, kind: ErrorKind, e: EX) -> Self {
        Error::ParsingError(E::from_external_error(input, kind, e))
    }
}
