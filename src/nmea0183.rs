//! # NMEA 0183 Sentence Framing
//!
//! This module slices a raw sentence of the form `$TTPPP,D1,D2,...,Dn*CC` into its
//! talker identifier, payload identifier and payload span, and computes the XOR checksum
//! of the sentence body.
//!
//! Framing is purely structural: [`frame`] checks the `$` start marker and nothing else.
//! Checksum verification is opt-in through [`frame_checked`], configured by
//! [`ChecksumMode`].

use nom::{
    AsBytes, AsChar, Err, Input, Parser,
    bytes::complete::take,
    character::complete::{char, hex_digit0},
    combinator::opt,
    error::{ErrorKind, ParseError},
    number::complete::hex_u32,
};

use crate::{
    Error,
    identifier::{PayloadId, TalkerId},
    parsing::consumed,
};

/// Marks the beginning of a sentence.
pub const START_MARKER: char = '$';

const TALKER_ID_LEN: usize = 2;
const PAYLOAD_ID_LEN: usize = 3;

/// A framed sentence borrowing from the caller's line.
///
/// The payload span starts right after the identifiers, normally on the `,` that opens
/// the first field, and runs to the end of the line (checksum trailer included).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sentence<'a> {
    raw: &'a str,
    talker: &'a str,
    payload_code: &'a str,
    talker_id: TalkerId,
    payload_id: PayloadId,
    payload: Option<&'a str>,
}

impl<'a> Sentence<'a> {
    /// The complete line the sentence was framed from.
    pub fn raw(&self) -> &'a str {
        self.raw
    }

    /// Resolved talker identifier, [`TalkerId::Unknown`] if the code is not in the table.
    pub fn talker_id(&self) -> TalkerId {
        self.talker_id
    }

    /// Resolved payload identifier, [`PayloadId::Unknown`] if the code is not in the table.
    pub fn payload_id(&self) -> PayloadId {
        self.payload_id
    }

    /// The two-letter talker code as it appears in the line.
    pub fn talker_code(&self) -> &'a str {
        self.talker
    }

    /// The three-letter payload code as it appears in the line.
    pub fn payload_code(&self) -> &'a str {
        self.payload_code
    }

    /// The payload span, or `None` if nothing follows the identifiers.
    pub fn payload(&self) -> Option<&'a str> {
        self.payload
    }
}

/// Defines how [`frame_checked`] should handle the `*CC` checksum trailer.
///
/// The trailer is a two-digit hexadecimal value representing the XOR of all bytes
/// between the `$` and the `*` (see [`checksum`]).
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub enum ChecksumMode {
    /// Checksum is required and must be present.
    ///
    /// Framing fails if no `*CC` trailer is found at the end of the sentence.
    /// If a checksum is present, it is validated against the calculated checksum.
    #[default]
    Required,

    /// Checksum is optional but will be validated if present.
    ///
    /// Use this mode when working with mixed sources or legacy equipment that may not
    /// always include checksums.
    Optional,
}

/// Frames a raw sentence.
///
/// The first byte must be `$`. The next two bytes are the talker code and the three after
/// them the payload code, with no delimiter in between; both are resolved against the
/// identifier tables, unknown codes resolving to `Unknown`. Everything after the payload
/// code is the payload span. A line too short to hold both codes frames with unknown
/// identifiers and no payload.
///
/// # Errors
///
/// - [`Error::NonAscii`] if the line contains non-ASCII bytes.
/// - [`Error::MissingStartMarker`] if the line does not start with `$`.
///
/// # Examples
///
/// ```rust
/// use nmea0183_scan::{PayloadId, TalkerId, frame};
///
/// let sentence = frame("$GNGGA,092725.00,4717.11399,N*5B").unwrap();
/// assert_eq!(sentence.talker_id(), TalkerId::Gn);
/// assert_eq!(sentence.payload_id(), PayloadId::Gga);
/// assert_eq!(sentence.payload(), Some(",092725.00,4717.11399,N*5B"));
/// ```
pub fn frame(line: &str) -> Result<Sentence<'_>, Error<&str>> {
    if !line.is_ascii() {
        return Err(Error::NonAscii);
    }

    let Ok((i, _)) = char::<_, Error<&str>>(START_MARKER).parse(line) else {
        return Err(Error::MissingStartMarker);
    };

    let identifiers: nom::IResult<_, _, Error<&str>> =
        (take(TALKER_ID_LEN), take(PAYLOAD_ID_LEN)).parse(i);

    let sentence = match identifiers {
        Ok((payload, (talker, payload_code))) => Sentence {
            raw: line,
            talker,
            payload_code,
            talker_id: TalkerId::from_code(talker.as_bytes()),
            payload_id: PayloadId::from_code(payload_code.as_bytes()),
            payload: (!payload.is_empty()).then_some(payload),
        },
        Err(_) => Sentence {
            raw: line,
            talker: "",
            payload_code: "",
            talker_id: TalkerId::Unknown,
            payload_id: PayloadId::Unknown,
            payload: None,
        },
    };

    trace!(
        "framed {:?}/{:?} ({} payload bytes)",
        sentence.talker_id,
        sentence.payload_id,
        sentence.payload.map_or(0, str::len)
    );

    Ok(sentence)
}

/// Frames a raw sentence after validating its checksum trailer.
///
/// # Errors
///
/// Besides the errors of [`frame`]:
/// - [`Error::ParsingError`] if the trailer is required but missing, or is not exactly two
///   hexadecimal digits.
/// - [`Error::ChecksumMismatch`] if the trailer does not match the sentence body.
///
/// # Examples
///
/// ```rust
/// use nmea0183_scan::{ChecksumMode, Error, frame_checked};
///
/// let line = "$GNGGA,092725.00,4717.11399,N,00833.91590,E,1,08,1.01,499.6,M,48.0,M,,*45";
/// assert!(frame_checked(line, ChecksumMode::Required).is_ok());
///
/// let corrupted = "$GNGGA,092725.00,4717.11399,N,00833.91590,E,1,08,1.01,499.6,M,48.0,M,,*5C";
/// assert_eq!(
///     frame_checked(corrupted, ChecksumMode::Required),
///     Err(Error::ChecksumMismatch { expected: 0x45, found: 0x5C })
/// );
///
/// assert!(frame_checked("$GPGGA,data", ChecksumMode::Optional).is_ok());
/// assert!(frame_checked("$GPGGA,data", ChecksumMode::Required).is_err());
/// ```
pub fn frame_checked(line: &str, cc: ChecksumMode) -> Result<Sentence<'_>, Error<&str>> {
    if !line.is_ascii() {
        return Err(Error::NonAscii);
    }

    let trailer = line.find('*').map_or("", |at| &line[at..]);
    let found = match checksum_trailer(cc).parse(trailer) {
        Ok((_, found)) => found,
        Err(Err::Error(e) | Err::Failure(e)) => return Err(Error::ParsingError(e)),
        Err(Err::Incomplete(_)) => {
            return Err(Error::from_error_kind(trailer, ErrorKind::Eof));
        }
    };

    let sentence = frame(line)?;

    if let Some(found) = found {
        let expected = checksum(line);
        if found != expected {
            debug!("checksum mismatch: expected {:02X}, found {:02X}", expected, found);
            return Err(Error::ChecksumMismatch { expected, found });
        }
    }

    Ok(sentence)
}

/// Creates a parser for the `*CC` checksum trailer.
///
/// # Arguments
///
/// * `cc` - Checksum requirement:
///   - [`ChecksumMode::Required`]: Parser will fail if no `*CC` is present
///   - [`ChecksumMode::Optional`]: Parser accepts input with or without `*CC`
///
/// # Returns
///
/// A parser that extracts the checksum value ([`None`] if no checksum present). The input
/// must be the trailer alone: anything after the two hexadecimal digits is an error.
///
/// # Examples
///
/// ```rust
/// use nmea0183_scan::{ChecksumMode, checksum_trailer};
/// use nom::{IResult, Parser};
///
/// let mut parser = checksum_trailer(ChecksumMode::Required);
/// let result: IResult<_, _> = parser.parse("*51");
/// assert_eq!(result, Ok(("", Some(0x51))));
///
/// let mut parser = checksum_trailer(ChecksumMode::Optional);
/// let result: IResult<_, _> = parser.parse("");
/// assert_eq!(result, Ok(("", None)));
/// ```
pub fn checksum_trailer<I, E: ParseError<I>>(
    cc: ChecksumMode,
) -> impl FnMut(I) -> nom::IResult<I, Option<u8>, E>
where
    I: Input + AsBytes,
    <I as Input>::Item: AsChar,
{
    move |i: I| {
        let (cc, parse_cc) = match cc {
            ChecksumMode::Required => char('*').map(|_| true).parse(i)?,
            ChecksumMode::Optional => opt(char('*')).map(|parse_cc| parse_cc.is_some()).parse(i)?,
        };

        if parse_cc {
            let (_, cc) = consumed(take(2u8), ErrorKind::Count).parse(cc)?;
            let (_, cc) = consumed(hex_digit0, ErrorKind::IsA).parse(cc)?;

            hex_u32.map(|cc| Some(cc as u8)).parse(cc)
        } else if cc.input_len() != 0 {
            Err(Err::Error(E::from_error_kind(cc, ErrorKind::Count)))
        } else {
            Ok((cc, None))
        }
    }
}

/// Calculates the NMEA 0183 checksum of a sentence.
///
/// The checksum is the XOR of all bytes strictly between the leading `$` (skipped if
/// present) and the first `*` (or the end of input if there is none). The trailer itself
/// is neither parsed nor compared.
///
/// # Examples
///
/// ```rust
/// use nmea0183_scan::checksum;
///
/// assert_eq!(checksum("$GPGGA,123456,data*41"), 0x41);
/// assert_eq!(checksum("GPGGA,123456,data"), 0x41);
/// ```
pub fn checksum<I>(input: I) -> u8
where
    I: AsBytes,
{
    let bytes = input.as_bytes();
    let bytes = bytes.strip_prefix(b"$").unwrap_or(bytes);

    bytes
        .iter()
        .take_while(|&&byte| byte != b'*')
        .fold(0u8, |accumulated_xor, &byte| accumulated_xor ^ byte)
}

/// Formats a checksum value as a two-digit uppercase hexadecimal string.
///
/// # Examples
///
/// ```rust
/// use nmea0183_scan::format_checksum;
///
/// assert_eq!(format_checksum(0x41), "41");
/// assert_eq!(format_checksum(0x0A), "0A");
/// ```
pub fn format_checksum(checksum: u8) -> heapless::String<2> {
    const DIGITS: &[u8; 16] = b"0123456789ABCDEF";

    let mut s = heapless::String::new();
    for nibble in [checksum >> 4, checksum & 0x0F] {
        // two ASCII digits always fit
        let _ = s.push(DIGITS[nibble as usize] as char);
    }
    s
}
