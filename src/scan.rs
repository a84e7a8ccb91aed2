//! # Format Scanner
//!
//! Walks a sequence of typed output slots in lock-step with the fields of a sentence.
//!
//! Each [`Slot`] pairs a [`Directive`] with a mutable reference to the place the parsed
//! value goes. A decoder describes its sentence as a fixed-size slot array, so the number
//! and types of destinations are checked by the compiler rather than at runtime:
//!
//! ```rust
//! use nmea0183_scan::{Scan, Slot, Time, frame, scan};
//!
//! let sentence = frame("$GPGST,082356.00,1.8,,,,1.7,1.3,2.2*7E").unwrap();
//!
//! let mut time = Time::default();
//! let mut rms = 0.0f32;
//! let result = scan(&sentence, &mut [Slot::Time(&mut time), Slot::Float(&mut rms)]);
//!
//! assert_eq!(result, Ok(Scan::Complete));
//! assert_eq!((time.hour, time.minute, time.second), (8, 23, 56));
//! assert_eq!(rms, 1.8);
//! ```

use nom::{
    Parser,
    character::complete::anychar,
    error::{ErrorKind, ParseError},
};

use crate::{
    Error, IResult, Sentence,
    cursor::{Boundary, FieldCursor, MAX_FIELD_LEN},
    datetime::{Date, Time},
    parsing,
};

/// One character of a format string, selecting how a field is parsed and what an empty
/// field defaults to.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Directive {
    /// `c` - single character, defaults to `' '`
    Char,
    /// `d` - signed 32-bit integer, defaults to `0`
    Int,
    /// `f` - 32-bit float, defaults to `0.0`
    Float,
    /// `F` - 64-bit float, defaults to `0.0`
    Double,
    /// `u` - unsigned 32-bit integer, defaults to `0`
    UInt,
    /// `i` - unsigned byte, defaults to `0`
    Byte,
    /// `s` - raw field text, defaults to empty
    Str,
    /// `q` - hemisphere as `+1`/`-1`, defaults to `0`
    Direction,
    /// `D` - `ddmmyy` date, defaults to [`Date::EMPTY`]
    Date,
    /// `T` - `hhmmss` time, defaults to [`Time::EMPTY`]
    Time,
    /// `L` - fixed-point coordinate, defaults to `-1`
    Location,
    /// `_` - field is skipped
    Ignore,
}

impl Directive {
    /// Every directive, in format-alphabet order.
    pub const ALL: [Self; 12] = [
        Self::Char,
        Self::Int,
        Self::Float,
        Self::Double,
        Self::UInt,
        Self::Byte,
        Self::Str,
        Self::Direction,
        Self::Date,
        Self::Time,
        Self::Location,
        Self::Ignore,
    ];
}

impl From<Directive> for char {
    fn from(directive: Directive) -> char {
        match directive {
            Directive::Char => 'c',
            Directive::Int => 'd',
            Directive::Float => 'f',
            Directive::Double => 'F',
            Directive::UInt => 'u',
            Directive::Byte => 'i',
            Directive::Str => 's',
            Directive::Direction => 'q',
            Directive::Date => 'D',
            Directive::Time => 'T',
            Directive::Location => 'L',
            Directive::Ignore => '_',
        }
    }
}

impl TryFrom<char> for Directive {
    type Error = char;

    fn try_from(c: char) -> Result<Self, char> {
        Self::ALL
            .into_iter()
            .find(|directive| char::from(*directive) == c)
            .ok_or(c)
    }
}

/// A typed destination for one field.
#[derive(Debug)]
pub enum Slot<'r> {
    Char(&'r mut char),
    Int(&'r mut i32),
    Float(&'r mut f32),
    Double(&'r mut f64),
    UInt(&'r mut u32),
    Byte(&'r mut u8),
    Str(&'r mut heapless::String<MAX_FIELD_LEN>),
    Direction(&'r mut i8),
    Date(&'r mut Date),
    Time(&'r mut Time),
    /// Fixed-point degrees, see [`parsing::LOCATION_SCALE`].
    Location(&'r mut i32),
    Ignore,
}

impl Slot<'_> {
    /// The directive this slot stands for in a format string.
    pub fn directive(&self) -> Directive {
        match self {
            Slot::Char(_) => Directive::Char,
            Slot::Int(_) => Directive::Int,
            Slot::Float(_) => Directive::Float,
            Slot::Double(_) => Directive::Double,
            Slot::UInt(_) => Directive::UInt,
            Slot::Byte(_) => Directive::Byte,
            Slot::Str(_) => Directive::Str,
            Slot::Direction(_) => Directive::Direction,
            Slot::Date(_) => Directive::Date,
            Slot::Time(_) => Directive::Time,
            Slot::Location(_) => Directive::Location,
            Slot::Ignore => Directive::Ignore,
        }
    }

    /// Writes the empty-field default of the directive.
    pub fn clear(&mut self) {
        match self {
            Slot::Char(out) => **out = ' ',
            Slot::Int(out) => **out = 0,
            Slot::Float(out) => **out = 0.0,
            Slot::Double(out) => **out = 0.0,
            Slot::UInt(out) => **out = 0,
            Slot::Byte(out) => **out = 0,
            Slot::Str(out) => out.clear(),
            Slot::Direction(out) => **out = 0,
            Slot::Date(out) => **out = Date::EMPTY,
            Slot::Time(out) => **out = Time::EMPTY,
            Slot::Location(out) => **out = -1,
            Slot::Ignore => {}
        }
    }

    /// Parses `field` into the destination, or writes the default if it is empty.
    ///
    /// Nothing is written when the field is rejected.
    pub fn fill<'a>(&mut self, field: &'a str) -> IResult<&'a str, ()> {
        if field.is_empty() {
            self.clear();
            return Ok((field, ()));
        }

        match self {
            Slot::Char(out) => write(&mut **out, anychar, field),
            Slot::Int(out) => write(&mut **out, parsing::signed, field),
            Slot::Float(out) => write(&mut **out, parsing::float, field),
            Slot::Double(out) => write(&mut **out, parsing::double, field),
            Slot::UInt(out) => write(&mut **out, parsing::unsigned, field),
            Slot::Byte(out) => write(&mut **out, parsing::small_unsigned, field),
            Slot::Str(out) => {
                **out = heapless::String::try_from(field).map_err(|_| {
                    nom::Err::Error(Error::from_error_kind(field, ErrorKind::TooLarge))
                })?;
                Ok(("", ()))
            }
            Slot::Direction(out) => write(&mut **out, parsing::direction, field),
            Slot::Date(out) => write(&mut **out, parsing::date, field),
            Slot::Time(out) => write(&mut **out, parsing::time, field),
            Slot::Location(out) => write(&mut **out, parsing::location, field),
            Slot::Ignore => Ok(("", ())),
        }
    }
}

fn write<'a, T, P>(out: &mut T, mut parser: P, field: &'a str) -> IResult<&'a str, ()>
where
    P: Parser<&'a str, Output = T, Error = Error<&'a str>>,
{
    let (rest, value) = parser.parse(field)?;
    *out = value;
    Ok((rest, ()))
}

/// How far a successful scan got through its slots.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scan {
    /// Every slot was matched with a field of the sentence.
    Complete,
    /// The sentence ended after `fields` fields; the remaining slots hold their
    /// empty-field defaults.
    Partial {
        /// Number of slots matched with a field
        fields: usize,
    },
}

impl Scan {
    /// Returns `true` if every slot was matched with a field.
    pub fn is_complete(&self) -> bool {
        matches!(self, Scan::Complete)
    }
}

/// Scans the payload of `sentence` into `slots`, one field per slot.
///
/// Fields past the last slot are ignored. If the sentence ends before the last slot, the
/// scan succeeds with [`Scan::Partial`] and the unmatched slots receive their empty-field
/// defaults, so every destination is written exactly once. A payload that opens on the
/// terminator (`$GPVTG*12`) has no fields at all and reports `Partial { fields: 0 }`.
///
/// # Errors
///
/// - [`Error::EmptyPayload`] if the sentence has no payload span. Nothing is written.
/// - [`Error::InvalidField`] if a non-empty field does not conform to its directive.
/// - [`Error::FieldOverflow`] if a field is not closed within [`MAX_FIELD_LEN`] bytes.
///
/// After a scan error the slots before the failing field keep their new values and the
/// remaining slots are left untouched.
pub fn scan<'a>(sentence: &Sentence<'a>, slots: &mut [Slot<'_>]) -> Result<Scan, Error<&'a str>> {
    let payload = sentence.payload().ok_or(Error::EmptyPayload)?;
    let mut cursor = FieldCursor::new(payload);

    if cursor.at_terminator() {
        slots.iter_mut().for_each(Slot::clear);
        return Ok(match slots.len() {
            0 => Scan::Complete,
            _ => Scan::Partial { fields: 0 },
        });
    }

    for index in 0..slots.len() {
        let field = cursor.current();
        if field.end == Boundary::Overflow {
            debug!("field {} overflows at byte {}", index, cursor.position());
            return Err(Error::FieldOverflow { index });
        }

        let slot = &mut slots[index];
        if slot.fill(field.text).is_err() {
            let directive = slot.directive();
            debug!("field {} rejected by {:?}: {:?}", index, directive, field.text);
            return Err(Error::InvalidField {
                index,
                directive,
                field: field.text,
            });
        }

        if cursor.advance() == Boundary::Terminator {
            let fields = index + 1;
            if fields == slots.len() {
                return Ok(Scan::Complete);
            }

            slots[fields..].iter_mut().for_each(Slot::clear);
            return Ok(Scan::Partial { fields });
        }
    }

    Ok(Scan::Complete)
}
