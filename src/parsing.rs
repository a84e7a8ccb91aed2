//! # Parsing Utilities
//!
//! This module provides the nom parsers that turn the content of a single field into a
//! typed value, plus a combinator for ensuring complete consumption of input data.
//!
//! Field parsers receive only the text of one field (without separators). Numeric parsers
//! read the leading number and ignore whatever follows it inside the field, so `1.01`
//! scanned as an integer yields `1`.

use nom::{
    Err, Input, Mode, OutputMode, PResult, Parser, ToUsize,
    bytes::complete::{take, take_while_m_n},
    character::complete::{char, digit0, digit1, one_of},
    combinator::{map_opt, opt, peek},
    error::{ErrorKind, ParseError},
    sequence::preceded,
};

use crate::{
    Error, IResult,
    datetime::{Date, Time},
};

/// Fixed-point scale of location values: decimal degrees times 10^7.
pub const LOCATION_SCALE: i64 = 10_000_000;

/// Fractional minute digits taken into account by [`location`]; further digits are dropped.
const MAX_FRACTION_DIGITS: usize = 9;

/// Ensures that the parser consumes all input.
///
/// This combinator runs the provided parser and then checks that no input is left,
/// returning an error of kind `e` otherwise.
///
/// # Examples
///
/// ```rust
/// use nmea0183_scan::parsing::consumed;
/// use nom::{IResult, Parser, bytes::complete::take, error::ErrorKind};
///
/// // Parse all 3 bytes
/// let mut parser = consumed(take(3u8), ErrorKind::Count);
/// let result: IResult<_, _> = parser.parse("abc");
/// assert!(result.is_ok());
///
/// // This would fail because not all input is consumed
/// let result = parser.parse("abcd");
/// assert!(result.is_err());
/// ```
pub fn consumed<I, E: ParseError<I>, F>(
    f: F,
    e: ErrorKind,
) -> impl Parser<I, Output = <F as Parser<I>>::Output, Error = E>
where
    I: Input,
    F: Parser<I, Error = E>,
{
    Consumed { f, e }
}

struct Consumed<F> {
    f: F,
    e: ErrorKind,
}

impl<I, F> Parser<I> for Consumed<F>
where
    I: Input,
    F: Parser<I>,
{
    type Output = <F as Parser<I>>::Output;
    type Error = <F as Parser<I>>::Error;

    fn process<OM: OutputMode>(&mut self, i: I) -> PResult<OM, I, Self::Output, Self::Error> {
        let (i, o) = self.f.process::<OM>(i)?;

        if i.input_len() != 0 {
            return Err(Err::Error(OM::Error::bind(|| {
                <F as Parser<I>>::Error::from_error_kind(i, self.e)
            })));
        }

        Ok((i, o))
    }
}

/// Takes `count` characters and runs `parser` on them alone.
pub fn with_take<'a, O, P, C>(
    count: C,
    parser: P,
) -> impl Parser<&'a str, Output = O, Error = Error<&'a str>>
where
    P: Parser<&'a str, Output = O, Error = Error<&'a str>>,
    C: ToUsize,
{
    take(count).and_then(parser)
}

/// Requires the field to start with a digit or a sign before running `parser`.
pub fn numeric<'a, O, P>(parser: P) -> impl Parser<&'a str, Output = O, Error = Error<&'a str>>
where
    P: Parser<&'a str, Output = O, Error = Error<&'a str>>,
{
    preceded(peek(one_of("+-0123456789")), parser)
}

/// Signed decimal integer.
pub fn signed(i: &str) -> IResult<&str, i32> {
    numeric(nom::character::complete::i32).parse(i)
}

/// Decimal integer reinterpreted as unsigned, so `-1` becomes `u32::MAX`.
pub fn unsigned(i: &str) -> IResult<&str, u32> {
    numeric(nom::character::complete::i64)
        .map(|value| value as u32)
        .parse(i)
}

/// Decimal integer narrowed to a byte.
pub fn small_unsigned(i: &str) -> IResult<&str, u8> {
    numeric(nom::character::complete::i64)
        .map(|value| value as u8)
        .parse(i)
}

/// Decimal or fractional number.
pub fn float(i: &str) -> IResult<&str, f32> {
    numeric(nom::number::complete::float).parse(i)
}

/// Decimal or fractional number in double precision.
pub fn double(i: &str) -> IResult<&str, f64> {
    numeric(nom::number::complete::double).parse(i)
}

/// Hemisphere letter as a sign: `N`/`E` are `+1`, `S`/`W` are `-1`.
pub fn direction(i: &str) -> IResult<&str, i8> {
    one_of("NESW")
        .map(|c| match c {
            'N' | 'E' => 1,
            _ => -1,
        })
        .parse(i)
}

fn six_digits(i: &str) -> IResult<&str, &str> {
    take_while_m_n(6, 6, |c: char| c.is_ascii_digit()).parse(i)
}

/// `ddmmyy` date, with the two-digit year offset by 2000.
pub fn date(i: &str) -> IResult<&str, Date> {
    let (i, (day, month, year)) = six_digits
        .and_then((
            with_take(2u8, nom::character::complete::u8),
            with_take(2u8, nom::character::complete::u8),
            with_take(2u8, nom::character::complete::u8),
        ))
        .parse(i)?;

    Ok((
        i,
        Date {
            year: 2000 + year as i32,
            month: month as i32,
            day: day as i32,
        },
    ))
}

/// `hhmmss` time of day; trailing sub-second digits are left unparsed.
pub fn time(i: &str) -> IResult<&str, Time> {
    let (i, (hour, minute, second)) = six_digits
        .and_then((
            with_take(2u8, nom::character::complete::i8),
            with_take(2u8, nom::character::complete::i8),
            with_take(2u8, nom::character::complete::i8),
        ))
        .parse(i)?;

    Ok((
        i,
        Time {
            hour,
            minute,
            second,
        },
    ))
}

/// `dddmm.mmmm` coordinate as fixed-point decimal degrees (see [`LOCATION_SCALE`]).
///
/// The hemisphere is carried by a separate field; a leading `-` only negates the value.
pub fn location(i: &str) -> IResult<&str, i32> {
    map_opt(
        (
            opt(one_of("+-")),
            digit1,
            opt(preceded(char('.'), digit0)),
        ),
        |(sign, whole, fraction): (Option<char>, &str, Option<&str>)| {
            let value = degrees_minutes(whole, fraction.unwrap_or(""))?;
            let value = if sign == Some('-') { -value } else { value };
            i32::try_from(value).ok()
        },
    )
    .parse(i)
}

/// Converts the digits of a `dddmm.mmmm` value to degrees times [`LOCATION_SCALE`],
/// rounding half up.
///
/// Everything but the last two whole digits is degrees. The minutes are kept as an
/// integer scaled by the number of fractional digits, so the division by 60 is the
/// only rounding step.
fn degrees_minutes(whole: &str, fraction: &str) -> Option<i64> {
    let whole: i64 = whole.parse().ok()?;
    let fraction = &fraction[..fraction.len().min(MAX_FRACTION_DIGITS)];
    let fraction_scale = 10i64.pow(fraction.len() as u32);
    let fraction: i64 = if fraction.is_empty() {
        0
    } else {
        fraction.parse().ok()?
    };

    let minutes = (whole % 100) * fraction_scale + fraction;
    let divisor = 60 * fraction_scale;
    let minutes = (minutes.checked_mul(LOCATION_SCALE)? + divisor / 2) / divisor;

    (whole / 100).checked_mul(LOCATION_SCALE)?.checked_add(minutes)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference(degrees: f64, minutes: f64) -> f64 {
        (degrees + minutes / 60.0) * LOCATION_SCALE as f64
    }

    #[test]
    fn test_numeric_lead() {
        assert_eq!(signed("-21"), Ok(("", -21)));
        assert_eq!(signed("+7"), Ok(("", 7)));
        assert_eq!(signed("08"), Ok(("", 8)));
        assert_eq!(signed("1.01"), Ok((".01", 1)));
        assert!(signed("P9").is_err());
        assert!(signed(".5").is_err());
        assert!(float("M").is_err());
        assert!(float("nan").is_err());
    }

    #[test]
    fn test_narrowing() {
        assert_eq!(unsigned("-1"), Ok(("", u32::MAX)));
        assert_eq!(small_unsigned("08"), Ok(("", 8)));
        assert_eq!(small_unsigned("257"), Ok(("", 1)));
    }

    #[test]
    fn test_float() {
        assert_eq!(float("499.6"), Ok(("", 499.6)));
        assert_eq!(float("-21.4"), Ok(("", -21.4)));
        assert_eq!(double("0.004"), Ok(("", 0.004)));
    }

    #[test]
    fn test_direction() {
        assert_eq!(direction("N"), Ok(("", 1)));
        assert_eq!(direction("E"), Ok(("", 1)));
        assert_eq!(direction("S"), Ok(("", -1)));
        assert_eq!(direction("W"), Ok(("", -1)));
        assert!(direction("M").is_err());
    }

    #[test]
    fn test_time() {
        let expected = Time {
            hour: 9,
            minute: 27,
            second: 25,
        };
        assert_eq!(time("092725.00"), Ok((".00", expected)));
        assert_eq!(time("092725"), Ok(("", expected)));
        assert!(time("P9PP2725.00").is_err());
        assert!(time("0927").is_err());
        assert!(time("09:27:25").is_err());
    }

    #[test]
    fn test_date() {
        let expected = Date {
            year: 2002,
            month: 12,
            day: 9,
        };
        assert_eq!(date("091202"), Ok(("", expected)));
        assert!(date("0912").is_err());
        assert!(date("09-12-02").is_err());
    }

    #[test]
    fn test_location_rounds_half_up() {
        // 47 + 17.11399 / 60 = 47.285233166..., truncation would give 472852331
        assert_eq!(location("4717.11399"), Ok(("", 472_852_332)));
        assert_eq!(location("00833.91590"), Ok(("", 85_652_650)));
        assert_eq!(location("4717"), Ok(("", 472_833_333)));
        assert_eq!(location("4717."), Ok(("", 472_833_333)));
        assert_eq!(location("-4717.11399"), Ok(("", -472_852_332)));
        assert!(location("N4717").is_err());
    }

    #[test]
    fn test_location_matches_float_reference() {
        let cases = [
            ("4717.11399", 47.0, 17.11399),
            ("00833.91590", 8.0, 33.91590),
            ("4916.29", 49.0, 16.29),
            ("12311.76", 123.0, 11.76),
            ("0000.00001", 0.0, 0.00001),
            ("17959.99999", 179.0, 59.99999),
            ("5107.0017737", 51.0, 7.0017737),
        ];

        for (input, degrees, minutes) in cases {
            let (_, value) = location(input).unwrap();
            let expected = reference(degrees, minutes);
            assert!(
                (value as f64 - expected).abs() <= 1.0,
                "{input}: {value} vs {expected}"
            );
        }
    }

    #[test]
    fn test_location_overflow() {
        assert!(location("99999999999").is_err());
        assert!(location("99999999999999999999999").is_err());
    }
}
