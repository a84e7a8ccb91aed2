use nom::{Err, IResult, Parser, error::ErrorKind};

use crate::{ChecksumMode, Error, checksum, checksum_trailer, format_checksum, frame_checked};

const GGA: &str = "$GNGGA,092725.00,4717.11399,N,00833.91590,E,1,08,1.01,499.6,M,48.0,M,,*45";
const GGA_STALE: &str =
    "$GNGGA,092725.00,4717.11399,N,00833.91590,E,1,08,1.01,499.6,M,48.0,M,,*5B";

fn error_kind(res: IResult<&str, Option<u8>>) -> ErrorKind {
    match res.unwrap_err() {
        Err::Error(error) => error.code,
        _ => panic!("Unexpected error"),
    }
}

#[test]
fn test_checksum_trailer_ok() {
    let res: IResult<_, _> = checksum_trailer(ChecksumMode::Required).parse("*1F");
    assert_eq!(res, Ok(("", Some(0x1F))));

    let res: IResult<_, _> = checksum_trailer(ChecksumMode::Optional).parse("*1f");
    assert_eq!(res, Ok(("", Some(0x1F))));
}

#[test]
fn test_checksum_trailer_large_hex() {
    let res = checksum_trailer(ChecksumMode::Required).parse("*1F43");
    assert_eq!(error_kind(res), ErrorKind::Count);
}

#[test]
fn test_checksum_trailer_large_text() {
    let res = checksum_trailer(ChecksumMode::Required).parse("*1Fzz");
    assert_eq!(error_kind(res), ErrorKind::Count);
}

#[test]
fn test_checksum_trailer_small() {
    let res = checksum_trailer(ChecksumMode::Required).parse("*1");
    assert_eq!(error_kind(res), ErrorKind::Eof);
}

#[test]
fn test_checksum_trailer_non_hex() {
    let res = checksum_trailer(ChecksumMode::Required).parse("*1z");
    assert_eq!(error_kind(res), ErrorKind::IsA);
}

#[test]
fn test_checksum_trailer_missing() {
    let res: IResult<_, _> = checksum_trailer(ChecksumMode::Required).parse("");
    assert!(res.is_err());

    let res: IResult<_, _> = checksum_trailer(ChecksumMode::Optional).parse("");
    assert_eq!(res, Ok(("", None)));

    let res = checksum_trailer(ChecksumMode::Optional).parse("12");
    assert_eq!(error_kind(res), ErrorKind::Count);
}

#[test]
fn test_checksum() {
    assert_eq!(checksum(GGA), 0x45);
    assert_eq!(checksum(&GGA[1..]), 0x45);
    assert_eq!(checksum(GGA.as_bytes()), 0x45);
    assert_eq!(checksum("$"), 0);
    assert_eq!(checksum(""), 0);
    assert_eq!(checksum("$*FF"), 0);
}

#[test]
fn test_format_checksum() {
    assert_eq!(format_checksum(0x45), "45");
    assert_eq!(format_checksum(0x0D), "0D");
    assert_eq!(format_checksum(0xFF), "FF");
    assert_eq!(format_checksum(0), "00");
}

#[test]
fn test_frame_checked() {
    let sentence = frame_checked(GGA, ChecksumMode::Required).unwrap();
    assert_eq!(sentence.raw(), GGA);

    assert_eq!(
        frame_checked(GGA_STALE, ChecksumMode::Optional),
        Err(Error::ChecksumMismatch {
            expected: 0x45,
            found: 0x5B
        })
    );

    let bare = &GGA[..GGA.len() - 3];
    assert!(frame_checked(bare, ChecksumMode::Optional).is_ok());
    assert!(matches!(
        frame_checked(bare, ChecksumMode::Required),
        Err(Error::ParsingError(_))
    ));

    assert_eq!(
        frame_checked("GNGGA,1*00", ChecksumMode::Required),
        Err(Error::MissingStartMarker)
    );
}
