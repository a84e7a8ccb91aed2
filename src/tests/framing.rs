use core::fmt::Write;

use crate::{Error, PayloadId, TalkerId, frame};

#[test]
fn test_identifier_round_trip() {
    for &talker in TalkerId::ALL {
        for &payload in PayloadId::ALL {
            let (Some(talker_code), Some(payload_code)) = (talker.code(), payload.code()) else {
                panic!("known identifiers have a code");
            };

            let mut line = heapless::String::<16>::new();
            write!(line, "${talker_code}{payload_code},1,2*00").unwrap();
            let sentence = frame(&line).unwrap();

            assert_eq!(sentence.talker_id(), talker);
            assert_eq!(sentence.payload_id(), payload);
            assert_eq!(sentence.talker_code(), talker_code);
            assert_eq!(sentence.payload_code(), payload_code);
            assert_eq!(sentence.payload(), Some(",1,2*00"));
        }
    }
}

#[test]
fn test_unknown_identifiers() {
    let sentence = frame("$XXYYY,1*00").unwrap();

    assert_eq!(sentence.talker_id(), TalkerId::Unknown);
    assert_eq!(sentence.payload_id(), PayloadId::Unknown);
    assert_eq!(u8::from(sentence.talker_id()), 0);
    assert_eq!(u8::from(sentence.payload_id()), 0);
    assert_eq!(sentence.payload_code(), "YYY");
}

#[test]
fn test_missing_start_marker() {
    assert_eq!(frame("GPGGA,1,2"), Err(Error::MissingStartMarker));
    assert_eq!(frame("!GPGGA,1,2"), Err(Error::MissingStartMarker));
    assert_eq!(frame(""), Err(Error::MissingStartMarker));
}

#[test]
fn test_non_ascii() {
    assert_eq!(frame("$GPGGA,1°2"), Err(Error::NonAscii));
}

#[test]
fn test_short_lines() {
    let sentence = frame("$GPG").unwrap();
    assert_eq!(sentence.talker_id(), TalkerId::Unknown);
    assert_eq!(sentence.payload_id(), PayloadId::Unknown);
    assert_eq!(sentence.payload(), None);

    let sentence = frame("$GPZDA").unwrap();
    assert_eq!(sentence.talker_id(), TalkerId::Gp);
    assert_eq!(sentence.payload_id(), PayloadId::Zda);
    assert_eq!(sentence.payload(), None);
}
