//! # NMEA 0183 Scanner
//!
//! This library decodes NMEA 0183 sentences of the form `$TTPPP,D1,D2,...,Dn*CC` emitted
//! by GNSS receivers, without allocating.
//!
//! Decoding happens in three layers:
//! - [`frame`] slices a line into talker identifier, payload identifier and payload span,
//!   and [`frame_checked`] additionally validates the `*CC` checksum trailer.
//! - [`scan`] walks the payload fields in lock-step with a list of typed [`Slot`]s, each
//!   selected by a one-character [`Directive`].
//! - The `nmea-content` feature provides records for the common sentence types, each
//!   decoded by a fixed format, and the [`parse`] shortcut.
//!
//! ## Usage
//!
//! ```rust
//! use nmea0183_scan::{ChecksumMode, frame_checked, nmea_content::{Decode, GGA}};
//!
//! let line = "$GNGGA,092725.00,4717.11399,N,00833.91590,E,1,08,1.01,499.6,M,48.0,M,,*45";
//! let sentence = frame_checked(line, ChecksumMode::Required).unwrap();
//!
//! let gga = GGA::decode(&sentence).unwrap();
//! assert_eq!(gga.location.latitude, 472_852_332);
//! assert_eq!(gga.satellites, 8);
//! ```
//!
//! ## Features
//!
//! - `std` (default): enables `std` support in nom.
//! - `nmea-content` (default): sentence records and the [`parse`] dispatcher.
//! - `serde`: `Serialize`/`Deserialize` for all records.
//! - `time`: conversions from [`Time`] and [`Date`] to the `time` crate.
//! - `log`: trace and debug logging through the `log` facade.

#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(feature = "log")]
macro_rules! trace {
    ($($arg:tt)+) => { log::trace!($($arg)+) };
}

#[cfg(not(feature = "log"))]
macro_rules! trace {
    ($($arg:tt)+) => {
        if false {
            let _ = format_args!($($arg)+);
        }
    };
}

#[cfg(feature = "log")]
macro_rules! debug {
    ($($arg:tt)+) => { log::debug!($($arg)+) };
}

#[cfg(not(feature = "log"))]
macro_rules! debug {
    ($($arg:tt)+) => {
        if false {
            let _ = format_args!($($arg)+);
        }
    };
}

pub mod cursor;
mod datetime;
pub mod error;
pub mod identifier;
mod nmea0183;
#[cfg(feature = "nmea-content")]
#[cfg_attr(docsrs, doc(cfg(feature = "nmea-content")))]
pub mod nmea_content;
pub mod parsing;
pub mod scan;

pub use cursor::MAX_FIELD_LEN;
pub use datetime::{Date, Time};
pub use error::{Error, IResult};
pub use identifier::{PayloadId, TalkerId};
pub use nmea0183::*;
pub use scan::{Directive, Scan, Slot, scan};

#[cfg(feature = "nmea-content")]
pub use nmea_content::{NmeaSentence, parse};

#[cfg(doctest)]
#[doc = include_str!("../README.md")]
struct README;

#[cfg(test)]
mod tests {
    mod checksum;
    mod framing;
}
