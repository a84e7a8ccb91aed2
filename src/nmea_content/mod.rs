//! # NMEA Content
//!
//! Strongly-typed records for the supported sentence types, each decoded by a fixed
//! format of [`Slot`](crate::Slot)s.

pub mod sentences;

pub use sentences::*;

use crate::parsing::LOCATION_SCALE;

/// Position as fixed-point degrees with separate hemisphere signs.
///
/// `latitude` and `longitude` are unsigned decimal degrees times 10^7, `-1` when the field
/// was empty. `north` and `east` are `+1` for N/E, `-1` for S/W and `0` when absent.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Location {
    pub latitude: i32,
    pub north: i8,
    pub longitude: i32,
    pub east: i8,
}

impl Location {
    /// Signed latitude in degrees, `None` if either field was empty.
    pub fn latitude_degrees(&self) -> Option<f64> {
        signed_degrees(self.latitude, self.north)
    }

    /// Signed longitude in degrees, `None` if either field was empty.
    pub fn longitude_degrees(&self) -> Option<f64> {
        signed_degrees(self.longitude, self.east)
    }
}

impl Default for Location {
    fn default() -> Self {
        Self {
            latitude: -1,
            north: 0,
            longitude: -1,
            east: 0,
        }
    }
}

fn signed_degrees(value: i32, sign: i8) -> Option<f64> {
    if value < 0 || sign == 0 {
        return None;
    }
    Some(f64::from(sign) * f64::from(value) / LOCATION_SCALE as f64)
}

/// Satellite information used in [`GSV`] sentences
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Satellite {
    /// Satellite ID number
    pub prn: i32,
    /// Elevation in degrees
    pub elevation: i32,
    /// Azimuth in degrees
    pub azimuth: i32,
    /// Signal strength (C/N0) in dBHz
    pub snr: i32,
}
