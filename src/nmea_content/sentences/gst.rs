#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    Error, Sentence, Time,
    identifier::PayloadId,
    nmea_content::Decode,
    scan::{Scan, Slot, scan},
};

/// GST - GNSS Pseudorange Error Statistics
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_gst_gps_pseudorange_noise_statistics>
///
/// ```text
///         1         2   3   4   5   6   7   8
///         |         |   |   |   |   |   |   |
///  $--GST,hhmmss.ss,x.x,x.x,x.x,x.x,x.x,x.x,x.x*hh<CR><LF>
/// ```
///
/// All deviations are in meters.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct GST {
    /// UTC time of the associated fix
    pub time: Time,
    /// RMS value of the standard deviation of the ranges
    pub range_rms: f32,
    /// Standard deviation of the semi-major axis
    pub std_major: f32,
    /// Standard deviation of the semi-minor axis
    pub std_minor: f32,
    /// Orientation of the semi-major axis, in degrees
    pub orient: f32,
    /// Standard deviation of latitude error
    pub std_lat: f32,
    /// Standard deviation of longitude error
    pub std_lon: f32,
    /// Standard deviation of altitude error
    pub std_alt: f32,
}

impl GST {
    fn slots(&mut self) -> [Slot<'_>; 8] {
        [
            Slot::Time(&mut self.time),
            Slot::Float(&mut self.range_rms),
            Slot::Float(&mut self.std_major),
            Slot::Float(&mut self.std_minor),
            Slot::Float(&mut self.orient),
            Slot::Float(&mut self.std_lat),
            Slot::Float(&mut self.std_lon),
            Slot::Float(&mut self.std_alt),
        ]
    }
}

impl Decode for GST {
    const PAYLOAD: PayloadId = PayloadId::Gst;
    const FORMAT: &'static str = "Tfffffff";

    fn scan_fields<'a>(&mut self, sentence: &Sentence<'a>) -> Result<Scan, Error<&'a str>> {
        scan(sentence, &mut self.slots())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame;

    #[test]
    fn test_format() {
        let mut gst = GST::default();
        let format = gst.slots().map(|slot| char::from(slot.directive()));
        assert!(format.into_iter().eq(GST::FORMAT.chars()));
    }

    #[test]
    fn test_gst_parsing() {
        let sentence = frame("$GPGST,082356.00,1.8,,,,1.7,1.3,2.2*7E").unwrap();
        let gst = GST::decode(&sentence).unwrap();

        assert_eq!(
            gst,
            GST {
                time: Time {
                    hour: 8,
                    minute: 23,
                    second: 56
                },
                range_rms: 1.8,
                std_major: 0.0,
                std_minor: 0.0,
                orient: 0.0,
                std_lat: 1.7,
                std_lon: 1.3,
                std_alt: 2.2,
            }
        );
    }
}
