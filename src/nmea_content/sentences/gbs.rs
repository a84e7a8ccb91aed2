#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    Error, Sentence, Time,
    identifier::PayloadId,
    nmea_content::Decode,
    scan::{Scan, Slot, scan},
};

/// GBS - GNSS Satellite Fault Detection
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_gbs_gps_satellite_fault_detection>
///
/// ```text
///         1         2   3   4   5   6   7   8
///         |         |   |   |   |   |   |   |
///  $--GBS,hhmmss.ss,x.x,x.x,x.x,x.x,x.x,x.x,x.x*hh<CR><LF>
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct GBS {
    /// UTC time of the GGA or GNS fix associated with this sentence
    pub time: Time,
    /// Expected error in latitude, in meters
    pub err_lat: f32,
    /// Expected error in longitude, in meters
    pub err_lon: f32,
    /// Expected error in altitude, in meters
    pub err_alt: f32,
    /// ID of most likely failed satellite
    pub svid: i32,
    /// Probability of missed detection for most likely failed satellite
    pub prob: f32,
    /// Estimated bias of most likely failed satellite, in meters
    pub bias: f32,
    /// Standard deviation of estimated bias
    pub stddev: f32,
}

impl GBS {
    fn slots(&mut self) -> [Slot<'_>; 8] {
        [
            Slot::Time(&mut self.time),
            Slot::Float(&mut self.err_lat),
            Slot::Float(&mut self.err_lon),
            Slot::Float(&mut self.err_alt),
            Slot::Int(&mut self.svid),
            Slot::Float(&mut self.prob),
            Slot::Float(&mut self.bias),
            Slot::Float(&mut self.stddev),
        ]
    }
}

impl Decode for GBS {
    const PAYLOAD: PayloadId = PayloadId::Gbs;
    const FORMAT: &'static str = "Tfffdfff";

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
        let mut gbs = GBS::default();
        let format = gbs.slots().map(|slot| char::from(slot.directive()));
        assert!(format.into_iter().eq(GBS::FORMAT.chars()));
    }

    #[test]
    fn test_gbs_empty_fields() {
        let sentence = frame("$GNGBS,170556.00,3.0,2.9,8.3,,,,*5C").unwrap();

        let mut gbs = GBS {
            svid: 7,
            prob: 1.0,
            bias: 1.0,
            stddev: 1.0,
            ..GBS::default()
        };
        let result = gbs.scan_into(&sentence);

        assert_eq!(result, Ok(Scan::Complete));
        assert_eq!(gbs.time.hour, 17);
        assert_eq!(gbs.err_lat, 3.0);
        assert_eq!(gbs.err_lon, 2.9);
        assert_eq!(gbs.err_alt, 8.3);
        assert_eq!(gbs.svid, 0);
        assert_eq!(gbs.prob, 0.0);
        assert_eq!(gbs.bias, 0.0);
        assert_eq!(gbs.stddev, 0.0);
    }

    #[test]
    fn test_gbs_failed_satellite() {
        let sentence = frame("$GPGBS,235458.00,1.4,1.3,3.1,03,,-21.4,3.8,1,0*5A").unwrap();
        let gbs = GBS::decode(&sentence).unwrap();

        assert_eq!(gbs.svid, 3);
        assert_eq!(gbs.prob, 0.0);
        assert_eq!(gbs.bias, -21.4);
        assert_eq!(gbs.stddev, 3.8);
    }
}
