#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    Error, Sentence, Time,
    identifier::PayloadId,
    nmea_content::{Decode, Location},
    scan::{Scan, Slot, scan},
};

/// GLL - Geographic Position - Latitude/Longitude
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_gll_geographic_position_latitudelongitude>
///
/// ```text
///         1       2 3        4 5         6 7
///         |       | |        | |         | |
///  $--GLL,ddmm.mm,a,dddmm.mm,a,hhmmss.ss,a,m*hh<CR><LF>
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GLL {
    /// Position
    pub location: Location,
    /// Fix time in UTC
    pub time: Time,
    /// Status, `A` valid or `V` invalid
    pub status: char,
    /// Positioning mode indicator
    pub pos_mode: char,
}

impl Default for GLL {
    fn default() -> Self {
        Self {
            location: Location::default(),
            time: Time::default(),
            status: ' ',
            pos_mode: ' ',
        }
    }
}

impl GLL {
    fn slots(&mut self) -> [Slot<'_>; 7] {
        [
            Slot::Location(&mut self.location.latitude),
            Slot::Direction(&mut self.location.north),
            Slot::Location(&mut self.location.longitude),
            Slot::Direction(&mut self.location.east),
            Slot::Time(&mut self.time),
            Slot::Char(&mut self.status),
            Slot::Char(&mut self.pos_mode),
        ]
    }
}

impl Decode for GLL {
    const PAYLOAD: PayloadId = PayloadId::Gll;
    const FORMAT: &'static str = "LqLqTcc";

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
        let mut gll = GLL::default();
        let format = gll.slots().map(|slot| char::from(slot.directive()));
        assert!(format.into_iter().eq(GLL::FORMAT.chars()));
    }

    #[test]
    fn test_gll_parsing() {
        let sentence = frame("$GPGLL,4717.11364,N,00833.91565,E,092321.00,A,A*60").unwrap();
        let gll = GLL::decode(&sentence).unwrap();

        assert_eq!(gll.location.latitude, 472_852_273);
        assert_eq!(gll.location.north, 1);
        assert_eq!(gll.location.longitude, 85_652_608);
        assert_eq!(gll.location.east, 1);
        assert_eq!(
            gll.time,
            Time {
                hour: 9,
                minute: 23,
                second: 21
            }
        );
        assert_eq!(gll.status, 'A');
        assert_eq!(gll.pos_mode, 'A');
    }

    #[test]
    fn test_gll_legacy_without_mode() {
        let sentence = frame("$GPGLL,4916.45,N,12311.12,W,225444,A*31").unwrap();

        let mut gll = GLL::default();
        let result = gll.scan_into(&sentence);

        assert_eq!(result, Ok(Scan::Partial { fields: 6 }));
        assert_eq!(gll.location.east, -1);
        assert_eq!(gll.status, 'A');
        assert_eq!(gll.pos_mode, ' ');
    }
}
