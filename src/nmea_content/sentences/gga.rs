#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    Error, Sentence, Time,
    identifier::PayloadId,
    nmea_content::{Decode, Location},
    scan::{Scan, Slot, scan},
};

/// GGA - Global Positioning System Fix Data
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_gga_global_positioning_system_fix_data>
///
/// ```text
///                                                      11
///         1         2       3 4        5 6 7  8   9  10 |  12 13  14   15
///         |         |       | |        | | |  |   |   | |   | |   |    |
///  $--GGA,hhmmss.ss,ddmm.mm,a,ddmm.mm,a,x,xx,x.x,x.x,M,x.x,M,x.x,xxxx*hh<CR><LF>
/// ```
///
/// Fields 1 to 7 are decoded, the rest of the sentence is ignored.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct GGA {
    /// Fix time in UTC
    pub time: Time,
    /// Fix position
    pub location: Location,
    /// GPS quality indicator
    pub quality: u8,
    /// Number of satellites in use
    pub satellites: u8,
}

impl GGA {
    fn slots(&mut self) -> [Slot<'_>; 7] {
        [
            Slot::Time(&mut self.time),
            Slot::Location(&mut self.location.latitude),
            Slot::Direction(&mut self.location.north),
            Slot::Location(&mut self.location.longitude),
            Slot::Direction(&mut self.location.east),
            Slot::Byte(&mut self.quality),
            Slot::Byte(&mut self.satellites),
        ]
    }
}

impl Decode for GGA {
    const PAYLOAD: PayloadId = PayloadId::Gga;
    const FORMAT: &'static str = "TLqLqii";

    fn scan_fields<'a>(&mut self, sentence: &Sentence<'a>) -> Result<Scan, Error<&'a str>> {
        scan(sentence, &mut self.slots())
    }
}
