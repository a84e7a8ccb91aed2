#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    Date, Error, Sentence, Time,
    identifier::PayloadId,
    nmea_content::{Decode, Location},
    scan::{Scan, Slot, scan},
};

/// RMC - Recommended Minimum Navigation Information
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_rmc_recommended_minimum_navigation_information>
///
/// ```text
///                                                            12
///         1         2 3       4 5        6  7   8   9    10 11|  13
///         |         | |       | |        |  |   |   |    |  | |   |
///  $--RMC,hhmmss.ss,A,ddmm.mm,a,dddmm.mm,a,x.x,x.x,xxxx,x.x,a,m,s*hh<CR><LF>
/// ```
///
/// The magnetic variation direction (field 11) and the navigational status (field 13) are
/// not decoded.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RMC {
    /// Fix time in UTC
    pub time: Time,
    /// Status, `A` valid or `V` warning
    pub status: char,
    pub location: Location,
    /// Speed over ground, in knots
    pub speed: f32,
    /// Course over ground, in degrees true
    pub course: f32,
    /// Fix date
    pub date: Date,
    /// Magnetic variation, in degrees
    pub variation: f32,
    /// Positioning mode indicator
    pub pos_mode: char,
}

impl Default for RMC {
    fn default() -> Self {
        Self {
            time: Time::default(),
            status: ' ',
            location: Location::default(),
            speed: 0.0,
            course: 0.0,
            date: Date::default(),
            variation: 0.0,
            pos_mode: ' ',
        }
    }
}

impl RMC {
    fn slots(&mut self) -> [Slot<'_>; 12] {
        [
            Slot::Time(&mut self.time),
            Slot::Char(&mut self.status),
            Slot::Location(&mut self.location.latitude),
            Slot::Direction(&mut self.location.north),
            Slot::Location(&mut self.location.longitude),
            Slot::Direction(&mut self.location.east),
            Slot::Float(&mut self.speed),
            Slot::Float(&mut self.course),
            Slot::Date(&mut self.date),
            Slot::Float(&mut self.variation),
            Slot::Ignore,
            Slot::Char(&mut self.pos_mode),
        ]
    }
}

impl Decode for RMC {
    const PAYLOAD: PayloadId = PayloadId::Rmc;
    const FORMAT: &'static str = "TcLqLqffDf_c";

    fn scan_fields<'a>(&mut self, sentence: &Sentence<'a>) -> Result<Scan, Error<&'a str>> {
        scan(sentence, &mut self.slots())
    }
}
