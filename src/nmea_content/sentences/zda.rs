#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    Date, Error, Sentence, Time,
    identifier::PayloadId,
    nmea_content::Decode,
    scan::{Scan, Slot, scan},
};

/// ZDA - Time & Date - UTC, day, month, year and local time zone
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_zda_time_date_utc_day_month_year_and_local_time_zone>
///
/// ```text
///         1         2  3  4    5  6
///         |         |  |  |    |  |
///  $--ZDA,hhmmss.ss,xx,xx,xxxx,xx,xx*hh<CR><LF>
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ZDA {
    /// UTC time
    pub time: Time,
    /// UTC date, with a four-digit year
    pub date: Date,
    /// Local zone hours offset from UTC
    pub hour_offset: i32,
    /// Local zone minutes offset from UTC
    pub minute_offset: i32,
}

impl ZDA {
    fn slots(&mut self) -> [Slot<'_>; 6] {
        [
            Slot::Time(&mut self.time),
            Slot::Int(&mut self.date.day),
            Slot::Int(&mut self.date.month),
            Slot::Int(&mut self.date.year),
            Slot::Int(&mut self.hour_offset),
            Slot::Int(&mut self.minute_offset),
        ]
    }
}

impl Decode for ZDA {
    const PAYLOAD: PayloadId = PayloadId::Zda;
    const FORMAT: &'static str = "Tddddd";

    fn scan_fields<'a>(&mut self, sentence: &Sentence<'a>) -> Result<Scan, Error<&'a str>> {
        scan(sentence, &mut self.slots())
    }
}
