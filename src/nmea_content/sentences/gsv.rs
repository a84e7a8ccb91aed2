#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    Error, Sentence,
    identifier::PayloadId,
    nmea_content::{Decode, Satellite},
    scan::{Scan, Slot, scan},
};

/// Number of satellite blocks in a single GSV sentence.
pub const GSV_SATELLITES: usize = 4;

/// GSV - GNSS Satellites in View
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_gsv_satellites_in_view>
///
/// ```text
///         1 2 3 4 5 6 7     n
///         | | | | | | |     |
///  $--GSV,x,x,x,x,x,x,x,...,h*hh<CR><LF>
/// ```
///
/// Field 1 is the total number of GSV messages in this cycle and field 2 the number of
/// this message. Up to four satellite blocks follow; blocks missing from the sentence are
/// decoded as zero. On NMEA 4.10 receivers a trailing signal ID follows the last block of
/// a short sentence and lands in the next block's `prn`.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct GSV {
    /// Total number of GSV messages
    pub total_messages: u8,
    /// Number of this message, starting at 1
    pub message_number: u8,
    /// Total number of satellites in view
    pub satellites_in_view: i32,
    pub satellites: [Satellite; GSV_SATELLITES],
}

impl GSV {
    /// Returns `true` if this is the last message of the cycle.
    pub fn is_last(&self) -> bool {
        self.message_number == self.total_messages
    }

    fn slots(&mut self) -> [Slot<'_>; 19] {
        let [s0, s1, s2, s3] = &mut self.satellites;
        [
            Slot::Byte(&mut self.total_messages),
            Slot::Byte(&mut self.message_number),
            Slot::Int(&mut self.satellites_in_view),
            Slot::Int(&mut s0.prn),
            Slot::Int(&mut s0.elevation),
            Slot::Int(&mut s0.azimuth),
            Slot::Int(&mut s0.snr),
            Slot::Int(&mut s1.prn),
            Slot::Int(&mut s1.elevation),
            Slot::Int(&mut s1.azimuth),
            Slot::Int(&mut s1.snr),
            Slot::Int(&mut s2.prn),
            Slot::Int(&mut s2.elevation),
            Slot::Int(&mut s2.azimuth),
            Slot::Int(&mut s2.snr),
            Slot::Int(&mut s3.prn),
            Slot::Int(&mut s3.elevation),
            Slot::Int(&mut s3.azimuth),
            Slot::Int(&mut s3.snr),
        ]
    }
}

impl Decode for GSV {
    const PAYLOAD: PayloadId = PayloadId::Gsv;
    const FORMAT: &'static str = "iiddddddddddddddddd";

    fn scan_fields<'a>(&mut self, sentence: &Sentence<'a>) -> Result<Scan, Error<&'a str>> {
        scan(sentence, &mut self.slots())
    }
}
