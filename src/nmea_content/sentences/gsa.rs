#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    Error, Sentence,
    identifier::PayloadId,
    nmea_content::Decode,
    scan::{Scan, Slot, scan},
};

/// Number of satellite ID fields in a GSA sentence.
pub const GSA_SATELLITES: usize = 12;

/// GSA - GNSS DOP and Active Satellites
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_gsa_gps_dop_and_active_satellites>
///
/// ```text
///         1 2 3                        14 15  16  17  18
///         | | |                         |  |   |   |   |
///  $--GSA,a,a,x,x,x,x,x,x,x,x,x,x,x,x,x,x.x,x.x,x.x,x*hh<CR><LF>
/// ```
///
/// Unused satellite ID fields are decoded as `0`.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GSA {
    /// Operation mode, `M` manual or `A` automatic
    pub op_mode: char,
    /// Navigation mode: 1 no fix, 2 2D fix, 3 3D fix
    pub nav_mode: u8,
    /// IDs of the satellites used for the fix
    pub satellites: [u8; GSA_SATELLITES],
    /// Position dilution of precision
    pub pdop: f32,
    /// Horizontal dilution of precision
    pub hdop: f32,
    /// Vertical dilution of precision
    pub vdop: f32,
    /// GNSS system ID (NMEA 4.10 and later)
    pub system_id: u8,
}

impl Default for GSA {
    fn default() -> Self {
        Self {
            op_mode: ' ',
            nav_mode: 0,
            satellites: [0; GSA_SATELLITES],
            pdop: 0.0,
            hdop: 0.0,
            vdop: 0.0,
            system_id: 0,
        }
    }
}

impl GSA {
    /// Satellite IDs that are in use, in sentence order.
    pub fn used_satellites(&self) -> impl Iterator<Item = u8> + '_ {
        self.satellites.iter().copied().filter(|&id| id != 0)
    }

    fn slots(&mut self) -> [Slot<'_>; 18] {
        let [s0, s1, s2, s3, s4, s5, s6, s7, s8, s9, s10, s11] = &mut self.satellites;
        [
            Slot::Char(&mut self.op_mode),
            Slot::Byte(&mut self.nav_mode),
            Slot::Byte(s0),
            Slot::Byte(s1),
            Slot::Byte(s2),
            Slot::Byte(s3),
            Slot::Byte(s4),
            Slot::Byte(s5),
            Slot::Byte(s6),
            Slot::Byte(s7),
            Slot::Byte(s8),
            Slot::Byte(s9),
            Slot::Byte(s10),
            Slot::Byte(s11),
            Slot::Float(&mut self.pdop),
            Slot::Float(&mut self.hdop),
            Slot::Float(&mut self.vdop),
            Slot::Byte(&mut self.system_id),
        ]
    }
}

impl Decode for GSA {
    const PAYLOAD: PayloadId = PayloadId::Gsa;
    const FORMAT: &'static str = "ciiiiiiiiiiiiifffi";

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
        let mut gsa = GSA::default();
        let format = gsa.slots().map(|slot| char::from(slot.directive()));
        assert!(format.into_iter().eq(GSA::FORMAT.chars()));
    }

    #[test]
    fn test_gsa_parsing() {
        let sentence =
            frame("$GPGSA,A,3,23,29,07,08,09,18,26,28,,,,,1.94,1.18,1.54,1*10").unwrap();
        let gsa = GSA::decode(&sentence).unwrap();

        assert_eq!(gsa.op_mode, 'A');
        assert_eq!(gsa.nav_mode, 3);
        assert_eq!(
            gsa.satellites,
            [23, 29, 7, 8, 9, 18, 26, 28, 0, 0, 0, 0]
        );
        assert!(gsa.used_satellites().eq([23, 29, 7, 8, 9, 18, 26, 28]));
        assert_eq!(gsa.pdop, 1.94);
        assert_eq!(gsa.hdop, 1.18);
        assert_eq!(gsa.vdop, 1.54);
        assert_eq!(gsa.system_id, 1);
    }

    #[test]
    fn test_gsa_before_nmea_4_10() {
        let sentence = frame("$GPGSA,A,3,04,05,,09,12,,,24,,,,,2.5,1.3,2.1*39").unwrap();

        let mut gsa = GSA {
            system_id: 4,
            ..GSA::default()
        };
        let result = gsa.scan_into(&sentence);

        assert_eq!(result, Ok(Scan::Partial { fields: 17 }));
        assert!(gsa.used_satellites().eq([4, 5, 9, 12, 24]));
        assert_eq!(gsa.vdop, 2.1);
        assert_eq!(gsa.system_id, 0);
    }
}
