#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    Error, Sentence,
    identifier::PayloadId,
    nmea_content::Decode,
    scan::{Scan, Slot, scan},
};

/// VTG - Track made good and Ground speed
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_vtg_track_made_good_and_ground_speed>
///
/// ```text
///         1   2 3   4 5   6 7   8 9
///         |   | |   | |   | |   | |
///  $--VTG,x.x,T,x.x,M,x.x,N,x.x,K,m*hh<CR><LF>
/// ```
///
/// The unit letters are fixed and skipped.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VTG {
    /// Course over ground, degrees true
    pub cogt: f32,
    /// Course over ground, degrees magnetic
    pub cogm: f32,
    /// Speed over ground, knots
    pub sogn: f32,
    /// Speed over ground, km/h
    pub sogk: f32,
    /// Positioning mode indicator
    pub pos_mode: char,
}

impl Default for VTG {
    fn default() -> Self {
        Self {
            cogt: 0.0,
            cogm: 0.0,
            sogn: 0.0,
            sogk: 0.0,
            pos_mode: ' ',
        }
    }
}

impl VTG {
    fn slots(&mut self) -> [Slot<'_>; 9] {
        [
            Slot::Float(&mut self.cogt),
            Slot::Ignore,
            Slot::Float(&mut self.cogm),
            Slot::Ignore,
            Slot::Float(&mut self.sogn),
            Slot::Ignore,
            Slot::Float(&mut self.sogk),
            Slot::Ignore,
            Slot::Char(&mut self.pos_mode),
        ]
    }
}

impl Decode for VTG {
    const PAYLOAD: PayloadId = PayloadId::Vtg;
    const FORMAT: &'static str = "f_f_f_f_c";

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
        let mut vtg = VTG::default();
        let format = vtg.slots().map(|slot| char::from(slot.directive()));
        assert!(format.into_iter().eq(VTG::FORMAT.chars()));
    }

    #[test]
    fn test_vtg_parsing() {
        let sentence = frame("$GPVTG,77.52,T,,M,0.004,N,0.008,K,A*06").unwrap();
        let vtg = VTG::decode(&sentence).unwrap();

        assert_eq!(
            vtg,
            VTG {
                cogt: 77.52,
                cogm: 0.0,
                sogn: 0.004,
                sogk: 0.008,
                pos_mode: 'A',
            }
        );
    }

    #[test]
    fn test_vtg_reused_record() {
        let first = frame("$GPVTG,77.52,T,,M,0.004,N,0.008,K,A*06").unwrap();
        let second = frame("$GPVTG,,T,,M,,N,,K,N*2C").unwrap();

        let mut vtg = VTG::default();
        vtg.scan_into(&first).unwrap();
        vtg.scan_into(&second).unwrap();

        assert_eq!(
            vtg,
            VTG {
                pos_mode: 'N',
                ..VTG::default()
            }
        );
    }
}
