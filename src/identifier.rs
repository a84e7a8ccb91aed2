//! # Identifier Tables
//!
//! Static lookup from the fixed-width ASCII codes at the start of a sentence to
//! enumerated identifiers. Resolution never fails: codes that are not in a table
//! resolve to the `Unknown` variant, whose discriminant is zero.

macro_rules! identifier_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $code:literal => $variant:ident
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
        #[repr(u8)]
        $vis enum $name {
            /// Code not present in the table
            #[default]
            Unknown = 0,
            $(
                $(#[$variant_meta])*
                $variant,
            )*
        }

        impl $name {
            /// Every known identifier, in discriminant order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),*];

            /// Resolves an ASCII code, mapping anything outside the table to `Unknown`.
            pub fn from_code(code: &[u8]) -> Self {
                match code {
                    $(c if c == $code.as_bytes() => Self::$variant,)*
                    _ => Self::Unknown,
                }
            }

            /// Returns the ASCII code of the identifier, or `None` for `Unknown`.
            pub fn code(self) -> Option<&'static str> {
                match self {
                    Self::Unknown => None,
                    $(Self::$variant => Some($code),)*
                }
            }
        }

        impl From<$name> for u8 {
            fn from(id: $name) -> u8 {
                id as u8
            }
        }
    };
}

identifier_enum! {
    /// Talker identifier: the two-letter code naming the subsystem that produced a sentence.
    pub enum TalkerId {
        /// GP - GPS, SBAS, QZSS
        "GP" => Gp,
        /// GL - GLONASS
        "GL" => Gl,
        /// GA - Galileo
        "GA" => Ga,
        /// GB - BeiDou
        "GB" => Gb,
        /// GN - Any combination of GNSS
        "GN" => Gn,
    }
}

identifier_enum! {
    /// Payload identifier: the three-letter code naming the sentence type.
    pub enum PayloadId {
        /// DTM - Datum reference
        "DTM" => Dtm,
        /// GBQ - Poll a standard message (talker BeiDou)
        "GBQ" => Gbq,
        /// GBS - GNSS satellite fault detection
        "GBS" => Gbs,
        /// GGA - Global positioning system fix data
        "GGA" => Gga,
        /// GLL - Latitude and longitude, with time of position fix and status
        "GLL" => Gll,
        /// GLQ - Poll a standard message (talker GLONASS)
        "GLQ" => Glq,
        /// GNQ - Poll a standard message (talker GNSS)
        "GNQ" => Gnq,
        /// GNS - GNSS fix data
        "GNS" => Gns,
        /// GPQ - Poll a standard message (talker GPS)
        "GPQ" => Gpq,
        /// GRS - GNSS range residuals
        "GRS" => Grs,
        /// GSA - GNSS DOP and active satellites
        "GSA" => Gsa,
        /// GST - GNSS pseudorange error statistics
        "GST" => Gst,
        /// GSV - GNSS satellites in view
        "GSV" => Gsv,
        /// RMC - Recommended minimum data
        "RMC" => Rmc,
        /// TXT - Text transmission
        "TXT" => Txt,
        /// VLW - Dual ground/water distance
        "VLW" => Vlw,
        /// VTG - Course over ground and ground speed
        "VTG" => Vtg,
        /// ZDA - Time and date
        "ZDA" => Zda,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_talker_codes() {
        assert_eq!(TalkerId::from_code(b"GP"), TalkerId::Gp);
        assert_eq!(TalkerId::from_code(b"GN"), TalkerId::Gn);
        assert_eq!(TalkerId::from_code(b"XX"), TalkerId::Unknown);
        assert_eq!(TalkerId::from_code(b"gp"), TalkerId::Unknown);
        assert_eq!(TalkerId::from_code(b"G"), TalkerId::Unknown);
        assert_eq!(u8::from(TalkerId::Unknown), 0);
        assert_eq!(u8::from(TalkerId::Gn), 5);
    }

    #[test]
    fn test_payload_codes() {
        assert_eq!(PayloadId::ALL.len(), 18);
        for (n, id) in PayloadId::ALL.iter().enumerate() {
            assert_eq!(u8::from(*id) as usize, n + 1);
            let code = id.code().unwrap();
            assert_eq!(PayloadId::from_code(code.as_bytes()), *id);
        }
        assert_eq!(PayloadId::from_code(b"XYZ"), PayloadId::Unknown);
        assert_eq!(PayloadId::Unknown.code(), None);
    }
}
