mod gbs;
mod gga;
mod gll;
mod gsa;
mod gst;
mod gsv;
mod rmc;
mod vtg;
mod zda;

pub use gbs::GBS;
pub use gga::GGA;
pub use gll::GLL;
pub use gsa::GSA;
pub use gst::GST;
pub use gsv::GSV;
pub use rmc::RMC;
pub use vtg::VTG;
pub use zda::ZDA;

use crate::{Error, Sentence, frame, identifier::PayloadId, scan::Scan};

/// A trait for records that are decoded from a framed sentence by a fixed format.
///
/// Implementors describe their sentence with a `slots` array whose directives spell
/// [`Decode::FORMAT`]; [`Decode::scan_into`] routes on the payload identifier first, so a
/// mismatched sentence never touches the record.
pub trait Decode: Default {
    /// Payload type this record is decoded from.
    const PAYLOAD: PayloadId;

    /// Format string of the record, one directive character per field.
    const FORMAT: &'static str;

    /// Scans the sentence fields into the record without checking the payload type.
    fn scan_fields<'a>(&mut self, sentence: &Sentence<'a>) -> Result<Scan, Error<&'a str>>;

    /// Decodes `sentence` into an existing record.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedPayload`] if the sentence is of another type, in which
    /// case the record is left untouched, or any scan error (see [`scan()`](crate::scan())),
    /// in which case the record is partial and should be discarded.
    fn scan_into<'a>(&mut self, sentence: &Sentence<'a>) -> Result<Scan, Error<&'a str>> {
        if sentence.payload_id() != Self::PAYLOAD {
            return Err(Error::UnsupportedPayload {
                expected: Self::PAYLOAD,
                found: sentence.payload_id(),
            });
        }

        self.scan_fields(sentence)
    }

    /// Decodes `sentence` into a new record.
    ///
    /// Sentences that end before the last field decode successfully, with the missing
    /// fields at their defaults.
    fn decode<'a>(sentence: &Sentence<'a>) -> Result<Self, Error<&'a str>> {
        let mut record = Self::default();
        record.scan_into(sentence)?;
        Ok(record)
    }
}

/// A unified enum representing all supported NMEA 0183 sentence types.
///
/// ## Example Usage
///
/// ```rust
/// use nmea0183_scan::{nmea_content::NmeaSentence, parse};
///
/// let sentence = parse("$GPZDA,082710.00,16,09,2002,00,00*64").unwrap();
/// match sentence {
///     NmeaSentence::ZDA(zda) => {
///         assert_eq!(zda.date.year, 2002);
///         assert_eq!(zda.time.second, 10);
///     }
///     _ => panic!("Other NMEA sentence parsed"),
/// }
/// ```
///
/// ## Supported Sentence Types
///
/// | Variant      | Sentence Type                          | Format               |
/// |--------------|----------------------------------------|----------------------|
/// | GBS([`GBS`]) | GNSS satellite fault detection         | `Tfffdfff`           |
/// | GGA([`GGA`]) | Global positioning system fix data     | `TLqLqii`            |
/// | GLL([`GLL`]) | Latitude and longitude, with time      | `LqLqTcc`            |
/// | GSA([`GSA`]) | GNSS DOP and active satellites         | `ciiiiiiiiiiiiifffi` |
/// | GST([`GST`]) | GNSS pseudorange error statistics      | `Tfffffff`           |
/// | GSV([`GSV`]) | GNSS satellites in view                | `iiddddddddddddddddd`|
/// | RMC([`RMC`]) | Recommended minimum data               | `TcLqLqffDf_c`       |
/// | VTG([`VTG`]) | Course over ground and ground speed    | `f_f_f_f_c`          |
/// | ZDA([`ZDA`]) | Time and date                          | `Tddddd`             |
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub enum NmeaSentence {
    /// GNSS satellite fault detection
    GBS(GBS),
    /// Global positioning system fix data
    GGA(GGA),
    /// Latitude and longitude, with time of position fix and status
    GLL(GLL),
    /// GNSS DOP and active satellites
    GSA(GSA),
    /// GNSS pseudorange error statistics
    GST(GST),
    /// GNSS satellites in view
    GSV(GSV),
    /// Recommended minimum data
    RMC(RMC),
    /// Course over ground and ground speed
    VTG(VTG),
    /// Time and date
    ZDA(ZDA),
}

impl NmeaSentence {
    /// Decodes a framed sentence with the decoder matching its payload identifier.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnrecognizedMessage`] with the payload code if no decoder handles
    /// the payload type, or the scan error of the selected decoder.
    pub fn decode<'a>(sentence: &Sentence<'a>) -> Result<Self, Error<&'a str>> {
        match sentence.payload_id() {
            PayloadId::Gbs => GBS::decode(sentence).map(Self::GBS),
            PayloadId::Gga => GGA::decode(sentence).map(Self::GGA),
            PayloadId::Gll => GLL::decode(sentence).map(Self::GLL),
            PayloadId::Gsa => GSA::decode(sentence).map(Self::GSA),
            PayloadId::Gst => GST::decode(sentence).map(Self::GST),
            PayloadId::Gsv => GSV::decode(sentence).map(Self::GSV),
            PayloadId::Rmc => RMC::decode(sentence).map(Self::RMC),
            PayloadId::Vtg => VTG::decode(sentence).map(Self::VTG),
            PayloadId::Zda => ZDA::decode(sentence).map(Self::ZDA),
            _ => Err(Error::UnrecognizedMessage(sentence.payload_code())),
        }
    }
}

/// Frames and decodes a raw sentence in one step, ignoring its checksum trailer.
///
/// Use [`frame_checked`](crate::frame_checked) and [`NmeaSentence::decode`] to validate
/// the checksum first.
pub fn parse(line: &str) -> Result<NmeaSentence, Error<&str>> {
    NmeaSentence::decode(&frame(line)?)
}
