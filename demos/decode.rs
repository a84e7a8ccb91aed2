use nmea0183_scan::{ChecksumMode, Error, NmeaSentence, frame_checked};

fn decode(line: &str) -> Result<NmeaSentence, Error<&str>> {
    let sentence = frame_checked(line, ChecksumMode::Optional)?;
    NmeaSentence::decode(&sentence)
}

fn print(line: &str) {
    match decode(line) {
        Ok(sentence) => {
            println!("Decoded successfully: {:?}", sentence);
        }
        Err(e) => {
            println!("Decoding error occurred: {} ({:?})", e, e);
        }
    }
}

fn main() {
    print("$GNGGA,092725.00,4717.11399,N,00833.91590,E,1,08,1.01,499.6,M,48.0,M,,*45");
    print("$GPRMC,083559.00,A,4717.11437,N,00833.91522,E,0.004,77.52,091202,,,A,V");

    // checksum mismatch
    print("$GNGGA,092725.00,4717.11399,N,00833.91590,E,1,08,1.01,499.6,M,48.0,M,,*5B");
    // no decoder for TXT
    print("$GPTXT,01,01,02,u-blox ag*2A");
    // corrupted time field
    print("$GPZDA,08P710.00,16,09,2002,00,00");
}
