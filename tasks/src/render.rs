use charconv::{to_chars_range, Errc, ToCharsResult};
use log::{debug, info};
use std::io::{Error, ErrorKind};

/// Parses `value` as an i128, or as a u128 when it does not fit, and converts it into a buffer of
/// `capacity` bytes.
pub fn render(value: &str, base: u32, capacity: usize) -> Result<(), Error> {
    let mut buf = vec![0u8; capacity];

    let res: ToCharsResult = if let Ok(signed) = value.parse::<i128>() {
        debug!("Rendering {signed} as i128 in base {base}");
        to_chars_range(&mut buf, 0..capacity, signed, base)
    } else {
        let unsigned = value.parse::<u128>().map_err(|err| {
            Error::new(
                ErrorKind::InvalidInput,
                format!("{value} is not a 128 bits integer: {err}"),
            )
        })?;
        debug!("Rendering {unsigned} as u128 in base {base}");
        to_chars_range(&mut buf, 0..capacity, unsigned, base)
    };
    debug!("Conversion returned {res:?}");

    match res.ec {
        Errc::Ok => {
            info!("{}", String::from_utf8_lossy(&buf[..res.ptr]));
            Ok(())
        }
        ec => Err(Error::new(
            ErrorKind::InvalidInput,
            format!("Conversion failed with errno {}: {ec}", ec.as_errno()),
        )),
    }
}
