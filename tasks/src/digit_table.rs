use charconv::to_chars::{DIGIT_PAIRS, RADIX_DIGITS};
use log::{debug, error, info};
use std::io::{Error, ErrorKind};

pub fn check_digit_table() -> Result<(), Error> {
    let mut errors = 0usize;

    for (value, pair) in DIGIT_PAIRS.iter().enumerate() {
        let expected = format!("{value:02}");
        debug!("{value:>2} -> {}", String::from_utf8_lossy(pair));
        if pair.as_slice() != expected.as_bytes() {
            error!(
                "Digit pair {value} holds {:?} instead of {expected}",
                String::from_utf8_lossy(pair)
            );
            errors += 1;
        }
    }

    for (value, digit) in (0u32..).zip(RADIX_DIGITS.iter()) {
        let expected = char::from_digit(value, 36);
        if expected != Some(char::from(*digit)) {
            error!(
                "Radix digit {value} is {:?} instead of {expected:?}",
                char::from(*digit)
            );
            errors += 1;
        }
    }

    if errors > 0 {
        return Err(Error::new(
            ErrorKind::InvalidData,
            format!("{errors} digit table entries are wrong"),
        ));
    }

    info!(
        "{} digit pairs and {} radix digits are correct",
        DIGIT_PAIRS.len(),
        RADIX_DIGITS.len()
    );
    Ok(())
}
