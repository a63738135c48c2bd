//! Digit lookup tables, fully built at compile time.

/// The two ASCII decimal digits of every value in `0..100`, e.g. `DIGIT_PAIRS[7] == *b"07"`.
///
/// The decimal conversion divides by 100 and emits a whole pair per division.
pub static DIGIT_PAIRS: [[u8; 2]; 100] = build_digit_pairs();

/// Digit symbols for every base up to 36.
pub static RADIX_DIGITS: [u8; 36] = *b"0123456789abcdefghijklmnopqrstuvwxyz";

#[allow(clippy::cast_possible_truncation)]
const fn build_digit_pairs() -> [[u8; 2]; 100] {
    let mut table = [[0u8; 2]; 100];
    let mut value = 0;
    while value < 100 {
        table[value] = [b'0' + (value / 10) as u8, b'0' + (value % 10) as u8];
        value += 1;
    }
    table
}

#[inline]
pub(crate) fn digit_pair(value: u8) -> [u8; 2] {
    DIGIT_PAIRS[usize::from(value)]
}
