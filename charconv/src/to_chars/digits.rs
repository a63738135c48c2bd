use super::digit_table::{digit_pair, RADIX_DIGITS};
use crate::numeric::{Numeric, UnsignedInteger};

/// Enough room for the base 2 digits of a 128 bits magnitude.
pub(crate) const MAX_DIGITS: usize = 128;

/// Stack staging area: digits are produced least significant first from the end of the buffer,
/// so the filled tail reads most significant first.
pub(crate) struct DigitBuffer {
    bytes: [u8; MAX_DIGITS],
    start: usize,
}

impl DigitBuffer {
    pub(crate) fn new() -> Self {
        Self {
            bytes: [0; MAX_DIGITS],
            start: MAX_DIGITS,
        }
    }

    /// Renders `magnitude` in `base` and returns the digits, most significant first.
    ///
    /// `base` must be in `2..=36`.
    pub(crate) fn write<U: UnsignedInteger>(&mut self, magnitude: U, base: u8) -> &mut [u8] {
        debug_assert!((2..=36).contains(&base));
        self.start = MAX_DIGITS;

        if base == 10 {
            self.write_decimal(magnitude);
        } else {
            self.write_radix(magnitude, base);
        }

        &mut self.bytes[self.start..]
    }

    fn push_front(&mut self, digits: &[u8]) {
        let new_start = self.start - digits.len();
        self.bytes[new_start..self.start].copy_from_slice(digits);
        self.start = new_start;
    }

    fn write_decimal<U: UnsignedInteger>(&mut self, mut value: U) {
        loop {
            let (quotient, remainder) = value.div_rem_small(100);
            if quotient == <U as Numeric>::ZERO {
                let pair = digit_pair(remainder);
                if remainder >= 10 {
                    self.push_front(&pair);
                } else {
                    self.push_front(&pair[1..]);
                }
                return;
            }
            self.push_front(&digit_pair(remainder));
            value = quotient;
        }
    }

    fn write_radix<U: UnsignedInteger>(&mut self, mut value: U, base: u8) {
        loop {
            let (quotient, remainder) = value.div_rem_small(base);
            self.push_front(&[RADIX_DIGITS[usize::from(remainder)]]);
            if quotient == <U as Numeric>::ZERO {
                return;
            }
            value = quotient;
        }
    }
}
