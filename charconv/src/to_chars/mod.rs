//! Integer to text conversion into caller provided buffers.
//!
//! The conversions never allocate, never write past the destination range and never write a
//! terminator. On failure the destination is left untouched.
//!
//! ```
//! use charconv::{to_chars, to_chars_radix, Errc};
//!
//! let mut buf = [0u8; 11];
//! let res = to_chars(&mut buf, i32::MIN);
//! assert_eq!(res.ec, Errc::Ok);
//! assert_eq!(&buf[..res.ptr], b"-2147483648");
//!
//! let res = to_chars_radix(&mut buf[..2], 255u8, 16);
//! assert_eq!(&buf[..res.ptr], b"ff");
//! ```

pub(crate) mod digit_table;
pub(crate) mod digits;
mod result;

use std::ops::Range;

pub use digit_table::{DIGIT_PAIRS, RADIX_DIGITS};
pub use result::{Errc, ToCharsResult};

use crate::error::{Error, ErrorKind, InvalidArgumentError};
use crate::integer::{Emulated128, Uint128};
use crate::numeric::{CastFrom, UnsignedInteger};
use digits::DigitBuffer;

mod sealed {
    pub trait Sealed {}
}

/// Integer types that can be converted to text.
///
/// Implemented for every native integer type and [`Emulated128`]. `bool` is not an integer and
/// is rejected at compile time:
///
/// ```compile_fail
/// let mut buf = [0u8; 8];
/// let _ = charconv::to_chars(&mut buf, true);
/// ```
pub trait ToCharsInteger: Copy + sealed::Sealed {
    /// The unsigned type wide enough to hold the absolute value of any `Self`.
    type Magnitude: UnsignedInteger;

    /// Splits the value in a "is negative" flag and its absolute value.
    fn into_sign_and_magnitude(self) -> (bool, Self::Magnitude);
}

macro_rules! impl_to_chars_unsigned {
    ($($Type:ty),*) => {
        $(
            impl sealed::Sealed for $Type {}

            impl ToCharsInteger for $Type {
                type Magnitude = $Type;

                #[inline]
                fn into_sign_and_magnitude(self) -> (bool, Self::Magnitude) {
                    (false, self)
                }
            }
        )*
    };
}

// unsigned_abs never overflows, including on MIN
macro_rules! impl_to_chars_signed {
    ($($Type:ty => $Unsigned:ty),*) => {
        $(
            impl sealed::Sealed for $Type {}

            impl ToCharsInteger for $Type {
                type Magnitude = $Unsigned;

                #[inline]
                fn into_sign_and_magnitude(self) -> (bool, Self::Magnitude) {
                    (self < 0, self.unsigned_abs())
                }
            }
        )*
    };
}

impl_to_chars_unsigned!(u8, u16, u32, u64, usize, Emulated128);
impl_to_chars_signed!(i8 => u8, i16 => u16, i32 => u32, i64 => u64, isize => usize);

impl sealed::Sealed for u128 {}

impl ToCharsInteger for u128 {
    type Magnitude = Uint128;

    #[inline]
    fn into_sign_and_magnitude(self) -> (bool, Self::Magnitude) {
        (false, Uint128::cast_from(self))
    }
}

impl sealed::Sealed for i128 {}

impl ToCharsInteger for i128 {
    type Magnitude = Uint128;

    #[inline]
    fn into_sign_and_magnitude(self) -> (bool, Self::Magnitude) {
        (self < 0, Uint128::cast_from(self.unsigned_abs()))
    }
}

/// Writes the decimal text of `value` at the start of `buf`.
pub fn to_chars<T: ToCharsInteger>(buf: &mut [u8], value: T) -> ToCharsResult {
    to_chars_radix(buf, value, 10)
}

/// Writes the text of `value` in `base` at the start of `buf`.
///
/// Digits above 9 are the lowercase letters `a` to `z`. A `base` outside of `2..=36` is reported
/// as [`Errc::InvalidArgument`].
pub fn to_chars_radix<T: ToCharsInteger>(buf: &mut [u8], value: T, base: u32) -> ToCharsResult {
    let len = buf.len();
    to_chars_range(buf, 0..len, value, base)
}

/// Writes the text of `value` in `base` into `buf[range]`.
///
/// `range.start` and `range.end` play the role of the `first` and `last` cursors of the C
/// interface: the returned `ptr` is an index into `buf`, and is `range.end` on failure.
///
/// ```
/// use charconv::{to_chars_range, Errc, ToCharsResult};
///
/// let mut buf = *b"[....]";
/// let res = to_chars_range(&mut buf, 1..5, -42i8, 10);
/// assert_eq!(res, ToCharsResult::new(4, Errc::Ok));
/// assert_eq!(&buf, b"[-42.]");
///
/// let res = to_chars_range(&mut buf, 5..1, 7u8, 10);
/// assert_eq!(res, ToCharsResult::new(1, Errc::InvalidArgument));
/// ```
pub fn to_chars_range<T: ToCharsInteger>(
    buf: &mut [u8],
    range: Range<usize>,
    value: T,
    base: u32,
) -> ToCharsResult {
    let last = range.end;
    match try_to_chars_range(buf, range, value, base) {
        Ok(ptr) => ToCharsResult::new(ptr, Errc::Ok),
        Err(err) => ToCharsResult::new(last, err.errc()),
    }
}

/// Same as [`to_chars_range`], with a detailed error.
pub fn try_to_chars_range<T: ToCharsInteger>(
    buf: &mut [u8],
    range: Range<usize>,
    value: T,
    base: u32,
) -> Result<usize, Error> {
    let Range {
        start: first,
        end: last,
    } = range;

    if first > last {
        return Err(InvalidArgumentError::WrongOrder { first, last }.into());
    }
    if last > buf.len() {
        return Err(InvalidArgumentError::RangeTooBig {
            last,
            len: buf.len(),
        }
        .into());
    }
    let base = match u8::try_from(base) {
        Ok(base @ 2..=36) => base,
        _ => return Err(InvalidArgumentError::UnsupportedBase(base).into()),
    };

    let (is_negative, magnitude) = value.into_sign_and_magnitude();

    let mut staging = DigitBuffer::new();
    let digits = staging.write(magnitude, base);

    let sign_len = usize::from(is_negative);
    let required = sign_len + digits.len();
    let destination = &mut buf[first..last];
    if required > destination.len() {
        return Err(ErrorKind::ResultOutOfRange {
            required,
            available: destination.len(),
        }
        .into());
    }

    if is_negative {
        destination[0] = b'-';
    }
    destination[sign_len..required].copy_from_slice(digits);

    Ok(first + required)
}

/// Writes the text of `value` in `base` at the start of `buf` and returns it as a `&str`.
///
/// ```
/// let mut buf = [0u8; 40];
/// let text = charconv::to_chars_str(&mut buf, u128::MAX, 36)?;
/// assert_eq!(text, "f5lxx1zz5pnorynqglhzmsp33");
/// # Ok::<(), charconv::Error>(())
/// ```
pub fn to_chars_str<T: ToCharsInteger>(
    buf: &mut [u8],
    value: T,
    base: u32,
) -> Result<&str, Error> {
    let len = buf.len();
    let end = try_to_chars_range(buf, 0..len, value, base)?;
    // Only ASCII digits and '-' were written
    Ok(std::str::from_utf8(&buf[..end]).unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_scenarios() {
        let mut buf = [0u8; 11];
        let res = to_chars(&mut buf, -2147483648i32);
        assert_eq!(res, ToCharsResult::new(11, Errc::Ok));
        assert_eq!(&buf, b"-2147483648");

        let mut buf = [0u8; 2];
        let res = to_chars_radix(&mut buf, 255, 16);
        assert_eq!(res, ToCharsResult::new(2, Errc::Ok));
        assert_eq!(&buf, b"ff");
    }

    #[test]
    fn test_minimum_values() {
        let mut buf = [0u8; 64];
        let res = to_chars(&mut buf, i128::MIN);
        assert_eq!(&buf[..res.ptr], i128::MIN.to_string().as_bytes());

        let res = to_chars_radix(&mut buf, i8::MIN, 2);
        assert_eq!(&buf[..res.ptr], b"-10000000");

        let res = to_chars(&mut buf, i64::MIN);
        assert_eq!(&buf[..res.ptr], b"-9223372036854775808");
    }

    #[test]
    fn test_zero_in_every_base() {
        let mut buf = [b'x'; 2];
        for base in 2..=36 {
            let res = to_chars_radix(&mut buf, 0u32, base);
            assert_eq!(res, ToCharsResult::new(1, Errc::Ok));
            assert_eq!(&buf, b"0x");
        }
    }

    #[test]
    fn test_invalid_base() {
        let mut buf = [b'x'; 8];
        for base in [0, 1, 37, 256, u32::MAX] {
            let res = to_chars_radix(&mut buf, 12u32, base);
            assert_eq!(res, ToCharsResult::new(8, Errc::InvalidArgument));
        }
        assert_eq!(&buf, b"xxxxxxxx");

        let err = to_chars_str(&mut buf, 12u32, 1).unwrap_err();
        assert_eq!(
            err.kind(),
            &ErrorKind::InvalidArgument(InvalidArgumentError::UnsupportedBase(1))
        );
    }

    #[test]
    fn test_invalid_range() {
        let mut buf = [b'x'; 8];
        let res = to_chars_range(&mut buf, 6..2, 1u8, 10);
        assert_eq!(res, ToCharsResult::new(2, Errc::InvalidArgument));

        let res = to_chars_range(&mut buf, 2..9, 1u8, 10);
        assert_eq!(res, ToCharsResult::new(9, Errc::InvalidArgument));
        assert_eq!(&buf, b"xxxxxxxx");

        let res = to_chars_range(&mut buf, 3..3, 1u8, 10);
        assert_eq!(res, ToCharsResult::new(3, Errc::ResultOutOfRange));
    }

    #[test]
    fn test_capacity_rejection_leaves_buffer_untouched() {
        let mut buf = [b'x'; 11];
        let res = to_chars(&mut buf[..10], i32::MIN);
        assert_eq!(res, ToCharsResult::new(10, Errc::ResultOutOfRange));
        assert_eq!(&buf, b"xxxxxxxxxxx");

        // the sign alone does not fit
        let res = to_chars_range(&mut buf, 0..1, -1i8, 10);
        assert_eq!(res, ToCharsResult::new(1, Errc::ResultOutOfRange));
        assert_eq!(&buf, b"xxxxxxxxxxx");

        let err = try_to_chars_range(&mut buf, 4..6, 1000u16, 10).unwrap_err();
        assert_eq!(
            err.kind(),
            &ErrorKind::ResultOutOfRange {
                required: 4,
                available: 2
            }
        );
    }

    #[test]
    fn test_emulated_input() {
        let mut buf = [0u8; 40];
        let value = Emulated128::from_limbs(0, 1);
        let text = to_chars_str(&mut buf, value, 10).unwrap();
        assert_eq!(text, (1u128 << 64).to_string());

        let text = to_chars_str(&mut buf, Emulated128::MAX, 16).unwrap();
        assert_eq!(text, "f".repeat(32));
    }
}
