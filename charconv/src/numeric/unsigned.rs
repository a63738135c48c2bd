use super::{CastFrom, CastInto, Numeric, UnsignedNumeric};
use std::ops::{
    Add, AddAssign, BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Div, DivAssign,
    Mul, MulAssign, Not, Rem, RemAssign, Shl, ShlAssign, Shr, ShrAssign, Sub, SubAssign,
};

/// A trait shared by all the unsigned integer types, native or emulated.
pub trait UnsignedInteger:
    UnsignedNumeric
    + Ord
    + Eq
    + Add<Self, Output = Self>
    + AddAssign<Self>
    + Div<Self, Output = Self>
    + DivAssign<Self>
    + Mul<Self, Output = Self>
    + MulAssign<Self>
    + Rem<Self, Output = Self>
    + RemAssign<Self>
    + Sub<Self, Output = Self>
    + SubAssign<Self>
    + BitAnd<Self, Output = Self>
    + BitAndAssign<Self>
    + BitOr<Self, Output = Self>
    + BitOrAssign<Self>
    + BitXor<Self, Output = Self>
    + BitXorAssign<Self>
    + Not<Output = Self>
    + Shl<u32, Output = Self>
    + ShlAssign<u32>
    + Shr<u32, Output = Self>
    + ShrAssign<u32>
    + CastFrom<u128>
    + CastInto<u128>
    + std::fmt::Binary
{
    /// Compute a multiplication, modulo the max of the type.
    #[must_use]
    fn wrapping_mul(self, other: Self) -> Self;
    /// Divide by a small non zero divisor, returning the quotient and the remainder.
    ///
    /// This is the digit extraction primitive of the text conversion, it never needs a full
    /// width division.
    ///
    /// # Panics
    ///
    /// Panics if `divisor` is 0.
    #[must_use]
    fn div_rem_small(self, divisor: u8) -> (Self, u8);
    /// Return a bit representation of the integer, where blocks of length `block_length` are
    /// separated by whitespaces to increase the readability.
    fn to_bits_string(&self, block_length: usize) -> String {
        let mut strn = format!("{:0width$b}", self, width = Self::BITS);
        for i in (1..(Self::BITS / block_length)).rev() {
            strn.insert(i * block_length, ' ');
        }
        strn
    }
}

macro_rules! implement {
    ($Type: tt, $bits:expr) => {
        impl Numeric for $Type {
            const BITS: usize = $bits;
            const ZERO: Self = 0;
            const ONE: Self = 1;
            const TWO: Self = 2;
            const MAX: Self = <$Type>::MAX;
        }

        impl UnsignedNumeric for $Type {}

        impl UnsignedInteger for $Type {
            #[inline]
            fn wrapping_mul(self, other: Self) -> Self {
                self.wrapping_mul(other)
            }
            #[inline]
            #[allow(clippy::cast_possible_truncation)]
            fn div_rem_small(self, divisor: u8) -> (Self, u8) {
                let divisor = <$Type>::from(divisor);
                (self / divisor, (self % divisor) as u8)
            }
        }
    };
}

implement!(u8, 8);
implement!(u16, 16);
implement!(u32, 32);
implement!(u64, 64);
implement!(u128, 128);
implement!(usize, usize::BITS as usize);
