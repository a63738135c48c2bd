use std::cmp::Ordering;
use std::fmt;
use std::ops::{
    Add, AddAssign, BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Div, DivAssign,
    Mul, MulAssign, Not, Rem, RemAssign, Shl, ShlAssign, Shr, ShrAssign, Sub, SubAssign,
};

use super::algorithms;
use crate::numeric::{CastFrom, Numeric, UnsignedInteger, UnsignedNumeric};
use crate::to_chars::digits::DigitBuffer;

/// An unsigned 128 bits integer stored as two 64 bits words.
///
/// The value is `high * 2^64 + low`. Every operator wraps modulo 2^128 exactly like the native
/// `u128`, so code written against [`UnsignedInteger`] gives the same results with both types.
///
/// Native operands are accepted on the right hand side of every operator and on both sides of
/// comparisons. They are promoted with the [`From`] conversions, where a negative signed value
/// narrower than 128 bits is reinterpreted as a 64 bits word and never sign extended past it.
/// This holds for arithmetic too: adding `-1i32` adds `2^64 - 1`, and `Emulated128::from(-1i32)`
/// differs from `Emulated128::from(-1i128)`, which is `2^128 - 1`.
///
/// ```
/// use charconv::integer::Emulated128;
///
/// let mut v = Emulated128::from(u64::MAX);
/// v += 1;
/// assert_eq!((v.high(), v.low()), (1, 0));
///
/// assert!(v > -100);
/// assert!(v != -100);
/// ```
// Little endian word order
#[derive(Default, Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(transparent)]
pub struct Emulated128(pub(crate) [u64; 2]);

impl Emulated128 {
    pub const BITS: u32 = 128;
    pub const MAX: Self = Self([u64::MAX; 2]);
    pub const MIN: Self = Self([0; 2]);
    pub const ZERO: Self = Self([0; 2]);
    pub const ONE: Self = Self([1, 0]);
    pub const TWO: Self = Self([2, 0]);

    #[inline]
    pub const fn from_limbs(low: u64, high: u64) -> Self {
        Self([low, high])
    }

    #[inline]
    pub const fn low(&self) -> u64 {
        self.0[0]
    }

    #[inline]
    pub const fn high(&self) -> u64 {
        self.0[1]
    }

    #[inline]
    pub fn is_zero(self) -> bool {
        algorithms::is_zero(&self.0)
    }

    /// Adds one in place, the carry out of the low word goes into the high word.
    pub fn increment(&mut self) {
        self.0[0] = self.0[0].wrapping_add(1);
        if self.0[0] == 0 {
            self.0[1] = self.0[1].wrapping_add(1);
        }
    }

    /// Subtracts one in place, borrowing from the high word when the low word is 0.
    pub fn decrement(&mut self) {
        if self.0[0] == 0 {
            self.0[1] = self.0[1].wrapping_sub(1);
        }
        self.0[0] = self.0[0].wrapping_sub(1);
    }

    #[must_use]
    pub fn overflowing_add(mut self, rhs: Self) -> (Self, bool) {
        let carry = algorithms::add_assign_words(&mut self.0, &rhs.0);
        (self, carry)
    }

    #[must_use]
    pub fn overflowing_sub(mut self, rhs: Self) -> (Self, bool) {
        let borrow = algorithms::sub_assign_words(&mut self.0, &rhs.0);
        (self, borrow)
    }

    #[must_use]
    pub fn wrapping_neg(self) -> Self {
        !self + Self::ONE
    }

    /// Shift-left with the amount masked to `0..128`, as `u128::wrapping_shl` does.
    #[must_use]
    pub fn wrapping_shl(self, rhs: u32) -> Self {
        self << (rhs & (Self::BITS - 1))
    }

    /// Shift-right with the amount masked to `0..128`, as `u128::wrapping_shr` does.
    #[must_use]
    pub fn wrapping_shr(self, rhs: u32) -> Self {
        self >> (rhs & (Self::BITS - 1))
    }

    pub fn leading_zeros(self) -> u32 {
        algorithms::leading_zeros(&self.0)
    }

    pub fn trailing_zeros(self) -> u32 {
        algorithms::trailing_zeros(&self.0)
    }

    pub fn count_ones(self) -> u32 {
        self.0.iter().map(|word| word.count_ones()).sum()
    }

    pub fn is_power_of_two(self) -> bool {
        self.count_ones() == 1
    }

    pub fn ilog2(self) -> u32 {
        // Rust has the same assert
        assert!(
            !self.is_zero(),
            "argument of integer logarithm must be positive"
        );
        Self::BITS - self.leading_zeros() - 1
    }

    /// Computes the quotient and the remainder at once.
    ///
    /// # Panics
    ///
    /// Panics if `rhs` is 0, like the native division.
    #[must_use]
    pub fn div_rem(self, rhs: Self) -> (Self, Self) {
        if self.high() == 0 && rhs.high() == 0 {
            assert!(rhs.low() != 0, "attempt to divide by zero");
            return (
                Self::from(self.low() / rhs.low()),
                Self::from(self.low() % rhs.low()),
            );
        }

        if rhs.high() == 0 {
            if let Ok(small_divisor) = u32::try_from(rhs.low()) {
                let (q, r) = self.div_rem_u32(small_divisor);
                return (q, Self::from(r));
            }
        }

        let (q, r) = algorithms::slow_div(self.0, rhs.0);
        (Self(q), Self(r))
    }

    /// Division by a divisor fitting in 32 bits, without going through the bit by bit
    /// long division.
    ///
    /// # Panics
    ///
    /// Panics if `divisor` is 0.
    #[must_use]
    pub fn div_rem_u32(mut self, divisor: u32) -> (Self, u32) {
        let remainder = algorithms::div_rem_small_assign(&mut self.0, divisor);
        (self, remainder)
    }

    #[must_use]
    pub fn checked_div(self, rhs: Self) -> Option<Self> {
        if rhs.is_zero() {
            None
        } else {
            Some(self / rhs)
        }
    }

    #[must_use]
    pub fn checked_rem(self, rhs: Self) -> Option<Self> {
        if rhs.is_zero() {
            None
        } else {
            Some(self % rhs)
        }
    }

    /// Replaces the current value by interpreting the bytes in big endian order
    pub fn copy_from_be_byte_slice(&mut self, bytes: &[u8]) {
        algorithms::copy_from_be_byte_slice(self.0.as_mut_slice(), bytes);
    }

    /// Replaces the current value by interpreting the bytes in little endian order
    pub fn copy_from_le_byte_slice(&mut self, bytes: &[u8]) {
        algorithms::copy_from_le_byte_slice(self.0.as_mut_slice(), bytes);
    }

    pub fn copy_to_le_byte_slice(&self, bytes: &mut [u8]) {
        algorithms::copy_to_le_byte_slice(self.0.as_slice(), bytes);
    }

    pub fn copy_to_be_byte_slice(&self, bytes: &mut [u8]) {
        algorithms::copy_to_be_byte_slice(self.0.as_slice(), bytes);
    }

    pub fn to_le_bytes(self) -> [u8; 16] {
        let mut bytes = [0u8; 16];
        self.copy_to_le_byte_slice(&mut bytes);
        bytes
    }

    pub fn to_be_bytes(self) -> [u8; 16] {
        let mut bytes = [0u8; 16];
        self.copy_to_be_byte_slice(&mut bytes);
        bytes
    }

    pub fn from_le_bytes(bytes: [u8; 16]) -> Self {
        let mut value = Self::ZERO;
        value.copy_from_le_byte_slice(&bytes);
        value
    }

    pub fn from_be_bytes(bytes: [u8; 16]) -> Self {
        let mut value = Self::ZERO;
        value.copy_from_be_byte_slice(&bytes);
        value
    }
}

#[cfg(test)]
impl rand::distributions::Distribution<Emulated128> for rand::distributions::Standard {
    fn sample<R: rand::Rng + ?Sized>(&self, rng: &mut R) -> Emulated128 {
        let mut s = Emulated128::ZERO;
        rng.fill(s.0.as_mut_slice());
        s
    }
}

// Since we store as [low, high], deriving ord
// would produce a bad ordering
impl Ord for Emulated128 {
    fn cmp(&self, other: &Self) -> Ordering {
        algorithms::compare(&self.0, &other.0)
    }
}

impl PartialOrd for Emulated128 {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Add<Self> for Emulated128 {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self::Output {
        self += rhs;
        self
    }
}

impl AddAssign<Self> for Emulated128 {
    fn add_assign(&mut self, rhs: Self) {
        algorithms::add_assign_words(self.0.as_mut_slice(), rhs.0.as_slice());
    }
}

impl Sub<Self> for Emulated128 {
    type Output = Self;

    fn sub(mut self, rhs: Self) -> Self::Output {
        self -= rhs;
        self
    }
}

impl SubAssign<Self> for Emulated128 {
    fn sub_assign(&mut self, rhs: Self) {
        algorithms::sub_assign_words(self.0.as_mut_slice(), rhs.0.as_slice());
    }
}

impl MulAssign<Self> for Emulated128 {
    fn mul_assign(&mut self, rhs: Self) {
        if rhs.is_power_of_two() {
            self.shl_assign(rhs.ilog2());
            return;
        }
        algorithms::schoolbook_mul_assign(&mut self.0, &rhs.0);
    }
}

impl Mul<Self> for Emulated128 {
    type Output = Self;

    fn mul(mut self, rhs: Self) -> Self::Output {
        self *= rhs;
        self
    }
}

impl DivAssign<Self> for Emulated128 {
    fn div_assign(&mut self, rhs: Self) {
        *self = *self / rhs;
    }
}

impl Div<Self> for Emulated128 {
    type Output = Self;

    fn div(self, rhs: Self) -> Self::Output {
        let (q, _) = self.div_rem(rhs);
        q
    }
}

impl RemAssign<Self> for Emulated128 {
    fn rem_assign(&mut self, rhs: Self) {
        *self = *self % rhs;
    }
}

impl Rem<Self> for Emulated128 {
    type Output = Self;

    fn rem(self, rhs: Self) -> Self::Output {
        let (_, r) = self.div_rem(rhs);
        r
    }
}

impl Not for Emulated128 {
    type Output = Self;

    fn not(mut self) -> Self::Output {
        algorithms::bitnot_assign(self.0.as_mut_slice());
        self
    }
}

impl BitAnd<Self> for Emulated128 {
    type Output = Self;

    fn bitand(mut self, rhs: Self) -> Self::Output {
        self &= rhs;
        self
    }
}

impl BitAndAssign<Self> for Emulated128 {
    fn bitand_assign(&mut self, rhs: Self) {
        algorithms::bitand_assign(self.0.as_mut_slice(), rhs.0.as_slice())
    }
}

impl BitOrAssign<Self> for Emulated128 {
    fn bitor_assign(&mut self, rhs: Self) {
        algorithms::bitor_assign(self.0.as_mut_slice(), rhs.0.as_slice())
    }
}

impl BitOr<Self> for Emulated128 {
    type Output = Self;

    fn bitor(mut self, rhs: Self) -> Self::Output {
        self |= rhs;
        self
    }
}

impl BitXorAssign<Self> for Emulated128 {
    fn bitxor_assign(&mut self, rhs: Self) {
        algorithms::bitxor_assign(self.0.as_mut_slice(), rhs.0.as_slice())
    }
}

impl BitXor<Self> for Emulated128 {
    type Output = Self;

    fn bitxor(mut self, rhs: Self) -> Self::Output {
        self ^= rhs;
        self
    }
}

// Shift amounts of 128 or more clear the value instead of being masked,
// a negative amount counts as a huge one.
macro_rules! impl_shifts {
    ($($Amount:ty),*) => {
        $(
            impl ShlAssign<$Amount> for Emulated128 {
                fn shl_assign(&mut self, shift: $Amount) {
                    let shift = u32::try_from(shift).unwrap_or(u32::MAX);
                    algorithms::shl_assign(self.0.as_mut_slice(), shift);
                }
            }

            impl Shl<$Amount> for Emulated128 {
                type Output = Self;

                fn shl(mut self, rhs: $Amount) -> Self::Output {
                    self <<= rhs;
                    self
                }
            }

            impl ShrAssign<$Amount> for Emulated128 {
                fn shr_assign(&mut self, shift: $Amount) {
                    let shift = u32::try_from(shift).unwrap_or(u32::MAX);
                    algorithms::shr_assign(self.0.as_mut_slice(), shift);
                }
            }

            impl Shr<$Amount> for Emulated128 {
                type Output = Self;

                fn shr(mut self, rhs: $Amount) -> Self::Output {
                    self >>= rhs;
                    self
                }
            }
        )*
    };
}

impl_shifts!(u32, i32, usize);

macro_rules! forward_native_binop {
    ($Native:ty, $($Trait:ident $method:ident $AssignTrait:ident $assign_method:ident),*) => {
        $(
            impl $Trait<$Native> for Emulated128 {
                type Output = Self;

                #[inline]
                fn $method(self, rhs: $Native) -> Self::Output {
                    $Trait::$method(self, Self::from(rhs))
                }
            }

            impl $AssignTrait<$Native> for Emulated128 {
                #[inline]
                fn $assign_method(&mut self, rhs: $Native) {
                    $AssignTrait::$assign_method(self, Self::from(rhs))
                }
            }
        )*
    };
}

macro_rules! impl_native_interop {
    ($($Native:ty),*) => {
        $(
            forward_native_binop!(
                $Native,
                Add add AddAssign add_assign,
                Sub sub SubAssign sub_assign,
                Mul mul MulAssign mul_assign,
                Div div DivAssign div_assign,
                Rem rem RemAssign rem_assign,
                BitAnd bitand BitAndAssign bitand_assign,
                BitOr bitor BitOrAssign bitor_assign,
                BitXor bitxor BitXorAssign bitxor_assign
            );

            impl PartialEq<$Native> for Emulated128 {
                #[inline]
                fn eq(&self, other: &$Native) -> bool {
                    *self == Self::from(*other)
                }
            }

            impl PartialEq<Emulated128> for $Native {
                #[inline]
                fn eq(&self, other: &Emulated128) -> bool {
                    Emulated128::from(*self) == *other
                }
            }

            impl PartialOrd<$Native> for Emulated128 {
                #[inline]
                fn partial_cmp(&self, other: &$Native) -> Option<Ordering> {
                    Some(self.cmp(&Self::from(*other)))
                }
            }

            impl PartialOrd<Emulated128> for $Native {
                #[inline]
                fn partial_cmp(&self, other: &Emulated128) -> Option<Ordering> {
                    Some(Emulated128::from(*self).cmp(other))
                }
            }
        )*
    };
}

impl_native_interop!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

macro_rules! impl_from_unsigned {
    ($($Native:ty),*) => {
        $(
            impl From<$Native> for Emulated128 {
                #[inline]
                #[allow(clippy::cast_lossless)]
                fn from(value: $Native) -> Self {
                    Self([value as u64, 0])
                }
            }
        )*
    };
}

// Two's complement promotion to a 64 bits word, the high word stays 0
macro_rules! impl_from_signed {
    ($($Native:ty),*) => {
        $(
            impl From<$Native> for Emulated128 {
                #[inline]
                #[allow(clippy::cast_lossless, clippy::cast_sign_loss)]
                fn from(value: $Native) -> Self {
                    Self([value as i64 as u64, 0])
                }
            }
        )*
    };
}

impl_from_unsigned!(u8, u16, u32, u64, usize);
impl_from_signed!(i8, i16, i32, i64, isize);

impl From<u128> for Emulated128 {
    #[allow(clippy::cast_possible_truncation)]
    fn from(value: u128) -> Self {
        Self([value as u64, (value >> 64) as u64])
    }
}

impl From<i128> for Emulated128 {
    #[allow(clippy::cast_sign_loss)]
    fn from(value: i128) -> Self {
        Self::from(value as u128)
    }
}

/// `(low, high)`
impl From<(u64, u64)> for Emulated128 {
    fn from(value: (u64, u64)) -> Self {
        Self([value.0, value.1])
    }
}

impl From<Emulated128> for u128 {
    fn from(value: Emulated128) -> Self {
        u128::from(value.low()) | (u128::from(value.high()) << 64)
    }
}

impl From<Emulated128> for i128 {
    #[allow(clippy::cast_possible_wrap)]
    fn from(value: Emulated128) -> Self {
        u128::from(value) as i128
    }
}

// Narrowing keeps the low bits, as `as` does
macro_rules! impl_cast_narrow {
    ($($Native:ty),*) => {
        $(
            impl CastFrom<Emulated128> for $Native {
                #[inline]
                #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
                fn cast_from(input: Emulated128) -> Self {
                    input.low() as $Native
                }
            }
        )*
    };
}

impl_cast_narrow!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);

impl CastFrom<Emulated128> for u128 {
    fn cast_from(input: Emulated128) -> Self {
        Self::from(input)
    }
}

impl CastFrom<u128> for Emulated128 {
    fn cast_from(input: u128) -> Self {
        Self::from(input)
    }
}

// SAFETY
//
// Emulated128 is allowed to be all zeros
unsafe impl bytemuck::Zeroable for Emulated128 {}

// SAFETY
//
// u64 impl bytemuck::Pod,
// [T; N] impl bytemuck::Pod if T: bytemuck::Pod
//
// https://docs.rs/bytemuck/latest/bytemuck/trait.Pod.html#foreign-impls
//
// Thus Emulated128 can safely be considered Pod
unsafe impl bytemuck::Pod for Emulated128 {}

impl Numeric for Emulated128 {
    const BITS: usize = Self::BITS as usize;

    const ZERO: Self = Self::ZERO;

    const ONE: Self = Self::ONE;

    const TWO: Self = Self::TWO;

    const MAX: Self = Self::MAX;
}

impl UnsignedNumeric for Emulated128 {}

impl UnsignedInteger for Emulated128 {
    #[inline]
    fn wrapping_mul(self, other: Self) -> Self {
        self * other
    }
    #[inline]
    #[allow(clippy::cast_possible_truncation)]
    fn div_rem_small(self, divisor: u8) -> (Self, u8) {
        let (q, r) = self.div_rem_u32(u32::from(divisor));
        (q, r as u8)
    }
}

fn pad_digits(f: &mut fmt::Formatter<'_>, prefix: &str, digits: &[u8]) -> fmt::Result {
    let digits = std::str::from_utf8(digits).map_err(|_| fmt::Error)?;
    f.pad_integral(true, prefix, digits)
}

impl fmt::Display for Emulated128 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut staging = DigitBuffer::new();
        pad_digits(f, "", staging.write(*self, 10))
    }
}

impl fmt::LowerHex for Emulated128 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut staging = DigitBuffer::new();
        pad_digits(f, "0x", staging.write(*self, 16))
    }
}

impl fmt::UpperHex for Emulated128 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut staging = DigitBuffer::new();
        let digits = staging.write(*self, 16);
        digits.make_ascii_uppercase();
        pad_digits(f, "0x", digits)
    }
}

impl fmt::Octal for Emulated128 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut staging = DigitBuffer::new();
        pad_digits(f, "0o", staging.write(*self, 8))
    }
}

impl fmt::Binary for Emulated128 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut staging = DigitBuffer::new();
        pad_digits(f, "0b", staging.write(*self, 2))
    }
}

#[cfg(test)]
mod tests {
    use std::panic::catch_unwind;

    use rand::Rng;

    use super::*;

    fn u64_with_odd_bits_set() -> u64 {
        let mut v = 0u64;

        for i in (1..=63).step_by(2) {
            v |= 1u64 << i;
        }

        v
    }

    fn u64_with_even_bits_set() -> u64 {
        let mut v = 0u64;

        // bit index are from 0 to 63
        for i in (0..=62).step_by(2) {
            v |= 1u64 << i;
        }

        v
    }

    #[test]
    fn test_bitand_bitor_bitxor() {
        let all_even_bits_set = Emulated128([u64_with_even_bits_set(); 2]);
        let all_odd_bits_set = Emulated128([u64_with_odd_bits_set(); 2]);

        assert_ne!(all_odd_bits_set, all_even_bits_set);
        assert_eq!(all_even_bits_set & all_odd_bits_set, Emulated128::ZERO);
        assert_eq!(all_even_bits_set | all_odd_bits_set, Emulated128::MAX);
        assert_eq!(all_even_bits_set ^ all_odd_bits_set, Emulated128::MAX);
        assert_eq!(all_odd_bits_set ^ all_odd_bits_set, Emulated128::ZERO);
    }

    #[test]
    fn test_increment_decrement() {
        let mut v = Emulated128::from(u64::MAX);
        v.increment();
        assert_eq!((v.high(), v.low()), (1, 0));
        v.decrement();
        assert_eq!((v.high(), v.low()), (0, u64::MAX));

        let mut v = Emulated128::MAX;
        v.increment();
        assert_eq!(v, Emulated128::ZERO);
        v.decrement();
        assert_eq!(v, Emulated128::MAX);
    }

    #[test]
    fn test_add_sub_wrap_around() {
        assert_eq!(Emulated128::MAX + 1u32, Emulated128::MIN);
        assert_eq!(Emulated128::MIN - 1u32, Emulated128::MAX);
        assert_eq!(
            Emulated128::MAX.overflowing_add(Emulated128::ONE),
            (Emulated128::ZERO, true)
        );
        assert_eq!(
            Emulated128::ZERO.overflowing_sub(Emulated128::ONE),
            (Emulated128::MAX, true)
        );
    }

    #[test]
    fn test_is_power_of_two_and_ilog2() {
        assert!(!Emulated128::ZERO.is_power_of_two());
        assert!(!Emulated128::MAX.is_power_of_two());
        assert!(catch_unwind(|| { Emulated128::ZERO.ilog2() }).is_err());

        for i in 0..Emulated128::BITS {
            let v = Emulated128::ONE << i;
            assert!(v.is_power_of_two());
            assert_eq!(v.ilog2(), i);
            assert_eq!(v.trailing_zeros(), i);
        }
    }

    #[test]
    fn test_mul() {
        let u64_max = Emulated128::from(u64::MAX);
        let expected = u64::MAX as u128 * u64::MAX as u128;
        assert_eq!(u64_max * u64_max, expected);

        let mut rng = rand::thread_rng();
        for _ in 0..100 {
            let a = rng.gen::<u128>();
            let b = rng.gen::<u128>();
            assert_eq!(Emulated128::from(a) * Emulated128::from(b), a.wrapping_mul(b));
        }

        assert_eq!(Emulated128::MAX * Emulated128::MAX, Emulated128::ONE);
        assert_eq!(Emulated128::MAX * 0u8, Emulated128::ZERO);
    }

    #[test]
    fn test_div_rem() {
        let mut rng = rand::thread_rng();
        for _ in 0..100 {
            let a = rng.gen::<Emulated128>();
            let b = rng.gen::<Emulated128>() >> rng.gen_range(0..128u32);
            if b.is_zero() {
                continue;
            }
            let (q, r) = a.div_rem(b);
            assert_eq!(q * b + r, a);
            assert!(r < b);
            assert_eq!(q, u128::from(a) / u128::from(b));
            assert_eq!(r, u128::from(a) % u128::from(b));
        }

        let u128_max = Emulated128::MAX;
        assert_eq!(u128_max / 3284723894u64, 103595424730374145554705368314u128);
        assert_eq!(u128_max % 3284723894u64, 701916739u128);
        assert_eq!(u128_max / 1u8, u128_max);
        assert_eq!(u128_max % 1u8, 0u8);
    }

    #[test]
    fn test_div_by_zero_panics() {
        assert!(catch_unwind(|| Emulated128::ONE / Emulated128::ZERO).is_err());
        assert!(catch_unwind(|| Emulated128::MAX % 0u64).is_err());
        assert!(catch_unwind(|| Emulated128::MAX.div_rem_u32(0)).is_err());
        assert_eq!(Emulated128::ONE.checked_div(Emulated128::ZERO), None);
        assert_eq!(Emulated128::ONE.checked_rem(Emulated128::ZERO), None);
    }

    #[test]
    fn test_shl_shr_limits() {
        assert_eq!(Emulated128::ONE << 128u32, Emulated128::ZERO);
        assert_eq!(Emulated128::MAX >> 200usize, Emulated128::ZERO);
        assert_eq!(Emulated128::ONE << -1i32, Emulated128::ZERO);

        // The wrapping variants aim to have same behaviour as rust native types
        assert_eq!(Emulated128::ONE.wrapping_shl(129), 1u128.wrapping_shl(129));
        assert_eq!(Emulated128::MAX.wrapping_shr(129), u128::MAX.wrapping_shr(129));
    }

    #[test]
    fn test_shl_shr_cross_word() {
        let input = (u64::MAX as u128) << 64;
        let a = Emulated128::from(input);
        assert_eq!(a >> 1u32, input >> 1);
        assert_eq!(a >> 64u32, u64::MAX);

        let input = u64::MAX as u128;
        let a = Emulated128::from(input);
        assert_eq!(a << 1u32, input << 1);
        assert_eq!(a << 65u32, input << 65);
    }

    #[test]
    fn test_signed_promotion() {
        let minus_one = Emulated128::from(-1i32);
        assert_eq!((minus_one.high(), minus_one.low()), (0, u64::MAX));

        let minus_one = Emulated128::from(-1i128);
        assert_eq!(minus_one, Emulated128::MAX);
        assert_eq!(i128::from(minus_one), -1);
    }

    #[test]
    fn test_casts_truncate() {
        let v = Emulated128::from_limbs(0x0123_4567_89AB_CDEF, 42);
        assert_eq!(u8::cast_from(v), 0xEF);
        assert_eq!(u32::cast_from(v), 0x89AB_CDEF);
        assert_eq!(i16::cast_from(v), 0xCDEFu16 as i16);
        assert_eq!(u64::cast_from(v), 0x0123_4567_89AB_CDEF);
    }

    #[test]
    fn test_byte_copies() {
        let value = u128::from_le_bytes(core::array::from_fn::<u8, 16, _>(|i| i as u8));
        let a = Emulated128::from(value);

        assert_eq!(a.to_le_bytes(), value.to_le_bytes());
        assert_eq!(a.to_be_bytes(), value.to_be_bytes());
        assert_eq!(Emulated128::from_le_bytes(value.to_le_bytes()), a);
        assert_eq!(Emulated128::from_be_bytes(value.to_be_bytes()), a);
    }

    #[test]
    fn test_formatting() {
        let v = Emulated128::from(u128::MAX);
        assert_eq!(v.to_string(), u128::MAX.to_string());
        assert_eq!(format!("{v:x}"), format!("{:x}", u128::MAX));
        assert_eq!(format!("{:#X}", Emulated128::from(0xBEEFu32)), "0xBEEF");
        assert_eq!(format!("{:o}", Emulated128::from(8u8)), "10");
        assert_eq!(format!("{:>6}", Emulated128::from(42u8)), "    42");
        assert_eq!(format!("{:08b}", Emulated128::from(5u8)), "00000101");
        assert_eq!(Emulated128::ZERO.to_string(), "0");
    }

    #[test]
    fn test_to_bits_string() {
        let v = Emulated128::from_limbs(0, 1 << 63);
        let bits = UnsignedInteger::to_bits_string(&v, 64);
        assert_eq!(bits, format!("1{} {}", "0".repeat(63), "0".repeat(64)));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde() {
        let v = Emulated128::from_limbs(7, 1);
        let json = serde_json::to_string(&v).unwrap();
        assert_eq!(json, "[7,1]");
        let back: Emulated128 = serde_json::from_str(&json).unwrap();
        assert_eq!(back, v);
    }
}
