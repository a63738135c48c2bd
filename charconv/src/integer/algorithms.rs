//! Word slice algorithms backing the emulated integers.
//!
//! All slices are little endian: index 0 holds the least significant word.

use std::cmp::Ordering;

const HALF_WORD_MASK: u64 = u32::MAX as u64;

/// Adds `rhs` to `lhs` word by word, propagating the carry, and returns the final carry out.
pub(crate) fn add_assign_words(lhs: &mut [u64], rhs: &[u64]) -> bool {
    debug_assert_eq!(lhs.len(), rhs.len());
    let mut carry = false;
    for (lhs_word, rhs_word) in lhs.iter_mut().zip(rhs.iter()) {
        let (sum, overflowed_word) = lhs_word.overflowing_add(*rhs_word);
        let (sum, overflowed_carry) = sum.overflowing_add(u64::from(carry));
        *lhs_word = sum;
        carry = overflowed_word || overflowed_carry;
    }
    carry
}

/// Subtracts `rhs` from `lhs` word by word, propagating the borrow, and returns the final
/// borrow out.
pub(crate) fn sub_assign_words(lhs: &mut [u64], rhs: &[u64]) -> bool {
    debug_assert_eq!(lhs.len(), rhs.len());
    let mut borrow = false;
    for (lhs_word, rhs_word) in lhs.iter_mut().zip(rhs.iter()) {
        let (diff, underflowed_word) = lhs_word.overflowing_sub(*rhs_word);
        let (diff, underflowed_borrow) = diff.overflowing_sub(u64::from(borrow));
        *lhs_word = diff;
        borrow = underflowed_word || underflowed_borrow;
    }
    borrow
}

pub(crate) fn bitnot_assign(words: &mut [u64]) {
    for word in words.iter_mut() {
        *word = !*word;
    }
}

pub(crate) fn bitand_assign(lhs: &mut [u64], rhs: &[u64]) {
    for (lhs_word, rhs_word) in lhs.iter_mut().zip(rhs.iter()) {
        *lhs_word &= *rhs_word;
    }
}

pub(crate) fn bitor_assign(lhs: &mut [u64], rhs: &[u64]) {
    for (lhs_word, rhs_word) in lhs.iter_mut().zip(rhs.iter()) {
        *lhs_word |= *rhs_word;
    }
}

pub(crate) fn bitxor_assign(lhs: &mut [u64], rhs: &[u64]) {
    for (lhs_word, rhs_word) in lhs.iter_mut().zip(rhs.iter()) {
        *lhs_word ^= *rhs_word;
    }
}

/// Shifts the words to the left, bits crossing a word boundary move into the next more
/// significant word.
///
/// A shift greater or equal to the total bit count clears every word.
pub(crate) fn shl_assign(words: &mut [u64], shift: u32) {
    let len = words.len();
    let word_shift = (shift / u64::BITS) as usize;
    let bit_shift = shift % u64::BITS;

    if word_shift >= len {
        words.fill(0);
        return;
    }

    if word_shift != 0 {
        words.copy_within(..len - word_shift, word_shift);
        words[..word_shift].fill(0);
    }

    if bit_shift != 0 {
        let mut spilled = 0u64;
        for word in words[word_shift..].iter_mut() {
            let next_spilled = *word >> (u64::BITS - bit_shift);
            *word = (*word << bit_shift) | spilled;
            spilled = next_spilled;
        }
    }
}

/// Shifts the words to the right, bits crossing a word boundary move into the next less
/// significant word.
///
/// A shift greater or equal to the total bit count clears every word.
pub(crate) fn shr_assign(words: &mut [u64], shift: u32) {
    let len = words.len();
    let word_shift = (shift / u64::BITS) as usize;
    let bit_shift = shift % u64::BITS;

    if word_shift >= len {
        words.fill(0);
        return;
    }

    if word_shift != 0 {
        words.copy_within(word_shift.., 0);
        words[len - word_shift..].fill(0);
    }

    if bit_shift != 0 {
        let mut spilled = 0u64;
        for word in words[..len - word_shift].iter_mut().rev() {
            let next_spilled = *word << (u64::BITS - bit_shift);
            *word = (*word >> bit_shift) | spilled;
            spilled = next_spilled;
        }
    }
}

/// Compares two integers of the same word count, most significant word first.
pub(crate) fn compare(lhs: &[u64], rhs: &[u64]) -> Ordering {
    debug_assert_eq!(lhs.len(), rhs.len());
    lhs.iter()
        .rev()
        .zip(rhs.iter().rev())
        .map(|(l, r)| l.cmp(r))
        .find(|ord| *ord != Ordering::Equal)
        .unwrap_or(Ordering::Equal)
}

pub(crate) fn leading_zeros(words: &[u64]) -> u32 {
    let mut count = 0;
    for word in words.iter().rev() {
        count += word.leading_zeros();
        if *word != 0 {
            break;
        }
    }
    count
}

pub(crate) fn trailing_zeros(words: &[u64]) -> u32 {
    let mut count = 0;
    for word in words.iter() {
        count += word.trailing_zeros();
        if *word != 0 {
            break;
        }
    }
    count
}

pub(crate) fn is_zero(words: &[u64]) -> bool {
    words.iter().all(|word| *word == 0)
}

/// Full 64x64 -> 128 product, returned as `(low, high)`.
#[cfg(target_pointer_width = "64")]
#[inline]
#[allow(clippy::cast_possible_truncation)]
pub(crate) fn umul128(lhs: u64, rhs: u64) -> (u64, u64) {
    let product = u128::from(lhs) * u128::from(rhs);
    (product as u64, (product >> 64) as u64)
}

/// Full 64x64 -> 128 product, returned as `(low, high)`.
#[cfg(not(target_pointer_width = "64"))]
#[inline]
pub(crate) fn umul128(lhs: u64, rhs: u64) -> (u64, u64) {
    umul128_partial_products(lhs, rhs)
}

/// Long multiplication of two 64 bits words split in 32 bits halves.
///
/// The middle column can not overflow: (2^32 - 1) * 2 + (2^32 - 1)^2 == 2^64 - 1.
#[cfg_attr(target_pointer_width = "64", allow(dead_code))]
pub(crate) fn umul128_partial_products(lhs: u64, rhs: u64) -> (u64, u64) {
    let (lhs_low, lhs_high) = (lhs & HALF_WORD_MASK, lhs >> 32);
    let (rhs_low, rhs_high) = (rhs & HALF_WORD_MASK, rhs >> 32);

    let low_low = lhs_low * rhs_low;
    let high_low = lhs_high * rhs_low;
    let low_high = lhs_low * rhs_high;
    let high_high = lhs_high * rhs_high;

    let middle = (low_low >> 32) + (high_low & HALF_WORD_MASK) + low_high;

    let low = (middle << 32) | (low_low & HALF_WORD_MASK);
    let high = (high_low >> 32) + (middle >> 32) + high_high;
    (low, high)
}

/// Truncating schoolbook multiplication: partial products landing beyond the last word are
/// dropped, which is the same as a wrapping multiplication.
pub(crate) fn schoolbook_mul_assign<const N: usize>(lhs: &mut [u64; N], rhs: &[u64; N]) {
    let mut result = [0u64; N];

    for (i, lhs_word) in lhs.iter().enumerate() {
        let mut carry = 0u64;
        for (j, rhs_word) in rhs.iter().take(N - i).enumerate() {
            let (low, high) = umul128(*lhs_word, *rhs_word);
            let (sum, overflowed_low) = result[i + j].overflowing_add(low);
            let (sum, overflowed_carry) = sum.overflowing_add(carry);
            result[i + j] = sum;
            // a * b + c + d <= 2^128 - 1 so this does not wrap except on the dropped column
            carry = high
                .wrapping_add(u64::from(overflowed_low))
                .wrapping_add(u64::from(overflowed_carry));
        }
    }

    *lhs = result;
}

/// Divides in place by a small divisor, 32 bits at a time, and returns the remainder.
///
/// # Panics
///
/// Panics if `divisor` is 0.
#[allow(clippy::cast_possible_truncation)]
pub(crate) fn div_rem_small_assign(words: &mut [u64], divisor: u32) -> u32 {
    assert!(divisor != 0, "attempt to divide by zero");
    let divisor = u64::from(divisor);

    // remainder < divisor < 2^32 so shifting it by 32 never overflows
    let mut remainder = 0u64;
    for word in words.iter_mut().rev() {
        let upper = (remainder << 32) | (*word >> 32);
        let upper_quotient = upper / divisor;
        remainder = upper % divisor;

        let lower = (remainder << 32) | (*word & HALF_WORD_MASK);
        let lower_quotient = lower / divisor;
        remainder = lower % divisor;

        *word = (upper_quotient << 32) | lower_quotient;
    }
    remainder as u32
}

/// Restoring binary long division, returns `(quotient, remainder)`.
///
/// # Panics
///
/// Panics if `divisor` is 0.
pub(crate) fn slow_div<const N: usize>(
    numerator: [u64; N],
    divisor: [u64; N],
) -> ([u64; N], [u64; N]) {
    assert!(!is_zero(&divisor), "attempt to divide by zero");

    if compare(&numerator, &divisor) == Ordering::Less {
        return ([0; N], numerator);
    }

    let total_bits = N as u32 * u64::BITS;
    let significant_bits = total_bits - leading_zeros(&numerator);

    let mut quotient = [0u64; N];
    let mut remainder = [0u64; N];
    for i in (0..significant_bits).rev() {
        let word_index = (i / u64::BITS) as usize;
        let bit_index = i % u64::BITS;

        // When the top bit is about to be shifted out the true remainder exceeds the divisor,
        // the wrapping subtraction below still yields the right value.
        let shifted_out = remainder[N - 1] >> (u64::BITS - 1) == 1;
        shl_assign(&mut remainder, 1);
        remainder[0] |= (numerator[word_index] >> bit_index) & 1;

        if shifted_out || compare(&remainder, &divisor) != Ordering::Less {
            sub_assign_words(&mut remainder, &divisor);
            quotient[word_index] |= 1 << bit_index;
        }
    }

    (quotient, remainder)
}

pub(crate) fn copy_from_le_byte_slice(words: &mut [u64], bytes: &[u8]) {
    assert_eq!(bytes.len(), words.len() * std::mem::size_of::<u64>());
    for (word, chunk) in words.iter_mut().zip(bytes.chunks_exact(8)) {
        let mut word_bytes = [0u8; 8];
        word_bytes.copy_from_slice(chunk);
        *word = u64::from_le_bytes(word_bytes);
    }
}

pub(crate) fn copy_from_be_byte_slice(words: &mut [u64], bytes: &[u8]) {
    assert_eq!(bytes.len(), words.len() * std::mem::size_of::<u64>());
    for (word, chunk) in words.iter_mut().rev().zip(bytes.chunks_exact(8)) {
        let mut word_bytes = [0u8; 8];
        word_bytes.copy_from_slice(chunk);
        *word = u64::from_be_bytes(word_bytes);
    }
}

pub(crate) fn copy_to_le_byte_slice(words: &[u64], bytes: &mut [u8]) {
    assert_eq!(bytes.len(), words.len() * std::mem::size_of::<u64>());
    for (word, chunk) in words.iter().zip(bytes.chunks_exact_mut(8)) {
        chunk.copy_from_slice(&word.to_le_bytes());
    }
}

pub(crate) fn copy_to_be_byte_slice(words: &[u64], bytes: &mut [u8]) {
    assert_eq!(bytes.len(), words.len() * std::mem::size_of::<u64>());
    for (word, chunk) in words.iter().rev().zip(bytes.chunks_exact_mut(8)) {
        chunk.copy_from_slice(&word.to_be_bytes());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn test_partial_products_match_native() {
        let mut rng = rand::thread_rng();
        for _ in 0..1000 {
            let a = rng.gen::<u64>();
            let b = rng.gen::<u64>();
            assert_eq!(umul128_partial_products(a, b), umul128(a, b));
        }

        assert_eq!(
            umul128_partial_products(u64::MAX, u64::MAX),
            (1, u64::MAX - 1)
        );
    }

    #[test]
    fn test_carry_and_borrow_out() {
        let mut words = [u64::MAX, u64::MAX];
        assert!(add_assign_words(&mut words, &[1, 0]));
        assert_eq!(words, [0, 0]);

        assert!(sub_assign_words(&mut words, &[1, 0]));
        assert_eq!(words, [u64::MAX, u64::MAX]);
    }

    #[test]
    fn test_shifts_cross_word_boundary() {
        let mut words = [1u64 << 63, 0];
        shl_assign(&mut words, 1);
        assert_eq!(words, [0, 1]);

        shr_assign(&mut words, 1);
        assert_eq!(words, [1 << 63, 0]);

        let mut words = [0xABCD, 0];
        shl_assign(&mut words, 68);
        assert_eq!(words, [0, 0xABCD << 4]);

        shr_assign(&mut words, 68);
        assert_eq!(words, [0xABCD, 0]);

        shl_assign(&mut words, 128);
        assert_eq!(words, [0, 0]);
    }

    #[test]
    fn test_leading_trailing_zeros() {
        assert_eq!(leading_zeros(&[0, 0]), 128);
        assert_eq!(leading_zeros(&[1, 0]), 127);
        assert_eq!(leading_zeros(&[0, 1]), 63);
        assert_eq!(trailing_zeros(&[0, 0]), 128);
        assert_eq!(trailing_zeros(&[0, 1]), 64);
    }

    #[test]
    fn test_div_rem_small_assign() {
        let mut words = [u64::MAX, u64::MAX];
        let rem = div_rem_small_assign(&mut words, 10);
        let expected = u128::MAX / 10;
        assert_eq!(rem, 5);
        assert_eq!(words, [expected as u64, (expected >> 64) as u64]);
    }

    #[test]
    fn test_slow_div_with_top_bit_set_divisor() {
        let numerator = [u64::MAX, u64::MAX];
        let divisor = [1, 1 << 63];
        let (q, r) = slow_div(numerator, divisor);

        let n = u128::MAX;
        let d = (1u128 << 127) | 1;
        assert_eq!(q, [(n / d) as u64, ((n / d) >> 64) as u64]);
        assert_eq!(r, [(n % d) as u64, ((n % d) >> 64) as u64]);
    }

    #[test]
    fn test_slow_div_by_zero_panics() {
        let result = std::panic::catch_unwind(|| slow_div([1u64, 0], [0, 0]));
        assert!(result.is_err());
    }
}
