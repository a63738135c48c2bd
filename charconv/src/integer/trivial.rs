use super::Emulated128;

/// A raw 128 bits pattern with no arithmetic attached.
///
/// The words are kept in the target's memory order, so the storage of any 16 bytes value
/// (a binary128 float for instance) can be copied into it byte for byte. Use
/// [`Emulated128::from`] to do math on the pattern.
///
/// ```
/// use charconv::integer::{Emulated128, TrivialUint128};
///
/// let bits: u128 = 0x7FFF_8000_0000_0000_0000_0000_0000_0000;
/// let raw: TrivialUint128 = bytemuck::cast(bits);
/// assert_eq!(Emulated128::from(raw), bits);
/// ```
#[derive(Default, Copy, Clone, Debug)]
#[repr(transparent)]
pub struct TrivialUint128(pub [u64; 2]);

impl TrivialUint128 {
    pub const fn from_ne_bytes(bytes: [u8; 16]) -> Self {
        Self(words_from_ne_bytes(bytes))
    }

    pub const fn to_ne_bytes(self) -> [u8; 16] {
        let mut bytes = [0u8; 16];
        let first = self.0[0].to_ne_bytes();
        let second = self.0[1].to_ne_bytes();
        let mut i = 0;
        while i < 8 {
            bytes[i] = first[i];
            bytes[i + 8] = second[i];
            i += 1;
        }
        bytes
    }
}

const fn words_from_ne_bytes(bytes: [u8; 16]) -> [u64; 2] {
    let mut first = [0u8; 8];
    let mut second = [0u8; 8];
    let mut i = 0;
    while i < 8 {
        first[i] = bytes[i];
        second[i] = bytes[i + 8];
        i += 1;
    }
    [u64::from_ne_bytes(first), u64::from_ne_bytes(second)]
}

impl From<TrivialUint128> for Emulated128 {
    fn from(value: TrivialUint128) -> Self {
        #[cfg(target_endian = "little")]
        let (low, high) = (value.0[0], value.0[1]);
        #[cfg(target_endian = "big")]
        let (low, high) = (value.0[1], value.0[0]);

        Self::from_limbs(low, high)
    }
}

// SAFETY
//
// TrivialUint128 is allowed to be all zeros
unsafe impl bytemuck::Zeroable for TrivialUint128 {}

// SAFETY
//
// [u64; 2] impl bytemuck::Pod and TrivialUint128 is repr(transparent) over it
unsafe impl bytemuck::Pod for TrivialUint128 {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bit_copy_matches_native() {
        // sign, exponent and mantissa bits of some binary128 value
        let bits: u128 = 0x733e_9b36_e3f4_17ff_7f7d_8a67_e3bc_4da5;

        let raw: TrivialUint128 = bytemuck::cast(bits);
        let value = Emulated128::from(raw);
        assert_eq!(value, bits);

        let raw = TrivialUint128::from_ne_bytes(bits.to_ne_bytes());
        assert_eq!(Emulated128::from(raw), bits);
        assert_eq!(raw.to_ne_bytes(), bits.to_ne_bytes());
    }
}
