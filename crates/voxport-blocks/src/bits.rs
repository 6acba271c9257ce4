//! Bit-field helpers for the 8-bit block state.
//!
//! Two conventions live side by side and must not be unified: [`bits`] counts bit
//! positions from the most significant bit, [`bit_set`] from the least significant.

use crate::types::BlockState;

/// Extracts `len` consecutive bits of `value` starting at `start`, where position 0 is
/// bit 7 (MSB-first). The result keeps the extracted bits in MSB-first order.
///
/// `bits(0b1010_0000, 0, 3) == 0b101`; the low two bits of a state are `bits(s, 6, 2)`.
#[inline]
pub fn bits(value: BlockState, start: u8, len: u8) -> u8 {
    debug_assert!(start as u32 + len as u32 <= 8, "bit range {start}+{len} exceeds 8 bits");
    if len == 0 {
        return 0;
    }
    let shift = 8u32.saturating_sub(start as u32 + len as u32);
    let mask = ((1u32 << len) - 1) as u8;
    ((value as u32 >> shift) as u8) & mask
}

/// True if the bit at `pos` is set, with `pos` 0 being the least significant bit.
#[inline]
pub fn bit_set(value: BlockState, pos: u8) -> bool {
    debug_assert!(pos < 8);
    (value & (1 << pos)) != 0
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn msb_first_ranges() {
        assert_eq!(bits(0b1010_0000, 0, 3), 0b101);
        assert_eq!(bits(0b0000_0110, 5, 3), 0b110);
        assert_eq!(bits(0b0000_0011, 6, 2), 0b11);
        assert_eq!(bits(0b1000_0000, 0, 1), 1);
        assert_eq!(bits(0xFF, 3, 0), 0);
        assert_eq!(bits(0xAB, 0, 8), 0xAB);
    }

    #[test]
    fn lsb_first_single_bits() {
        assert!(bit_set(0b0000_1000, 3));
        assert!(!bit_set(0b0000_1000, 4));
        // the same physical bit is position 4 for `bits`
        assert_eq!(bits(0b0000_1000, 4, 1), 1);
    }

    proptest! {
        #[test]
        fn single_bit_conventions_mirror(v in any::<u8>(), pos in 0u8..8) {
            prop_assert_eq!(bit_set(v, pos), bits(v, 7 - pos, 1) == 1);
        }

        #[test]
        fn adjacent_ranges_concatenate(v in any::<u8>(), split in 0u8..=8) {
            let hi = bits(v, 0, split) as u32;
            let lo = bits(v, split, 8 - split) as u32;
            prop_assert_eq!((hi << (8 - split)) | lo, v as u32);
        }
    }
}
