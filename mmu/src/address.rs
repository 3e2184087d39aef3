use crate::{OFFSET_BITS, PAGE_BITS};

pub const OFFSET_MASK: u32 = (1 << OFFSET_BITS) - 1;
pub const PAGE_MASK: u32 = (1 << PAGE_BITS) - 1;

/// Splits a logical address into `(page_number, offset)`.
///
/// Bits above the 16-bit address space are ignored.
pub const fn decode(logical: u32) -> (u32, u32) {
    ((logical >> OFFSET_BITS) & PAGE_MASK, logical & OFFSET_MASK)
}

pub const fn encode(frame_number: u32, offset: u32) -> u32 {
    (frame_number << OFFSET_BITS) | offset
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MAX_FRAMES;

    #[test]
    fn decode_splits_page_and_offset() {
        assert_eq!(decode(0), (0, 0));
        assert_eq!(decode(256), (1, 0));
        assert_eq!(decode(16916), (66, 20));
        assert_eq!(decode(62493), (244, 29));
        assert_eq!(decode(0xFFFF), (255, 255));
    }

    #[test]
    fn decode_ignores_high_bits() {
        assert_eq!(decode(0x1_0102), (1, 2));
        assert_eq!(decode(u32::MAX), (255, 255));
    }

    #[test]
    fn encode_keeps_offset() {
        for logical in 0..(1u32 << 16) {
            let (page, offset) = decode(logical);
            assert_eq!(offset, logical & 0xFF);
            assert!(page < 256);
            let frame = page % MAX_FRAMES as u32;
            let physical = encode(frame, offset);
            assert_eq!(physical & OFFSET_MASK, offset);
            assert_eq!(physical >> OFFSET_BITS, frame);
        }
    }
}
