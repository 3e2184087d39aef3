/// Maps one page of the logical address space to a frame in physical memory.
///
/// | valid: 1 bit | unused | frame number: FRAME_BITS |
///
/// The frame number is kept after invalidation; it is meaningless until the
/// entry is made valid again.
#[derive(Clone, Copy, Default, PartialEq, Eq)]
pub struct PageTableEntry {
    pub(super) entry: u32,
}

const VALID_BIT: u32 = 1 << 31;
const FRAME_MASK: u32 = (1 << crate::FRAME_BITS) - 1;

impl PageTableEntry {
    pub(super) fn zero() -> Self {
        PageTableEntry { entry: 0 }
    }

    pub fn is_valid(&self) -> bool {
        self.entry & VALID_BIT != 0
    }

    pub fn get_frame_number(&self) -> u32 {
        self.entry & FRAME_MASK
    }

    pub(super) fn set_frame_number(&mut self, frame_number: u32) {
        self.entry = (self.entry & !FRAME_MASK) | (frame_number & FRAME_MASK);
    }

    pub(super) fn set_valid(&mut self) {
        self.entry |= VALID_BIT;
    }

    pub(super) fn invalidate(&mut self) {
        self.entry &= !VALID_BIT;
    }
}

impl std::fmt::Debug for PageTableEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PageTableEntry")
            .field("frame_number", &self.get_frame_number())
            .field("valid", &self.is_valid())
            .finish()
    }
}
