use log::trace;

use crate::TLB_SIZE;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TlbEntry {
    pub page_number: u32,
    pub frame_number: u32,
    pub valid: bool,
}

/// Fully associative translation cache with FIFO slot replacement.
#[derive(Debug, Default)]
pub struct Tlb {
    entries: [TlbEntry; TLB_SIZE],
    // Next slot to overwrite.
    next: usize,
}

impl Tlb {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lookup(&self, page_number: u32) -> Option<u32> {
        self.entries
            .iter()
            .find(|e| e.valid && e.page_number == page_number)
            .map(|e| e.frame_number)
    }

    /// Overwrites the oldest slot, whatever it holds.
    pub fn insert(&mut self, page_number: u32, frame_number: u32) {
        let slot = self.next % TLB_SIZE;
        self.next = (self.next + 1) % TLB_SIZE;
        trace!(
            "TLB[{}] <- page {} frame {}",
            slot,
            page_number,
            frame_number
        );
        self.entries[slot] = TlbEntry {
            page_number,
            frame_number,
            valid: true,
        };
    }

    pub fn entries(&self) -> &[TlbEntry; TLB_SIZE] {
        &self.entries
    }
}
