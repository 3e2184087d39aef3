mod frame_allocator;
mod iter;
mod page_table_entry;

pub use frame_allocator::{Acquired, FrameAllocator, ParsePolicyError, ReplacementPolicy};
pub use iter::PageTableIterator;
pub use page_table_entry::PageTableEntry;

use log::debug;

use crate::PAGE_COUNT;

/// Single-level page table covering the whole logical address space.
#[derive(Clone)]
pub struct PageTable {
    entries: [PageTableEntry; PAGE_COUNT],
}

impl PageTable {
    pub fn init() -> Self {
        Self {
            entries: [PageTableEntry::zero(); PAGE_COUNT],
        }
    }

    /// `page_number` must be below `PAGE_COUNT`.
    pub fn get(&self, page_number: u32) -> PageTableEntry {
        self.entries[page_number as usize]
    }

    pub fn get_frame(&self, page_number: u32) -> Option<u32> {
        let entry = self.get(page_number);
        entry.is_valid().then(|| entry.get_frame_number())
    }

    pub fn mark_resident(&mut self, page_number: u32, frame_number: u32) {
        let entry = &mut self.entries[page_number as usize];
        entry.set_frame_number(frame_number);
        entry.set_valid();
    }

    /// Unmaps the page currently living in `frame_number`, if any, and
    /// returns its number. At most one page maps to a frame.
    pub fn invalidate_if_mapped_to(&mut self, frame_number: u32) -> Option<u32> {
        let (page_number, entry) = self
            .entries
            .iter_mut()
            .enumerate()
            .find(|(_, e)| e.is_valid() && e.get_frame_number() == frame_number)?;
        entry.invalidate();
        debug!("Page {} unmapped from frame {}", page_number, frame_number);
        Some(page_number as u32)
    }

    pub fn iter(&self) -> PageTableIterator<'_> {
        PageTableIterator::new(&self.entries)
    }

    /// `(page, frame)` for every resident page, ascending by page.
    pub fn resident(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        self.iter()
            .filter(|(_, e)| e.is_valid())
            .map(|(page, e)| (page, e.get_frame_number()))
    }

    pub fn non_resident(&self) -> impl Iterator<Item = (u32, PageTableEntry)> + '_ {
        self.iter().filter(|(_, e)| !e.is_valid())
    }
}

impl Default for PageTable {
    fn default() -> Self {
        Self::init()
    }
}
