//! Logical-to-physical address translation for a 16-bit address space.
//!
//! A lookup goes TLB -> page table -> page fault. Page faults pull a page from
//! a [`PageStore`] into a frame handed out by the
//! [`FrameAllocator`](page_table::FrameAllocator).

use std::fmt;

pub mod address;
pub mod fault;
pub mod page_table;
pub mod stats;
pub mod tlb;
mod translator;


use disk::{Disk, DiskError};
use memory::{MemoryError, PhysicalMemory};

pub use page_table::{FrameAllocator, PageTable, PageTableEntry, ReplacementPolicy};
pub use stats::Statistics;
pub use tlb::{Tlb, TlbEntry};
pub use translator::{Mmu, Translation};

pub const OFFSET_BITS: u32 = 8;
pub const PAGE_BITS: u32 = 8;
pub const FRAME_BITS: u32 = 7;

pub const PAGE_SIZE: usize = 1 << OFFSET_BITS;
pub const FRAME_SIZE: usize = PAGE_SIZE;
pub const PAGE_COUNT: usize = 1 << PAGE_BITS;
pub const MAX_FRAMES: usize = 1 << FRAME_BITS;
pub const TLB_SIZE: usize = 16;

pub const STORE_SIZE: usize = PAGE_SIZE * PAGE_COUNT;
pub const MEMORY_SIZE: usize = FRAME_SIZE * MAX_FRAMES;

pub type BackingStore = Disk<PAGE_SIZE, STORE_SIZE>;
pub type Memory = PhysicalMemory<FRAME_SIZE, MAX_FRAMES>;

/// Source of page contents for the page-fault handler.
pub trait PageStore {
    fn read_page(&self, page_number: u32) -> Result<Box<[u8; PAGE_SIZE]>, DiskError>;
}

impl PageStore for BackingStore {
    fn read_page(&self, page_number: u32) -> Result<Box<[u8; PAGE_SIZE]>, DiskError> {
        self.read_block(page_number as usize)
    }
}

#[derive(Debug, PartialEq)]
pub enum MmuError {
    Store(DiskError),
    Memory(MemoryError),
    InvalidFrameCount(usize),
}

impl fmt::Display for MmuError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MmuError::Store(e) => write!(f, "backing store read failed: {}", e),
            MmuError::Memory(e) => write!(f, "physical memory access failed: {}", e),
            MmuError::InvalidFrameCount(n) => write!(f, "invalid frame count {}", n),
        }
    }
}

impl From<DiskError> for MmuError {
    fn from(e: DiskError) -> Self {
        MmuError::Store(e)
    }
}

impl From<MemoryError> for MmuError {
    fn from(e: MemoryError) -> Self {
        MmuError::Memory(e)
    }
}
