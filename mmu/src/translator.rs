use log::trace;

use crate::{
    address,
    fault::PageFaultHandler,
    page_table::{FrameAllocator, PageTable, ReplacementPolicy},
    stats::Statistics,
    tlb::Tlb,
    Memory, MmuError, PageStore,
};

/// Outcome of translating one logical address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Translation {
    pub logical: u32,
    pub page_number: u32,
    pub offset: u32,
    pub frame_number: u32,
    pub physical: u32,
    /// Byte stored at `physical`, read as signed.
    pub value: i8,
    pub page_fault: bool,
    pub tlb_miss: bool,
}

/// Translation context for one run: TLB, page table, frame pool, physical
/// memory, backing store and counters.
pub struct Mmu<S: PageStore> {
    tlb: Tlb,
    page_table: PageTable,
    allocator: FrameAllocator,
    memory: Memory,
    store: S,
    stats: Statistics,
}

impl<S: PageStore> Mmu<S> {
    pub fn init(
        store: S,
        frame_count: usize,
        policy: ReplacementPolicy,
    ) -> Result<Self, MmuError> {
        Ok(Self {
            tlb: Tlb::new(),
            page_table: PageTable::init(),
            allocator: FrameAllocator::init(frame_count, policy)?,
            memory: Memory::create(),
            store,
            stats: Statistics::default(),
        })
    }

    pub fn translate(&mut self, logical: u32) -> Result<Translation, MmuError> {
        self.stats.record_translation();
        let (page_number, offset) = address::decode(logical);

        let mut page_fault = false;
        let tlb_hit = self.tlb.lookup(page_number);
        let frame_number = match tlb_hit {
            Some(frame_number) => {
                trace!("TLB hit: page {} -> frame {}", page_number, frame_number);
                frame_number
            }
            None => {
                self.stats.record_tlb_miss();
                if !self.page_table.get(page_number).is_valid() {
                    PageFaultHandler {
                        allocator: &mut self.allocator,
                        store: &self.store,
                        memory: &mut self.memory,
                        page_table: &mut self.page_table,
                        stats: &mut self.stats,
                    }
                    .handle_fault(page_number)?;
                    page_fault = true;
                }
                let frame_number = self.page_table.get(page_number).get_frame_number();
                self.tlb.insert(page_number, frame_number);
                frame_number
            }
        };
        self.allocator.touch(frame_number);

        let physical = address::encode(frame_number, offset);
        let value = self.memory.read_u8(physical as u64)? as i8;
        Ok(Translation {
            logical,
            page_number,
            offset,
            frame_number,
            physical,
            value,
            page_fault,
            tlb_miss: tlb_hit.is_none(),
        })
    }

    pub fn tlb(&self) -> &Tlb {
        &self.tlb
    }

    pub fn page_table(&self) -> &PageTable {
        &self.page_table
    }

    pub fn allocator(&self) -> &FrameAllocator {
        &self.allocator
    }

    pub fn memory(&self) -> &Memory {
        &self.memory
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn statistics(&self) -> &Statistics {
        &self.stats
    }
}
