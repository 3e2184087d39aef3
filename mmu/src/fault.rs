use log::debug;

use crate::{
    page_table::{Acquired, FrameAllocator, PageTable},
    Memory, MmuError, PageStore, Statistics,
};

/// Brings a non-resident page into memory.
///
/// Borrows the pieces of the translation context it needs for the duration
/// of one fault.
pub struct PageFaultHandler<'a, S: PageStore> {
    pub allocator: &'a mut FrameAllocator,
    pub store: &'a S,
    pub memory: &'a mut Memory,
    pub page_table: &'a mut PageTable,
    pub stats: &'a mut Statistics,
}

impl<S: PageStore> PageFaultHandler<'_, S> {
    /// Loads `page_number` into a fresh or reclaimed frame and maps it.
    ///
    /// The page is read before a frame is picked, so a store failure leaves
    /// the allocator and every existing mapping untouched.
    pub fn handle_fault(&mut self, page_number: u32) -> Result<Acquired, MmuError> {
        let bytes = self.store.read_page(page_number)?;
        let acquired = self.allocator.acquire_frame(self.page_table);
        self.memory
            .write_frame(acquired.frame as usize, bytes.as_slice())?;
        self.page_table.mark_resident(page_number, acquired.frame);
        self.stats.record_page_fault();
        debug!(
            "Page fault: page {} loaded into frame {}",
            page_number, acquired.frame
        );
        Ok(acquired)
    }
}
