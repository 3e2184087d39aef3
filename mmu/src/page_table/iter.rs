use super::PageTableEntry;

/// Walks the page table in ascending page order.
pub struct PageTableIterator<'a> {
    current: usize,
    entries: &'a [PageTableEntry],
}

impl<'a> PageTableIterator<'a> {
    pub fn new(entries: &'a [PageTableEntry]) -> Self {
        Self {
            current: 0,
            entries,
        }
    }
}

impl<'a> Iterator for PageTableIterator<'a> {
    type Item = (u32, PageTableEntry);

    fn next(&mut self) -> Option<Self::Item> {
        let entry = *self.entries.get(self.current)?;
        let page_number = self.current as u32;
        self.current += 1;
        Some((page_number, entry))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.entries.len().saturating_sub(self.current);
        (left, Some(left))
    }
}

impl ExactSizeIterator for PageTableIterator<'_> {}
