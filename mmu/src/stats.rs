/// Counters for one run. They only ever grow.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Statistics {
    pub translations: u64,
    pub page_faults: u64,
    pub tlb_misses: u64,
}

impl Statistics {
    pub fn record_translation(&mut self) {
        self.translations += 1;
    }

    pub fn record_page_fault(&mut self) {
        self.page_faults += 1;
    }

    pub fn record_tlb_miss(&mut self) {
        self.tlb_misses += 1;
    }

    pub fn tlb_hits(&self) -> u64 {
        self.translations - self.tlb_misses
    }

    /// Percentage of translations that page-faulted; `None` before the first
    /// translation.
    pub fn page_fault_rate(&self) -> Option<f64> {
        self.percentage(self.page_faults)
    }

    /// Percentage of translations served by the TLB; `None` before the first
    /// translation.
    pub fn tlb_hit_rate(&self) -> Option<f64> {
        self.percentage(self.tlb_hits())
    }

    fn percentage(&self, count: u64) -> Option<f64> {
        if self.translations == 0 {
            return None;
        }
        Some(count as f64 * 100.0 / self.translations as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_run_has_no_rates() {
        let stats = Statistics::default();
        assert_eq!(stats.page_fault_rate(), None);
        assert_eq!(stats.tlb_hit_rate(), None);
    }

    #[test]
    fn rates() {
        let mut stats = Statistics::default();
        for _ in 0..10 {
            stats.record_translation();
        }
        for _ in 0..3 {
            stats.record_page_fault();
        }
        for _ in 0..4 {
            stats.record_tlb_miss();
        }
        assert_eq!(stats.tlb_hits(), 6);
        assert_eq!(stats.page_fault_rate(), Some(30.0));
        assert_eq!(stats.tlb_hit_rate(), Some(60.0));
    }
}
