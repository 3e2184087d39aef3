use std::io::{self, Write};

use mmu::{PageTable, ReplacementPolicy, Statistics, Tlb, Translation};

const SEPARATOR: &str =
    "---------------------------------------------------------------------";

pub fn header<W: Write>(out: &mut W, policy: ReplacementPolicy, frames: usize) -> io::Result<()> {
    writeln!(out, "\n\t\t\tAlgorithm {} ({} frames)\n\n", policy, frames)
}

pub fn input<W: Write>(out: &mut W, line: &str) -> io::Result<()> {
    writeln!(out, "{}", SEPARATOR)?;
    writeln!(out, "Input: {}\n", line)
}

pub fn translation<W: Write>(out: &mut W, t: &Translation) -> io::Result<()> {
    writeln!(out, "Logical address: {}", t.logical)?;
    writeln!(out, "Physical address: {}", t.physical)?;
    writeln!(out, "Stored byte value: {}", t.value)
}

pub fn tlb<W: Write>(out: &mut W, tlb: &Tlb) -> io::Result<()> {
    for (slot, entry) in tlb.entries().iter().enumerate() {
        writeln!(
            out,
            "TLB[{}] ->\tvalid: {}\tpage: {}\tframe: {}",
            slot, entry.valid as u8, entry.page_number, entry.frame_number
        )?;
    }
    Ok(())
}

pub fn non_resident<W: Write>(out: &mut W, page_table: &PageTable) -> io::Result<()> {
    for (page, entry) in page_table.non_resident() {
        writeln!(out, "PageTable[{}]:\tframe {}", page, entry.get_frame_number())?;
    }
    Ok(())
}

pub fn resident<W: Write>(out: &mut W, page_table: &PageTable) -> io::Result<()> {
    for (page, frame) in page_table.resident() {
        writeln!(out, "PageTable[{}]:\tframe {}", page, frame)?;
    }
    Ok(())
}

pub fn statistics<W: Write>(out: &mut W, stats: &Statistics) -> io::Result<()> {
    writeln!(out, "{}", SEPARATOR)?;
    writeln!(out, "\t\t\t\tSTATISTICS\n")?;
    writeln!(out, "Translations: {}", stats.translations)?;
    match (stats.page_fault_rate(), stats.tlb_hit_rate()) {
        (Some(faults), Some(hits)) => {
            writeln!(out, "Page-fault rate: {:.2}%", faults)?;
            writeln!(out, "TLB hit rate: {:.2}%", hits)
        }
        _ => {
            writeln!(out, "Page-fault rate: no data")?;
            writeln!(out, "TLB hit rate: no data")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        let mut out = Vec::new();
        f(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn translation_lines() {
        let t = Translation {
            logical: 16916,
            page_number: 66,
            offset: 20,
            frame_number: 0,
            physical: 20,
            value: 0,
            page_fault: true,
            tlb_miss: true,
        };
        assert_eq!(
            render(|out| translation(out, &t)),
            "Logical address: 16916\nPhysical address: 20\nStored byte value: 0\n"
        );
    }

    #[test]
    fn empty_tables() {
        let tlb = Tlb::new();
        let text = render(|out| super::tlb(out, &tlb));
        assert_eq!(text.lines().count(), mmu::TLB_SIZE);
        assert_eq!(
            text.lines().next(),
            Some("TLB[0] ->\tvalid: 0\tpage: 0\tframe: 0")
        );

        let table = PageTable::init();
        assert_eq!(render(|out| resident(out, &table)), "");
        assert_eq!(
            render(|out| non_resident(out, &table)).lines().count(),
            mmu::PAGE_COUNT
        );
    }

    #[test]
    fn statistics_with_and_without_data() {
        let text = render(|out| statistics(out, &Statistics::default()));
        assert!(text.contains("Page-fault rate: no data"));
        assert!(text.contains("TLB hit rate: no data"));

        let stats = Statistics {
            translations: 10,
            page_faults: 3,
            tlb_misses: 4,
        };
        let text = render(|out| statistics(out, &stats));
        assert!(text.contains("Page-fault rate: 30.00%"));
        assert!(text.contains("TLB hit rate: 60.00%"));
    }
}
