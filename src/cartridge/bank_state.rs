use std::fmt;

use crate::bus::{ChrSource, ChrWindow, PrgWindow};
use crate::memory::name_table_mirroring::NameTableMirroring;

// Which ROM/RAM pages are currently visible to the CPU and PPU.
// PRG is tracked as four 8KiB pages at 0x8000, 0xA000, 0xC000 and 0xE000,
// CHR as eight 1KiB pages, so every window size a board can select is representable.
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct BankState {
    prg_pages: [u16; 4],
    chr_pages: [u16; 8],
    chr_source: ChrSource,
    name_table_mirroring: NameTableMirroring,
}

impl BankState {
    pub fn new(chr_source: ChrSource, name_table_mirroring: NameTableMirroring) -> BankState {
        BankState {
            prg_pages: [0, 1, 2, 3],
            chr_pages: [0, 1, 2, 3, 4, 5, 6, 7],
            chr_source,
            name_table_mirroring,
        }
    }

    // The bank (in units of the window's size) selected into a PRG window.
    pub fn prg_bank(&self, window: PrgWindow) -> u16 {
        self.prg_pages[window.first_page()] / window.page_count() as u16
    }

    pub fn chr_bank(&self, window: ChrWindow) -> u16 {
        self.chr_pages[window.first_page()] / window.page_count() as u16
    }

    pub fn prg_page(&self, index: usize) -> u16 {
        self.prg_pages[index]
    }

    pub fn chr_page(&self, index: usize) -> u16 {
        self.chr_pages[index]
    }

    pub fn chr_source(&self) -> ChrSource {
        self.chr_source
    }

    pub fn name_table_mirroring(&self) -> NameTableMirroring {
        self.name_table_mirroring
    }

    // The bank must already be wrapped to the available storage.
    pub(super) fn select_prg(&mut self, window: PrgWindow, bank: u16) {
        let page_count = window.page_count();
        let first_page = bank * page_count as u16;
        for i in 0..page_count {
            self.prg_pages[window.first_page() + i] = first_page + i as u16;
        }
    }

    pub(super) fn select_chr(&mut self, window: ChrWindow, bank: u16, source: ChrSource) {
        let page_count = window.page_count();
        let first_page = bank * page_count as u16;
        for i in 0..page_count {
            self.chr_pages[window.first_page() + i] = first_page + i as u16;
        }

        self.chr_source = source;
    }

    pub(super) fn set_name_table_mirroring(&mut self, mirroring: NameTableMirroring) {
        self.name_table_mirroring = mirroring;
    }
}

impl fmt::Display for BankState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PRG: {:?}, CHR ({:?}): {:?}, Mirroring: {}",
            self.prg_pages, self.chr_source, self.chr_pages, self.name_table_mirroring)
    }
}
