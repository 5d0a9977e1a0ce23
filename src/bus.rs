use crate::memory::name_table_mirroring::NameTableMirroring;
use crate::util::unit::KIBIBYTE;

// A region of CPU address space (0x8000-0xFFFF) that a bank of PRG ROM can be switched into.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum PrgWindow {
    // 0x8000-0xFFFF
    Whole,
    // 0x8000-0xBFFF
    First16K,
    // 0xC000-0xFFFF
    Last16K,
    // 8KiB at 0x8000 + n * 0x2000
    Quarter(u8),
}

impl PrgWindow {
    pub fn size(self) -> u32 {
        match self {
            PrgWindow::Whole => 32 * KIBIBYTE,
            PrgWindow::First16K | PrgWindow::Last16K => 16 * KIBIBYTE,
            PrgWindow::Quarter(_) => 8 * KIBIBYTE,
        }
    }

    // Index of the first 8KiB page that this window covers.
    pub fn first_page(self) -> usize {
        match self {
            PrgWindow::Whole | PrgWindow::First16K => 0,
            PrgWindow::Last16K => 2,
            PrgWindow::Quarter(n) => usize::from(n & 0b11),
        }
    }

    pub fn page_count(self) -> usize {
        (self.size() / (8 * KIBIBYTE)) as usize
    }
}

// A region of PPU pattern table space (0x0000-0x1FFF) that a bank of CHR can be switched into.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum ChrWindow {
    // 0x0000-0x1FFF
    Whole,
    // 0x0000-0x0FFF
    First4K,
    // 0x1000-0x1FFF
    Last4K,
}

impl ChrWindow {
    pub fn size(self) -> u32 {
        match self {
            ChrWindow::Whole => 8 * KIBIBYTE,
            ChrWindow::First4K | ChrWindow::Last4K => 4 * KIBIBYTE,
        }
    }

    // Index of the first 1KiB page that this window covers.
    pub fn first_page(self) -> usize {
        match self {
            ChrWindow::Whole | ChrWindow::First4K => 0,
            ChrWindow::Last4K => 4,
        }
    }

    pub fn page_count(self) -> usize {
        (self.size() / KIBIBYTE) as usize
    }
}

#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum ChrSource {
    Rom,
    Ram,
}

// The host side of a cartridge: the bank switching hardware that a board's latches drive.
// Implementations must wrap every bank number to the storage that actually exists.
pub trait Bus {
    fn set_prg_bank(&mut self, window: PrgWindow, bank: u16);
    fn set_chr_bank(&mut self, window: ChrWindow, bank: u16, source: ChrSource);
    fn set_name_table_mirroring(&mut self, mirroring: NameTableMirroring);

    // The PRG ROM byte currently visible at 0x8000 + offset.
    fn peek_prg(&self, offset: u16) -> u8;
    // A PRG ROM byte by absolute index, bypassing the bank registers.
    fn peek_prg_rom(&self, index: u32) -> u8;

    fn prg_rom_16k_bank_count(&self) -> u16;
    fn chr_rom_present(&self) -> bool;

    fn default_chr_source(&self) -> ChrSource {
        if self.chr_rom_present() { ChrSource::Rom } else { ChrSource::Ram }
    }

    fn last_prg_16k_bank(&self) -> u16 {
        self.prg_rom_16k_bank_count().saturating_sub(1)
    }

    fn set_prg_32k(&mut self, bank: u16) {
        self.set_prg_bank(PrgWindow::Whole, bank);
    }

    fn set_prg_16k(&mut self, low_bank: u16, high_bank: u16) {
        self.set_prg_bank(PrgWindow::First16K, low_bank);
        self.set_prg_bank(PrgWindow::Last16K, high_bank);
    }

    fn set_prg_8k(&mut self, quarter: u8, bank: u16) {
        self.set_prg_bank(PrgWindow::Quarter(quarter), bank);
    }

    fn set_chr_8k(&mut self, bank: u16, source: ChrSource) {
        self.set_chr_bank(ChrWindow::Whole, bank, source);
    }

    fn set_chr_4k(&mut self, window: ChrWindow, bank: u16, source: ChrSource) {
        self.set_chr_bank(window, bank, source);
    }
}
