use std::fmt;

use log::info;

use crate::bus::{Bus, ChrSource, ChrWindow, PrgWindow};
use crate::cartridge::bank_state::BankState;
use crate::memory::name_table_mirroring::NameTableMirroring;
use crate::util::unit::KIBIBYTE;

const CHR_RAM_SIZE: u32 = 8 * KIBIBYTE;

// The ROM and RAM chips on a multigame board, plus the bank state that its mapper drives.
#[derive(Clone, Debug)]
pub struct Cartridge {
    name: String,
    prg_rom: Vec<u8>,
    chr_rom: Vec<u8>,
    chr_ram: Vec<u8>,
    banks: BankState,
}

impl Cartridge {
    pub fn new(
        name: &str,
        prg_rom: Vec<u8>,
        chr_rom: Vec<u8>,
        name_table_mirroring: NameTableMirroring,
    ) -> Result<Cartridge, String> {
        if prg_rom.is_empty() || prg_rom.len() % (8 * KIBIBYTE as usize) != 0 {
            return Err(format!(
                "PRG ROM must be a non-empty multiple of 8KiB, but was {} bytes. ROM: {name}", prg_rom.len()));
        }

        if chr_rom.len() % KIBIBYTE as usize != 0 {
            return Err(format!(
                "CHR ROM must be a multiple of 1KiB, but was {} bytes. ROM: {name}", chr_rom.len()));
        }

        let chr_source = if chr_rom.is_empty() { ChrSource::Ram } else { ChrSource::Rom };
        let cartridge = Cartridge {
            name: name.to_string(),
            prg_rom,
            chr_rom,
            chr_ram: vec![0; CHR_RAM_SIZE as usize],
            banks: BankState::new(chr_source, name_table_mirroring),
        };
        info!("Cartridge loaded. {cartridge}");
        Ok(cartridge)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn banks(&self) -> &BankState {
        &self.banks
    }

    pub fn prg_rom_size(&self) -> u32 {
        self.prg_rom.len() as u32
    }

    pub fn chr_rom_size(&self) -> u32 {
        self.chr_rom.len() as u32
    }

    // Pattern table read, 0x0000-0x1FFF.
    pub fn ppu_peek(&self, address: u16) -> u8 {
        let address = usize::from(address & 0x1FFF);
        let page = usize::from(self.banks.chr_page(address / KIBIBYTE as usize));
        let chr = self.chr_memory();
        chr[(page * KIBIBYTE as usize + address % KIBIBYTE as usize) % chr.len()]
    }

    // Pattern table write. Only lands when CHR RAM is selected.
    pub fn ppu_write(&mut self, address: u16, value: u8) {
        if self.chr_is_rom() {
            return;
        }

        let address = usize::from(address & 0x1FFF);
        let page = usize::from(self.banks.chr_page(address / KIBIBYTE as usize));
        let index = (page * KIBIBYTE as usize + address % KIBIBYTE as usize) % self.chr_ram.len();
        self.chr_ram[index] = value;
    }

    fn chr_is_rom(&self) -> bool {
        self.banks.chr_source() == ChrSource::Rom && !self.chr_rom.is_empty()
    }

    fn chr_memory(&self) -> &[u8] {
        if self.chr_is_rom() { &self.chr_rom } else { &self.chr_ram }
    }

    fn prg_bank_count(&self, window: PrgWindow) -> u16 {
        std::cmp::max(1, self.prg_rom.len() as u32 / window.size()) as u16
    }

    fn chr_bank_count(&self, window: ChrWindow, source: ChrSource) -> u16 {
        let size = if source == ChrSource::Rom && !self.chr_rom.is_empty() {
            self.chr_rom.len()
        } else {
            self.chr_ram.len()
        };
        std::cmp::max(1, size as u32 / window.size()) as u16
    }
}

impl Bus for Cartridge {
    fn set_prg_bank(&mut self, window: PrgWindow, bank: u16) {
        let bank = bank % self.prg_bank_count(window);
        self.banks.select_prg(window, bank);
    }

    fn set_chr_bank(&mut self, window: ChrWindow, bank: u16, source: ChrSource) {
        let bank = bank % self.chr_bank_count(window, source);
        self.banks.select_chr(window, bank, source);
    }

    fn set_name_table_mirroring(&mut self, mirroring: NameTableMirroring) {
        self.banks.set_name_table_mirroring(mirroring);
    }

    fn peek_prg(&self, offset: u16) -> u8 {
        let offset = usize::from(offset & 0x7FFF);
        let page = usize::from(self.banks.prg_page(offset / (8 * KIBIBYTE as usize)));
        let index = page * 8 * KIBIBYTE as usize + offset % (8 * KIBIBYTE as usize);
        self.prg_rom[index % self.prg_rom.len()]
    }

    fn peek_prg_rom(&self, index: u32) -> u8 {
        self.prg_rom[index as usize % self.prg_rom.len()]
    }

    fn prg_rom_16k_bank_count(&self) -> u16 {
        (self.prg_rom.len() / (16 * KIBIBYTE as usize)) as u16
    }

    fn chr_rom_present(&self) -> bool {
        !self.chr_rom.is_empty()
    }
}

impl fmt::Display for Cartridge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: PRG ROM: {:4}KiB (CRC32 {:08X}), CHR ROM: {:4}KiB, CHR RAM: {:2}KiB",
            self.name,
            self.prg_rom.len() as u32 / KIBIBYTE,
            crc32fast::hash(&self.prg_rom),
            self.chr_rom.len() as u32 / KIBIBYTE,
            self.chr_ram.len() as u32 / KIBIBYTE,
        )
    }
}

#[cfg(test)]
pub mod test_data {
    use super::*;

    // Every 8KiB PRG page and every 1KiB CHR page is filled with its own page number.
    pub fn cartridge(prg_kib: usize, chr_kib: usize) -> Cartridge {
        let prg_rom = (0..prg_kib * 1024).map(|i| (i / 0x2000) as u8).collect();
        let chr_rom = (0..chr_kib * 1024).map(|i| (i / 0x400) as u8).collect();
        Cartridge::new("test", prg_rom, chr_rom, NameTableMirroring::Horizontal).unwrap()
    }
}
