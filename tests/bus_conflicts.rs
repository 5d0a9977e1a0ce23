extern crate bankflux;

use bankflux::bus::{ChrWindow, PrgWindow};
use bankflux::cartridge::cartridge::Cartridge;
use bankflux::mapper_list::Board;
use bankflux::memory::name_table_mirroring::NameTableMirroring;
use bankflux::slot::CartridgeSlot;

// 512KiB PRG and 64KiB CHR where every 8KiB PRG page holds its own page number.
// A latch write at 0x8000-0xFFFF sees the written value ANDed with that page number.
fn slot(board: Board) -> CartridgeSlot {
    let prg_rom = (0..512 * 1024).map(|i| (i / 0x2000) as u8).collect();
    let chr_rom = (0..64 * 1024).map(|i| (i / 0x400) as u8).collect();
    let cartridge = Cartridge::new("bus conflicts", prg_rom, chr_rom, NameTableMirroring::Vertical).unwrap();
    CartridgeSlot::insert(board, cartridge)
}

#[test]
fn caltron_6in1_inner_chr_bank() {
    let mut slot = slot(Board::Caltron6In1);
    // PRG 32KiB bank 4 (pages 16-19), inner CHR enabled.
    slot.cpu_write(0x6004, 0x00);

    // Page 16 is 0b1_0000.
    slot.cpu_write(0x8000, 0x03);
    assert_eq!(slot.cartridge().banks().chr_bank(ChrWindow::Whole), 0);

    // Page 19 is 0b1_0011.
    slot.cpu_write(0xE000, 0x03);
    assert_eq!(slot.cartridge().banks().chr_bank(ChrWindow::Whole), 3);
}

#[test]
fn rumblestation_inner_latch() {
    let mut slot = slot(Board::Rumblestation);
    // Outer PRG bank 2 (pages 8-11).
    slot.cpu_write(0x6000, 0x01);
    assert_eq!(slot.cartridge().banks().prg_bank(PrgWindow::Whole), 2);

    // Page 11 is 0b1011, so CHR bits 4-6 are masked off and PRG bit 0 survives.
    slot.cpu_write(0xE000, 0x71);
    assert_eq!(slot.cartridge().banks().prg_bank(PrgWindow::Whole), 3);
    assert_eq!(slot.cartridge().banks().chr_bank(ChrWindow::Whole), 0);
}

#[test]
fn kn42_inner_bank() {
    let mut slot = slot(Board::Kn42);
    // After the first reset the upper 256KiB is selected; page 0x3E sits at 0xC000.
    slot.cpu_write(0xC000, 0b0001_0111);
    assert_eq!(slot.cartridge().banks().prg_bank(PrgWindow::First16K), 0x10 | 0b1100 | 1);
}

#[test]
fn k3046_inner_bank() {
    let mut slot = slot(Board::K3046);
    // Page 14 (0b1110) sits at 0xC000 after reset.
    slot.cpu_write(0xC000, 0x1F);
    assert_eq!(slot.cartridge().banks().prg_bank(PrgWindow::First16K), 14);
    assert_eq!(slot.cartridge().banks().prg_bank(PrgWindow::Last16K), 15);
}

#[test]
fn boards_without_conflicts_take_the_full_value() {
    let mut slot = slot(Board::Bmc35In1);
    // Page 0 is at 0x8000, but nothing is ANDed.
    slot.cpu_write(0x8000, 0b0000_1110);
    assert_eq!(slot.cartridge().banks().prg_bank(PrgWindow::First16K), 3);
    assert_eq!(slot.cartridge().banks().chr_bank(ChrWindow::Whole), 2);
}
