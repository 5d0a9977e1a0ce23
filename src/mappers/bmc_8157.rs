use crate::mapper::*;

const MIRRORINGS: [NameTableMirroring; 2] = [
    NameTableMirroring::Vertical,
    NameTableMirroring::Horizontal,
];

// BMC-8157 (4-in-1 1993 CK-001)
// Board documentation and dumps disagree on bits 7 and 9, and on whether mirroring is wired up.
pub struct Bmc8157 {
    jumper_mode: bool,
    // Solder pad that selects between the 4-in-1 menu (1) and the larger menu (0).
    jumper: u16,
}

impl Default for Bmc8157 {
    fn default() -> Self {
        Self { jumper_mode: false, jumper: 1 }
    }
}

impl Mapper for Bmc8157 {
    fn reset(&mut self, bus: &mut dyn Bus) {
        bus.set_prg_16k(0, 0);
        bus.set_chr_8k(0, ChrSource::Ram);
        self.jumper_mode = false;
    }

    fn write_high(&mut self, bus: &mut dyn Bus, offset: u16, _value: u8) {
        let mut bank = (offset >> 2) & 0x1F;
        bus.set_prg_bank(PrgWindow::First16K, bank);
        if offset & 0x200 != 0 {
            bank |= 0b111;
        } else if offset & 0x80 != 0 {
            bank &= !0b111;
        }

        bus.set_prg_bank(PrgWindow::Last16K, bank);
        self.jumper_mode = offset & 0x100 != 0;
        bus.set_name_table_mirroring(MIRRORINGS[usize::from((offset >> 1) & 1)]);
    }

    fn read_high(&self, bus: &dyn Bus, offset: u16) -> ReadResult {
        let offset = if self.jumper_mode { (offset & !1) | self.jumper } else { offset };
        ReadResult::full(bus.peek_prg(offset))
    }

    fn state_fields(&mut self) -> Vec<StateField<'_>> {
        vec![StateField::bool("latch", &mut self.jumper_mode)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cartridge::cartridge::test_data;

    #[test]
    fn unrom_mode_as_documented() {
        let mut cartridge = test_data::cartridge(512, 0);
        let mut board = Bmc8157::default();
        board.reset(&mut cartridge);

        board.write_high(&mut cartridge, 0x0200 | (3 << 2), 0);
        assert_eq!(cartridge.banks().prg_bank(PrgWindow::First16K), 3);
        assert_eq!(cartridge.banks().prg_bank(PrgWindow::Last16K), 7);

        board.write_high(&mut cartridge, 0x0080 | (0xB << 2), 0);
        assert_eq!(cartridge.banks().prg_bank(PrgWindow::First16K), 0xB);
        assert_eq!(cartridge.banks().prg_bank(PrgWindow::Last16K), 0x8);
    }

    #[test]
    fn jumper_replaces_address_bit_zero() {
        let prg_rom: Vec<u8> = (0..0x8000).map(|i| (i & 0xFF) as u8).collect();
        let mut cartridge = crate::cartridge::cartridge::Cartridge::new(
            "jumper", prg_rom, Vec::new(), NameTableMirroring::Vertical).unwrap();
        let mut board = Bmc8157::default();
        board.reset(&mut cartridge);

        assert_eq!(board.read_high(&cartridge, 0x0010), ReadResult::full(0x10));
        board.write_high(&mut cartridge, 0x0100, 0);
        assert_eq!(board.read_high(&cartridge, 0x0010), ReadResult::full(0x11));
    }
}
