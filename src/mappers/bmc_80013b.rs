use crate::mapper::*;

const MIRRORINGS: [NameTableMirroring; 2] = [
    NameTableMirroring::Vertical,
    NameTableMirroring::Horizontal,
];

// BMC-80013-B (Cartridge Story I, II and III)
pub struct Bmc80013b {
    inner: u8,
    outer: u8,
    // Selects the second 2MiB half for the first 16KiB window.
    high_half: u8,
}

impl Default for Bmc80013b {
    fn default() -> Self {
        Self { inner: 0, outer: 0, high_half: 0x80 }
    }
}

impl Bmc80013b {
    fn update_prg(&self, bus: &mut dyn Bus) {
        bus.set_prg_16k(
            u16::from(self.high_half | (self.outer & 0x70) | self.inner),
            u16::from(self.outer),
        );
    }
}

impl Mapper for Bmc80013b {
    fn reset(&mut self, bus: &mut dyn Bus) {
        bus.set_chr_8k(0, ChrSource::Ram);
        self.high_half = 0x80;
        self.inner = 0;
        self.outer = 0;
        self.update_prg(bus);
    }

    fn write_high(&mut self, bus: &mut dyn Bus, offset: u16, value: u8) {
        if offset & 0x6000 == 0 {
            self.inner = value & 0xF;
            bus.set_name_table_mirroring(MIRRORINGS[usize::from((value >> 4) & 1)]);
        } else {
            self.outer = value & 0x7F;
            self.high_half = if offset & 0x4000 == 0 { 0x80 } else { 0x00 };
        }

        self.update_prg(bus);
    }

    fn state_fields(&mut self) -> Vec<StateField<'_>> {
        vec![
            StateField::u8("reg0", &mut self.inner),
            StateField::u8("reg1", &mut self.outer),
            StateField::u8("latch", &mut self.high_half),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cartridge::cartridge::test_data;

    #[test]
    fn outer_register_address_picks_prg_half() {
        let mut cartridge = test_data::cartridge(4096, 0);
        let mut board = Bmc80013b::default();
        board.reset(&mut cartridge);
        assert_eq!(cartridge.banks().prg_bank(PrgWindow::First16K), 128);
        assert_eq!(cartridge.banks().prg_bank(PrgWindow::Last16K), 0);

        board.write_high(&mut cartridge, 0x0000, 0x15);
        assert_eq!(cartridge.banks().prg_bank(PrgWindow::First16K), 133);
        assert_eq!(cartridge.banks().prg_bank(PrgWindow::Last16K), 0);
        assert_eq!(cartridge.banks().name_table_mirroring(), NameTableMirroring::Horizontal);

        board.write_high(&mut cartridge, 0x2000, 0x7A);
        assert_eq!(cartridge.banks().prg_bank(PrgWindow::First16K), 245);
        assert_eq!(cartridge.banks().prg_bank(PrgWindow::Last16K), 122);

        // Writes at 0xC000-0xFFFF drop the first window into the lower 2MiB.
        board.write_high(&mut cartridge, 0x4000, 0x12);
        assert_eq!(cartridge.banks().prg_bank(PrgWindow::First16K), 21);
        assert_eq!(cartridge.banks().prg_bank(PrgWindow::Last16K), 18);
    }
}
