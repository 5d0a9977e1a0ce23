use crate::mapper::*;

// Color Dreams Rumblestation 15-in-1
// Outer banks at 0x6000, inner banks at 0x8000.
#[derive(Default)]
pub struct Rumblestation {
    prg_bank: u8,
    chr_bank: u8,
}

impl Rumblestation {
    fn update_banks(&self, bus: &mut dyn Bus) {
        bus.set_prg_32k(self.prg_bank.into());
        bus.set_chr_8k(self.chr_bank.into(), ChrSource::Rom);
    }
}

impl Mapper for Rumblestation {
    fn reset(&mut self, bus: &mut dyn Bus) {
        start_like_nrom(bus);
        self.prg_bank = 0;
        self.chr_bank = 0;
    }

    fn write_mid(&mut self, bus: &mut dyn Bus, _offset: u16, value: u8) {
        let (chr_high, prg_high) = splitbits_named!(value, "cccc pppp");
        self.prg_bank = (self.prg_bank & 0b0000_0001) | (prg_high << 1);
        self.chr_bank = (self.chr_bank & 0b0000_0111) | (chr_high << 3);
        self.update_banks(bus);
    }

    fn write_high(&mut self, bus: &mut dyn Bus, _offset: u16, value: u8) {
        let (chr_low, prg_low) = splitbits_named!(min=u8, value, ".ccc ...p");
        self.prg_bank = (self.prg_bank & !0b0000_0001) | prg_low;
        self.chr_bank = (self.chr_bank & !0b0000_0111) | chr_low;
        self.update_banks(bus);
    }

    fn has_bus_conflicts(&self) -> HasBusConflicts {
        HasBusConflicts::Yes
    }

    fn state_fields(&mut self) -> Vec<StateField<'_>> {
        vec![
            StateField::u8("prg", &mut self.prg_bank),
            StateField::u8("chr", &mut self.chr_bank),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cartridge::cartridge::test_data;

    #[test]
    fn outer_and_inner_bits_combine() {
        let mut cartridge = test_data::cartridge(1024, 256);
        let mut board = Rumblestation::default();
        board.reset(&mut cartridge);

        board.write_mid(&mut cartridge, 0x0000, 0x23);
        assert_eq!(cartridge.banks().prg_bank(PrgWindow::Whole), 6);
        assert_eq!(cartridge.banks().chr_bank(ChrWindow::Whole), 16);

        board.write_high(&mut cartridge, 0x0000, 0x51);
        assert_eq!(cartridge.banks().prg_bank(PrgWindow::Whole), 7);
        assert_eq!(cartridge.banks().chr_bank(ChrWindow::Whole), 21);
    }
}
