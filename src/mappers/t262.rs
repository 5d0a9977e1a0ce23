use crate::mapper::*;

const MIRRORINGS: [NameTableMirroring; 2] = [
    NameTableMirroring::Vertical,
    NameTableMirroring::Horizontal,
];

// T-262
// The first write (other than to 0x8000) picks the outer bank and locks it in.
#[derive(Default)]
pub struct T262 {
    prg_bank: u8,
    outer_locked: bool,
}

impl Mapper for T262 {
    fn reset(&mut self, bus: &mut dyn Bus) {
        bus.set_prg_16k(0, 7);
        let source = bus.default_chr_source();
        bus.set_chr_8k(0, source);
        self.prg_bank = 0;
        self.outer_locked = false;
    }

    fn write_high(&mut self, bus: &mut dyn Bus, offset: u16, value: u8) {
        if self.outer_locked || offset == 0 {
            self.prg_bank = (self.prg_bank & 0x38) | (value & 0b111);
            bus.set_prg_bank(PrgWindow::First16K, self.prg_bank.into());
            return;
        }

        self.outer_locked = true;
        bus.set_name_table_mirroring(MIRRORINGS[usize::from(value & 0b10 != 0)]);
        let outer_bank = (((offset >> 3) & 0x20) | ((offset >> 2) & 0x18)) as u8;
        self.prg_bank = outer_bank | (self.prg_bank & 0b111);
        bus.set_prg_16k(self.prg_bank.into(), u16::from(outer_bank | 0b111));
    }

    fn state_fields(&mut self) -> Vec<StateField<'_>> {
        vec![
            StateField::u8("latch1", &mut self.prg_bank),
            StateField::bool("latch2", &mut self.outer_locked),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cartridge::cartridge::test_data;

    #[test]
    fn outer_bank_locks_after_first_write() {
        let mut cartridge = test_data::cartridge(1024, 0);
        let mut board = T262::default();
        board.reset(&mut cartridge);

        // Outer bits come from offset bits 8 (0x20) and 5..6 (0x18).
        board.write_high(&mut cartridge, 0x0160, 0b10);
        assert_eq!(cartridge.banks().prg_bank(PrgWindow::First16K), 0x38);
        assert_eq!(cartridge.banks().prg_bank(PrgWindow::Last16K), 0x3F);
        assert_eq!(cartridge.banks().name_table_mirroring(), NameTableMirroring::Horizontal);

        board.write_high(&mut cartridge, 0x0000, 0x05);
        assert_eq!(cartridge.banks().prg_bank(PrgWindow::First16K), 0x3D);

        // Locked: the outer bank doesn't move any more.
        board.write_high(&mut cartridge, 0x0020, 0x02);
        assert_eq!(cartridge.banks().prg_bank(PrgWindow::First16K), 0x3A);
        assert_eq!(cartridge.banks().prg_bank(PrgWindow::Last16K), 0x3F);
    }
}
