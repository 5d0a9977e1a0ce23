use crate::mapper::*;

const MIRRORINGS: [NameTableMirroring; 2] = [
    NameTableMirroring::Vertical,
    NameTableMirroring::Horizontal,
];

// BMC-WS (Super 40-in-1)
#[derive(Default)]
pub struct Ws {
    locked: u8,
}

impl Mapper for Ws {
    fn reset(&mut self, bus: &mut dyn Bus) {
        start_like_nrom(bus);
        self.locked = 0;
    }

    fn write_mid(&mut self, bus: &mut dyn Bus, offset: u16, value: u8) {
        if offset >= 0x1000 || self.locked != 0 {
            return;
        }

        if offset & 1 == 0 {
            self.locked = value & 0x20;
            bus.set_name_table_mirroring(MIRRORINGS[usize::from((value >> 4) & 1)]);
            let nrom_256 = u16::from((!value & 0b1000) >> 3);
            let bank = u16::from(value);
            bus.set_prg_16k(bank & !nrom_256, bank | nrom_256);
        } else {
            bus.set_chr_8k(value.into(), ChrSource::Rom);
        }
    }

    fn state_fields(&mut self) -> Vec<StateField<'_>> {
        vec![StateField::u8("latch", &mut self.locked)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cartridge::cartridge::test_data;

    #[test]
    fn lock_blocks_further_writes() {
        let mut cartridge = test_data::cartridge(512, 256);
        let mut board = Ws::default();
        board.reset(&mut cartridge);

        board.write_mid(&mut cartridge, 1, 0x07);
        board.write_mid(&mut cartridge, 0, 0b0010_0100);
        assert_eq!(cartridge.banks().prg_bank(PrgWindow::First16K), 4);
        assert_eq!(cartridge.banks().prg_bank(PrgWindow::Last16K), 5);
        assert_eq!(cartridge.banks().chr_bank(ChrWindow::Whole), 7);

        board.write_mid(&mut cartridge, 1, 0x03);
        board.write_mid(&mut cartridge, 0, 0b0000_1010);
        assert_eq!(cartridge.banks().chr_bank(ChrWindow::Whole), 7);
        assert_eq!(cartridge.banks().prg_bank(PrgWindow::First16K), 4);

        board.reset(&mut cartridge);
        board.write_mid(&mut cartridge, 0, 0b0000_1010);
        assert_eq!(cartridge.banks().prg_bank(PrgWindow::First16K), 10);
        assert_eq!(cartridge.banks().prg_bank(PrgWindow::Last16K), 10);
    }

    #[test]
    fn upper_half_of_mid_space_is_ignored() {
        let mut cartridge = test_data::cartridge(512, 256);
        let mut board = Ws::default();
        board.reset(&mut cartridge);
        board.write_mid(&mut cartridge, 0x1001, 0x07);
        assert_eq!(cartridge.banks().chr_bank(ChrWindow::Whole), 0);
    }
}
