use crate::mapper::*;

const MIRRORINGS: [NameTableMirroring; 2] = [
    NameTableMirroring::Vertical,
    NameTableMirroring::Horizontal,
];

// BMC-150IN1
pub struct Bmc150In1;

impl Mapper for Bmc150In1 {
    fn reset(&mut self, bus: &mut dyn Bus) {
        bus.set_prg_16k(0, 0);
        let source = bus.default_chr_source();
        bus.set_chr_8k(0, source);
    }

    fn write_high(&mut self, bus: &mut dyn Bus, offset: u16, _value: u8) {
        let bank = (offset >> 1) & 0b111;
        // Games 6 and 7 are 32KiB.
        let high_bank = if bank & 0b110 == 0b110 { bank + 1 } else { bank };
        bus.set_prg_16k(bank, high_bank);
        bus.set_chr_8k(bank, ChrSource::Rom);
        bus.set_name_table_mirroring(MIRRORINGS[usize::from(offset & 1)]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cartridge::cartridge::test_data;

    #[test]
    fn last_two_games_are_32k() {
        let mut cartridge = test_data::cartridge(128, 64);
        let mut board = Bmc150In1;
        board.reset(&mut cartridge);

        board.write_high(&mut cartridge, 0b1101, 0);
        assert_eq!(cartridge.banks().prg_bank(PrgWindow::First16K), 6);
        assert_eq!(cartridge.banks().prg_bank(PrgWindow::Last16K), 7);
        assert_eq!(cartridge.banks().chr_bank(ChrWindow::Whole), 6);
        assert_eq!(cartridge.banks().name_table_mirroring(), NameTableMirroring::Horizontal);

        board.write_high(&mut cartridge, 0b0100, 0);
        assert_eq!(cartridge.banks().prg_bank(PrgWindow::First16K), 2);
        assert_eq!(cartridge.banks().prg_bank(PrgWindow::Last16K), 2);
        assert_eq!(cartridge.banks().chr_bank(ChrWindow::Whole), 2);
        assert_eq!(cartridge.banks().name_table_mirroring(), NameTableMirroring::Vertical);
    }
}
