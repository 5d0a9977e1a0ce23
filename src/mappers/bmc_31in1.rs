use crate::mapper::*;

const MIRRORINGS: [NameTableMirroring; 2] = [
    NameTableMirroring::Vertical,
    NameTableMirroring::Horizontal,
];

// BMC-31IN1
// Game 0 is the 32KiB menu, every other game is NROM-128.
pub struct Bmc31In1;

impl Mapper for Bmc31In1 {
    fn write_high(&mut self, bus: &mut dyn Bus, offset: u16, _value: u8) {
        bus.set_name_table_mirroring(MIRRORINGS[usize::from((offset >> 5) & 1)]);
        let game = offset & 0x1F;
        if game & 0x1E == 0 {
            bus.set_prg_32k(0);
        } else {
            bus.set_prg_16k(game, game);
        }

        bus.set_chr_8k(game, ChrSource::Rom);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cartridge::cartridge::test_data;

    #[test]
    fn games_zero_and_one_share_the_menu() {
        let mut cartridge = test_data::cartridge(512, 256);
        let mut board = Bmc31In1;

        board.write_high(&mut cartridge, 0x0001, 0);
        assert_eq!(cartridge.banks().prg_bank(PrgWindow::Whole), 0);
        assert_eq!(cartridge.banks().chr_bank(ChrWindow::Whole), 1);

        board.write_high(&mut cartridge, 0x0025, 0);
        assert_eq!(cartridge.banks().prg_bank(PrgWindow::First16K), 5);
        assert_eq!(cartridge.banks().prg_bank(PrgWindow::Last16K), 5);
        assert_eq!(cartridge.banks().name_table_mirroring(), NameTableMirroring::Horizontal);
    }
}
