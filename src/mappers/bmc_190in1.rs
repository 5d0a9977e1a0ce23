use crate::mapper::*;
use crate::mappers::sgun20in1::SuperGun20In1;

const MIRRORINGS: [NameTableMirroring; 2] = [
    NameTableMirroring::Vertical,
    NameTableMirroring::Horizontal,
];

// BMC-190IN1 (Golden 190-in-1)
// A Super Gun 20-in-1 board with switchable mirroring.
#[derive(Default)]
pub struct Golden190In1 {
    super_gun: SuperGun20In1,
}

impl Mapper for Golden190In1 {
    fn reset(&mut self, bus: &mut dyn Bus) {
        self.super_gun.reset(bus);
    }

    fn write_high(&mut self, bus: &mut dyn Bus, offset: u16, value: u8) {
        self.super_gun.select_game(bus, offset);
        bus.set_name_table_mirroring(MIRRORINGS[usize::from(value & 1)]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cartridge::cartridge::test_data;

    #[test]
    fn mirroring_follows_data_even_outside_decoded_range() {
        let mut cartridge = test_data::cartridge(512, 256);
        let mut board = Golden190In1::default();
        board.reset(&mut cartridge);

        board.write_high(&mut cartridge, 0x7014, 1);
        assert_eq!(cartridge.banks().prg_bank(PrgWindow::First16K), 5);
        assert_eq!(cartridge.banks().prg_bank(PrgWindow::Last16K), 5);
        assert_eq!(cartridge.banks().chr_bank(ChrWindow::Whole), 5);
        assert_eq!(cartridge.banks().name_table_mirroring(), NameTableMirroring::Horizontal);

        board.write_high(&mut cartridge, 0x6018, 0);
        assert_eq!(cartridge.banks().prg_bank(PrgWindow::First16K), 5);
        assert_eq!(cartridge.banks().prg_bank(PrgWindow::Last16K), 5);
        assert_eq!(cartridge.banks().chr_bank(ChrWindow::Whole), 5);
        assert_eq!(cartridge.banks().name_table_mirroring(), NameTableMirroring::Vertical);
    }
}
