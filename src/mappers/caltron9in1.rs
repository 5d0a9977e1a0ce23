use crate::mapper::*;

const MIRRORINGS: [NameTableMirroring; 2] = [
    NameTableMirroring::Vertical,
    NameTableMirroring::Horizontal,
];

// Caltron 9-in-1
// Three latches, each selected by the top address nibble: 0x8xxx, 0x9xxx, and 0xAxxx-0xFxxx.
#[derive(Default)]
pub struct Caltron9In1 {
    latches: [u8; 3],
}

impl Mapper for Caltron9In1 {
    fn reset(&mut self, bus: &mut dyn Bus) {
        bus.set_prg_32k(0);
        bus.set_chr_8k(0, ChrSource::Rom);
        self.latches = [0; 3];
    }

    fn write_high(&mut self, bus: &mut dyn Bus, offset: u16, _value: u8) {
        let nibble = usize::from((offset >> 12) & 0b111);
        self.latches[std::cmp::min(nibble, 2)] = (offset & 0x7F) as u8;

        let [outer, mode, inner] = self.latches;
        if mode & 0b10 != 0 {
            // UNROM
            let outer_bank = u16::from((outer >> 2) & !0b11);
            let inner_bank = u16::from((inner >> 2) & 0b11);
            bus.set_prg_16k(outer_bank | inner_bank, outer_bank | 0b11);
        } else {
            bus.set_prg_32k(u16::from(outer >> 3));
        }

        if nibble == 0 {
            bus.set_name_table_mirroring(MIRRORINGS[usize::from(outer & 1)]);
        } else {
            let chr_bank = ((mode >> 1) & 0x1C) | (inner & 0b11);
            bus.set_chr_8k(chr_bank.into(), ChrSource::Rom);
        }
    }

    fn state_fields(&mut self) -> Vec<StateField<'_>> {
        vec![StateField::bytes("latch", &mut self.latches)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cartridge::cartridge::test_data;

    #[test]
    fn three_latches_build_unrom_banks() {
        let mut cartridge = test_data::cartridge(2048, 128);
        let mut board = Caltron9In1::default();
        board.reset(&mut cartridge);

        board.write_high(&mut cartridge, 0x0049, 0);
        assert_eq!(cartridge.banks().prg_bank(PrgWindow::Whole), 9);
        assert_eq!(cartridge.banks().name_table_mirroring(), NameTableMirroring::Horizontal);

        board.write_high(&mut cartridge, 0x101A, 0);
        assert_eq!(cartridge.banks().prg_bank(PrgWindow::First16K), 16);
        assert_eq!(cartridge.banks().prg_bank(PrgWindow::Last16K), 19);
        assert_eq!(cartridge.banks().chr_bank(ChrWindow::Whole), 12);

        board.write_high(&mut cartridge, 0x500D, 0);
        assert_eq!(cartridge.banks().prg_bank(PrgWindow::First16K), 19);
        assert_eq!(cartridge.banks().prg_bank(PrgWindow::Last16K), 19);
        assert_eq!(cartridge.banks().chr_bank(ChrWindow::Whole), 13);
    }
}
