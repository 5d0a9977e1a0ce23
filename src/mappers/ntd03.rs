use crate::mapper::*;

const MIRRORINGS: [NameTableMirroring; 2] = [
    NameTableMirroring::Vertical,
    NameTableMirroring::Horizontal,
];

// BMC-NTD-03
pub struct Ntd03;

impl Mapper for Ntd03 {
    fn write_high(&mut self, bus: &mut dyn Bus, offset: u16, _value: u8) {
        let fields = splitbits!(min=u16, offset, ".... .mcc sh.. .lll");
        let prg_bank = (offset >> 10) & 0x1E;
        if fields.s == 1 {
            bus.set_prg_16k(prg_bank | fields.h, prg_bank | fields.h);
        } else {
            bus.set_prg_32k(prg_bank >> 1);
        }

        bus.set_name_table_mirroring(MIRRORINGS[usize::from(fields.m)]);
        bus.set_chr_8k((fields.c << 3) | fields.l, ChrSource::Rom);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cartridge::cartridge::test_data;

    #[test]
    fn sixteen_k_and_32k_modes() {
        let mut cartridge = test_data::cartridge(512, 512);
        let mut board = Ntd03;

        board.write_high(&mut cartridge, (3 << 11) | (1 << 10) | (2 << 8) | (1 << 7) | (1 << 6) | 5, 0);
        assert_eq!(cartridge.banks().prg_bank(PrgWindow::First16K), 7);
        assert_eq!(cartridge.banks().prg_bank(PrgWindow::Last16K), 7);
        assert_eq!(cartridge.banks().chr_bank(ChrWindow::Whole), 21);
        assert_eq!(cartridge.banks().name_table_mirroring(), NameTableMirroring::Horizontal);

        board.write_high(&mut cartridge, 3 << 11, 0);
        assert_eq!(cartridge.banks().prg_bank(PrgWindow::Whole), 3);
        assert_eq!(cartridge.banks().chr_bank(ChrWindow::Whole), 0);
        assert_eq!(cartridge.banks().name_table_mirroring(), NameTableMirroring::Vertical);
    }
}
