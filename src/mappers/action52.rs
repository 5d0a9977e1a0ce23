use crate::mapper::*;

const MIRRORINGS: [NameTableMirroring; 2] = [
    NameTableMirroring::Vertical,
    NameTableMirroring::Horizontal,
];

// Active Enterprises Action 52, Cheetahmen II
pub struct Action52;

impl Mapper for Action52 {
    fn reset(&mut self, bus: &mut dyn Bus) {
        bus.set_prg_32k(0);
        let source = bus.default_chr_source();
        bus.set_chr_8k(0, source);
    }

    fn write_high(&mut self, bus: &mut dyn Bus, offset: u16, value: u8) {
        let fields = splitbits!(offset, "..mp pppp pps. cccc");
        bus.set_name_table_mirroring(MIRRORINGS[usize::from(fields.m)]);
        bus.set_chr_8k(u16::from(fields.c) << 2 | u16::from(value & 0b11), ChrSource::Rom);

        let prg_bank = u16::from(fields.p);
        if fields.s {
            bus.set_prg_16k(prg_bank, prg_bank);
        } else {
            bus.set_prg_32k(prg_bank >> 1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cartridge::cartridge::test_data;

    #[test]
    fn reset_without_chr_rom_uses_chr_ram() {
        let mut cartridge = test_data::cartridge(512, 0);
        Action52.reset(&mut cartridge);
        assert_eq!(cartridge.banks().chr_source(), ChrSource::Ram);

        let mut cartridge = test_data::cartridge(512, 64);
        Action52.reset(&mut cartridge);
        assert_eq!(cartridge.banks().chr_source(), ChrSource::Rom);
    }

    #[test]
    fn sixteen_k_mode_mirrors_one_bank() {
        let mut cartridge = test_data::cartridge(2048, 512);
        // Mirroring bit, PRG bank 0b101_0101, 16KiB mode, CHR 0b1001.
        Action52.write_high(&mut cartridge, 0b0011_0101_0110_1001, 0b10);
        assert_eq!(cartridge.banks().prg_bank(PrgWindow::First16K), 0b101_0101);
        assert_eq!(cartridge.banks().prg_bank(PrgWindow::Last16K), 0b101_0101);
        assert_eq!(cartridge.banks().chr_bank(ChrWindow::Whole), 0b10_0110);
        assert_eq!(cartridge.banks().name_table_mirroring(), NameTableMirroring::Horizontal);

        Action52.write_high(&mut cartridge, 0b0000_0101_0100_0000, 0);
        assert_eq!(cartridge.banks().prg_bank(PrgWindow::Whole), 0b1010);
        assert_eq!(cartridge.banks().name_table_mirroring(), NameTableMirroring::Vertical);
    }
}
