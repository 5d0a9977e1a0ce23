use crate::mapper::*;

// BMC-SA005-A (16-in-1)
pub struct Sa005a;

impl Mapper for Sa005a {
    fn reset(&mut self, bus: &mut dyn Bus) {
        bus.set_prg_16k(0, 0);
        bus.set_chr_8k(0, ChrSource::Rom);
    }

    fn write_high(&mut self, bus: &mut dyn Bus, offset: u16, _value: u8) {
        let bank = offset & 0xF;
        bus.set_prg_16k(bank, bank);
        bus.set_chr_8k(bank, ChrSource::Rom);
        // Reversed relative to most boards.
        let mirroring = if offset & 0b1000 == 0 {
            NameTableMirroring::Horizontal
        } else {
            NameTableMirroring::Vertical
        };
        bus.set_name_table_mirroring(mirroring);
    }
}
