use crate::mapper::*;

// Novel Diamond 999999-in-1
pub struct Novel1;

impl Mapper for Novel1 {
    fn reset(&mut self, bus: &mut dyn Bus) {
        start_like_nrom(bus);
        bus.set_name_table_mirroring(NameTableMirroring::Vertical);
    }

    fn write_high(&mut self, bus: &mut dyn Bus, offset: u16, _value: u8) {
        bus.set_prg_32k(offset & 0b011);
        bus.set_chr_8k(offset & 0b111, ChrSource::Rom);
    }
}
