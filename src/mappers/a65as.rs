use crate::mapper::*;

// A65AS
pub struct A65as;

impl Mapper for A65as {
    fn reset(&mut self, bus: &mut dyn Bus) {
        bus.set_prg_16k(0, 7);
        let source = bus.default_chr_source();
        bus.set_chr_8k(0, source);
        bus.set_name_table_mirroring(NameTableMirroring::Vertical);
    }

    fn write_high(&mut self, bus: &mut dyn Bus, _offset: u16, value: u8) {
        let fields = splitbits!(value, "nso. h...");
        let mirroring = match (fields.n, fields.o, fields.h) {
            (true, true, _) => NameTableMirroring::OneScreenHigh,
            (true, false, _) => NameTableMirroring::OneScreenLow,
            (false, _, true) => NameTableMirroring::Horizontal,
            (false, _, false) => NameTableMirroring::Vertical,
        };
        bus.set_name_table_mirroring(mirroring);

        if fields.s {
            bus.set_prg_32k(u16::from(value >> 1));
        } else {
            let outer_bank = u16::from((value & 0x30) >> 1);
            bus.set_prg_16k(outer_bank | u16::from(value & 0b111), outer_bank | 0b111);
        }
    }
}
