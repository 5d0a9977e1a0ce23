use crate::mapper::*;

const MIRRORINGS: [NameTableMirroring; 2] = [
    NameTableMirroring::Vertical,
    NameTableMirroring::Horizontal,
];

// BMC-2751 (5-in-1)
pub struct Bmc2751;

impl Mapper for Bmc2751 {
    fn power_on(&mut self, bus: &mut dyn Bus) {
        bus.set_prg_16k(0, 0);
        bus.set_chr_8k(0, ChrSource::Rom);
    }

    // Soft reset keeps the current game.
    fn reset(&mut self, _bus: &mut dyn Bus) {}

    fn write_high(&mut self, bus: &mut dyn Bus, offset: u16, _value: u8) {
        let fields = splitbits!(min=u16, offset, ".... .... mppp ccch");
        bus.set_prg_16k(fields.p & !fields.m, fields.p | fields.m);
        bus.set_chr_8k(fields.c, ChrSource::Rom);
        bus.set_name_table_mirroring(MIRRORINGS[usize::from(fields.h)]);
    }
}
