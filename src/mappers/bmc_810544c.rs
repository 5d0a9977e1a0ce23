use crate::mapper::*;

const MIRRORINGS: [NameTableMirroring; 2] = [
    NameTableMirroring::Vertical,
    NameTableMirroring::Horizontal,
];

// BMC-810544-C-A1 (200-in-1 Elfland)
pub struct Bmc810544c;

impl Mapper for Bmc810544c {
    fn reset(&mut self, bus: &mut dyn Bus) {
        bus.set_prg_16k(0, 0);
        bus.set_chr_8k(0, ChrSource::Rom);
    }

    fn write_high(&mut self, bus: &mut dyn Bus, offset: u16, _value: u8) {
        let fields = splitbits!(min=u16, offset, ".bbb bbbb bwsh cccc");
        if fields.w == 1 {
            bus.set_prg_32k(fields.b);
        } else {
            let bank = (fields.b << 1) | fields.s;
            bus.set_prg_16k(bank, bank);
        }

        bus.set_name_table_mirroring(MIRRORINGS[usize::from(fields.h)]);
        bus.set_chr_8k(fields.c, ChrSource::Rom);
    }
}
