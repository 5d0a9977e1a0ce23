use crate::mapper::*;

const MIRRORINGS: [NameTableMirroring; 2] = [
    NameTableMirroring::Vertical,
    NameTableMirroring::Horizontal,
];

// BMC-SUPER-700IN1
pub struct Super700In1;

impl Mapper for Super700In1 {
    fn write_high(&mut self, bus: &mut dyn Bus, offset: u16, value: u8) {
        let fields = splitbits!(min=u16, offset, "..pp pppp .hsc cccc");
        bus.set_chr_8k((fields.c << 2) | u16::from(value & 0b11), ChrSource::Rom);

        let bank = (fields.h << 6) | fields.p;
        if fields.s == 1 {
            bus.set_prg_16k(bank, bank);
        } else {
            bus.set_prg_32k(bank >> 1);
        }

        bus.set_name_table_mirroring(MIRRORINGS[usize::from(value >> 7)]);
    }
}
