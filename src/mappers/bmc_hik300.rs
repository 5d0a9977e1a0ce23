use crate::mapper::*;

const MIRRORINGS: [NameTableMirroring; 2] = [
    NameTableMirroring::Vertical,
    NameTableMirroring::Horizontal,
];

// BMC-SUPERHIK_300IN1 (100000-in-1, Super HIK 300-in-1, 1997-in-1)
pub struct Hik300;

impl Mapper for Hik300 {
    fn reset(&mut self, bus: &mut dyn Bus) {
        bus.set_prg_16k(0, 0);
        bus.set_chr_8k(0, ChrSource::Rom);
    }

    fn write_high(&mut self, bus: &mut dyn Bus, offset: u16, _value: u8) {
        let fields = splitbits!(min=u16, offset, ".m.. .... .... hbbb");
        bus.set_prg_16k(fields.b & !fields.m, fields.b | fields.m);
        bus.set_chr_8k(fields.b, ChrSource::Rom);
        bus.set_name_table_mirroring(MIRRORINGS[usize::from(fields.h)]);
    }

    // Some games check this bit for protection.
    // With A4 set, bit 7 is left to the data bus like the rest of the byte.
    fn read_mid(&self, _bus: &dyn Bus, offset: u16) -> ReadResult {
        if offset & 0x10 == 0 {
            ReadResult::partial(0b1000_0000, 0b1000_0000)
        } else {
            ReadResult::OPEN_BUS
        }
    }
}
