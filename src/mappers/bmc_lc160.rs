use crate::mapper::*;

// BMC-LITTLECOM-160
// Only 0xC000-0xFFFF is decoded.
pub struct LittleCom160;

impl Mapper for LittleCom160 {
    fn write_high(&mut self, bus: &mut dyn Bus, offset: u16, _value: u8) {
        if offset < 0x4000 {
            return;
        }

        let fields = splitbits!(min=u16, offset, ".... .... bbbb bbnv");
        let mode = fields.n ^ 1;
        bus.set_prg_16k(fields.b & !mode, fields.b | mode);
        let mirroring = if fields.v == 1 {
            NameTableMirroring::Vertical
        } else {
            NameTableMirroring::Horizontal
        };
        bus.set_name_table_mirroring(mirroring);
    }
}
