use crate::mapper::*;

const MIRRORINGS: [NameTableMirroring; 2] = [
    NameTableMirroring::Vertical,
    NameTableMirroring::Horizontal,
];

// BMC-CTC-09
pub struct Ctc09;

impl Mapper for Ctc09 {
    // Games reset to their own title screens. Resetting to the menu crashes the hardware.
    fn reset(&mut self, _bus: &mut dyn Bus) {}

    fn write_high(&mut self, bus: &mut dyn Bus, offset: u16, value: u8) {
        if offset & 0x4000 == 0 {
            bus.set_chr_8k(u16::from(value & 0xF), ChrSource::Rom);
            return;
        }

        let fields = splitbits!(min=u16, value, "..mn hppp");
        if fields.n == 1 {
            let bank = (fields.p << 1) | fields.h;
            bus.set_prg_16k(bank, bank);
        } else {
            bus.set_prg_32k(fields.p);
        }

        bus.set_name_table_mirroring(MIRRORINGS[usize::from(fields.m)]);
    }
}
