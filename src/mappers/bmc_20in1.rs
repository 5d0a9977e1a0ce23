use crate::mapper::*;

const MIRRORINGS: [NameTableMirroring; 2] = [
    NameTableMirroring::Vertical,
    NameTableMirroring::Horizontal,
];

// BMC-20IN1
pub struct Bmc20In1;

impl Mapper for Bmc20In1 {
    fn reset(&mut self, bus: &mut dyn Bus) {
        let last = bus.last_prg_16k_bank();
        bus.set_prg_16k(0, last);
        let source = bus.default_chr_source();
        bus.set_chr_8k(0, source);
        bus.set_name_table_mirroring(NameTableMirroring::Vertical);
    }

    fn write_high(&mut self, bus: &mut dyn Bus, offset: u16, value: u8) {
        bus.set_name_table_mirroring(MIRRORINGS[usize::from(value >> 7)]);
        let bank = offset & 0x1E;
        bus.set_prg_16k(bank, bank | ((offset >> 5) & 1));
    }
}
