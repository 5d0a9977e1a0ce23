use crate::mapper::*;

const MIRRORINGS: [NameTableMirroring; 2] = [
    NameTableMirroring::Vertical,
    NameTableMirroring::Horizontal,
];

// BMC-36IN1 (36-in-1, 1200-in-1)
pub struct Bmc36In1;

impl Mapper for Bmc36In1 {
    fn reset(&mut self, bus: &mut dyn Bus) {
        let last = bus.last_prg_16k_bank();
        bus.set_prg_16k(last, last);
        let source = bus.default_chr_source();
        bus.set_chr_8k(0, source);
    }

    fn write_high(&mut self, bus: &mut dyn Bus, offset: u16, value: u8) {
        let bank = offset & 0b111;
        bus.set_prg_16k(bank, bank);
        bus.set_chr_8k(bank, ChrSource::Rom);
        bus.set_name_table_mirroring(MIRRORINGS[usize::from((value >> 3) & 1)]);
    }
}
