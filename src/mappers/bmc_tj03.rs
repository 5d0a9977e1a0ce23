use crate::mapper::*;

const MIRRORINGS: [NameTableMirroring; 2] = [
    NameTableMirroring::Vertical,
    NameTableMirroring::Horizontal,
];

// BMC-TJ-03 (4-in-1)
pub struct Tj03;

impl Mapper for Tj03 {
    fn write_high(&mut self, bus: &mut dyn Bus, offset: u16, _value: u8) {
        let bank = (offset >> 8) & 0b11;
        bus.set_prg_32k(bank);
        bus.set_chr_8k(bank, ChrSource::Rom);
        // Shares a bit with the bank number.
        bus.set_name_table_mirroring(MIRRORINGS[usize::from((offset >> 9) & 1)]);
    }
}
