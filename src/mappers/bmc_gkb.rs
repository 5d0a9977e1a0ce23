use crate::mapper::*;

const MIRRORINGS: [NameTableMirroring; 2] = [
    NameTableMirroring::Vertical,
    NameTableMirroring::Horizontal,
];

// BMC-GKB (68-in-1, 73-in-1, 98-in-1)
pub struct Gkb;

impl Mapper for Gkb {
    fn write_high(&mut self, bus: &mut dyn Bus, offset: u16, value: u8) {
        let nrom_256 = if offset & 0x40 == 0 { 1 } else { 0 };
        bus.set_prg_16k(offset & !nrom_256, offset | nrom_256);
        let source = bus.default_chr_source();
        bus.set_chr_8k(offset >> 3, source);
        bus.set_name_table_mirroring(MIRRORINGS[usize::from(value >> 7)]);
    }
}
