use crate::mapper::*;

const MIRRORINGS: [NameTableMirroring; 2] = [
    NameTableMirroring::Vertical,
    NameTableMirroring::Horizontal,
];

// BMC-64IN1
pub struct Bmc64In1;

impl Mapper for Bmc64In1 {
    fn reset(&mut self, bus: &mut dyn Bus) {
        bus.set_prg_16k(0, 0);
        let source = bus.default_chr_source();
        bus.set_chr_8k(0, source);
    }

    fn write_high(&mut self, bus: &mut dyn Bus, offset: u16, value: u8) {
        // Games 6 and 7 of every 8 are NROM-256.
        let nrom_256 = (offset >> 1) & (offset >> 2) & 1;
        bus.set_prg_16k(offset & !nrom_256, offset | nrom_256);
        bus.set_chr_8k(offset & !nrom_256, ChrSource::Rom);
        bus.set_name_table_mirroring(MIRRORINGS[usize::from((value >> 4) & 1)]);
    }
}
