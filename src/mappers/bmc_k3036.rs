use crate::mapper::*;

// BMC-K-3036 (35-in-1)
pub struct K3036;

impl Mapper for K3036 {
    fn reset(&mut self, bus: &mut dyn Bus) {
        bus.set_prg_16k(0, 7);
        bus.set_chr_8k(0, ChrSource::Ram);
    }

    fn write_high(&mut self, bus: &mut dyn Bus, offset: u16, _value: u8) {
        let bank = offset & 0x1F;
        let high_bank = if offset & 0x20 == 0 { bank | 0b111 } else { bank };
        bus.set_prg_16k(bank, high_bank);

        let mirroring = if offset & 0x25 == 0x25 {
            NameTableMirroring::Horizontal
        } else {
            NameTableMirroring::Vertical
        };
        bus.set_name_table_mirroring(mirroring);
    }
}
