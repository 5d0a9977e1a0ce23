use crate::mapper::*;

// BMC-K-3046 (11-in-1)
pub struct K3046;

impl Mapper for K3046 {
    fn reset(&mut self, bus: &mut dyn Bus) {
        bus.set_prg_16k(0, 7);
        bus.set_chr_8k(0, ChrSource::Ram);
    }

    fn write_high(&mut self, bus: &mut dyn Bus, _offset: u16, value: u8) {
        let bank = u16::from(value & 0x1F);
        bus.set_prg_16k(bank, bank | 0b111);
    }

    fn has_bus_conflicts(&self) -> HasBusConflicts {
        HasBusConflicts::Yes
    }
}
