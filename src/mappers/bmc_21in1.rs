use crate::mapper::*;

// BMC-21IN1 (8-in-1, 21-in-1)
pub struct Bmc21In1;

impl Mapper for Bmc21In1 {
    fn write_high(&mut self, bus: &mut dyn Bus, offset: u16, _value: u8) {
        let bank = offset & 0b11;
        bus.set_prg_32k(bank);
        bus.set_chr_8k(bank, ChrSource::Rom);
    }
}
