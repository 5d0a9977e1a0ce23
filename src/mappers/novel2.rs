use crate::mapper::*;

// BMC-999999in1
pub struct Novel2;

impl Mapper for Novel2 {
    fn write_high(&mut self, bus: &mut dyn Bus, offset: u16, _value: u8) {
        bus.set_prg_32k(offset >> 1);
        bus.set_chr_8k(offset >> 3, ChrSource::Rom);
    }
}
