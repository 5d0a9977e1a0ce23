use crate::mapper::*;

// BMC-35IN1
pub struct Bmc35In1;

impl Mapper for Bmc35In1 {
    fn reset(&mut self, bus: &mut dyn Bus) {
        bus.set_prg_16k(0, 0);
        let source = bus.default_chr_source();
        bus.set_chr_8k(0, source);
    }

    fn write_high(&mut self, bus: &mut dyn Bus, _offset: u16, value: u8) {
        let (prg_bank, chr_bank) = splitbits_named!(min=u16, value, ".... ppcc");
        bus.set_prg_16k(prg_bank, prg_bank);
        bus.set_chr_8k(chr_bank, ChrSource::Rom);
    }
}
