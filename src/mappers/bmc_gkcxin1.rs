use crate::mapper::*;

// BMC-GKCXIN1 (21-in-1)
pub struct Gkcxin1;

impl Mapper for Gkcxin1 {
    fn write_high(&mut self, bus: &mut dyn Bus, offset: u16, _value: u8) {
        let (prg_bank, chr_bank) = splitbits_named!(min=u16, offset, ".... .... ...p pccc");
        bus.set_prg_32k(prg_bank);
        bus.set_chr_8k(chr_bank, ChrSource::Rom);
    }
}
