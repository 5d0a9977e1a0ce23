use crate::mapper::*;

const MIRRORINGS: [NameTableMirroring; 2] = [
    NameTableMirroring::Vertical,
    NameTableMirroring::Horizontal,
];

// BMC-GKA (6-in-1, 54-in-1, 106-in-1)
#[derive(Default)]
pub struct Gka {
    regs: [u8; 2],
}

impl Mapper for Gka {
    fn reset(&mut self, bus: &mut dyn Bus) {
        bus.set_prg_16k(0, 0);
        bus.set_chr_8k(0, ChrSource::Rom);
        self.regs = [0; 2];
    }

    fn write_high(&mut self, bus: &mut dyn Bus, offset: u16, value: u8) {
        self.regs[usize::from((offset >> 11) & 1)] = value;
        let [low, high] = self.regs;

        let fields = splitbits!(min=u8, high, "bbbm hc..");
        bus.set_prg_16k(u16::from(fields.b & !fields.m), u16::from(fields.b | fields.m));

        let fine = self.regs[usize::from(low >> 7)] & 0b11;
        let chr_bank = ((low & 0x40) >> 3) | (fields.c << 2) | fine;
        bus.set_chr_8k(chr_bank.into(), ChrSource::Rom);
        bus.set_name_table_mirroring(MIRRORINGS[usize::from(fields.h)]);
    }

    // Menus differ by a DIP setting readable here. Only the first is supported.
    fn read_mid(&self, _bus: &dyn Bus, _offset: u16) -> ReadResult {
        ReadResult::full(0)
    }

    fn state_fields(&mut self) -> Vec<StateField<'_>> {
        vec![StateField::bytes("reg", &mut self.regs)]
    }
}
