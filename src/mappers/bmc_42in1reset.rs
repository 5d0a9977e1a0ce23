use crate::mapper::*;

const MIRRORINGS: [NameTableMirroring; 2] = [
    NameTableMirroring::Vertical,
    NameTableMirroring::Horizontal,
];

// BMC-42IN1RESETBASED
// Reset toggles between the two 512KiB halves, each with its own menu.
pub struct ResetBased42In1 {
    regs: [u8; 2],
    half: u8,
}

impl Default for ResetBased42In1 {
    fn default() -> Self {
        Self { regs: [0; 2], half: u8::MAX }
    }
}

impl Mapper for ResetBased42In1 {
    fn reset(&mut self, bus: &mut dyn Bus) {
        self.half = self.half.wrapping_add(1) & 1;
        let source = bus.default_chr_source();
        bus.set_chr_8k(0, source);
        bus.set_prg_32k(u16::from(self.half) << 4);
        self.regs = [0; 2];
    }

    fn write_high(&mut self, bus: &mut dyn Bus, offset: u16, value: u8) {
        self.regs[usize::from(offset & 1)] = value;
        let [low, high] = self.regs.map(u16::from);

        let bank = (low & 0x1F) | (u16::from(self.half) << 5) | ((high & 1) << 6);
        if low & 0x20 == 0 {
            bus.set_prg_32k(bank >> 1);
        } else {
            bus.set_prg_16k(bank, bank);
        }

        bus.set_name_table_mirroring(MIRRORINGS[usize::from((offset >> 6) & 1)]);
    }

    fn state_fields(&mut self) -> Vec<StateField<'_>> {
        vec![
            StateField::bytes("reg", &mut self.regs),
            StateField::u8("latch", &mut self.half),
        ]
    }
}
