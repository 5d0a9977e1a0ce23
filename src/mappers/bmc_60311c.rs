use crate::mapper::*;

const MIRRORINGS: [NameTableMirroring; 2] = [
    NameTableMirroring::Vertical,
    NameTableMirroring::Horizontal,
];

// BMC-60311C
// Switches between NROM-128, NROM-256 and UNROM layouts.
#[derive(Default)]
pub struct Bmc60311c {
    regs: [u8; 3],
    vram_protect: VramProtect,
}

impl Bmc60311c {
    fn update_banks(&mut self, bus: &mut dyn Bus) {
        let fields = splitbits!(min=u16, self.regs[0], ".... hpus");
        let [_, outer, inner] = self.regs.map(u16::from);
        if fields.u == 1 {
            let low = (outer & !0b111) | if fields.s == 1 { 0b111 } else { inner };
            bus.set_prg_16k(low, outer | 0b111);
        } else {
            bus.set_prg_16k(outer & !fields.s, outer | fields.s);
        }

        bus.set_name_table_mirroring(MIRRORINGS[usize::from(fields.h)]);
        self.vram_protect.set_protected(fields.p == 1);
    }
}

impl Mapper for Bmc60311c {
    fn reset(&mut self, bus: &mut dyn Bus) {
        self.vram_protect.reset(bus);
        self.regs = [0; 3];
        self.update_banks(bus);
    }

    fn write_mid(&mut self, bus: &mut dyn Bus, offset: u16, value: u8) {
        self.regs[usize::from(offset & 1)] = value & 0x7F;
        self.update_banks(bus);
    }

    fn write_high(&mut self, bus: &mut dyn Bus, _offset: u16, value: u8) {
        self.regs[2] = value & 0b111;
        self.update_banks(bus);
    }

    fn chr_writes_enabled(&self) -> bool {
        self.vram_protect.chr_writes_enabled()
    }

    fn state_fields(&mut self) -> Vec<StateField<'_>> {
        vec![
            StateField::bytes("reg", &mut self.regs),
            self.vram_protect.state_field(),
        ]
    }
}
