use crate::mapper::*;

const MIRRORINGS: [NameTableMirroring; 2] = [
    NameTableMirroring::Vertical,
    NameTableMirroring::Horizontal,
];

// N625092
// Two address latches: 0x8000-0xBFFF and 0xC000-0xFFFF.
#[derive(Default)]
pub struct N625092 {
    latches: [u16; 2],
    vram_protect: VramProtect,
}

impl Mapper for N625092 {
    fn reset(&mut self, bus: &mut dyn Bus) {
        self.vram_protect.reset(bus);
        bus.set_prg_16k(0, 0);
        self.latches = [0; 2];
    }

    fn write_high(&mut self, bus: &mut dyn Bus, offset: u16, _value: u8) {
        self.latches[usize::from(offset >> 14 & 1)] = offset;
        let [outer, inner] = self.latches;

        // The high outer bit (0x200) is uncertain, but matches the 1024KiB carts.
        let bank = ((outer & 0x200) >> 3) | ((outer & 0xE0) >> 2) | (inner & 0b111);
        let mode = (outer >> 1) & 1;
        if mode == 1 && outer & 0x100 != 0 {
            bus.set_prg_16k(bank, bank | 0b111);
        } else {
            bus.set_prg_16k(bank & !mode, bank | mode);
        }

        bus.set_name_table_mirroring(MIRRORINGS[usize::from(outer & 1)]);
        self.vram_protect.set_protected(inner & 0b1000 != 0);
    }

    fn chr_writes_enabled(&self) -> bool {
        self.vram_protect.chr_writes_enabled()
    }

    fn state_fields(&mut self) -> Vec<StateField<'_>> {
        vec![
            StateField::words("latch", &mut self.latches),
            self.vram_protect.state_field(),
        ]
    }
}
