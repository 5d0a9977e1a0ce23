use crate::mapper::*;

const MIRRORINGS: [NameTableMirroring; 2] = [
    NameTableMirroring::Vertical,
    NameTableMirroring::Horizontal,
];

// BMC-1200IN1 (1200-in-1, 295-in-1, 76-in-1)
#[derive(Default)]
pub struct Bmc1200In1 {
    // The board can write-protect CHR RAM, but enabling it breaks games. Kept for save states.
    vram_protected: bool,
}

impl Mapper for Bmc1200In1 {
    fn reset(&mut self, bus: &mut dyn Bus) {
        bus.set_prg_16k(0, 0);
        let source = bus.default_chr_source();
        bus.set_chr_8k(0, source);
        self.vram_protected = false;
    }

    fn write_high(&mut self, bus: &mut dyn Bus, offset: u16, _value: u8) {
        let bank = ((offset >> 2) & 0x1F) | ((offset & 0x100) >> 3);
        if offset & 0x80 != 0 {
            bus.set_prg_16k(bank, bank + (offset & 1));
        } else {
            let low_mask = if offset & 1 == 0 { 0xFF } else { 0x3E };
            if offset & 0x200 == 0 {
                bus.set_prg_16k(bank & low_mask, bank & 0x38);
            } else {
                bus.set_prg_16k(bank & low_mask, bank | 0b111);
            }
        }

        bus.set_name_table_mirroring(MIRRORINGS[usize::from((offset >> 1) & 1)]);
    }

    fn chr_writes_enabled(&self) -> bool {
        !self.vram_protected
    }

    fn state_fields(&mut self) -> Vec<StateField<'_>> {
        vec![StateField::bool("vram_protect", &mut self.vram_protected)]
    }
}
