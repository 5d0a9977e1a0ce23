use crate::mapper::*;

const MIRRORINGS: [NameTableMirroring; 2] = [
    NameTableMirroring::Vertical,
    NameTableMirroring::Horizontal,
];

#[derive(Clone, Copy)]
enum PrgLayout {
    Whole32K,
    Unrom,
    Mirrored8K,
    Mirrored16K,
}

const PRG_LAYOUTS: [PrgLayout; 4] = [
    PrgLayout::Whole32K,
    PrgLayout::Unrom,
    PrgLayout::Mirrored8K,
    PrgLayout::Mirrored16K,
];

// BMC-K-1029 (100-in-1 Contra Function 16, 168-in-1)
#[derive(Default)]
pub struct K1029 {
    vram_protect: VramProtect,
}

impl Mapper for K1029 {
    fn reset(&mut self, bus: &mut dyn Bus) {
        self.vram_protect.reset(bus);
    }

    fn write_high(&mut self, bus: &mut dyn Bus, offset: u16, value: u8) {
        let bank = u16::from(value & 0x3F);
        match PRG_LAYOUTS[usize::from(offset & 0b11)] {
            PrgLayout::Whole32K => bus.set_prg_32k(bank >> 1),
            PrgLayout::Unrom => bus.set_prg_16k(bank, bank | 0b111),
            PrgLayout::Mirrored8K => {
                let bank = (bank << 1) | u16::from(value >> 7);
                for quarter in 0..4 {
                    bus.set_prg_8k(quarter, bank);
                }
            }
            PrgLayout::Mirrored16K => bus.set_prg_16k(bank, bank),
        }

        bus.set_name_table_mirroring(MIRRORINGS[usize::from((value >> 6) & 1)]);
        // Only the UNROM and 8KiB layouts write to CHR RAM.
        self.vram_protect.set_protected(offset & 1 == (offset >> 1) & 1);
    }

    fn chr_writes_enabled(&self) -> bool {
        self.vram_protect.chr_writes_enabled()
    }

    fn state_fields(&mut self) -> Vec<StateField<'_>> {
        vec![self.vram_protect.state_field()]
    }
}
