use crate::mapper::*;

const MIRRORINGS: [NameTableMirroring; 2] = [
    NameTableMirroring::Vertical,
    NameTableMirroring::Horizontal,
];

// BMC-TH2291-3
#[derive(Default)]
pub struct Th22913 {
    vram_protect: VramProtect,
}

impl Mapper for Th22913 {
    fn reset(&mut self, bus: &mut dyn Bus) {
        self.vram_protect.reset(bus);
        bus.set_prg_16k(0, 0);
    }

    fn write_high(&mut self, bus: &mut dyn Bus, offset: u16, _value: u8) {
        let bank = u16::from((offset >> 2) as u8);
        let mode = (offset >> 1) & 1;
        bus.set_prg_16k(bank & !mode, bank | mode);
        bus.set_name_table_mirroring(MIRRORINGS[usize::from(offset & 1)]);
        self.vram_protect.set_protected(offset & 0x400 != 0);
    }

    fn chr_writes_enabled(&self) -> bool {
        self.vram_protect.chr_writes_enabled()
    }

    fn state_fields(&mut self) -> Vec<StateField<'_>> {
        vec![self.vram_protect.state_field()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cartridge::cartridge::test_data;

    #[test]
    fn bank_is_eight_bits_wide() {
        let mut cartridge = test_data::cartridge(4096, 0);
        let mut board = Th22913::default();
        board.reset(&mut cartridge);

        // Bit 10 lands in bank bit 8 and is dropped, but still protects CHR RAM.
        board.write_high(&mut cartridge, 0x0400 | (0x15 << 2) | 0b10, 0);
        assert_eq!(cartridge.banks().prg_bank(PrgWindow::First16K), 0x14);
        assert_eq!(cartridge.banks().prg_bank(PrgWindow::Last16K), 0x15);
        assert!(!board.chr_writes_enabled());
    }
}
