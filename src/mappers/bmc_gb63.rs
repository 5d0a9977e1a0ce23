use crate::mapper::*;

// BMC-GHOSTBUSTERS63IN1
#[derive(Default)]
pub struct Ghostbusters63In1 {
    regs: [u8; 2],
    // Which of the two PRG chips is selected. Chip 1 isn't populated.
    chip: u8,
    // Never set. The games stop working if writes to CHR RAM can be disabled.
    vram_disabled: bool,
}

impl Ghostbusters63In1 {
    fn update_banks(&self, bus: &mut dyn Bus) {
        let fields = splitbits!(min=u16, self.regs[0], ".vnb bbbb");
        let mirroring = if fields.v == 1 {
            NameTableMirroring::Vertical
        } else {
            NameTableMirroring::Horizontal
        };
        bus.set_name_table_mirroring(mirroring);

        if fields.n == 1 {
            bus.set_prg_16k(fields.b, fields.b);
        } else {
            bus.set_prg_32k(fields.b >> 1);
        }
    }
}

impl Mapper for Ghostbusters63In1 {
    fn reset(&mut self, bus: &mut dyn Bus) {
        let last = bus.last_prg_16k_bank();
        bus.set_prg_16k(0, last);
        bus.set_chr_8k(0, ChrSource::Ram);

        self.chip = 0;
        self.regs = [0; 2];
        self.update_banks(bus);
        self.vram_disabled = false;
    }

    fn write_high(&mut self, bus: &mut dyn Bus, offset: u16, value: u8) {
        self.regs[usize::from(offset & 1)] = value;
        self.chip = (self.regs[0] >> 7) | ((self.regs[1] & 1) << 1);
        self.update_banks(bus);
    }

    fn read_high(&self, bus: &dyn Bus, offset: u16) -> ReadResult {
        if self.chip == 1 {
            ReadResult::OPEN_BUS
        } else {
            ReadResult::full(bus.peek_prg(offset))
        }
    }

    fn chr_writes_enabled(&self) -> bool {
        !self.vram_disabled
    }

    fn state_fields(&mut self) -> Vec<StateField<'_>> {
        vec![
            StateField::bytes("reg", &mut self.regs),
            StateField::u8("latch", &mut self.chip),
            StateField::bool("vram_disable", &mut self.vram_disabled),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cartridge::cartridge::test_data;

    #[test]
    fn unpopulated_chip_reads_open_bus() {
        let mut cartridge = test_data::cartridge(512, 0);
        let mut board = Ghostbusters63In1::default();
        board.reset(&mut cartridge);

        board.write_high(&mut cartridge, 0, 0x80);
        assert!(board.read_high(&cartridge, 0x1000).is_open_bus());

        board.write_high(&mut cartridge, 1, 0x01);
        assert!(!board.read_high(&cartridge, 0x1000).is_open_bus());
    }

    #[test]
    fn sixteen_k_mode_mirrors_bank() {
        let mut cartridge = test_data::cartridge(512, 0);
        let mut board = Ghostbusters63In1::default();
        board.reset(&mut cartridge);

        board.write_high(&mut cartridge, 0, 0b0110_0101);
        assert_eq!(cartridge.banks().prg_bank(PrgWindow::First16K), 5);
        assert_eq!(cartridge.banks().prg_bank(PrgWindow::Last16K), 5);
        assert_eq!(cartridge.banks().name_table_mirroring(), NameTableMirroring::Vertical);
        assert!(board.chr_writes_enabled());
    }
}
