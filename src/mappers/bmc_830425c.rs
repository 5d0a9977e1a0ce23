use crate::mapper::*;

// BMC-830425C-4391T (Super HiK 6-in-1)
// UNROM games behind an outer bank latch at 0xF0E0-0xF0FF.
#[derive(Default)]
pub struct Bmc830425c {
    latch: u8,
}

impl Mapper for Bmc830425c {
    fn reset(&mut self, bus: &mut dyn Bus) {
        bus.set_prg_16k(0, 0xF);
        bus.set_chr_8k(0, ChrSource::Ram);
        bus.set_name_table_mirroring(NameTableMirroring::Vertical);
        self.latch = 0;
    }

    fn write_high(&mut self, bus: &mut dyn Bus, offset: u16, value: u8) {
        if offset & 0x7FE0 == 0x70E0 {
            self.latch = (offset & 0x1F) as u8;
        }

        let outer = (self.latch & 0xF) << 3;
        // 128KiB inner banks unless bit 4 limits them to 64KiB.
        let mask = if self.latch & 0x10 == 0 { 0xF } else { 0x7 };
        bus.set_prg_16k(u16::from(outer | (value & mask)), u16::from(outer | mask));
    }

    fn state_fields(&mut self) -> Vec<StateField<'_>> {
        vec![StateField::u8("latch", &mut self.latch)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cartridge::cartridge::test_data;

    #[test]
    fn outer_latch_only_at_its_address() {
        let mut cartridge = test_data::cartridge(1024, 0);
        let mut board = Bmc830425c::default();
        board.reset(&mut cartridge);

        board.write_high(&mut cartridge, 0x1234, 0x03);
        assert_eq!(cartridge.banks().prg_bank(PrgWindow::First16K), 0x03);
        assert_eq!(cartridge.banks().prg_bank(PrgWindow::Last16K), 0x0F);

        board.write_high(&mut cartridge, 0x70F2, 0x0F);
        assert_eq!(cartridge.banks().prg_bank(PrgWindow::First16K), 0x10 | 0x7);
        assert_eq!(cartridge.banks().prg_bank(PrgWindow::Last16K), 0x10 | 0x7);
    }
}
