use crate::mapper::*;

const MIRRORINGS: [NameTableMirroring; 2] = [
    NameTableMirroring::Vertical,
    NameTableMirroring::Horizontal,
];

// BMC-64IN1NOREPEAT (64-in-1 Y2K)
#[derive(Default)]
pub struct Y2k64In1 {
    // The fourth register (0x8000-0xFFFF) is latched but nothing reads it.
    regs: [u8; 4],
}

impl Y2k64In1 {
    fn update_prg(&self, bus: &mut dyn Bus) {
        let bank_32k = u16::from(self.regs[1] & 0x1F);
        let bank_16k = (bank_32k << 1) | u16::from((self.regs[1] & 0x40) >> 6);
        if self.regs[0] & 0x80 == 0 {
            bus.set_prg_bank(PrgWindow::Last16K, bank_16k);
        } else if self.regs[1] & 0x80 != 0 {
            bus.set_prg_32k(bank_32k);
        } else {
            bus.set_prg_16k(bank_16k, bank_16k);
        }
    }
}

impl Mapper for Y2k64In1 {
    fn reset(&mut self, bus: &mut dyn Bus) {
        let source = bus.default_chr_source();
        bus.set_chr_8k(0, source);
        self.regs = [0x80, 0x43, 0x00, 0x00];
        self.update_prg(bus);
        bus.set_name_table_mirroring(NameTableMirroring::Vertical);
    }

    fn write_low(&mut self, bus: &mut dyn Bus, offset: u16, value: u8) {
        if !(0x1000..=0x1003).contains(&offset) {
            return;
        }

        self.regs[usize::from(offset & 0b11)] = value;
        self.update_prg(bus);
        let chr_bank = ((self.regs[0] >> 1) & 0b11) | (self.regs[2] << 2);
        bus.set_chr_8k(chr_bank.into(), ChrSource::Rom);
        if offset == 0x1000 {
            bus.set_name_table_mirroring(MIRRORINGS[usize::from((value >> 5) & 1)]);
        }
    }

    fn write_high(&mut self, _bus: &mut dyn Bus, _offset: u16, value: u8) {
        self.regs[3] = value;
    }

    fn state_fields(&mut self) -> Vec<StateField<'_>> {
        vec![StateField::bytes("reg", &mut self.regs)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cartridge::cartridge::test_data;

    #[test]
    fn reset_selects_nrom_128_bank() {
        let mut cartridge = test_data::cartridge(1024, 256);
        let mut board = Y2k64In1::default();
        board.reset(&mut cartridge);
        // 0x43: bank 3, half 1.
        assert_eq!(cartridge.banks().prg_bank(PrgWindow::First16K), 7);
        assert_eq!(cartridge.banks().prg_bank(PrgWindow::Last16K), 7);
    }

    #[test]
    fn registers_at_5000() {
        let mut cartridge = test_data::cartridge(1024, 256);
        let mut board = Y2k64In1::default();
        board.reset(&mut cartridge);

        board.write_low(&mut cartridge, 0x1001, 0x85);
        assert_eq!(cartridge.banks().prg_bank(PrgWindow::Whole), 5);
        board.write_low(&mut cartridge, 0x1002, 0x03);
        board.write_low(&mut cartridge, 0x1000, 0b1010_0100);
        assert_eq!(cartridge.banks().chr_bank(ChrWindow::Whole), 0b1110);
        assert_eq!(cartridge.banks().name_table_mirroring(), NameTableMirroring::Horizontal);

        // Outside the register block.
        board.write_low(&mut cartridge, 0x1004, 0x00);
        assert_eq!(cartridge.banks().chr_bank(ChrWindow::Whole), 0b1110);
    }
}
