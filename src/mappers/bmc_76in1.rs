use crate::mapper::*;

// BMC-76IN1, BMC-SUPER42IN1
#[derive(Default)]
pub struct Bmc76In1 {
    regs: [u8; 2],
}

impl Mapper for Bmc76In1 {
    fn reset(&mut self, bus: &mut dyn Bus) {
        bus.set_prg_32k(0);
        bus.set_chr_8k(0, ChrSource::Ram);
        self.regs = [0; 2];
    }

    fn write_high(&mut self, bus: &mut dyn Bus, offset: u16, value: u8) {
        self.regs[usize::from(offset & 1)] = value;
        let [low, high] = self.regs;

        let mirroring = if low & 0x40 != 0 {
            NameTableMirroring::Vertical
        } else {
            NameTableMirroring::Horizontal
        };
        bus.set_name_table_mirroring(mirroring);

        // Computed in eight bits: only bit 0 of the high register survives the shift.
        let nrom_128 = (low >> 5) & 1;
        let bank = ((high << 6) | ((low & 0x80) >> 2) | (low & 0x1F)) & (0x7E | nrom_128);
        bus.set_prg_16k(bank.into(), u16::from(bank | (nrom_128 ^ 1)));
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
    fn nrom_256_and_128() {
        let mut cartridge = test_data::cartridge(2048, 0);
        let mut board = Bmc76In1::default();
        board.reset(&mut cartridge);

        board.write_high(&mut cartridge, 1, 0x01);
        board.write_high(&mut cartridge, 0, 0x85);
        // 0x40 | 0x20 | 0x05, low bit cleared
        assert_eq!(cartridge.banks().prg_bank(PrgWindow::First16K), 0x64);
        assert_eq!(cartridge.banks().prg_bank(PrgWindow::Last16K), 0x65);
        assert_eq!(cartridge.banks().name_table_mirroring(), NameTableMirroring::Horizontal);

        board.write_high(&mut cartridge, 0, 0x65);
        assert_eq!(cartridge.banks().prg_bank(PrgWindow::First16K), 0x45);
        assert_eq!(cartridge.banks().prg_bank(PrgWindow::Last16K), 0x45);
        assert_eq!(cartridge.banks().name_table_mirroring(), NameTableMirroring::Vertical);
    }
}
