use crate::mapper::*;

const MIRRORINGS: [NameTableMirroring; 2] = [
    NameTableMirroring::Vertical,
    NameTableMirroring::Horizontal,
];

// BMC-850437C (Super 8-in-1)
#[derive(Default)]
pub struct Bmc850437c {
    regs: [u8; 2],
}

impl Mapper for Bmc850437c {
    fn reset(&mut self, bus: &mut dyn Bus) {
        bus.set_prg_16k(0, 7);
        bus.set_chr_8k(0, ChrSource::Ram);
        self.regs = [0; 2];
    }

    fn write_high(&mut self, bus: &mut dyn Bus, offset: u16, value: u8) {
        // The outer register is always written at 0xA000. The decode mask is unconfirmed.
        self.regs[usize::from(offset & 0x6000 == 0x2000)] = value;

        let bank = u16::from(((self.regs[1] & 0b111) << 3) | (self.regs[0] & 0b111));
        bus.set_prg_16k(bank, bank | 0b111);
        bus.set_name_table_mirroring(MIRRORINGS[usize::from((self.regs[1] >> 6) & 1)]);
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
    fn outer_and_inner_registers_combine() {
        let mut cartridge = test_data::cartridge(1024, 0);
        let mut board = Bmc850437c::default();
        board.reset(&mut cartridge);

        board.write_high(&mut cartridge, 0x2000, 0b0100_0010);
        assert_eq!(cartridge.banks().prg_bank(PrgWindow::First16K), 16);
        assert_eq!(cartridge.banks().prg_bank(PrgWindow::Last16K), 23);
        assert_eq!(cartridge.banks().name_table_mirroring(), NameTableMirroring::Horizontal);

        board.write_high(&mut cartridge, 0x0000, 0b0000_0101);
        assert_eq!(cartridge.banks().prg_bank(PrgWindow::First16K), 21);
        assert_eq!(cartridge.banks().prg_bank(PrgWindow::Last16K), 23);
        assert_eq!(cartridge.banks().name_table_mirroring(), NameTableMirroring::Horizontal);
    }
}
