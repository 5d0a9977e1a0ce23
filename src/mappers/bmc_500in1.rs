use crate::mapper::*;

// BMC-500IN1 (500-in-1, 2000-in-1 Unchained Melody)
pub struct Bmc500In1;

impl Mapper for Bmc500In1 {
    // The PRG and CHR fields overlap at bit 2.
    fn write_high(&mut self, bus: &mut dyn Bus, offset: u16, _value: u8) {
        bus.set_prg_32k((offset >> 2) & 0b111);
        bus.set_chr_8k(offset & 0b111, ChrSource::Rom);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cartridge::cartridge::test_data;

    #[test]
    fn prg_and_chr_share_bit_two() {
        let mut cartridge = test_data::cartridge(256, 64);
        let mut board = Bmc500In1;

        board.write_high(&mut cartridge, 0b1_0110, 0);
        assert_eq!(cartridge.banks().prg_bank(PrgWindow::Whole), 5);
        assert_eq!(cartridge.banks().chr_bank(ChrWindow::Whole), 6);

        board.write_high(&mut cartridge, 0b0_0011, 0);
        assert_eq!(cartridge.banks().prg_bank(PrgWindow::Whole), 0);
        assert_eq!(cartridge.banks().chr_bank(ChrWindow::Whole), 3);
    }
}
