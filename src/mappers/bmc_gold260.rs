use crate::mapper::*;

// BMC-GOLDEN260IN1
pub struct Golden260In1;

impl Mapper for Golden260In1 {
    fn write_high(&mut self, bus: &mut dyn Bus, offset: u16, _value: u8) {
        let bank = (offset & 0x1F) | ((offset & 0x300) >> 3);
        select_banks(bus, offset, bank);
    }
}

// Mirroring and PRG decoding shared with Golden 150-in-1. Only the outer bank bits differ.
pub fn select_banks(bus: &mut dyn Bus, offset: u16, bank: u16) {
    let fields = splitbits!(offset, "..mh ns.. .... ....");
    let mirroring = if fields.s {
        NameTableMirroring::OneScreenLow
    } else if fields.m {
        NameTableMirroring::Horizontal
    } else {
        NameTableMirroring::Vertical
    };
    bus.set_name_table_mirroring(mirroring);

    if fields.n {
        let bank = (bank << 1) | u16::from(fields.h);
        bus.set_prg_16k(bank, bank);
    } else {
        bus.set_prg_32k(bank);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cartridge::cartridge::test_data;

    #[test]
    fn one_screen_takes_priority() {
        let mut cartridge = test_data::cartridge(2048, 0);
        let mut board = Golden260In1;

        board.write_high(&mut cartridge, 0x2400, 0);
        assert_eq!(cartridge.banks().name_table_mirroring(), NameTableMirroring::OneScreenLow);
        board.write_high(&mut cartridge, 0x2000, 0);
        assert_eq!(cartridge.banks().name_table_mirroring(), NameTableMirroring::Horizontal);
    }

    #[test]
    fn outer_bits_extend_bank() {
        let mut cartridge = test_data::cartridge(4096, 0);
        let mut board = Golden260In1;

        board.write_high(&mut cartridge, 0x0300 | 0x03, 0);
        assert_eq!(cartridge.banks().prg_bank(PrgWindow::Whole), 0x63);

        board.write_high(&mut cartridge, 0x1800 | 0x03, 0);
        assert_eq!(cartridge.banks().prg_bank(PrgWindow::First16K), 0x07);
        assert_eq!(cartridge.banks().prg_bank(PrgWindow::Last16K), 0x07);
    }
}
