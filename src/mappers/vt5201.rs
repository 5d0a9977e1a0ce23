use crate::mapper::*;

const MIRRORINGS: [NameTableMirroring; 2] = [
    NameTableMirroring::Vertical,
    NameTableMirroring::Horizontal,
];

// BMC-VT5201
#[derive(Default)]
pub struct Vt5201 {
    dip_mode: bool,
    dip_setting: u8,
}

impl Mapper for Vt5201 {
    fn reset(&mut self, bus: &mut dyn Bus) {
        start_like_nrom(bus);
        self.dip_mode = false;
        self.dip_setting = 0;
    }

    fn write_high(&mut self, bus: &mut dyn Bus, offset: u16, value: u8) {
        self.dip_mode = offset & 0x100 != 0;
        // Unconfirmed mirroring bit. TN 95-in-1 glitches either way.
        bus.set_name_table_mirroring(MIRRORINGS[usize::from((value >> 3) & 1)]);

        if offset & 0x80 != 0 {
            let bank = (offset >> 4) & 0b111;
            bus.set_prg_16k(bank, bank);
        } else {
            bus.set_prg_32k((offset >> 5) & 0b11);
        }

        bus.set_chr_8k(offset, ChrSource::Rom);
    }

    fn read_high(&self, bus: &dyn Bus, offset: u16) -> ReadResult {
        if self.dip_mode {
            ReadResult::full(self.dip_setting)
        } else {
            ReadResult::full(bus.peek_prg(offset))
        }
    }

    fn state_fields(&mut self) -> Vec<StateField<'_>> {
        vec![
            StateField::bool("latch", &mut self.dip_mode),
            StateField::u8("dip", &mut self.dip_setting),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cartridge::cartridge::test_data;

    #[test]
    fn dip_mode_hides_rom() {
        let mut cartridge = test_data::cartridge(256, 64);
        let mut board = Vt5201::default();
        board.reset(&mut cartridge);

        board.write_high(&mut cartridge, 0x01A0, 0);
        assert_eq!(board.read_high(&cartridge, 0x0000), ReadResult::full(0));

        board.write_high(&mut cartridge, 0x00A0, 0);
        // 16KiB mode, bank 2: the first 8KiB page of it is page 4.
        assert_eq!(board.read_high(&cartridge, 0x0000), ReadResult::full(4));
    }
}
