use crate::mapper::*;

const MIRRORINGS: [NameTableMirroring; 2] = [
    NameTableMirroring::Vertical,
    NameTableMirroring::Horizontal,
];

// BMC-70IN1
// Shares its PRG decoding with BMC-800IN1, but has CHR ROM.
#[derive(Default)]
pub struct Bmc70In1 {
    prg: PrgModeLatch,
}

impl Mapper for Bmc70In1 {
    fn reset(&mut self, bus: &mut dyn Bus) {
        let last = bus.last_prg_16k_bank();
        bus.set_prg_16k(last, last);
        bus.set_chr_8k(0, ChrSource::Rom);
        self.prg = PrgModeLatch::default();
    }

    fn write_high(&mut self, bus: &mut dyn Bus, offset: u16, _value: u8) {
        if offset < 0x4000 {
            bus.set_name_table_mirroring(MIRRORINGS[usize::from((offset >> 5) & 1)]);
            bus.set_chr_8k(offset & 0b111, ChrSource::Rom);
        } else {
            self.prg.write(offset);
            self.prg.apply(bus);
        }
    }

    fn read_high(&self, bus: &dyn Bus, offset: u16) -> ReadResult {
        self.prg.read(bus, offset)
    }

    fn state_fields(&mut self) -> Vec<StateField<'_>> {
        self.prg.state_fields()
    }
}

// Per A4-A5: the address bits kept in the first 16KiB bank, and the bits ORed in for the second.
// Layout 1 also switches the menu to its DIP-reading mode.
const PRG_LAYOUTS: [(u8, u8); 4] = [
    (0b111, 0b111),
    (0b111, 0b111),
    (0b110, 0b001),
    (0b111, 0b000),
];

// The PRG register pair and the DIP-reading mode of the 70-in-1 and 800-in-1 boards.
#[derive(Default)]
pub struct PrgModeLatch {
    regs: [u8; 2],
    mode: u8,
}

impl PrgModeLatch {
    pub fn write(&mut self, offset: u16) {
        let layout = usize::from((offset >> 4) & 0b11);
        let (low_mask, high_bits) = PRG_LAYOUTS[layout];
        self.mode = u8::from(layout == 1);
        self.regs[0] = (self.regs[0] & 0x38) | (offset as u8 & low_mask);
        self.regs[1] = self.regs[0] | high_bits;
    }

    // Writes below 0xC000 carry the outer bank on the 800-in-1.
    pub fn set_outer(&mut self, offset: u16) {
        let outer = ((offset << 3) & 0x38) as u8;
        self.regs[0] |= outer;
        self.regs[1] |= outer;
    }

    pub fn apply(&self, bus: &mut dyn Bus) {
        bus.set_prg_16k(self.regs[0].into(), self.regs[1].into());
    }

    // In mode 1 the low address bits are replaced, selecting a DIP-dependent menu entry.
    pub fn read(&self, bus: &dyn Bus, offset: u16) -> ReadResult {
        let offset = if self.mode == 0 { offset } else { (offset & 0x7FF0) | u16::from(self.mode) };
        ReadResult::full(bus.peek_prg(offset))
    }

    pub fn state_fields(&mut self) -> Vec<StateField<'_>> {
        vec![
            StateField::bytes("reg", &mut self.regs),
            StateField::u8("mode", &mut self.mode),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cartridge::cartridge::test_data;

    #[test]
    fn four_prg_layouts() {
        let mut cartridge = test_data::cartridge(256, 64);
        let mut board = Bmc70In1::default();
        board.reset(&mut cartridge);
        assert_eq!(cartridge.banks().prg_bank(PrgWindow::First16K), 15);

        board.write_high(&mut cartridge, 0x4003, 0);
        assert_eq!(cartridge.banks().prg_bank(PrgWindow::First16K), 3);
        assert_eq!(cartridge.banks().prg_bank(PrgWindow::Last16K), 7);

        board.write_high(&mut cartridge, 0x4023, 0);
        assert_eq!(cartridge.banks().prg_bank(PrgWindow::First16K), 2);
        assert_eq!(cartridge.banks().prg_bank(PrgWindow::Last16K), 3);

        board.write_high(&mut cartridge, 0x4035, 0);
        assert_eq!(cartridge.banks().prg_bank(PrgWindow::First16K), 5);
        assert_eq!(cartridge.banks().prg_bank(PrgWindow::Last16K), 5);
    }

    #[test]
    fn mode_one_replaces_low_address_bits() {
        let prg_rom: Vec<u8> = (0..0x10000).map(|i| (i & 0xFF) as u8).collect();
        let mut cartridge = crate::cartridge::cartridge::Cartridge::new(
            "dip", prg_rom, vec![0; 0x2000], NameTableMirroring::Vertical).unwrap();
        let mut board = Bmc70In1::default();
        board.reset(&mut cartridge);

        board.write_high(&mut cartridge, 0x4010, 0);
        assert_eq!(board.read_high(&cartridge, 0x0123), ReadResult::full(0x21));
        board.write_high(&mut cartridge, 0x4000, 0);
        assert_eq!(board.read_high(&cartridge, 0x0123), ReadResult::full(0x23));
    }
}
