use crate::mapper::*;
use crate::mappers::bmc_70in1::PrgModeLatch;

const MIRRORINGS: [NameTableMirroring; 2] = [
    NameTableMirroring::Vertical,
    NameTableMirroring::Horizontal,
];

// BMC-800IN1
#[derive(Default)]
pub struct Bmc800In1 {
    prg: PrgModeLatch,
}

impl Mapper for Bmc800In1 {
    fn reset(&mut self, bus: &mut dyn Bus) {
        let last = bus.last_prg_16k_bank();
        bus.set_prg_16k(last, last);
        let source = bus.default_chr_source();
        bus.set_chr_8k(0, source);
        self.prg = PrgModeLatch::default();
    }

    fn write_high(&mut self, bus: &mut dyn Bus, offset: u16, _value: u8) {
        if offset < 0x4000 {
            bus.set_name_table_mirroring(MIRRORINGS[usize::from((offset >> 5) & 1)]);
            self.prg.set_outer(offset);
        } else {
            self.prg.write(offset);
        }

        self.prg.apply(bus);
    }

    fn read_high(&self, bus: &dyn Bus, offset: u16) -> ReadResult {
        self.prg.read(bus, offset)
    }

    fn state_fields(&mut self) -> Vec<StateField<'_>> {
        self.prg.state_fields()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cartridge::cartridge::test_data;

    #[test]
    fn outer_bank_then_inner_bank() {
        let mut cartridge = test_data::cartridge(1024, 0);
        let mut board = Bmc800In1::default();
        board.reset(&mut cartridge);

        board.write_high(&mut cartridge, 0x0002, 0);
        assert_eq!(cartridge.banks().prg_bank(PrgWindow::First16K), 0x10);
        assert_eq!(cartridge.banks().prg_bank(PrgWindow::Last16K), 0x10);

        board.write_high(&mut cartridge, 0x4004, 0);
        assert_eq!(cartridge.banks().prg_bank(PrgWindow::First16K), 0x14);
        assert_eq!(cartridge.banks().prg_bank(PrgWindow::Last16K), 0x17);
        assert_eq!(cartridge.banks().chr_bank(ChrWindow::Whole), 0);
    }
}
