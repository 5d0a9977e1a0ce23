use crate::mapper::*;

// KN-42
// Every reset flips between the two 256KiB halves of PRG.
#[derive(Default)]
pub struct Kn42 {
    outer_bank: u8,
}

impl Mapper for Kn42 {
    fn reset(&mut self, bus: &mut dyn Bus) {
        self.outer_bank ^= 0x10;
        let outer_bank = u16::from(self.outer_bank);
        bus.set_prg_16k(outer_bank, outer_bank | 0xF);
        bus.set_chr_8k(0, ChrSource::Ram);
    }

    fn write_high(&mut self, bus: &mut dyn Bus, _offset: u16, value: u8) {
        let (high, low) = splitbits_named!(min=u8, value, "...h .lll");
        bus.set_prg_bank(PrgWindow::First16K, u16::from(self.outer_bank | (low << 1) | high));
    }

    fn has_bus_conflicts(&self) -> HasBusConflicts {
        HasBusConflicts::Yes
    }

    fn state_fields(&mut self) -> Vec<StateField<'_>> {
        vec![StateField::u8("latch", &mut self.outer_bank)]
    }
}
