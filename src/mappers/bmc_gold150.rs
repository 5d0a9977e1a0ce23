use crate::mapper::*;
use crate::mappers::bmc_gold260::select_banks;

// BMC-GOLDEN150IN1
// Golden 260-in-1 with a smaller outer bank and an open bus latch over PRG.
#[derive(Default)]
pub struct Golden150In1 {
    open_bus: bool,
}

impl Mapper for Golden150In1 {
    fn reset(&mut self, bus: &mut dyn Bus) {
        start_like_nrom(bus);
        self.open_bus = false;
    }

    fn write_high(&mut self, bus: &mut dyn Bus, offset: u16, _value: u8) {
        let bank = (offset & 0x1F) | ((offset & 0x200) >> 4);
        self.open_bus = offset & 0x100 != 0;
        select_banks(bus, offset, bank);
    }

    fn read_high(&self, bus: &dyn Bus, offset: u16) -> ReadResult {
        if self.open_bus {
            ReadResult::OPEN_BUS
        } else {
            ReadResult::full(bus.peek_prg(offset))
        }
    }

    fn state_fields(&mut self) -> Vec<StateField<'_>> {
        vec![StateField::bool("latch", &mut self.open_bus)]
    }
}
