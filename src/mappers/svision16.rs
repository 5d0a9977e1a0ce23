use crate::mapper::*;

const MIRRORINGS: [NameTableMirroring; 2] = [
    NameTableMirroring::Vertical,
    NameTableMirroring::Horizontal,
];

// Supervision 16-in-1
// The first two 16KiB banks of PRG hold the menu. Games start after them.
#[derive(Default)]
pub struct Supervision16In1 {
    outer: u8,
    inner: u8,
}

impl Supervision16In1 {
    fn update_prg(&self, bus: &mut dyn Bus) {
        if self.outer & 0x10 == 0 {
            bus.set_prg_16k(0, 1);
            return;
        }

        let outer_bank = u16::from(self.outer & 0xF) << 3;
        bus.set_prg_16k(
            (outer_bank | u16::from(self.inner & 0b111)) + 2,
            (outer_bank | 0b111) + 2,
        );
    }
}

impl Mapper for Supervision16In1 {
    fn reset(&mut self, bus: &mut dyn Bus) {
        start_like_nrom(bus);
        self.outer = 0;
        self.inner = 0;
    }

    fn write_mid(&mut self, bus: &mut dyn Bus, _offset: u16, value: u8) {
        self.outer = value;
        self.update_prg(bus);
        bus.set_name_table_mirroring(MIRRORINGS[usize::from(value & 0x20 != 0)]);
    }

    fn write_high(&mut self, bus: &mut dyn Bus, _offset: u16, value: u8) {
        self.inner = value;
        self.update_prg(bus);
    }

    // 0x6000-0x7FFF shows the last 8KiB of the outer 128KiB block, past the menu.
    fn read_mid(&self, bus: &dyn Bus, offset: u16) -> ReadResult {
        let bank = ((u32::from(self.outer & 0xF) << 4) | 0xF) + 4;
        ReadResult::full(bus.peek_prg_rom(bank * 0x2000 + u32::from(offset & 0x1FFF)))
    }

    fn state_fields(&mut self) -> Vec<StateField<'_>> {
        vec![
            StateField::u8("latch1", &mut self.outer),
            StateField::u8("latch2", &mut self.inner),
        ]
    }
}
