use crate::mapper::*;

const MIRRORINGS: [NameTableMirroring; 2] = [
    NameTableMirroring::Vertical,
    NameTableMirroring::Horizontal,
];

// Caltron 6-in-1
#[derive(Default)]
pub struct Caltron6In1 {
    outer_latch: u8,
    inner_chr_bank: u8,
}

impl Caltron6In1 {
    fn update_chr(&self, bus: &mut dyn Bus) {
        let chr_bank = ((self.outer_latch >> 1) & 0b1100) | self.inner_chr_bank;
        bus.set_chr_8k(chr_bank.into(), ChrSource::Rom);
    }
}

impl Mapper for Caltron6In1 {
    fn reset(&mut self, bus: &mut dyn Bus) {
        bus.set_prg_32k(0);
        bus.set_chr_8k(0, ChrSource::Rom);
        self.outer_latch = 0;
        self.inner_chr_bank = 0;
    }

    fn write_mid(&mut self, bus: &mut dyn Bus, offset: u16, _value: u8) {
        // Only 0x6000-0x67FF is decoded.
        if offset & 0x1800 != 0 {
            return;
        }

        self.outer_latch = (offset & 0x3F) as u8;
        bus.set_prg_32k(offset & 0b111);
        self.update_chr(bus);
        bus.set_name_table_mirroring(MIRRORINGS[usize::from(offset & 0x20 != 0)]);
    }

    fn write_high(&mut self, bus: &mut dyn Bus, _offset: u16, value: u8) {
        // The inner CHR bank can only be changed once the outer latch enables it.
        if self.outer_latch & 0b100 != 0 {
            self.inner_chr_bank = value & 0b11;
            self.update_chr(bus);
        }
    }

    fn has_bus_conflicts(&self) -> HasBusConflicts {
        HasBusConflicts::Yes
    }

    fn state_fields(&mut self) -> Vec<StateField<'_>> {
        vec![
            StateField::u8("latch", &mut self.outer_latch),
            StateField::u8("reg", &mut self.inner_chr_bank),
        ]
    }
}
