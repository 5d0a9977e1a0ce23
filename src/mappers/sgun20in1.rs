use crate::mapper::*;

// BMC-SUPERGUN-20IN1
#[derive(Default)]
pub struct SuperGun20In1;

impl SuperGun20In1 {
    // Only 0x8000-0x8FFF and 0xF000-0xFFFF are decoded. Hogan's Alley sweeps through 0xE6xx-0xE8xx.
    pub fn select_game(&self, bus: &mut dyn Bus, offset: u16) {
        if !matches!(offset & 0x7000, 0x0000 | 0x7000) {
            return;
        }

        let bank = (offset >> 2) & bus.last_prg_16k_bank();
        bus.set_prg_16k(bank, bank);
        bus.set_chr_8k(bank, ChrSource::Rom);
    }
}

impl Mapper for SuperGun20In1 {
    fn reset(&mut self, bus: &mut dyn Bus) {
        bus.set_prg_16k(0, 0);
        bus.set_chr_8k(0, ChrSource::Rom);
        bus.set_name_table_mirroring(NameTableMirroring::Vertical);
    }

    fn write_high(&mut self, bus: &mut dyn Bus, offset: u16, _value: u8) {
        self.select_game(bus, offset);
    }
}
