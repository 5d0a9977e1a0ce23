use crate::mapper::*;

const MIRRORINGS: [NameTableMirroring; 2] = [
    NameTableMirroring::Vertical,
    NameTableMirroring::Horizontal,
];

// BMC-12IN1
#[derive(Default)]
pub struct Bmc12In1 {
    regs: [u8; 3],
}

impl Bmc12In1 {
    fn update_banks(&self, bus: &mut dyn Bus) {
        let [low, high, outer] = self.regs.map(u16::from);
        let outer_bank = (outer & 0b11) << 3;

        let source = bus.default_chr_source();
        bus.set_chr_4k(ChrWindow::First4K, (low >> 3) | (outer_bank << 2), source);
        bus.set_chr_4k(ChrWindow::Last4K, (high >> 3) | (outer_bank << 2), source);

        if outer & 0b1000 != 0 {
            bus.set_prg_32k(((low & 0b111) >> 1) | outer_bank);
        } else {
            bus.set_prg_16k((low & 0b111) | outer_bank, 0b111 | outer_bank);
        }

        bus.set_name_table_mirroring(MIRRORINGS[usize::from((outer >> 2) & 1)]);
    }
}

impl Mapper for Bmc12In1 {
    fn reset(&mut self, bus: &mut dyn Bus) {
        start_like_nrom(bus);
        self.regs = [0; 3];
        self.update_banks(bus);
    }

    fn write_high(&mut self, bus: &mut dyn Bus, offset: u16, value: u8) {
        // 0x8000-0x9FFF has no register.
        match usize::from(offset >> 13) {
            0 => {}
            n => self.regs[n - 1] = value,
        }

        self.update_banks(bus);
    }

    fn state_fields(&mut self) -> Vec<StateField<'_>> {
        vec![StateField::bytes("reg", &mut self.regs)]
    }
}
