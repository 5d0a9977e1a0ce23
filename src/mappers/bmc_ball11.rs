use crate::mapper::*;

const MIRRORINGS: [NameTableMirroring; 2] = [
    NameTableMirroring::Vertical,
    NameTableMirroring::Horizontal,
];

// BMC-BALLGAMES-11IN1
#[derive(Default)]
pub struct Ball11In1 {
    mode: u8,
    game: u8,
}

impl Ball11In1 {
    fn update_prg(&self, bus: &mut dyn Bus) {
        let game = u16::from(self.game);
        if self.mode != 0 {
            bus.set_prg_32k(game);
        } else {
            bus.set_prg_16k((game << 1) | (game >> 4), (game << 1) | 0b111);
        }
    }
}

impl Mapper for Ball11In1 {
    fn reset(&mut self, bus: &mut dyn Bus) {
        bus.set_prg_32k(0);
        bus.set_chr_8k(0, ChrSource::Ram);
        self.mode = 2;
        self.game = 0;
    }

    fn write_mid(&mut self, bus: &mut dyn Bus, _offset: u16, value: u8) {
        bus.set_name_table_mirroring(MIRRORINGS[usize::from((value >> 4) & 1)]);
        self.mode = value & 0b10;
        self.update_prg(bus);
    }

    fn write_high(&mut self, bus: &mut dyn Bus, _offset: u16, value: u8) {
        self.game = value & 0x1F;
        self.update_prg(bus);
    }

    fn read_mid(&self, bus: &dyn Bus, offset: u16) -> ReadResult {
        let bank = (u32::from(self.game) << 2) | if self.mode != 0 { 0x23 } else { 0x2F };
        ReadResult::full(bus.peek_prg_rom(bank * 0x2000 + u32::from(offset)))
    }

    fn state_fields(&mut self) -> Vec<StateField<'_>> {
        vec![
            StateField::u8("reg0", &mut self.mode),
            StateField::u8("reg1", &mut self.game),
        ]
    }
}
