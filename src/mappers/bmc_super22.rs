use crate::mapper::*;

const MIRRORINGS: [NameTableMirroring; 4] = [
    NameTableMirroring::OneScreenLow,
    NameTableMirroring::Vertical,
    NameTableMirroring::Horizontal,
    NameTableMirroring::OneScreenHigh,
];

// BMC-SUPER22GAMES
pub struct Super22Games;

impl Mapper for Super22Games {
    fn write_high(&mut self, bus: &mut dyn Bus, _offset: u16, value: u8) {
        let (mirroring, nrom_128, bank) = splitbits_named!(value, "mmnb bbbb");
        let bank = u16::from(bank);
        if nrom_128 {
            bus.set_prg_16k(bank, bank);
        } else {
            bus.set_prg_32k(bank >> 1);
        }

        bus.set_name_table_mirroring(MIRRORINGS[usize::from(mirroring)]);
    }
}
