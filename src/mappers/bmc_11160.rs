use crate::mapper::*;

// BMC-11160 by TXC (6-in-1 MGC-023)
pub struct Bmc11160;

impl Mapper for Bmc11160 {
    fn write_high(&mut self, bus: &mut dyn Bus, _offset: u16, value: u8) {
        let (vertical, game, chr_bank) = splitbits_named!(min=u16, value, "v.gg ..cc");
        bus.set_prg_32k(game);
        bus.set_chr_8k((game << 2) | chr_bank, ChrSource::Rom);
        let mirroring = if vertical == 1 {
            NameTableMirroring::Vertical
        } else {
            NameTableMirroring::Horizontal
        };
        bus.set_name_table_mirroring(mirroring);
    }
}
