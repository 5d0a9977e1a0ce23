use crate::mapper::*;

const MIRRORINGS: [NameTableMirroring; 2] = [
    NameTableMirroring::Vertical,
    NameTableMirroring::Horizontal,
];

// BMC-G-146 (1994 Super HIK 14-in-1)
pub struct G146;

impl Mapper for G146 {
    fn write_high(&mut self, bus: &mut dyn Bus, offset: u16, _value: u8) {
        let mut low = offset & 0x1F;
        // NROM-128 unless one of the other modes is selected.
        let mut high = low;
        if offset & 0x800 != 0 {
            // UNROM
            high |= 0b111;
        } else if offset & 0x40 == 0 {
            // NROM-256
            low &= !1;
            high |= 1;
        }

        bus.set_prg_16k(low, high);
        bus.set_name_table_mirroring(MIRRORINGS[usize::from((offset >> 7) & 1)]);
    }
}
