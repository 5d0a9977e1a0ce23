use crate::mapper::*;

const MIRRORINGS: [NameTableMirroring; 2] = [
    NameTableMirroring::Vertical,
    NameTableMirroring::Horizontal,
];

// BMC-72IN1, BMC-110IN1 (72-in-1, 115-in-1)
#[derive(Default)]
pub struct Bmc72In1 {
    // Four nibbles of RAM, mirrored across 0x5800-0x5FFF.
    nibble_ram: [u8; 4],
}

impl Mapper for Bmc72In1 {
    fn write_low(&mut self, _bus: &mut dyn Bus, offset: u16, value: u8) {
        if offset >= 0x1800 {
            self.nibble_ram[usize::from(offset & 0b11)] = value & 0xF;
        }
    }

    fn read_low(&self, _bus: &dyn Bus, offset: u16) -> ReadResult {
        if offset >= 0x1800 {
            ReadResult::full(self.nibble_ram[usize::from(offset & 0b11)])
        } else {
            ReadResult::OPEN_BUS
        }
    }

    fn write_high(&mut self, bus: &mut dyn Bus, offset: u16, _value: u8) {
        let fields = splitbits!(min=u16, offset, ".hmu bbbb bbcc cccc");
        let high = fields.h << 6;
        let bank = high | fields.b;
        let mode = fields.u ^ 1;
        bus.set_prg_16k(bank & !mode, bank | mode);
        bus.set_chr_8k(high | fields.c, ChrSource::Rom);
        bus.set_name_table_mirroring(MIRRORINGS[usize::from(fields.m)]);
    }

    fn state_fields(&mut self) -> Vec<StateField<'_>> {
        vec![StateField::bytes("extra_ram", &mut self.nibble_ram)]
    }
}
