// The bits a cartridge drives on a read. Undriven bits keep whatever was last on the data bus.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct ReadResult {
    pub value: u8,
    pub mask: u8,
}

impl ReadResult {
    pub const OPEN_BUS: Self = Self { value: 0, mask: 0b0000_0000 };

    pub fn full(value: u8) -> Self {
        Self { value, mask: 0b1111_1111 }
    }

    pub fn partial(value: u8, mask: u8) -> Self {
        Self { value: value & mask, mask }
    }

    pub fn is_open_bus(self) -> bool {
        self.mask == 0b0000_0000
    }

    pub fn resolve(self, data_bus_value: u8) -> u8 {
        (self.value & self.mask) | (data_bus_value & !self.mask)
    }

    // Boards without a bus-conflict guard let ROM drive the data bus while the CPU writes a latch
    // that sits at the same address. The latch sees the AND of the two values.
    // Bits that ROM doesn't drive pass the written value through unmodified.
    pub fn bus_conflict(self, register_value: u8) -> u8 {
        (self.value & register_value & self.mask) | (register_value & !self.mask)
    }
}
