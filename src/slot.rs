use crate::cartridge::cartridge::Cartridge;
use crate::mapper::{self, Mapper};
use crate::mapper_list::Board;
use crate::state::StateField;

// A cartridge plugged into a console: the board's bank decoding logic plus the chips it drives.
pub struct CartridgeSlot {
    board: Board,
    mapper: Box<dyn Mapper>,
    cartridge: Cartridge,
    // The last value seen on the CPU data bus, which open bus reads return.
    data_bus: u8,
}

impl CartridgeSlot {
    pub fn insert(board: Board, mut cartridge: Cartridge) -> CartridgeSlot {
        let mut mapper = board.mapper();
        mapper.power_on(&mut cartridge);
        mapper.reset(&mut cartridge);
        CartridgeSlot { board, mapper, cartridge, data_bus: 0 }
    }

    pub fn board(&self) -> Board {
        self.board
    }

    pub fn cartridge(&self) -> &Cartridge {
        &self.cartridge
    }

    pub fn reset(&mut self) {
        self.mapper.reset(&mut self.cartridge);
    }

    pub fn cpu_write(&mut self, address: u16, value: u8) {
        self.data_bus = value;
        mapper::cpu_write(self.mapper.as_mut(), &mut self.cartridge, address, value);
    }

    pub fn cpu_read(&mut self, address: u16) -> u8 {
        let result = mapper::cpu_peek(self.mapper.as_ref(), &self.cartridge, address);
        self.data_bus = result.resolve(self.data_bus);
        self.data_bus
    }

    pub fn ppu_read(&self, address: u16) -> u8 {
        self.cartridge.ppu_peek(address)
    }

    pub fn ppu_write(&mut self, address: u16, value: u8) {
        if self.mapper.chr_writes_enabled() {
            self.cartridge.ppu_write(address, value);
        }
    }

    pub fn state_fields(&mut self) -> Vec<StateField<'_>> {
        self.mapper.state_fields()
    }
}
