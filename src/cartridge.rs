pub mod bank_state;
pub mod cartridge;
