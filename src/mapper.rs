pub use splitbits::{splitbits, splitbits_named, combinebits};

pub use crate::bus::{Bus, ChrSource, ChrWindow, PrgWindow};
pub use crate::mappers::common::vram_protect::VramProtect;
pub use crate::memory::name_table_mirroring::NameTableMirroring;
pub use crate::memory::read_result::ReadResult;
pub use crate::state::StateField;

use log::debug;

// The bank decoding logic of a single cartridge board.
//
// Write and read hooks receive the offset into their address window:
// * low:  0x4100-0x5FFF, offset from 0x4000
// * mid:  0x6000-0x7FFF, offset from 0x6000
// * high: 0x8000-0xFFFF, offset from 0x8000
// Every hook is total. Boards ignore whatever they don't decode.
pub trait Mapper {
    // Most boards come up like NROM: the first 32KiB of PRG and the first 8KiB of CHR.
    fn power_on(&mut self, bus: &mut dyn Bus) {
        start_like_nrom(bus);
    }

    // Called after power_on and on every soft reset.
    fn reset(&mut self, bus: &mut dyn Bus) {
        start_like_nrom(bus);
    }

    fn write_low(&mut self, _bus: &mut dyn Bus, _offset: u16, _value: u8) {}
    fn write_mid(&mut self, _bus: &mut dyn Bus, _offset: u16, _value: u8) {}
    fn write_high(&mut self, _bus: &mut dyn Bus, _offset: u16, _value: u8) {}

    fn read_low(&self, _bus: &dyn Bus, _offset: u16) -> ReadResult {
        ReadResult::OPEN_BUS
    }

    fn read_mid(&self, _bus: &dyn Bus, _offset: u16) -> ReadResult {
        ReadResult::OPEN_BUS
    }

    fn read_high(&self, bus: &dyn Bus, offset: u16) -> ReadResult {
        ReadResult::full(bus.peek_prg(offset))
    }

    // Boards whose high latches aren't guarded against ROM driving the data bus.
    fn has_bus_conflicts(&self) -> HasBusConflicts { HasBusConflicts::No }

    // Whether the PPU can currently write to CHR RAM.
    fn chr_writes_enabled(&self) -> bool { true }

    fn state_fields(&mut self) -> Vec<StateField<'_>> { Vec::new() }

    fn supported(self) -> LookupResult where Self: Sized, Self: 'static {
        LookupResult::Supported(Box::new(self))
    }
}

pub fn start_like_nrom(bus: &mut dyn Bus) {
    bus.set_prg_32k(0);
    let source = bus.default_chr_source();
    bus.set_chr_8k(0, source);
}

pub fn cpu_write(mapper: &mut dyn Mapper, bus: &mut dyn Bus, address: u16, value: u8) {
    debug!(target: "mapperwrites", "Cartridge write: ${address:04X} <- ${value:02X}");
    match address {
        0x0000..=0x40FF => { /* Not cartridge space. */ }
        0x4100..=0x5FFF => mapper.write_low(bus, address - 0x4000, value),
        0x6000..=0x7FFF => mapper.write_mid(bus, address - 0x6000, value),
        0x8000..=0xFFFF => {
            let offset = address - 0x8000;
            let value = if mapper.has_bus_conflicts() == HasBusConflicts::Yes {
                let rom_value = ReadResult::full(bus.peek_prg(offset));
                let effective = rom_value.bus_conflict(value);
                if effective != value {
                    debug!(target: "mapperwrites", "Bus conflict: ${value:02X} became ${effective:02X}");
                }

                effective
            } else {
                value
            };

            mapper.write_high(bus, offset, value);
        }
    }
}

pub fn cpu_peek(mapper: &dyn Mapper, bus: &dyn Bus, address: u16) -> ReadResult {
    let result = match address {
        0x0000..=0x40FF => ReadResult::OPEN_BUS,
        0x4100..=0x5FFF => mapper.read_low(bus, address - 0x4000),
        0x6000..=0x7FFF => mapper.read_mid(bus, address - 0x6000),
        0x8000..=0xFFFF => mapper.read_high(bus, address - 0x8000),
    };
    debug!(target: "mapperreads", "Cartridge read: ${address:04X} -> {result:?}");
    result
}

#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum HasBusConflicts {
    Yes,
    No,
}

// This should be in mapper_list.rs instead, but we can't write the supported() method there.
pub enum LookupResult {
    Supported(Box<dyn Mapper>),
    UnassignedMapper,
}
