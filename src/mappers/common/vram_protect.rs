use crate::bus::{Bus, ChrSource};
use crate::state::StateField;

// Shared by the boards that can write-protect their 8KiB of CHR RAM.
#[derive(Default)]
pub struct VramProtect {
    protected: bool,
}

impl VramProtect {
    // First 32KiB of PRG, CHR RAM, writable.
    pub fn reset(&mut self, bus: &mut dyn Bus) {
        bus.set_prg_32k(0);
        bus.set_chr_8k(0, ChrSource::Ram);
        self.protected = false;
    }

    pub fn set_protected(&mut self, protected: bool) {
        self.protected = protected;
    }

    pub fn is_protected(&self) -> bool {
        self.protected
    }

    pub fn chr_writes_enabled(&self) -> bool {
        !self.protected
    }

    pub fn state_field(&mut self) -> StateField<'_> {
        StateField::bool("vram_protect", &mut self.protected)
    }
}
