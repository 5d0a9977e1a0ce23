use crate::mapper::*;

// BMC-22GAMES
// Power on lands in Quarter Back, the built-in UNROM game. Every later reset goes to the menu.
#[derive(Default)]
pub struct Games22 {
    menu_selected: bool,
    reset_armed: bool,
}

impl Mapper for Games22 {
    fn power_on(&mut self, bus: &mut dyn Bus) {
        start_like_nrom(bus);
        self.menu_selected = false;
        self.reset_armed = false;
    }

    fn reset(&mut self, bus: &mut dyn Bus) {
        if self.reset_armed {
            bus.set_prg_32k(4);
            self.menu_selected = true;
        } else {
            bus.set_prg_16k(0, 7);
            bus.set_name_table_mirroring(NameTableMirroring::Vertical);
            self.reset_armed = true;
        }

        bus.set_chr_8k(0, ChrSource::Ram);
    }

    fn write_high(&mut self, bus: &mut dyn Bus, _offset: u16, value: u8) {
        if !self.menu_selected {
            bus.set_prg_bank(PrgWindow::First16K, u16::from(value & 0b111));
            return;
        }

        let fields = splitbits!(min=u16, value, ".vub bbbb");
        let bank = fields.b + 8;
        let mode = fields.u ^ 1;
        bus.set_prg_16k(bank & !mode, bank | mode);
        let mirroring = if fields.v == 1 {
            NameTableMirroring::Vertical
        } else {
            NameTableMirroring::Horizontal
        };
        bus.set_name_table_mirroring(mirroring);
    }

    fn state_fields(&mut self) -> Vec<StateField<'_>> {
        vec![
            StateField::bool("latch", &mut self.menu_selected),
            StateField::bool("reset", &mut self.reset_armed),
        ]
    }
}
