use crate::mapper::*;

// UNL-STUDYNGAME (Study n Game 32-in-1)
pub struct StudyNGame;

impl Mapper for StudyNGame {
    fn write_high(&mut self, bus: &mut dyn Bus, _offset: u16, value: u8) {
        bus.set_prg_32k(value.into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cartridge::cartridge::test_data;

    #[test]
    fn value_selects_32k_bank() {
        let mut cartridge = test_data::cartridge(1024, 0);
        let mut board = StudyNGame;
        board.reset(&mut cartridge);

        board.write_high(&mut cartridge, 0x0000, 5);
        assert_eq!(cartridge.banks().prg_bank(PrgWindow::Whole), 5);
    }
}
