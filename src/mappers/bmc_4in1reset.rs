use crate::mapper::*;

// BMC-RESETBASED4IN1
// No registers. Each reset moves on to the next game.
pub struct ResetBased4In1 {
    game: u8,
}

impl Default for ResetBased4In1 {
    fn default() -> Self {
        // The first reset wraps this around to game 0.
        Self { game: u8::MAX }
    }
}

impl Mapper for ResetBased4In1 {
    fn reset(&mut self, bus: &mut dyn Bus) {
        self.game = self.game.wrapping_add(1) & 0b11;
        let game = u16::from(self.game);
        bus.set_chr_8k(game, ChrSource::Rom);
        bus.set_prg_16k(game, game);
    }

    fn state_fields(&mut self) -> Vec<StateField<'_>> {
        vec![StateField::u8("latch", &mut self.game)]
    }
}
