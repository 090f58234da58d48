use rand::seq::SliceRandom;
use rand::Rng;

use crate::game::Position;

use super::GameEngine;

impl GameEngine {
    // A pending tap wins for one frame, else one random cell of the set.
    pub fn begin_frame<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<Position> {
        self.board_mut().clear_highlights();
        let flash = self
            .tap_flash
            .take()
            .or_else(|| self.highlight.choose(rng).copied());
        if let Some(pos) = flash {
            self.board_mut().set_highlighted(pos);
        }
        flash
    }
}
