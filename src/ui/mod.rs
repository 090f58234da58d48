pub mod geometry;
pub mod terminal;

use std::io;

use rand::Rng;
use ratatui::layout::Rect;
use ratatui::style::Color;

use crate::cursor::CursorIndicator;
use crate::game::{Content, GameEngine, Outcome, Status};
use crate::{MIN_HEIGHT, MIN_WIDTH};

pub use geometry::{cell_at, cell_rect, layout};
pub use terminal::TerminalDisplay;

pub const FLASH_COLOR: Color = Color::White;

pub trait Display {
    fn area(&self) -> io::Result<Rect>;
    fn clear(&mut self);
    fn draw_cell_border(&mut self, rect: Rect);
    fn draw_cell_fill(&mut self, rect: Rect, color: Color);
    fn draw_cell_text(&mut self, rect: Rect, symbol: char);
    fn draw_status(&mut self, lines: &[String]);
    fn present(&mut self) -> io::Result<()>;
}

// The board is only drawn, and only clickable, when it fits.
pub fn fits(area: Rect) -> bool {
    area.width >= MIN_WIDTH && area.height >= MIN_HEIGHT
}

pub fn render_frame<D, C, R>(
    display: &mut D,
    engine: &mut GameEngine,
    cursor: &C,
    rng: &mut R,
) -> io::Result<()>
where
    D: Display + ?Sized,
    C: CursorIndicator + ?Sized,
    R: Rng + ?Sized,
{
    let area = display.area()?;
    display.clear();
    if !fits(area) {
        display.draw_status(&[format!("RESIZE TERMINAL (min {MIN_WIDTH}x{MIN_HEIGHT})")]);
        return display.present();
    }
    // Flash is picked after the size check so a pending tap is not spent unseen.
    engine.begin_frame(rng);

    let (board_area, _) = layout(area);
    for cell in engine.board().cells() {
        let rect = cell_rect(board_area, cell.pos);
        if cell.highlighted {
            display.draw_cell_fill(rect, FLASH_COLOR);
        } else {
            if let Content::Marked(player) = cell.content {
                display.draw_cell_text(rect, player.symbol());
            }
            display.draw_cell_border(rect);
        }
    }
    display.draw_status(&status_lines(engine, cursor));
    display.present()
}

pub fn status_lines<C: CursorIndicator + ?Sized>(engine: &GameEngine, cursor: &C) -> Vec<String> {
    let mut lines = Vec::new();
    match engine.status() {
        Status::InProgress => {
            lines.push(format!("TURN  {}", engine.current_turn().symbol()));
            lines.push(String::new());
            lines.extend(cursor.preview());
        }
        Status::Terminal(Outcome::Tie) => {
            lines.push("DRAW".to_string());
        }
        Status::Terminal(_) => match engine.winner() {
            Some(player) => lines.push(format!("{} WINS", player.symbol())),
            None => lines.push("GAME OVER".to_string()),
        },
    }
    lines.push(String::new());
    lines.push(format!("FILLED {}/9", engine.filled_count()));
    lines.push(String::new());
    lines.push("click  place".to_string());
    lines.push("q      quit".to_string());
    lines
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::cursor::GlyphCursor;

    #[derive(Debug, Clone, PartialEq)]
    enum Op {
        Clear,
        Border(Rect),
        Fill(Rect, Color),
        Text(Rect, char),
        Status(Vec<String>),
        Present,
    }

    struct Recorder {
        area: Rect,
        ops: Vec<Op>,
    }

    impl Recorder {
        fn new(width: u16, height: u16) -> Self {
            Self {
                area: Rect::new(0, 0, width, height),
                ops: Vec::new(),
            }
        }

        fn fills(&self) -> usize {
            self.ops.iter().filter(|op| matches!(op, Op::Fill(..))).count()
        }
    }

    impl Display for Recorder {
        fn area(&self) -> io::Result<Rect> {
            Ok(self.area)
        }
        fn clear(&mut self) {
            self.ops.push(Op::Clear);
        }
        fn draw_cell_border(&mut self, rect: Rect) {
            self.ops.push(Op::Border(rect));
        }
        fn draw_cell_fill(&mut self, rect: Rect, color: Color) {
            self.ops.push(Op::Fill(rect, color));
        }
        fn draw_cell_text(&mut self, rect: Rect, symbol: char) {
            self.ops.push(Op::Text(rect, symbol));
        }
        fn draw_status(&mut self, lines: &[String]) {
            self.ops.push(Op::Status(lines.to_vec()));
        }
        fn present(&mut self) -> io::Result<()> {
            self.ops.push(Op::Present);
            Ok(())
        }
    }

    #[test]
    fn fresh_board_draws_nine_borders() {
        let mut display = Recorder::new(84, 24);
        let mut engine = GameEngine::new();
        let mut rng = StdRng::seed_from_u64(1);
        render_frame(&mut display, &mut engine, &GlyphCursor::default(), &mut rng).unwrap();
        assert_eq!(display.ops.first(), Some(&Op::Clear));
        assert_eq!(display.ops.last(), Some(&Op::Present));
        let borders = display.ops.iter().filter(|op| matches!(op, Op::Border(_))).count();
        assert_eq!(borders, 9);
        assert_eq!(display.fills(), 0);
    }

    #[test]
    fn symbol_is_drawn_before_its_border() {
        let mut display = Recorder::new(84, 24);
        let mut engine = GameEngine::new();
        let mut rng = StdRng::seed_from_u64(1);
        engine.attempt_placement(0, 0);
        render_frame(&mut display, &mut engine, &GlyphCursor::default(), &mut rng).unwrap();
        let rect = cell_rect(layout(display.area).0, crate::game::Position::new(0, 0));
        let text = display.ops.iter().position(|op| *op == Op::Text(rect, 'X'));
        let border = display.ops.iter().position(|op| *op == Op::Border(rect));
        assert!(text.unwrap() < border.unwrap());
    }

    #[test]
    fn finished_game_fills_exactly_one_cell_per_frame() {
        let mut engine = GameEngine::new();
        for (r, c) in [(0, 0), (1, 0), (1, 1), (2, 0), (2, 2)] {
            engine.attempt_placement(r, c);
        }
        let mut rng = StdRng::seed_from_u64(9);
        for _ in 0..20 {
            let mut display = Recorder::new(84, 24);
            render_frame(&mut display, &mut engine, &GlyphCursor::default(), &mut rng).unwrap();
            assert_eq!(display.fills(), 1);
            let borders = display.ops.iter().filter(|op| matches!(op, Op::Border(_))).count();
            assert_eq!(borders, 8);
        }
    }

    #[test]
    fn tiny_terminal_asks_for_resize() {
        let mut display = Recorder::new(10, 4);
        let mut engine = GameEngine::new();
        let mut rng = StdRng::seed_from_u64(1);
        render_frame(&mut display, &mut engine, &GlyphCursor::default(), &mut rng).unwrap();
        assert_eq!(display.ops.len(), 3);
        assert!(matches!(&display.ops[1], Op::Status(lines) if lines[0].starts_with("RESIZE")));
    }

    #[test]
    fn tap_flash_waits_for_a_frame_that_shows_the_board() {
        let mut engine = GameEngine::new();
        let mut rng = StdRng::seed_from_u64(1);
        engine.attempt_placement(1, 1);
        engine.attempt_placement(1, 1);

        let mut tiny = Recorder::new(10, 4);
        render_frame(&mut tiny, &mut engine, &GlyphCursor::default(), &mut rng).unwrap();
        assert_eq!(tiny.fills(), 0);

        let mut full = Recorder::new(84, 24);
        render_frame(&mut full, &mut engine, &GlyphCursor::default(), &mut rng).unwrap();
        let rect = cell_rect(layout(full.area).0, crate::game::Position::new(1, 1));
        assert!(full.ops.contains(&Op::Fill(rect, FLASH_COLOR)));
    }

    #[test]
    fn fits_matches_minimum_size() {
        assert!(fits(Rect::new(0, 0, MIN_WIDTH, MIN_HEIGHT)));
        assert!(!fits(Rect::new(0, 0, MIN_WIDTH - 1, MIN_HEIGHT)));
        assert!(!fits(Rect::new(0, 0, MIN_WIDTH, MIN_HEIGHT - 1)));
    }

    #[test]
    fn status_reports_winner_and_tie() {
        let cursor = GlyphCursor::default();
        let mut engine = GameEngine::new();
        assert_eq!(status_lines(&engine, &cursor)[0], "TURN  X");
        for (r, c) in [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)] {
            engine.attempt_placement(r, c);
        }
        assert_eq!(status_lines(&engine, &cursor)[0], "X WINS");

        let mut engine = GameEngine::new();
        for (r, c) in [(0, 0), (0, 1), (0, 2), (1, 1), (1, 0), (1, 2), (2, 1), (2, 0), (2, 2)] {
            engine.attempt_placement(r, c);
        }
        assert_eq!(status_lines(&engine, &cursor)[0], "DRAW");
    }
}
