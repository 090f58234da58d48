use ratatui::layout::{Constraint, Direction, Layout, Rect};

use crate::game::Position;
use crate::{BOARD_SIZE, STATUS_W};

pub fn layout(area: Rect) -> (Rect, Rect) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(STATUS_W)])
        .split(area);
    (cols[0], cols[1])
}

pub fn cell_rect(board: Rect, pos: Position) -> Rect {
    let width = board.width / BOARD_SIZE as u16;
    let height = board.height / BOARD_SIZE as u16;
    Rect {
        x: board.x + width * pos.col as u16,
        y: board.y + height * pos.row as u16,
        width,
        height,
    }
}

// Leftover columns/rows from the division belong to no cell.
pub fn cell_at(board: Rect, x: u16, y: u16) -> Option<Position> {
    (0..BOARD_SIZE)
        .flat_map(|row| (0..BOARD_SIZE).map(move |col| Position::new(row, col)))
        .find(|&pos| rect_contains(cell_rect(board, pos), x, y))
}

fn rect_contains(r: Rect, x: u16, y: u16) -> bool {
    x >= r.x && x < r.x + r.width && y >= r.y && y < r.y + r.height
}
