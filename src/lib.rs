pub mod app;
pub mod config;
pub mod cursor;
pub mod error;
pub mod game;
pub mod io;
pub mod logging;
pub mod ui;

pub use config::{
    Cli, Config, BOARD_SIZE, DEFAULT_LOG_FILE, DEFAULT_PAUSE_MS, MIN_HEIGHT, MIN_WIDTH, STATUS_W,
};
pub use cursor::{CursorIndicator, Glyph, GlyphCursor};
pub use error::{GlyphError, GlyphErrorKind};
pub use game::{
    Board, Cell, Content, Diagonal, GameEngine, Line, LineKind, Outcome, Placement, Player,
    Position, Status, Transition,
};
pub use io::{PointerEvent, PointerInput};
pub use ui::Display;
