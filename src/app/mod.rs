use std::io::{self, stdout, Stdout};
use std::thread;
use std::time::Duration;

use anyhow::Context;
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use crossterm::terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen};
use rand::Rng;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tracing::{debug, info};

use crate::config::Config;
use crate::cursor::{CursorIndicator, GlyphCursor};
use crate::game::{GameEngine, Player, Transition};
use crate::io::{PointerEvent, PointerInput, TerminalInput};
use crate::ui::{cell_at, fits, layout, render_frame, Display, TerminalDisplay};

type Term = Terminal<CrosstermBackend<Stdout>>;

pub fn run(config: &Config) -> anyhow::Result<()> {
    // Glyph problems are fatal before the terminal is touched.
    let mut cursor = GlyphCursor::from_paths(config.cursor_x.as_deref(), config.cursor_o.as_deref())?;
    let mut tui = TuiGuard::new().context("failed to set up terminal")?;
    let mut rng = rand::thread_rng();
    let engine = play(
        &mut tui.display,
        &mut TerminalInput,
        &mut cursor,
        &mut rng,
        config.pause,
    )?;
    info!(status = ?engine.status(), filled = engine.filled_count(), "session closed");
    Ok(())
}

// One pointer event, one redraw, one pause per frame. A close request still
// lets the current frame draw.
pub fn play<D, P, C, R>(
    display: &mut D,
    input: &mut P,
    cursor: &mut C,
    rng: &mut R,
    pause: Duration,
) -> io::Result<GameEngine>
where
    D: Display + ?Sized,
    P: PointerInput + ?Sized,
    C: CursorIndicator + ?Sized,
    R: Rng + ?Sized,
{
    let mut engine = GameEngine::new();
    cursor.activate(Player::X);
    let mut close_requested = false;

    while !close_requested {
        match input.poll(Duration::ZERO)? {
            PointerEvent::Close => {
                info!("close requested");
                close_requested = true;
            }
            PointerEvent::Release { column, row } => {
                handle_click(display, &mut engine, cursor, column, row)?;
            }
            PointerEvent::Nothing => {}
        }
        render_frame(display, &mut engine, cursor, rng)?;
        thread::sleep(pause);
    }
    Ok(engine)
}

fn handle_click<D, C>(
    display: &D,
    engine: &mut GameEngine,
    cursor: &mut C,
    column: u16,
    row: u16,
) -> io::Result<()>
where
    D: Display + ?Sized,
    C: CursorIndicator + ?Sized,
{
    let area = display.area()?;
    if !fits(area) {
        debug!(column, row, "click while the board is hidden");
        return Ok(());
    }
    let (board, _) = layout(area);
    let Some(pos) = cell_at(board, column, row) else {
        debug!(column, row, "click outside the board");
        return Ok(());
    };
    if let Transition::TurnPassed(next) = engine.attempt_placement(pos.row, pos.col) {
        cursor.activate(next);
    }
    Ok(())
}

struct TuiGuard {
    display: TerminalDisplay<CrosstermBackend<Stdout>>,
}

impl TuiGuard {
    fn new() -> io::Result<Self> {
        enable_raw_mode()?;
        let mut stdout = stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal: Term = Terminal::new(backend)?;
        terminal.hide_cursor()?;
        Ok(Self {
            display: TerminalDisplay::new(terminal),
        })
    }
}

impl Drop for TuiGuard {
    fn drop(&mut self) {
        let terminal = self.display.terminal_mut();
        let _ = disable_raw_mode();
        let _ = execute!(terminal.backend_mut(), DisableMouseCapture, LeaveAlternateScreen);
        let _ = terminal.show_cursor();
    }
}
