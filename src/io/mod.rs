use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEventKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEvent {
    Nothing,
    Close,
    // primary button released at a screen coordinate
    Release { column: u16, row: u16 },
}

pub trait PointerInput {
    fn poll(&mut self, timeout: Duration) -> io::Result<PointerEvent>;
}

// Mouse capture must already be enabled.
pub struct TerminalInput;

impl PointerInput for TerminalInput {
    fn poll(&mut self, timeout: Duration) -> io::Result<PointerEvent> {
        next_event(
            |wait| {
                if event::poll(wait)? {
                    event::read().map(Some)
                } else {
                    Ok(None)
                }
            },
            timeout,
        )
    }
}

// Skips motion and other noise already queued so a click is never stuck
// behind it; returns at most one meaningful event.
fn next_event<F>(mut source: F, timeout: Duration) -> io::Result<PointerEvent>
where
    F: FnMut(Duration) -> io::Result<Option<Event>>,
{
    let mut wait = timeout;
    while let Some(ev) = source(wait)? {
        let pointer = translate(ev);
        if pointer != PointerEvent::Nothing {
            return Ok(pointer);
        }
        wait = Duration::ZERO;
    }
    Ok(PointerEvent::Nothing)
}

fn translate(ev: Event) -> PointerEvent {
    match ev {
        Event::Mouse(mouse) => match mouse.kind {
            MouseEventKind::Up(MouseButton::Left) => PointerEvent::Release {
                column: mouse.column,
                row: mouse.row,
            },
            _ => PointerEvent::Nothing,
        },
        Event::Key(key) if is_close_key(key) => PointerEvent::Close,
        _ => PointerEvent::Nothing,
    }
}

fn is_close_key(key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => true,
        KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}
