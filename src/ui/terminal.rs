use std::io;

use ratatui::backend::Backend;
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

use super::{layout, Display};

const BORDER_COLOR: Color = Color::White;

// Large marks for cells with room to spare.
const BIG_X: [&str; 5] = ["█   █", " █ █ ", "  █  ", " █ █ ", "█   █"];
const BIG_O: [&str; 5] = [" ███ ", "█   █", "█   █", "█   █", " ███ "];

enum DrawOp {
    Border(Rect),
    Fill(Rect, Color),
    Text(Rect, char),
    Status(Vec<String>),
}

// Draw calls are buffered and flushed in one terminal.draw on present.
pub struct TerminalDisplay<B: Backend> {
    terminal: Terminal<B>,
    ops: Vec<DrawOp>,
}

impl<B: Backend> TerminalDisplay<B> {
    pub fn new(terminal: Terminal<B>) -> Self {
        Self {
            terminal,
            ops: Vec::new(),
        }
    }

    pub fn terminal_mut(&mut self) -> &mut Terminal<B> {
        &mut self.terminal
    }
}

impl<B: Backend> Display for TerminalDisplay<B> {
    fn area(&self) -> io::Result<Rect> {
        self.terminal.size()
    }

    fn clear(&mut self) {
        self.ops.clear();
    }

    fn draw_cell_border(&mut self, rect: Rect) {
        self.ops.push(DrawOp::Border(rect));
    }

    fn draw_cell_fill(&mut self, rect: Rect, color: Color) {
        self.ops.push(DrawOp::Fill(rect, color));
    }

    fn draw_cell_text(&mut self, rect: Rect, symbol: char) {
        self.ops.push(DrawOp::Text(rect, symbol));
    }

    fn draw_status(&mut self, lines: &[String]) {
        self.ops.push(DrawOp::Status(lines.to_vec()));
    }

    fn present(&mut self) -> io::Result<()> {
        let ops = std::mem::take(&mut self.ops);
        self.terminal.draw(|frame| {
            let (_, status_rect) = layout(frame.size());
            for op in &ops {
                match op {
                    DrawOp::Border(rect) => {
                        let block = Block::default()
                            .borders(Borders::ALL)
                            .border_style(Style::default().fg(BORDER_COLOR));
                        frame.render_widget(block, *rect);
                    }
                    DrawOp::Fill(rect, color) => {
                        let block = Block::default().style(Style::default().bg(*color));
                        frame.render_widget(block, *rect);
                    }
                    DrawOp::Text(rect, symbol) => draw_symbol(frame, *rect, *symbol),
                    DrawOp::Status(lines) => {
                        let text: Vec<Line> = lines.iter().map(|l| Line::raw(l.as_str())).collect();
                        let panel = Paragraph::new(text).block(
                            Block::default()
                                .title("TIC TAC TOE")
                                .border_type(BorderType::Thick)
                                .borders(Borders::ALL),
                        );
                        frame.render_widget(panel, status_rect);
                    }
                }
            }
        })?;
        Ok(())
    }
}

// Centres the mark inside the cell, big when it fits inside the border.
fn draw_symbol(frame: &mut Frame, rect: Rect, symbol: char) {
    let art = match symbol {
        'X' => Some(&BIG_X),
        'O' => Some(&BIG_O),
        _ => None,
    };
    let lines: Vec<String> = match art {
        Some(art) if rect.width >= 7 && rect.height >= 7 => {
            art.iter().map(|row| row.to_string()).collect()
        }
        _ => vec![symbol.to_string()],
    };
    let text_w = lines
        .iter()
        .map(|l| l.chars().count() as u16)
        .max()
        .unwrap_or(0);
    let text_h = lines.len() as u16;
    let target = Rect {
        x: rect.x + rect.width.saturating_sub(text_w) / 2,
        y: rect.y + rect.height.saturating_sub(text_h) / 2,
        width: text_w.min(rect.width),
        height: text_h.min(rect.height),
    };
    let text: Vec<Line> = lines.into_iter().map(Line::raw).collect();
    let paragraph = Paragraph::new(text)
        .style(Style::default().fg(BORDER_COLOR).add_modifier(Modifier::BOLD));
    frame.render_widget(paragraph, target);
}
