// Glyph files: one line per pixel row, `#` black, `*` white, anything else
// transparent. Rows must be the same width.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{GlyphError, GlyphErrorKind};
use crate::game::Player;

const DEFAULT_X: [&str; 7] = [
    "##   ##",
    " ## ## ",
    "  ###  ",
    "   #   ",
    "  ###  ",
    " ## ## ",
    "##   ##",
];

const DEFAULT_O: [&str; 7] = [
    "  ###  ",
    " #***# ",
    "#*   *#",
    "#*   *#",
    "#*   *#",
    " #***# ",
    "  ###  ",
];

pub trait CursorIndicator {
    fn activate(&mut self, player: Player);
    fn preview(&self) -> Vec<String>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Glyph {
    rows: Vec<String>,
}

impl Glyph {
    pub fn parse(path: &Path, text: &str) -> Result<Self, GlyphError> {
        let rows: Vec<String> = text.lines().map(str::to_string).collect();
        let width = match rows.first() {
            Some(first) if !first.is_empty() => first.chars().count(),
            _ => return Err(GlyphError::new(path, GlyphErrorKind::Empty)),
        };
        for (row, line) in rows.iter().enumerate() {
            let found = line.chars().count();
            if found != width {
                return Err(GlyphError::new(
                    path,
                    GlyphErrorKind::Ragged {
                        row,
                        found,
                        expected: width,
                    },
                ));
            }
        }
        Ok(Self { rows })
    }

    pub fn load(path: &Path) -> Result<Self, GlyphError> {
        let text = fs::read_to_string(path)
            .map_err(|e| GlyphError::new(path, GlyphErrorKind::Unreadable(e.to_string())))?;
        let glyph = Self::parse(path, &text)?;
        debug!(path = %path.display(), size = ?glyph.size(), "loaded pointer glyph");
        Ok(glyph)
    }

    fn builtin(rows: &[&str]) -> Self {
        Self {
            rows: rows.iter().map(|r| r.to_string()).collect(),
        }
    }

    // (width, height)
    pub fn size(&self) -> (usize, usize) {
        (self.rows.first().map_or(0, |r| r.chars().count()), self.rows.len())
    }

    pub fn preview(&self) -> Vec<String> {
        self.rows
            .iter()
            .map(|row| {
                row.chars()
                    .map(|ch| match ch {
                        '#' => '█',
                        '*' => '░',
                        _ => ' ',
                    })
                    .collect()
            })
            .collect()
    }
}

#[derive(Debug, Clone)]
pub struct GlyphCursor {
    x: Glyph,
    o: Glyph,
    active: Player,
}

impl GlyphCursor {
    pub fn new(x: Glyph, o: Glyph) -> Self {
        Self {
            x,
            o,
            active: Player::X,
        }
    }

    // Built-in art for any player without a file.
    pub fn from_paths(x: Option<&Path>, o: Option<&Path>) -> Result<Self, GlyphError> {
        let x = match x {
            Some(path) => Glyph::load(path)?,
            None => Glyph::builtin(&DEFAULT_X),
        };
        let o = match o {
            Some(path) => Glyph::load(path)?,
            None => Glyph::builtin(&DEFAULT_O),
        };
        Ok(Self::new(x, o))
    }

    pub fn glyph(&self) -> &Glyph {
        match self.active {
            Player::X => &self.x,
            Player::O => &self.o,
        }
    }
}

impl Default for GlyphCursor {
    fn default() -> Self {
        Self::new(Glyph::builtin(&DEFAULT_X), Glyph::builtin(&DEFAULT_O))
    }
}

impl CursorIndicator for GlyphCursor {
    fn activate(&mut self, player: Player) {
        debug!(?player, "cursor activated");
        self.active = player;
    }

    fn preview(&self) -> Vec<String> {
        self.glyph().preview()
    }
}
