
use std::path::{Path, PathBuf};

use derive_more::{Display, Error};

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum GlyphErrorKind {
    #[display("cannot read file: {_0}")]
    Unreadable(String),
    #[display("file has no rows")]
    Empty,
    #[display("row {row} is {found} wide, expected {expected}")]
    Ragged {
        row: usize,
        found: usize,
        expected: usize,
    },
}

#[derive(Debug, Clone, Display, Error)]
#[display("glyph {}: {} at {}:{}", path.display(), kind, file, line)]
pub struct GlyphError {
    pub path: PathBuf,
    pub kind: GlyphErrorKind,
    pub line: u32,
    pub file: &'static str,
}

impl GlyphError {
    #[track_caller]
    pub fn new(path: &Path, kind: GlyphErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            path: path.to_path_buf(),
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
