// Shared game UI/constants.
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

pub const BOARD_SIZE: usize = 3;
pub const DEFAULT_PAUSE_MS: u64 = 40; // smaller is a faster frame rate
pub const STATUS_W: u16 = 24;
// Smallest terminal that still fits three readable cells plus the status panel.
pub const MIN_WIDTH: u16 = STATUS_W + 3 * 5;
pub const MIN_HEIGHT: u16 = 3 * 3;
pub const DEFAULT_LOG_FILE: &str = "tictactoe.log";

#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Two-player tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Pause between frames in milliseconds
    #[arg(long, env = "TTT_PAUSE_MS", default_value_t = DEFAULT_PAUSE_MS)]
    pub pause_ms: u64,

    /// Pointer glyph file for player X ('#' black, '*' white)
    #[arg(long)]
    pub cursor_x: Option<PathBuf>,

    /// Pointer glyph file for player O ('#' black, '*' white)
    #[arg(long)]
    pub cursor_o: Option<PathBuf>,

    /// File that receives tracing output
    #[arg(long, env = "TTT_LOG", default_value = DEFAULT_LOG_FILE)]
    pub log_file: PathBuf,
}

impl Cli {
    pub fn into_config(self) -> Config {
        Config {
            pause: Duration::from_millis(self.pause_ms),
            cursor_x: self.cursor_x,
            cursor_o: self.cursor_o,
            log_file: self.log_file,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub pause: Duration,
    pub cursor_x: Option<PathBuf>,
    pub cursor_o: Option<PathBuf>,
    pub log_file: PathBuf,
}
