pub mod board;
pub mod effects;
pub mod state;

pub use board::{Board, Cell, Content, Diagonal, Line, LineKind, Placement, Player, Position};
pub use state::{GameEngine, Outcome, Status, Transition};
