use tracing::{debug, info};

use crate::game::{Board, Content, Diagonal, LineKind, Placement, Player, Position};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    RowWin,
    ColumnWin,
    DiagonalWin,
    Tie,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    InProgress,
    Terminal(Outcome),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    // game already over
    Ignored,
    // occupied cell, flashes once
    Flashed(Position),
    TurnPassed(Player),
    Finished(Outcome),
}

pub struct GameEngine {
    board: Board,
    turn: Player,
    filled: usize,
    status: Status,
    winner: Option<Player>,
    pub(super) highlight: Vec<Position>,
    pub(super) tap_flash: Option<Position>,
}

impl GameEngine {
    pub fn new() -> Self {
        info!("new game, X to move");
        Self {
            board: Board::new(),
            turn: Player::X,
            filled: 0,
            status: Status::InProgress,
            winner: None,
            highlight: Vec::new(),
            tap_flash: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub(super) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn current_turn(&self) -> Player {
        self.turn
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self.status, Status::Terminal(_))
    }

    pub fn filled_count(&self) -> usize {
        self.filled
    }

    pub fn winner(&self) -> Option<Player> {
        self.winner
    }

    // Winning line, or all nine on a tie.
    pub fn current_highlight_set(&self) -> &[Position] {
        &self.highlight
    }

    pub fn attempt_placement(&mut self, row: usize, col: usize) -> Transition {
        if self.is_terminal() {
            return Transition::Ignored;
        }
        let pos = Position::new(row, col);
        match self.board.place(row, col, self.turn) {
            Placement::Occupied => {
                debug!(row, col, "tap on filled cell");
                self.tap_flash = Some(pos);
                Transition::Flashed(pos)
            }
            Placement::Placed => {
                self.filled += 1;
                debug_assert_eq!(self.filled, self.board.filled_count());
                debug!(row, col, player = ?self.turn, "placed");
                match self.evaluate() {
                    Some(outcome) => {
                        self.status = Status::Terminal(outcome);
                        info!(?outcome, winner = ?self.winner, "game over");
                        Transition::Finished(outcome)
                    }
                    None => {
                        self.turn = self.turn.opponent();
                        debug!(player = ?self.turn, "turn passed");
                        Transition::TurnPassed(self.turn)
                    }
                }
            }
        }
    }

    // First winning line in scan order takes the highlight; a full board with
    // no line is a tie.
    fn evaluate(&mut self) -> Option<Outcome> {
        let win = self
            .board
            .lines()
            .find(|(_, line)| Board::is_line_win(line));
        if let Some((kind, line)) = win {
            self.highlight = line.iter().map(|cell| cell.pos).collect();
            if let Content::Marked(player) = line[0].content {
                self.winner = Some(player);
            }
            return Some(match kind {
                LineKind::Row(_) => Outcome::RowWin,
                LineKind::Column(_) => Outcome::ColumnWin,
                LineKind::Diagonal(Diagonal::Main | Diagonal::Anti) => Outcome::DiagonalWin,
            });
        }
        if self.board.filled_count() == self.board.cells().count() {
            self.highlight = self.board.cells().map(|cell| cell.pos).collect();
            return Some(Outcome::Tie);
        }
        None
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}
