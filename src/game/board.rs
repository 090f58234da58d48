use crate::BOARD_SIZE;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Player {
    X,
    O,
}

impl Player {
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Player::X => 'X',
            Player::O => 'O',
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Content {
    Empty,
    Marked(Player),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cell {
    pub pos: Position,
    pub content: Content,
    // set for one frame only
    pub highlighted: bool,
}

impl Cell {
    fn empty(pos: Position) -> Self {
        Self {
            pos,
            content: Content::Empty,
            highlighted: false,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self.content, Content::Empty)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Diagonal {
    // (0,0), (1,1), (2,2)
    Main,
    // (2,0), (1,1), (0,2)
    Anti,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineKind {
    Row(usize),
    Column(usize),
    Diagonal(Diagonal),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Placement {
    Placed,
    Occupied,
}

pub type Line = [Cell; BOARD_SIZE];

#[derive(Clone, Debug)]
pub struct Board {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    pub fn new() -> Self {
        let cells = std::array::from_fn(|row| {
            std::array::from_fn(|col| Cell::empty(Position::new(row, col)))
        });
        Self { cells }
    }

    pub fn cell(&self, row: usize, col: usize) -> &Cell {
        &self.cells[row][col]
    }

    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter().flatten()
    }

    // Panics outside the board.
    pub fn place(&mut self, row: usize, col: usize, player: Player) -> Placement {
        assert!(
            row < BOARD_SIZE && col < BOARD_SIZE,
            "cell ({row}, {col}) is off the board"
        );
        let cell = &mut self.cells[row][col];
        if !cell.is_empty() {
            return Placement::Occupied;
        }
        cell.content = Content::Marked(player);
        Placement::Placed
    }

    pub fn cells_in_row(&self, row: usize) -> Line {
        self.cells[row]
    }

    pub fn cells_in_column(&self, col: usize) -> Line {
        std::array::from_fn(|row| self.cells[row][col])
    }

    pub fn cells_in_diagonal(&self, which: Diagonal) -> Line {
        match which {
            Diagonal::Main => std::array::from_fn(|i| self.cells[i][i]),
            Diagonal::Anti => std::array::from_fn(|i| self.cells[BOARD_SIZE - 1 - i][i]),
        }
    }

    // rows, columns, main, anti
    pub fn lines(&self) -> impl Iterator<Item = (LineKind, Line)> + '_ {
        let rows = (0..BOARD_SIZE).map(|r| (LineKind::Row(r), self.cells_in_row(r)));
        let cols = (0..BOARD_SIZE).map(|c| (LineKind::Column(c), self.cells_in_column(c)));
        let diags = [Diagonal::Main, Diagonal::Anti]
            .into_iter()
            .map(|d| (LineKind::Diagonal(d), self.cells_in_diagonal(d)));
        rows.chain(cols).chain(diags)
    }

    pub fn is_line_win(line: &Line) -> bool {
        let first = line[0].content;
        first != Content::Empty && line.iter().all(|cell| cell.content == first)
    }

    pub fn filled_count(&self) -> usize {
        self.cells().filter(|cell| !cell.is_empty()).count()
    }

    pub fn clear_highlights(&mut self) {
        for cell in self.cells.iter_mut().flatten() {
            cell.highlighted = false;
        }
    }

    pub fn set_highlighted(&mut self, pos: Position) {
        self.cells[pos.row][pos.col].highlighted = true;
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
