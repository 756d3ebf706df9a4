use std::fmt;
use std::str::FromStr;

use smallvec::SmallVec;

use super::outcome::{GameOutcome, LINES};
use super::player::Player;
use crate::error::{EngineError, Result};

/// Number of cells on the board.
pub const BOARD_SIZE: usize = 9;

/// A move is the row-major index (0-8) of the cell to mark.
pub type Move = usize;

/// Move list that never spills to the heap.
pub type MoveList = SmallVec<[Move; BOARD_SIZE]>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Mark(Player),
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    pub fn player(&self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Mark(player) => Some(*player),
        }
    }
}

impl From<Option<Player>> for Cell {
    fn from(value: Option<Player>) -> Self {
        match value {
            Some(player) => Cell::Mark(player),
            None => Cell::Empty,
        }
    }
}

/// Information needed to take back a move made with [`Board::make_move`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Undo {
    index: Move,
    previous: Cell,
}

/// 3x3 board, cells indexed 0-8 in row-major order.
///
/// A board built through [`Board::from_cells`] or parsed from a string is
/// guaranteed to respect turn alternation: First has either as many marks as
/// Second or exactly one more.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Empty board, First to move.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a board from the interchange format: a length-9 sequence over
    /// `{None, First, Second}`.
    pub fn from_cells(cells: &[Option<Player>]) -> Result<Self> {
        if cells.len() != BOARD_SIZE {
            return Err(EngineError::InvalidBoard(format!(
                "expected {} cells, got {}",
                BOARD_SIZE,
                cells.len()
            )));
        }

        let mut board = Self::new();
        for (idx, cell) in cells.iter().enumerate() {
            board.cells[idx] = Cell::from(*cell);
        }
        board.validate()?;
        Ok(board)
    }

    /// Interchange representation of this board.
    pub fn to_cells(&self) -> [Option<Player>; BOARD_SIZE] {
        let mut out = [None; BOARD_SIZE];
        for (idx, cell) in self.cells.iter().enumerate() {
            out[idx] = cell.player();
        }
        out
    }

    pub fn cells(&self) -> &[Cell; BOARD_SIZE] {
        &self.cells
    }

    pub fn cell(&self, idx: Move) -> Option<Cell> {
        self.cells.get(idx).copied()
    }

    /// Number of marks placed by `player`.
    pub fn count(&self, player: Player) -> usize {
        self.cells
            .iter()
            .filter(|cell| **cell == Cell::Mark(player))
            .count()
    }

    pub fn move_count(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_empty()).count()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    /// Check the turn-alternation invariant.
    pub fn validate(&self) -> Result<()> {
        let first = self.count(Player::First);
        let second = self.count(Player::Second);
        if first != second && first != second + 1 {
            return Err(EngineError::InvalidBoard(format!(
                "mark counts violate turn order (first: {}, second: {})",
                first, second
            )));
        }
        Ok(())
    }

    /// Whose turn it is according to the mark counts.
    pub fn side_to_move(&self) -> Player {
        if self.count(Player::First) == self.count(Player::Second) {
            Player::First
        } else {
            Player::Second
        }
    }

    pub fn outcome(&self) -> GameOutcome {
        for [a, b, c] in LINES {
            if let Cell::Mark(player) = self.cells[a] {
                if self.cells[b] == self.cells[a] && self.cells[c] == self.cells[a] {
                    return GameOutcome::Win(player);
                }
            }
        }

        if self.is_full() {
            GameOutcome::Draw
        } else {
            GameOutcome::InProgress
        }
    }

    /// Indices of all empty cells in ascending order, regardless of outcome.
    pub fn empty_cells(&self) -> MoveList {
        (0..BOARD_SIZE)
            .filter(|&idx| self.cells[idx].is_empty())
            .collect()
    }

    /// Legal moves in ascending index order. Empty once the game is decided.
    ///
    /// Every engine scans candidates in this order and keeps the first
    /// strictly better one, so the ordering fixes tie-breaks.
    pub fn legal_moves(&self) -> MoveList {
        if self.outcome().is_terminal() {
            return MoveList::new();
        }
        self.empty_cells()
    }

    /// Return a copy of this board with `mv` marked for `player`.
    pub fn apply(&self, mv: Move, player: Player) -> Result<Board> {
        let mut next = *self;
        next.make_move(mv, player)?;
        Ok(next)
    }

    /// Mark `mv` for `player` in place. Pair with [`Board::unmake_move`].
    pub fn make_move(&mut self, mv: Move, player: Player) -> Result<Undo> {
        match self.cells.get(mv) {
            None => Err(EngineError::InvalidMove {
                index: mv,
                reason: "index out of range 0-8",
            }),
            Some(Cell::Mark(_)) => Err(EngineError::InvalidMove {
                index: mv,
                reason: "cell is occupied",
            }),
            Some(Cell::Empty) => Ok(self.make_move_unchecked(mv, player)),
        }
    }

    /// In-place move for search code that only ever plays from `empty_cells`.
    pub(crate) fn make_move_unchecked(&mut self, mv: Move, player: Player) -> Undo {
        debug_assert!(self.cells[mv].is_empty(), "search played onto occupied cell {}", mv);
        let previous = self.cells[mv];
        self.cells[mv] = Cell::Mark(player);
        Undo { index: mv, previous }
    }

    /// Restore the cell changed by the matching `make_move`.
    pub fn unmake_move(&mut self, undo: Undo) {
        self.cells[undo.index] = undo.previous;
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, cell) in self.cells.iter().enumerate() {
            if idx > 0 && idx % 3 == 0 {
                write!(f, "/")?;
            }
            match cell {
                Cell::Empty => write!(f, "-")?,
                Cell::Mark(player) => write!(f, "{}", player.symbol())?,
            }
        }
        Ok(())
    }
}

/// Parses `X`, `O` and `-`/`.` cells; `/` and whitespace are ignored.
impl FromStr for Board {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self> {
        let mut cells = Vec::with_capacity(BOARD_SIZE);
        for c in s.chars() {
            match c {
                '/' => continue,
                c if c.is_whitespace() => continue,
                '-' | '.' | '_' => cells.push(None),
                c => match Player::from_symbol(c) {
                    Some(player) => cells.push(Some(player)),
                    None => {
                        return Err(EngineError::InvalidBoard(format!(
                            "unexpected character '{}'",
                            c
                        )))
                    }
                },
            }
        }
        Board::from_cells(&cells)
    }
}
