use super::player::Player;

/// The eight winning triples: rows, columns, then diagonals.
pub const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// State of a game as seen from a single board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameOutcome {
    InProgress,
    Win(Player),
    Draw,
}

impl GameOutcome {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameOutcome::InProgress)
    }

    pub fn winner(&self) -> Option<Player> {
        match self {
            GameOutcome::Win(player) => Some(*player),
            _ => None,
        }
    }
}
