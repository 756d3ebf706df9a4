use super::*;
use crate::error::EngineError;

// ==================== HELPER FUNCTIONS ====================

/// Parse a board written as nine `X`/`O`/`-` characters (slashes allowed).
pub fn board(s: &str) -> Board {
    s.parse().expect("fixture board should be valid")
}

/// Board with `player` occupying exactly `line`, other cells filled only as
/// needed to keep the mark counts legal.
pub fn board_with_line(line: [usize; 3], player: Player) -> Board {
    let mut cells = [None; BOARD_SIZE];
    for idx in line {
        cells[idx] = Some(player);
    }

    // Give the opponent enough marks off the line to keep turn order legal
    let opponent_marks = match player {
        Player::First => 2,
        Player::Second => 3,
    };
    let mut placed = 0;
    for idx in 0..BOARD_SIZE {
        if placed == opponent_marks {
            break;
        }
        if cells[idx].is_none() && !completes_line(&cells, idx, player.opposite()) {
            cells[idx] = Some(player.opposite());
            placed += 1;
        }
    }
    Board::from_cells(&cells).expect("line fixture should be valid")
}

fn completes_line(cells: &[Option<Player>; BOARD_SIZE], idx: usize, player: Player) -> bool {
    LINES.iter().filter(|line| line.contains(&idx)).any(|line| {
        line.iter()
            .filter(|&&other| other != idx)
            .all(|&other| cells[other] == Some(player))
    })
}

// ==================== TEST MODULES ====================
