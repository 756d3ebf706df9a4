// Cross-engine tests

mod exact_search_tests;
mod monte_carlo_tests;

use std::collections::HashSet;

use crate::game_repr::Board;

fn board(s: &str) -> Board {
    s.parse().unwrap()
}

/// Every in-progress board reachable from the empty board under legal play.
fn reachable_in_progress() -> Vec<Board> {
    let mut seen = HashSet::new();
    let mut stack = vec![Board::new()];
    let mut boards = Vec::new();

    while let Some(current) = stack.pop() {
        if !seen.insert(current) || current.outcome().is_terminal() {
            continue;
        }
        boards.push(current);
        let to_move = current.side_to_move();
        for mv in current.legal_moves() {
            stack.push(current.apply(mv, to_move).unwrap());
        }
    }
    boards
}

#[test]
fn test_reachable_board_count() {
    assert_eq!(reachable_in_progress().len(), 4520);
}
