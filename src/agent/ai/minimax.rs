// Exhaustive Minimax Search
//
// Searches every line of play to a finished game. The engine's own side is the
// maximizing player, the opponent minimizes. Terminal positions score
// +1 (engine wins), -1 (opponent wins) or 0 (draw).
//
// The search runs on one scratch copy of the caller's board: each move is made,
// searched and unmade before the next sibling is tried, so the caller's board is
// never touched.

use std::time::Instant;

use super::ai_type::Strategy;
use super::metrics::SearchMetrics;
use super::search::{
    log_search_info, terminal_score, validate_position, SearchEngine, SearchResult, SCORE_INFINITY,
};
use crate::error::{EngineError, Result};
use crate::game_repr::{Board, Move, Player};

/// Exhaustive minimax engine. Stateless; one instance can serve any number of calls.
#[derive(Debug, Clone, Copy, Default)]
pub struct MinimaxEngine;

impl MinimaxEngine {
    pub fn new() -> Self {
        Self
    }
}

impl SearchEngine for MinimaxEngine {
    fn strategy(&self) -> Strategy {
        Strategy::Minimax
    }

    fn evaluate_move(&self, board: &Board, player: Player) -> Result<SearchResult> {
        validate_position(board)?;

        let start = Instant::now();
        let mut metrics = SearchMetrics::new();
        let mut scratch = *board;
        metrics.record_node();

        let mut best: Option<(Move, i32)> = None;
        for mv in scratch.empty_cells() {
            let undo = scratch.make_move_unchecked(mv, player);
            let score = minimax(&mut scratch, player.opposite(), player, &mut metrics);
            scratch.unmake_move(undo);

            // Strictly better only: the lowest index keeps ties
            if best.map_or(true, |(_, best_score)| score > best_score) {
                best = Some((mv, score));
            }
        }
        metrics.finish(start);

        let (best_move, score) = best.ok_or(EngineError::TerminalPosition(board.outcome()))?;
        let result = SearchResult {
            best_move,
            score: Some(score),
            metrics,
            candidates: Vec::new(),
        };
        log_search_info(Strategy::Minimax, board, &result);
        Ok(result)
    }
}

/// Minimax value of `board` for `maximizer`, with `to_move` about to play.
///
/// Every call is one explored board state and is counted exactly once.
pub(crate) fn minimax(
    board: &mut Board,
    to_move: Player,
    maximizer: Player,
    metrics: &mut SearchMetrics,
) -> i32 {
    metrics.record_node();

    if let Some(score) = terminal_score(board, maximizer) {
        return score;
    }

    let maximizing = to_move == maximizer;
    let mut best = if maximizing { -SCORE_INFINITY } else { SCORE_INFINITY };

    for mv in board.empty_cells() {
        let undo = board.make_move_unchecked(mv, to_move);
        let score = minimax(board, to_move.opposite(), maximizer, metrics);
        board.unmake_move(undo);

        best = if maximizing { best.max(score) } else { best.min(score) };
    }

    best
}
