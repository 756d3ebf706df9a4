// Minimax Search with Alpha-Beta Pruning
//
// Same scoring as the exhaustive search, with an (alpha, beta) window threaded
// through the recursion:
// - alpha: best score the maximizer (engine side) can already guarantee
// - beta: best score the minimizer (opponent) can already guarantee
//
// Once beta <= alpha at a node, its remaining siblings cannot change the result
// and are skipped. Skipped states are never visited and never counted, so the
// node count is at most the exhaustive one while the chosen move and score stay
// identical.

use std::time::Instant;

use super::ai_type::Strategy;
use super::metrics::SearchMetrics;
use super::search::{
    log_search_info, terminal_score, validate_position, SearchEngine, SearchResult, SCORE_INFINITY,
};
use crate::error::{EngineError, Result};
use crate::game_repr::{Board, Move, Player};

/// Alpha-beta engine. Stateless; one instance can serve any number of calls.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlphaBetaEngine;

impl AlphaBetaEngine {
    pub fn new() -> Self {
        Self
    }
}

impl SearchEngine for AlphaBetaEngine {
    fn strategy(&self) -> Strategy {
        Strategy::AlphaBeta
    }

    fn evaluate_move(&self, board: &Board, player: Player) -> Result<SearchResult> {
        validate_position(board)?;

        let start = Instant::now();
        let mut metrics = SearchMetrics::new();
        let mut scratch = *board;
        metrics.record_node();

        // The root is a maximizing node with an open window. beta stays at
        // +infinity here, so no root move is ever pruned.
        let mut alpha = -SCORE_INFINITY;
        let beta = SCORE_INFINITY;
        let mut best: Option<(Move, i32)> = None;

        for mv in scratch.empty_cells() {
            let undo = scratch.make_move_unchecked(mv, player);
            let score = alpha_beta(&mut scratch, player.opposite(), player, alpha, beta, &mut metrics);
            scratch.unmake_move(undo);

            if best.map_or(true, |(_, best_score)| score > best_score) {
                best = Some((mv, score));
            }
            if score > alpha {
                alpha = score;
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
        log_search_info(Strategy::AlphaBeta, board, &result);
        Ok(result)
    }
}

/// Alpha-beta value of `board` for `maximizer`, with `to_move` about to play.
///
/// Fail-soft: a result <= alpha is an upper bound, >= beta a lower bound, and
/// anything strictly inside the window is exact.
pub(crate) fn alpha_beta(
    board: &mut Board,
    to_move: Player,
    maximizer: Player,
    mut alpha: i32,
    mut beta: i32,
    metrics: &mut SearchMetrics,
) -> i32 {
    metrics.record_node();

    if let Some(score) = terminal_score(board, maximizer) {
        return score;
    }

    if to_move == maximizer {
        let mut best = -SCORE_INFINITY;
        for mv in board.empty_cells() {
            let undo = board.make_move_unchecked(mv, to_move);
            let score = alpha_beta(board, to_move.opposite(), maximizer, alpha, beta, metrics);
            board.unmake_move(undo);

            if score > best {
                best = score;
            }
            if best > alpha {
                alpha = best;
            }
            // Beta cutoff: the minimizer already has something better elsewhere
            if beta <= alpha {
                break;
            }
        }
        best
    } else {
        let mut best = SCORE_INFINITY;
        for mv in board.empty_cells() {
            let undo = board.make_move_unchecked(mv, to_move);
            let score = alpha_beta(board, to_move.opposite(), maximizer, alpha, beta, metrics);
            board.unmake_move(undo);

            if score < best {
                best = score;
            }
            if best < beta {
                beta = best;
            }
            // Alpha cutoff
            if beta <= alpha {
                break;
            }
        }
        best
    }
}
