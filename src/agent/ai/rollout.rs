// Flat Monte Carlo evaluation
//
// Each legal move is scored by playing it and then finishing the game with
// uniformly random moves for both sides, `simulations` times. A playout scores
// +1 when the engine's side wins, -1 when it loses and 0 for a draw. The move
// with the strictly greatest total wins; the lowest index keeps ties.

use std::time::Instant;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use super::ai_type::Strategy;
use super::metrics::SearchMetrics;
use super::search::{
    log_search_info, terminal_score, validate_position, CandidateMove, SearchEngine, SearchResult,
    DRAW_SCORE,
};
use crate::error::{EngineError, Result};
use crate::game_repr::{Board, Move, Player};

/// Random-playout engine.
#[derive(Debug, Clone, Copy)]
pub struct MonteCarloRolloutEngine {
    simulations: u32,
    seed: Option<u64>,
}

impl MonteCarloRolloutEngine {
    /// `simulations` playouts per candidate move. Zero is accepted and makes the
    /// engine play the first legal move without any playout.
    pub fn new(simulations: u32) -> Self {
        Self {
            simulations,
            seed: None,
        }
    }

    pub fn with_seed(self, seed: u64) -> Self {
        self.with_seed_opt(Some(seed))
    }

    pub(crate) fn with_seed_opt(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    pub fn simulations(&self) -> u32 {
        self.simulations
    }

    /// Run the search drawing randomness from `rng`.
    pub fn evaluate_move_with_rng<R: Rng + ?Sized>(
        &self,
        board: &Board,
        player: Player,
        rng: &mut R,
    ) -> Result<SearchResult> {
        validate_position(board)?;

        let start = Instant::now();
        let mut metrics = SearchMetrics::new();
        let moves = board.legal_moves();
        let first_move = *moves
            .first()
            .ok_or(EngineError::TerminalPosition(board.outcome()))?;

        if self.simulations == 0 {
            metrics.finish(start);
            let result = SearchResult {
                best_move: first_move,
                score: None,
                metrics,
                candidates: Vec::new(),
            };
            log_search_info(Strategy::MonteCarloRollout, board, &result);
            return Ok(result);
        }

        let mut candidates = Vec::with_capacity(moves.len());
        let mut best: Option<(Move, i64)> = None;

        for &mv in &moves {
            let mut child = *board;
            child.make_move_unchecked(mv, player);

            let mut total: i64 = 0;
            for _ in 0..self.simulations {
                total += random_playout(&child, player.opposite(), player, rng) as i64;
                metrics.record_node();
            }
            log::trace!("rollout move {} total {} over {} playouts", mv, total, self.simulations);

            candidates.push(CandidateMove {
                mv,
                visits: self.simulations,
                value: total as f64,
            });
            if best.map_or(true, |(_, best_total)| total > best_total) {
                best = Some((mv, total));
            }
        }
        metrics.finish(start);

        let best_move = best.map_or(first_move, |(mv, _)| mv);
        let result = SearchResult {
            best_move,
            score: None,
            metrics,
            candidates,
        };
        log_search_info(Strategy::MonteCarloRollout, board, &result);
        Ok(result)
    }
}

impl SearchEngine for MonteCarloRolloutEngine {
    fn strategy(&self) -> Strategy {
        Strategy::MonteCarloRollout
    }

    fn evaluate_move(&self, board: &Board, player: Player) -> Result<SearchResult> {
        let mut rng = seeded_rng(self.seed);
        self.evaluate_move_with_rng(board, player, &mut rng)
    }
}

/// Finish the game on a copy of `board` with uniformly random moves, `to_move`
/// playing first. Returns the result for `perspective` (+1 / 0 / -1).
///
/// Always terminates: every step fills one of at most nine cells.
pub fn random_playout<R: Rng + ?Sized>(
    board: &Board,
    to_move: Player,
    perspective: Player,
    rng: &mut R,
) -> i32 {
    let mut pos = *board;
    let mut current = to_move;

    loop {
        if let Some(score) = terminal_score(&pos, perspective) {
            return score;
        }

        let moves = pos.empty_cells();
        match moves.choose(rng) {
            Some(&mv) => {
                pos.make_move_unchecked(mv, current);
                current = current.opposite();
            }
            // An in-progress board always has an empty cell
            None => return DRAW_SCORE,
        }
    }
}

/// Fixed seed for reproducible runs, otherwise seeded from the OS.
pub(crate) fn seeded_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}
