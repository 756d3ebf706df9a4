//! Parallel evaluation of independent positions.
//!
//! Every position gets its own engine instance, scratch board and metrics, so
//! the workers share nothing but the read-only input slice.

use rayon::prelude::*;

use super::config::EngineConfig;
use super::search::{evaluate_move, SearchResult};
use crate::error::Result;
use crate::game_repr::{Board, Player};

/// Evaluate every `(board, player)` pair with `config`, in parallel.
///
/// Results come back in input order. A seeded configuration hands position `i`
/// the seed `seed + i`, so a batch is reproducible regardless of scheduling.
pub fn evaluate_batch(positions: &[(Board, Player)], config: &EngineConfig) -> Vec<Result<SearchResult>> {
    log::debug!(
        "batch of {} positions with {} on {} threads",
        positions.len(),
        config.strategy,
        rayon::current_num_threads()
    );

    positions
        .par_iter()
        .enumerate()
        .map(|(index, (board, player))| {
            let mut position_config = *config;
            position_config.seed = config.seed.map(|seed| seed.wrapping_add(index as u64));
            evaluate_move(board, *player, &position_config)
        })
        .collect()
}
