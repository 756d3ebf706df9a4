// Search engines
//
// Four move-picking strategies behind one call shape:
// - Exhaustive minimax (exact, deterministic)
// - Minimax with alpha-beta pruning (same result, fewer nodes)
// - Flat Monte Carlo rollouts per candidate move
// - UCT tree search
//
// Every call validates its input, works on a private copy of the board and
// reports the nodes it explored together with the time it took.

mod ai_type;
mod alpha_beta;
mod batch;
mod config;
mod mcts;
mod metrics;
mod minimax;
mod rollout;
mod search;

#[cfg(test)]
mod tests;

pub use ai_type::Strategy;
pub use alpha_beta::AlphaBetaEngine;
pub use batch::evaluate_batch;
pub use config::{EngineConfig, DEFAULT_EXPLORATION_CONSTANT, DEFAULT_ITERATIONS, DEFAULT_SIMULATIONS};
pub use mcts::MonteCarloTreeEngine;
pub use metrics::SearchMetrics;
pub use minimax::MinimaxEngine;
pub use rollout::{random_playout, MonteCarloRolloutEngine};
pub(crate) use rollout::seeded_rng;
pub use search::{
    evaluate_cells, evaluate_move, validate_position, CandidateMove, SearchEngine, SearchResult,
    DRAW_SCORE, LOSS_SCORE, SCORE_INFINITY, WIN_SCORE,
};
