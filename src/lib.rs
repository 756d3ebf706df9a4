//! Tic-tac-toe move selection.
//!
//! Four engines pick a move for one side of a 3x3 board: exhaustive minimax,
//! alpha-beta pruned minimax, flat Monte Carlo rollouts and UCT tree search.
//! Each call is a pure function of the board, the side to play for and an
//! [`EngineConfig`]; it returns the move with the nodes explored and the time
//! spent.
//!
//! ```
//! use tictactoe_engine::{evaluate_move, Board, EngineConfig, Player};
//!
//! let board: Board = "XX-/-O-/---".parse().unwrap();
//! let result = evaluate_move(&board, Player::Second, &EngineConfig::alpha_beta()).unwrap();
//! assert_eq!(result.best_move, 2);
//! ```

pub mod agent;
pub mod error;
pub mod game_repr;

pub use agent::ai::{
    evaluate_batch, evaluate_cells, evaluate_move, AlphaBetaEngine, CandidateMove, EngineConfig,
    MinimaxEngine, MonteCarloRolloutEngine, MonteCarloTreeEngine, SearchEngine, SearchMetrics,
    SearchResult, Strategy,
};
pub use agent::{play_match, Contestant, EnginePlayer, MatchRecord, RandomPlayer};
pub use error::{EngineError, Result};
pub use game_repr::{Board, Cell, GameOutcome, Move, Player};
