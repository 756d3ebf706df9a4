//! Strategy Registry - the search algorithms an engine can be configured with
//!
//! Each variant maps to one engine type in this module. The registry exists so
//! callers (the demo binary, match runners, menus in a host UI) can enumerate
//! and name strategies without knowing the engine types.

use std::fmt;
use std::str::FromStr;

use crate::error::EngineError;

/// Enumeration of available search strategies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Strategy {
    /// Exhaustive minimax to terminal states
    Minimax,
    /// Minimax with alpha-beta pruning
    #[default]
    AlphaBeta,
    /// Flat Monte Carlo: random playouts per candidate move
    MonteCarloRollout,
    /// UCT tree search
    MonteCarloTree,
}

impl Strategy {
    /// Get all available strategies for enumeration
    pub fn all() -> &'static [Strategy] {
        &[
            Strategy::Minimax,
            Strategy::AlphaBeta,
            Strategy::MonteCarloRollout,
            Strategy::MonteCarloTree,
        ]
    }

    /// Get the display name for this strategy
    pub fn display_name(&self) -> &'static str {
        match self {
            Strategy::Minimax => "Minimax",
            Strategy::AlphaBeta => "AlphaBeta",
            Strategy::MonteCarloRollout => "MonteCarloRollout",
            Strategy::MonteCarloTree => "MonteCarloTree",
        }
    }

    /// Short name accepted on the command line
    pub fn cli_name(&self) -> &'static str {
        match self {
            Strategy::Minimax => "minimax",
            Strategy::AlphaBeta => "alphabeta",
            Strategy::MonteCarloRollout => "rollout",
            Strategy::MonteCarloTree => "mcts",
        }
    }

    /// Get a short description of this strategy
    pub fn description(&self) -> &'static str {
        match self {
            Strategy::Minimax => "Exhaustive minimax search",
            Strategy::AlphaBeta => "Minimax with alpha-beta pruning",
            Strategy::MonteCarloRollout => "Random playouts per candidate move",
            Strategy::MonteCarloTree => "Upper-confidence-bound tree search",
        }
    }

    /// Deterministic strategies always return the same move and score for a board
    pub fn is_deterministic(&self) -> bool {
        matches!(self, Strategy::Minimax | Strategy::AlphaBeta)
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for Strategy {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Strategy::all()
            .iter()
            .copied()
            .find(|strategy| {
                strategy.cli_name() == wanted || strategy.display_name().to_ascii_lowercase() == wanted
            })
            .ok_or_else(|| EngineError::InvalidConfiguration(format!("unknown strategy '{}'", s)))
    }
}
