//! Engine configuration.
//!
//! An [`EngineConfig`] names the strategy plus the budget knobs the Monte
//! Carlo strategies read. Knobs that do not apply to the chosen strategy are
//! carried but ignored.

use std::f64::consts::SQRT_2;

use super::ai_type::Strategy;
use super::alpha_beta::AlphaBetaEngine;
use super::mcts::MonteCarloTreeEngine;
use super::minimax::MinimaxEngine;
use super::rollout::MonteCarloRolloutEngine;
use super::search::SearchEngine;
use crate::error::{EngineError, Result};

/// Default number of playouts per candidate move (rollout strategy)
pub const DEFAULT_SIMULATIONS: u32 = 100;

/// Default UCT iteration budget
pub const DEFAULT_ITERATIONS: u32 = 1000;

/// Default UCB1 exploration constant
pub const DEFAULT_EXPLORATION_CONSTANT: f64 = SQRT_2;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EngineConfig {
    pub strategy: Strategy,
    /// Playouts per candidate move (MonteCarloRollout)
    pub simulations: u32,
    /// Select/expand/simulate/backpropagate rounds (MonteCarloTree)
    pub iterations: u32,
    /// UCB1 exploration weight (MonteCarloTree)
    pub exploration_constant: f64,
    /// Seed for the Monte Carlo engines. `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            strategy: Strategy::default(),
            simulations: DEFAULT_SIMULATIONS,
            iterations: DEFAULT_ITERATIONS,
            exploration_constant: DEFAULT_EXPLORATION_CONSTANT,
            seed: None,
        }
    }
}

impl EngineConfig {
    pub fn new(strategy: Strategy) -> Self {
        Self {
            strategy,
            ..Self::default()
        }
    }

    pub fn minimax() -> Self {
        Self::new(Strategy::Minimax)
    }

    pub fn alpha_beta() -> Self {
        Self::new(Strategy::AlphaBeta)
    }

    pub fn monte_carlo_rollout(simulations: u32) -> Self {
        Self {
            simulations,
            ..Self::new(Strategy::MonteCarloRollout)
        }
    }

    pub fn monte_carlo_tree(iterations: u32) -> Self {
        Self {
            iterations,
            ..Self::new(Strategy::MonteCarloTree)
        }
    }

    pub fn with_exploration_constant(mut self, exploration_constant: f64) -> Self {
        self.exploration_constant = exploration_constant;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Reject budgets the selected strategy cannot run with.
    ///
    /// The rollout engine on its own falls back to the first legal move when
    /// given zero simulations; a configuration asking for that is still refused.
    pub fn validate(&self) -> Result<()> {
        match self.strategy {
            Strategy::Minimax | Strategy::AlphaBeta => Ok(()),
            Strategy::MonteCarloRollout => {
                if self.simulations == 0 {
                    return Err(EngineError::InvalidConfiguration(
                        "simulations must be positive".to_string(),
                    ));
                }
                Ok(())
            }
            Strategy::MonteCarloTree => {
                if self.iterations == 0 {
                    return Err(EngineError::InvalidConfiguration(
                        "iterations must be positive".to_string(),
                    ));
                }
                validate_exploration_constant(self.exploration_constant)
            }
        }
    }

    /// Build the engine this configuration describes.
    pub fn engine(&self) -> Box<dyn SearchEngine + Send + Sync> {
        match self.strategy {
            Strategy::Minimax => Box::new(MinimaxEngine::new()),
            Strategy::AlphaBeta => Box::new(AlphaBetaEngine::new()),
            Strategy::MonteCarloRollout => {
                Box::new(MonteCarloRolloutEngine::new(self.simulations).with_seed_opt(self.seed))
            }
            Strategy::MonteCarloTree => Box::new(
                MonteCarloTreeEngine::new(self.iterations)
                    .with_exploration_constant(self.exploration_constant)
                    .with_seed_opt(self.seed),
            ),
        }
    }
}

pub(crate) fn validate_exploration_constant(c: f64) -> Result<()> {
    if !c.is_finite() || c <= 0.0 {
        return Err(EngineError::InvalidConfiguration(format!(
            "exploration constant must be a positive finite number, got {}",
            c
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = EngineConfig::default();
        assert_eq!(config.strategy, Strategy::AlphaBeta);
        assert_eq!(config.simulations, DEFAULT_SIMULATIONS);
        assert_eq!(config.iterations, DEFAULT_ITERATIONS);
        assert!((config.exploration_constant - 2f64.sqrt()).abs() < 1e-12);
        assert_eq!(config.seed, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builders() {
        let config = EngineConfig::monte_carlo_tree(250)
            .with_exploration_constant(0.7)
            .with_seed(9);
        assert_eq!(config.strategy, Strategy::MonteCarloTree);
        assert_eq!(config.iterations, 250);
        assert_eq!(config.exploration_constant, 0.7);
        assert_eq!(config.seed, Some(9));

        let config = EngineConfig::monte_carlo_rollout(12);
        assert_eq!(config.strategy, Strategy::MonteCarloRollout);
        assert_eq!(config.simulations, 12);
    }

    #[test]
    fn test_zero_simulations_rejected() {
        let err = EngineConfig::monte_carlo_rollout(0).validate().unwrap_err();
        assert!(matches!(err, EngineError::InvalidConfiguration(_)));
    }

    #[test]
    fn test_zero_iterations_rejected() {
        let err = EngineConfig::monte_carlo_tree(0).validate().unwrap_err();
        assert!(matches!(err, EngineError::InvalidConfiguration(_)));
    }

    #[test]
    fn test_bad_exploration_constant_rejected() {
        for c in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let err = EngineConfig::monte_carlo_tree(10)
                .with_exploration_constant(c)
                .validate()
                .unwrap_err();
            assert!(matches!(err, EngineError::InvalidConfiguration(_)), "c = {}", c);
        }
    }

    #[test]
    fn test_unused_knobs_ignored() {
        // Minimax does not care about Monte Carlo budgets
        let config = EngineConfig {
            simulations: 0,
            iterations: 0,
            exploration_constant: -1.0,
            ..EngineConfig::minimax()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_engine_matches_strategy() {
        for strategy in Strategy::all() {
            let engine = EngineConfig::new(*strategy).engine();
            assert_eq!(engine.strategy(), *strategy);
        }
    }
}
