//! Contestants that take turns in a match.
//!
//! The [`Contestant`] trait is about behavior, not construction: an engine
//! player needs a search configuration, a random player only a seed, so each
//! implementation brings its own constructor.
//!
//! `choose_move` is synchronous. A caller asks for a move and blocks until the
//! contestant returns one; any "thinking" delay belongs to whoever presents
//! the game, not here.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use crate::agent::ai::{seeded_rng, EngineConfig, SearchMetrics};
use crate::error::{EngineError, Result};
use crate::game_repr::{Board, Move, Player};

/// A move together with what it cost to find.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoveChoice {
    pub mv: Move,
    pub metrics: SearchMetrics,
}

/// Anything that can pick a move for one side of the board.
pub trait Contestant {
    fn name(&self) -> &str;

    /// Pick a move for `player` on `board`.
    ///
    /// The returned move is checked by the caller before it is applied.
    fn choose_move(&mut self, board: &Board, player: Player) -> Result<MoveChoice>;
}

/// Contestant backed by one of the search engines.
#[derive(Debug, Clone)]
pub struct EnginePlayer {
    name: String,
    config: EngineConfig,
}

impl EnginePlayer {
    /// Fails with `InvalidConfiguration` before any game starts.
    pub fn new(config: EngineConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            name: config.strategy.display_name().to_string(),
            config,
        })
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }
}

impl Contestant for EnginePlayer {
    fn name(&self) -> &str {
        &self.name
    }

    fn choose_move(&mut self, board: &Board, player: Player) -> Result<MoveChoice> {
        let engine = self.config.engine();
        let result = engine.evaluate_move(board, player)?;

        // Advance the seed so consecutive turns draw fresh playouts
        if let Some(seed) = self.config.seed.as_mut() {
            *seed = seed.wrapping_add(1);
        }

        Ok(MoveChoice {
            mv: result.best_move,
            metrics: result.metrics,
        })
    }
}

/// Plays a uniformly random legal move.
#[derive(Debug, Clone)]
pub struct RandomPlayer {
    rng: StdRng,
}

impl RandomPlayer {
    pub fn new() -> Self {
        Self {
            rng: seeded_rng(None),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: seeded_rng(Some(seed)),
        }
    }
}

impl Default for RandomPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl Contestant for RandomPlayer {
    fn name(&self) -> &str {
        "Random"
    }

    fn choose_move(&mut self, board: &Board, _player: Player) -> Result<MoveChoice> {
        board.validate()?;
        let moves = board.legal_moves();
        let mv = *moves
            .choose(&mut self.rng)
            .ok_or(EngineError::TerminalPosition(board.outcome()))?;

        Ok(MoveChoice {
            mv,
            metrics: SearchMetrics::new(),
        })
    }
}
