use std::time::Duration;

use super::player::Contestant;
use crate::agent::ai::SearchMetrics;
use crate::error::Result;
use crate::game_repr::{Board, GameOutcome, Move, Player};

/// One move of a finished match.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ply {
    pub player: Player,
    pub mv: Move,
    pub metrics: SearchMetrics,
}

/// Everything that happened in one game.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchRecord {
    pub outcome: GameOutcome,
    pub plies: Vec<Ply>,
    pub final_board: Board,
}

impl MatchRecord {
    /// Search effort spent by `player` over the whole game.
    pub fn totals(&self, player: Player) -> SearchMetrics {
        let mut total = SearchMetrics::new();
        for ply in self.plies.iter().filter(|ply| ply.player == player) {
            total += ply.metrics;
        }
        total
    }

    pub fn nodes_for(&self, player: Player) -> u64 {
        self.totals(player).nodes_evaluated
    }

    pub fn time_for(&self, player: Player) -> Duration {
        self.totals(player).elapsed
    }

    pub fn moves(&self) -> Vec<Move> {
        self.plies.iter().map(|ply| ply.mv).collect()
    }
}

/// Play one game from the empty board, `first` moving as X.
///
/// The loop owns the only game state; contestants see a copy of the board and
/// their choice is validated by [`Board::make_move`] before it is applied. A
/// contestant error or illegal move ends the match with that error.
pub fn play_match(first: &mut dyn Contestant, second: &mut dyn Contestant) -> Result<MatchRecord> {
    let mut board = Board::new();
    let mut to_move = Player::First;
    let mut plies = Vec::new();

    log::info!("match {} (X) vs {} (O)", first.name(), second.name());

    while !board.outcome().is_terminal() {
        let contestant: &mut dyn Contestant = match to_move {
            Player::First => &mut *first,
            Player::Second => &mut *second,
        };

        let choice = contestant.choose_move(&board, to_move)?;
        board.make_move(choice.mv, to_move)?;

        log::info!(
            "ply {} {} ({}) plays {} -> {} [{}]",
            plies.len() + 1,
            to_move,
            contestant.name(),
            choice.mv,
            board,
            choice.metrics
        );

        plies.push(Ply {
            player: to_move,
            mv: choice.mv,
            metrics: choice.metrics,
        });
        to_move = to_move.opposite();
    }

    let outcome = board.outcome();
    log::info!("match over: {:?} after {} plies, final board {}", outcome, plies.len(), board);

    Ok(MatchRecord {
        outcome,
        plies,
        final_board: board,
    })
}
