// Search entry point
//
// All strategies share one call shape: validate the input, run the search on
// a private copy of the board, and hand back the chosen move together with the
// metrics of that single call. The engines keep no state between calls.

use super::config::EngineConfig;
use super::ai_type::Strategy;
use super::metrics::SearchMetrics;
use crate::error::{EngineError, Result};
use crate::game_repr::{Board, GameOutcome, Move, Player};

/// Score of a won terminal position for the searching side
pub const WIN_SCORE: i32 = 1;

/// Score of a drawn terminal position
pub const DRAW_SCORE: i32 = 0;

/// Score of a lost terminal position for the searching side
pub const LOSS_SCORE: i32 = -1;

/// Window bound standing in for infinity (no score ever reaches it)
pub const SCORE_INFINITY: i32 = i32::MAX;

/// Per-root-move statistics reported by the Monte Carlo engines
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CandidateMove {
    pub mv: Move,
    /// Playouts (rollout engine) or tree visits (UCT) spent on this move
    pub visits: u32,
    /// Summed playout score (rollout engine) or accumulated wins (UCT)
    pub value: f64,
}

/// Result of a search operation
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult {
    pub best_move: Move,
    /// Game-theoretic value for the searching side; only the exact searches report one
    pub score: Option<i32>,
    pub metrics: SearchMetrics,
    /// Root move statistics, in candidate order. Empty for exact searches.
    pub candidates: Vec<CandidateMove>,
}

impl SearchResult {
    /// The candidate with the most visits, if any were recorded.
    pub fn most_visited(&self) -> Option<&CandidateMove> {
        let mut best: Option<&CandidateMove> = None;
        for candidate in &self.candidates {
            if best.map_or(true, |b| candidate.visits > b.visits) {
                best = Some(candidate);
            }
        }
        best
    }
}

/// A move-picking algorithm over the tic-tac-toe board.
///
/// `player` is the side the engine plays for; it maximizes that side's result.
pub trait SearchEngine {
    fn strategy(&self) -> Strategy;

    fn evaluate_move(&self, board: &Board, player: Player) -> Result<SearchResult>;
}

/// Pick a move for `player` on `board` with the strategy named in `config`.
///
/// # Errors
/// * `InvalidConfiguration` - budgets the strategy cannot run with
/// * `InvalidBoard` - mark counts that break turn alternation
/// * `TerminalPosition` - the game on `board` is already decided
pub fn evaluate_move(board: &Board, player: Player, config: &EngineConfig) -> Result<SearchResult> {
    config.validate()?;
    config.engine().evaluate_move(board, player)
}

/// Same as [`evaluate_move`], taking the board in its interchange form.
pub fn evaluate_cells(
    cells: &[Option<Player>],
    player: Player,
    config: &EngineConfig,
) -> Result<SearchResult> {
    config.validate()?;
    let board = Board::from_cells(cells)?;
    config.engine().evaluate_move(&board, player)
}

/// Check that `board` is something a search can start from.
pub fn validate_position(board: &Board) -> Result<()> {
    board.validate()?;
    match board.outcome() {
        GameOutcome::InProgress => Ok(()),
        outcome => Err(EngineError::TerminalPosition(outcome)),
    }
}

/// Value of a finished game for `maximizer`, `None` while it is still running.
pub(crate) fn terminal_score(board: &Board, maximizer: Player) -> Option<i32> {
    match board.outcome() {
        GameOutcome::InProgress => None,
        GameOutcome::Draw => Some(DRAW_SCORE),
        GameOutcome::Win(winner) if winner == maximizer => Some(WIN_SCORE),
        GameOutcome::Win(_) => Some(LOSS_SCORE),
    }
}

/// Log a completed search
pub(crate) fn log_search_info(strategy: Strategy, board: &Board, result: &SearchResult) {
    let score = result
        .score
        .map_or_else(|| "-".to_string(), |score| score.to_string());

    log::debug!(
        "info strategy {} board {} move {} score {} {}",
        strategy,
        board,
        result.best_move,
        score,
        result.metrics
    );
}
