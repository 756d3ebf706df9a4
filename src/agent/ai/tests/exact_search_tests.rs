// Tests for the exhaustive and alpha-beta searches

use super::{board, reachable_in_progress};
use crate::agent::ai::{
    AlphaBetaEngine, EngineConfig, MinimaxEngine, SearchEngine, DRAW_SCORE, LOSS_SCORE, WIN_SCORE,
};
use crate::agent::ai::evaluate_move;
use crate::game_repr::{Board, GameOutcome, Player};

#[test]
fn test_pruning_never_changes_the_answer() {
    let minimax = MinimaxEngine::new();
    let alpha_beta = AlphaBetaEngine::new();

    for b in reachable_in_progress() {
        for player in [Player::First, Player::Second] {
            let full = minimax.evaluate_move(&b, player).unwrap();
            let pruned = alpha_beta.evaluate_move(&b, player).unwrap();

            assert_eq!(full.score, pruned.score, "score differs on {} for {}", b, player);
            assert_eq!(full.best_move, pruned.best_move, "move differs on {} for {}", b, player);
            assert!(
                pruned.metrics.nodes_evaluated <= full.metrics.nodes_evaluated,
                "alpha-beta visited more nodes on {}: {} > {}",
                b,
                pruned.metrics.nodes_evaluated,
                full.metrics.nodes_evaluated
            );
        }
    }
}

#[test]
fn test_takes_immediate_win() {
    // O O -
    // X X -
    // - - -
    let b = board("OO-/XX-/---");
    for config in [EngineConfig::minimax(), EngineConfig::alpha_beta()] {
        let result = evaluate_move(&b, Player::Second, &config).unwrap();
        assert_eq!(result.best_move, 2, "{}", config.strategy);
        assert_eq!(result.score, Some(WIN_SCORE), "{}", config.strategy);
    }
}

#[test]
fn test_blocks_immediate_loss() {
    // X X -
    // - O -
    // - - -
    let b = board("XX-/-O-/---");
    for config in [EngineConfig::minimax(), EngineConfig::alpha_beta()] {
        let result = evaluate_move(&b, Player::Second, &config).unwrap();
        assert_eq!(result.best_move, 2, "{}", config.strategy);
        assert_eq!(result.score, Some(DRAW_SCORE), "{}", config.strategy);
    }
}

#[test]
fn test_corner_opening_answered_in_center() {
    let b = board("X--/---/---");
    let result = AlphaBetaEngine::new().evaluate_move(&b, Player::Second).unwrap();
    assert_eq!(result.best_move, 4);
    assert_eq!(result.score, Some(DRAW_SCORE));
}

#[test]
fn test_optimal_self_play_draws() {
    let engine = AlphaBetaEngine::new();
    let mut b = Board::new();
    let mut to_move = Player::First;

    while !b.outcome().is_terminal() {
        let result = engine.evaluate_move(&b, to_move).unwrap();
        assert_eq!(result.score, Some(DRAW_SCORE), "position {} should be a draw", b);
        b = b.apply(result.best_move, to_move).unwrap();
        to_move = to_move.opposite();
    }
    assert_eq!(b.outcome(), GameOutcome::Draw);
}

#[test]
fn test_scores_stay_in_range() {
    for b in reachable_in_progress().into_iter().filter(|b| b.move_count() >= 5) {
        let score = AlphaBetaEngine::new()
            .evaluate_move(&b, b.side_to_move())
            .unwrap()
            .score
            .unwrap();
        assert!((LOSS_SCORE..=WIN_SCORE).contains(&score));
    }
}

#[test]
fn test_search_leaves_input_alone() {
    let b = board("X--/-O-/--X");
    let before = b;
    MinimaxEngine::new().evaluate_move(&b, Player::Second).unwrap();
    AlphaBetaEngine::new().evaluate_move(&b, Player::Second).unwrap();
    assert_eq!(b, before);
}
