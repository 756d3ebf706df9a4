// Tests for the rollout and UCT engines. Randomized runs use fixed seeds.

use rand::rngs::StdRng;
use rand::SeedableRng;

use super::{board, reachable_in_progress};
use crate::agent::ai::{
    evaluate_move, EngineConfig, MonteCarloRolloutEngine, MonteCarloTreeEngine, SearchEngine,
};
use crate::game_repr::{Board, Player};

const CORNERS_AND_CENTER: [usize; 5] = [0, 2, 4, 6, 8];

#[test]
fn test_monte_carlo_moves_are_legal() {
    let rollout = MonteCarloRolloutEngine::new(4);
    let tree = MonteCarloTreeEngine::new(30);
    let mut rng = StdRng::seed_from_u64(2024);

    // Every third board keeps the run short while covering all depths
    for b in reachable_in_progress().into_iter().step_by(3) {
        let player = b.side_to_move();
        let legal = b.legal_moves();

        let mv = rollout.evaluate_move_with_rng(&b, player, &mut rng).unwrap().best_move;
        assert!(legal.contains(&mv), "rollout picked {} on {}", mv, b);

        let mv = tree.evaluate_move_with_rng(&b, player, &mut rng).unwrap().best_move;
        assert!(legal.contains(&mv), "uct picked {} on {}", mv, b);
    }
}

#[test]
fn test_zero_simulations_plays_first_legal_move() {
    let b = board("XO-/-X-/--O");
    let result = MonteCarloRolloutEngine::new(0).evaluate_move(&b, Player::First).unwrap();

    assert_eq!(result.best_move, 2);
    assert_eq!(result.metrics.nodes_evaluated, 0);
    assert!(result.candidates.is_empty());
}

#[test]
fn test_rollout_counts_one_node_per_playout() {
    let b = board("X--/-O-/---");
    let result = MonteCarloRolloutEngine::new(25).with_seed(1).evaluate_move(&b, Player::First).unwrap();

    assert_eq!(result.metrics.nodes_evaluated, 7 * 25);
    assert_eq!(result.candidates.len(), 7);
    assert!(result.candidates.iter().all(|c| c.visits == 25));
    assert!(result.score.is_none());
}

#[test]
fn test_rollout_takes_immediate_win() {
    // Move 2 wins every playout and is also the lowest index, so ties cannot steal it
    let result = MonteCarloRolloutEngine::new(50)
        .with_seed(9)
        .evaluate_move(&board("OO-/XX-/---"), Player::Second)
        .unwrap();
    assert_eq!(result.best_move, 2);
    assert_eq!(result.candidates[0].value, 50.0);
}

#[test]
fn test_rollout_blocks_immediate_loss() {
    let result = MonteCarloRolloutEngine::new(1000)
        .with_seed(4)
        .evaluate_move(&board("XX-/-O-/---"), Player::Second)
        .unwrap();
    assert_eq!(result.best_move, 2);
}

#[test]
fn test_uct_finds_tactics() {
    for (fixture, seed) in [("OO-/XX-/---", 1), ("XX-/-O-/---", 2)] {
        let result = MonteCarloTreeEngine::new(1000)
            .with_seed(seed)
            .evaluate_move(&board(fixture), Player::Second)
            .unwrap();
        assert_eq!(result.best_move, 2, "on {}", fixture);
    }
}

#[test]
fn test_uct_empty_board_prefers_center_or_corner() {
    for seed in [7, 8] {
        let result = evaluate_move(
            &Board::new(),
            Player::First,
            &EngineConfig::monte_carlo_tree(1000).with_seed(seed),
        )
        .unwrap();

        let top = result.most_visited().unwrap();
        assert_eq!(top.mv, result.best_move);
        assert!(
            CORNERS_AND_CENTER.contains(&top.mv),
            "most visited was {} with distribution {:?}",
            top.mv,
            result.candidates
        );
    }
}

#[test]
fn test_uct_answers_corner_with_center() {
    let result = MonteCarloTreeEngine::new(1000)
        .with_seed(31)
        .evaluate_move(&board("X--/---/---"), Player::Second)
        .unwrap();
    assert_eq!(result.best_move, 4);
}

#[test]
fn test_seeded_runs_repeat() {
    let b = board("X--/-O-/---");
    for config in [
        EngineConfig::monte_carlo_rollout(40).with_seed(12),
        EngineConfig::monte_carlo_tree(400).with_seed(12),
    ] {
        let first = evaluate_move(&b, Player::First, &config).unwrap();
        let second = evaluate_move(&b, Player::First, &config).unwrap();
        assert_eq!(first.best_move, second.best_move);
        assert_eq!(first.candidates, second.candidates);
        assert_eq!(first.metrics.nodes_evaluated, second.metrics.nodes_evaluated);
    }
}
