// Monte Carlo Tree Search (UCT)
//
// One search tree per call, grown for a fixed number of iterations:
// 1. Selection: descend by UCB1 while the node has children
// 2. Expansion: a visited leaf gets one child per legal move
// 3. Simulation: a uniformly random playout from the reached node
// 4. Backpropagation: visits and wins updated up to the root
//
// Nodes live in a Vec arena and refer to each other by index. Each node's
// `wins` is kept from the point of view of the side that made the move into
// it, so a parent always picks the child that is best for itself.

use std::time::Instant;

use rand::Rng;
use smallvec::SmallVec;

use super::ai_type::Strategy;
use super::config::{validate_exploration_constant, DEFAULT_EXPLORATION_CONSTANT};
use super::metrics::SearchMetrics;
use super::rollout::{random_playout, seeded_rng};
use super::search::{log_search_info, validate_position, CandidateMove, SearchEngine, SearchResult};
use crate::error::{EngineError, Result};
use crate::game_repr::{Board, Move, Player, BOARD_SIZE};

type NodeId = usize;

const ROOT: NodeId = 0;

#[derive(Debug, Clone)]
struct SearchNode {
    board: Board,
    parent: Option<NodeId>,
    children: SmallVec<[NodeId; BOARD_SIZE]>,
    /// Move that led here, `None` for the root
    mv: Option<Move>,
    visits: u32,
    wins: f64,
    /// Side about to play on `board`
    to_move: Player,
}

impl SearchNode {
    fn new(board: Board, parent: Option<NodeId>, mv: Option<Move>, to_move: Player) -> Self {
        Self {
            board,
            parent,
            children: SmallVec::new(),
            mv,
            visits: 0,
            wins: 0.0,
            to_move,
        }
    }

    fn ucb1(&self, parent_visits: u32, exploration_constant: f64) -> f64 {
        if self.visits == 0 {
            return f64::INFINITY;
        }
        let visits = self.visits as f64;
        self.wins / visits + exploration_constant * ((parent_visits as f64).ln() / visits).sqrt()
    }
}

/// Arena-backed tree owned by a single search call.
struct SearchTree {
    nodes: Vec<SearchNode>,
    /// The engine's side; rollout results are scored for it
    player: Player,
}

impl SearchTree {
    fn new(board: Board, player: Player) -> Self {
        Self {
            nodes: vec![SearchNode::new(board, None, None, player)],
            player,
        }
    }

    fn select(&self, exploration_constant: f64) -> NodeId {
        let mut current = ROOT;
        while !self.nodes[current].children.is_empty() {
            current = self.best_child(current, exploration_constant);
        }
        current
    }

    fn best_child(&self, id: NodeId, exploration_constant: f64) -> NodeId {
        let node = &self.nodes[id];
        let mut best = node.children[0];
        let mut best_score = f64::NEG_INFINITY;

        for &child in &node.children {
            let score = self.nodes[child].ucb1(node.visits, exploration_constant);
            if score == f64::INFINITY {
                return child;
            }
            if score > best_score {
                best_score = score;
                best = child;
            }
        }
        best
    }

    /// Add one child per legal move of `id`, returning how many were created.
    fn expand(&mut self, id: NodeId) -> usize {
        let board = self.nodes[id].board;
        let to_move = self.nodes[id].to_move;
        let moves = board.legal_moves();

        for &mv in &moves {
            let mut child_board = board;
            child_board.make_move_unchecked(mv, to_move);

            let child = self.nodes.len();
            self.nodes
                .push(SearchNode::new(child_board, Some(id), Some(mv), to_move.opposite()));
            self.nodes[id].children.push(child);
        }
        moves.len()
    }

    fn backpropagate(&mut self, leaf: NodeId, result: i32) {
        let mut current = Some(leaf);
        while let Some(id) = current {
            let node = &mut self.nodes[id];
            node.visits += 1;
            // The engine moved into this node when the opponent is now to move
            if node.to_move == self.player {
                node.wins -= result as f64;
            } else {
                node.wins += result as f64;
            }
            current = node.parent;
        }
    }

    /// Root child with the most visits; the earliest created keeps ties.
    fn most_visited_child(&self) -> Option<&SearchNode> {
        let mut best: Option<&SearchNode> = None;
        for &child in &self.nodes[ROOT].children {
            let node = &self.nodes[child];
            if best.map_or(true, |b| node.visits > b.visits) {
                best = Some(node);
            }
        }
        best
    }

    fn candidates(&self) -> Vec<CandidateMove> {
        self.nodes[ROOT]
            .children
            .iter()
            .filter_map(|&child| {
                let node = &self.nodes[child];
                node.mv.map(|mv| CandidateMove {
                    mv,
                    visits: node.visits,
                    value: node.wins,
                })
            })
            .collect()
    }
}

/// UCT search engine.
#[derive(Debug, Clone, Copy)]
pub struct MonteCarloTreeEngine {
    iterations: u32,
    exploration_constant: f64,
    seed: Option<u64>,
}

impl MonteCarloTreeEngine {
    pub fn new(iterations: u32) -> Self {
        Self {
            iterations,
            exploration_constant: DEFAULT_EXPLORATION_CONSTANT,
            seed: None,
        }
    }

    pub fn with_exploration_constant(mut self, exploration_constant: f64) -> Self {
        self.exploration_constant = exploration_constant;
        self
    }

    pub fn with_seed(self, seed: u64) -> Self {
        self.with_seed_opt(Some(seed))
    }

    pub(crate) fn with_seed_opt(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    pub fn iterations(&self) -> u32 {
        self.iterations
    }

    pub fn exploration_constant(&self) -> f64 {
        self.exploration_constant
    }

    /// Run the search drawing randomness from `rng`.
    ///
    /// # Errors
    /// `InvalidConfiguration` for a zero budget or a non-positive exploration
    /// constant, then the usual position errors.
    pub fn evaluate_move_with_rng<R: Rng + ?Sized>(
        &self,
        board: &Board,
        player: Player,
        rng: &mut R,
    ) -> Result<SearchResult> {
        if self.iterations == 0 {
            return Err(EngineError::InvalidConfiguration(
                "iterations must be positive".to_string(),
            ));
        }
        validate_exploration_constant(self.exploration_constant)?;
        validate_position(board)?;

        let start = Instant::now();
        let mut metrics = SearchMetrics::new();
        let mut tree = SearchTree::new(*board, player);

        for _ in 0..self.iterations {
            let mut leaf = tree.select(self.exploration_constant);

            let node = &tree.nodes[leaf];
            if node.visits > 0 && !node.board.outcome().is_terminal() {
                let created = tree.expand(leaf);
                metrics.record_nodes(created as u64);
                leaf = tree.nodes[leaf].children[0];
            }

            let node = &tree.nodes[leaf];
            let result = random_playout(&node.board, node.to_move, player, rng);
            metrics.record_node();

            tree.backpropagate(leaf, result);
        }
        metrics.finish(start);

        log::trace!(
            "uct tree size {} root visits {}",
            tree.nodes.len(),
            tree.nodes[ROOT].visits
        );

        // A single iteration never expands the root; fall back to the first legal move
        let best_move = match tree.most_visited_child().and_then(|node| node.mv) {
            Some(mv) => mv,
            None => *board
                .legal_moves()
                .first()
                .ok_or(EngineError::TerminalPosition(board.outcome()))?,
        };

        let result = SearchResult {
            best_move,
            score: None,
            metrics,
            candidates: tree.candidates(),
        };
        log_search_info(Strategy::MonteCarloTree, board, &result);
        Ok(result)
    }
}

impl Default for MonteCarloTreeEngine {
    fn default() -> Self {
        Self::new(super::config::DEFAULT_ITERATIONS)
    }
}

impl SearchEngine for MonteCarloTreeEngine {
    fn strategy(&self) -> Strategy {
        Strategy::MonteCarloTree
    }

    fn evaluate_move(&self, board: &Board, player: Player) -> Result<SearchResult> {
        let mut rng = seeded_rng(self.seed);
        self.evaluate_move_with_rng(board, player, &mut rng)
    }
}
