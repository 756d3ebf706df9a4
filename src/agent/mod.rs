pub mod ai;

pub mod player;
pub use player::*;

pub mod two_player;
pub use two_player::*;

pub use ai::{EngineConfig, SearchEngine, SearchMetrics, SearchResult, Strategy};
