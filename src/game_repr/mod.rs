mod board;
mod outcome;
mod player;

#[cfg(test)]
mod tests;

pub use board::*;
pub use outcome::*;
pub use player::*;
