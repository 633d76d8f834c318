pub mod board;
pub mod game;
pub mod logger;
pub mod policy;
pub mod win_detector;

pub use board::{Board, CELL_COUNT, Mark, SIDE};
pub use game::{GameState, Outcome, RewardScheme};
pub use policy::{Evaluator, select_move};
