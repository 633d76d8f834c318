use serde::Deserialize;

use crate::board::{Board, CELL_COUNT, Mark};
use crate::win_detector::check_win;

/// Per-outcome rewards, injected by the hosting layer. The engine depends
/// only on the shape of this record, not on particular values.
#[derive(Clone, Copy, Debug, Deserialize)]
#[serde(default)]
pub struct RewardScheme {
    pub invalid_move: f64,
    pub win: f64,
    pub draw: f64,
    pub step: f64,
}

impl Default for RewardScheme {
    fn default() -> Self {
        Self {
            invalid_move: -10.0,
            win: 10.0,
            draw: 5.0,
            step: -0.4,
        }
    }
}

/// Result of applying one move.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Outcome {
    Continue { reward: f64 },
    Invalid { reward: f64 },
    Win { mark: Mark, reward: f64 },
    Draw { reward: f64 },
}

impl Outcome {
    pub fn reward(&self) -> f64 {
        match self {
            Outcome::Continue { reward }
            | Outcome::Invalid { reward }
            | Outcome::Win { reward, .. }
            | Outcome::Draw { reward } => *reward,
        }
    }

    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::Continue { .. })
    }
}

/// One game in progress. Owned by exactly one session; never shared between
/// concurrent games.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameState {
    pub board: Board,
    pub current_mark: Mark,
    pub terminal: bool,
}

impl GameState {
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_mark: Mark::X,
            terminal: false,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Applies one move for the side to move.
    ///
    /// A move into an occupied cell ends the episode with `Invalid` and
    /// leaves the board untouched; it is not rejected-and-retried. Callers
    /// that want graceful recovery must filter the cell before calling.
    ///
    /// Stepping a finished game is a caller contract violation; the session
    /// layer checks `terminal` before calling.
    pub fn step(&mut self, cell: usize, rewards: &RewardScheme) -> Outcome {
        debug_assert!(!self.terminal, "step called on a finished game");
        debug_assert!(cell < CELL_COUNT, "cell index out of range");

        if self.board.get(cell) != Mark::Empty {
            self.terminal = true;
            return Outcome::Invalid {
                reward: rewards.invalid_move,
            };
        }

        self.board.set(cell, self.current_mark);

        if check_win(&self.board, self.current_mark) {
            self.terminal = true;
            return Outcome::Win {
                mark: self.current_mark,
                reward: rewards.win,
            };
        }

        if self.board.is_full() {
            self.terminal = true;
            return Outcome::Draw {
                reward: rewards.draw,
            };
        }

        self.current_mark = self.current_mark.opponent().unwrap();
        Outcome::Continue {
            reward: rewards.step,
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
