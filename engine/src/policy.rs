use crate::board::{Board, CELL_COUNT, Mark};

/// External value estimator: one score per cell, higher means more preferred.
/// Must be deterministic for a fixed board and fixed internal parameters.
/// Scores reported for occupied cells are ignored by the selection policy.
pub trait Evaluator {
    fn evaluate(&self, board: &Board) -> [f32; CELL_COUNT];
}

impl<F> Evaluator for F
where
    F: Fn(&Board) -> [f32; CELL_COUNT],
{
    fn evaluate(&self, board: &Board) -> [f32; CELL_COUNT] {
        self(board)
    }
}

/// Picks the highest-scored move among the currently free cells. Ties go to
/// the lowest cell index so agent behavior stays reproducible. Returns `None`
/// on a full board; callers must treat that as a contract violation rather
/// than a recoverable condition.
pub fn select_move(board: &Board, evaluator: &dyn Evaluator) -> Option<usize> {
    let scores = evaluator.evaluate(board);

    let mut best: Option<(usize, f32)> = None;
    for cell in 0..CELL_COUNT {
        if board.get(cell) != Mark::Empty {
            continue;
        }
        let better = match best {
            None => true,
            Some((_, best_score)) => scores[cell] > best_score,
        };
        if better {
            best = Some((cell, scores[cell]));
        }
    }

    best.map(|(cell, _)| cell)
}
