use engine::win_detector::{LINES, check_win};
use engine::{Board, CELL_COUNT, Evaluator, Mark};

const WIN_SCORE: f32 = 1000.0;

/// Fallback evaluator used when no trained model is configured.
///
/// Scores each free cell by the board it would produce: open lines are worth
/// the square of the marks already on them, opponent lines count against, and
/// a move that completes a line scores highest. Deterministic, so tie-breaks
/// stay reproducible.
pub struct ThreatHeuristic;

impl ThreatHeuristic {
    /// The side to move, recovered from mark counts (X always opens).
    fn mover(board: &Board) -> Mark {
        if board.mark_count(Mark::X) > board.mark_count(Mark::O) {
            Mark::O
        } else {
            Mark::X
        }
    }
}

fn line_score(board: &Board, line: [usize; 3], mark: Mark) -> f32 {
    let mut own = 0;
    for &cell in &line {
        let occupant = board.get(cell);
        if occupant == mark {
            own += 1;
        } else if occupant != Mark::Empty {
            return 0.0;
        }
    }
    (own * own) as f32
}

fn score_board(board: &Board, mark: Mark) -> f32 {
    let opponent = mark.opponent().unwrap();
    LINES
        .iter()
        .map(|&line| line_score(board, line, mark) - line_score(board, line, opponent))
        .sum()
}

impl Evaluator for ThreatHeuristic {
    fn evaluate(&self, board: &Board) -> [f32; CELL_COUNT] {
        let mover = Self::mover(board);
        let mut scores = [f32::MIN; CELL_COUNT];
        for cell in 0..CELL_COUNT {
            if board.get(cell) != Mark::Empty {
                continue;
            }
            let mut probe = board.clone();
            probe.set(cell, mover);
            scores[cell] = if check_win(&probe, mover) {
                WIN_SCORE
            } else {
                score_board(&probe, mover)
            };
        }
        scores
    }
}
