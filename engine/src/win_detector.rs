use crate::board::{Board, Mark};

/// The 8 winning lines: 3 rows, 3 columns, 2 diagonals.
pub const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

pub fn check_win(board: &Board, mark: Mark) -> bool {
    winning_line(board, mark).is_some()
}

pub fn winning_line(board: &Board, mark: Mark) -> Option<[usize; 3]> {
    if mark == Mark::Empty {
        return None;
    }
    LINES
        .iter()
        .copied()
        .find(|line| line.iter().all(|&cell| board.get(cell) == mark))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(marks: &[(usize, Mark)]) -> Board {
        let mut board = Board::new();
        for &(cell, mark) in marks {
            board.set(cell, mark);
        }
        board
    }

    #[test]
    fn test_empty_board_has_no_winner() {
        let board = Board::new();
        assert!(!check_win(&board, Mark::X));
        assert!(!check_win(&board, Mark::O));
    }

    #[test]
    fn test_row_win() {
        let board = board_with(&[(3, Mark::X), (4, Mark::X), (5, Mark::X)]);
        assert_eq!(winning_line(&board, Mark::X), Some([3, 4, 5]));
        assert!(!check_win(&board, Mark::O));
    }

    #[test]
    fn test_column_win() {
        let board = board_with(&[(1, Mark::O), (4, Mark::O), (7, Mark::O)]);
        assert_eq!(winning_line(&board, Mark::O), Some([1, 4, 7]));
    }

    #[test]
    fn test_main_diagonal_win() {
        let board = board_with(&[(0, Mark::X), (4, Mark::X), (8, Mark::X)]);
        assert_eq!(winning_line(&board, Mark::X), Some([0, 4, 8]));
    }

    #[test]
    fn test_anti_diagonal_win() {
        let board = board_with(&[(2, Mark::O), (4, Mark::O), (6, Mark::O)]);
        assert_eq!(winning_line(&board, Mark::O), Some([2, 4, 6]));
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let board = board_with(&[(0, Mark::X), (1, Mark::O), (2, Mark::X)]);
        assert!(!check_win(&board, Mark::X));
        assert!(!check_win(&board, Mark::O));
    }

    #[test]
    fn test_empty_mark_never_wins() {
        let board = Board::new();
        assert_eq!(winning_line(&board, Mark::Empty), None);
    }
}
