pub const SIDE: usize = 3;
pub const CELL_COUNT: usize = SIDE * SIDE;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mark {
    Empty,
    X,
    O,
}

impl Mark {
    /// Numeric encoding consumed by value estimators: X = +1, O = -1.
    pub fn value(&self) -> i32 {
        match self {
            Mark::Empty => 0,
            Mark::X => 1,
            Mark::O => -1,
        }
    }

    pub fn opponent(&self) -> Option<Mark> {
        match self {
            Mark::X => Some(Mark::O),
            Mark::O => Some(Mark::X),
            Mark::Empty => None,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Mark::Empty => "",
            Mark::X => "X",
            Mark::O => "O",
        }
    }
}

/// 3x3 grid stored row-major. Cell index `i` maps to row `i / 3`, column
/// `i % 3`; this mapping is part of the wire contract with the serving layer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    cells: [Mark; CELL_COUNT],
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [Mark::Empty; CELL_COUNT],
        }
    }

    pub fn get(&self, cell: usize) -> Mark {
        self.cells[cell]
    }

    pub fn set(&mut self, cell: usize, mark: Mark) {
        self.cells[cell] = mark;
    }

    pub fn position(cell: usize) -> (usize, usize) {
        (cell / SIDE, cell % SIDE)
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&cell| cell != Mark::Empty)
    }

    pub fn available_moves(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == Mark::Empty)
            .map(|(i, _)| i)
            .collect()
    }

    pub fn mark_count(&self, mark: Mark) -> usize {
        self.cells.iter().filter(|&&cell| cell == mark).count()
    }

    /// Flattened +1/0/-1 encoding, one entry per cell in index order.
    pub fn to_features(&self) -> [f32; CELL_COUNT] {
        let mut features = [0.0; CELL_COUNT];
        for (feature, cell) in features.iter_mut().zip(&self.cells) {
            *feature = cell.value() as f32;
        }
        features
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert_eq!(board.available_moves().len(), CELL_COUNT);
        assert!(!board.is_full());
    }

    #[test]
    fn test_position_mapping() {
        assert_eq!(Board::position(0), (0, 0));
        assert_eq!(Board::position(2), (0, 2));
        assert_eq!(Board::position(4), (1, 1));
        assert_eq!(Board::position(7), (2, 1));
        assert_eq!(Board::position(8), (2, 2));
    }

    #[test]
    fn test_available_moves_ascending() {
        let mut board = Board::new();
        board.set(4, Mark::X);
        board.set(0, Mark::O);
        assert_eq!(board.available_moves(), vec![1, 2, 3, 5, 6, 7, 8]);
    }

    #[test]
    fn test_full_board() {
        let mut board = Board::new();
        for cell in 0..CELL_COUNT {
            board.set(cell, if cell % 2 == 0 { Mark::X } else { Mark::O });
        }
        assert!(board.is_full());
        assert!(board.available_moves().is_empty());
    }

    #[test]
    fn test_features_encoding() {
        let mut board = Board::new();
        board.set(0, Mark::X);
        board.set(8, Mark::O);
        let features = board.to_features();
        assert_eq!(features[0], 1.0);
        assert_eq!(features[8], -1.0);
        assert!(features[1..8].iter().all(|&f| f == 0.0));
    }
}
