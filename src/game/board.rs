use crate::error::GameError;

use super::Player;

pub const ROWS: usize = 6;
pub const COLS: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Player1,
    Player2,
}

impl Cell {
    /// The player whose piece occupies this cell, if any
    pub fn owner(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Player1 => Some(Player::Player1),
            Cell::Player2 => Some(Player::Player2),
        }
    }

    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

/// Grid of cells indexed `(row, col)`, row 0 at the top.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: usize,
    cols: usize,
    cells: Vec<Vec<Cell>>,
}

impl Board {
    /// Create an empty board of the given size
    pub fn new(rows: usize, cols: usize) -> Result<Self, GameError> {
        if rows == 0 || cols == 0 {
            return Err(GameError::InvalidDimensions { rows, cols });
        }

        Ok(Board {
            rows,
            cols,
            cells: vec![vec![Cell::Empty; cols]; rows],
        })
    }

    /// The classic 6x7 board
    pub fn standard() -> Self {
        Board {
            rows: ROWS,
            cols: COLS,
            cells: vec![vec![Cell::Empty; COLS]; ROWS],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Whether `(row, col)` lies on the board. Signed so callers can probe
    /// off-grid neighbours without underflow.
    pub fn in_bounds(&self, row: isize, col: isize) -> bool {
        row >= 0 && col >= 0 && (row as usize) < self.rows && (col as usize) < self.cols
    }

    /// Get the cell at a specific position
    pub fn get(&self, row: usize, col: usize) -> Result<Cell, GameError> {
        self.check_bounds(row, col)?;
        Ok(self.cells[row][col])
    }

    /// Overwrite a cell. No legality check beyond bounds.
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) -> Result<(), GameError> {
        self.check_bounds(row, col)?;
        self.cells[row][col] = cell;
        Ok(())
    }

    /// Empty every cell, keeping the dimensions
    pub fn clear(&mut self) {
        for row in &mut self.cells {
            row.fill(Cell::Empty);
        }
    }

    /// Check if a column has no empty cells left
    pub fn is_column_full(&self, col: usize) -> bool {
        if col >= self.cols {
            return true;
        }
        self.cells.iter().all(|row| !row[col].is_empty())
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        self.cells.iter().flatten().all(|cell| !cell.is_empty())
    }

    /// Number of non-empty cells
    pub fn piece_count(&self) -> usize {
        self.cells.iter().flatten().filter(|cell| !cell.is_empty()).count()
    }

    /// Iterate over every occupied cell as `(row, col, player)`
    pub fn pieces(&self) -> impl Iterator<Item = (usize, usize, Player)> + '_ {
        self.cells.iter().enumerate().flat_map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .filter_map(move |(col, cell)| cell.owner().map(|player| (row, col, player)))
        })
    }

    fn check_bounds(&self, row: usize, col: usize) -> Result<(), GameError> {
        if row >= self.rows || col >= self.cols {
            return Err(GameError::OutOfBounds {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(())
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new(ROWS, COLS).unwrap();
        for row in 0..ROWS {
            for col in 0..COLS {
                assert_eq!(board.get(row, col).unwrap(), Cell::Empty);
            }
        }
        assert_eq!(board.piece_count(), 0);
        assert_eq!(board, Board::standard());
    }

    #[test]
    fn test_zero_dimensions_rejected() {
        assert_eq!(
            Board::new(0, 7),
            Err(GameError::InvalidDimensions { rows: 0, cols: 7 })
        );
        assert_eq!(
            Board::new(6, 0),
            Err(GameError::InvalidDimensions { rows: 6, cols: 0 })
        );
    }

    #[test]
    fn test_get_out_of_bounds() {
        let board = Board::standard();
        assert!(matches!(
            board.get(6, 0),
            Err(GameError::OutOfBounds { row: 6, col: 0, .. })
        ));
        assert!(matches!(
            board.get(0, 7),
            Err(GameError::OutOfBounds { row: 0, col: 7, .. })
        ));
    }

    #[test]
    fn test_set_and_get() {
        let mut board = Board::new(3, 4).unwrap();
        board.set(2, 3, Cell::Player2).unwrap();
        assert_eq!(board.get(2, 3).unwrap(), Cell::Player2);
        assert_eq!(board.piece_count(), 1);
        assert!(board.set(3, 0, Cell::Player1).is_err());
    }

    #[test]
    fn test_full_board() {
        let mut board = Board::new(2, 2).unwrap();
        assert!(!board.is_full());
        for row in 0..2 {
            for col in 0..2 {
                board.set(row, col, Cell::Player1).unwrap();
            }
        }
        assert!(board.is_full());
    }

    #[test]
    fn test_column_full() {
        let mut board = Board::standard();
        for row in 0..ROWS {
            assert!(!board.is_column_full(0));
            board.set(row, 0, Cell::Player1).unwrap();
        }
        assert!(board.is_column_full(0));
        assert!(!board.is_column_full(1));
        assert!(board.is_column_full(COLS));
    }

    #[test]
    fn test_clear() {
        let mut board = Board::new(4, 5).unwrap();
        board.set(3, 1, Cell::Player1).unwrap();
        board.clear();
        assert_eq!(board, Board::new(4, 5).unwrap());
    }

    #[test]
    fn test_in_bounds() {
        let board = Board::standard();
        assert!(board.in_bounds(0, 0));
        assert!(board.in_bounds(5, 6));
        assert!(!board.in_bounds(-1, 0));
        assert!(!board.in_bounds(0, 7));
    }

    #[test]
    fn test_pieces_iterates_occupied_cells() {
        let mut board = Board::standard();
        board.set(5, 0, Cell::Player1).unwrap();
        board.set(4, 3, Cell::Player2).unwrap();
        let pieces: Vec<_> = board.pieces().collect();
        assert_eq!(
            pieces,
            vec![(4, 3, Player::Player2), (5, 0, Player::Player1)]
        );
    }

    #[test]
    fn test_cell_owner() {
        assert_eq!(Cell::Empty.owner(), None);
        assert_eq!(Cell::Player1.owner(), Some(Player::Player1));
        assert_eq!(Cell::Player2.owner(), Some(Player::Player2));
    }
}
