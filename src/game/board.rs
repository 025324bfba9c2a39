use super::player::Player;
use crate::error::{BoardError, MoveError};

pub const DEFAULT_WIDTH: usize = 7;
pub const DEFAULT_HEIGHT: usize = 6;
/// Largest accepted width or height
pub const MAX_DIMENSION: usize = 64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    One,
    Two,
}

impl Cell {
    /// The player occupying this cell, if any
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::One => Some(Player::One),
            Cell::Two => Some(Player::Two),
        }
    }

    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

/// A (row, column) coordinate. Row 0 is the top of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Position { row, col }
    }
}

/// Fixed-size grid of cells stored row-major.
///
/// Cells are only ever written through [`Board::drop_piece`], so a piece can
/// never float above an empty cell and an occupied cell is never overwritten.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create an empty board of the given dimensions
    pub fn new(width: usize, height: usize) -> Result<Self, BoardError> {
        if width == 0 || height == 0 {
            return Err(BoardError::InvalidDimensions { width, height });
        }
        if width > MAX_DIMENSION || height > MAX_DIMENSION {
            return Err(BoardError::TooLarge {
                width,
                height,
                max: MAX_DIMENSION,
            });
        }
        Ok(Board {
            width,
            height,
            cells: vec![Cell::Empty; width * height],
        })
    }

    /// Create the standard 7x6 board
    pub fn standard() -> Self {
        Board {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            cells: vec![Cell::Empty; DEFAULT_WIDTH * DEFAULT_HEIGHT],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Get the cell at a specific position
    /// Row 0 is the top, row `height - 1` is the bottom
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row * self.width + col]
    }

    /// Like [`Board::get`], but `None` for coordinates off the board
    pub fn try_get(&self, row: isize, col: isize) -> Option<Cell> {
        if row < 0 || col < 0 {
            return None;
        }
        let (row, col) = (row as usize, col as usize);
        if row >= self.height || col >= self.width {
            return None;
        }
        Some(self.get(row, col))
    }

    /// Iterate over every cell in row-major order
    pub fn cells(&self) -> impl Iterator<Item = (Position, Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &cell)| (Position::new(i / self.width, i % self.width), cell))
    }

    /// Check if a column is full
    pub fn is_column_full(&self, col: usize) -> bool {
        if col >= self.width {
            return true;
        }
        !self.get(0, col).is_empty()
    }

    /// Find the row a piece dropped into `col` would come to rest in.
    ///
    /// Scans from the bottom row upward and returns the first empty row.
    pub fn find_landing_row(&self, col: usize) -> Result<usize, MoveError> {
        if col >= self.width {
            return Err(MoveError::ColumnOutOfRange {
                column: col,
                width: self.width,
            });
        }

        (0..self.height)
            .rev()
            .find(|&row| self.get(row, col).is_empty())
            .ok_or(MoveError::ColumnFull { column: col })
    }

    /// Drop a piece in a column, returns the row where it landed
    pub fn drop_piece(&mut self, col: usize, player: Player) -> Result<usize, MoveError> {
        let row = self.find_landing_row(col)?;
        self.cells[row * self.width + col] = player.to_cell();
        Ok(row)
    }

    /// Columns that can still accept a piece
    pub fn legal_columns(&self) -> Vec<usize> {
        (0..self.width)
            .filter(|&col| !self.is_column_full(col))
            .collect()
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        !self.cells.iter().any(|cell| cell.is_empty())
    }

    /// Number of occupied cells
    pub fn occupied(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_empty()).count()
    }
}

/// One line per row, top first: `.` for empty, `1`/`2` for the players.
impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..self.height {
            for col in 0..self.width {
                let symbol = match self.get(row, col) {
                    Cell::Empty => '.',
                    Cell::One => '1',
                    Cell::Two => '2',
                };
                write!(f, "{symbol}")?;
            }
            writeln!(f)?;
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
        let board = Board::standard();
        for row in 0..DEFAULT_HEIGHT {
            for col in 0..DEFAULT_WIDTH {
                assert_eq!(board.get(row, col), Cell::Empty);
            }
        }
        assert_eq!(board.occupied(), 0);
        assert!(!board.is_full());
    }

    #[test]
    fn test_new_rejects_zero_dimensions() {
        assert_eq!(
            Board::new(0, 6),
            Err(BoardError::InvalidDimensions { width: 0, height: 6 })
        );
        assert_eq!(
            Board::new(7, 0),
            Err(BoardError::InvalidDimensions { width: 7, height: 0 })
        );
        assert!(Board::new(1, 1).is_ok());
    }

    #[test]
    fn test_new_rejects_oversized_dimensions() {
        assert!(Board::new(MAX_DIMENSION, MAX_DIMENSION).is_ok());
        assert_eq!(
            Board::new(MAX_DIMENSION + 1, 6),
            Err(BoardError::TooLarge {
                width: MAX_DIMENSION + 1,
                height: 6,
                max: MAX_DIMENSION
            })
        );
        // Product would overflow usize
        assert!(matches!(
            Board::new(1 << (usize::BITS - 2), 4),
            Err(BoardError::TooLarge { .. })
        ));
        assert!(Board::new(7, usize::MAX).is_err());
    }

    #[test]
    fn test_drop_piece() {
        let mut board = Board::standard();

        // Drop first piece in column 3
        let row = board.drop_piece(3, Player::One).unwrap();
        assert_eq!(row, 5); // Should land at bottom
        assert_eq!(board.get(5, 3), Cell::One);

        // Drop second piece in same column
        let row = board.drop_piece(3, Player::Two).unwrap();
        assert_eq!(row, 4); // Should land on top of first piece
        assert_eq!(board.get(4, 3), Cell::Two);
    }

    #[test]
    fn test_find_landing_row_does_not_mutate() {
        let mut board = Board::standard();
        assert_eq!(board.find_landing_row(0), Ok(5));
        assert_eq!(board.find_landing_row(0), Ok(5));
        board.drop_piece(0, Player::One).unwrap();
        assert_eq!(board.find_landing_row(0), Ok(4));
    }

    #[test]
    fn test_column_full() {
        let mut board = Board::standard();

        // Fill column 0
        for _ in 0..DEFAULT_HEIGHT {
            board.drop_piece(0, Player::One).unwrap();
        }

        assert!(board.is_column_full(0));
        assert_eq!(
            board.drop_piece(0, Player::Two),
            Err(MoveError::ColumnFull { column: 0 })
        );
        assert_eq!(board.legal_columns(), vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_invalid_column() {
        let mut board = Board::standard();
        assert_eq!(
            board.drop_piece(7, Player::One),
            Err(MoveError::ColumnOutOfRange { column: 7, width: 7 })
        );
        assert_eq!(board.occupied(), 0);
    }

    #[test]
    fn test_full_board() {
        let mut board = Board::standard();
        for col in 0..DEFAULT_WIDTH {
            for _ in 0..DEFAULT_HEIGHT {
                board.drop_piece(col, Player::One).unwrap();
            }
        }
        assert!(board.is_full());
        assert!(board.legal_columns().is_empty());
    }

    #[test]
    fn test_non_standard_dimensions() {
        let mut board = Board::new(3, 2).unwrap();
        assert_eq!(board.drop_piece(2, Player::One), Ok(1));
        assert_eq!(board.drop_piece(2, Player::Two), Ok(0));
        assert_eq!(
            board.drop_piece(2, Player::One),
            Err(MoveError::ColumnFull { column: 2 })
        );
        assert_eq!(
            board.drop_piece(3, Player::One),
            Err(MoveError::ColumnOutOfRange { column: 3, width: 3 })
        );
    }

    #[test]
    fn test_display() {
        let mut board = Board::new(3, 2).unwrap();
        board.drop_piece(1, Player::One).unwrap();
        board.drop_piece(1, Player::Two).unwrap();
        assert_eq!(board.to_string(), ".2.\n.1.\n");
    }

    #[test]
    fn test_try_get_bounds() {
        let board = Board::standard();
        assert_eq!(board.try_get(0, 0), Some(Cell::Empty));
        assert_eq!(board.try_get(-1, 0), None);
        assert_eq!(board.try_get(0, -1), None);
        assert_eq!(board.try_get(6, 0), None);
        assert_eq!(board.try_get(0, 7), None);
    }

    #[test]
    fn test_cells_are_row_major() {
        let board = Board::new(3, 2).unwrap();
        let positions: Vec<_> = board.cells().map(|(pos, _)| (pos.row, pos.col)).collect();
        assert_eq!(positions, vec![(0, 0), (0, 1), (0, 2), (1, 0), (1, 1), (1, 2)]);
    }
}
