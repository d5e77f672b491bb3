use std::fmt::{self, Write as _};

use super::Player;
use crate::error::MoveError;

/// Number of aligned pieces needed to win.
pub const WIN_LENGTH: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Red,
    Yellow,
}

impl Cell {
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    /// The player occupying this cell, if any
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Red => Some(Player::Red),
            Cell::Yellow => Some(Player::Yellow),
        }
    }

    fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Red => 'R',
            Cell::Yellow => 'Y',
        }
    }
}

/// A board position. Row 0 is the top row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub const fn new(row: usize, col: usize) -> Self {
        Coord { row, col }
    }
}

/// Orientation of a line of pieces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Left to right along a row
    Horizontal,
    /// Top to bottom along a column
    Vertical,
    /// Top-left to bottom-right (\)
    DiagonalDown,
    /// Top-right to bottom-left (/)
    DiagonalUp,
}

impl Direction {
    /// Order in which orientations are checked for a win.
    pub const ALL: [Direction; 4] = [
        Direction::Horizontal,
        Direction::Vertical,
        Direction::DiagonalDown,
        Direction::DiagonalUp,
    ];

    /// (row, col) offset between consecutive cells of a line
    pub fn step(self) -> (isize, isize) {
        match self {
            Direction::Horizontal => (0, 1),
            Direction::Vertical => (1, 0),
            Direction::DiagonalDown => (1, 1),
            Direction::DiagonalUp => (1, -1),
        }
    }
}

/// The four cells of a completed line, ordered from one end to the other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WinningLine {
    cells: [Coord; WIN_LENGTH],
    direction: Direction,
}

impl WinningLine {
    pub fn cells(&self) -> &[Coord; WIN_LENGTH] {
        &self.cells
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn contains(&self, coord: Coord) -> bool {
        self.cells.contains(&coord)
    }
}

/// A `rows x cols` grid of cells stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty board
    pub fn new(rows: usize, cols: usize) -> Self {
        Board {
            rows,
            cols,
            cells: vec![Cell::Empty; rows * cols],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Get the cell at a specific position, `None` when out of range
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        (row < self.rows && col < self.cols).then(|| self.cells[self.index(row, col)])
    }

    fn index(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    /// Check if a column is full. Columns outside the board count as full.
    pub fn is_column_full(&self, col: usize) -> bool {
        match self.get(0, col) {
            Some(cell) => !cell.is_empty(),
            None => true,
        }
    }

    /// Row a piece dropped into `col` would land on
    pub fn lowest_empty_row(&self, col: usize) -> Option<usize> {
        if col >= self.cols {
            return None;
        }
        (0..self.rows)
            .rev()
            .find(|&row| self.cells[self.index(row, col)].is_empty())
    }

    /// Drop a piece in a column, returns the row where it landed
    pub fn drop_piece(&mut self, col: usize, player: Player) -> Result<usize, MoveError> {
        if col >= self.cols {
            return Err(MoveError::InvalidColumn { columns: self.cols });
        }

        let row = self
            .lowest_empty_row(col)
            .ok_or(MoveError::ColumnFull(col))?;
        let idx = self.index(row, col);
        self.cells[idx] = player.to_cell();
        Ok(row)
    }

    /// Check if the board is completely full.
    ///
    /// Gravity keeps every column packed from the bottom, so the top row alone
    /// decides this.
    pub fn is_full(&self) -> bool {
        (0..self.cols).all(|col| self.is_column_full(col))
    }

    /// Find a completed line passing through the piece at (row, col).
    ///
    /// Only windows containing that cell are inspected, which is enough after
    /// a move since any new line must include the newest piece. Orientations
    /// are tried in [`Direction::ALL`] order and, within one orientation,
    /// the window starting furthest back along the step wins.
    pub fn winning_line_through(&self, row: usize, col: usize) -> Option<WinningLine> {
        let player = self.get(row, col)?.player()?;

        Direction::ALL.into_iter().find_map(|direction| {
            let (dr, dc) = direction.step();
            (0..WIN_LENGTH as isize).rev().find_map(|back| {
                self.window_at(
                    row as isize - back * dr,
                    col as isize - back * dc,
                    direction,
                    player,
                )
            })
        })
    }

    /// Check if the last move at (row, col) resulted in a win
    pub fn check_win(&self, row: usize, col: usize) -> bool {
        self.winning_line_through(row, col).is_some()
    }

    /// Scan every window on the board for a line owned by `player`.
    ///
    /// Slower than [`Board::winning_line_through`], which only looks at lines
    /// through a single cell.
    pub fn find_winning_line(&self, player: Player) -> Option<WinningLine> {
        Direction::ALL.into_iter().find_map(|direction| {
            (0..self.rows).find_map(|row| {
                (0..self.cols)
                    .find_map(|col| self.window_at(row as isize, col as isize, direction, player))
            })
        })
    }

    fn window_at(
        &self,
        row: isize,
        col: isize,
        direction: Direction,
        player: Player,
    ) -> Option<WinningLine> {
        let (dr, dc) = direction.step();
        let mut cells = [Coord::new(0, 0); WIN_LENGTH];

        for (i, slot) in cells.iter_mut().enumerate() {
            let r = usize::try_from(row + i as isize * dr).ok()?;
            let c = usize::try_from(col + i as isize * dc).ok()?;
            if self.get(r, c)?.player() != Some(player) {
                return None;
            }
            *slot = Coord::new(r, c);
        }

        Some(WinningLine { cells, direction })
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows {
            for col in 0..self.cols {
                if col > 0 {
                    f.write_char(' ')?;
                }
                f.write_char(self.cells[self.index(row, col)].symbol())?;
            }
            f.write_char('\n')?;
        }

        // Column labels, last digit only so wide boards stay aligned
        for col in 0..self.cols {
            if col > 0 {
                f.write_char(' ')?;
            }
            write!(f, "{}", col % 10)?;
        }
        Ok(())
    }
}
