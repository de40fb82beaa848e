use std::{fmt, str::FromStr};

use crate::GridParseError;

use super::{GRID_HEIGHT, GRID_HEIGHT_I32, GRID_WIDTH, GRID_WIDTH_I32, shape::ShapeKind};

/// A single cell of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cell {
    /// No settled block.
    #[default]
    Empty,
    /// A settled block, colored after the kind of piece it came from.
    Occupied(ShapeKind),
}

impl Cell {
    #[must_use]
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    #[must_use]
    pub fn kind(self) -> Option<ShapeKind> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(kind) => Some(kind),
        }
    }

    fn as_char(self) -> char {
        self.kind().map_or('.', ShapeKind::as_char)
    }
}

/// One row of the grid, always exactly [`GRID_WIDTH`] cells wide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridRow {
    cells: [Cell; GRID_WIDTH],
}

impl GridRow {
    pub const EMPTY: Self = Self {
        cells: [Cell::Empty; GRID_WIDTH],
    };

    #[must_use]
    pub fn cells(&self) -> &[Cell; GRID_WIDTH] {
        &self.cells
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_empty())
    }
}

/// The playfield: [`GRID_HEIGHT`] rows of [`GRID_WIDTH`] settled cells.
///
/// Row 0 is the top of the visible area and `y` grows downward. Coordinates are
/// signed so that callers can ask about the region above the visible top
/// (`y < 0`), which is considered inside the grid but is never stored.
///
/// # Text form
///
/// For tests and debugging, a grid can be written one line per row, using `.`
/// for an empty cell and the kind letter (`I J L O S T Z`) for a settled one.
/// When fewer than [`GRID_HEIGHT`] lines are given, they describe the bottom
/// rows and everything above them is empty.
///
/// ```
/// use blockfall_engine::{Cell, Grid, ShapeKind};
///
/// let grid: Grid = "
///     ..........
///     ZZZZ.ZZZZZ
/// "
/// .parse()
/// .unwrap();
///
/// assert!(grid.is_occupied(0, 19));
/// assert!(!grid.is_occupied(4, 19));
/// assert_eq!(grid.cell(9, 19), Cell::Occupied(ShapeKind::Z));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: [GridRow; GRID_HEIGHT],
}

impl Default for Grid {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl Grid {
    pub const EMPTY: Self = Self {
        rows: [GridRow::EMPTY; GRID_HEIGHT],
    };

    /// Returns whether `(x, y)` lies within the walls and above the floor.
    ///
    /// Any `y < 0` is inside: the space above the visible top is open.
    #[must_use]
    pub fn is_inside(&self, x: i32, y: i32) -> bool {
        (0..GRID_WIDTH_I32).contains(&x) && y < GRID_HEIGHT_I32
    }

    /// Returns whether the visible cell at `(x, y)` holds a settled block.
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` is not a visible cell, including any `y < 0`.
    /// Callers must treat the area above the grid as empty themselves.
    #[must_use]
    pub fn is_occupied(&self, x: i32, y: i32) -> bool {
        !self.cell(x, y).is_empty()
    }

    /// Returns the visible cell at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` is not a visible cell.
    #[must_use]
    pub fn cell(&self, x: i32, y: i32) -> Cell {
        let (x, y) = Self::index(x, y);
        self.rows[y].cells[x]
    }

    /// Settles a block of the given kind at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` is not a visible cell.
    pub fn set_cell(&mut self, x: i32, y: i32, kind: ShapeKind) {
        let (x, y) = Self::index(x, y);
        self.rows[y].cells[x] = Cell::Occupied(kind);
    }

    /// Returns whether visible row `y` has no empty cell.
    ///
    /// # Panics
    ///
    /// Panics if `y` is not a visible row.
    #[must_use]
    pub fn is_row_full(&self, y: usize) -> bool {
        assert!(y < GRID_HEIGHT, "grid access out of bounds at row {y}");
        self.rows[y].is_full()
    }

    /// Returns an iterator over the rows from top to bottom.
    pub fn rows(&self) -> impl ExactSizeIterator<Item = &GridRow> {
        self.rows.iter()
    }

    /// Removes every full row and returns how many were removed.
    ///
    /// Rows are scanned from the bottom up. When row `y` is removed, every row
    /// above it moves down by one, an empty row appears at the top, and row `y`
    /// is examined again before the scan moves on, so a row shifted into a
    /// cleared slot is never skipped.
    pub fn clear_full_rows(&mut self) -> usize {
        let mut cleared = 0;
        let mut y = GRID_HEIGHT;
        while y > 0 {
            let row = y - 1;
            if self.is_row_full(row) {
                self.rows.copy_within(..row, 1);
                self.rows[0] = GridRow::EMPTY;
                cleared += 1;
                continue;
            }
            y -= 1;
        }
        cleared
    }

    #[expect(clippy::cast_sign_loss)]
    fn index(x: i32, y: i32) -> (usize, usize) {
        assert!(
            (0..GRID_WIDTH_I32).contains(&x) && (0..GRID_HEIGHT_I32).contains(&y),
            "grid access out of bounds at ({x}, {y})"
        );
        (x as usize, y as usize)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (y, row) in self.rows.iter().enumerate() {
            if y > 0 {
                writeln!(f)?;
            }
            for cell in row.cells {
                write!(f, "{}", cell.as_char())?;
            }
        }
        Ok(())
    }
}

impl FromStr for Grid {
    type Err = GridParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lines: Vec<&str> = s
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        if lines.len() > GRID_HEIGHT {
            return Err(GridParseError::TooManyRows(lines.len()));
        }

        let mut grid = Self::EMPTY;
        let top = GRID_HEIGHT - lines.len();
        for (i, line) in lines.iter().enumerate() {
            let row = top + i;
            let width = line.chars().count();
            if width != GRID_WIDTH {
                return Err(GridParseError::RowWidth { row, width });
            }
            for (x, ch) in line.chars().enumerate() {
                grid.rows[row].cells[x] = match ch {
                    '.' => Cell::Empty,
                    _ => Cell::Occupied(
                        ShapeKind::from_char(ch).ok_or(GridParseError::InvalidCell { row, ch })?,
                    ),
                };
            }
        }
        Ok(grid)
    }
}
