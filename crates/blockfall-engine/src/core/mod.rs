pub use self::{collision::*, grid::*, piece::*, shape::*};

pub(crate) mod collision;
pub(crate) mod grid;
pub(crate) mod piece;
pub(crate) mod shape;

/// Number of columns in the grid.
pub const GRID_WIDTH: usize = 10;
/// Number of rows in the grid.
pub const GRID_HEIGHT: usize = 20;

#[expect(clippy::cast_possible_wrap, clippy::cast_possible_truncation)]
pub(crate) const GRID_WIDTH_I32: i32 = GRID_WIDTH as i32;
#[expect(clippy::cast_possible_wrap, clippy::cast_possible_truncation)]
pub(crate) const GRID_HEIGHT_I32: i32 = GRID_HEIGHT as i32;
