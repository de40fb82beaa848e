pub use self::{core::*, engine::*};

pub mod core;
pub mod engine;

/// Error returned when parsing the text form of a [`Grid`] fails.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GridParseError {
    #[display("expected at most {} rows, got {}", GRID_HEIGHT, _0)]
    TooManyRows(#[error(not(source))] usize),
    #[display("row {row} must have exactly {} cells, got {width}", GRID_WIDTH)]
    RowWidth { row: usize, width: usize },
    #[display("invalid cell {ch:?} at row {row}")]
    InvalidCell { row: usize, ch: char },
}

/// Error returned when parsing a [`PieceSeed`] from its hex form fails.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseSeedError {
    #[display("invalid hex: expected 32 characters, got {_0}")]
    Length(#[error(not(source))] usize),
    #[display("invalid hex: {_0}")]
    Digits(#[error(not(source))] String),
}
