use std::iter;

use blockfall_engine::{Cell, GRID_HEIGHT, GRID_WIDTH, Grid, Piece};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Flex, Layout, Rect},
    widgets::{Block as BlockWidget, BlockExt, Widget},
};

use crate::view::widgets::CellDisplay;

/// The settled grid with the active piece drawn on top.
///
/// Active-piece blocks above the visible top are not drawn.
#[derive(Debug)]
pub struct BoardDisplay<'a> {
    grid: &'a Grid,
    active_piece: Option<Piece>,
    block: Option<BlockWidget<'a>>,
}

impl<'a> BoardDisplay<'a> {
    pub fn new(grid: &'a Grid) -> Self {
        Self {
            grid,
            active_piece: None,
            block: None,
        }
    }

    pub fn active_piece(self, piece: Piece) -> Self {
        Self {
            active_piece: Some(piece),
            ..self
        }
    }

    pub fn block(self, block: BlockWidget<'a>) -> Self {
        Self {
            block: Some(block),
            ..self
        }
    }

    #[expect(clippy::cast_possible_truncation)]
    pub fn width(&self) -> u16 {
        GRID_WIDTH as u16 * CellDisplay::WIDTH
            + super::block_margin(self.block.as_ref()).0
    }

    #[expect(clippy::cast_possible_truncation)]
    pub fn height(&self) -> u16 {
        GRID_HEIGHT as u16 * CellDisplay::HEIGHT
            + super::block_margin(self.block.as_ref()).1
    }

    fn cells(&self) -> [[Cell; GRID_WIDTH]; GRID_HEIGHT] {
        let mut cells = [[Cell::Empty; GRID_WIDTH]; GRID_HEIGHT];
        for (dst, row) in iter::zip(&mut cells, self.grid.rows()) {
            *dst = *row.cells();
        }
        if let Some(piece) = self.active_piece {
            for (x, y) in piece.occupied_positions() {
                if let (Ok(x), Ok(y)) = (usize::try_from(x), usize::try_from(y))
                    && x < GRID_WIDTH
                    && y < GRID_HEIGHT
                {
                    cells[y][x] = Cell::Occupied(piece.kind());
                }
            }
        }
        cells
    }
}

impl Widget for BoardDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        Widget::render(&self, area, buf);
    }
}

impl Widget for &BoardDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.block.as_ref().render(area, buf);
        let area = self.block.inner_if_some(area);

        let col_constraints = (0..GRID_WIDTH).map(|_| Constraint::Length(CellDisplay::WIDTH));
        let row_constraints = (0..GRID_HEIGHT).map(|_| Constraint::Length(CellDisplay::HEIGHT));
        let horizontal = Layout::horizontal(col_constraints).flex(Flex::Center);
        let vertical = Layout::vertical(row_constraints);

        let grid_cells = area
            .layout::<GRID_HEIGHT>(&vertical)
            .into_iter()
            .map(|row| row.layout::<GRID_WIDTH>(&horizontal));

        for (grid_row, row) in iter::zip(grid_cells, self.cells()) {
            for (grid_cell, cell) in iter::zip(grid_row, row) {
                CellDisplay::new(cell).render(grid_cell, buf);
            }
        }
    }
}
