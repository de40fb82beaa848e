use blockfall_engine::{Cell, ShapeKind};
use ratatui::{
    prelude::{Buffer, Rect},
    style::Style,
    widgets::Widget,
};

use crate::view::widgets::style;

/// One grid cell, drawn as a square two terminal columns wide.
///
/// Occupied cells are solid blocks in the color of their shape. Empty cells
/// show a dim dot in the left column.
#[derive(Debug, Clone, Copy)]
pub struct CellDisplay(Cell);

impl CellDisplay {
    pub const WIDTH: u16 = 2;
    pub const HEIGHT: u16 = 1;

    pub const fn new(cell: Cell) -> Self {
        Self(cell)
    }

    fn style(self) -> Style {
        match self.0 {
            Cell::Empty => style::EMPTY_DOT,
            Cell::Occupied(ShapeKind::I) => style::I_BLOCK,
            Cell::Occupied(ShapeKind::J) => style::J_BLOCK,
            Cell::Occupied(ShapeKind::L) => style::L_BLOCK,
            Cell::Occupied(ShapeKind::O) => style::O_BLOCK,
            Cell::Occupied(ShapeKind::S) => style::S_BLOCK,
            Cell::Occupied(ShapeKind::T) => style::T_BLOCK,
            Cell::Occupied(ShapeKind::Z) => style::Z_BLOCK,
        }
    }
}

impl Widget for CellDisplay {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let area = area.intersection(buf.area);
        buf.set_style(area, self.style());
        if self.0.is_empty() && !area.is_empty() {
            buf[(area.x, area.y)].set_symbol(".");
        }
    }
}
