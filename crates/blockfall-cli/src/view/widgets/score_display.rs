use blockfall_engine::GameStats;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::Line,
    widgets::{Block as BlockWidget, BlockExt as _, Widget},
};

use crate::view::widgets::style;

/// Score panel: the score plus line and piece counters.
pub struct ScoreDisplay<'a> {
    stats: &'a GameStats,
    block: Option<BlockWidget<'a>>,
}

impl<'a> ScoreDisplay<'a> {
    pub fn new(stats: &'a GameStats) -> Self {
        Self { stats, block: None }
    }

    pub fn block(self, block: BlockWidget<'a>) -> Self {
        Self {
            block: Some(block),
            ..self
        }
    }

    pub fn width(&self) -> u16 {
        16 + super::block_margin(self.block.as_ref()).0
    }

    #[expect(clippy::cast_possible_truncation)]
    pub fn height(&self) -> u16 {
        ROWS.len() as u16 + super::block_margin(self.block.as_ref()).1
    }
}

type Counter = &'static dyn Fn(&GameStats) -> usize;

/// One line of the panel.
#[derive(Clone, Copy)]
enum Row {
    Blank,
    Heading(&'static str),
    Total(Counter),
    Counter(&'static str, Counter),
}

const ROWS: &[Row] = &[
    Row::Heading("SCORE:"),
    Row::Total(&GameStats::score),
    Row::Blank,
    Row::Counter("LINES:", &GameStats::cleared_lines),
    Row::Counter("PIECES:", &GameStats::locked_pieces),
];

impl Row {
    fn render(self, stats: &GameStats, area: Rect, buf: &mut Buffer) {
        let style = style::DEFAULT;
        match self {
            Row::Blank => {}
            Row::Heading(text) => Line::styled(text, style).render(area, buf),
            Row::Total(value) => {
                Line::styled(value(stats).to_string(), style)
                    .right_aligned()
                    .render(area, buf);
            }
            Row::Counter(label, value) => {
                Line::styled(label, style).render(area, buf);
                Line::styled(value(stats).to_string(), style)
                    .right_aligned()
                    .render(area, buf);
            }
        }
    }
}

impl Widget for ScoreDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.block.as_ref().render(area, buf);
        let inner = self.block.inner_if_some(area);
        for (row, line_area) in ROWS.iter().zip(inner.rows()) {
            row.render(self.stats, line_area, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row_text(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width)
            .map(|x| buf[(x, y)].symbol())
            .collect::<String>()
    }

    #[test]
    fn test_shows_counters() {
        let mut stats = GameStats::new();
        stats.record_lock(2);
        stats.record_lock(0);
        let display = ScoreDisplay::new(&stats);
        let area = Rect::new(0, 0, display.width(), display.height());
        let mut buf = Buffer::empty(area);
        display.render(area, &mut buf);

        assert_eq!(row_text(&buf, 0).trim_end(), "SCORE:");
        assert_eq!(row_text(&buf, 1).trim_start(), "200");
        assert!(row_text(&buf, 3).starts_with("LINES:"));
        assert!(row_text(&buf, 3).ends_with(" 2"));
        assert!(row_text(&buf, 4).starts_with("PIECES:"));
        assert!(row_text(&buf, 4).ends_with(" 2"));
    }
}
