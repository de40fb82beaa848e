use blockfall_engine::{GameState, Phase};
use ratatui::{
    layout::{Constraint, Flex, Layout},
    prelude::{Buffer, Rect},
    text::{Line, Text},
    widgets::{Block, Clear, Padding, Widget},
};

use crate::view::widgets::{BoardDisplay, ScoreDisplay, style};

/// Board and score panel side by side, with a popup once the game is over.
#[derive(Debug)]
pub struct GameDisplay<'a> {
    state: &'a GameState,
}

impl<'a> GameDisplay<'a> {
    pub fn new(state: &'a GameState) -> Self {
        Self { state }
    }

    fn board(&self) -> BoardDisplay<'a> {
        BoardDisplay::new(self.state.grid())
            .active_piece(*self.state.active_piece())
            .block(
                Block::bordered()
                    .border_style(self.border_color())
                    .style(style::DEFAULT),
            )
    }

    fn score(&self) -> ScoreDisplay<'a> {
        ScoreDisplay::new(self.state.stats()).block(
            Block::bordered()
                .title(Line::from("STATS").centered())
                .padding(Padding::horizontal(1))
                .border_style(self.border_color())
                .style(style::DEFAULT),
        )
    }

    fn border_color(&self) -> ratatui::style::Color {
        match self.state.phase() {
            Phase::Running => style::RUNNING_BORDER,
            Phase::GameOver => style::GAME_OVER_BORDER,
        }
    }

    pub fn height(&self) -> u16 {
        self.board().height()
    }
}

impl Widget for GameDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let board = self.board();
        let score = self.score();

        let [score_column, board_column] = Layout::horizontal([
            Constraint::Length(score.width()),
            Constraint::Length(board.width()),
        ])
        .flex(Flex::Center)
        .spacing(1)
        .areas(area);

        let [score_area] = Layout::vertical([Constraint::Length(score.height())]).areas(score_column);
        let [board_area] = Layout::vertical([Constraint::Length(board.height())]).areas(board_column);

        let board_width = board.width();
        score.render(score_area, buf);
        board.render(board_area, buf);

        if self.state.phase().is_game_over() {
            let block = Block::new().style(style::GAME_OVER);
            let text = Text::styled("GAME OVER", style::GAME_OVER).centered();
            let area = board_area.centered(Constraint::Length(board_width), Constraint::Length(3));
            let inner = block.inner(area);
            Clear.render(area, buf);
            block.render(area, buf);
            text.render(inner.centered_vertically(Constraint::Length(1)), buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use blockfall_engine::{GameEngine, Grid, ScriptedPieceSource, ShapeKind};

    use super::*;

    fn render_text(state: &GameState) -> Vec<String> {
        let area = Rect::new(0, 0, 60, 22);
        let mut buf = Buffer::empty(area);
        GameDisplay::new(state).render(area, &mut buf);
        (0..area.height)
            .map(|y| (0..area.width).map(|x| buf[(x, y)].symbol()).collect())
            .collect()
    }

    #[test]
    fn test_running_game_has_no_popup() {
        let engine = GameEngine::with_source(ScriptedPieceSource::new([ShapeKind::T]));
        assert_eq!(GameDisplay::new(engine.state()).height(), 22);
        let lines = render_text(engine.state());
        assert!(lines.iter().any(|line| line.contains("STATS")));
        assert!(lines.iter().any(|line| line.contains("SCORE:")));
        assert!(!lines.iter().any(|line| line.contains("GAME OVER")));
    }

    #[test]
    fn test_game_over_popup() {
        let mut grid = Grid::EMPTY;
        grid.set_cell(4, 0, ShapeKind::J);
        let engine = GameEngine::with_grid(ScriptedPieceSource::new([ShapeKind::O]), grid);
        assert!(engine.is_game_over());
        let lines = render_text(engine.state());
        assert!(lines.iter().any(|line| line.contains("GAME OVER")));
    }
}
