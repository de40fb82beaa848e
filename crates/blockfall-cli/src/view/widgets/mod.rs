use ratatui::{layout::Rect, widgets::Block as BlockWidget};

pub use self::{
    board_display::*, cell_display::*, game_display::*, key_binding_display::*, score_display::*,
};

mod board_display;
mod cell_display;
mod game_display;
mod key_binding_display;
mod score_display;

mod color {
    use ratatui::style::Color;

    pub const CYAN: Color = Color::Rgb(0, 255, 255);
    pub const BLUE: Color = Color::Rgb(0, 0, 255);
    pub const ORANGE: Color = Color::Rgb(255, 165, 0);
    pub const YELLOW: Color = Color::Rgb(255, 255, 0);
    pub const GREEN: Color = Color::Rgb(0, 128, 0);
    pub const PURPLE: Color = Color::Rgb(128, 0, 128);
    pub const RED: Color = Color::Rgb(255, 0, 0);
    pub const GRAY: Color = Color::Rgb(127, 127, 127);
    pub const BLACK: Color = Color::Rgb(0, 0, 0);
    pub const WHITE: Color = Color::Rgb(255, 255, 255);
}

pub mod style {
    use ratatui::style::{Color, Style};

    use crate::view::widgets::color;

    const fn fg_bg(fg: Color, bg: Color) -> Style {
        Style::new().fg(fg).bg(bg)
    }

    const fn bg_only(color: Color) -> Style {
        Style::new().fg(color).bg(color)
    }

    pub const DEFAULT: Style = fg_bg(color::WHITE, color::BLACK);
    pub const EMPTY_DOT: Style = fg_bg(color::GRAY, color::BLACK);
    pub const GAME_OVER: Style = fg_bg(color::WHITE, color::RED);

    pub const I_BLOCK: Style = bg_only(color::CYAN);
    pub const J_BLOCK: Style = bg_only(color::BLUE);
    pub const L_BLOCK: Style = bg_only(color::ORANGE);
    pub const O_BLOCK: Style = bg_only(color::YELLOW);
    pub const S_BLOCK: Style = bg_only(color::GREEN);
    pub const T_BLOCK: Style = bg_only(color::PURPLE);
    pub const Z_BLOCK: Style = bg_only(color::RED);

    pub const RUNNING_BORDER: Color = color::WHITE;
    pub const GAME_OVER_BORDER: Color = color::RED;
}

/// Columns and rows an optional border block takes from its content area.
fn block_margin(block: Option<&BlockWidget>) -> (u16, u16) {
    let Some(block) = block else {
        return (0, 0);
    };
    let outer = Rect::new(0, 0, u16::MAX / 2, u16::MAX / 2);
    let inner = block.inner(outer);
    (outer.width - inner.width, outer.height - inner.height)
}
