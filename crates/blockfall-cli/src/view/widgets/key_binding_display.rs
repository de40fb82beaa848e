use ratatui::{
    prelude::{Buffer, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Widget,
};

/// Alternative keys and what they do.
pub type KeyBinding<'a> = (&'a [&'a str], &'a str);

/// One-line help bar listing key bindings.
#[derive(Debug)]
pub struct KeyBindingDisplay<'a> {
    bindings: &'a [KeyBinding<'a>],
}

impl<'a> KeyBindingDisplay<'a> {
    pub fn new(bindings: &'a [KeyBinding<'a>]) -> Self {
        Self { bindings }
    }

    fn line(&self) -> Line<'a> {
        let mut spans = Vec::new();
        for &(keys, action) in self.bindings {
            if !spans.is_empty() {
                spans.push(Span::styled(" | ", SEPARATOR_STYLE));
            }
            for (n, &key) in keys.iter().enumerate() {
                if n > 0 {
                    spans.push(Span::styled("/", SEPARATOR_STYLE));
                }
                spans.push(Span::styled(key, KEY_STYLE));
            }
            spans.push(Span::styled(format!(" {action}"), ACTION_STYLE));
        }
        Line::from(spans).centered()
    }
}

const KEY_STYLE: Style = Style::new().fg(Color::Cyan);
const ACTION_STYLE: Style = Style::new().fg(Color::White);
const SEPARATOR_STYLE: Style = Style::new().fg(Color::DarkGray);

impl Widget for KeyBindingDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.line().render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_text() {
        let bindings: &[KeyBinding] = &[(&["←", "→"], "Move"), (&["Q", "Esc"], "Quit")];
        let display = KeyBindingDisplay::new(bindings);
        assert_eq!(display.line().to_string(), "←/→ Move | Q/Esc Quit");
    }

    #[test]
    fn test_render_is_centered() {
        let bindings: &[KeyBinding] = &[(&["R"], "Restart")];
        let area = Rect::new(0, 0, 11, 1);
        let mut buf = Buffer::empty(area);
        KeyBindingDisplay::new(bindings).render(area, &mut buf);
        let text: String = (0..11).map(|x| buf[(x, 0)].symbol()).collect();
        assert_eq!(text, " R Restart ");
        assert_eq!(buf[(1, 0)].fg, Color::Cyan);
    }
}
