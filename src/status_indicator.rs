use crate::theme::Palette;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Animated "the agent is typing" strip under the message area.
#[derive(Debug, Default)]
pub struct StatusIndicator {
    typing: bool,
    frame_idx: usize,
}

const DOT_FRAMES: [&str; 4] = ["●∙∙", "∙●∙", "∙∙●", "∙●∙"];

impl StatusIndicator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_typing(&mut self, typing: bool) {
        self.typing = typing;
        if !typing {
            self.frame_idx = 0;
        }
    }

    pub fn is_typing(&self) -> bool {
        self.typing
    }

    pub fn advance(&mut self) {
        if self.typing {
            self.frame_idx = self.frame_idx.wrapping_add(1);
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, palette: &Palette) {
        let line = if self.typing {
            Line::from(vec![
                Span::styled(
                    DOT_FRAMES[self.frame_idx % DOT_FRAMES.len()],
                    Style::default().fg(palette.accent_agent),
                ),
                Span::raw(" "),
                Span::styled(
                    "El agente está escribiendo...",
                    Style::default().fg(palette.text_tertiary),
                ),
            ])
        } else {
            Line::from("")
        };

        frame.render_widget(Paragraph::new(line), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_only_moves_while_typing() {
        let mut indicator = StatusIndicator::new();
        indicator.advance();
        assert_eq!(indicator.frame_idx, 0);

        indicator.set_typing(true);
        indicator.advance();
        assert_eq!(indicator.frame_idx, 1);

        indicator.set_typing(false);
        assert_eq!(indicator.frame_idx, 0);
    }
}
