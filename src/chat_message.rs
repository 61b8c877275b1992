use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};
use textwrap::wrap;

use crate::conversation::{ChatMessage, Role};
use crate::theme::Palette;

impl ChatMessage {
    /// Lays the message out as framed terminal lines: a timestamp header,
    /// the wrapped body and a closing corner. Suggestion chips are drawn by
    /// the chat view, not here, because only the newest message offers them.
    pub fn render(&self, width: u16, palette: &Palette) -> Vec<Line<'static>> {
        let mut lines = Vec::new();
        let base_style = self.base_style(palette);
        let indent = if self.role == Role::User { "  " } else { "" };

        self.render_header(&mut lines, base_style, indent);
        self.render_content(&mut lines, width, base_style, indent);

        lines.push(Line::from(vec![
            Span::styled(indent.to_string(), base_style),
            Span::styled("╰─".to_string(), base_style),
        ]));

        lines
    }

    fn base_style(&self, palette: &Palette) -> Style {
        match self.role {
            Role::User => Style::default().fg(palette.secondary),
            Role::Assistant => Style::default().fg(palette.accent_agent),
        }
    }

    fn render_header(&self, lines: &mut Vec<Line<'static>>, style: Style, indent: &str) {
        let timestamp = self.timestamp.format("%H:%M").to_string();
        let who = match self.role {
            Role::User => "tú",
            Role::Assistant => "agente",
        };

        lines.push(Line::from(vec![
            Span::styled(indent.to_string(), style),
            Span::styled("┌─".to_string(), style),
            Span::styled(timestamp, style.add_modifier(Modifier::DIM)),
            Span::styled(" ".to_string(), style),
            Span::styled(who.to_string(), style.add_modifier(Modifier::BOLD)),
        ]));
    }

    fn render_content(
        &self,
        lines: &mut Vec<Line<'static>>,
        width: u16,
        style: Style,
        indent: &str,
    ) {
        let wrap_width = (width as usize).saturating_sub(6).max(10);

        for raw_line in self.content.lines() {
            if raw_line.is_empty() {
                lines.push(Line::from(vec![
                    Span::styled(indent.to_string(), style),
                    Span::styled("│".to_string(), style),
                ]));
                continue;
            }

            for wrapped in wrap(raw_line, wrap_width) {
                let mut spans = vec![
                    Span::styled(indent.to_string(), style),
                    Span::styled("│ ".to_string(), style),
                ];
                spans.extend(styled_segments(&wrapped, style));
                lines.push(Line::from(spans));
            }
        }
    }
}

/// Splits a line on `**` markers, toggling bold. Markers that never close
/// are rendered literally as written.
fn styled_segments(text: &str, style: Style) -> Vec<Span<'static>> {
    let parts: Vec<&str> = text.split("**").collect();
    if parts.len() < 3 {
        return vec![Span::styled(text.to_string(), style)];
    }

    let mut spans = Vec::new();
    for (i, part) in parts.iter().enumerate() {
        if part.is_empty() {
            continue;
        }
        let seg_style = if i % 2 == 1 {
            style.add_modifier(Modifier::BOLD)
        } else {
            style
        };
        spans.push(Span::styled((*part).to_string(), seg_style));
    }
    spans
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::ThemeMode;

    #[test]
    fn test_render_frames_the_message() {
        let msg = ChatMessage::assistant("hola\n\nmundo", Vec::new());
        let palette = ThemeMode::Dark.palette();
        let lines = msg.render(60, palette);

        // header + three content lines + footer
        assert_eq!(lines.len(), 5);
        assert!(lines[0].spans.iter().any(|s| s.content.contains("agente")));
        assert!(lines[4].spans.iter().any(|s| s.content.contains("╰─")));
    }

    #[test]
    fn test_bold_segments_are_split_out() {
        let spans = styled_segments("antes **fuerte** después", Style::default());
        assert_eq!(spans.len(), 3);
        assert_eq!(spans[1].content, "fuerte");
        assert!(spans[1].style.add_modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn test_unclosed_marker_renders_literally() {
        let spans = styled_segments("sin **cierre", Style::default());
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].content, "sin **cierre");
    }
}
