use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph, Wrap},
    Frame,
};

use crate::theme::Palette;

#[derive(Debug, Clone, Copy)]
pub enum BadgeVariant {
    Success,
    Warning,
    Info,
    Neutral,
}

/// Small inline status pill, the terminal rendition of a stat badge.
pub fn stat_badge(text: &str, variant: BadgeVariant, palette: &Palette) -> Span<'static> {
    let color = match variant {
        BadgeVariant::Success => palette.success,
        BadgeVariant::Warning => palette.warning,
        BadgeVariant::Info => palette.info,
        BadgeVariant::Neutral => palette.text_tertiary,
    };
    Span::styled(
        format!("[{text}]"),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    )
}

/// Bordered card with a title, a large value line, a subtitle and an
/// optional progress gauge at the bottom.
pub fn metric_card(
    f: &mut Frame,
    area: Rect,
    title: &str,
    value: &str,
    subtitle: &str,
    progress: Option<f64>,
    accent: Color,
    palette: &Palette,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.border))
        .title(Span::styled(
            format!(" {title} "),
            Style::default().fg(accent).add_modifier(Modifier::BOLD),
        ));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let constraints = if progress.is_some() {
        vec![Constraint::Length(1), Constraint::Length(1), Constraint::Length(1)]
    } else {
        vec![Constraint::Length(1), Constraint::Length(1)]
    };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    f.render_widget(
        Paragraph::new(Line::from(Span::styled(
            value.to_string(),
            Style::default().fg(palette.text).add_modifier(Modifier::BOLD),
        ))),
        chunks[0],
    );
    f.render_widget(
        Paragraph::new(Line::from(Span::styled(
            subtitle.to_string(),
            Style::default().fg(palette.text_tertiary),
        ))),
        chunks[1],
    );

    if let Some(ratio) = progress {
        let gauge = Gauge::default()
            .gauge_style(Style::default().fg(accent).bg(palette.surface))
            .ratio(ratio.clamp(0.0, 1.0))
            .label("");
        f.render_widget(gauge, chunks[2]);
    }
}

/// Full-width accent card used as the hero header of a view.
pub fn hero_card(
    f: &mut Frame,
    area: Rect,
    title: &str,
    lines: Vec<Line<'static>>,
    accent: Color,
    palette: &Palette,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(accent))
        .title(Span::styled(
            format!(" {title} "),
            Style::default().fg(accent).add_modifier(Modifier::BOLD),
        ));
    let inner = block.inner(area);
    f.render_widget(block, area);

    f.render_widget(
        Paragraph::new(lines)
            .style(Style::default().fg(palette.text))
            .wrap(Wrap { trim: true }),
        inner,
    );
}

/// Clamped percentage for gauge widgets.
pub fn ratio_of(current: f64, goal: f64) -> f64 {
    if goal <= 0.0 {
        return 0.0;
    }
    (current / goal).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ratio_is_clamped() {
        assert_eq!(ratio_of(50.0, 100.0), 0.5);
        assert_eq!(ratio_of(150.0, 100.0), 1.0);
        assert_eq!(ratio_of(10.0, 0.0), 0.0);
    }
}
