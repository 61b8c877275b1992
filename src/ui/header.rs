use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;
use crate::data::ATHLETE;

pub fn draw_header(f: &mut Frame, area: Rect, app: &App) {
    let palette = app.theme.palette();

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let title = Paragraph::new(vec![
        Line::from(Span::styled(
            "CADENCIA",
            Style::default()
                .fg(palette.primary)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Entrenamiento Inteligente",
            Style::default().fg(palette.text_tertiary),
        )),
    ]);
    f.render_widget(title, chunks[0]);

    let athlete = Paragraph::new(vec![
        Line::from(Span::styled(
            format!("{} ({})", ATHLETE.name, ATHLETE.initials),
            Style::default().fg(palette.text).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!(
                "FTP: {}W • {} W/kg • tema {}",
                ATHLETE.ftp_watts,
                ATHLETE.watts_per_kg,
                app.theme.label()
            ),
            Style::default().fg(palette.text_tertiary),
        )),
    ])
    .alignment(ratatui::layout::Alignment::Right);
    f.render_widget(athlete, chunks[1]);
}
