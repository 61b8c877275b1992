use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::app::App;
use crate::data::{ATHLETE, TODAY};
use crate::theme::Palette;

pub fn draw_agent(f: &mut Frame, app: &App, area: Rect) {
    let palette = app.theme.palette();

    let horizontal_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(2, 3), Constraint::Ratio(1, 3)])
        .split(area);

    let chat_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(horizontal_chunks[0]);

    draw_messages(f, app, chat_chunks[0], palette);
    app.status_indicator.render(f, chat_chunks[1], palette);
    draw_input(f, app, chat_chunks[2], palette);
    draw_side_panel(f, app, horizontal_chunks[1], palette);
}

fn draw_messages(f: &mut Frame, app: &App, area: Rect, palette: &Palette) {
    let mut lines = Vec::new();
    for message in app.conversation.messages() {
        if !lines.is_empty() {
            lines.push(Line::from(""));
        }
        lines.extend(message.render(area.width, palette));
    }
    append_suggestion_chips(app, &mut lines, palette);

    let total_lines = lines.len() as u16;
    let max_scroll = total_lines.saturating_sub(area.height);
    let chat_scroll = app.chat_scroll.min(max_scroll);

    let msgs_para = Paragraph::new(lines)
        .block(Block::default())
        .wrap(Wrap { trim: false });
    f.render_widget(msgs_para.scroll((chat_scroll, 0)), area);
}

/// Chips for the newest reply, one per line. Tab moves the cursor,
/// Enter submits the highlighted chip.
fn append_suggestion_chips(app: &App, lines: &mut Vec<Line<'static>>, palette: &Palette) {
    let suggestions = app.latest_suggestions();
    if suggestions.is_empty() {
        return;
    }

    lines.push(Line::from(""));
    for (i, suggestion) in suggestions.iter().enumerate() {
        let selected = app.chip_cursor == Some(i);
        let style = if selected {
            Style::default()
                .fg(palette.background)
                .bg(palette.accent_agent)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(palette.accent_agent)
        };
        lines.push(Line::from(vec![
            Span::styled(if selected { "▸ " } else { "  " }, style),
            Span::styled(format!(" {suggestion} "), style),
        ]));
    }
}

fn draw_input(f: &mut Frame, app: &App, area: Rect, palette: &Palette) {
    let separator = "─".repeat(area.width as usize);
    f.render_widget(
        Paragraph::new(Line::from(Span::styled(
            separator.clone(),
            Style::default().fg(palette.border),
        ))),
        Rect {
            x: area.x,
            y: area.y,
            width: area.width,
            height: 1,
        },
    );

    let input = Line::from(vec![
        Span::styled("→ ", Style::default().fg(palette.text_tertiary)),
        Span::styled(app.chat_input.clone(), Style::default().fg(palette.text)),
    ]);

    let visible_width = area.width.saturating_sub(2);
    let text_width = app.chat_input.width() as u16;
    let scroll_offset = text_width.saturating_sub(visible_width);

    f.render_widget(
        Paragraph::new(input).scroll((0, scroll_offset)),
        Rect {
            x: area.x,
            y: area.y + 1,
            width: area.width,
            height: 1,
        },
    );

    f.render_widget(
        Paragraph::new(Line::from(Span::styled(
            separator,
            Style::default().fg(palette.border),
        ))),
        Rect {
            x: area.x,
            y: area.y + 2,
            width: area.width,
            height: 1,
        },
    );

    let cursor_x = area.x + 2 + text_width - scroll_offset;
    f.set_cursor_position((cursor_x, area.y + 1));
}

fn draw_side_panel(f: &mut Frame, app: &App, area: Rect, palette: &Palette) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(7), Constraint::Min(1)])
        .split(area);

    let stats_block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.border))
        .title(Span::styled(
            " Agente IA Activo ",
            Style::default()
                .fg(palette.accent_agent)
                .add_modifier(Modifier::BOLD),
        ));

    let stats = vec![
        stat_line("Readiness", format!("{}/100", TODAY.readiness), palette),
        stat_line("FTP", format!("{}W", ATHLETE.ftp_watts), palette),
        stat_line("TSS/sem", TODAY.weekly_tss.to_string(), palette),
        Line::from(""),
        Line::from(Span::styled(
            "● Online",
            Style::default().fg(palette.success),
        )),
    ];

    f.render_widget(
        Paragraph::new(stats).block(stats_block).wrap(Wrap { trim: true }),
        chunks[0],
    );

    let events_block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.border))
        .title(Span::styled(
            " Eventos ",
            Style::default().fg(palette.text_tertiary),
        ));

    let inner_height = chunks[1].height.saturating_sub(2) as usize;
    let entries = &app.events.entries;
    let start = entries.len().saturating_sub(inner_height);
    let event_lines: Vec<Line> = entries[start..]
        .iter()
        .map(|entry| {
            Line::from(vec![
                Span::styled("• ", Style::default().fg(palette.text_tertiary)),
                Span::styled(entry.clone(), Style::default().fg(palette.text_tertiary)),
            ])
        })
        .collect();

    f.render_widget(
        Paragraph::new(event_lines)
            .block(events_block)
            .wrap(Wrap { trim: true }),
        chunks[1],
    );
}

fn stat_line(label: &str, value: String, palette: &Palette) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("{label:<10}"),
            Style::default().fg(palette.text_tertiary),
        ),
        Span::styled(
            value,
            Style::default().fg(palette.text).add_modifier(Modifier::BOLD),
        ),
    ])
}
