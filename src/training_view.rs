use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Tabs, Wrap},
    Frame,
};

use crate::app::App;
use crate::data::{Workout, TRAINING_WEEK_LABEL, WEEKLY_STATS};
use crate::theme::Palette;
use crate::ui::cards::{hero_card, stat_badge, BadgeVariant};

pub fn draw_training(f: &mut Frame, app: &App, area: Rect) {
    let palette = app.theme.palette();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6),
            Constraint::Length(3),
            Constraint::Min(4),
        ])
        .split(area);

    draw_week_overview(f, chunks[0], palette);
    draw_filter_tabs(f, app, chunks[1], palette);
    draw_workout_list(f, app, chunks[2], palette);

    if app.workout_detail_open {
        if let Some(workout) = app.filtered_workouts().get(app.selected_workout).copied() {
            draw_workout_detail(f, workout, area, palette);
        }
    }
}

fn draw_week_overview(f: &mut Frame, area: Rect, palette: &Palette) {
    let hours = WEEKLY_STATS.total_duration_min / 60;
    let minutes = WEEKLY_STATS.total_duration_min % 60;

    let lines = vec![
        Line::from(Span::styled(
            TRAINING_WEEK_LABEL,
            Style::default().fg(palette.text_tertiary),
        )),
        Line::from(vec![
            Span::styled(
                format!("TSS total: {}", WEEKLY_STATS.total_tss),
                Style::default().fg(palette.text).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!(
                    "   {}/{} sesiones   {hours}h {minutes}m   🚴 {}h   🏋 {}h",
                    WEEKLY_STATS.completed_workouts,
                    WEEKLY_STATS.scheduled_workouts,
                    WEEKLY_STATS.cycling_hours,
                    WEEKLY_STATS.gym_hours,
                ),
                Style::default().fg(palette.text_secondary),
            ),
        ]),
        Line::from(vec![
            Span::styled("Progreso semanal: ", Style::default().fg(palette.text_tertiary)),
            Span::styled(
                progress_bar(
                    WEEKLY_STATS.completed_workouts,
                    WEEKLY_STATS.scheduled_workouts,
                ),
                Style::default().fg(palette.accent_training),
            ),
        ]),
    ];
    hero_card(f, area, "Plan Semanal", lines, palette.accent_training, palette);
}

fn progress_bar(done: u8, total: u8) -> String {
    const WIDTH: usize = 20;
    let filled = if total == 0 {
        0
    } else {
        WIDTH * done as usize / total as usize
    };
    format!(
        "{}{} {done}/{total}",
        "█".repeat(filled),
        "░".repeat(WIDTH - filled)
    )
}

fn draw_filter_tabs(f: &mut Frame, app: &App, area: Rect, palette: &Palette) {
    let titles = ["Todos", "🚴 Ciclismo", "🏋 Gimnasio"];
    let tabs = Tabs::new(titles.iter().map(|t| Line::from(*t)).collect::<Vec<_>>())
        .select(app.training_filter.index())
        .style(Style::default().fg(palette.text_tertiary))
        .highlight_style(
            Style::default()
                .fg(palette.accent_training)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(palette.border)),
        );
    f.render_widget(tabs, area);
}

fn draw_workout_list(f: &mut Frame, app: &App, area: Rect, palette: &Palette) {
    let workouts = app.filtered_workouts();
    let items: Vec<ListItem> = workouts
        .iter()
        .map(|workout| {
            let mut spans = vec![
                Span::styled(
                    format!("{} {:<28}", workout.kind.icon(), workout.title),
                    Style::default().fg(palette.text),
                ),
                Span::styled(
                    format!("{:<14}", workout.date),
                    Style::default().fg(palette.text_tertiary),
                ),
                Span::styled(
                    format!("{:>4} min  ", workout.duration_min),
                    Style::default().fg(palette.text_secondary),
                ),
            ];
            if let Some(tss) = workout.tss {
                spans.push(stat_badge(&format!("TSS: {tss}"), BadgeVariant::Warning, palette));
            }
            if let Some(zones) = workout.zones {
                spans.push(Span::raw(" "));
                spans.push(stat_badge(zones, BadgeVariant::Info, palette));
            }
            ListItem::new(Line::from(spans))
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(palette.border))
                .title(Span::styled(
                    " Entrenamientos ",
                    Style::default().fg(palette.text).add_modifier(Modifier::BOLD),
                )),
        )
        .highlight_style(
            Style::default()
                .bg(palette.surface)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("➤ ");

    let mut state = ListState::default();
    state.select(Some(app.selected_workout.min(workouts.len().saturating_sub(1))));
    f.render_stateful_widget(list, area, &mut state);
}

fn draw_workout_detail(f: &mut Frame, workout: &Workout, area: Rect, palette: &Palette) {
    let popup = centered_rect(70, 80, area);
    f.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.accent_training))
        .title(Span::styled(
            format!(" {} {} ", workout.kind.icon(), workout.title),
            Style::default()
                .fg(palette.accent_training)
                .add_modifier(Modifier::BOLD),
        ));
    let inner = block.inner(popup);
    f.render_widget(block, popup);

    let mut lines = vec![
        Line::from(Span::styled(
            workout.date,
            Style::default().fg(palette.text_tertiary),
        )),
        Line::from(Span::styled(
            workout.description,
            Style::default().fg(palette.text_secondary),
        )),
        badges_line(workout, palette),
        Line::from(""),
    ];

    if let Some(warmup) = workout.warmup {
        lines.push(section_title("Calentamiento", palette));
        lines.push(Line::from(Span::styled(
            format!("  {warmup}"),
            Style::default().fg(palette.text_secondary),
        )));
        lines.push(Line::from(""));
    }

    lines.push(section_title("Parte Principal", palette));
    for (i, step) in workout.main.iter().enumerate() {
        lines.push(Line::from(vec![
            Span::styled(
                format!("  {}. ", i + 1),
                Style::default().fg(palette.accent_training),
            ),
            Span::styled((*step).to_string(), Style::default().fg(palette.text)),
        ]));
    }

    if let Some(cooldown) = workout.cooldown {
        lines.push(Line::from(""));
        lines.push(section_title("Vuelta a la calma", palette));
        lines.push(Line::from(Span::styled(
            format!("  {cooldown}"),
            Style::default().fg(palette.text_secondary),
        )));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Esc para cerrar",
        Style::default().fg(palette.text_tertiary),
    )));

    f.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Left)
            .wrap(Wrap { trim: false }),
        inner,
    );
}

fn badges_line(workout: &Workout, palette: &Palette) -> Line<'static> {
    let mut spans = vec![stat_badge(
        &format!("{} min", workout.duration_min),
        BadgeVariant::Neutral,
        palette,
    )];
    if let Some(tss) = workout.tss {
        spans.push(Span::raw(" "));
        spans.push(stat_badge(&format!("TSS: {tss}"), BadgeVariant::Warning, palette));
    }
    if let Some(zones) = workout.zones {
        spans.push(Span::raw(" "));
        spans.push(stat_badge(zones, BadgeVariant::Info, palette));
    }
    Line::from(spans)
}

fn section_title(title: &str, palette: &Palette) -> Line<'static> {
    Line::from(Span::styled(
        title.to_string(),
        Style::default().fg(palette.text).add_modifier(Modifier::BOLD),
    ))
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}
