use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::app::App;
use crate::data::{
    AGENT_RECOMMENDATION, CURRENT_INTAKE, DAILY_GOALS, READINESS_NOTE, TODAY, WEEKLY_WORKOUTS,
};
use crate::theme::Palette;
use crate::ui::cards::{hero_card, metric_card, ratio_of, stat_badge, BadgeVariant};

pub fn draw_dashboard(f: &mut Frame, app: &App, area: Rect) {
    let palette = app.theme.palette();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6),
            Constraint::Length(5),
            Constraint::Length(5),
            Constraint::Min(6),
            Constraint::Length(5),
        ])
        .split(area);

    draw_readiness_hero(f, chunks[0], palette);
    draw_vitals(f, chunks[1], palette);
    draw_recommendation(f, chunks[2], palette);
    draw_todays_workouts(f, chunks[3], palette);
    draw_nutrition_summary(f, chunks[4], palette);
}

fn draw_readiness_hero(f: &mut Frame, area: Rect, palette: &Palette) {
    let lines = vec![
        Line::from(vec![
            Span::styled(
                format!("{}", TODAY.readiness),
                Style::default()
                    .fg(palette.text)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(" / 100  ", Style::default().fg(palette.text_tertiary)),
            stat_badge("Óptimo para entrenar", BadgeVariant::Success, palette),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            READINESS_NOTE,
            Style::default().fg(palette.text_secondary),
        )),
    ];
    hero_card(f, area, "Estado de Forma Hoy", lines, palette.primary, palette);
}

fn draw_vitals(f: &mut Frame, area: Rect, palette: &Palette) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(area);

    metric_card(
        f,
        cols[0],
        "HRV",
        &format!("{} ms", TODAY.hrv_ms),
        &format!("promedio 7 días: {}", TODAY.hrv_avg_7d),
        Some(f64::from(TODAY.hrv_ms) / 100.0),
        palette.error,
        palette,
    );
    metric_card(
        f,
        cols[1],
        "Sueño",
        &format!("{}/100", TODAY.sleep_score),
        &format!("{} (óptimo)", TODAY.sleep_duration),
        Some(f64::from(TODAY.sleep_score) / 100.0),
        palette.primary,
        palette,
    );
    metric_card(
        f,
        cols[2],
        "Estrés",
        &format!("{}/100", TODAY.stress),
        "Bajo (bueno)",
        Some(f64::from(100 - TODAY.stress) / 100.0),
        palette.warning,
        palette,
    );
}

fn draw_recommendation(f: &mut Frame, area: Rect, palette: &Palette) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.accent_agent))
        .title(Span::styled(
            " Recomendación del Agente IA ",
            Style::default()
                .fg(palette.accent_agent)
                .add_modifier(Modifier::BOLD),
        ));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let lines = vec![
        Line::from(Span::styled(
            AGENT_RECOMMENDATION,
            Style::default().fg(palette.text_secondary),
        )),
        Line::from(vec![
            stat_badge("Sesión optimizada", BadgeVariant::Info, palette),
            Span::raw(" "),
            stat_badge("TSS: 85", BadgeVariant::Warning, palette),
        ]),
    ];
    f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), inner);
}

fn draw_todays_workouts(f: &mut Frame, area: Rect, palette: &Palette) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.border))
        .title(Span::styled(
            " Entrenamientos de Hoy ",
            Style::default().fg(palette.text).add_modifier(Modifier::BOLD),
        ));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let mut lines = Vec::new();
    for workout in WEEKLY_WORKOUTS.iter().filter(|w| w.date.starts_with("Hoy")) {
        lines.push(Line::from(vec![
            Span::styled(
                format!("{} {}", workout.kind.icon(), workout.title),
                Style::default().fg(palette.text).add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(
                format!("{} • {} min", workout.kind.label(), workout.duration_min),
                Style::default().fg(palette.text_tertiary),
            ),
            Span::raw("  "),
            match workout.tss {
                Some(tss) => stat_badge(&format!("TSS: {tss}"), BadgeVariant::Warning, palette),
                None => stat_badge("Opcional", BadgeVariant::Neutral, palette),
            },
        ]));
        for step in workout.main.iter().take(3) {
            lines.push(Line::from(Span::styled(
                format!("   · {step}"),
                Style::default().fg(palette.text_secondary),
            )));
        }
    }

    f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), inner);
}

fn draw_nutrition_summary(f: &mut Frame, area: Rect, palette: &Palette) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.accent_nutrition))
        .title(Span::styled(
            " Nutrición Hoy ",
            Style::default()
                .fg(palette.accent_nutrition)
                .add_modifier(Modifier::BOLD),
        ));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let lines = vec![
        Line::from(vec![
            Span::styled(
                format!("{} kcal", DAILY_GOALS.calories),
                Style::default().fg(palette.text).add_modifier(Modifier::BOLD),
            ),
            Span::styled(" objetivo   ", Style::default().fg(palette.text_tertiary)),
            Span::styled(
                format!("{}g", DAILY_GOALS.protein_g),
                Style::default().fg(palette.text).add_modifier(Modifier::BOLD),
            ),
            Span::styled(" proteína   ", Style::default().fg(palette.text_tertiary)),
            Span::styled(
                format!("{}g", DAILY_GOALS.carbs_g),
                Style::default().fg(palette.text).add_modifier(Modifier::BOLD),
            ),
            Span::styled(" carbohidratos", Style::default().fg(palette.text_tertiary)),
        ]),
        Line::from(Span::styled(
            format!(
                "Consumido: {} kcal ({}%)",
                CURRENT_INTAKE.calories,
                (ratio_of(
                    f64::from(CURRENT_INTAKE.calories),
                    f64::from(DAILY_GOALS.calories)
                ) * 100.0)
                    .round()
            ),
            Style::default().fg(palette.text_secondary),
        )),
        Line::from(Span::styled(
            "💡 Pre-entreno: Consume 60-80g de carbohidratos 2-3 horas antes de los intervalos.",
            Style::default().fg(palette.text_secondary),
        )),
    ];
    f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), inner);
}
