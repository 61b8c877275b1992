use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::app::App;
use crate::data::{
    CURRENT_INTAKE, DAILY_GOALS, MEALS, NUTRITION_NOTE, SUPPLEMENTS, WATER_GOAL_L, WATER_INTAKE_L,
};
use crate::theme::Palette;
use crate::ui::cards::{hero_card, metric_card, ratio_of};

pub fn draw_nutrition(f: &mut Frame, app: &App, area: Rect) {
    let palette = app.theme.palette();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6),
            Constraint::Length(5),
            Constraint::Length(4),
            Constraint::Min(8),
            Constraint::Length(6),
        ])
        .split(area);

    draw_daily_overview(f, chunks[0], palette);
    draw_macros(f, chunks[1], palette);
    draw_hydration(f, chunks[2], palette);
    draw_meal_plan(f, chunks[3], palette);
    draw_supplements(f, chunks[4], palette);
}

fn draw_daily_overview(f: &mut Frame, area: Rect, palette: &Palette) {
    let remaining = DAILY_GOALS.calories - CURRENT_INTAKE.calories;
    let pct = (ratio_of(
        f64::from(CURRENT_INTAKE.calories),
        f64::from(DAILY_GOALS.calories),
    ) * 100.0)
        .round();

    let lines = vec![
        Line::from(Span::styled(
            "Lunes 11 Nov • Día de entrenamiento intenso",
            Style::default().fg(palette.text_tertiary),
        )),
        Line::from(vec![
            Span::styled(
                format!("{} kcal", CURRENT_INTAKE.calories),
                Style::default().fg(palette.text).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!(" consumidas ({pct}%)   "),
                Style::default().fg(palette.text_tertiary),
            ),
            Span::styled(
                format!("{remaining} kcal"),
                Style::default().fg(palette.text).add_modifier(Modifier::BOLD),
            ),
            Span::styled(" restantes", Style::default().fg(palette.text_tertiary)),
        ]),
        Line::from(Span::styled(
            NUTRITION_NOTE,
            Style::default().fg(palette.text_secondary),
        )),
    ];
    hero_card(f, area, "Nutrición Hoy", lines, palette.accent_nutrition, palette);
}

fn draw_macros(f: &mut Frame, area: Rect, palette: &Palette) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(area);

    let macros = [
        (
            "Proteína",
            CURRENT_INTAKE.protein_g,
            DAILY_GOALS.protein_g,
            "2.2 g/kg",
            palette.primary,
        ),
        (
            "Carbohidratos",
            CURRENT_INTAKE.carbs_g,
            DAILY_GOALS.carbs_g,
            "5 g/kg",
            palette.success,
        ),
        (
            "Grasas",
            CURRENT_INTAKE.fats_g,
            DAILY_GOALS.fats_g,
            "25%",
            palette.warning,
        ),
    ];

    for (i, (name, current, goal, badge, accent)) in macros.into_iter().enumerate() {
        metric_card(
            f,
            cols[i],
            name,
            &format!("{current}g / {goal}g"),
            &format!("{badge} • quedan {}g", goal - current),
            Some(ratio_of(f64::from(current), f64::from(goal))),
            accent,
            palette,
        );
    }
}

fn draw_hydration(f: &mut Frame, area: Rect, palette: &Palette) {
    let missing = WATER_GOAL_L - WATER_INTAKE_L;
    metric_card(
        f,
        area,
        "Hidratación",
        &format!("{WATER_INTAKE_L}L / {WATER_GOAL_L}L"),
        &format!("💧 Bebe {missing:.1}L más. Durante el entreno consume 750ml/hora."),
        Some(ratio_of(WATER_INTAKE_L, WATER_GOAL_L)),
        palette.info,
        palette,
    );
}

fn draw_meal_plan(f: &mut Frame, area: Rect, palette: &Palette) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.border))
        .title(Span::styled(
            " Plan de Comidas ",
            Style::default().fg(palette.text).add_modifier(Modifier::BOLD),
        ));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let mut lines = Vec::new();
    for meal in MEALS {
        lines.push(Line::from(vec![
            Span::styled(
                format!("{} ", meal.time),
                Style::default()
                    .fg(palette.accent_nutrition)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("{:<16}", meal.name),
                Style::default().fg(palette.text).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!(
                    "{:>4} kcal  P {:>2}g  C {:>2}g  G {:>2}g   ",
                    meal.calories, meal.protein_g, meal.carbs_g, meal.fats_g
                ),
                Style::default().fg(palette.text_secondary),
            ),
            Span::styled(
                meal.description.to_string(),
                Style::default().fg(palette.text_tertiary),
            ),
        ]));
    }

    f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
}

fn draw_supplements(f: &mut Frame, area: Rect, palette: &Palette) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.border))
        .title(Span::styled(
            " Suplementación Recomendada ",
            Style::default().fg(palette.text).add_modifier(Modifier::BOLD),
        ));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let lines: Vec<Line> = SUPPLEMENTS
        .iter()
        .map(|s| {
            Line::from(vec![
                Span::styled(
                    format!("• {:<14}", s.name),
                    Style::default().fg(palette.text).add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!("{:<12}", s.dose),
                    Style::default().fg(palette.accent_nutrition),
                ),
                Span::styled(
                    s.description.to_string(),
                    Style::default().fg(palette.text_tertiary),
                ),
            ])
        })
        .collect();

    f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), inner);
}
