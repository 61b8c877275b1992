use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::{App, AppState};

const NAV_ITEMS: [(AppState, &str, &str); 5] = [
    (AppState::Dashboard, "1", "Inicio"),
    (AppState::Agent, "2", "Agente IA"),
    (AppState::Training, "3", "Entrenos"),
    (AppState::Nutrition, "4", "Nutrición"),
    (AppState::Metrics, "5", "Métricas"),
];

/// Bottom navigation plus context-sensitive key hints.
pub fn draw_footer(f: &mut Frame, area: Rect, app: &App) {
    let palette = app.theme.palette();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1)])
        .split(area);

    let mut nav_spans = Vec::new();
    for (state, digit, label) in NAV_ITEMS {
        let active = app.state == state
            || (app.state == AppState::QuitConfirm && app.return_to == state);
        let accent = match state {
            AppState::Agent => palette.accent_agent,
            AppState::Training => palette.accent_training,
            AppState::Nutrition => palette.accent_nutrition,
            AppState::Metrics => palette.accent_metrics,
            _ => palette.primary,
        };
        let style = if active {
            Style::default().fg(accent).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(palette.text_tertiary)
        };
        nav_spans.push(Span::styled(format!("  {digit}·{label}  "), style));
    }
    f.render_widget(
        Paragraph::new(Line::from(nav_spans)).alignment(Alignment::Center),
        chunks[0],
    );

    let instructions = match app.state {
        AppState::Splash => "Flechas para navegar, Enter para seleccionar.",
        AppState::Agent => {
            "Escribe y pulsa Enter. Tab recorre las sugerencias. PgUp/PgDn desplaza. Esc vuelve al inicio."
        }
        AppState::Training => {
            "1-5 cambia de vista. Flechas seleccionan, Enter abre el detalle, f filtra. q salir."
        }
        AppState::Metrics => "1-5 cambia de vista. ←/→ cambia de gráfica. t tema. q salir.",
        AppState::QuitConfirm => "Pulsa 'y' para confirmar o 'n' para cancelar.",
        _ => "1-5 cambia de vista. t alterna el tema. q salir.",
    };
    f.render_widget(
        Paragraph::new(Line::from(Span::styled(
            instructions,
            Style::default().fg(palette.text_tertiary),
        )))
        .alignment(Alignment::Center),
        chunks[1],
    );
}
