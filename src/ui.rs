pub mod cards;
pub mod footer;
pub mod header;
pub mod quit_confirm;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::Block,
    Frame,
};

use crate::app::{App, AppState};
use crate::chat_view::draw_agent;
use crate::dashboard_view::draw_dashboard;
use crate::metrics_view::draw_metrics;
use crate::nutrition_view::draw_nutrition;
use crate::training_view::draw_training;

/// Top-level frame: header, active view, bottom navigation. The splash
/// screen and quit confirmation sit outside/over that chrome.
pub fn draw(f: &mut Frame, app: &App) {
    let palette = app.theme.palette();
    let size = f.area();

    f.render_widget(
        Block::default().style(Style::default().bg(palette.background)),
        size,
    );

    if app.state == AppState::Splash {
        app.splash_screen.draw(f, size, palette);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(8),
            Constraint::Length(2),
        ])
        .split(size);

    header::draw_header(f, chunks[0], app);
    draw_body(f, app, chunks[1]);
    footer::draw_footer(f, chunks[2], app);

    if app.state == AppState::QuitConfirm {
        quit_confirm::draw_quit_confirm(f, size, palette);
    }
}

fn draw_body(f: &mut Frame, app: &App, area: Rect) {
    let view = if app.state == AppState::QuitConfirm {
        app.return_to
    } else {
        app.state
    };

    match view {
        AppState::Dashboard => draw_dashboard(f, app, area),
        AppState::Agent => draw_agent(f, app, area),
        AppState::Training => draw_training(f, app, area),
        AppState::Nutrition => draw_nutrition(f, app, area),
        AppState::Metrics => draw_metrics(f, app, area),
        _ => {}
    }
}
