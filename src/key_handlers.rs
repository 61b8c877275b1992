use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::{App, AppState};
use crate::splash_screen::SplashScreenAction;

pub fn handle_key(app: &mut App, key: KeyEvent) {
    match app.state {
        AppState::Splash => {
            if let Some(action) = app.splash_screen.handle_input(key) {
                match action {
                    SplashScreenAction::Start => app.set_state(AppState::Dashboard),
                    SplashScreenAction::Quit => app.set_state(AppState::Quit),
                }
            }
        }
        AppState::Agent => handle_agent_input(app, key),
        AppState::QuitConfirm => handle_quit_confirm_input(app, key),
        AppState::Quit => {}
        _ => handle_browse_input(app, key),
    }
}

/// Keys shared by the four non-chat views. The chat view gets its own
/// handler because printable characters must reach the input line there.
fn handle_browse_input(app: &mut App, key: KeyEvent) {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.set_state(AppState::QuitConfirm);
        return;
    }

    match key.code {
        KeyCode::Char('1') => app.set_state(AppState::Dashboard),
        KeyCode::Char('2') => app.set_state(AppState::Agent),
        KeyCode::Char('3') => app.set_state(AppState::Training),
        KeyCode::Char('4') => app.set_state(AppState::Nutrition),
        KeyCode::Char('5') => app.set_state(AppState::Metrics),
        KeyCode::Char('t') => app.toggle_theme(),
        KeyCode::Char('q') => app.set_state(AppState::QuitConfirm),
        KeyCode::Esc => {
            if app.state == AppState::Training && app.workout_detail_open {
                app.workout_detail_open = false;
            } else {
                app.set_state(AppState::QuitConfirm);
            }
        }
        _ => handle_view_specific(app, key),
    }
}

fn handle_view_specific(app: &mut App, key: KeyEvent) {
    match app.state {
        AppState::Training => match key.code {
            KeyCode::Down => app.select_next_workout(),
            KeyCode::Up => app.select_prev_workout(),
            KeyCode::Enter => app.workout_detail_open = true,
            KeyCode::Char('f') | KeyCode::Right | KeyCode::Left => app.cycle_training_filter(),
            _ => {}
        },
        AppState::Metrics => match key.code {
            KeyCode::Right => app.metrics_tab = app.metrics_tab.next(),
            KeyCode::Left => app.metrics_tab = app.metrics_tab.prev(),
            _ => {}
        },
        _ => {}
    }
}

fn handle_agent_input(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => {
            app.set_state(AppState::Dashboard);
        }
        KeyCode::Enter => {
            if app.chip_cursor.is_some() && app.chat_input.trim().is_empty() {
                app.submit_chip();
            } else {
                app.submit_chat();
            }
        }
        KeyCode::Tab => app.cycle_chip(),
        KeyCode::Backspace => {
            app.chat_input.pop();
        }
        KeyCode::PageUp => app.scroll_chat_up(),
        KeyCode::PageDown => app.scroll_chat_down(),
        KeyCode::Char(c) => {
            if key.modifiers.contains(KeyModifiers::CONTROL) {
                match c {
                    'c' => app.set_state(AppState::QuitConfirm),
                    'u' => app.scroll_chat_up(),
                    'd' => app.scroll_chat_down(),
                    _ => {}
                }
            } else {
                app.chat_input.push(c);
            }
        }
        _ => {}
    }
}

fn handle_quit_confirm_input(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('y') | KeyCode::Enter => {
            app.set_state(AppState::Quit);
        }
        KeyCode::Char('n') | KeyCode::Esc => {
            let back = app.return_to;
            app.set_state(back);
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn app_in(state: AppState) -> App {
        let mut app = App::new();
        app.state = state;
        app
    }

    #[test]
    fn test_digits_switch_views() {
        let mut app = app_in(AppState::Dashboard);
        handle_key(&mut app, press(KeyCode::Char('3')));
        assert_eq!(app.state, AppState::Training);
        handle_key(&mut app, press(KeyCode::Char('5')));
        assert_eq!(app.state, AppState::Metrics);
    }

    #[test]
    fn test_typing_digits_in_agent_goes_to_input() {
        let mut app = app_in(AppState::Agent);
        handle_key(&mut app, press(KeyCode::Char('2')));
        assert_eq!(app.state, AppState::Agent);
        assert_eq!(app.chat_input, "2");
    }

    #[test]
    fn test_enter_submits_selected_chip() {
        let mut app = app_in(AppState::Agent);
        handle_key(&mut app, press(KeyCode::Tab));
        handle_key(&mut app, press(KeyCode::Enter));

        // the first greeting chip is the weekly plan question
        let last = app.conversation.last().expect("user message");
        assert_eq!(last.content, "¿Cuál es mi plan de la semana?");
        assert!(app.reply_queue.is_waiting());
    }

    #[test]
    fn test_esc_closes_detail_before_quitting() {
        let mut app = app_in(AppState::Training);
        app.workout_detail_open = true;
        handle_key(&mut app, press(KeyCode::Esc));
        assert_eq!(app.state, AppState::Training);
        assert!(!app.workout_detail_open);

        handle_key(&mut app, press(KeyCode::Esc));
        assert_eq!(app.state, AppState::QuitConfirm);
    }

    #[test]
    fn test_quit_confirm_cancel_returns_to_origin() {
        let mut app = app_in(AppState::Nutrition);
        handle_key(&mut app, press(KeyCode::Char('q')));
        assert_eq!(app.state, AppState::QuitConfirm);

        handle_key(&mut app, press(KeyCode::Char('n')));
        assert_eq!(app.state, AppState::Nutrition);
    }

    #[test]
    fn test_quit_confirm_accept_quits() {
        let mut app = app_in(AppState::Dashboard);
        handle_key(&mut app, press(KeyCode::Char('q')));
        handle_key(&mut app, press(KeyCode::Char('y')));
        assert_eq!(app.state, AppState::Quit);
    }
}
