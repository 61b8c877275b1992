use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph, Wrap},
    Frame,
};

use crate::theme::Palette;

#[derive(Debug)]
pub struct SplashScreen {
    pub selected_idx: usize,
    pub menu_items: Vec<&'static str>,
}

#[derive(Debug)]
pub enum SplashScreenAction {
    Start,
    Quit,
}

impl SplashScreen {
    pub fn new() -> Self {
        Self {
            selected_idx: 0,
            menu_items: vec!["abrir panel", "salir"],
        }
    }

    pub fn draw(&self, f: &mut Frame, area: Rect, palette: &Palette) {
        let hsplit = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(area);

        let ascii_art = r#"
 ▄████▄  ▄▄▄      ▓█████▄ ▓█████  ███▄    █  ▄████▄   ██▓ ▄▄▄
▒██▀ ▀█ ▒████▄    ▒██▀ ██▌▓█   ▀  ██ ▀█   █ ▒██▀ ▀█  ▓██▒▒████▄
▒▓█    ▄▒██  ▀█▄  ░██   █▌▒███   ▓██  ▀█ ██▒▒▓█    ▄ ▒██▒▒██  ▀█▄
▒▓▓▄ ▄██░██▄▄▄▄██ ░▓█▄   ▌▒▓█  ▄ ▓██▒  ▐▌██▒▒▓▓▄ ▄██▒░██░░██▄▄▄▄██
▒ ▓███▀  ▓█   ▓██▒░▒████▓ ░▒████▒▒██░   ▓██░▒ ▓███▀ ░░██░ ▓█   ▓██▒
  ░▒ ▒    ▒▒   ▓▒█ ▒▒▓  ▒ ░░ ▒░ ░░ ▒░   ▒ ▒ ░ ░▒ ▒  ░░▓   ▒▒   ▓▒█

        Tu panel de entrenamiento inteligente
    "#;

        let ascii_par = Paragraph::new(ascii_art)
            .style(Style::default().fg(palette.primary))
            .alignment(Alignment::Center)
            .block(Block::default())
            .wrap(Wrap { trim: false });

        let ascii_vert = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(30), Constraint::Percentage(70)])
            .split(hsplit[0]);

        f.render_widget(ascii_par, ascii_vert[1]);

        let mut menu_lines = Vec::new();
        for (i, item) in self.menu_items.iter().enumerate() {
            let selected = i == self.selected_idx;
            let style = if selected {
                Style::default()
                    .fg(palette.secondary)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(palette.text)
            };
            menu_lines.push(Line::from(Span::styled(
                format!("{} {}", if selected { "▶" } else { " " }, item),
                style,
            )));
        }
        let menu_par = Paragraph::new(menu_lines)
            .alignment(Alignment::Center)
            .block(Block::default());

        let menu_line_count = self.menu_items.len() as u16;

        let menu_vert = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage(50),
                Constraint::Length(menu_line_count),
                Constraint::Percentage(50),
            ])
            .split(hsplit[1]);

        f.render_widget(menu_par, menu_vert[1]);
    }

    pub fn handle_input(&mut self, key: KeyEvent) -> Option<SplashScreenAction> {
        match (key.modifiers, key.code) {
            (KeyModifiers::NONE, KeyCode::Down) => {
                self.selected_idx = (self.selected_idx + 1) % self.menu_items.len();
                None
            }
            (KeyModifiers::NONE, KeyCode::Up) => {
                if self.selected_idx == 0 {
                    self.selected_idx = self.menu_items.len() - 1;
                } else {
                    self.selected_idx -= 1;
                }
                None
            }
            (KeyModifiers::NONE, KeyCode::Enter) => match self.menu_items[self.selected_idx] {
                "salir" => Some(SplashScreenAction::Quit),
                "abrir panel" => Some(SplashScreenAction::Start),
                _ => None,
            },
            (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(SplashScreenAction::Quit),
            _ => None,
        }
    }
}

impl Default for SplashScreen {
    fn default() -> Self {
        Self::new()
    }
}
