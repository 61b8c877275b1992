use ratatui::style::Color;
use serde::{Deserialize, Serialize};

/// Light/dark mode, toggled at runtime and persisted through the config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
}

impl ThemeMode {
    pub fn toggle(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    pub fn palette(self) -> &'static Palette {
        match self {
            ThemeMode::Light => &LIGHT,
            ThemeMode::Dark => &DARK,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ThemeMode::Light => "claro",
            ThemeMode::Dark => "oscuro",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub primary: Color,
    pub secondary: Color,
    pub background: Color,
    pub surface: Color,
    pub text: Color,
    pub text_secondary: Color,
    pub text_tertiary: Color,
    pub border: Color,
    pub success: Color,
    pub warning: Color,
    pub error: Color,
    pub info: Color,
    pub accent_agent: Color,
    pub accent_training: Color,
    pub accent_nutrition: Color,
    pub accent_metrics: Color,
}

pub static LIGHT: Palette = Palette {
    primary: Color::Rgb(0, 122, 255),
    secondary: Color::Rgb(255, 106, 0),
    background: Color::Rgb(255, 255, 255),
    surface: Color::Rgb(245, 245, 247),
    text: Color::Rgb(28, 28, 30),
    text_secondary: Color::Rgb(58, 58, 60),
    text_tertiary: Color::Rgb(142, 142, 147),
    border: Color::Rgb(209, 209, 214),
    success: Color::Rgb(52, 199, 89),
    warning: Color::Rgb(255, 149, 0),
    error: Color::Rgb(255, 59, 48),
    info: Color::Rgb(90, 200, 250),
    accent_agent: Color::Rgb(147, 51, 234),
    accent_training: Color::Rgb(22, 163, 74),
    accent_nutrition: Color::Rgb(234, 88, 12),
    accent_metrics: Color::Rgb(8, 145, 178),
};

pub static DARK: Palette = Palette {
    primary: Color::Rgb(10, 132, 255),
    secondary: Color::Rgb(255, 159, 10),
    background: Color::Rgb(0, 0, 0),
    surface: Color::Rgb(28, 28, 30),
    text: Color::Rgb(255, 255, 255),
    text_secondary: Color::Rgb(235, 235, 245),
    text_tertiary: Color::Rgb(142, 142, 147),
    border: Color::Rgb(56, 56, 58),
    success: Color::Rgb(50, 215, 75),
    warning: Color::Rgb(255, 159, 10),
    error: Color::Rgb(255, 69, 58),
    info: Color::Rgb(100, 210, 255),
    accent_agent: Color::Rgb(168, 85, 247),
    accent_training: Color::Rgb(34, 197, 94),
    accent_nutrition: Color::Rgb(249, 115, 22),
    accent_metrics: Color::Rgb(34, 211, 238),
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_round_trips() {
        assert_eq!(ThemeMode::Light.toggle(), ThemeMode::Dark);
        assert_eq!(ThemeMode::Light.toggle().toggle(), ThemeMode::Light);
    }
}
