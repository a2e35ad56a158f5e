//! Colours and column widths, built once at startup and passed to `draw`

use std::str::FromStr;

use ratatui::layout::Constraint;
use ratatui::style::{Color, Modifier, Style};

use crate::config::ThemeConfig;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    /// Tab and window borders
    pub accent: Color,
    /// Active tab, selected row and usage bars
    pub highlight: Color,
    /// Content text
    pub text: Color,
    pub cpu_columns: [u16; 3],
    pub net_columns: [u16; 7],
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            accent: Color::Rgb(0x7D, 0x56, 0xF4),
            highlight: Color::Rgb(0x00, 0xAD, 0xB5),
            text: Color::Rgb(0xDE, 0xFC, 0xF9),
            cpu_columns: [20, 20, 50],
            net_columns: [12, 10, 10, 15, 15, 10, 10],
        }
    }
}

impl Theme {
    pub fn from_config(config: &ThemeConfig) -> Self {
        let defaults = Self::default();
        Self {
            accent: parse_color(config.accent.as_deref(), defaults.accent),
            highlight: parse_color(config.highlight.as_deref(), defaults.highlight),
            text: parse_color(config.text.as_deref(), defaults.text),
            ..defaults
        }
    }

    pub fn border(&self) -> Style {
        Style::default().fg(self.accent)
    }

    pub fn active_tab(&self) -> Style {
        Style::default()
            .fg(self.highlight)
            .add_modifier(Modifier::BOLD)
    }

    pub fn content(&self) -> Style {
        Style::default().fg(self.text).add_modifier(Modifier::BOLD)
    }

    pub fn selected_row(&self) -> Style {
        Style::default()
            .fg(self.highlight)
            .add_modifier(Modifier::BOLD)
    }

    pub fn bar(&self) -> Style {
        Style::default().fg(self.highlight)
    }

    pub fn header(&self) -> Style {
        Style::default().add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
    }

    pub fn hint(&self) -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn constraints(widths: &[u16]) -> Vec<Constraint> {
        widths.iter().map(|w| Constraint::Length(*w)).collect()
    }
}

fn parse_color(value: Option<&str>, fallback: Color) -> Color {
    value
        .and_then(|value| Color::from_str(value.trim()).ok())
        .unwrap_or(fallback)
}
