//! Tab bar rendering

use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};
use ratatui::Frame;

use super::layout::tab_widths;
use super::theme::Theme;
use crate::app::{App, Tab};

/// One bordered segment per tab; the active one is open at the bottom so it
/// joins the window below.
pub fn draw_tab_bar(f: &mut Frame, area: Rect, app: &App, theme: &Theme) {
    let width = if app.width == 0 {
        area.width
    } else {
        app.width.min(area.width)
    };
    let constraints: Vec<Constraint> = tab_widths(width, Tab::ALL.len())
        .into_iter()
        .map(Constraint::Length)
        .collect();
    let segments = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(Rect { width, ..area });

    for (tab, segment) in Tab::ALL.iter().zip(segments.iter()) {
        let is_active = *tab == app.current_tab();
        let (borders, title_style) = if is_active {
            (Borders::TOP | Borders::LEFT | Borders::RIGHT, theme.active_tab())
        } else {
            (Borders::ALL, theme.content())
        };
        let block = Block::default()
            .borders(borders)
            .border_type(BorderType::Rounded)
            .border_style(theme.border());
        let label = Paragraph::new(tab.title())
            .style(title_style)
            .alignment(Alignment::Center)
            .block(block);
        f.render_widget(label, *segment);
    }
}
