use ratatui::layout::Rect;
use ratatui::style::Modifier;
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Row, Table, TableState};
use ratatui::Frame;

pub mod layout;
pub mod tabs;
pub mod theme;

pub use theme::Theme;

use crate::app::{App, Tab, TableView};
use crate::modules;

/// Render the whole dashboard from `app`; reads state, never mutates it
pub fn draw(f: &mut Frame, app: &App, theme: &Theme) {
    let areas = layout::areas(f.size());

    tabs::draw_tab_bar(f, areas.tab_bar, app, theme);
    draw_window(f, areas.window, app, theme);
    draw_key_hints(f, areas.footer, theme);
}

fn draw_window(f: &mut Frame, area: Rect, app: &App, theme: &Theme) {
    let block = Block::default()
        .borders(Borders::LEFT | Borders::RIGHT | Borders::BOTTOM)
        .border_type(BorderType::Rounded)
        .border_style(theme.border());
    let inner = block.inner(area);
    f.render_widget(block, area);

    let content = app.active_content();
    let text = Paragraph::new(content_text(content, theme)).style(theme.content());

    let Some(table) = app.active_table() else {
        f.render_widget(text, inner);
        return;
    };

    let text_lines = u16::try_from(content.lines().count()).unwrap_or(u16::MAX);
    let (text_area, table_area) = layout::split_text_and_table(inner, text_lines);
    f.render_widget(text, text_area);

    let (columns, widths): (&[&str], &[u16]) = match app.current_tab() {
        Tab::Network => (&modules::network::COLUMNS, &theme.net_columns),
        _ => (&modules::cpu::COLUMNS, &theme.cpu_columns),
    };
    draw_table(f, table_area, table, columns, widths, theme);
}

/// Slot text with usage bar lines drawn in the highlight colour
fn content_text<'a>(content: &'a str, theme: &Theme) -> Text<'a> {
    let is_bar = |line: &str| {
        line.contains(modules::FILLED_CELL) || line.contains(modules::EMPTY_CELL)
    };
    content
        .lines()
        .map(|line| {
            if is_bar(line) {
                Line::from(Span::styled(line, theme.bar()))
            } else {
                Line::from(line)
            }
        })
        .collect::<Vec<_>>()
        .into()
}

fn draw_table(
    f: &mut Frame,
    area: Rect,
    view: &TableView,
    columns: &[&str],
    widths: &[u16],
    theme: &Theme,
) {
    let header = Row::new(columns.iter().copied()).style(theme.header());
    let rows = view.rows().iter().map(|row| Row::new(row.clone()));
    let table = Table::new(rows, Theme::constraints(widths))
        .header(header)
        .style(theme.content())
        .highlight_style(theme.selected_row())
        .highlight_symbol("> ");

    let mut state = TableState::default();
    state.select(view.selected());
    f.render_stateful_widget(table, area, &mut state);
}

fn draw_key_hints(f: &mut Frame, area: Rect, theme: &Theme) {
    let hints = [
        ("tab/shift+tab", "switch"),
        ("1-5", "jump"),
        ("j/k pgup/pgdn", "scroll"),
        ("q", "quit"),
    ];
    let mut spans = Vec::with_capacity(hints.len() * 3);
    for (i, (key, action)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled("  ", theme.hint()));
        }
        spans.push(Span::styled(*key, theme.hint().add_modifier(Modifier::BOLD)));
        spans.push(Span::styled(format!(" {action}"), theme.hint()));
    }
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
