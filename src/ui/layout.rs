use ratatui::layout::{Constraint, Direction, Layout, Rect};

#[derive(Debug, Clone, Copy)]
pub struct UiAreas {
    pub size: Rect,
    pub tab_bar: Rect,
    pub window: Rect,
    pub footer: Rect,
}

pub fn areas(size: Rect) -> UiAreas {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(size);

    UiAreas {
        size,
        tab_bar: vertical[0],
        window: vertical[1],
        footer: vertical[2],
    }
}

/// Split `width` evenly across `count` segments; leftover columns go to the
/// leftmost segments so the segments always sum to `width`.
pub fn tab_widths(width: u16, count: usize) -> Vec<u16> {
    if count == 0 {
        return Vec::new();
    }
    let count_u16 = u16::try_from(count).unwrap_or(u16::MAX);
    let base = width / count_u16;
    let extra = usize::from(width % count_u16);
    (0..count)
        .map(|i| if i < extra { base + 1 } else { base })
        .collect()
}

/// Text block above, table below; the text keeps its natural height when it fits
pub fn split_text_and_table(area: Rect, text_lines: u16) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(text_lines + 1), Constraint::Min(0)])
        .split(area);
    (chunks[0], chunks[1])
}
