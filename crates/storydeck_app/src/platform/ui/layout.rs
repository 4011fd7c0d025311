use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Screen regions, top to bottom.
pub struct AppChunks {
    pub search: Rect,
    pub recent: Rect,
    pub banner: Rect,
    pub table: Rect,
    pub status: Rect,
}

pub fn chunks(area: Rect) -> AppChunks {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(area);

    AppChunks {
        search: rows[0],
        recent: rows[1],
        banner: rows[2],
        table: rows[3],
        status: rows[4],
    }
}
