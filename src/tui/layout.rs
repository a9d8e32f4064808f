use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Autocomplete layout: query box on top, options and preview side by side, status bar below
pub struct AppLayout {
    pub input_area: Rect,
    pub options_area: Rect,
    pub preview_area: Rect,
    pub status_area: Rect,
}

impl AppLayout {
    pub fn new(area: Rect) -> Self {
        let vertical_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Query input with border
                Constraint::Min(3),    // Options + preview
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        let horizontal_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(vertical_chunks[1]);

        Self {
            input_area: vertical_chunks[0],
            options_area: horizontal_chunks[0],
            preview_area: horizontal_chunks[1],
            status_area: vertical_chunks[2],
        }
    }
}
