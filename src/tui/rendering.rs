use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph, Wrap};

use super::app::{MessageType, StatusMessage};
use super::layout::AppLayout;
use super::timestamps::{format_start_time, format_timestamp};
use crate::controller::SearchState;
use crate::models::{HistoryEntry, Record};

const MUTED: Color = Color::Rgb(113, 113, 122);
const BRIGHT: Color = Color::Rgb(250, 250, 250);
const ACCENT: Color = Color::Rgb(16, 185, 129);
const ERROR: Color = Color::Rgb(239, 68, 68);
const BAR_BG: Color = Color::Rgb(24, 24, 27);

/// Everything the UI needs besides the option list
pub struct RenderState<'a> {
    pub query: &'a str,
    pub state: SearchState,
    /// Matches before the result limit, for the status bar
    pub result_count: usize,
    pub total_records: usize,
    pub history: &'a [HistoryEntry],
    pub loading: bool,
    pub load_error: Option<&'a str>,
    pub status_message: Option<&'a StatusMessage>,
}

/// Render the entire UI
pub fn render_ui(frame: &mut Frame, options: &[&Record], selected_idx: usize, state: &RenderState) {
    let layout = AppLayout::new(frame.area());

    render_input(frame, layout.input_area, state.query);
    render_options(frame, layout.options_area, options, selected_idx, state);
    render_preview(frame, layout.preview_area, options.get(selected_idx).copied(), state.history);
    render_status_bar(frame, layout.status_area, options.len(), state);
}

fn render_input(frame: &mut Frame, area: Rect, query: &str) {
    let input = Paragraph::new(Line::from(vec![
        Span::styled("> ", Style::default().fg(ACCENT)),
        Span::raw(query),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(MUTED))
            .title(" Search events "),
    );

    frame.render_widget(input, area);
}

fn options_title(state: &RenderState) -> &'static str {
    match state.state {
        SearchState::Idle => " Events ",
        SearchState::Suggesting if !state.history.is_empty() => " Recent ",
        SearchState::Suggesting => " Suggested ",
        SearchState::Searching => " Results ",
    }
}

fn render_options(
    frame: &mut Frame,
    area: Rect,
    options: &[&Record],
    selected_idx: usize,
    state: &RenderState,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(MUTED))
        .title(options_title(state));

    if options.is_empty() {
        let hint = match state.state {
            _ if state.loading => "Loading events...",
            SearchState::Idle => "Type to search, Tab for suggestions",
            SearchState::Suggesting => "No events available",
            SearchState::Searching => "No matching events",
        };
        let paragraph = Paragraph::new(hint).style(Style::default().fg(MUTED)).block(block);
        frame.render_widget(paragraph, area);
        return;
    }

    let items: Vec<ListItem> = options
        .iter()
        .enumerate()
        .map(|(idx, record)| {
            let mut content = record.title.chars().take(60).collect::<String>();
            if let Some(location) = record.location.as_deref() {
                content.push_str(" | ");
                content.push_str(location);
            }

            let style = if idx == selected_idx {
                Style::default().fg(BRIGHT).bg(ACCENT).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(MUTED)
            };

            ListItem::new(content).style(style)
        })
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}

fn render_preview(frame: &mut Frame, area: Rect, record: Option<&Record>, history: &[HistoryEntry]) {
    let label = |name: &'static str| Span::styled(name, Style::default().fg(MUTED));

    let content = if let Some(record) = record {
        let mut lines = vec![
            Line::from(Span::styled(
                record.title.clone(),
                Style::default().fg(BRIGHT).add_modifier(Modifier::BOLD),
            )),
            Line::from(vec![label("Id: "), Span::raw(record.id.to_string())]),
        ];

        if let Some(category) = &record.category {
            lines.push(Line::from(vec![label("Category: "), Span::raw(category.clone())]));
        }
        if let Some(location) = &record.location {
            lines.push(Line::from(vec![label("Location: "), Span::raw(location.clone())]));
        }
        if let Some(starts_at) = &record.starts_at {
            lines.push(Line::from(vec![label("Starts: "), Span::raw(format_start_time(starts_at))]));
        }
        if let Some(entry) = history.iter().find(|e| e.record.id == record.id) {
            lines.push(Line::from(vec![
                label("Last opened: "),
                Span::raw(format_timestamp(&entry.selected_at)),
            ]));
        }

        if let Some(description) = &record.description {
            lines.push(Line::from(""));
            for line in description.lines() {
                lines.push(Line::from(line.to_string()));
            }
        }

        Text::from(lines)
    } else {
        Text::from("No event selected")
    };

    let paragraph = Paragraph::new(content)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(MUTED))
                .title(" Details "),
        )
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}

fn render_status_bar(frame: &mut Frame, area: Rect, shown: usize, state: &RenderState) {
    let normal = Style::default().fg(BRIGHT).bg(BAR_BG);

    let (status_text, style) = if let Some(message) = state.status_message {
        let fg = match message.message_type {
            MessageType::Success => ACCENT,
            MessageType::Error => ERROR,
        };
        (format!(" {} ", message.text), Style::default().fg(fg).bg(BAR_BG))
    } else if let Some(error) = state.load_error {
        (format!(" [ERROR] Could not load events: {} ", error), Style::default().fg(ERROR).bg(BAR_BG))
    } else if state.loading {
        (" Loading events... | Ctrl+C: quit ".to_string(), normal)
    } else {
        let mut parts = vec![];

        match state.state {
            SearchState::Searching => {
                if state.result_count > shown {
                    parts.push(format!("{} of {} matches", shown, state.result_count));
                } else {
                    parts.push(format!("{} matches", state.result_count));
                }
            }
            SearchState::Suggesting if !state.history.is_empty() => {
                parts.push(format!("{} recent", state.history.len()))
            }
            _ => parts.push(format!("{} events", state.total_records)),
        }

        if shown > 0 {
            parts.push("Enter: open".to_string());
            parts.push("Ctrl+Y: copy link".to_string());
        }
        if !state.query.is_empty() {
            parts.push("Esc: clear".to_string());
        }
        parts.push("Ctrl+C: quit".to_string());

        (format!(" {} ", parts.join(" | ")), normal)
    };

    frame.render_widget(Paragraph::new(status_text).style(style), area);
}

#[cfg(test)]
mod tests {
    use std::time::Instant;

    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    use super::*;

    fn state<'a>(query: &'a str, search_state: SearchState, history: &'a [HistoryEntry]) -> RenderState<'a> {
        RenderState {
            query,
            state: search_state,
            result_count: 0,
            total_records: 2,
            history,
            loading: false,
            load_error: None,
            status_message: None,
        }
    }

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        terminal.backend().buffer().content().iter().map(|cell| cell.symbol()).collect()
    }

    #[test]
    fn test_render_ui_with_results() {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        let records = [
            Record::new(1, "Jazz Night").with_location("Hà Nội"),
            Record::new(2, "Jazz Brunch").with_description("Line 1\nLine 2"),
        ];
        let options: Vec<&Record> = records.iter().collect();
        let mut render_state = state("jazz", SearchState::Searching, &[]);
        render_state.result_count = 2;

        terminal.draw(|f| render_ui(f, &options, 1, &render_state)).unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("Results"));
        assert!(text.contains("Jazz Night"));
        assert!(text.contains("2 matches"));
    }

    #[test]
    fn test_render_empty_idle() {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| render_ui(f, &[], 0, &state("", SearchState::Idle, &[]))).unwrap();

        assert!(buffer_text(&terminal).contains("Type to search"));
    }

    #[test]
    fn test_render_recent_title_with_history() {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        let history = [HistoryEntry::new(Record::new(3, "Expo"))];
        let options: Vec<&Record> = history.iter().map(|e| &e.record).collect();

        terminal
            .draw(|f| render_ui(f, &options, 0, &state("", SearchState::Suggesting, &history)))
            .unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("Recent"));
        assert!(text.contains("Last opened"));
    }

    #[test]
    fn test_render_loading_and_error_states() {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        let mut loading = state("", SearchState::Suggesting, &[]);
        loading.loading = true;
        terminal.draw(|f| render_ui(f, &[], 0, &loading)).unwrap();
        assert!(buffer_text(&terminal).contains("Loading events"));

        let mut failed = state("", SearchState::Suggesting, &[]);
        failed.load_error = Some("server responded with status 503");
        terminal.draw(|f| render_ui(f, &[], 0, &failed)).unwrap();
        assert!(buffer_text(&terminal).contains("503"));
    }

    #[test]
    fn test_render_status_message() {
        let mut terminal = Terminal::new(TestBackend::new(100, 1)).unwrap();
        let message = StatusMessage {
            text: "Opened /events/1".to_string(),
            message_type: MessageType::Success,
            expires_at: Instant::now(),
        };
        let mut render_state = state("", SearchState::Idle, &[]);
        render_state.status_message = Some(&message);

        terminal
            .draw(|f| {
                let area = f.area();
                render_status_bar(f, area, 0, &render_state);
            })
            .unwrap();
        assert!(buffer_text(&terminal).contains("Opened /events/1"));
    }
}
