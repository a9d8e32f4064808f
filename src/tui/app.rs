//! TUI application state and event handling.
//!
//! The terminal stand-in for the autocomplete dropdown. All search state
//! lives in the [`SearchController`]; this module maps keys onto controller
//! calls and keeps only view state (highlighted row, transient status line,
//! redraw bookkeeping).
//!
//! The record collection may still be loading when the UI starts; the event
//! loop polls the controller and redraws once the load lands.

use std::time::{Duration, Instant};

use anyhow::Result;
use ratatui::Terminal;
use ratatui::backend::Backend;

use super::events::{Action, poll_event};
use super::rendering::{RenderState, render_ui};
use crate::clipboard::copy_record_link;
use crate::controller::{LoadStatus, SearchController, SelectionOutcome};
use crate::models::Record;

/// Duration for success status messages (milliseconds)
const STATUS_SUCCESS_DURATION_MS: u64 = 3000;
/// Duration for error status messages (milliseconds)
const STATUS_ERROR_DURATION_MS: u64 = 5000;
/// Longest accepted query, in characters
const MAX_QUERY_CHARS: usize = 256;

/// Type of status message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageType {
    Success,
    Error,
}

/// Transient status message with expiry
#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub text: String,
    pub message_type: MessageType,
    pub expires_at: Instant,
}

pub struct App {
    controller: SearchController,
    selected_idx: usize,
    should_quit: bool,
    loading: bool,
    status_message: Option<StatusMessage>,
    needs_redraw: bool,
    last_draw_time: Instant,
}

impl App {
    /// Wrap `controller`; a load spawned on it beforehand is picked up by the event loop
    pub fn new(mut controller: SearchController) -> Self {
        controller.open();
        let loading = controller.poll_load() == LoadStatus::Pending;

        Self {
            controller,
            selected_idx: 0,
            should_quit: false,
            loading,
            status_message: None,
            needs_redraw: true,
            last_draw_time: Instant::now(),
        }
    }

    pub fn controller(&self) -> &SearchController {
        &self.controller
    }

    /// Consume the app, returning the controller for cleanup
    pub fn into_controller(self) -> SearchController {
        self.controller
    }

    fn set_status(&mut self, text: impl Into<String>, message_type: MessageType, duration_ms: u64) {
        self.status_message = Some(StatusMessage {
            text: text.into(),
            message_type,
            expires_at: Instant::now() + Duration::from_millis(duration_ms),
        });
        self.needs_redraw = true;
    }

    fn check_and_clear_expired_status(&mut self) {
        let expired = self
            .status_message
            .as_ref()
            .is_some_and(|msg| Instant::now() >= msg.expires_at);
        if expired {
            self.status_message = None;
            self.needs_redraw = true;
        }
    }

    /// Apply a finished background load, if any
    fn process_load_updates(&mut self) {
        if !self.loading {
            return;
        }
        match self.controller.poll_load() {
            LoadStatus::Pending => {}
            _ => {
                self.loading = false;
                self.selected_idx = 0;
                self.needs_redraw = true;
            }
        }
    }

    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        while !self.should_quit {
            self.check_and_clear_expired_status();
            self.process_load_updates();

            // Draw if dirty or if it's been >100ms (for terminal resize handling)
            let now = Instant::now();
            if self.needs_redraw || now.duration_since(self.last_draw_time) >= Duration::from_millis(100)
            {
                let history = self.controller.history().list();
                let options = self.controller.options();
                let state = RenderState {
                    query: self.controller.query(),
                    state: self.controller.state(),
                    result_count: self.controller.result_count(),
                    total_records: self.controller.records().len(),
                    history,
                    loading: self.loading,
                    load_error: self.controller.last_load_error(),
                    status_message: self.status_message.as_ref(),
                };
                terminal.draw(|f| render_ui(f, &options, self.selected_idx, &state))?;
                self.needs_redraw = false;
                self.last_draw_time = now;
            }

            let action = poll_event(Duration::from_millis(100))?;
            self.handle_action(action);
        }

        Ok(())
    }

    fn option_count(&self) -> usize {
        self.controller.options().len()
    }

    fn highlighted(&self) -> Option<Record> {
        self.controller.options().get(self.selected_idx).map(|record| (*record).clone())
    }

    fn handle_action(&mut self, action: Action) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::ClearSearch => {
                if !self.controller.query().is_empty() {
                    self.set_query(String::new());
                } else if self.controller.state().is_open() {
                    self.controller.close();
                    self.needs_redraw = true;
                } else {
                    self.should_quit = true;
                }
            }
            Action::MoveUp => self.move_selection(-1),
            Action::MoveDown => self.move_selection(1),
            Action::PageUp => self.move_selection(-10),
            Action::PageDown => self.move_selection(10),
            Action::UpdateSearch(c) => {
                if self.controller.query().chars().count() < MAX_QUERY_CHARS {
                    let mut query = self.controller.query().to_string();
                    query.push(c);
                    self.set_query(query);
                }
            }
            Action::DeleteChar => {
                let mut query = self.controller.query().to_string();
                if query.pop().is_some() {
                    self.set_query(query);
                }
            }
            Action::ToggleDropdown => {
                if self.controller.state().is_open() {
                    self.controller.close();
                } else {
                    self.controller.open();
                }
                self.selected_idx = 0;
                self.needs_redraw = true;
            }
            Action::Select => self.select_highlighted(),
            Action::CopyLink => self.copy_highlighted_link(),
            Action::None => {}
        }
    }

    fn set_query(&mut self, query: String) {
        self.controller.set_query(query);
        self.selected_idx = 0;
        self.needs_redraw = true;
    }

    fn move_selection(&mut self, delta: isize) {
        let total = self.option_count();
        if total == 0 {
            self.selected_idx = 0;
            return;
        }

        let old_idx = self.selected_idx;
        let new_idx = (self.selected_idx as isize + delta).max(0) as usize;
        self.selected_idx = new_idx.min(total - 1);

        if old_idx != self.selected_idx {
            self.needs_redraw = true;
        }
    }

    fn select_highlighted(&mut self) {
        let Some(record) = self.highlighted() else {
            self.set_status("✗ Nothing to open", MessageType::Error, STATUS_ERROR_DURATION_MS);
            return;
        };

        let title = record.title.clone();
        let message = match self.controller.select(record) {
            SelectionOutcome::Navigate(path) => format!("✓ Opened {} ({})", title, path),
            SelectionOutcome::Delivered => format!("✓ Opened {}", title),
        };
        self.selected_idx = 0;
        self.set_status(message, MessageType::Success, STATUS_SUCCESS_DURATION_MS);
    }

    fn copy_highlighted_link(&mut self) {
        let Some(record) = self.highlighted() else {
            self.set_status("✗ No event to copy", MessageType::Error, STATUS_ERROR_DURATION_MS);
            return;
        };

        let prefix = self.controller.config().detail_route_prefix.clone();
        match copy_record_link(&record, &prefix) {
            Ok(link) => self.set_status(
                format!("✓ Copied {}", link),
                MessageType::Success,
                STATUS_SUCCESS_DURATION_MS,
            ),
            Err(e) => self.set_status(
                format!("✗ Clipboard error: {}", e),
                MessageType::Error,
                STATUS_ERROR_DURATION_MS,
            ),
        }
    }
}
