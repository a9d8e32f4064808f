use crate::models::Record;

/// Receives the record the user picked (navigation, callbacks, ...)
pub trait SelectionSink {
    fn on_select(&mut self, record: &Record);
}

impl<F> SelectionSink for F
where
    F: FnMut(&Record),
{
    fn on_select(&mut self, record: &Record) {
        self(record)
    }
}

/// Result of a selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionOutcome {
    /// The attached sink was notified
    Delivered,
    /// No sink attached; the caller should navigate to this detail route
    Navigate(String),
}
