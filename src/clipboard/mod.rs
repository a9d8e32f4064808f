//! Copying event links to the system clipboard

use anyhow::{Context, Result, bail};
use arboard::Clipboard;

use crate::models::Record;
use crate::utils::detail_path;

/// Upper bound for copied text; links are short, anything larger is a bug upstream
const MAX_CLIPBOARD_BYTES: usize = 64 * 1024;

/// Clipboard operations (allows mocking in tests)
trait ClipboardProvider {
    fn set_text(&mut self, text: &str) -> Result<()>;
}

/// Real clipboard implementation using arboard
struct SystemClipboard {
    clipboard: Clipboard,
}

impl SystemClipboard {
    fn new() -> Result<Self> {
        let clipboard = Clipboard::new().context("Failed to initialize clipboard")?;
        Ok(Self { clipboard })
    }
}

impl ClipboardProvider for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        self.clipboard.set_text(text).context("Failed to set clipboard contents")?;
        Ok(())
    }
}

fn validate_clipboard_text(text: &str) -> Result<()> {
    if text.is_empty() {
        bail!("Cannot copy empty text to clipboard");
    }
    if text.len() > MAX_CLIPBOARD_BYTES {
        bail!("Text too large for clipboard ({} bytes, max {})", text.len(), MAX_CLIPBOARD_BYTES);
    }
    Ok(())
}

fn copy_with_provider(text: &str, provider: &mut dyn ClipboardProvider) -> Result<()> {
    validate_clipboard_text(text)?;
    provider.set_text(text)
}

/// Copy text to the system clipboard.
///
/// # Errors
/// Returns error if:
/// - Text is empty or larger than 64 KiB
/// - The system clipboard is unavailable (headless environment) or locked
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    // Validate before touching the clipboard for clearer errors in CI
    validate_clipboard_text(text)?;
    let mut clipboard = SystemClipboard::new()?;
    copy_with_provider(text, &mut clipboard)
}

/// Copy the detail route of `record` and return what was copied
pub fn copy_record_link(record: &Record, route_prefix: &str) -> Result<String> {
    let link = detail_path(route_prefix, &record.id);
    copy_to_clipboard(&link)?;
    Ok(link)
}
