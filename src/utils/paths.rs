use std::borrow::Cow;
use std::env;
use std::fs::File;
use std::path::Path;

use anyhow::{Context, Result, bail};
use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};

use crate::models::RecordId;

// Maximum size for record files: 10MB
const MAX_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;

// Characters to percent-encode in a path segment (everything except unreserved and safe chars)
const SEGMENT_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'?')
    .add(b'{')
    .add(b'}')
    .add(b'/')
    .add(b'\\')
    .add(b':')
    .add(b'@')
    .add(b'[')
    .add(b']')
    .add(b'!');

// Ids made only of dots would otherwise read as `.`/`..` path segments
const DOT_SEGMENT_ENCODE_SET: &AsciiSet = &SEGMENT_ENCODE_SET.add(b'.');

/// Builds the detail-view route for a record: `{prefix}/{id}` with the id percent-encoded
///
/// # Examples
///
/// ```
/// use event_finder::detail_path;
/// use event_finder::models::RecordId;
///
/// assert_eq!(detail_path("/events", &RecordId::new("42")), "/events/42");
/// assert_eq!(detail_path("/events/", &RecordId::new("a/b c")), "/events/a%2Fb%20c");
/// ```
pub fn detail_path(prefix: &str, id: &RecordId) -> String {
    let prefix = prefix.trim_end_matches('/');
    let id = id.as_str();
    let encode_set =
        if matches!(id, "." | "..") { DOT_SEGMENT_ENCODE_SET } else { SEGMENT_ENCODE_SET };
    format!("{}/{}", prefix, utf8_percent_encode(id, encode_set))
}

/// Validates that a file's size is within acceptable limits (10MB)
///
/// Takes an open file handle to avoid TOCTOU (time-of-check-time-of-use)
/// race conditions where the file could be modified between the size check
/// and subsequent file operations.
///
/// # Errors
///
/// Returns an error if:
/// - The file metadata cannot be read
/// - The file is larger than 10MB
pub fn validate_file_size(file: &File, path: &Path) -> Result<()> {
    let metadata = file
        .metadata()
        .with_context(|| format!("Failed to read file metadata: {}", path.display()))?;

    let file_size = metadata.len();
    if file_size > MAX_FILE_SIZE_BYTES {
        bail!(
            "File too large: {} ({} bytes, max {} bytes)",
            path.display(),
            file_size,
            MAX_FILE_SIZE_BYTES
        );
    }

    Ok(())
}

/// Formats a path with ~ substitution for the home directory
pub fn format_path_with_tilde(path: &Path) -> String {
    format_path_with_tilde_internal(path, None)
}

/// Internal helper for path formatting with optional home override (for testing)
pub(crate) fn format_path_with_tilde_internal(path: &Path, home_override: Option<&str>) -> String {
    let home_from_env = env::var("HOME").ok();
    let home = home_override.or(home_from_env.as_deref());

    let path_str = path.to_string_lossy();
    if let Some(home) = home
        && path_str.starts_with(home)
    {
        return path_str.replacen(home, "~", 1);
    }

    match path_str {
        Cow::Borrowed(s) => s.to_string(),
        Cow::Owned(s) => s,
    }
}
