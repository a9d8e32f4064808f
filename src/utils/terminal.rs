//! Terminal-safe rendering of event text
//!
//! Event titles come from a remote listing and are printed verbatim by the
//! CLI, one record per line. [`single_line`] removes ANSI CSI escape
//! sequences and turns every other control character (tabs and line breaks
//! included) into a space so a record can neither restyle the terminal nor
//! break the `id<TAB>title` line format.

use std::borrow::Cow;

/// Make `text` safe to print as one terminal line
///
/// # Examples
///
/// ```
/// use event_finder::utils::terminal::single_line;
///
/// assert_eq!(single_line("\x1b[31mJazz\x1b[0m\tNight\n"), "Jazz Night");
/// ```
pub fn single_line(text: &str) -> Cow<'_, str> {
    if !text.chars().any(char::is_control) {
        return Cow::Borrowed(text);
    }

    let mut result = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    let mut pending_space = false;

    while let Some(ch) = chars.next() {
        if ch == '\x1b' && chars.peek() == Some(&'[') {
            chars.next();
            // CSI runs until its final letter
            for next_ch in chars.by_ref() {
                if next_ch.is_ascii_alphabetic() {
                    break;
                }
            }
            continue;
        }

        if ch.is_control() {
            pending_space = !result.is_empty();
            continue;
        }

        if pending_space {
            result.push(' ');
            pending_space = false;
        }
        result.push(ch);
    }

    Cow::Owned(result)
}
