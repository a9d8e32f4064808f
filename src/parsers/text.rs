//! Repair of UTF-8 text that was decoded as Windows-1252 somewhere upstream

use std::borrow::Cow;

/// Byte values for the Windows-1252 characters in 0x80..=0x9F.
/// 0x81, 0x8D, 0x8F, 0x90 and 0x9D are undefined there and arrive as C1 controls.
const CP1252_HIGH: [(char, u8); 27] = [
    ('€', 0x80),
    ('‚', 0x82),
    ('ƒ', 0x83),
    ('„', 0x84),
    ('…', 0x85),
    ('†', 0x86),
    ('‡', 0x87),
    ('ˆ', 0x88),
    ('‰', 0x89),
    ('Š', 0x8A),
    ('‹', 0x8B),
    ('Œ', 0x8C),
    ('Ž', 0x8E),
    ('‘', 0x91),
    ('’', 0x92),
    ('“', 0x93),
    ('”', 0x94),
    ('•', 0x95),
    ('–', 0x96),
    ('—', 0x97),
    ('˜', 0x98),
    ('™', 0x99),
    ('š', 0x9A),
    ('›', 0x9B),
    ('œ', 0x9C),
    ('ž', 0x9E),
    ('Ÿ', 0x9F),
];

fn to_cp1252_byte(c: char) -> Option<u8> {
    let code = c as u32;
    if code <= 0xFF {
        return Some(code as u8);
    }
    CP1252_HIGH.iter().find(|(ch, _)| *ch == c).map(|(_, byte)| *byte)
}

/// Undo a UTF-8 -> Windows-1252 mis-decode ("Äêm" style mojibake).
///
/// The text is mapped back to single bytes and re-decoded as UTF-8. If any
/// character has no single-byte form, or the bytes are not valid UTF-8, the
/// input is returned unchanged, so correctly decoded text is never altered.
///
/// # Examples
///
/// ```
/// use event_finder::parsers::repair_mojibake;
///
/// assert_eq!(repair_mojibake("Nháº¡c"), "Nhạc");
/// assert_eq!(repair_mojibake("café"), "café");
/// ```
pub fn repair_mojibake(text: &str) -> Cow<'_, str> {
    if text.is_ascii() {
        return Cow::Borrowed(text);
    }

    let mut bytes = Vec::with_capacity(text.len());
    for c in text.chars() {
        match to_cp1252_byte(c) {
            Some(byte) => bytes.push(byte),
            None => return Cow::Borrowed(text),
        }
    }

    match String::from_utf8(bytes) {
        Ok(repaired) if repaired != text => Cow::Owned(repaired),
        _ => Cow::Borrowed(text),
    }
}
