//! WinAnsi (cp1252) encoding for the standard Type1 fonts

use unicode_normalization::UnicodeNormalization;

/// Character substituted for anything WinAnsi cannot represent
pub const FALLBACK_CHAR: char = '?';

/// Map a Unicode scalar to its WinAnsiEncoding byte
///
/// Returns `None` for control characters and anything outside cp1252.
pub fn to_win_ansi(c: char) -> Option<u8> {
    let byte = match c {
        '\u{0020}'..='\u{007E}' => c as u8,
        '\u{00A0}'..='\u{00FF}' => c as u8,
        '\u{20AC}' => 0x80,
        '\u{201A}' => 0x82,
        '\u{0192}' => 0x83,
        '\u{201E}' => 0x84,
        '\u{2026}' => 0x85,
        '\u{2020}' => 0x86,
        '\u{2021}' => 0x87,
        '\u{02C6}' => 0x88,
        '\u{2030}' => 0x89,
        '\u{0160}' => 0x8A,
        '\u{2039}' => 0x8B,
        '\u{0152}' => 0x8C,
        '\u{017D}' => 0x8E,
        '\u{2018}' => 0x91,
        '\u{2019}' => 0x92,
        '\u{201C}' => 0x93,
        '\u{201D}' => 0x94,
        '\u{2022}' => 0x95,
        '\u{2013}' => 0x96,
        '\u{2014}' => 0x97,
        '\u{02DC}' => 0x98,
        '\u{2122}' => 0x99,
        '\u{0161}' => 0x9A,
        '\u{203A}' => 0x9B,
        '\u{0153}' => 0x9C,
        '\u{017E}' => 0x9E,
        '\u{0178}' => 0x9F,
        _ => return None,
    };
    Some(byte)
}

/// Encode text as WinAnsi bytes
///
/// Text is NFC-composed first so that a decomposed `e` + combining acute
/// becomes a single `é`. Unencodable characters become [`FALLBACK_CHAR`].
pub fn win_ansi_bytes(text: &str) -> Vec<u8> {
    text.nfc()
        .map(|c| to_win_ansi(c).unwrap_or(FALLBACK_CHAR as u8))
        .collect()
}
