use std::collections::HashMap;

use lazy_static::lazy_static;
use regex::Regex;

/// Sentence terminator in Devanagari prose (danda).
pub const DANDA: char = '।';
/// Verse terminator (double danda).
pub const DOUBLE_DANDA: char = '॥';

lazy_static! {
    static ref RE_LINE_SPACE_RUNS: Regex = Regex::new(r"[ \t]+").unwrap();
    static ref RE_BLANK_LINE_RUNS: Regex = Regex::new(r"\n{3,}").unwrap();
}

pub fn is_devanagari_char(c: char) -> bool {
    ('\u{0900}'..='\u{097F}').contains(&c)
}

/// Share of Devanagari characters among the alphabetic characters of the
/// text. Returns 0.0 for text with no alphabetic content.
pub fn devanagari_ratio(text: &str) -> f32 {
    let mut alphabetic = 0usize;
    let mut devanagari = 0usize;
    for c in text.chars() {
        if c.is_alphabetic() {
            alphabetic += 1;
            if is_devanagari_char(c) {
                devanagari += 1;
            }
        }
    }
    if alphabetic == 0 {
        return 0.0;
    }
    devanagari as f32 / alphabetic as f32
}

/// True when the text is predominantly Devanagari. Scanned commentaries
/// carry stray Latin page furniture, so this is a ratio test, not an
/// every-character test.
pub fn is_devanagari(text: &str) -> bool {
    devanagari_ratio(text) > 0.5
}

/// Translate Devanagari digits to ASCII so that chapter/verse markers
/// written as २.४७ match the same pattern as 2.47.
pub fn devanagari_digits_to_ascii(text: &str) -> String {
    let from_chars = "०१२३४५६७८९";
    let to_chars = "0123456789";

    let translation: HashMap<char, char> = from_chars.chars()
        .zip(to_chars.chars())
        .collect();

    text.chars()
        .map(|c| translation.get(&c).copied().unwrap_or(c))
        .collect()
}

/// Normalize raw extracted text before splitting:
/// - CRLF to LF
/// - Devanagari digits to ASCII digits
/// - runs of spaces/tabs collapsed to one space, trailing spaces stripped
/// - runs of three or more newlines collapsed to a blank line
///
/// Line breaks and blank lines are preserved otherwise; the splitter
/// depends on them for marker anchoring and fallback paragraph boundaries.
pub fn normalize_devanagari(text: &str) -> String {
    let text = text.replace("\r\n", "\n").replace('\r', "\n");
    let text = devanagari_digits_to_ascii(&text);

    let lines: Vec<String> = text.lines()
        .map(|line| RE_LINE_SPACE_RUNS.replace_all(line.trim_end(), " ").to_string())
        .collect();
    let text = lines.join("\n");

    RE_BLANK_LINE_RUNS.replace_all(&text, "\n\n").trim().to_string()
}
