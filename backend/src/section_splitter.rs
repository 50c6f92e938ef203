//! Partitions raw commentary text into candidate verse sections.
//!
//! Primary strategy: anchor on inline `<chapter>.<verse>` markers at line
//! starts, followed by a danda, double danda or line break, as printed by
//! well-scanned sources. Fallback strategy (no markers at all, typically
//! heavy OCR corruption): blank-line / doubled-danda paragraphs, with short
//! fragments discarded as scanning noise.
//!
//! Splitting is a two-pass tokenizer: pass 1 collects every marker
//! candidate with its byte position, pass 2 slices the text between
//! consecutive marker starts. No candidate is validated here; bounds
//! checking is the verse identifier's job, so malformed, duplicate and
//! out-of-range markers all pass through.

use lazy_static::lazy_static;
use regex::Regex;

use crate::types::VerseSection;

lazy_static! {
    // 2.47 । / २.४७ ॥ (after digit normalization) / bare marker line
    static ref RE_VERSE_MARKER: Regex = Regex::new(
        r"(?m)^[ \t]*(\d+)\.(\d+)[ \t]*(?:[।॥]|$)"
    ).unwrap();

    static ref RE_FALLBACK_BOUNDARY: Regex = Regex::new(
        r"\n[ \t]*\n+|।\s*।"
    ).unwrap();
}

/// Fragments at or below this many characters are discarded in fallback
/// mode as scanning noise, not content.
pub const MIN_FRAGMENT_CHARS: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct MarkerCandidate {
    start: usize,
    chapter: u32,
    verse: u32,
}

/// Pass 1: locate every marker candidate with its byte offset. Digit runs
/// too long for u32 are dropped here; anything else is left for the verse
/// identifier to accept or reject.
fn find_marker_candidates(text: &str) -> Vec<MarkerCandidate> {
    RE_VERSE_MARKER.captures_iter(text)
        .filter_map(|caps| {
            let m = caps.get(0)?;
            let chapter: u32 = caps.get(1)?.as_str().parse().ok()?;
            let verse: u32 = caps.get(2)?.as_str().parse().ok()?;
            Some(MarkerCandidate { start: m.start(), chapter, verse })
        })
        .collect()
}

/// Split raw text into ordered candidate verse sections.
///
/// Never fails: malformed input degrades to an empty sequence. Labeled
/// sections include their marker line, so the identifier can re-locate the
/// marker and slice the commentary after it.
pub fn split_into_verse_sections(text: &str) -> Vec<VerseSection> {
    let markers = find_marker_candidates(text);

    if markers.is_empty() {
        return fallback_paragraph_sections(text);
    }

    // Pass 2: slice between consecutive marker starts.
    let mut sections = Vec::with_capacity(markers.len());
    for (i, marker) in markers.iter().enumerate() {
        let end = markers.get(i + 1).map(|next| next.start).unwrap_or(text.len());
        let section_text = text[marker.start..end].trim();
        sections.push(VerseSection::labeled(section_text, marker.chapter, marker.verse));
    }
    sections
}

/// Fallback splitting for texts where no marker was recognized. Sections
/// carry no chapter/verse guess; the identifier searches for an embedded
/// marker anywhere in the fragment.
fn fallback_paragraph_sections(text: &str) -> Vec<VerseSection> {
    RE_FALLBACK_BOUNDARY.split(text)
        .map(str::trim)
        .filter(|fragment| fragment.chars().count() > MIN_FRAGMENT_CHARS)
        .map(VerseSection::unlabeled)
        .collect()
}
