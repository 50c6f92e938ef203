//! The fixed structure of the Bhagavad Gita: 18 chapters, each with a known
//! verse count. Markers found in scanned commentaries are validated against
//! this table, which is the main filter for page numbers and OCR-mangled
//! digits that happen to look like verse references.

use std::collections::HashMap;

pub const TOTAL_CHAPTERS: u32 = 18;

/// Injected chapter/verse-count configuration. `Default` yields the
/// canonical table; tests may construct a reduced table with `new()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GitaStructure {
    verses_per_chapter: HashMap<u32, u32>,
}

impl Default for GitaStructure {
    fn default() -> Self {
        let verses_per_chapter: HashMap<u32, u32> = [
            (1, 47),
            (2, 72),
            (3, 43),
            (4, 42),
            (5, 30),
            (6, 47),
            (7, 30),
            (8, 28),
            (9, 34),
            (10, 42),
            (11, 55),
            (12, 20),
            (13, 35),
            (14, 27),
            (15, 20),
            (16, 24),
            (17, 28),
            (18, 78),
        ].into_iter().collect();

        GitaStructure { verses_per_chapter }
    }
}

impl GitaStructure {
    pub fn new(verses_per_chapter: HashMap<u32, u32>) -> Self {
        GitaStructure { verses_per_chapter }
    }

    pub fn verse_count(&self, chapter: u32) -> Option<u32> {
        self.verses_per_chapter.get(&chapter).copied()
    }

    /// True when (chapter, verse) names an actual Gita verse.
    ///
    /// A chapter in 1..=18 that is missing from the table rejects every
    /// verse number rather than panicking: a misconfigured table degrades
    /// to reject-all, never to a crash.
    pub fn is_valid_ref(&self, chapter: u32, verse: u32) -> bool {
        if chapter < 1 || chapter > TOTAL_CHAPTERS {
            return false;
        }
        match self.verse_count(chapter) {
            Some(count) => verse >= 1 && verse <= count,
            None => false,
        }
    }
}
