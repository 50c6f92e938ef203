//! Read-only lookup from (chapter, verse_number) to the canonical verse
//! text, loaded once per run from a TSV file with the columns
//! `chapter`, `verse_number`, `verse_full_text`.
//!
//! The map is optional: a missing file yields an empty index and the verse
//! identifier falls back to its line-window heuristic. Once built, the
//! index is never mutated, so shared references are safe across parallel
//! document runs.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::export_helpers::unescape_tsv_field;
use crate::logger::{info, warn};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VerseMapIndex {
    entries: HashMap<(u32, u32), String>,
}

impl VerseMapIndex {
    pub fn new() -> Self {
        VerseMapIndex { entries: HashMap::new() }
    }

    /// Load the index from a TSV file. Malformed rows are logged and
    /// skipped; a later row for the same (chapter, verse) replaces the
    /// earlier one.
    pub fn load_from_tsv(tsv_path: &Path) -> Result<Self> {
        let content = fs::read_to_string(tsv_path)
            .with_context(|| format!("Failed to read verse map TSV: {:?}", tsv_path))?;

        let mut entries = HashMap::new();

        for (line_num, line) in content.lines().enumerate().skip(1) { // Skip header
            if line.trim().is_empty() {
                continue;
            }

            let fields: Vec<&str> = line.split('\t').collect();

            if fields.len() < 3 {
                warn(&format!("Verse map line {}: not enough fields, skipping", line_num + 1));
                continue;
            }

            let chapter: u32 = match fields[0].trim().parse() {
                Ok(n) => n,
                Err(_) => {
                    warn(&format!("Verse map line {}: invalid chapter {:?}, skipping", line_num + 1, fields[0]));
                    continue;
                }
            };
            let verse_number: u32 = match fields[1].trim().parse() {
                Ok(n) => n,
                Err(_) => {
                    warn(&format!("Verse map line {}: invalid verse number {:?}, skipping", line_num + 1, fields[1]));
                    continue;
                }
            };

            entries.insert((chapter, verse_number), unescape_tsv_field(fields[2]));
        }

        info(&format!("Loaded {} verse map entries from {:?}", entries.len(), tsv_path));

        Ok(VerseMapIndex { entries })
    }

    /// Load the index, substituting an empty one when the file is absent.
    /// Absence of the verse map is a routine condition, not an error.
    pub fn load_or_empty(tsv_path: &Path) -> Self {
        if !tsv_path.exists() {
            warn(&format!("Verse map not found: {:?}, using empty index", tsv_path));
            return VerseMapIndex::new();
        }

        match Self::load_from_tsv(tsv_path) {
            Ok(index) => index,
            Err(e) => {
                warn(&format!("Failed to load verse map: {}, using empty index", e));
                VerseMapIndex::new()
            }
        }
    }

    pub fn insert(&mut self, chapter: u32, verse_number: u32, verse_text: impl Into<String>) {
        self.entries.insert((chapter, verse_number), verse_text.into());
    }

    pub fn get(&self, chapter: u32, verse_number: u32) -> Option<&str> {
        self.entries.get(&(chapter, verse_number)).map(|s| s.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
