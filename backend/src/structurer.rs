//! Orchestrates section splitting and verse identification over one
//! complete commentary document for one acharya.
//!
//! Each run is a pure function of (raw text, acharya name, verse map,
//! gita structure, conflict policy): no state survives between calls, and
//! the shared inputs are only read, so independent documents can be
//! processed in parallel.

use std::path::Path;

use crate::gita::GitaStructure;
use crate::logger::{info, warn};
use crate::section_splitter::split_into_verse_sections;
use crate::types::{CommentarySet, ConflictPolicy, StructuredVerseRecord};
use crate::verse_identifier::identify_verse;
use crate::verse_map::VerseMapIndex;

/// Structure one raw commentary text into a sorted CommentarySet.
///
/// Sections that fail identification are dropped silently; zero accepted
/// sections yields an empty set, not an error. Records are stable-sorted
/// by (chapter, verse_number), so records with identical keys keep their
/// original section order before the conflict policy is applied.
pub fn structure_commentary(
    raw_text: &str,
    acharya_name: &str,
    verse_map: &VerseMapIndex,
    gita: &GitaStructure,
    conflict_policy: ConflictPolicy,
) -> CommentarySet {
    info(&format!("Structuring commentary for {}", acharya_name));

    let sections = split_into_verse_sections(raw_text);
    info(&format!("Found {} potential verse sections", sections.len()));

    let mut records: CommentarySet = Vec::new();

    for section in &sections {
        if let Some(identified) = identify_verse(section, verse_map, gita) {
            records.push(StructuredVerseRecord {
                acharya_name: acharya_name.to_string(),
                chapter: identified.chapter,
                verse_number: identified.verse_number,
                verse_sanskrit: identified.verse_sanskrit,
                commentary_sanskrit: identified.commentary_sanskrit,
            });
        }
    }

    records.sort_by_key(|r| r.sort_key());
    let records = apply_conflict_policy(records, acharya_name, conflict_policy);

    if records.is_empty() {
        warn(&format!("No verses identified for {}", acharya_name));
    } else {
        info(&format!("Structured {} verses for {}", records.len(), acharya_name));
    }

    records
}

/// Convenience wrapper: load the verse map from a path first. A missing
/// or unreadable map substitutes an empty index.
pub fn structure_commentary_with_map_path(
    raw_text: &str,
    acharya_name: &str,
    verse_map_path: &Path,
    gita: &GitaStructure,
    conflict_policy: ConflictPolicy,
) -> CommentarySet {
    let verse_map = VerseMapIndex::load_or_empty(verse_map_path);
    structure_commentary(raw_text, acharya_name, &verse_map, gita, conflict_policy)
}

/// Resolve duplicate (chapter, verse_number) keys in a sorted set.
/// Expects its input sorted; duplicate runs are adjacent.
fn apply_conflict_policy(
    records: CommentarySet,
    acharya_name: &str,
    policy: ConflictPolicy,
) -> CommentarySet {
    let mut out: CommentarySet = Vec::with_capacity(records.len());
    let mut rejected_key: Option<(u32, u32)> = None;

    for record in records {
        let key = record.sort_key();

        if rejected_key == Some(key) {
            continue;
        }

        let is_duplicate = out.last().map(|prev| prev.sort_key() == key).unwrap_or(false);
        if !is_duplicate {
            out.push(record);
            continue;
        }

        warn(&format!(
            "Duplicate record for {} at {}.{}, policy {}",
            acharya_name, key.0, key.1, policy.as_str()
        ));

        match policy {
            ConflictPolicy::KeepFirst => {}
            ConflictPolicy::KeepLast => {
                out.pop();
                out.push(record);
            }
            ConflictPolicy::RejectBoth => {
                out.pop();
                rejected_key = Some(key);
            }
        }
    }

    out
}
