//! Tabular output for structured records. Records are written as TSV with
//! escaped field content, one row per verse, UTF-8. The storage format is a
//! detail of this module; the core defines only the record shape.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::logger::info;
use crate::types::StructuredVerseRecord;

pub const TSV_HEADER: &str = "acharya_name\tchapter\tverse_number\tverse_sanskrit\tcommentary_sanskrit";

/// Escape a free-text field for a single TSV cell. Tabs and newlines are
/// the row/field separators, so they are backslash-escaped in content.
pub fn escape_tsv_field(text: &str) -> String {
    text.replace('\\', "\\\\")
        .replace('\t', "\\t")
        .replace('\r', "")
        .replace('\n', "\\n")
}

/// Inverse of `escape_tsv_field`, used when reading the verse map TSV.
pub fn unescape_tsv_field(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            result.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => result.push('\n'),
            Some('t') => result.push('\t'),
            Some('\\') => result.push('\\'),
            Some(other) => {
                result.push('\\');
                result.push(other);
            }
            None => result.push('\\'),
        }
    }
    result
}

pub fn records_to_tsv(records: &[StructuredVerseRecord]) -> String {
    let mut out = String::from(TSV_HEADER);
    out.push('\n');
    for r in records {
        out.push_str(&format!(
            "{}\t{}\t{}\t{}\t{}\n",
            escape_tsv_field(&r.acharya_name),
            r.chapter,
            r.verse_number,
            escape_tsv_field(&r.verse_sanskrit),
            escape_tsv_field(&r.commentary_sanskrit),
        ));
    }
    out
}

pub fn save_records_tsv(records: &[StructuredVerseRecord], path: &Path) -> Result<()> {
    let tsv = records_to_tsv(records);
    fs::write(path, tsv)
        .with_context(|| format!("Failed to write TSV file: {:?}", path))?;
    info(&format!("Saved {} records to {:?}", records.len(), path));
    Ok(())
}

/// Output file name for one acharya, e.g. "Shankara" -> "shankara_processed.tsv".
pub fn acharya_output_filename(acharya_name: &str) -> String {
    format!("{}_processed.tsv", acharya_name.to_lowercase())
}
