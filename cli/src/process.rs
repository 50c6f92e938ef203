use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use gitavyasa_backend::export_helpers::{acharya_output_filename, save_records_tsv};
use gitavyasa_backend::gita::GitaStructure;
use gitavyasa_backend::helpers::{is_devanagari, normalize_devanagari};
use gitavyasa_backend::logger::{error, info, warn};
use gitavyasa_backend::structurer::structure_commentary;
use gitavyasa_backend::types::{CommentarySet, ConflictPolicy};
use gitavyasa_backend::verse_map::VerseMapIndex;

pub struct ProcessOptions {
    pub verse_map_path: Option<PathBuf>,
    pub conflict_policy: ConflictPolicy,
    pub output_dir: PathBuf,
    pub write_json: bool,
}

fn load_verse_map(verse_map_path: &Option<PathBuf>) -> VerseMapIndex {
    match verse_map_path {
        Some(path) => VerseMapIndex::load_or_empty(path),
        None => VerseMapIndex::new(),
    }
}

fn read_commentary_text(text_path: &Path) -> Result<String> {
    let raw_text = fs::read_to_string(text_path)
        .with_context(|| format!("Failed to read commentary text: {:?}", text_path))?;

    if !is_devanagari(&raw_text) {
        warn(&format!("Text in {:?} is not predominantly Devanagari", text_path));
    }

    Ok(normalize_devanagari(&raw_text))
}

fn write_outputs(records: &CommentarySet, acharya_name: &str, opts: &ProcessOptions) -> Result<()> {
    fs::create_dir_all(&opts.output_dir)
        .with_context(|| format!("Failed to create output directory: {:?}", opts.output_dir))?;

    let tsv_path = opts.output_dir.join(acharya_output_filename(acharya_name));
    save_records_tsv(records, &tsv_path)?;
    println!("Wrote {} records to {}", records.len(), tsv_path.display());

    if opts.write_json {
        let json_path = tsv_path.with_extension("json");
        let json = serde_json::to_string_pretty(records)
            .context("Failed to serialize records to JSON")?;
        fs::write(&json_path, json)
            .with_context(|| format!("Failed to write JSON file: {:?}", json_path))?;
        println!("Wrote {}", json_path.display());
    }

    Ok(())
}

/// Process one pre-extracted commentary text file for one acharya.
/// Returns the number of structured records.
pub fn process_one(text_path: &Path, acharya_name: &str, opts: &ProcessOptions) -> Result<usize> {
    let verse_map = load_verse_map(&opts.verse_map_path);
    let gita = GitaStructure::default();

    let text = read_commentary_text(text_path)?;
    let records = structure_commentary(&text, acharya_name, &verse_map, &gita, opts.conflict_policy);

    if records.is_empty() {
        println!("No verses identified for {}", acharya_name);
        return Ok(0);
    }

    write_outputs(&records, acharya_name, opts)?;
    Ok(records.len())
}

/// Process every `*.txt` file in a directory, taking the acharya name from
/// the file stem. A failure in one commentary is logged and does not stop
/// the others. The combined records go to a single additional TSV.
pub fn process_all(texts_dir: &Path, opts: &ProcessOptions) -> Result<usize> {
    let entries = fs::read_dir(texts_dir)
        .with_context(|| format!("Failed to read directory: {:?}", texts_dir))?;

    let mut text_paths: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| {
            path.is_file() && path.extension().and_then(|e| e.to_str()) == Some("txt")
        })
        .collect();
    text_paths.sort();

    if text_paths.is_empty() {
        println!("No .txt files found in {}", texts_dir.display());
        return Ok(0);
    }

    let verse_map = load_verse_map(&opts.verse_map_path);
    let gita = GitaStructure::default();

    let mut combined: CommentarySet = Vec::new();

    for text_path in &text_paths {
        let acharya_name = match text_path.file_stem().and_then(|s| s.to_str()) {
            Some(stem) => stem.to_string(),
            None => {
                warn(&format!("Skipping file with unusable name: {:?}", text_path));
                continue;
            }
        };

        info(&format!("Processing {} commentary", acharya_name));

        let result = read_commentary_text(text_path).and_then(|text| {
            let records = structure_commentary(&text, &acharya_name, &verse_map, &gita, opts.conflict_policy);
            if !records.is_empty() {
                write_outputs(&records, &acharya_name, opts)?;
            }
            Ok(records)
        });

        match result {
            Ok(records) => {
                if records.is_empty() {
                    println!("No verses identified for {}", acharya_name);
                }
                combined.extend(records);
            }
            Err(e) => {
                // One bad commentary must not abort the batch.
                error(&format!("Error processing {}: {:#}", acharya_name, e));
                eprintln!("Error processing {}: {:#}", acharya_name, e);
            }
        }
    }

    if combined.is_empty() {
        println!("No records produced from {}", texts_dir.display());
        return Ok(0);
    }

    let combined_path = opts.output_dir.join("all_acharyas_processed.tsv");
    save_records_tsv(&combined, &combined_path)?;
    println!(
        "Wrote {} combined records to {}",
        combined.len(),
        combined_path.display()
    );

    Ok(combined.len())
}
