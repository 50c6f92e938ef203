use std::str::FromStr;

use serde::{Serialize, Deserialize};
use thiserror::Error;

/// A candidate verse-sized slice of the raw commentary text.
///
/// Produced by the section splitter, consumed by the verse identifier.
/// `marker_guess` is present when the primary marker-anchored pass found
/// the section; fallback paragraph sections carry no guess.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerseSection {
    pub text: String,
    pub marker_guess: Option<(u32, u32)>,
}

impl VerseSection {
    pub fn labeled(text: impl Into<String>, chapter: u32, verse: u32) -> Self {
        VerseSection { text: text.into(), marker_guess: Some((chapter, verse)) }
    }

    pub fn unlabeled(text: impl Into<String>) -> Self {
        VerseSection { text: text.into(), marker_guess: None }
    }
}

/// One structured row of output: a verse location, its canonical text and
/// the commentary prose for one acharya.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructuredVerseRecord {
    pub acharya_name: String,
    pub chapter: u32,
    pub verse_number: u32,
    pub verse_sanskrit: String,
    pub commentary_sanskrit: String,
}

impl StructuredVerseRecord {
    pub fn sort_key(&self) -> (u32, u32) {
        (self.chapter, self.verse_number)
    }
}

/// All structured records for one acharya, sorted ascending by
/// (chapter, verse_number).
pub type CommentarySet = Vec<StructuredVerseRecord>;

/// What to do when two sections of the same document both resolve to the
/// same (chapter, verse_number). OCR duplication and false-positive
/// fallback matches make this a routine condition, not an exception.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ConflictPolicy {
    #[default]
    #[serde(rename = "keep-first")]
    KeepFirst,
    #[serde(rename = "keep-last")]
    KeepLast,
    #[serde(rename = "reject-both")]
    RejectBoth,
}

#[derive(Error, Debug, PartialEq, Eq)]
#[error("Invalid ConflictPolicy value: {0}")]
pub struct ParseConflictPolicyError(String);

impl FromStr for ConflictPolicy {
    type Err = ParseConflictPolicyError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "keep-first" => Ok(ConflictPolicy::KeepFirst),
            "keep-last" => Ok(ConflictPolicy::KeepLast),
            "reject-both" => Ok(ConflictPolicy::RejectBoth),
            _ => Err(ParseConflictPolicyError(s.to_string())),
        }
    }
}

impl ConflictPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConflictPolicy::KeepFirst => "keep-first",
            ConflictPolicy::KeepLast => "keep-last",
            ConflictPolicy::RejectBoth => "reject-both",
        }
    }
}
