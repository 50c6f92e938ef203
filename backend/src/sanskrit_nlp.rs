//! Pluggable Sanskrit analysis capability.
//!
//! The segmentation core never calls into this trait; it exists so a real
//! sandhi splitter or lemmatizer can be attached later without touching
//! the splitter or identifier. `WhitespaceAnalyzer` is the baseline:
//! whitespace tokenization, identity lemmas, frequency-ranked key terms
//! with known Vedantic concept terms ranked ahead of ordinary words.

use std::collections::HashMap;

use lazy_static::lazy_static;

lazy_static! {
    /// Core Vedantic terms and their common transliterations.
    pub static ref VEDANTIC_CONCEPTS: HashMap<&'static str, &'static str> = [
        ("कर्म", "Karma"),
        ("ज्ञान", "Jnana"),
        ("भक्ति", "Bhakti"),
        ("मोक्ष", "Moksha"),
        ("ब्रह्मन्", "Brahman"),
        ("आत्मन्", "Atman"),
        ("माया", "Maya"),
        ("प्रकृति", "Prakriti"),
        ("पुरुष", "Purusha"),
        ("योग", "Yoga"),
        ("ध्यान", "Dhyana"),
        ("समाधि", "Samadhi"),
        ("गुण", "Gunas"),
        ("धर्म", "Dharma"),
    ].into_iter().collect();
}

pub const MAX_KEY_TERMS: usize = 10;

pub trait SanskritAnalyzer {
    /// Split compound words (sandhi) into constituent parts.
    fn split_compound_words(&self, text: &str) -> Vec<String>;

    /// Reduce a word to its base form.
    fn lemmatize(&self, word: &str) -> String;

    /// Extract the most salient terms of a commentary passage.
    fn extract_key_terms(&self, text: &str) -> Vec<String>;
}

/// Baseline analyzer standing in until a real morphological analyzer is
/// attached. Tokenization is whitespace-only and lemmatization is the
/// identity function.
#[derive(Debug, Clone, Copy, Default)]
pub struct WhitespaceAnalyzer;

impl SanskritAnalyzer for WhitespaceAnalyzer {
    fn split_compound_words(&self, text: &str) -> Vec<String> {
        text.split_whitespace().map(|w| w.to_string()).collect()
    }

    fn lemmatize(&self, word: &str) -> String {
        word.to_string()
    }

    fn extract_key_terms(&self, text: &str) -> Vec<String> {
        let words = self.split_compound_words(text);

        // Count frequencies, remembering first-seen order for stable ties.
        let mut counts: HashMap<&str, (usize, usize)> = HashMap::new();
        for (i, word) in words.iter().enumerate() {
            let entry = counts.entry(word.as_str()).or_insert((0, i));
            entry.0 += 1;
        }

        let mut ranked: Vec<(&str, usize, usize)> = counts
            .into_iter()
            .map(|(word, (count, first_seen))| (word, count, first_seen))
            .collect();

        ranked.sort_by(|a, b| {
            let a_known = VEDANTIC_CONCEPTS.contains_key(a.0);
            let b_known = VEDANTIC_CONCEPTS.contains_key(b.0);
            b_known.cmp(&a_known)
                .then(b.1.cmp(&a.1))
                .then(a.2.cmp(&b.2))
        });

        ranked.into_iter()
            .take(MAX_KEY_TERMS)
            .map(|(word, _, _)| word.to_string())
            .collect()
    }
}
