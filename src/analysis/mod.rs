//! Noun frequency analysis for Korean text.
//!
//! The pipeline is deterministic and pure: clean the text down to Korean
//! syllables, extract nouns through a pluggable morphological analyzer, drop
//! stop-words and single-character tokens, count what remains.

pub mod extractor;
pub mod frequency;
pub mod stopwords;

pub use extractor::{NounExtractor, WhitespaceExtractor};
pub use frequency::FrequencyTable;
pub use stopwords::StopwordFilter;

#[cfg(feature = "lindera-ko")]
pub use extractor::LinderaExtractor;

use crate::error::VizResult;

/// Bundles the analyzer seam, the stop-word filter, and the minimum token
/// length into one reusable analysis pass.
pub struct TextAnalyzer {
    extractor: Box<dyn NounExtractor>,
    stopwords: StopwordFilter,
    min_token_chars: usize,
}

impl TextAnalyzer {
    #[must_use]
    pub fn new(extractor: Box<dyn NounExtractor>) -> Self {
        Self {
            extractor,
            stopwords: StopwordFilter::default(),
            min_token_chars: 2,
        }
    }

    #[must_use]
    pub fn with_stopwords(mut self, stopwords: StopwordFilter) -> Self {
        self.stopwords = stopwords;
        self
    }

    #[must_use]
    pub fn with_min_token_chars(mut self, min_token_chars: usize) -> Self {
        self.min_token_chars = min_token_chars;
        self
    }

    /// Runs the full analysis pass over `text`.
    ///
    /// Input that cleans down to nothing yields an empty table, not an error;
    /// only analyzer failures propagate.
    pub fn analyze(&self, text: &str) -> VizResult<FrequencyTable> {
        let cleaned = clean_korean_text(text);

        let mut table = FrequencyTable::new();
        if cleaned.trim().is_empty() {
            return Ok(table);
        }

        let nouns = self.extractor.nouns(&cleaned)?;
        for noun in nouns {
            if noun.chars().count() < self.min_token_chars {
                continue;
            }
            if self.stopwords.contains(&noun) {
                continue;
            }
            table.record(noun);
        }

        tracing::debug!(distinct_words = table.len(), "analysis pass complete");
        Ok(table)
    }
}

/// Normalizes raw input for morphological analysis: newlines become spaces and
/// every character outside the Korean syllable block (`가`..`힣`) or whitespace
/// is removed.
#[must_use]
pub fn clean_korean_text(text: &str) -> String {
    text.chars()
        .filter_map(|ch| match ch {
            '\n' | '\r' => Some(' '),
            '가'..='힣' => Some(ch),
            ch if ch.is_whitespace() => Some(ch),
            _ => None,
        })
        .collect()
}
