use crate::error::VizResult;

/// Seam for the external morphological analyzer.
///
/// Implementations return noun tokens in order of appearance with duplicates
/// retained; the counting step owns all filtering.
pub trait NounExtractor {
    fn nouns(&self, text: &str) -> VizResult<Vec<String>>;

    /// Name of the extractor (for logging and diagnostics).
    fn name(&self) -> &'static str;
}

/// Splits on whitespace and treats every token as a noun.
///
/// Deterministic stand-in used by tests and by builds without the `lindera-ko`
/// dictionary feature; adequate for pre-segmented input.
#[derive(Debug, Clone, Copy, Default)]
pub struct WhitespaceExtractor;

impl NounExtractor for WhitespaceExtractor {
    fn nouns(&self, text: &str) -> VizResult<Vec<String>> {
        Ok(text.split_whitespace().map(str::to_owned).collect())
    }

    fn name(&self) -> &'static str {
        "whitespace"
    }
}

#[cfg(feature = "lindera-ko")]
pub use self::lindera_ko::LinderaExtractor;

#[cfg(feature = "lindera-ko")]
mod lindera_ko {
    use lindera::dictionary::{DictionaryKind, load_dictionary_from_kind};
    use lindera::mode::Mode;
    use lindera::segmenter::Segmenter;
    use lindera::tokenizer::Tokenizer;

    use super::NounExtractor;
    use crate::error::{VizError, VizResult};

    /// Morphological noun extraction over the embedded ko-dic dictionary.
    ///
    /// Keeps tokens whose part-of-speech detail starts with `NN` (general and
    /// proper nouns).
    pub struct LinderaExtractor {
        tokenizer: Tokenizer,
    }

    impl LinderaExtractor {
        pub fn new() -> VizResult<Self> {
            let dictionary = load_dictionary_from_kind(DictionaryKind::KoDic)
                .map_err(|err| VizError::Analysis(format!("ko-dic load failed: {err}")))?;
            let segmenter = Segmenter::new(Mode::Normal, dictionary, None);
            Ok(Self {
                tokenizer: Tokenizer::new(segmenter),
            })
        }
    }

    impl NounExtractor for LinderaExtractor {
        fn nouns(&self, text: &str) -> VizResult<Vec<String>> {
            let mut tokens = self
                .tokenizer
                .tokenize(text)
                .map_err(|err| VizError::Analysis(format!("tokenization failed: {err}")))?;

            let mut nouns = Vec::new();
            for token in tokens.iter_mut() {
                let is_noun = token
                    .details()
                    .first()
                    .is_some_and(|pos| pos.starts_with("NN"));
                if is_noun {
                    nouns.push(token.text.to_string());
                }
            }
            Ok(nouns)
        }

        fn name(&self) -> &'static str {
            "lindera+ko-dic"
        }
    }
}
