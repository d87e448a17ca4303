use std::collections::HashSet;

/// Domain nouns that carry no signal in school-record style documents.
const DEFAULT_STOP_WORDS: &[&str] = &[
    "활동",
    "학기",
    "학년",
    "제목",
    "생각",
    "모습",
    "내용",
    "의미",
    "특징",
    "대해",
    "대한",
    "통해",
    "위해",
    "또한",
    "여자",
    "남자",
    "고등학교",
    "자신",
    "김소윤",
    "관련",
    "매우",
    "보임",
];

/// Exact-match stop-word filter.
///
/// No case folding is applied; the default list is Korean-only.
#[derive(Debug, Clone)]
pub struct StopwordFilter {
    words: HashSet<String>,
}

impl Default for StopwordFilter {
    fn default() -> Self {
        Self::from_words(DEFAULT_STOP_WORDS)
    }
}

impl StopwordFilter {
    /// Creates an empty filter (no words removed).
    #[must_use]
    pub fn empty() -> Self {
        Self {
            words: HashSet::new(),
        }
    }

    #[must_use]
    pub fn from_words(words: &[&str]) -> Self {
        Self {
            words: words.iter().map(|w| (*w).to_owned()).collect(),
        }
    }

    pub fn add_words(&mut self, words: &[&str]) {
        for word in words {
            self.words.insert((*word).to_owned());
        }
    }

    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
