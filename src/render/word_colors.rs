use indexmap::IndexMap;

use crate::analysis::FrequencyTable;
use crate::error::{VizError, VizResult};
use crate::render::colormap::YL_OR_RD;
use crate::render::Color;

/// Per-word color scale for the word cloud.
///
/// Each word maps to `YlOrRd(ln(count) / ln(max_count))` over the full
/// frequency table, so the most frequent word is darkest and rarer words are
/// lighter. The table is passed in explicitly at construction; there is no
/// implicit ordering between counting and coloring.
#[derive(Debug, Clone)]
pub struct WordColors {
    scaled: IndexMap<String, f64>,
}

impl WordColors {
    /// Builds the scale from a frequency table.
    ///
    /// Fails with a state error when the table is empty, since a color scale
    /// without frequencies is meaningless.
    pub fn from_table(table: &FrequencyTable) -> VizResult<Self> {
        let max_count = table
            .max_count()
            .ok_or_else(|| VizError::State("color scale requires a non-empty frequency table".to_owned()))?;

        let log_max = (max_count as f64).ln();
        let scaled = table
            .iter()
            .map(|(word, count)| {
                let t = if log_max > 0.0 {
                    (count as f64).ln() / log_max
                } else {
                    // Every word occurs once; ln(1) = 0 on both sides.
                    1.0
                };
                (word.to_owned(), t)
            })
            .collect();

        Ok(Self { scaled })
    }

    /// Resolves the color for `word`; unknown words are a state error.
    pub fn color_for(&self, word: &str) -> VizResult<Color> {
        let t = self.scaled.get(word).ok_or_else(|| {
            VizError::State(format!("word `{word}` is not in the attached frequency table"))
        })?;
        Ok(YL_OR_RD.sample(*t))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table_of(entries: &[(&str, u64)]) -> FrequencyTable {
        entries
            .iter()
            .map(|(word, count)| ((*word).to_owned(), *count))
            .collect()
    }

    #[test]
    fn empty_table_is_a_state_error() {
        let err = WordColors::from_table(&FrequencyTable::new())
            .expect_err("must reject empty table");
        assert!(matches!(err, VizError::State(_)));
    }

    #[test]
    fn unknown_word_is_a_state_error() {
        let colors = WordColors::from_table(&table_of(&[("학교", 2)])).expect("colors");
        let err = colors.color_for("친구").expect_err("unknown word");
        assert!(matches!(err, VizError::State(_)));
    }

    #[test]
    fn most_frequent_word_is_darkest() {
        let colors =
            WordColors::from_table(&table_of(&[("학교", 2), ("친구", 9)])).expect("colors");
        let school = colors.color_for("학교").expect("color");
        let friend = colors.color_for("친구").expect("color");
        // YlOrRd gets darker (less green) toward t = 1.
        assert!(friend.green < school.green);
    }

    #[test]
    fn color_mapping_uses_the_full_table_maximum() {
        let full = table_of(&[("학교", 2), ("친구", 9), ("밥", 1)]);
        let colors = WordColors::from_table(&full).expect("colors");
        // 밥 is below the cloud's min-count filter but still resolvable here;
        // the scale is anchored at the table-wide max of 9.
        let rice = colors.color_for("밥").expect("color");
        assert_eq!(rice, YL_OR_RD.sample(0.0));
    }
}
