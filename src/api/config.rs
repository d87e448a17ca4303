use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{VizError, VizResult};

/// Bar chart rendering parameters.
///
/// Serializable so host applications can persist/load visualization setup
/// without inventing their own ad-hoc format. Every field has a documented
/// default; thresholds stay configurable rather than baked-in constants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarChartConfig {
    /// Chart title, centered above the plot.
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_font_family")]
    pub font_family: String,
    /// How many of the most frequent words to draw.
    #[serde(default = "default_num_of_words")]
    pub num_of_words: usize,
    /// Logical canvas width in pixels.
    #[serde(default = "default_bar_width")]
    pub width: u32,
    /// Logical canvas height in pixels.
    #[serde(default = "default_bar_height")]
    pub height: u32,
    /// Device-pixel multiplier; 3.0 approximates a 300 DPI export.
    #[serde(default = "default_scale")]
    pub scale: f64,
    /// Counterclockwise rotation of the x-axis word labels.
    #[serde(default = "default_label_rotation")]
    pub label_rotation_degrees: f64,
    /// Y-axis caption.
    #[serde(default = "default_y_label")]
    pub y_label: String,
    /// Font size of the per-bar count labels.
    #[serde(default = "default_value_label_font_size")]
    pub value_label_font_size: f64,
}

impl Default for BarChartConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            font_family: default_font_family(),
            num_of_words: default_num_of_words(),
            width: default_bar_width(),
            height: default_bar_height(),
            scale: default_scale(),
            label_rotation_degrees: default_label_rotation(),
            y_label: default_y_label(),
            value_label_font_size: default_value_label_font_size(),
        }
    }
}

impl BarChartConfig {
    pub fn validate(&self) -> VizResult<()> {
        if self.num_of_words == 0 {
            return Err(VizError::InvalidInput(
                "num_of_words must be >= 1".to_owned(),
            ));
        }
        if self.width == 0 || self.height == 0 {
            return Err(VizError::InvalidInput(format!(
                "bar chart canvas must be > 0, got {}x{}",
                self.width, self.height
            )));
        }
        if !self.scale.is_finite() || self.scale <= 0.0 {
            return Err(VizError::InvalidInput(
                "render scale must be finite and > 0".to_owned(),
            ));
        }
        if !self.label_rotation_degrees.is_finite() {
            return Err(VizError::InvalidInput(
                "label rotation must be finite".to_owned(),
            ));
        }
        if !self.value_label_font_size.is_finite() || self.value_label_font_size <= 0.0 {
            return Err(VizError::InvalidInput(
                "value label font size must be finite and > 0".to_owned(),
            ));
        }
        if self.font_family.is_empty() {
            return Err(VizError::InvalidInput(
                "font family must not be empty".to_owned(),
            ));
        }
        Ok(())
    }
}

/// Word cloud rendering parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordCloudConfig {
    #[serde(default = "default_font_family")]
    pub font_family: String,
    /// Logical canvas width when no mask is given; mask dimensions win.
    #[serde(default = "default_cloud_width")]
    pub width: u32,
    /// Logical canvas height when no mask is given; mask dimensions win.
    #[serde(default = "default_cloud_height")]
    pub height: u32,
    /// Device-pixel multiplier; 3.0 approximates a 300 DPI export.
    #[serde(default = "default_scale")]
    pub scale: f64,
    /// Words below this count never enter the cloud.
    #[serde(default = "default_min_word_count")]
    pub min_word_count: u64,
    /// Cap on distinct placed words.
    #[serde(default = "default_max_words")]
    pub max_words: usize,
    #[serde(default = "default_min_font_size")]
    pub min_font_size: f64,
    #[serde(default = "default_max_font_size")]
    pub max_font_size: f64,
    /// Placement RNG seed; `None` gives a fresh layout per run.
    #[serde(default)]
    pub seed: Option<u64>,
    /// Optional greyscale silhouette image.
    #[serde(default)]
    pub mask_path: Option<PathBuf>,
}

impl Default for WordCloudConfig {
    fn default() -> Self {
        Self {
            font_family: default_font_family(),
            width: default_cloud_width(),
            height: default_cloud_height(),
            scale: default_scale(),
            min_word_count: default_min_word_count(),
            max_words: default_max_words(),
            min_font_size: default_min_font_size(),
            max_font_size: default_max_font_size(),
            seed: None,
            mask_path: None,
        }
    }
}

impl WordCloudConfig {
    pub fn validate(&self) -> VizResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(VizError::InvalidInput(format!(
                "word cloud canvas must be > 0, got {}x{}",
                self.width, self.height
            )));
        }
        if !self.scale.is_finite() || self.scale <= 0.0 {
            return Err(VizError::InvalidInput(
                "render scale must be finite and > 0".to_owned(),
            ));
        }
        if self.min_word_count == 0 {
            return Err(VizError::InvalidInput(
                "min word count must be >= 1".to_owned(),
            ));
        }
        if self.max_words == 0 {
            return Err(VizError::InvalidInput("max words must be >= 1".to_owned()));
        }
        if !self.min_font_size.is_finite() || self.min_font_size <= 0.0 {
            return Err(VizError::InvalidInput(
                "min font size must be finite and > 0".to_owned(),
            ));
        }
        if !self.max_font_size.is_finite() || self.max_font_size < self.min_font_size {
            return Err(VizError::InvalidInput(
                "max font size must be finite and >= min font size".to_owned(),
            ));
        }
        if self.font_family.is_empty() {
            return Err(VizError::InvalidInput(
                "font family must not be empty".to_owned(),
            ));
        }
        Ok(())
    }
}

fn default_title() -> String {
    "빈도수 분석 결과".to_owned()
}

fn default_font_family() -> String {
    "Sans".to_owned()
}

fn default_num_of_words() -> usize {
    25
}

fn default_bar_width() -> u32 {
    1000
}

fn default_bar_height() -> u32 {
    600
}

fn default_scale() -> f64 {
    3.0
}

fn default_label_rotation() -> f64 {
    45.0
}

fn default_y_label() -> String {
    "등장 횟수".to_owned()
}

fn default_value_label_font_size() -> f64 {
    10.0
}

fn default_cloud_width() -> u32 {
    900
}

fn default_cloud_height() -> u32 {
    600
}

fn default_min_word_count() -> u64 {
    2
}

fn default_max_words() -> usize {
    100
}

fn default_min_font_size() -> f64 {
    10.0
}

fn default_max_font_size() -> f64 {
    150.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bar_chart_defaults_match_contract() {
        let config = BarChartConfig::default();
        assert_eq!(config.num_of_words, 25);
        assert_eq!(config.label_rotation_degrees, 45.0);
        assert_eq!(config.y_label, "등장 횟수");
        config.validate().expect("defaults must validate");
    }

    #[test]
    fn word_cloud_defaults_match_contract() {
        let config = WordCloudConfig::default();
        assert_eq!(config.min_word_count, 2);
        assert_eq!(config.max_words, 100);
        assert_eq!(config.min_font_size, 10.0);
        assert_eq!(config.max_font_size, 150.0);
        assert_eq!((config.width, config.height), (900, 600));
        config.validate().expect("defaults must validate");
    }

    #[test]
    fn configs_round_trip_through_json_with_defaults() {
        let config: BarChartConfig =
            serde_json::from_str(r#"{"num_of_words": 5}"#).expect("parse");
        assert_eq!(config.num_of_words, 5);
        assert_eq!(config.title, "빈도수 분석 결과");

        let cloud: WordCloudConfig =
            serde_json::from_str(r#"{"min_word_count": 3, "seed": 11}"#).expect("parse");
        assert_eq!(cloud.min_word_count, 3);
        assert_eq!(cloud.seed, Some(11));
        assert!(cloud.mask_path.is_none());
    }

    #[test]
    fn validation_rejects_degenerate_values() {
        let mut config = BarChartConfig::default();
        config.num_of_words = 0;
        assert!(config.validate().is_err());

        let mut cloud = WordCloudConfig::default();
        cloud.max_font_size = 5.0;
        assert!(cloud.validate().is_err());
    }
}
