use crate::analysis::FrequencyTable;
use crate::api::config::WordCloudConfig;
use crate::core::{CloudLayoutParams, MaskImage, TextMeasurer, Viewport, layout_word_cloud};
use crate::error::{VizError, VizResult};
use crate::render::{RenderFrame, TextHAlign, TextPrimitive, WordColors};

/// Builds the word cloud scene for a frequency table.
///
/// Entries below `min_word_count` are dropped first; the survivors are packed
/// into the mask silhouette and colored on the relative log scale of the full
/// table, so the most frequent word is darkest.
pub fn build_word_cloud_frame(
    freq: &FrequencyTable,
    config: &WordCloudConfig,
    mask: &MaskImage,
    measurer: &dyn TextMeasurer,
) -> VizResult<RenderFrame> {
    config.validate()?;

    let filtered = freq.filter_min_count(config.min_word_count);
    if filtered.is_empty() {
        return Err(VizError::Render(format!(
            "no words with count >= {} to place in the cloud",
            config.min_word_count
        )));
    }

    let colors = WordColors::from_table(freq)?;
    let params = CloudLayoutParams {
        font_family: config.font_family.clone(),
        min_font_size: config.min_font_size,
        max_font_size: config.max_font_size,
        max_words: config.max_words,
        seed: config.seed,
    };
    let placed = layout_word_cloud(&filtered, mask, measurer, &params)?;
    if placed.is_empty() {
        return Err(VizError::Render(
            "no words could be placed inside the mask silhouette".to_owned(),
        ));
    }

    let mut frame = RenderFrame::new(Viewport::new(mask.width(), mask.height()));
    for word in placed {
        let color = colors.color_for(&word.word)?;
        frame = frame.with_text(
            TextPrimitive::new(
                word.word,
                word.x,
                word.y,
                word.font_size,
                color,
                TextHAlign::Left,
            )
            .with_font_family(&config.font_family),
        );
    }

    frame.validate()?;
    tracing::debug!(words = frame.texts.len(), "word cloud frame built");
    Ok(frame)
}
