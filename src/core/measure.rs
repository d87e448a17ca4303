use crate::error::{VizError, VizResult};

/// Seam between layout and text rasterization.
///
/// Word-cloud placement needs pixel extents for candidate words before any
/// drawing happens; backends provide real measurements, tests provide a stub.
pub trait TextMeasurer {
    /// Returns the pixel `(width, height)` of `text` at `font_size_px`.
    fn measure(&self, text: &str, font_family: &str, font_size_px: f64) -> VizResult<(f64, f64)>;
}

/// Fixed-advance measurer for tests and headless layout experiments.
///
/// Every character advances `0.6 × font size`; line height is `1.2 × font
/// size`. Close enough to real metrics for collision-grid purposes.
#[derive(Debug, Clone, Copy, Default)]
pub struct MonospaceMeasurer;

impl TextMeasurer for MonospaceMeasurer {
    fn measure(&self, text: &str, _font_family: &str, font_size_px: f64) -> VizResult<(f64, f64)> {
        if !font_size_px.is_finite() || font_size_px <= 0.0 {
            return Err(VizError::InvalidInput(
                "font size must be finite and > 0".to_owned(),
            ));
        }
        let chars = text.chars().count() as f64;
        Ok((chars * font_size_px * 0.6, font_size_px * 1.2))
    }
}
