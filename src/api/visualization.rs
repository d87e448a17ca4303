use serde::{Deserialize, Serialize};

use crate::api::config::{BarChartConfig, WordCloudConfig};

/// Chart type selector for callers that pick a visualization by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VisualizationKind {
    BarChart,
    WordCloud,
}

/// Closed set of supported visualizations.
///
/// One capability, two variants; dispatch is a match, not a class hierarchy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Visualization {
    BarChart(BarChartConfig),
    WordCloud(WordCloudConfig),
}

impl Visualization {
    #[must_use]
    pub fn kind(&self) -> VisualizationKind {
        match self {
            Self::BarChart(_) => VisualizationKind::BarChart,
            Self::WordCloud(_) => VisualizationKind::WordCloud,
        }
    }
}

#[cfg(feature = "cairo-backend")]
mod rasterize {
    use std::path::Path;

    use super::Visualization;
    use crate::analysis::FrequencyTable;
    use crate::api::{build_bar_chart_frame, build_word_cloud_frame};
    use crate::core::{MaskImage, Viewport};
    use crate::error::VizResult;
    use crate::render::{CairoRenderer, Renderer, validate_font_family};

    impl Visualization {
        /// Renders the frequency table and persists a PNG at `output_path`.
        ///
        /// Control returns only after the file is fully written. Concurrent
        /// calls must target distinct paths; writes are not synchronized.
        pub fn render_to_png(
            &self,
            freq: &FrequencyTable,
            output_path: &Path,
        ) -> VizResult<()> {
            match self {
                Self::BarChart(config) => {
                    config.validate()?;
                    validate_font_family(&config.font_family)?;
                    let frame = build_bar_chart_frame(freq, config)?;
                    let mut renderer = CairoRenderer::new(
                        Viewport::new(config.width, config.height),
                        config.scale,
                    )?;
                    renderer.render(&frame)?;
                    renderer.write_png(output_path)
                }
                Self::WordCloud(config) => {
                    config.validate()?;
                    validate_font_family(&config.font_family)?;
                    let mask = match &config.mask_path {
                        Some(path) => MaskImage::load(path)?,
                        None => MaskImage::open_rect(config.width, config.height)?,
                    };
                    let mut renderer = CairoRenderer::new(
                        Viewport::new(mask.width(), mask.height()),
                        config.scale,
                    )?;
                    let frame = build_word_cloud_frame(freq, config, &mask, &renderer)?;
                    renderer.render(&frame)?;
                    renderer.write_png(output_path)
                }
            }
        }
    }
}
