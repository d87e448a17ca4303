mod colormap;
mod frame;
mod null_renderer;
mod primitives;
mod word_colors;

pub use colormap::{SequentialColormap, YL_OR_RD, log_normalize_counts};
pub use frame::RenderFrame;
pub use null_renderer::NullRenderer;
pub use primitives::{Color, LinePrimitive, RectPrimitive, TextHAlign, TextPrimitive};
pub use word_colors::WordColors;

use crate::error::VizResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully materialized, deterministic `RenderFrame` so
/// drawing code remains isolated from analysis and layout logic.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> VizResult<()>;
}

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::{CairoRenderStats, CairoRenderer, validate_font_family};
