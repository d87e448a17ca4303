//! Deterministic, backend-agnostic geometry for both chart types.

pub mod bar_layout;
pub mod cloud_layout;
pub mod mask;
pub mod measure;
pub mod types;

pub use bar_layout::{BarColumn, PlotArea, project_bar_columns};
pub use cloud_layout::{CloudLayoutParams, PlacedWord, layout_word_cloud, scaled_font_size};
pub use mask::MaskImage;
pub use measure::{MonospaceMeasurer, TextMeasurer};
pub use types::Viewport;
