//! textviz: Korean text frequency visualization.
//!
//! The crate turns raw Korean text into a noun frequency table and renders it
//! as either a labeled bar chart or a mask-shaped word cloud. Analysis and
//! layout are deterministic and backend-agnostic; rasterization lives behind
//! the optional `cairo-backend` feature.

pub mod analysis;
pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use analysis::{FrequencyTable, StopwordFilter, TextAnalyzer};
pub use api::{BarChartConfig, Visualization, WordCloudConfig};
pub use error::{VizError, VizResult};
