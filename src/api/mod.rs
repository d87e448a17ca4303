//! Public configuration and rendering entry points.

pub mod bar_chart;
pub mod config;
pub mod visualization;
pub mod word_cloud;

pub use bar_chart::build_bar_chart_frame;
pub use config::{BarChartConfig, WordCloudConfig};
pub use visualization::{Visualization, VisualizationKind};
pub use word_cloud::build_word_cloud_frame;
