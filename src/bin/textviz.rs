use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use clap::{Parser, ValueEnum};
use serde::de::DeserializeOwned;

use textviz::analysis::{LinderaExtractor, TextAnalyzer};
use textviz::api::{BarChartConfig, Visualization, WordCloudConfig};
use textviz::error::{VizError, VizResult};

#[derive(Parser, Debug)]
#[command(name = "textviz", about = "Korean text frequency visualization", version)]
struct Cli {
    /// Input text file; reads stdin when omitted.
    #[arg(long)]
    input: Option<PathBuf>,

    /// Visualization type.
    #[arg(long, value_enum, default_value = "bar-chart")]
    kind: CliKind,

    /// Output PNG path.
    #[arg(long, default_value = "visualization.png")]
    output: PathBuf,

    /// JSON config for the selected visualization; flags below override it.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Chart title (bar chart).
    #[arg(long)]
    title: Option<String>,

    /// Font family used for all labels and words.
    #[arg(long)]
    font_family: Option<String>,

    /// Greyscale mask image shaping the cloud (word cloud).
    #[arg(long)]
    mask: Option<PathBuf>,

    /// How many of the most frequent words to chart (bar chart).
    #[arg(long)]
    top_n: Option<usize>,

    /// Minimum occurrence count for cloud words (word cloud).
    #[arg(long)]
    min_count: Option<u64>,

    /// Placement seed for reproducible cloud layouts (word cloud).
    #[arg(long)]
    seed: Option<u64>,

    /// Directory for the timestamped session log.
    #[arg(long, default_value = "logs")]
    log_dir: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum CliKind {
    BarChart,
    WordCloud,
}

fn main() {
    let cli = Cli::parse();
    match run(cli) {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    }
}

fn run(cli: Cli) -> VizResult<i32> {
    if let Some(path) = textviz::telemetry::init_session_tracing(&cli.log_dir)? {
        tracing::info!(log = %path.display(), "session log opened");
    }

    let text = read_input(&cli)?;
    if text.trim().is_empty() {
        tracing::warn!("텍스트를 입력하세요.");
        return Ok(2);
    }

    let analyzer = TextAnalyzer::new(Box::new(LinderaExtractor::new()?));
    let table = analyzer.analyze(&text)?;
    tracing::info!(distinct_words = table.len(), "analysis complete");

    let visualization = build_visualization(&cli)?;
    visualization.render_to_png(&table, &cli.output)?;
    tracing::info!(output = %cli.output.display(), "visualization saved");
    Ok(0)
}

fn read_input(cli: &Cli) -> VizResult<String> {
    match &cli.input {
        Some(path) => fs::read_to_string(path)
            .map_err(|err| VizError::resource(path.display().to_string(), err.to_string())),
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .map_err(|err| VizError::InvalidInput(format!("failed to read stdin: {err}")))?;
            Ok(text)
        }
    }
}

fn build_visualization(cli: &Cli) -> VizResult<Visualization> {
    match cli.kind {
        CliKind::BarChart => {
            let mut config: BarChartConfig = match &cli.config {
                Some(path) => parse_json_config(path)?,
                None => BarChartConfig::default(),
            };
            if let Some(title) = &cli.title {
                config.title = title.clone();
            }
            if let Some(family) = &cli.font_family {
                config.font_family = family.clone();
            }
            if let Some(top_n) = cli.top_n {
                config.num_of_words = top_n;
            }
            Ok(Visualization::BarChart(config))
        }
        CliKind::WordCloud => {
            let mut config: WordCloudConfig = match &cli.config {
                Some(path) => parse_json_config(path)?,
                None => WordCloudConfig::default(),
            };
            if let Some(family) = &cli.font_family {
                config.font_family = family.clone();
            }
            if let Some(mask) = &cli.mask {
                config.mask_path = Some(mask.clone());
            }
            if let Some(min_count) = cli.min_count {
                config.min_word_count = min_count;
            }
            if let Some(seed) = cli.seed {
                config.seed = Some(seed);
            }
            Ok(Visualization::WordCloud(config))
        }
    }
}

fn parse_json_config<T: DeserializeOwned>(path: &Path) -> VizResult<T> {
    let raw = fs::read_to_string(path)
        .map_err(|err| VizError::resource(path.display().to_string(), err.to_string()))?;
    serde_json::from_str(&raw).map_err(|err| {
        VizError::InvalidInput(format!("config `{}` is not valid json: {err}", path.display()))
    })
}
