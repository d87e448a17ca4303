use crate::error::{VizError, VizResult};

/// Chart plot area in logical pixels (excludes margins, titles, axis labels).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotArea {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl PlotArea {
    pub fn validate(self) -> VizResult<()> {
        for (name, value) in [
            ("x", self.x),
            ("y", self.y),
            ("width", self.width),
            ("height", self.height),
        ] {
            if !value.is_finite() {
                return Err(VizError::InvalidInput(format!(
                    "plot area `{name}` must be finite"
                )));
            }
        }
        if self.width <= 0.0 || self.height <= 0.0 {
            return Err(VizError::InvalidInput(
                "plot area must have positive extent".to_owned(),
            ));
        }
        Ok(())
    }
}

/// Deterministic geometry for one vertical bar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarColumn {
    pub x_center: f64,
    pub x_left: f64,
    pub x_right: f64,
    pub y_top: f64,
    pub y_bottom: f64,
}

/// Share of each slot occupied by its bar.
const BAR_FILL_RATIO: f64 = 0.8;

/// Projects counts into evenly spaced vertical bars inside `plot`.
///
/// The i-th bar is centered in the i-th of `counts.len()` equal slots; bar
/// height maps `0..=y_max` linearly onto the plot height with the baseline at
/// the plot bottom.
pub fn project_bar_columns(
    counts: &[u64],
    plot: PlotArea,
    y_max: f64,
) -> VizResult<Vec<BarColumn>> {
    plot.validate()?;
    if !y_max.is_finite() || y_max <= 0.0 {
        return Err(VizError::InvalidInput(
            "bar chart y_max must be finite and > 0".to_owned(),
        ));
    }
    if counts.is_empty() {
        return Ok(Vec::new());
    }

    let slot_width = plot.width / counts.len() as f64;
    let half_bar = slot_width * BAR_FILL_RATIO * 0.5;
    let baseline = plot.y + plot.height;

    let mut columns = Vec::with_capacity(counts.len());
    for (index, count) in counts.iter().enumerate() {
        let x_center = plot.x + (index as f64 + 0.5) * slot_width;
        let height = (*count as f64 / y_max).min(1.0) * plot.height;
        columns.push(BarColumn {
            x_center,
            x_left: x_center - half_bar,
            x_right: x_center + half_bar,
            y_top: baseline - height,
            y_bottom: baseline,
        });
    }

    Ok(columns)
}

/// Picks a y-axis ceiling and tick positions covering `max_count`.
///
/// The tick step is the smallest of 1/2/5 × 10^k producing at most six ticks;
/// the ceiling is the first step multiple at or above `max_count`.
#[must_use]
pub fn nice_ticks(max_count: u64) -> (f64, Vec<u64>) {
    let max_count = max_count.max(1);
    let mut step: u64 = 1;
    loop {
        for factor in [1, 2, 5] {
            let candidate = step * factor;
            if max_count.div_ceil(candidate) <= 5 {
                let ceiling = candidate * max_count.div_ceil(candidate);
                let ticks = (0..=ceiling).step_by(candidate as usize).collect();
                return (ceiling as f64, ticks);
            }
        }
        step *= 10;
    }
}
