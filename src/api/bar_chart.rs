use crate::analysis::FrequencyTable;
use crate::api::config::BarChartConfig;
use crate::core::{PlotArea, Viewport, bar_layout, project_bar_columns};
use crate::error::{VizError, VizResult};
use crate::render::{
    Color, LinePrimitive, RenderFrame, TextHAlign, TextPrimitive, YL_OR_RD, log_normalize_counts,
    RectPrimitive,
};

const MARGIN_LEFT: f64 = 80.0;
const MARGIN_RIGHT: f64 = 24.0;
const MARGIN_TOP: f64 = 56.0;
const MARGIN_BOTTOM: f64 = 120.0;
const TITLE_FONT_SIZE: f64 = 16.0;
const AXIS_FONT_SIZE: f64 = 10.0;
const WORD_LABEL_FONT_SIZE: f64 = 11.0;

const AXIS_COLOR: Color = Color::rgb(0.0, 0.0, 0.0);

/// Builds the bar chart scene for a frequency table.
///
/// Selects the top `num_of_words` entries (stable on ties), colors them on the
/// log-normalized YlOrRd scale, and lays out bars, per-bar count labels,
/// rotated word labels, y-axis ticks, the y-axis caption, and the title.
pub fn build_bar_chart_frame(
    freq: &FrequencyTable,
    config: &BarChartConfig,
) -> VizResult<RenderFrame> {
    config.validate()?;
    if freq.is_empty() {
        return Err(VizError::Render(
            "cannot render a bar chart from an empty frequency table".to_owned(),
        ));
    }

    let selected = freq.top_n(config.num_of_words);
    let counts: Vec<u64> = selected.iter().map(|(_, count)| *count).collect();
    let normalized = log_normalize_counts(&counts);

    // Selection is sorted descending, so the first count is the maximum.
    let (y_max, ticks) = bar_layout::nice_ticks(counts[0]);

    let width = f64::from(config.width);
    let height = f64::from(config.height);
    let plot = PlotArea {
        x: MARGIN_LEFT,
        y: MARGIN_TOP,
        width: width - MARGIN_LEFT - MARGIN_RIGHT,
        height: height - MARGIN_TOP - MARGIN_BOTTOM,
    };
    let baseline = plot.y + plot.height;
    let columns = project_bar_columns(&counts, plot, y_max)?;

    let mut frame = RenderFrame::new(Viewport::new(config.width, config.height))
        .with_text(
            TextPrimitive::new(
                config.title.clone(),
                width / 2.0,
                14.0,
                TITLE_FONT_SIZE,
                AXIS_COLOR,
                TextHAlign::Center,
            )
            .with_font_family(&config.font_family),
        )
        .with_text(
            TextPrimitive::new(
                config.y_label.clone(),
                18.0,
                plot.y + plot.height / 2.0,
                AXIS_FONT_SIZE + 2.0,
                AXIS_COLOR,
                TextHAlign::Center,
            )
            .with_font_family(&config.font_family)
            .with_rotation(90.0),
        )
        .with_line(LinePrimitive::new(
            plot.x,
            plot.y,
            plot.x,
            baseline,
            1.0,
            AXIS_COLOR,
        ))
        .with_line(LinePrimitive::new(
            plot.x,
            baseline,
            plot.x + plot.width,
            baseline,
            1.0,
            AXIS_COLOR,
        ));

    for tick in &ticks {
        let tick_y = baseline - (*tick as f64 / y_max) * plot.height;
        frame = frame
            .with_line(LinePrimitive::new(
                plot.x - 4.0,
                tick_y,
                plot.x,
                tick_y,
                1.0,
                AXIS_COLOR,
            ))
            .with_text(
                TextPrimitive::new(
                    tick.to_string(),
                    plot.x - 8.0,
                    tick_y - AXIS_FONT_SIZE * 0.7,
                    AXIS_FONT_SIZE,
                    AXIS_COLOR,
                    TextHAlign::Right,
                )
                .with_font_family(&config.font_family),
            );
    }

    for (index, ((word, count), column)) in selected.iter().zip(&columns).enumerate() {
        let fill = YL_OR_RD.sample(normalized[index]);
        frame = frame
            .with_rect(RectPrimitive::new(
                column.x_left,
                column.y_top,
                column.x_right - column.x_left,
                column.y_bottom - column.y_top,
                fill,
            ))
            .with_text(
                TextPrimitive::new(
                    count.to_string(),
                    column.x_center,
                    column.y_top - config.value_label_font_size * 1.5,
                    config.value_label_font_size,
                    AXIS_COLOR,
                    TextHAlign::Center,
                )
                .with_font_family(&config.font_family),
            )
            .with_text(
                TextPrimitive::new(
                    word.clone(),
                    column.x_center,
                    baseline + 8.0,
                    WORD_LABEL_FONT_SIZE,
                    AXIS_COLOR,
                    TextHAlign::Right,
                )
                .with_font_family(&config.font_family)
                .with_rotation(config.label_rotation_degrees),
            );
    }

    frame.validate()?;
    tracing::debug!(bars = columns.len(), "bar chart frame built");
    Ok(frame)
}
