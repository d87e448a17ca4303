use textviz::analysis::FrequencyTable;
use textviz::api::{BarChartConfig, build_bar_chart_frame};
use textviz::render::{NullRenderer, Renderer, YL_OR_RD};
use textviz::VizError;

fn table_of(entries: &[(&str, u64)]) -> FrequencyTable {
    entries
        .iter()
        .map(|(word, count)| ((*word).to_owned(), *count))
        .collect()
}

#[test]
fn empty_table_is_a_render_error() {
    let err = build_bar_chart_frame(&FrequencyTable::new(), &BarChartConfig::default())
        .expect_err("must reject empty table");
    assert!(matches!(err, VizError::Render(_)));
}

#[test]
fn bar_count_is_min_of_top_n_and_table_size() {
    let table = table_of(&[("학교", 2), ("친구", 3), ("밥", 1)]);

    let frame = build_bar_chart_frame(&table, &BarChartConfig::default()).expect("frame");
    assert_eq!(frame.rects.len(), 3);

    let mut small = BarChartConfig::default();
    small.num_of_words = 2;
    let frame = build_bar_chart_frame(&table, &small).expect("frame");
    assert_eq!(frame.rects.len(), 2);
}

#[test]
fn every_bar_carries_its_count_and_word_label() {
    let table = table_of(&[("학교", 2), ("친구", 3), ("밥", 1)]);
    let frame = build_bar_chart_frame(&table, &BarChartConfig::default()).expect("frame");

    let labels: Vec<&str> = frame.texts.iter().map(|t| t.text.as_str()).collect();
    for needle in ["학교", "친구", "밥", "2", "3"] {
        assert!(labels.contains(&needle), "missing label `{needle}`");
    }
    // Title and y-axis caption ride along.
    assert!(labels.contains(&"빈도수 분석 결과"));
    assert!(labels.contains(&"등장 횟수"));
}

#[test]
fn most_frequent_bar_is_reddest() {
    let table = table_of(&[("학교", 2), ("친구", 9), ("밥", 1)]);
    let frame = build_bar_chart_frame(&table, &BarChartConfig::default()).expect("frame");

    // Bars are emitted in selection order: 친구 (9), 학교 (2), 밥 (1).
    let top = frame.rects[0].fill_color;
    let bottom = frame.rects[2].fill_color;
    assert_eq!(top, YL_OR_RD.sample(1.0));
    assert_eq!(bottom, YL_OR_RD.sample(0.0));
    assert!(top.green < bottom.green);
}

#[test]
fn equal_counts_map_to_the_mid_scale_color() {
    let table = table_of(&[("학교", 4), ("친구", 4), ("여행", 4)]);
    let frame = build_bar_chart_frame(&table, &BarChartConfig::default()).expect("frame");

    let mid = YL_OR_RD.sample(0.5);
    for rect in &frame.rects {
        assert_eq!(rect.fill_color, mid);
    }
}

#[test]
fn tie_break_preserves_insertion_order() {
    let table = table_of(&[("가방", 2), ("나라", 2), ("다리", 5)]);
    let mut config = BarChartConfig::default();
    config.num_of_words = 2;
    let frame = build_bar_chart_frame(&table, &config).expect("frame");

    let words: Vec<&str> = frame
        .texts
        .iter()
        .filter(|t| t.rotation_degrees == config.label_rotation_degrees)
        .map(|t| t.text.as_str())
        .collect();
    assert_eq!(words, vec!["다리", "가방"]);
}

#[test]
fn frame_renders_through_the_null_backend() {
    let table = table_of(&[("학교", 2), ("친구", 3)]);
    let frame = build_bar_chart_frame(&table, &BarChartConfig::default()).expect("frame");

    let mut renderer = NullRenderer::default();
    renderer.render(&frame).expect("render");
    assert_eq!(renderer.last_rect_count, 2);
    assert!(renderer.last_line_count >= 2);
    assert!(renderer.last_text_count > 4);
}

#[test]
fn invalid_config_is_rejected_before_layout() {
    let table = table_of(&[("학교", 2)]);
    let mut config = BarChartConfig::default();
    config.scale = f64::NAN;
    assert!(build_bar_chart_frame(&table, &config).is_err());
}
