use std::path::PathBuf;

use image::{GrayImage, Luma};

use textviz::VizError;
use textviz::analysis::FrequencyTable;
use textviz::api::{WordCloudConfig, build_word_cloud_frame};
use textviz::core::{MaskImage, MonospaceMeasurer};
use textviz::render::{NullRenderer, Renderer, WordColors};

fn table_of(entries: &[(&str, u64)]) -> FrequencyTable {
    entries
        .iter()
        .map(|(word, count)| ((*word).to_owned(), *count))
        .collect()
}

fn seeded_config() -> WordCloudConfig {
    let mut config = WordCloudConfig::default();
    config.width = 400;
    config.height = 300;
    config.max_font_size = 40.0;
    config.seed = Some(11);
    config
}

fn temp_mask_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("textviz_{}_{name}.png", std::process::id()))
}

#[test]
fn singletons_never_appear_in_the_cloud() {
    let table = table_of(&[("학교", 2), ("친구", 3), ("밥", 1)]);
    let mask = MaskImage::open_rect(400, 300).expect("mask");

    let frame = build_word_cloud_frame(&table, &seeded_config(), &mask, &MonospaceMeasurer)
        .expect("frame");

    let words: Vec<&str> = frame.texts.iter().map(|t| t.text.as_str()).collect();
    assert!(words.contains(&"학교"));
    assert!(words.contains(&"친구"));
    assert!(!words.contains(&"밥"));
}

#[test]
fn all_singletons_is_a_render_error() {
    let table = table_of(&[("학교", 1), ("친구", 1)]);
    let mask = MaskImage::open_rect(400, 300).expect("mask");

    let err = build_word_cloud_frame(&table, &seeded_config(), &mask, &MonospaceMeasurer)
        .expect_err("must reject all-singleton table");
    assert!(matches!(err, VizError::Render(_)));
}

#[test]
fn empty_table_is_a_render_error() {
    let mask = MaskImage::open_rect(400, 300).expect("mask");
    let err = build_word_cloud_frame(
        &FrequencyTable::new(),
        &seeded_config(),
        &mask,
        &MonospaceMeasurer,
    )
    .expect_err("must reject empty table");
    assert!(matches!(err, VizError::Render(_)));
}

#[test]
fn word_colors_follow_the_relative_log_scale() {
    let table = table_of(&[("학교", 2), ("친구", 9), ("여행", 3)]);
    let mask = MaskImage::open_rect(400, 300).expect("mask");

    let frame = build_word_cloud_frame(&table, &seeded_config(), &mask, &MonospaceMeasurer)
        .expect("frame");

    let colors = WordColors::from_table(&table).expect("colors");
    for text in &frame.texts {
        let expected = colors.color_for(&text.text).expect("color");
        assert_eq!(text.color, expected);
    }
}

#[test]
fn mask_dimensions_define_the_canvas() {
    let path = temp_mask_path("silhouette");
    let mut pixels = GrayImage::from_pixel(120, 80, Luma([255]));
    for y in 10..70 {
        for x in 10..110 {
            pixels.put_pixel(x, y, Luma([0]));
        }
    }
    pixels.save(&path).expect("write mask fixture");

    let mask = MaskImage::load(&path).expect("load mask");
    assert_eq!((mask.width(), mask.height()), (120, 80));

    let mut config = seeded_config();
    config.max_font_size = 16.0;
    let table = table_of(&[("학교", 4), ("친구", 2)]);
    let frame =
        build_word_cloud_frame(&table, &config, &mask, &MonospaceMeasurer).expect("frame");
    assert_eq!((frame.viewport.width, frame.viewport.height), (120, 80));

    // Every placed word sits inside the dark silhouette rectangle.
    for text in &frame.texts {
        assert!(text.x >= 10.0 && text.y >= 10.0);
        assert!(text.x < 110.0 && text.y < 70.0);
    }

    std::fs::remove_file(&path).ok();
}

#[test]
fn fully_blocked_mask_is_a_render_error() {
    let path = temp_mask_path("blocked");
    GrayImage::from_pixel(60, 40, Luma([255]))
        .save(&path)
        .expect("write mask fixture");

    let mask = MaskImage::load(&path).expect("load mask");
    let table = table_of(&[("학교", 4), ("친구", 2)]);
    let err = build_word_cloud_frame(&table, &seeded_config(), &mask, &MonospaceMeasurer)
        .expect_err("nothing can be placed on a background-only mask");
    assert!(matches!(err, VizError::Render(_)));

    std::fs::remove_file(&path).ok();
}

#[test]
fn placed_words_cap_at_max_words() {
    let entries: Vec<(String, u64)> = (0..30u64).map(|i| (format!("단어{i}"), 2 + i % 4)).collect();
    let table: FrequencyTable = entries.into_iter().collect();
    let mask = MaskImage::open_rect(600, 400).expect("mask");

    let mut config = seeded_config();
    config.width = 600;
    config.height = 400;
    config.max_words = 8;
    config.max_font_size = 20.0;

    let frame =
        build_word_cloud_frame(&table, &config, &mask, &MonospaceMeasurer).expect("frame");
    assert!(frame.texts.len() <= 8);
}

#[test]
fn frame_renders_through_the_null_backend() {
    let table = table_of(&[("학교", 2), ("친구", 3)]);
    let mask = MaskImage::open_rect(400, 300).expect("mask");
    let frame = build_word_cloud_frame(&table, &seeded_config(), &mask, &MonospaceMeasurer)
        .expect("frame");

    let mut renderer = NullRenderer::default();
    renderer.render(&frame).expect("render");
    assert_eq!(renderer.last_text_count, 2);
    assert_eq!(renderer.last_rect_count, 0);
}
