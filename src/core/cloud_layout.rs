use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::core::mask::MaskImage;
use crate::core::measure::TextMeasurer;
use crate::error::{VizError, VizResult};

/// Word-cloud layout parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct CloudLayoutParams {
    pub font_family: String,
    pub min_font_size: f64,
    pub max_font_size: f64,
    /// Placement stops after this many words have been placed.
    pub max_words: usize,
    /// `None` draws placement positions from entropy; runs then differ in
    /// layout but never in word sizing.
    pub seed: Option<u64>,
}

impl CloudLayoutParams {
    pub fn validate(&self) -> VizResult<()> {
        if !self.min_font_size.is_finite() || self.min_font_size <= 0.0 {
            return Err(VizError::InvalidInput(
                "min font size must be finite and > 0".to_owned(),
            ));
        }
        if !self.max_font_size.is_finite() || self.max_font_size < self.min_font_size {
            return Err(VizError::InvalidInput(
                "max font size must be finite and >= min font size".to_owned(),
            ));
        }
        if self.max_words == 0 {
            return Err(VizError::InvalidInput(
                "max words must be >= 1".to_owned(),
            ));
        }
        Ok(())
    }
}

/// One placed word: top-left anchor in canvas pixels plus its resolved size.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedWord {
    pub word: String,
    pub count: u64,
    pub x: f64,
    pub y: f64,
    pub font_size: f64,
}

/// Random positions tried per word before it is skipped.
const PLACEMENT_ATTEMPTS: usize = 300;
/// Pixel padding kept around each placed word.
const WORD_PADDING_PX: u32 = 2;
/// Words may use at most this share of the canvas width.
const MAX_WIDTH_RATIO: f64 = 0.9;

/// Maps a count onto a font size, monotonically on the relative log scale.
///
/// `t = ln(count) / ln(max_count)` interpolates between the size bounds; when
/// every count equals one the ratio is undefined and all words take the
/// maximum size. Pure in the inputs, so the word→size mapping never depends
/// on placement randomness.
#[must_use]
pub fn scaled_font_size(count: u64, max_count: u64, min_size: f64, max_size: f64) -> f64 {
    let t = if max_count > 1 {
        ((count.max(1) as f64).ln() / (max_count as f64).ln()).clamp(0.0, 1.0)
    } else {
        1.0
    };
    min_size + (max_size - min_size) * t
}

/// Packs words into the mask silhouette, most frequent first.
///
/// Each word is measured at its scaled size (capped so it fits the canvas
/// width), then tried at random positions against an occupancy grid seeded
/// from the mask. Words that find no free spot are skipped; placement stops
/// once `max_words` words are down.
pub fn layout_word_cloud(
    entries: &[(String, u64)],
    mask: &MaskImage,
    measurer: &dyn TextMeasurer,
    params: &CloudLayoutParams,
) -> VizResult<Vec<PlacedWord>> {
    params.validate()?;
    if entries.is_empty() {
        return Ok(Vec::new());
    }

    let mut ordered = entries.to_vec();
    ordered.sort_by(|a, b| b.1.cmp(&a.1));
    let max_count = ordered[0].1;

    let mut rng = match params.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut grid = OccupancyGrid::from_mask(mask);
    let canvas_width = f64::from(mask.width());

    let mut placed = Vec::new();
    for (word, count) in &ordered {
        if placed.len() >= params.max_words {
            break;
        }

        let mut font_size =
            scaled_font_size(*count, max_count, params.min_font_size, params.max_font_size);
        let (mut width, mut height) = measurer.measure(word, &params.font_family, font_size)?;
        if width > canvas_width * MAX_WIDTH_RATIO {
            font_size = (font_size * canvas_width * MAX_WIDTH_RATIO / width)
                .max(params.min_font_size);
            (width, height) = measurer.measure(word, &params.font_family, font_size)?;
        }

        let box_width = width.ceil() as u32 + 2 * WORD_PADDING_PX;
        let box_height = height.ceil() as u32 + 2 * WORD_PADDING_PX;
        if box_width > mask.width() || box_height > mask.height() {
            tracing::debug!(word, "word too large for canvas, skipped");
            continue;
        }

        for _ in 0..PLACEMENT_ATTEMPTS {
            let x = rng.gen_range(0..=mask.width() - box_width);
            let y = rng.gen_range(0..=mask.height() - box_height);
            if grid.is_free(x, y, box_width, box_height) {
                grid.occupy(x, y, box_width, box_height);
                placed.push(PlacedWord {
                    word: word.clone(),
                    count: *count,
                    x: f64::from(x + WORD_PADDING_PX),
                    y: f64::from(y + WORD_PADDING_PX),
                    font_size,
                });
                break;
            }
        }
    }

    tracing::debug!(
        placed = placed.len(),
        candidates = ordered.len(),
        "word cloud layout complete"
    );
    Ok(placed)
}

/// Pixel-resolution collision grid over the mask.
struct OccupancyGrid {
    width: u32,
    height: u32,
    taken: Vec<bool>,
}

impl OccupancyGrid {
    fn from_mask(mask: &MaskImage) -> Self {
        let width = mask.width();
        let height = mask.height();
        let mut taken = vec![false; width as usize * height as usize];
        for y in 0..height {
            for x in 0..width {
                if mask.is_blocked(x, y) {
                    taken[y as usize * width as usize + x as usize] = true;
                }
            }
        }
        Self {
            width,
            height,
            taken,
        }
    }

    fn is_free(&self, x: u32, y: u32, box_width: u32, box_height: u32) -> bool {
        if x + box_width > self.width || y + box_height > self.height {
            return false;
        }
        for row in y..y + box_height {
            let base = row as usize * self.width as usize;
            for col in x..x + box_width {
                if self.taken[base + col as usize] {
                    return false;
                }
            }
        }
        true
    }

    fn occupy(&mut self, x: u32, y: u32, box_width: u32, box_height: u32) {
        for row in y..y + box_height {
            let base = row as usize * self.width as usize;
            for col in x..x + box_width {
                self.taken[base + col as usize] = true;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::measure::MonospaceMeasurer;
    use approx::assert_relative_eq;

    fn entries(raw: &[(&str, u64)]) -> Vec<(String, u64)> {
        raw.iter()
            .map(|(word, count)| ((*word).to_owned(), *count))
            .collect()
    }

    fn params(seed: u64) -> CloudLayoutParams {
        CloudLayoutParams {
            font_family: "Sans".to_owned(),
            min_font_size: 8.0,
            max_font_size: 24.0,
            max_words: 100,
            seed: Some(seed),
        }
    }

    #[test]
    fn font_size_is_monotonic_and_bounded() {
        let small = scaled_font_size(2, 100, 10.0, 150.0);
        let mid = scaled_font_size(10, 100, 10.0, 150.0);
        let top = scaled_font_size(100, 100, 10.0, 150.0);
        assert!(small < mid && mid < top);
        assert!(small >= 10.0);
        assert_relative_eq!(top, 150.0);
    }

    #[test]
    fn all_equal_counts_take_the_maximum_size() {
        assert_relative_eq!(scaled_font_size(1, 1, 10.0, 150.0), 150.0);
    }

    #[test]
    fn layout_places_words_without_overlap() {
        let mask = MaskImage::open_rect(400, 300).expect("mask");
        let words = entries(&[("친구", 5), ("학교", 3), ("여행", 2), ("음악", 2)]);

        let placed = layout_word_cloud(&words, &mask, &MonospaceMeasurer, &params(7))
            .expect("layout");
        assert_eq!(placed.len(), 4);

        let boxes: Vec<(f64, f64, f64, f64)> = placed
            .iter()
            .map(|p| {
                let (w, h) = MonospaceMeasurer
                    .measure(&p.word, "Sans", p.font_size)
                    .expect("measure");
                (p.x, p.y, p.x + w, p.y + h)
            })
            .collect();

        for (i, a) in boxes.iter().enumerate() {
            assert!(a.0 >= 0.0 && a.1 >= 0.0 && a.2 <= 400.0 && a.3 <= 300.0);
            for b in &boxes[i + 1..] {
                let disjoint = a.2 <= b.0 || b.2 <= a.0 || a.3 <= b.1 || b.3 <= a.1;
                assert!(disjoint, "placed words must not overlap");
            }
        }
    }

    #[test]
    fn layout_orders_most_frequent_first() {
        let mask = MaskImage::open_rect(400, 300).expect("mask");
        let words = entries(&[("가방", 2), ("나라", 9)]);

        let placed = layout_word_cloud(&words, &mask, &MonospaceMeasurer, &params(1))
            .expect("layout");
        assert_eq!(placed[0].word, "나라");
        assert!(placed[0].font_size > placed[1].font_size);
    }

    #[test]
    fn layout_caps_placed_words() {
        let mask = MaskImage::open_rect(600, 400).expect("mask");
        let words: Vec<(String, u64)> = (0..20)
            .map(|i| (format!("단어{i}"), 2 + (i % 3) as u64))
            .collect();
        let mut limited = params(3);
        limited.max_words = 5;

        let placed =
            layout_word_cloud(&words, &mask, &MonospaceMeasurer, &limited).expect("layout");
        assert_eq!(placed.len(), 5);
    }

    #[test]
    fn layout_with_same_seed_is_reproducible() {
        let mask = MaskImage::open_rect(300, 200).expect("mask");
        let words = entries(&[("학교", 4), ("친구", 2)]);

        let first = layout_word_cloud(&words, &mask, &MonospaceMeasurer, &params(42))
            .expect("layout");
        let second = layout_word_cloud(&words, &mask, &MonospaceMeasurer, &params(42))
            .expect("layout");
        assert_eq!(first, second);
    }
}
