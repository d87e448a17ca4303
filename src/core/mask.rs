use std::path::Path;

use crate::error::{VizError, VizResult};

/// Luminance at or above which a mask pixel counts as background.
const BACKGROUND_LUMA: u8 = 250;

/// Occupancy silhouette for word-cloud placement.
///
/// Near-white pixels (luminance ≥ 250) are background and stay empty; darker
/// pixels form the silhouette words may be placed in. Mask dimensions define
/// the cloud canvas.
#[derive(Debug, Clone)]
pub struct MaskImage {
    width: u32,
    height: u32,
    blocked: Vec<bool>,
}

impl MaskImage {
    /// Loads a greyscale/binary mask from an image file.
    pub fn load(path: &Path) -> VizResult<Self> {
        let image = image::open(path)
            .map_err(|err| VizError::resource(path.display().to_string(), err.to_string()))?
            .to_luma8();

        let (width, height) = image.dimensions();
        if width == 0 || height == 0 {
            return Err(VizError::resource(
                path.display().to_string(),
                "mask image has zero area",
            ));
        }

        let blocked = image
            .pixels()
            .map(|pixel| pixel.0[0] >= BACKGROUND_LUMA)
            .collect();

        Ok(Self {
            width,
            height,
            blocked,
        })
    }

    /// Builds a maskless canvas: the full rectangle is fillable.
    pub fn open_rect(width: u32, height: u32) -> VizResult<Self> {
        if width == 0 || height == 0 {
            return Err(VizError::InvalidInput(format!(
                "cloud canvas must be > 0, got {width}x{height}"
            )));
        }
        Ok(Self {
            width,
            height,
            blocked: vec![false; width as usize * height as usize],
        })
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Whether the pixel belongs to the background (not fillable).
    /// Out-of-bounds coordinates count as blocked.
    #[must_use]
    pub fn is_blocked(&self, x: u32, y: u32) -> bool {
        if x >= self.width || y >= self.height {
            return true;
        }
        self.blocked[y as usize * self.width as usize + x as usize]
    }
}
