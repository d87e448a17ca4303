use std::fs::File;
use std::path::Path;

use cairo::{Context, Format, ImageSurface};
use pango::FontDescription;
use pango::prelude::*;

use crate::core::{TextMeasurer, Viewport};
use crate::error::{VizError, VizResult};
use crate::render::{Color, RenderFrame, Renderer, TextHAlign, TextPrimitive};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CairoRenderStats {
    pub lines_drawn: usize,
    pub rects_drawn: usize,
    pub texts_drawn: usize,
}

/// Cairo + Pango + PangoCairo raster backend.
///
/// The surface is allocated at `viewport × scale` device pixels while drawing
/// happens in logical coordinates, so a scale of 3.0 yields a 300 DPI-class
/// PNG from a 100 DPI logical layout.
#[derive(Debug)]
pub struct CairoRenderer {
    surface: ImageSurface,
    scale: f64,
    clear_color: Color,
    last_stats: CairoRenderStats,
}

impl CairoRenderer {
    pub fn new(viewport: Viewport, scale: f64) -> VizResult<Self> {
        if !viewport.is_valid() {
            return Err(VizError::InvalidInput(format!(
                "invalid viewport size: width={}, height={}",
                viewport.width, viewport.height
            )));
        }
        if !scale.is_finite() || scale <= 0.0 {
            return Err(VizError::InvalidInput(
                "render scale must be finite and > 0".to_owned(),
            ));
        }

        let device_width = (f64::from(viewport.width) * scale).round() as i32;
        let device_height = (f64::from(viewport.height) * scale).round() as i32;
        let surface = ImageSurface::create(Format::ARgb32, device_width, device_height)
            .map_err(|err| map_backend_error("failed to create cairo surface", err))?;

        Ok(Self {
            surface,
            scale,
            clear_color: Color::rgb(1.0, 1.0, 1.0),
            last_stats: CairoRenderStats::default(),
        })
    }

    #[must_use]
    pub fn backend_name(&self) -> &'static str {
        "cairo+pango+pangocairo"
    }

    #[must_use]
    pub fn surface(&self) -> &ImageSurface {
        &self.surface
    }

    pub fn set_clear_color(&mut self, color: Color) -> VizResult<()> {
        color.validate()?;
        self.clear_color = color;
        Ok(())
    }

    #[must_use]
    pub fn last_stats(&self) -> CairoRenderStats {
        self.last_stats
    }

    /// Persists the rendered surface as a PNG file.
    ///
    /// Returns only after the file is fully written; an unwritable path is a
    /// render error.
    pub fn write_png(&self, path: &Path) -> VizResult<()> {
        let mut file = File::create(path).map_err(|err| {
            VizError::Render(format!(
                "output path `{}` is not writable: {err}",
                path.display()
            ))
        })?;
        self.surface
            .write_to_png(&mut file)
            .map_err(|err| VizError::Render(format!("failed to encode png: {err}")))?;
        tracing::info!(path = %path.display(), "image written");
        Ok(())
    }

    fn draw_text(&self, context: &Context, text: &TextPrimitive) -> VizResult<()> {
        let layout = pangocairo::functions::create_layout(context);
        let font_description =
            FontDescription::from_string(&format!("{} {}", text.font_family, text.font_size_px));
        layout.set_font_description(Some(&font_description));
        layout.set_text(&text.text);

        context
            .save()
            .map_err(|err| map_backend_error("failed to save cairo state", err))?;
        context.translate(text.x, text.y);
        if text.rotation_degrees != 0.0 {
            context.rotate(-text.rotation_degrees.to_radians());
        }

        let (text_width, _text_height) = layout.pixel_size();
        let dx = match text.h_align {
            TextHAlign::Left => 0.0,
            TextHAlign::Center => -f64::from(text_width) / 2.0,
            TextHAlign::Right => -f64::from(text_width),
        };

        apply_color(context, text.color);
        context.move_to(dx, 0.0);
        pangocairo::functions::show_layout(context, &layout);
        context
            .restore()
            .map_err(|err| map_backend_error("failed to restore cairo state", err))?;
        Ok(())
    }
}

impl Renderer for CairoRenderer {
    fn render(&mut self, frame: &RenderFrame) -> VizResult<()> {
        frame.validate()?;
        self.clear_color.validate()?;

        let context = Context::new(&self.surface)
            .map_err(|err| map_backend_error("failed to create cairo context", err))?;
        context.scale(self.scale, self.scale);

        apply_color(&context, self.clear_color);
        context
            .paint()
            .map_err(|err| map_backend_error("failed to clear surface", err))?;

        let mut stats = CairoRenderStats::default();

        for line in &frame.lines {
            apply_color(&context, line.color);
            context.set_line_width(line.stroke_width);
            context.move_to(line.x1, line.y1);
            context.line_to(line.x2, line.y2);
            context
                .stroke()
                .map_err(|err| map_backend_error("failed to stroke line", err))?;
            stats.lines_drawn += 1;
        }

        for rect in &frame.rects {
            context.rectangle(rect.x, rect.y, rect.width, rect.height);
            apply_color(&context, rect.fill_color);
            context
                .fill()
                .map_err(|err| map_backend_error("failed to fill rectangle", err))?;
            stats.rects_drawn += 1;
        }

        for text in &frame.texts {
            self.draw_text(&context, text)?;
            stats.texts_drawn += 1;
        }

        self.last_stats = stats;
        Ok(())
    }
}

impl TextMeasurer for CairoRenderer {
    fn measure(&self, text: &str, font_family: &str, font_size_px: f64) -> VizResult<(f64, f64)> {
        if !font_size_px.is_finite() || font_size_px <= 0.0 {
            return Err(VizError::InvalidInput(
                "font size must be finite and > 0".to_owned(),
            ));
        }

        let context = Context::new(&self.surface)
            .map_err(|err| map_backend_error("failed to create cairo context", err))?;
        let layout = pangocairo::functions::create_layout(&context);
        let font_description =
            FontDescription::from_string(&format!("{font_family} {font_size_px}"));
        layout.set_font_description(Some(&font_description));
        layout.set_text(text);

        let (width, height) = layout.pixel_size();
        Ok((f64::from(width), f64::from(height)))
    }
}

/// Generic fontconfig aliases that always resolve, yet do not appear as
/// concrete families in the font map.
const GENERIC_FAMILIES: &[&str] = &["sans", "sans-serif", "serif", "monospace", "system-ui"];

/// Checks `family` against the Pango font map.
///
/// A missing family is a resource error; callers should surface it instead of
/// letting Pango silently substitute glyphs.
pub fn validate_font_family(family: &str) -> VizResult<()> {
    if family.is_empty() {
        return Err(VizError::resource(family, "font family must not be empty"));
    }
    if GENERIC_FAMILIES.contains(&family.to_ascii_lowercase().as_str()) {
        return Ok(());
    }

    let font_map = pangocairo::FontMap::default();
    let known = font_map
        .list_families()
        .iter()
        .any(|candidate| candidate.name().eq_ignore_ascii_case(family));
    if known {
        Ok(())
    } else {
        Err(VizError::resource(
            family,
            "font family not found in the pango font map",
        ))
    }
}

fn apply_color(context: &Context, color: Color) {
    context.set_source_rgba(color.red, color.green, color.blue, color.alpha);
}

fn map_backend_error(prefix: &str, err: cairo::Error) -> VizError {
    VizError::Render(format!("{prefix}: {err}"))
}
