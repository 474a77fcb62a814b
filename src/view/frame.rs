//! Frame abstraction for drawing primitives
//!
//! Provides a simple, safe API for pixel buffer operations instead of
//! direct buffer indexing scattered throughout rendering code.

use fontdue::Font;

use crate::geometry::Rect;

use super::GlyphCache;

/// Blend a foreground color onto a background color using alpha compositing.
///
/// Both colors are in ARGB format (0xAARRGGBB). The alpha value determines
/// the blend ratio. Returns the blended color with full opacity.
#[inline]
pub fn blend_colors(bg: u32, fg: u32, alpha: f32) -> u32 {
    let bg_r = ((bg >> 16) & 0xFF) as f32;
    let bg_g = ((bg >> 8) & 0xFF) as f32;
    let bg_b = (bg & 0xFF) as f32;

    let fg_r = ((fg >> 16) & 0xFF) as f32;
    let fg_g = ((fg >> 8) & 0xFF) as f32;
    let fg_b = (fg & 0xFF) as f32;

    let final_r = (bg_r * (1.0 - alpha) + fg_r * alpha) as u32;
    let final_g = (bg_g * (1.0 - alpha) + fg_g * alpha) as u32;
    let final_b = (bg_b * (1.0 - alpha) + fg_b * alpha) as u32;

    0xFF000000 | (final_r << 16) | (final_g << 8) | final_b
}

/// Clipping rectangle in pixel coordinates (inclusive start, exclusive end).
#[derive(Clone, Copy, Debug)]
struct ClipRect {
    x0: usize,
    y0: usize,
    x1: usize,
    y1: usize,
}

/// A frame buffer wrapper providing safe drawing primitives.
///
/// All coordinates are in pixels. Out-of-bounds operations are safely
/// clipped.
pub struct Frame<'a> {
    buffer: &'a mut [u32],
    width: usize,
    height: usize,
    clip: Option<ClipRect>,
}

impl<'a> Frame<'a> {
    /// Create a new frame from a mutable pixel buffer
    ///
    /// If the buffer is smaller than width*height, dimensions are adjusted
    /// to match the actual buffer size to prevent out-of-bounds access.
    pub fn new(buffer: &'a mut [u32], width: usize, height: usize) -> Self {
        let expected_size = width * height;
        let actual_size = buffer.len();

        let (width, height) = if actual_size < expected_size && width > 0 {
            (width, actual_size / width)
        } else {
            (width, height)
        };

        Self {
            buffer,
            width,
            height,
            clip: None,
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Set a clipping rectangle. All subsequent drawing operations are
    /// constrained to this region.
    pub fn set_clip(&mut self, rect: Rect) {
        let x0 = (rect.x.max(0.0) as usize).min(self.width);
        let y0 = (rect.y.max(0.0) as usize).min(self.height);
        let x1 = ((rect.x + rect.width).max(0.0) as usize).min(self.width);
        let y1 = ((rect.y + rect.height).max(0.0) as usize).min(self.height);
        self.clip = Some(ClipRect { x0, y0, x1, y1 });
    }

    /// Remove the clipping rectangle, restoring full-frame drawing.
    pub fn clear_clip(&mut self) {
        self.clip = None;
    }

    #[inline]
    fn max_x(&self) -> usize {
        self.clip.map_or(self.width, |c| c.x1)
    }

    #[inline]
    fn max_y(&self) -> usize {
        self.clip.map_or(self.height, |c| c.y1)
    }

    #[inline]
    fn min_x(&self) -> usize {
        self.clip.map_or(0, |c| c.x0)
    }

    #[inline]
    fn min_y(&self) -> usize {
        self.clip.map_or(0, |c| c.y0)
    }

    /// Clear the entire buffer with a solid color
    #[inline]
    pub fn clear(&mut self, color: u32) {
        self.buffer.fill(color);
    }

    /// Fill a rectangle with a solid color (no alpha blending)
    pub fn fill_rect(&mut self, rect: Rect, color: u32) {
        let x0 = (rect.x.max(0.0) as usize).min(self.width).max(self.min_x());
        let y0 = (rect.y.max(0.0) as usize).min(self.height).max(self.min_y());
        let x1 = ((rect.x + rect.width).max(0.0) as usize).min(self.max_x());
        let y1 = ((rect.y + rect.height).max(0.0) as usize).min(self.max_y());

        for y in y0..y1 {
            let row_start = y * self.width;
            for x in x0..x1 {
                self.buffer[row_start + x] = color;
            }
        }
    }

    /// Blend a single pixel, honoring the color's alpha channel
    #[inline]
    pub fn blend_pixel(&mut self, x: usize, y: usize, color: u32) {
        if x < self.min_x() || x >= self.max_x() || y < self.min_y() || y >= self.max_y() {
            return;
        }
        let alpha = ((color >> 24) & 0xFF) as f32 / 255.0;
        let idx = y * self.width + x;
        if alpha >= 1.0 {
            self.buffer[idx] = color | 0xFF000000;
            return;
        }
        self.buffer[idx] = blend_colors(self.buffer[idx], color, alpha);
    }

    /// Fill a rectangle with alpha blending (color is ARGB format)
    pub fn fill_rect_blended(&mut self, rect: Rect, color: u32) {
        let alpha = ((color >> 24) & 0xFF) as f32 / 255.0;
        if alpha <= 0.0 {
            return;
        }
        if alpha >= 1.0 {
            return self.fill_rect(rect, color | 0xFF000000);
        }

        let x0 = (rect.x.max(0.0) as usize).min(self.width).max(self.min_x());
        let y0 = (rect.y.max(0.0) as usize).min(self.height).max(self.min_y());
        let x1 = ((rect.x + rect.width).max(0.0) as usize).min(self.max_x());
        let y1 = ((rect.y + rect.height).max(0.0) as usize).min(self.max_y());

        for y in y0..y1 {
            let row_start = y * self.width;
            for x in x0..x1 {
                let idx = row_start + x;
                self.buffer[idx] = blend_colors(self.buffer[idx], color, alpha);
            }
        }
    }

    /// Draw a rectangle with a 1px border
    pub fn draw_bordered_rect(&mut self, rect: Rect, fill_color: u32, border_color: u32) {
        let alpha = (fill_color >> 24) & 0xFF;
        if alpha == 0xFF {
            self.fill_rect(rect, fill_color);
        } else {
            self.fill_rect_blended(rect, fill_color);
        }

        let opaque_border = border_color | 0xFF000000;
        self.fill_rect(Rect::new(rect.x, rect.y, rect.width, 1.0), opaque_border);
        self.fill_rect(
            Rect::new(rect.x, rect.y + rect.height - 1.0, rect.width, 1.0),
            opaque_border,
        );
        self.fill_rect(Rect::new(rect.x, rect.y, 1.0, rect.height), opaque_border);
        self.fill_rect(
            Rect::new(rect.x + rect.width - 1.0, rect.y, 1.0, rect.height),
            opaque_border,
        );
    }

    /// Dim the entire frame with a semi-transparent overlay.
    /// Used for modal backgrounds.
    pub fn dim(&mut self, alpha: u8) {
        let dim_color = (alpha as u32) << 24; // Black with given alpha
        for y in 0..self.height {
            for x in 0..self.width {
                self.blend_pixel(x, y, dim_color);
            }
        }
    }
}

/// Text rendering context wrapping font and glyph cache.
///
/// Provides methods for drawing text with proper font metrics and glyph
/// caching.
pub struct TextPainter<'a> {
    font: &'a Font,
    glyph_cache: &'a mut GlyphCache,
    font_size: f32,
    ascent: f32,
    char_width: f32,
    line_height: usize,
}

impl<'a> TextPainter<'a> {
    pub fn new(
        font: &'a Font,
        glyph_cache: &'a mut GlyphCache,
        font_size: f32,
        ascent: f32,
        char_width: f32,
        line_height: usize,
    ) -> Self {
        Self {
            font,
            glyph_cache,
            font_size,
            ascent,
            char_width,
            line_height,
        }
    }

    /// Get the character width for monospace layout calculations
    #[inline]
    pub fn char_width(&self) -> f32 {
        self.char_width
    }

    /// Get the line height in pixels
    #[inline]
    pub fn line_height(&self) -> usize {
        self.line_height
    }

    /// Draw text at the specified position (top-left of the line box)
    pub fn draw(&mut self, frame: &mut Frame, x: usize, y: usize, text: &str, color: u32) {
        let mut current_x = x as f32;
        let baseline = y as f32 + self.ascent;

        for ch in text.chars() {
            let key = (ch, self.font_size.to_bits());
            let (metrics, bitmap) = self
                .glyph_cache
                .entry(key)
                .or_insert_with(|| self.font.rasterize(ch, self.font_size));

            let glyph_top = baseline - metrics.height as f32 - metrics.ymin as f32;

            for bitmap_y in 0..metrics.height {
                for bitmap_x in 0..metrics.width {
                    let bitmap_idx = bitmap_y * metrics.width + bitmap_x;
                    if bitmap_idx < bitmap.len() {
                        let alpha = bitmap[bitmap_idx];
                        if alpha > 0 {
                            let px = current_x as isize + bitmap_x as isize + metrics.xmin as isize;
                            let py = (glyph_top + bitmap_y as f32) as isize;

                            if px >= 0 && py >= 0 {
                                let px = px as usize;
                                let py = py as usize;
                                let color = color & 0x00FFFFFF
                                    | (((alpha as u32) & 0xFF) << 24);
                                frame.blend_pixel(px, py, color);
                            }
                        }
                    }
                }
            }

            current_x += metrics.advance_width;
        }
    }

    /// Draw text clipped and ellipsized to a maximum pixel width
    pub fn draw_clipped(
        &mut self,
        frame: &mut Frame,
        x: usize,
        y: usize,
        text: &str,
        color: u32,
        max_width: f32,
    ) {
        let max_chars = (max_width / self.char_width).max(0.0) as usize;
        if text.chars().count() <= max_chars {
            self.draw(frame, x, y, text, color);
        } else {
            let truncated: String = text.chars().take(max_chars.saturating_sub(1)).collect();
            self.draw(frame, x, y, &format!("{}…", truncated), color);
        }
    }

    /// Measure text width in pixels
    pub fn measure_width(&self, text: &str) -> f32 {
        text.chars().count() as f32 * self.char_width
    }
}
