//! Frame abstraction for drawing primitives
//!
//! Provides a simple, safe API for pixel buffer operations instead of
//! direct buffer indexing scattered throughout rendering code. Shapes are
//! anti-aliased by pixel coverage against the ideal outline.

use std::ops::Range;

use fontdue::Font;

use crate::draw::{DrawCmd, TextAnchor};
use crate::geometry::{Point, RadialGradient, Rect};

use super::GlyphCache;

/// Blend a foreground color onto a background color using alpha compositing.
///
/// Both colors are in ARGB format (0xAARRGGBB).
///
/// Returns the blended color with full opacity (alpha = 0xFF).
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

/// Fraction of a pixel covered by a shape edge `signed_distance` pixels
/// inside the outline.
#[inline]
fn coverage(signed_distance: f32) -> f32 {
    (signed_distance + 0.5).clamp(0.0, 1.0)
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
/// All coordinates are in pixels. Out-of-bounds operations are safely clipped.
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
            // Buffer is smaller than expected - recalculate height to fit
            let adjusted_height = actual_size / width;
            (width, adjusted_height)
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

    /// Get the frame width in pixels
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Get the frame height in pixels
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Set a clipping rectangle. All subsequent drawing operations will be
    /// constrained to this region.
    pub fn set_clip(&mut self, rect: Rect) {
        let x0 = (rect.x.max(0.0) as usize).min(self.width);
        let y0 = (rect.y.max(0.0) as usize).min(self.height);
        let x1 = (rect.right().max(0.0) as usize).min(self.width);
        let y1 = (rect.bottom().max(0.0) as usize).min(self.height);
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

    /// Pixel columns touched by `[lo, hi)`, clipped
    fn columns(&self, lo: f32, hi: f32) -> Range<usize> {
        let start = (lo.floor().max(0.0) as usize).max(self.min_x());
        let end = (hi.ceil().max(0.0) as usize).min(self.max_x());
        start..end.max(start)
    }

    /// Pixel rows touched by `[lo, hi)`, clipped
    fn rows(&self, lo: f32, hi: f32) -> Range<usize> {
        let start = (lo.floor().max(0.0) as usize).max(self.min_y());
        let end = (hi.ceil().max(0.0) as usize).min(self.max_y());
        start..end.max(start)
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
        let x1 = (rect.right().max(0.0) as usize).min(self.max_x());
        let y1 = (rect.bottom().max(0.0) as usize).min(self.max_y());

        for y in y0..y1 {
            let row_start = y * self.width;
            for x in x0..x1 {
                self.buffer[row_start + x] = color;
            }
        }
    }

    /// Outline a rectangle; the border is drawn inside `rect`
    pub fn stroke_rect(&mut self, rect: Rect, width: f32, color: u32) {
        let w = width.max(1.0).min(rect.width / 2.0).min(rect.height / 2.0);
        if w <= 0.0 {
            return;
        }
        // Top, bottom, left, right
        self.fill_rect(Rect::new(rect.x, rect.y, rect.width, w), color);
        self.fill_rect(Rect::new(rect.x, rect.bottom() - w, rect.width, w), color);
        self.fill_rect(Rect::new(rect.x, rect.y, w, rect.height), color);
        self.fill_rect(Rect::new(rect.right() - w, rect.y, w, rect.height), color);
    }

    /// Get a single pixel (bounds-checked, returns 0 if out of bounds)
    #[inline]
    pub fn get_pixel(&self, x: usize, y: usize) -> u32 {
        if x < self.width && y < self.height {
            self.buffer[y * self.width + x]
        } else {
            0
        }
    }

    /// Blend `color` into a pixel with the given opacity (respects clip rect)
    #[inline]
    pub fn blend_pixel(&mut self, x: usize, y: usize, color: u32, alpha: f32) {
        if x < self.min_x() || x >= self.max_x() || y < self.min_y() || y >= self.max_y() {
            return;
        }
        if alpha <= 0.0 {
            return;
        }
        let idx = y * self.width + x;
        self.buffer[idx] = if alpha >= 1.0 {
            color | 0xFF000000
        } else {
            blend_colors(self.buffer[idx], color, alpha)
        };
    }

    /// Fill a disc
    pub fn fill_circle(&mut self, center: Point, radius: f32, color: u32) {
        if radius <= 0.0 {
            return;
        }
        let reach = radius + 1.0;
        for y in self.rows(center.y - reach, center.y + reach) {
            for x in self.columns(center.x - reach, center.x + reach) {
                let d = Point::new(x as f32 + 0.5, y as f32 + 0.5).distance_to(center);
                self.blend_pixel(x, y, color, coverage(radius - d));
            }
        }
    }

    /// Draw a ring of `width` centered on `radius`
    pub fn stroke_circle(&mut self, center: Point, radius: f32, width: f32, color: u32) {
        if radius <= 0.0 || width <= 0.0 {
            return;
        }
        let half = width / 2.0;
        let reach = radius + half + 1.0;
        for y in self.rows(center.y - reach, center.y + reach) {
            for x in self.columns(center.x - reach, center.x + reach) {
                let d = Point::new(x as f32 + 0.5, y as f32 + 0.5).distance_to(center);
                self.blend_pixel(x, y, color, coverage(half - (d - radius).abs()));
            }
        }
    }

    /// Fill a disc whose color follows a radial gradient
    pub fn fill_radial_gradient(&mut self, gradient: &RadialGradient) {
        let RadialGradient { center, radius, .. } = *gradient;
        if radius <= 0.0 {
            return;
        }
        let reach = radius + 1.0;
        for y in self.rows(center.y - reach, center.y + reach) {
            for x in self.columns(center.x - reach, center.x + reach) {
                let d = Point::new(x as f32 + 0.5, y as f32 + 0.5).distance_to(center);
                let alpha = coverage(radius - d);
                if alpha > 0.0 {
                    let color = gradient.color_at(d.min(radius)).to_argb();
                    self.blend_pixel(x, y, color, alpha);
                }
            }
        }
    }

    /// Draw a thick segment with round caps
    pub fn draw_line(&mut self, from: Point, to: Point, width: f32, color: u32) {
        if width <= 0.0 {
            return;
        }
        let half = width / 2.0;
        let (dx, dy) = (to.x - from.x, to.y - from.y);
        let length_sq = dx * dx + dy * dy;
        let reach = half + 1.0;

        let rows = self.rows(from.y.min(to.y) - reach, from.y.max(to.y) + reach);
        let cols = self.columns(from.x.min(to.x) - reach, from.x.max(to.x) + reach);
        for y in rows {
            for x in cols.clone() {
                let p = Point::new(x as f32 + 0.5, y as f32 + 0.5);
                let t = if length_sq > 0.0 {
                    (((p.x - from.x) * dx + (p.y - from.y) * dy) / length_sq).clamp(0.0, 1.0)
                } else {
                    0.0
                };
                let nearest = Point::new(from.x + t * dx, from.y + t * dy);
                self.blend_pixel(x, y, color, coverage(half - p.distance_to(nearest)));
            }
        }
    }

    /// Play back one draw command
    pub fn execute(&mut self, painter: &mut TextPainter, cmd: &DrawCmd) {
        match cmd {
            DrawCmd::FillRect { rect, color } => self.fill_rect(*rect, *color),
            DrawCmd::StrokeRect { rect, width, color } => self.stroke_rect(*rect, *width, *color),
            DrawCmd::FillCircle {
                center,
                radius,
                color,
            } => self.fill_circle(*center, *radius, *color),
            DrawCmd::StrokeCircle {
                center,
                radius,
                width,
                color,
            } => self.stroke_circle(*center, *radius, *width, *color),
            DrawCmd::Gradient(gradient) => self.fill_radial_gradient(gradient),
            DrawCmd::Line {
                from,
                to,
                width,
                color,
            } => self.draw_line(*from, *to, *width, *color),
            DrawCmd::Text {
                position,
                anchor,
                text,
                size,
                color,
            } => painter.draw_anchored(self, *position, *anchor, text, *size, *color),
        }
    }
}

/// Statistics for glyph cache hit/miss tracking (debug only)
#[cfg(debug_assertions)]
#[derive(Debug, Default)]
pub struct CacheStats {
    pub hits: usize,
    pub misses: usize,
}

/// Text rendering context wrapping font and glyph cache.
///
/// Without a font every draw is skipped and widths are estimated.
pub struct TextPainter<'a> {
    font: Option<&'a Font>,
    glyph_cache: &'a mut GlyphCache,
    #[cfg(debug_assertions)]
    cache_stats: CacheStats,
}

impl<'a> TextPainter<'a> {
    pub fn new(font: Option<&'a Font>, glyph_cache: &'a mut GlyphCache) -> Self {
        Self {
            font,
            glyph_cache,
            #[cfg(debug_assertions)]
            cache_stats: CacheStats::default(),
        }
    }

    /// Get the cache statistics (hits and misses)
    #[cfg(debug_assertions)]
    #[inline]
    pub fn cache_stats(&self) -> &CacheStats {
        &self.cache_stats
    }

    /// Ascent and descent (descent is negative) for a font size
    pub fn line_metrics(&self, size: f32) -> (f32, f32) {
        self.font
            .and_then(|font| font.horizontal_line_metrics(size))
            .map(|m| (m.ascent, m.descent))
            .unwrap_or((size * 0.8, -size * 0.2))
    }

    /// Measure text width in pixels
    pub fn measure_width(&mut self, text: &str, size: f32) -> f32 {
        let Some(font) = self.font else {
            return text.chars().count() as f32 * size * 0.6;
        };
        let mut width = 0.0;
        for ch in text.chars() {
            let (metrics, _) = self
                .glyph_cache
                .entry((ch, size.to_bits()))
                .or_insert_with(|| font.rasterize(ch, size));
            width += metrics.advance_width;
        }
        width
    }

    /// Draw text relative to an anchor point
    pub fn draw_anchored(
        &mut self,
        frame: &mut Frame,
        position: Point,
        anchor: TextAnchor,
        text: &str,
        size: f32,
        color: u32,
    ) {
        let (ascent, descent) = self.line_metrics(size);
        let baseline = position.y + (ascent + descent) / 2.0;
        let x = match anchor {
            TextAnchor::Center => position.x - self.measure_width(text, size) / 2.0,
            TextAnchor::MidLeft => position.x,
        };
        self.draw(frame, x, baseline, text, size, color);
    }

    /// Draw text with its baseline starting at `(x, baseline)`
    pub fn draw(
        &mut self,
        frame: &mut Frame,
        x: f32,
        baseline: f32,
        text: &str,
        size: f32,
        color: u32,
    ) {
        let Some(font) = self.font else {
            return;
        };
        let mut current_x = x;

        for ch in text.chars() {
            let key = (ch, size.to_bits());

            // Track cache hit/miss before lookup
            #[cfg(debug_assertions)]
            if self.glyph_cache.contains_key(&key) {
                self.cache_stats.hits += 1;
            } else {
                self.cache_stats.misses += 1;
            }

            let (metrics, bitmap) = self
                .glyph_cache
                .entry(key)
                .or_insert_with(|| font.rasterize(ch, size));

            let glyph_top = baseline - metrics.height as f32 - metrics.ymin as f32;

            for bitmap_y in 0..metrics.height {
                for bitmap_x in 0..metrics.width {
                    let alpha = bitmap[bitmap_y * metrics.width + bitmap_x];
                    if alpha == 0 {
                        continue;
                    }
                    let px = current_x.round() as isize + bitmap_x as isize + metrics.xmin as isize;
                    let py = (glyph_top + bitmap_y as f32).round() as isize;
                    if px >= 0 && py >= 0 {
                        frame.blend_pixel(px as usize, py as usize, color, alpha as f32 / 255.0);
                    }
                }
            }

            current_x += metrics.advance_width;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_fill_rect() {
        let mut buffer = vec![0u32; 100 * 100];
        let mut frame = Frame::new(&mut buffer, 100, 100);

        frame.fill_rect(Rect::new(10.0, 10.0, 20.0, 20.0), 0xFFFF0000);

        assert_eq!(frame.get_pixel(15, 15), 0xFFFF0000);
        assert_eq!(frame.get_pixel(5, 5), 0);
    }

    #[test]
    fn test_frame_blend_pixel() {
        let mut buffer = vec![0xFFFFFFFF_u32; 10 * 10]; // White background
        let mut frame = Frame::new(&mut buffer, 10, 10);

        // Blend 50% black
        frame.blend_pixel(5, 5, 0xFF000000, 0.5);

        let result = frame.get_pixel(5, 5);
        let r = (result >> 16) & 0xFF;
        assert!((120..=135).contains(&r), "Expected ~127, got {}", r);
    }

    #[test]
    fn test_clip_limits_drawing() {
        let mut buffer = vec![0u32; 20 * 20];
        let mut frame = Frame::new(&mut buffer, 20, 20);
        frame.set_clip(Rect::new(0.0, 0.0, 10.0, 10.0));
        frame.fill_rect(Rect::new(0.0, 0.0, 20.0, 20.0), 0xFFFFFFFF);
        assert_eq!(frame.get_pixel(5, 5), 0xFFFFFFFF);
        assert_eq!(frame.get_pixel(15, 15), 0);
    }

    #[test]
    fn test_fill_circle_covers_center_only() {
        let mut buffer = vec![0u32; 40 * 40];
        let mut frame = Frame::new(&mut buffer, 40, 40);
        frame.fill_circle(Point::new(20.0, 20.0), 10.0, 0xFFFF0000);
        assert_eq!(frame.get_pixel(20, 20), 0xFFFF0000);
        assert_eq!(frame.get_pixel(1, 1), 0);
        // (30.5, 30.5) is ~14.8px from the center
        assert_eq!(frame.get_pixel(30, 30), 0);
    }

    #[test]
    fn test_stroke_circle_leaves_center_empty() {
        let mut buffer = vec![0u32; 40 * 40];
        let mut frame = Frame::new(&mut buffer, 40, 40);
        frame.stroke_circle(Point::new(20.0, 20.0), 10.0, 2.0, 0xFFFFFFFF);
        assert_eq!(frame.get_pixel(20, 20), 0);
        assert_eq!(frame.get_pixel(20, 10), 0xFFFFFFFF);
    }

    #[test]
    fn test_line_has_round_caps() {
        let mut buffer = vec![0u32; 40 * 40];
        let mut frame = Frame::new(&mut buffer, 40, 40);
        frame.draw_line(Point::new(10.5, 20.5), Point::new(30.5, 20.5), 4.0, 0xFFFFFFFF);
        assert_eq!(frame.get_pixel(20, 20), 0xFFFFFFFF);
        // Cap extends past the endpoint by half the width
        assert_eq!(frame.get_pixel(31, 20), 0xFFFFFFFF);
        assert_eq!(frame.get_pixel(20, 25), 0);
    }

    #[test]
    fn test_gradient_runs_from_center_to_edge() {
        use crate::geometry::Rgb;

        let mut buffer = vec![0u32; 60 * 60];
        let mut frame = Frame::new(&mut buffer, 60, 60);
        frame.fill_radial_gradient(&RadialGradient {
            center: Point::new(30.0, 30.0),
            radius: 25.0,
            center_color: Rgb::new(255, 255, 255),
            edge_color: Rgb::new(0, 0, 0),
        });
        let center = frame.get_pixel(30, 30) & 0xFF;
        let near_edge = frame.get_pixel(30, 52) & 0xFF;
        assert!(center > 240);
        assert!(near_edge < center);
        assert_eq!(frame.get_pixel(0, 0), 0);
    }

    #[test]
    fn test_text_without_font_is_skipped() {
        let mut cache = GlyphCache::default();
        let mut painter = TextPainter::new(None, &mut cache);
        let mut buffer = vec![0u32; 20 * 20];
        let mut frame = Frame::new(&mut buffer, 20, 20);
        painter.draw_anchored(
            &mut frame,
            Point::new(10.0, 10.0),
            TextAnchor::Center,
            "12",
            10.0,
            0xFFFFFFFF,
        );
        assert!(buffer.iter().all(|&p| p == 0));
        assert!((painter.measure_width("12", 10.0) - 12.0).abs() < 1e-3);
    }
}
