//! [`ImageCanvas`] – an owned RGB24 frame that detections draw onto.
//!
//! Pixels are row-major `[RGB, RGB, ...]`, length `width * height * 3`.
//! Rectangle drawing mutates the buffer in place; overlay text is kept as
//! positioned [`TextAnnotation`]s for the display layer to rasterize with
//! whatever font it has.  Neither operation is internally synchronized.

use tracing::trace;

use crate::color::Color;

/// Border thickness of drawn rectangles, in pixels.
const RECT_THICKNESS: usize = 2;

/// A short string anchored at a pixel position, rendered near a detection
/// for human inspection.
#[derive(Debug, Clone, PartialEq)]
pub struct TextAnnotation {
    pub x: i32,
    pub y: i32,
    pub text: String,
    pub color: Color,
}

/// A mutable RGB24 pixel buffer plus its pending text annotations.
#[derive(Debug, Clone)]
pub struct ImageCanvas {
    width: usize,
    height: usize,
    pixels: Vec<u8>,
    annotations: Vec<TextAnnotation>,
}

impl ImageCanvas {
    /// Create an all-black canvas of the given dimensions.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec![0u8; width * height * 3],
            annotations: Vec::new(),
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Raw pixel storage, row-major RGB24.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Annotations accumulated so far, in draw order.
    pub fn annotations(&self) -> &[TextAnnotation] {
        &self.annotations
    }

    /// Read back one pixel; `None` outside the canvas.
    pub fn pixel(&self, x: usize, y: usize) -> Option<Color> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = (y * self.width + x) * 3;
        Some(Color::new(
            self.pixels[idx],
            self.pixels[idx + 1],
            self.pixels[idx + 2],
        ))
    }

    /// Draw a 2-px-thick rectangle border with corners `(x1, y1)`–`(x2, y2)`,
    /// clamped to the canvas bounds.  Degenerate canvases are a no-op.
    pub fn draw_rect(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, color: Color) {
        if self.width == 0 || self.height == 0 {
            return;
        }
        trace!(x1, y1, x2, y2, "drawing rectangle");

        let rgb = color.as_bytes();
        let x1 = x1.clamp(0, (self.width - 1) as i32) as usize;
        let y1 = y1.clamp(0, (self.height - 1) as i32) as usize;
        let x2 = x2.clamp(0, (self.width - 1) as i32) as usize;
        let y2 = y2.clamp(0, (self.height - 1) as i32) as usize;
        let (x1, x2) = (x1.min(x2), x1.max(x2));
        let (y1, y2) = (y1.min(y2), y1.max(y2));

        // Top and bottom edges.
        for x in x1..=x2 {
            for t in 0..RECT_THICKNESS {
                self.set_pixel(x, y1 + t, rgb);
                self.set_pixel(x, y2.saturating_sub(t), rgb);
            }
        }
        // Left and right edges.
        for y in y1..=y2 {
            for t in 0..RECT_THICKNESS {
                self.set_pixel(x1 + t, y, rgb);
                self.set_pixel(x2.saturating_sub(t), y, rgb);
            }
        }
    }

    /// Queue overlay text anchored at `(x, y)`.
    pub fn annotate_text(&mut self, x: i32, y: i32, text: impl Into<String>, color: Color) {
        self.annotations.push(TextAnnotation {
            x,
            y,
            text: text.into(),
            color,
        });
    }

    fn set_pixel(&mut self, x: usize, y: usize, rgb: [u8; 3]) {
        if x >= self.width || y >= self.height {
            return;
        }
        let idx = (y * self.width + x) * 3;
        self.pixels[idx] = rgb[0];
        self.pixels[idx + 1] = rgb[1];
        self.pixels[idx + 2] = rgb[2];
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_canvas_is_black() {
        let canvas = ImageCanvas::new(4, 4);
        assert_eq!(canvas.pixels().len(), 4 * 4 * 3);
        assert_eq!(canvas.pixel(0, 0), Some(Color::BLACK));
        assert_eq!(canvas.pixel(3, 3), Some(Color::BLACK));
        assert_eq!(canvas.pixel(4, 0), None);
    }

    #[test]
    fn draw_rect_paints_corners_not_center() {
        let mut canvas = ImageCanvas::new(20, 20);
        canvas.draw_rect(2, 2, 15, 15, Color::RED);
        assert_eq!(canvas.pixel(2, 2), Some(Color::RED));
        assert_eq!(canvas.pixel(15, 15), Some(Color::RED));
        // Interior stays untouched.
        assert_eq!(canvas.pixel(8, 8), Some(Color::BLACK));
    }

    #[test]
    fn draw_rect_clamps_out_of_bounds_corners() {
        let mut canvas = ImageCanvas::new(10, 10);
        canvas.draw_rect(-5, -5, 50, 50, Color::GREEN);
        assert_eq!(canvas.pixel(0, 0), Some(Color::GREEN));
        assert_eq!(canvas.pixel(9, 9), Some(Color::GREEN));
    }

    #[test]
    fn annotations_keep_draw_order() {
        let mut canvas = ImageCanvas::new(10, 10);
        canvas.annotate_text(1, 1, "30 speed limit 1.0", Color::AMBER);
        canvas.annotate_text(2, 2, "60 speed limit 0.9", Color::AMBER);
        let notes = canvas.annotations();
        assert_eq!(notes.len(), 2);
        assert_eq!(notes[0].text, "30 speed limit 1.0");
        assert_eq!(notes[1].x, 2);
    }
}
