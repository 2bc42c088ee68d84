//! Raster drawing primitives and PNG encoding.
//!
//! Coordinates are signed so callers can pass shapes that hang off the
//! canvas; everything is clipped to the image bounds.

use std::io::Cursor;

use image::{ImageFormat, Rgb, RgbImage};

use appmon_core::error::{AppMonError, Result};

use crate::font;

pub type Color = Rgb<u8>;

pub const WHITE: Color = Rgb([255, 255, 255]);
pub const BLACK: Color = Rgb([0, 0, 0]);
pub const AXIS: Color = Rgb([64, 64, 64]);
pub const GRID: Color = Rgb([221, 221, 221]);

pub struct Canvas {
    img: RgbImage,
}

impl Canvas {
    pub fn new(width: u32, height: u32, background: Color) -> Self {
        Self {
            img: RgbImage::from_pixel(width, height, background),
        }
    }

    pub fn width(&self) -> u32 {
        self.img.width()
    }

    pub fn height(&self) -> u32 {
        self.img.height()
    }

    pub fn fill_rect(&mut self, x: i64, y: i64, w: i64, h: i64, color: Color) {
        let x0 = x.max(0);
        let y0 = y.max(0);
        let x1 = (x + w).min(i64::from(self.width()));
        let y1 = (y + h).min(i64::from(self.height()));
        for py in y0..y1 {
            for px in x0..x1 {
                self.img.put_pixel(px as u32, py as u32, color);
            }
        }
    }

    pub fn hline(&mut self, x0: i64, x1: i64, y: i64, color: Color) {
        let (a, b) = if x0 <= x1 { (x0, x1) } else { (x1, x0) };
        self.fill_rect(a, y, b - a + 1, 1, color);
    }

    pub fn vline(&mut self, x: i64, y0: i64, y1: i64, color: Color) {
        let (a, b) = if y0 <= y1 { (y0, y1) } else { (y1, y0) };
        self.fill_rect(x, a, 1, b - a + 1, color);
    }

    /// Draw `text` with its top-left corner at (`x`, `y`).
    pub fn draw_text(&mut self, x: i64, y: i64, text: &str, scale: u32, color: Color) {
        let s = i64::from(scale.max(1));
        let mut cursor = x;
        for c in text.chars() {
            let rows = font::glyph(c);
            for (row, bits) in rows.iter().enumerate() {
                for col in 0..font::GLYPH_W {
                    if bits & (1 << (font::GLYPH_W - 1 - col)) != 0 {
                        self.fill_rect(
                            cursor + i64::from(col) * s,
                            y + row as i64 * s,
                            s,
                            s,
                            color,
                        );
                    }
                }
            }
            cursor += i64::from(font::ADVANCE) * s;
        }
    }

    /// Draw `text` horizontally centered on `cx`.
    pub fn draw_text_centered(&mut self, cx: i64, y: i64, text: &str, scale: u32, color: Color) {
        let w = i64::from(font::text_width(text, scale.max(1)));
        self.draw_text(cx - w / 2, y, text, scale, color);
    }

    pub fn encode_png(&self) -> Result<Vec<u8>> {
        let mut buf = Vec::new();
        self.img
            .write_to(&mut Cursor::new(&mut buf), ImageFormat::Png)
            .map_err(|e| AppMonError::Render(format!("png encode: {e}")))?;
        Ok(buf)
    }
}
