//! Drawing surface for the figures: an `RgbImage` plus the embedded label
//! font, with `imageproc` doing the rasterization.

use ab_glyph::{FontRef, PxScale};
use image::imageops;
use image::{Rgb, RgbImage};
use imageproc::drawing::{
    draw_filled_circle_mut, draw_filled_rect_mut, draw_line_segment_mut, draw_text_mut, text_size,
};
use imageproc::rect::Rect;

use crate::error::Result;

// Embedded font data
const FONT_DATA: &[u8] = include_bytes!("../../assets/fonts/DejaVuSans.ttf");

pub(crate) fn label_font() -> Result<FontRef<'static>> {
    Ok(FontRef::try_from_slice(FONT_DATA)?)
}

pub(crate) struct Canvas {
    image: RgbImage,
    font: FontRef<'static>,
    background: Rgb<u8>,
}

impl Canvas {
    pub fn new(width: u32, height: u32, background: Rgb<u8>) -> Result<Self> {
        Ok(Self {
            image: RgbImage::from_pixel(width, height, background),
            font: label_font()?,
            background,
        })
    }

    pub fn fill_rect(&mut self, x: i32, y: i32, w: u32, h: u32, color: Rgb<u8>) {
        if w > 0 && h > 0 {
            draw_filled_rect_mut(&mut self.image, Rect::at(x, y).of_size(w, h), color);
        }
    }

    /// Segment `width` pixels thick with round joints
    fn thick_segment(&mut self, from: (f64, f64), to: (f64, f64), width: f64, color: Rgb<u8>) {
        let r = (width / 2.0).max(0.0);
        let (dx, dy) = (to.0 - from.0, to.1 - from.1);
        let len = (dx * dx + dy * dy).sqrt();
        if len > 0.0 {
            let (nx, ny) = (-dy / len, dx / len);
            let mut o = -r;
            while o <= r {
                let a = ((from.0 + nx * o) as f32, (from.1 + ny * o) as f32);
                let b = ((to.0 + nx * o) as f32, (to.1 + ny * o) as f32);
                draw_line_segment_mut(&mut self.image, a, b, color);
                o += 0.5;
            }
        }
        let joint = (to.0.round() as i32, to.1.round() as i32);
        draw_filled_circle_mut(&mut self.image, joint, r.floor() as i32, color);
    }

    /// Connected line through pixel positions; non-finite points break the line
    pub fn draw_polyline<I>(&mut self, points: I, width: f64, color: Rgb<u8>)
    where
        I: IntoIterator<Item = (f64, f64)>,
    {
        let mut prev: Option<(f64, f64)> = None;
        for p in points {
            if !(p.0.is_finite() && p.1.is_finite()) {
                prev = None;
                continue;
            }
            self.thick_segment(prev.unwrap_or(p), p, width, color);
            prev = Some(p);
        }
    }

    /// Pixel size of `text` at `size` px
    pub fn text_size(&self, text: &str, size: f32) -> (u32, u32) {
        text_size(PxScale::from(size), &self.font, text)
    }

    /// Horizontal text with its top-left corner at (x, y)
    pub fn draw_text(&mut self, x: i32, y: i32, text: &str, size: f32, color: Rgb<u8>) {
        draw_text_mut(&mut self.image, color, x, y, PxScale::from(size), &self.font, text);
    }

    /// Text reading bottom-to-top with its bottom-left corner at (x, y)
    pub fn draw_text_up(&mut self, x: i32, y: i32, text: &str, size: f32, color: Rgb<u8>) {
        let (w, h) = self.text_size(text, size);
        if w == 0 || h == 0 {
            return;
        }
        let mut strip = RgbImage::from_pixel(w + 2, h + 4, self.background);
        draw_text_mut(&mut strip, color, 1, 0, PxScale::from(size), &self.font, text);
        let rotated = imageops::rotate270(&strip);
        imageops::replace(
            &mut self.image,
            &rotated,
            x as i64,
            y as i64 - rotated.height() as i64,
        );
    }

    pub fn into_image(self) -> RgbImage {
        self.image
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WHITE: Rgb<u8> = Rgb([255, 255, 255]);
    const BLACK: Rgb<u8> = Rgb([0, 0, 0]);

    fn inked(img: &RgbImage) -> Vec<(u32, u32)> {
        img.enumerate_pixels()
            .filter(|(_, _, p)| **p != WHITE)
            .map(|(x, y, _)| (x, y))
            .collect()
    }

    #[test]
    fn test_font_loads() {
        assert!(label_font().is_ok());
    }

    #[test]
    fn test_fill_rect_clips() {
        let mut c = Canvas::new(4, 4, WHITE).unwrap();
        c.fill_rect(2, 2, 10, 10, BLACK);
        c.fill_rect(0, 0, 0, 3, BLACK);
        let img = c.into_image();
        assert_eq!(inked(&img).len(), 4);
        assert_eq!(*img.get_pixel(3, 3), BLACK);
    }

    #[test]
    fn test_line_thickness() {
        let mut c = Canvas::new(50, 50, WHITE).unwrap();
        c.draw_polyline(vec![(5.0, 25.0), (45.0, 25.0)], 4.0, BLACK);
        let img = c.into_image();
        for y in 24..=26 {
            assert_eq!(*img.get_pixel(25, y), BLACK, "row {}", y);
        }
        assert_eq!(*img.get_pixel(25, 20), WHITE);
        assert_eq!(*img.get_pixel(25, 30), WHITE);
    }

    #[test]
    fn test_polyline_breaks_on_nan() {
        let mut c = Canvas::new(40, 10, WHITE).unwrap();
        c.draw_polyline(
            vec![(2.0, 5.0), (10.0, 5.0), (f64::NAN, 5.0), (30.0, 5.0), (38.0, 5.0)],
            1.0,
            BLACK,
        );
        let img = c.into_image();
        assert_eq!(*img.get_pixel(6, 5), BLACK);
        assert_eq!(*img.get_pixel(20, 5), WHITE);
        assert_eq!(*img.get_pixel(34, 5), BLACK);
    }

    #[test]
    fn test_text_orientation() {
        let mut flat = Canvas::new(200, 200, WHITE).unwrap();
        flat.draw_text(10, 10, "voltage", 18.0, BLACK);
        let flat = inked(&flat.into_image());
        let flat_w = flat.iter().map(|p| p.0).max().unwrap() - flat.iter().map(|p| p.0).min().unwrap();
        let flat_h = flat.iter().map(|p| p.1).max().unwrap() - flat.iter().map(|p| p.1).min().unwrap();
        assert!(flat_w > flat_h);

        let mut up = Canvas::new(200, 200, WHITE).unwrap();
        up.draw_text_up(10, 190, "voltage", 18.0, BLACK);
        let up = inked(&up.into_image());
        let up_w = up.iter().map(|p| p.0).max().unwrap() - up.iter().map(|p| p.0).min().unwrap();
        let up_h = up.iter().map(|p| p.1).max().unwrap() - up.iter().map(|p| p.1).min().unwrap();
        assert!(up_h > up_w);
        assert!(up.iter().all(|p| p.1 <= 190));
    }
}
