//! Rasterization of line segments onto opaque RGB canvases.
//!
//! Lines are composited strictly in the order they are drawn, using src-over blending:
//! `out = src * a + dst * (1 - a)`, `a = alpha / 255`, rounded to the nearest integer.
//! A fully opaque line replaces the pixels it covers; a fully transparent one leaves them
//! untouched.

use {
  crate::geometry::{Axis, Line, PixelSpace},
  euclid::Size2D,
  image::{Pixel, Rgb, Rgba, RgbImage}
};


pub trait Draw<Backend> {
  fn draw(&self, image: &mut Backend);
}

/// A line pinned to a particular scan-line of a canvas.
#[derive(Debug, Copy, Clone)]
pub struct Placement<'a> {
  pub line: &'a Line,
  pub axis: Axis,
  pub scan_index: u32
}

impl Line {
  pub fn place(&self, axis: Axis, scan_index: u32) -> Placement<'_> {
    Placement { line: self, axis, scan_index }
  }
}

impl Draw<RgbImage> for Placement<'_> {
  fn draw(&self, image: &mut RgbImage) {
    let (width, height) = image.dimensions();
    self.line.span()
      .map(|coord| self.axis.to_pixel(coord, self.scan_index))
      .take_while(|pixel| pixel.x < width && pixel.y < height)
      .for_each(|pixel| {
        let pixel = image.get_pixel_mut(pixel.x, pixel.y);
        *pixel = blend_over(*pixel, self.line.color);
      });
  }
}

/// Opaque canvas filled with `background`.
pub fn canvas(size: Size2D<u32, PixelSpace>, background: Rgb<u8>) -> RgbImage {
  RgbImage::from_pixel(size.width, size.height, background)
}

/// src-over blending of a straight-alpha color onto an opaque pixel.
pub fn blend_over(dst: Rgb<u8>, src: Rgba<u8>) -> Rgb<u8> {
  let alpha = src.0[3] as f64 / 255.0;
  dst.map2(&src.to_rgb(), |d, s| {
    (s as f64 * alpha + d as f64 * (1.0 - alpha)).round() as u8
  })
}
