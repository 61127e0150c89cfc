//! Reading target scan-lines out of a source raster.

use {
  crate::{
    error::{Result, invalid_input},
    geometry::{self, Axis, PixelSpace}
  },
  euclid::Size2D,
  image::{DynamicImage, GenericImageView, Pixel, Rgb, RgbImage}
};

/// Anything that can report its dimensions and an RGB triple for every valid `(x, y)`.
pub trait PixelSource {
  fn size(&self) -> Size2D<u32, PixelSpace>;
  fn pixel(&self, x: u32, y: u32) -> Rgb<u8>;
}

impl PixelSource for RgbImage {
  fn size(&self) -> Size2D<u32, PixelSpace> {
    self.dimensions().into()
  }
  fn pixel(&self, x: u32, y: u32) -> Rgb<u8> {
    *self.get_pixel(x, y)
  }
}

/// Alpha is discarded, as when converting the image to RGB.
impl PixelSource for DynamicImage {
  fn size(&self) -> Size2D<u32, PixelSpace> {
    self.dimensions().into()
  }
  fn pixel(&self, x: u32, y: u32) -> Rgb<u8> {
    self.get_pixel(x, y).to_rgb()
  }
}

/// Pixel source backed by a closure.
pub struct FnSource<F> {
  pub size: Size2D<u32, PixelSpace>,
  pub f: F
}

impl <F> PixelSource for FnSource<F> where F: Fn(u32, u32) -> Rgb<u8> {
  fn size(&self) -> Size2D<u32, PixelSpace> {
    self.size
  }
  fn pixel(&self, x: u32, y: u32) -> Rgb<u8> {
    (self.f)(x, y)
  }
}

/// Pixels of scan-line `scan_index`, in order along `axis`.
pub fn scan_line(source: &impl PixelSource, axis: Axis, scan_index: u32) -> Result<Vec<Rgb<u8>>> {
  let size = source.size();
  geometry::validate_size(size)?;
  let scan_count = axis.scan_count(size);
  if scan_index >= scan_count {
    return Err(invalid_input(format!(
      "scan-line {scan_index} is out of range, the image has {scan_count}"
    )));
  }
  Ok((0..axis.axis_length(size))
    .map(|coord| axis.to_pixel(coord, scan_index))
    .map(|p| source.pixel(p.x, p.y))
    .collect())
}

#[cfg(test)]
mod tests {
  use {
    super::*,
    anyhow::Result
  };

  fn source() -> FnSource<impl Fn(u32, u32) -> Rgb<u8>> {
    FnSource {
      size: Size2D::new(3, 2),
      f: |x, y| Rgb([x as u8, y as u8, 0])
    }
  }

  #[test] fn rows_and_columns() -> Result<()> {
    assert_eq!(scan_line(&source(), Axis::Row, 1)?, vec![
      Rgb([0, 1, 0]), Rgb([1, 1, 0]), Rgb([2, 1, 0])
    ]);
    assert_eq!(scan_line(&source(), Axis::Column, 2)?, vec![
      Rgb([2, 0, 0]), Rgb([2, 1, 0])
    ]);
    Ok(())
  }

  #[test] fn image_sources_agree() -> Result<()> {
    let image = RgbImage::from_fn(4, 3, |x, y| Rgb([x as u8 * 10, y as u8 * 10, 7]));
    let dynamic = DynamicImage::ImageRgb8(image.clone());
    for y in 0..3 {
      assert_eq!(scan_line(&image, Axis::Row, y)?, scan_line(&dynamic, Axis::Row, y)?);
    }
    Ok(())
  }

  #[test] fn out_of_range() {
    assert!(scan_line(&source(), Axis::Row, 2).is_err());
    assert!(scan_line(&source(), Axis::Column, 3).is_err());
    let empty = FnSource { size: Size2D::new(0, 5), f: |_, _| Rgb([0; 3]) };
    assert!(scan_line(&empty, Axis::Column, 0).is_err());
  }
}
