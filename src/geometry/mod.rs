//! .
//!
//! The origin of the coordinate system is in the top-left corner. A scan-line is either a row
//! (coordinates run along `x`, the scan index is `y`) or a column (the other way around).

use {
  euclid::{Point2D, Size2D},
  crate::error::{Result, invalid_input}
};

pub mod line;
pub use line::Line;

/// Pixel coordinate basis
#[derive(Debug, Copy, Clone)]
pub struct PixelSpace;

/// Direction along which an image is decomposed into scan-lines.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum Axis {
  /// Every scan-line is a row; line endpoints are `x` coordinates.
  #[default]
  Row,
  /// Every scan-line is a column; line endpoints are `y` coordinates.
  Column
}

impl Axis {
  /// Number of pixels along a single scan-line.
  pub fn axis_length(self, size: Size2D<u32, PixelSpace>) -> u32 {
    match self {
      Axis::Row => size.width,
      Axis::Column => size.height
    }
  }

  /// Number of scan-lines in an image of the given size.
  pub fn scan_count(self, size: Size2D<u32, PixelSpace>) -> u32 {
    match self {
      Axis::Row => size.height,
      Axis::Column => size.width
    }
  }

  /// Maps a coordinate along the scan-line and a scan index to a pixel.
  pub fn to_pixel(self, coord: u32, scan_index: u32) -> Point2D<u32, PixelSpace> {
    match self {
      Axis::Row => Point2D::new(coord, scan_index),
      Axis::Column => Point2D::new(scan_index, coord)
    }
  }

  /// Size of a standalone raster of a single scan-line.
  pub fn scan_size(self, axis_length: u32) -> Size2D<u32, PixelSpace> {
    match self {
      Axis::Row => Size2D::new(axis_length, 1),
      Axis::Column => Size2D::new(1, axis_length)
    }
  }
}

impl std::str::FromStr for Axis {
  type Err = crate::error::Error;

  fn from_str(s: &str) -> Result<Self> {
    match s.to_ascii_lowercase().as_str() {
      "row" | "rows" => Ok(Axis::Row),
      "column" | "columns" | "col" => Ok(Axis::Column),
      other => Err(invalid_input(format!("unknown axis `{other}`")))
    }
  }
}

/// Rejects images with a zero dimension.
pub fn validate_size(size: Size2D<u32, PixelSpace>) -> Result<()> {
  if size.width == 0 || size.height == 0 {
    return Err(invalid_input(format!(
      "image dimensions must be positive, got {}x{}", size.width, size.height
    )));
  }
  Ok(())
}
