use {
  crate::error::{Result, invalid_input},
  image::Rgba,
  rand::Rng,
  std::ops::RangeInclusive
};

/// A colored segment lying on a single scan-line.
///
/// Both endpoints are coordinates along the scan axis; the perpendicular coordinate is
/// implied by the genome that owns the line.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Line {
  pub color: Rgba<u8>,
  pub points: [u32; 2]
}

impl Line {
  pub fn new(color: Rgba<u8>, points: [u32; 2], axis_length: u32) -> Result<Self> {
    let line = Self { color, points };
    line.validate(axis_length)?;
    Ok(line)
  }

  /// Uniformly random endpoints in `[0, axis_length)` and uniformly random RGBA color.
  pub fn random(rng: &mut impl Rng, axis_length: u32) -> Self {
    Self {
      color: random_color(rng),
      points: [
        random_point(rng, axis_length),
        random_point(rng, axis_length)
      ]
    }
  }

  /// Replace either one color channel or one endpoint, with equal odds.
  pub fn mutate(&mut self, rng: &mut impl Rng, axis_length: u32) {
    if rng.gen_bool(0.5) {
      let channel = rng.gen_range(0..4usize);
      self.color.0[channel] = rng.gen();
    } else {
      let endpoint = rng.gen_range(0..2usize);
      self.points[endpoint] = random_point(rng, axis_length);
    }
  }

  /// Pixels covered by the segment, endpoints included.
  pub fn span(&self) -> RangeInclusive<u32> {
    let [a, b] = self.points;
    a.min(b)..=a.max(b)
  }

  pub fn validate(&self, axis_length: u32) -> Result<()> {
    match self.points.iter().find(|&&p| p >= axis_length) {
      Some(p) => Err(invalid_input(format!(
        "line endpoint {p} is outside of [0, {axis_length})"
      ))),
      None => Ok(())
    }
  }
}

pub fn random_point(rng: &mut impl Rng, axis_length: u32) -> u32 {
  rng.gen_range(0..axis_length)
}

pub fn random_color(rng: &mut impl Rng) -> Rgba<u8> {
  Rgba(rng.gen())
}
