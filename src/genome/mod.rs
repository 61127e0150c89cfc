use {
  crate::{
    drawing::{self, Draw},
    error::{Error, Result, invalid_config, invalid_input},
    geometry::{Axis, Line}
  },
  image::{Rgb, RgbImage},
  rand::Rng
};


/// Mutation rounds per step are drawn from `0..=line_count / MUTATION_DIVISOR`.
pub const MUTATION_DIVISOR: usize = 4;

/// Candidate solution for a single scan-line.
///
/// Owns its lines; cloning a genome never shares line storage with the original.
#[derive(Debug, Clone, PartialEq)]
pub struct Genome {
  pub axis: Axis,
  pub axis_length: u32,
  pub scan_index: u32,
  pub lines: Vec<Line>
}

impl Genome {
  pub fn new(axis: Axis, axis_length: u32, scan_index: u32, lines: Vec<Line>) -> Result<Self> {
    if axis_length == 0 {
      return Err(invalid_input("axis length must be positive"));
    }
    if lines.is_empty() {
      return Err(invalid_input("genome must hold at least one line"));
    }
    lines.iter().try_for_each(|line| line.validate(axis_length))?;
    Ok(Self { axis, axis_length, scan_index, lines })
  }

  /// Fresh genome of `line_count` random lines.
  pub fn random(
    rng: &mut impl Rng,
    axis: Axis,
    axis_length: u32,
    scan_index: u32,
    line_count: usize
  ) -> Result<Self> {
    if axis_length == 0 {
      return Err(invalid_input("axis length must be positive"));
    }
    let lines = (0..line_count)
      .map(|_| Line::random(rng, axis_length))
      .collect();
    Self::new(axis, axis_length, scan_index, lines)
  }

  /// Copy of `self` with up to `lines.len() / divisor` random line mutations applied.
  ///
  /// Lines are picked with replacement, so one line may be mutated several times.
  /// With fewer lines than `divisor` the copy is unchanged. A zero `divisor` is rejected.
  pub fn mutate(&self, rng: &mut impl Rng, divisor: usize) -> Result<Self> {
    if divisor == 0 {
      return Err(invalid_config("mutation divisor must be at least 1"));
    }
    let mut lines = self.lines.clone();
    let rounds = rng.gen_range(0..=lines.len() / divisor);
    for _ in 0..rounds {
      let index = rng.gen_range(0..lines.len());
      lines[index].mutate(rng, self.axis_length);
    }
    if lines.len() != self.lines.len() {
      return Err(Error::GenomeInvariantViolation {
        expected: self.lines.len(),
        actual: lines.len()
      });
    }
    Ok(Self { lines, ..*self })
  }

  /// Rasterize the lines, in order, onto a background-filled scan-line.
  pub fn draw(&self, background: Rgb<u8>) -> RgbImage {
    let mut image = drawing::canvas(self.axis.scan_size(self.axis_length), background);
    self.lines.iter()
      .for_each(|line| line.place(self.axis, 0).draw(&mut image));
    image
  }

  /// Same as [`Genome::draw`], flattened into a pixel sequence along the axis.
  pub fn draw_pixels(&self, background: Rgb<u8>) -> Vec<Rgb<u8>> {
    self.draw(background).pixels().copied().collect()
  }

  /// Draw the lines at this genome's scan index on a full-size canvas.
  pub fn draw_onto(&self, image: &mut RgbImage) {
    self.lines.iter()
      .for_each(|line| line.place(self.axis, self.scan_index).draw(image));
  }
}
