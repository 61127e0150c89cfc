use {
  crate::{
    error::{Result, invalid_config},
    genome::MUTATION_DIVISOR,
    geometry::Axis
  },
  image::Rgb
};

/// Settings shared by every scan-line optimizer of a run.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Config {
  pub axis: Axis,
  /// Lines per genome.
  pub line_count: usize,
  pub mutation_divisor: usize,
  /// Search stops once the parent fitness reaches this value.
  pub quality_threshold: f64,
  /// Upper bound on fitness evaluations per scan-line, the initial one included.
  /// Mandatory: an unreachable threshold would otherwise never terminate.
  pub iteration_cap: u64,
  pub background: Rgb<u8>,
  pub seed: u64,
  /// Optimize scan-lines on the rayon pool instead of the calling thread.
  pub parallel: bool
}

impl Default for Config {
  fn default() -> Self {
    Self {
      axis: Axis::Row,
      line_count: 30,
      mutation_divisor: MUTATION_DIVISOR,
      quality_threshold: 95.0,
      iteration_cap: 100_000,
      background: Rgb([0, 0, 0]),
      seed: 0,
      parallel: true
    }}}

impl Config {
  pub fn with_axis(mut self, axis: Axis) -> Self {
    self.axis = axis;
    self
  }
  pub fn with_line_count(mut self, line_count: usize) -> Self {
    self.line_count = line_count;
    self
  }
  pub fn with_mutation_divisor(mut self, divisor: usize) -> Self {
    self.mutation_divisor = divisor;
    self
  }
  pub fn with_quality_threshold(mut self, threshold: f64) -> Self {
    self.quality_threshold = threshold;
    self
  }
  pub fn with_iteration_cap(mut self, cap: u64) -> Self {
    self.iteration_cap = cap;
    self
  }
  pub fn with_background(mut self, background: Rgb<u8>) -> Self {
    self.background = background;
    self
  }
  pub fn with_seed(mut self, seed: u64) -> Self {
    self.seed = seed;
    self
  }
  pub fn with_parallel(mut self, parallel: bool) -> Self {
    self.parallel = parallel;
    self
  }

  pub fn validate(&self) -> Result<()> {
    if self.line_count == 0 {
      return Err(invalid_config("line count must be at least 1"));
    }
    if self.mutation_divisor == 0 {
      return Err(invalid_config("mutation divisor must be at least 1"));
    }
    if self.iteration_cap == 0 {
      return Err(invalid_config("iteration cap must be at least 1"));
    }
    if !self.quality_threshold.is_finite() {
      return Err(invalid_config(format!(
        "quality threshold must be finite, got {}", self.quality_threshold
      )));
    }
    Ok(())
  }
}
