use {
  super::Config,
  crate::{
    error::{Error, Result, invalid_input},
    fitness::fitness,
    genome::Genome
  },
  image::Rgb,
  rand::Rng
};

/// Why a search stopped.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Termination {
  QualityReached,
  IterationCap
}

/// A single mutate-evaluate-accept transition.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Step {
  /// Evaluations performed so far, this one included.
  pub iteration: u64,
  pub child_fitness: f64,
  /// Parent fitness after the accept decision.
  pub parent_fitness: f64,
  pub accepted: bool
}

/// Best genome found for one scan-line.
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
  pub genome: Genome,
  pub fitness: f64,
  pub iterations: u64,
  pub termination: Termination
}

impl Outcome {
  pub fn reached_quality(&self) -> bool {
    self.termination == Termination::QualityReached
  }

  /// Turns an outcome cut short by the iteration cap into [`Error::QualityNotReached`].
  pub fn require_quality(self) -> Result<Self> {
    match self.termination {
      Termination::QualityReached => Ok(self),
      Termination::IterationCap => Err(Error::QualityNotReached(Box::new(self)))
    }
  }
}

/// Greedy single-candidate local search over the genomes of one scan-line.
///
/// A child replaces the parent only when it scores strictly higher, so the parent fitness
/// never decreases. Iterating the climber yields one [`Step`] per child until the quality
/// threshold or the iteration cap is reached.
pub struct HillClimber<'a, R> {
  target: &'a [Rgb<u8>],
  config: Config,
  rng: R,
  parent: Genome,
  parent_fitness: f64,
  iterations: u64
}

impl <'a, R: Rng> HillClimber<'a, R> {
  /// Start from a random genome for `scan_index`.
  pub fn new(target: &'a [Rgb<u8>], scan_index: u32, config: Config, mut rng: R) -> Result<Self> {
    config.validate()?;
    let axis_length = u32::try_from(target.len())
      .map_err(|_| invalid_input(format!("scan-line of {} pixels is too long", target.len())))?;
    if axis_length == 0 {
      return Err(invalid_input("target scan-line is empty"));
    }
    let parent = Genome::random(&mut rng, config.axis, axis_length, scan_index, config.line_count)?;
    Self::with_parent(target, parent, config, rng)
  }

  /// Start from a given genome.
  pub fn with_parent(target: &'a [Rgb<u8>], parent: Genome, config: Config, rng: R) -> Result<Self> {
    config.validate()?;
    if parent.lines.len() != config.line_count {
      return Err(Error::GenomeInvariantViolation {
        expected: config.line_count,
        actual: parent.lines.len()
      });
    }
    if parent.axis != config.axis {
      return Err(invalid_input(format!(
        "genome runs along {:?}, configured axis is {:?}", parent.axis, config.axis
      )));
    }
    if parent.axis_length as usize != target.len() {
      return Err(invalid_input(format!(
        "genome spans {} pixels, target scan-line has {}", parent.axis_length, target.len()
      )));
    }
    let parent_fitness = fitness(target, &parent.draw_pixels(config.background))?;
    Ok(Self { target, config, rng, parent, parent_fitness, iterations: 1 })
  }

  pub fn parent(&self) -> &Genome {
    &self.parent
  }

  pub fn parent_fitness(&self) -> f64 {
    self.parent_fitness
  }

  pub fn iterations(&self) -> u64 {
    self.iterations
  }

  pub fn termination(&self) -> Option<Termination> {
    if self.parent_fitness >= self.config.quality_threshold {
      Some(Termination::QualityReached)
    } else if self.iterations >= self.config.iteration_cap {
      Some(Termination::IterationCap)
    } else {
      None
    }
  }

  /// Mutate, evaluate and possibly accept one child. `None` once the search is over.
  pub fn step(&mut self) -> Result<Option<Step>> {
    if self.termination().is_some() {
      return Ok(None);
    }
    let child = self.parent.mutate(&mut self.rng, self.config.mutation_divisor)?;
    let child_fitness = fitness(self.target, &child.draw_pixels(self.config.background))?;
    self.iterations += 1;

    let accepted = child_fitness > self.parent_fitness;
    if accepted {
      self.parent = child;
      self.parent_fitness = child_fitness;
    }
    Ok(Some(Step {
      iteration: self.iterations,
      child_fitness,
      parent_fitness: self.parent_fitness,
      accepted
    }))
  }

  /// Search until termination.
  pub fn run(mut self) -> Result<Outcome> {
    while self.step()?.is_some() {}
    let termination = self.termination()
      .unwrap_or(Termination::IterationCap);
    Ok(Outcome {
      genome: self.parent,
      fitness: self.parent_fitness,
      iterations: self.iterations,
      termination
    })
  }
}

impl <R: Rng> Iterator for HillClimber<'_, R> {
  type Item = Result<Step>;

  fn next(&mut self) -> Option<Self::Item> {
    self.step().transpose()
  }
}
