//! Whole-image driver: one hill climber per scan-line, then a single composition pass.

use {
  crate::{
    assembly::Approximation,
    error::Result,
    geometry,
    solver::{Config, HillClimber, Outcome, Termination},
    target::{self, PixelSource}
  },
  rand::SeedableRng,
  rand_pcg::Pcg64,
  rayon::prelude::*
};

/// Diagnostics of a single scan-line search.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ScanStats {
  pub scan_index: u32,
  pub fitness: f64,
  pub iterations: u64,
  pub termination: Termination
}

/// Result of [`approximate`]: the genomes ready for composition and per scan-line stats,
/// both ordered by scan index.
#[derive(Debug, Clone)]
pub struct Run {
  pub approximation: Approximation,
  pub stats: Vec<ScanStats>
}

impl Run {
  /// Scan-lines that stopped at the iteration cap.
  pub fn unreached(&self) -> impl Iterator<Item = &ScanStats> + '_ {
    self.stats.iter()
      .filter(|stats| stats.termination == Termination::IterationCap)
  }

  pub fn total_iterations(&self) -> u64 {
    self.stats.iter().map(|stats| stats.iterations).sum()
  }
}

/// Random stream of a scan-line; independent of the order scan-lines are processed in.
pub fn scan_rng(seed: u64, scan_index: u32) -> Pcg64 {
  Pcg64::seed_from_u64(seed ^ (scan_index as u64).wrapping_mul(0x9e37_79b9_7f4a_7c15))
}

/// Optimize a single scan-line of `source`.
pub fn approximate_scan_line(
  source: &impl PixelSource,
  config: &Config,
  scan_index: u32
) -> Result<Outcome> {
  let target = target::scan_line(source, config.axis, scan_index)?;
  let outcome = HillClimber::new(&target, scan_index, *config, scan_rng(config.seed, scan_index))?
    .run()?;
  log::debug!("scan-line {} took {} operations, fitness {:.3}",
    scan_index, outcome.iterations, outcome.fitness);
  if !outcome.reached_quality() {
    log::warn!("scan-line {} hit the iteration cap ({}) at fitness {:.3}",
      scan_index, config.iteration_cap, outcome.fitness);
  }
  Ok(outcome)
}

/// Optimize every scan-line of `source`.
///
/// With `config.parallel` scan-lines are spread over the rayon pool; the result is identical
/// to a sequential run with the same seed.
pub fn approximate<S>(source: &S, config: &Config) -> Result<Run>
  where S: PixelSource + Sync {
  config.validate()?;
  let size = source.size();
  geometry::validate_size(size)?;
  let scan_count = config.axis.scan_count(size);
  log::info!("approximating {}x{} image, {} {:?} scan-lines of {} lines each",
    size.width, size.height, scan_count, config.axis, config.line_count);

  let solve = |scan_index| approximate_scan_line(source, config, scan_index);
  let outcomes: Vec<Outcome> = if config.parallel {
    (0..scan_count).into_par_iter().map(solve).collect::<Result<_>>()?
  } else {
    (0..scan_count).map(solve).collect::<Result<_>>()?
  };

  let mut approximation = Approximation::new(config.axis, size)?;
  let mut stats = Vec::with_capacity(outcomes.len());
  for outcome in outcomes {
    stats.push(ScanStats {
      scan_index: outcome.genome.scan_index,
      fitness: outcome.fitness,
      iterations: outcome.iterations,
      termination: outcome.termination
    });
    approximation.push(outcome.genome)?;
  }
  let run = Run { approximation, stats };
  log::info!("done: {} operations, {} scan-lines below quality {}",
    run.total_iterations(), run.unreached().count(), config.quality_threshold);
  Ok(run)
}
