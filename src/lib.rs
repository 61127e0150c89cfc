//! Approximation of raster images by evolved, alpha-blended line segments.
//!
//! Every scan-line (row or column) of the target image is reconstructed independently by a
//! [`Genome`](genome::Genome): a fixed number of colored segments lying on that scan-line,
//! composited in order over an opaque background. A [`HillClimber`](solver::HillClimber)
//! repeatedly mutates a copy of the current genome and keeps the copy only if it scores
//! strictly better, until the [fitness](fitness::fitness) reaches a quality threshold or the
//! iteration cap runs out. The accepted genomes are then drawn at their scan-lines by
//! [`Approximation::composite`](assembly::Approximation::composite).
//!
//! # Basic usage
//! ```no_run
//! # use {
//! #   scanline_evolve::{pipeline, solver::Config, geometry::Axis},
//! #   anyhow::Result
//! # };
//! # fn main() -> Result<()> {
//! let source = image::open("in.png")?;
//! let config = Config::default()
//!   .with_axis(Axis::Row)
//!   .with_line_count(30)
//!   .with_quality_threshold(95.0)
//!   .with_iteration_cap(100_000); // mandatory, an unreachable threshold never ends otherwise
//!
//! let run = pipeline::approximate(&source, &config)?;
//! run.approximation
//!   .composite(config.background)
//!   .save("out.png")?;
//! #   Ok(())
//! # }
//! ```
//!
//! A single scan-line can be driven by hand, observing every transition:
//! ```
//! # use {
//! #   scanline_evolve::solver::{Config, HillClimber},
//! #   image::Rgb,
//! #   rand::SeedableRng,
//! #   anyhow::Result
//! # };
//! # fn main() -> Result<()> {
//! let target = vec![Rgb([200u8, 40, 40]); 16];
//! let config = Config::default().with_iteration_cap(1000);
//! let rng = rand_pcg::Pcg64::seed_from_u64(0);
//!
//! for step in HillClimber::new(&target, 0, config, rng)? {
//!   let step = step?;
//!   if step.accepted {
//!     println!("#{}: {:.3}", step.iteration, step.parent_fitness);
//!   }
//! }
//! #   Ok(())
//! # }
//! ```
//!
//! Scan-lines share no state during search, so [`pipeline::approximate`] spreads them over
//! the rayon pool. Each scan-line draws from its own seeded random stream, which makes a
//! parallel run reproduce a sequential one exactly.

pub mod error;
pub mod geometry;
pub mod drawing;
pub mod genome;
pub mod fitness;
pub mod solver;
pub mod assembly;
pub mod target;
pub mod pipeline;
