// Approximate an image scan-line by scan-line with evolved line segments.
//
// cargo run --release --features drawing -- in.png -o out.png
// cargo run --release --features drawing -- in.png --axis column -l 50 -q 90
//
// RUST_LOG=debug prints the number of operations every scan-line took.

use {
  scanline_evolve::{
    geometry::Axis,
    pipeline,
    solver::Config
  },
  anyhow::{Context, Result, bail},
  clap::Parser,
  image::Rgb,
  std::path::PathBuf
};

#[derive(Parser, Debug)]
#[command(name = "scanline-evolve")]
#[command(version, about = "Approximate an image with alpha-blended line segments, one scan-line at a time")]
struct Args {
  /// Input image path
  input: PathBuf,

  /// Output image path
  #[arg(short, long, default_value = "result.png")]
  output: PathBuf,

  /// Decompose the image into `row`s or `column`s
  #[arg(short, long, default_value = "row")]
  axis: Axis,

  /// Line segments per scan-line
  #[arg(short, long, default_value_t = 30)]
  lines: usize,

  /// At most lines / divisor mutations per step
  #[arg(short = 'm', long, default_value_t = 4)]
  mutation_divisor: usize,

  /// Stop a scan-line once its fitness reaches this value (0..100)
  #[arg(short, long, default_value_t = 95.0)]
  quality: f64,

  /// Maximum fitness evaluations per scan-line
  #[arg(short = 'n', long, default_value_t = 100_000)]
  iteration_cap: u64,

  /// Background color, `#rrggbb`
  #[arg(short, long, default_value = "#000000", value_parser = parse_color)]
  background: Rgb<u8>,

  /// Random seed
  #[arg(long, default_value_t = 0)]
  seed: u64,

  /// Process scan-lines one after another on the main thread
  #[arg(long, default_value_t = false)]
  sequential: bool,

  /// Fail if any scan-line stops at the iteration cap
  #[arg(long, default_value_t = false)]
  strict: bool,
}

fn parse_color(s: &str) -> Result<Rgb<u8>> {
  let hex = s.trim_start_matches('#');
  if hex.len() != 6 || !hex.is_ascii() {
    bail!("expected a color in `#rrggbb` form, got `{s}`");
  }
  let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16)
    .with_context(|| format!("invalid color `{s}`"));
  Ok(Rgb([channel(0)?, channel(2)?, channel(4)?]))
}

fn main() -> Result<()> {
  env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
  let args = Args::parse();

  let config = Config::default()
    .with_axis(args.axis)
    .with_line_count(args.lines)
    .with_mutation_divisor(args.mutation_divisor)
    .with_quality_threshold(args.quality)
    .with_iteration_cap(args.iteration_cap)
    .with_background(args.background)
    .with_seed(args.seed)
    .with_parallel(!args.sequential);

  let source = image::open(&args.input)
    .with_context(|| format!("unable to open {}", args.input.display()))?;
  log::info!("image loaded: {}", args.input.display());

  let run = pipeline::approximate(&source, &config)?;
  if args.strict {
    if let Some(stats) = run.unreached().next() {
      bail!("scan-line {} stopped at fitness {:.3} after {} iterations",
        stats.scan_index, stats.fitness, stats.iterations);
    }
  }

  run.approximation
    .composite(config.background)
    .save(&args.output)
    .with_context(|| format!("unable to save {}", args.output.display()))?;
  log::info!("saving image to {}", args.output.display());
  Ok(())
}
