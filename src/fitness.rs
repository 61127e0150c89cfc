//! Similarity score between a target scan-line and a rasterized genome.

use {
  crate::error::{Result, invalid_input},
  image::Rgb
};

/// Per-pixel normalization constant.
///
/// Slightly below the true maximum RGB distance `sqrt(3) * 255 ≈ 441.67`, so a worst-case
/// candidate scores marginally under zero. Scores are never clamped.
pub const MAX_PIXEL_DISTANCE: f64 = 440.0;

/// Euclidean distance between two pixels in RGB space.
pub fn distance(a: Rgb<u8>, b: Rgb<u8>) -> f64 {
  a.0.iter().zip(b.0.iter())
    .map(|(&a, &b)| {
      let d = a as f64 - b as f64;
      d * d
    })
    .sum::<f64>()
    .sqrt()
}

/// `(1 - Σ distance / (n * 440)) * 100`; 100 means an exact match.
///
/// Symmetric in its arguments. Both buffers must be non-empty and of equal length.
pub fn fitness(target: &[Rgb<u8>], candidate: &[Rgb<u8>]) -> Result<f64> {
  if target.is_empty() {
    return Err(invalid_input("target scan-line is empty"));
  }
  if target.len() != candidate.len() {
    return Err(invalid_input(format!(
      "target has {} pixels, candidate has {}", target.len(), candidate.len()
    )));
  }
  let total: f64 = target.iter().zip(candidate)
    .map(|(&a, &b)| distance(a, b))
    .sum();
  let max = target.len() as f64 * MAX_PIXEL_DISTANCE;
  Ok((1.0 - total / max) * 100.0)
}

#[cfg(test)]
mod tests {
  use {
    super::*,
    anyhow::Result,
    rand::prelude::*,
  };

  fn random_pixels(rng: &mut impl Rng, n: usize) -> Vec<Rgb<u8>> {
    (0..n).map(|_| Rgb(rng.gen())).collect()
  }

  #[test] fn identical_is_100() -> Result<()> {
    let mut rng = rand_pcg::Pcg64::seed_from_u64(0);
    for n in [1, 2, 17, 300] {
      let x = random_pixels(&mut rng, n);
      assert_eq!(fitness(&x, &x)?, 100.0);
    }
    Ok(())
  }

  #[test] fn symmetric() -> Result<()> {
    let mut rng = rand_pcg::Pcg64::seed_from_u64(1);
    for n in [1, 5, 64] {
      let a = random_pixels(&mut rng, n);
      let b = random_pixels(&mut rng, n);
      assert_eq!(fitness(&a, &b)?, fitness(&b, &a)?);
    }
    Ok(())
  }

  #[test] fn worst_case_is_slightly_negative() -> Result<()> {
    let black = vec![Rgb([0, 0, 0]); 10];
    let white = vec![Rgb([255, 255, 255]); 10];
    let score = fitness(&black, &white)?;
    let expected = (1.0 - (3.0f64 * 255.0 * 255.0).sqrt() / 440.0) * 100.0;
    assert!((score - expected).abs() < 1e-9);
    assert!(score < 0.0 && score > -0.5);
    Ok(())
  }

  #[test] fn known_value() -> Result<()> {
    // distances 0 and 5 (a 3-4-5 triangle on r/g)
    let target = [Rgb([10, 10, 10]), Rgb([0, 0, 0])];
    let candidate = [Rgb([10, 10, 10]), Rgb([3, 4, 0])];
    let score = fitness(&target, &candidate)?;
    assert!((score - (1.0 - 5.0 / 880.0) * 100.0).abs() < 1e-12);
    Ok(())
  }

  #[test] fn rejects_bad_buffers() {
    let px = [Rgb([0, 0, 0]); 3];
    assert!(fitness(&[], &[]).is_err());
    assert!(fitness(&px, &px[..2]).is_err());
  }
}
