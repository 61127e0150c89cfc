use {
  super::*,
  crate::geometry::Line,
  anyhow::Result,
  image::Rgba,
  rand::prelude::*,
  rand_pcg::Pcg64
};

const BACKGROUND: Rgb<u8> = Rgb([20, 30, 40]);

fn random_approximation(axis: Axis, size: Size2D<u32, PixelSpace>, seed: u64) -> Result<Approximation> {
  let mut rng = Pcg64::seed_from_u64(seed);
  let mut approximation = Approximation::new(axis, size)?;
  let mut order: Vec<u32> = (0..axis.scan_count(size)).collect();
  order.shuffle(&mut rng);
  for scan_index in order {
    approximation.push(Genome::random(&mut rng, axis, axis.axis_length(size), scan_index, 12)?)?;
  }
  Ok(approximation)
}

#[test] fn composite_matches_standalone_draw() -> Result<()> {
  for (axis, seed) in [(Axis::Row, 0), (Axis::Column, 1)] {
    let size = Size2D::new(9, 6);
    let approximation = random_approximation(axis, size, seed)?;
    assert!(approximation.is_complete());
    let genomes = approximation.genomes().to_vec();
    let image = approximation.composite(BACKGROUND);
    assert_eq!(image.dimensions(), (9, 6));

    for genome in genomes {
      let standalone = genome.draw_pixels(BACKGROUND);
      for (coord, expected) in standalone.into_iter().enumerate() {
        let p = axis.to_pixel(coord as u32, genome.scan_index);
        assert_eq!(*image.get_pixel(p.x, p.y), expected);
      }
    }
  }
  Ok(())
}

#[test] fn composite_ignores_push_order() -> Result<()> {
  let size = Size2D::new(7, 5);
  let a = random_approximation(Axis::Row, size, 3)?;
  let mut genomes = a.genomes().to_vec();
  genomes.reverse();
  let mut b = Approximation::new(Axis::Row, size)?;
  genomes.into_iter().try_for_each(|genome| b.push(genome))?;
  assert_eq!(a.composite(BACKGROUND), b.composite(BACKGROUND));
  Ok(())
}

#[test] fn lines_stay_on_their_scan_line() -> Result<()> {
  let mut approximation = Approximation::new(Axis::Row, Size2D::new(4, 3))?;
  approximation.push(Genome::new(Axis::Row, 4, 1, vec![
    Line { color: Rgba([255, 255, 255, 255]), points: [3, 0] }
  ])?)?;
  assert!(!approximation.is_complete());
  let image = approximation.composite(Rgb([0, 0, 0]));
  itertools::iproduct!(0..3, 0..4).for_each(|(y, x)| {
    let expected = if y == 1 { Rgb([255, 255, 255]) } else { Rgb([0, 0, 0]) };
    assert_eq!(*image.get_pixel(x, y), expected);
  });
  Ok(())
}

#[test] fn push_rejects_mismatches() -> Result<()> {
  let mut rng = Pcg64::seed_from_u64(4);
  let mut approximation = Approximation::new(Axis::Column, Size2D::new(3, 5))?;
  // wrong axis
  assert!(approximation.push(Genome::random(&mut rng, Axis::Row, 5, 0, 2)?).is_err());
  // wrong length
  assert!(approximation.push(Genome::random(&mut rng, Axis::Column, 3, 0, 2)?).is_err());
  // outside the image
  assert!(approximation.push(Genome::random(&mut rng, Axis::Column, 5, 3, 2)?).is_err());
  approximation.push(Genome::random(&mut rng, Axis::Column, 5, 2, 2)?)?;
  // duplicate
  assert!(approximation.push(Genome::random(&mut rng, Axis::Column, 5, 2, 2)?).is_err());
  assert_eq!(approximation.genomes().len(), 1);
  Ok(())
}

#[test] fn rejects_empty_image() {
  assert!(Approximation::new(Axis::Row, Size2D::new(0, 4)).is_err());
}
