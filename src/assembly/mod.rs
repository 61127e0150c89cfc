use {
  crate::{
    drawing,
    error::{Result, invalid_input},
    genome::Genome,
    geometry::{self, Axis, PixelSpace}
  },
  euclid::Size2D,
  image::{Rgb, RgbImage}
};

#[cfg(test)] mod tests;

/// Accepted genomes of a run, one per scan-line, and the final composite.
///
/// Genomes are appended in whatever order scan-lines finish; [`Approximation::composite`]
/// draws them ordered by scan index.
#[derive(Debug, Clone)]
pub struct Approximation {
  axis: Axis,
  size: Size2D<u32, PixelSpace>,
  genomes: Vec<Genome>,
  seen: Vec<bool>
}

impl Approximation {
  pub fn new(axis: Axis, size: Size2D<u32, PixelSpace>) -> Result<Self> {
    geometry::validate_size(size)?;
    Ok(Self {
      axis,
      size,
      genomes: vec![],
      seen: vec![false; axis.scan_count(size) as usize]
    })
  }

  pub fn axis(&self) -> Axis {
    self.axis
  }

  pub fn size(&self) -> Size2D<u32, PixelSpace> {
    self.size
  }

  pub fn genomes(&self) -> &[Genome] {
    &self.genomes
  }

  /// Every scan-line has a genome.
  pub fn is_complete(&self) -> bool {
    self.seen.iter().all(|&seen| seen)
  }

  pub fn push(&mut self, genome: Genome) -> Result<()> {
    if genome.axis != self.axis {
      return Err(invalid_input(format!(
        "genome runs along {:?}, approximation along {:?}", genome.axis, self.axis
      )));
    }
    let axis_length = self.axis.axis_length(self.size);
    if genome.axis_length != axis_length {
      return Err(invalid_input(format!(
        "genome spans {} pixels, scan-lines have {axis_length}", genome.axis_length
      )));
    }
    match self.seen.get_mut(genome.scan_index as usize) {
      None => Err(invalid_input(format!(
        "scan index {} is outside of the image", genome.scan_index
      ))),
      Some(true) => Err(invalid_input(format!(
        "scan-line {} already has a genome", genome.scan_index
      ))),
      Some(seen) => {
        *seen = true;
        self.genomes.push(genome);
        Ok(())
      }
    }
  }

  /// Draw every genome at its scan-line onto a background-filled canvas.
  pub fn composite(mut self, background: Rgb<u8>) -> RgbImage {
    let mut image = drawing::canvas(self.size, background);
    self.genomes.sort_by_key(|genome| genome.scan_index);
    self.genomes.iter()
      .for_each(|genome| genome.draw_onto(&mut image));
    image
  }
}
