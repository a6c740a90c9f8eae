use std::ops::{AddAssign, Index, IndexMut, MulAssign};
use crate::wave::sampled::ensure_aligned;
use crate::wave::{Grid, Sampled, WaveError};
/// Fixed-length sample sequence on a borrowed grid.
#[derive(Clone, Debug, PartialEq)]
pub struct Waveform<'g> {
    grid: &'g Grid,
    samples: Vec<f64>,
}
impl<'g> Waveform<'g> {
    /// All-zero waveform.
    pub fn new(grid: &'g Grid) -> Self {
        Self {
            grid,
            samples: vec![0.0; grid.size()],
        }
    }
    pub fn from_samples(grid: &'g Grid, samples: Vec<f64>) -> Result<Self, WaveError> {
        check_len(grid, samples.len())?;
        Ok(Self { grid, samples })
    }
    pub fn grid(&self) -> &'g Grid {
        self.grid
    }
    pub fn len(&self) -> usize {
        self.samples.len()
    }
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
    pub fn at(&self, index: usize) -> Result<f64, WaveError> {
        self.samples
            .get(index)
            .copied()
            .ok_or(WaveError::IndexOutOfRange {
                index,
                size: self.samples.len(),
            })
    }
    pub fn set(&mut self, index: usize, value: f64) -> Result<(), WaveError> {
        let size = self.samples.len();
        let slot = self
            .samples
            .get_mut(index)
            .ok_or(WaveError::IndexOutOfRange { index, size })?;
        *slot = value;
        Ok(())
    }
    pub fn as_slice(&self) -> &[f64] {
        &self.samples
    }
    pub fn as_mut_slice(&mut self) -> &mut [f64] {
        &mut self.samples
    }
    pub fn into_samples(self) -> Vec<f64> {
        self.samples
    }
    pub fn add_scalar(&mut self, offset: f64) {
        self.samples.iter_mut().for_each(|y| *y += offset);
    }
    pub fn scale(&mut self, factor: f64) {
        self.samples.iter_mut().for_each(|y| *y *= factor);
    }
    /// Adds `factor * other` resampled onto this grid.
    ///
    /// Only meant for near-identical acquisitions: fails without touching any
    /// sample when the two origins are more than one step apart.
    pub fn accumulate<W: Sampled + ?Sized>(&mut self, other: &W, factor: f64) -> Result<(), WaveError> {
        ensure_aligned(self.grid, other.grid())?;
        let grid = self.grid;
        for (index, y) in self.samples.iter_mut().enumerate() {
            *y += factor * other.point_value(grid.coordinate_of(index));
        }
        Ok(())
    }
}
pub(crate) fn check_len(grid: &Grid, actual: usize) -> Result<(), WaveError> {
    if actual != grid.size() {
        return Err(WaveError::SizeMismatch {
            expected: grid.size(),
            actual,
        });
    }
    Ok(())
}
impl Sampled for Waveform<'_> {
    fn grid(&self) -> &Grid {
        self.grid
    }
    fn samples(&self) -> &[f64] {
        &self.samples
    }
}
/// Unchecked access: panics when `index >= len()`. Use [`Waveform::at`] for
/// a recoverable error.
impl Index<usize> for Waveform<'_> {
    type Output = f64;
    fn index(&self, index: usize) -> &f64 {
        &self.samples[index]
    }
}
impl IndexMut<usize> for Waveform<'_> {
    fn index_mut(&mut self, index: usize) -> &mut f64 {
        &mut self.samples[index]
    }
}
impl AddAssign<f64> for Waveform<'_> {
    fn add_assign(&mut self, offset: f64) {
        self.add_scalar(offset);
    }
}
impl MulAssign<f64> for Waveform<'_> {
    fn mul_assign(&mut self, factor: f64) {
        self.scale(factor);
    }
}
