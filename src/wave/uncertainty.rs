use std::ops::{AddAssign, MulAssign};
use crate::wave::interp;
use crate::wave::sampled::ensure_aligned;
use crate::wave::waveform::check_len;
use crate::wave::{Grid, Sampled, WaveError, Waveform};
/// Waveform carrying a one-sigma uncertainty per sample.
///
/// Errors are taken as given; nothing checks that they are non-negative.
#[derive(Clone, Debug, PartialEq)]
pub struct WaveformWithUncertainty<'g> {
    wave: Waveform<'g>,
    errors: Vec<f64>,
}
impl<'g> WaveformWithUncertainty<'g> {
    pub fn new(grid: &'g Grid) -> Self {
        Self {
            wave: Waveform::new(grid),
            errors: vec![0.0; grid.size()],
        }
    }
    /// Samples with zero uncertainty.
    pub fn from_samples(grid: &'g Grid, samples: Vec<f64>) -> Result<Self, WaveError> {
        let wave = Waveform::from_samples(grid, samples)?;
        Ok(Self {
            wave,
            errors: vec![0.0; grid.size()],
        })
    }
    pub fn from_parts(grid: &'g Grid, samples: Vec<f64>, errors: Vec<f64>) -> Result<Self, WaveError> {
        let wave = Waveform::from_samples(grid, samples)?;
        check_len(grid, errors.len())?;
        Ok(Self { wave, errors })
    }
    pub fn grid(&self) -> &'g Grid {
        self.wave.grid()
    }
    pub fn len(&self) -> usize {
        self.wave.len()
    }
    pub fn is_empty(&self) -> bool {
        self.wave.is_empty()
    }
    pub fn waveform(&self) -> &Waveform<'g> {
        &self.wave
    }
    pub fn waveform_mut(&mut self) -> &mut Waveform<'g> {
        &mut self.wave
    }
    /// Drops the uncertainties.
    pub fn into_waveform(self) -> Waveform<'g> {
        self.wave
    }
    pub fn at(&self, index: usize) -> Result<f64, WaveError> {
        self.wave.at(index)
    }
    pub fn set(&mut self, index: usize, value: f64) -> Result<(), WaveError> {
        self.wave.set(index, value)
    }
    pub fn error_at(&self, index: usize) -> Result<f64, WaveError> {
        self.errors
            .get(index)
            .copied()
            .ok_or(WaveError::IndexOutOfRange {
                index,
                size: self.errors.len(),
            })
    }
    pub fn set_error(&mut self, index: usize, error: f64) -> Result<(), WaveError> {
        let size = self.errors.len();
        let slot = self
            .errors
            .get_mut(index)
            .ok_or(WaveError::IndexOutOfRange { index, size })?;
        *slot = error;
        Ok(())
    }
    pub fn errors(&self) -> &[f64] {
        &self.errors
    }
    /// Unchecked error access: indexing panics past the end.
    pub fn errors_mut(&mut self) -> &mut [f64] {
        &mut self.errors
    }
    /// Uncertainty at `x`, interpolated exactly like [`Sampled::point_value`].
    pub fn point_error(&self, x: f64) -> f64 {
        interp::interpolate(self.wave.grid(), &self.errors, x)
    }
    /// Shifts the samples; uncertainties are unchanged.
    pub fn add_scalar(&mut self, offset: f64) {
        self.wave.add_scalar(offset);
    }
    /// Scales samples and uncertainties together.
    pub fn scale(&mut self, factor: f64) {
        self.wave.scale(factor);
        self.errors.iter_mut().for_each(|e| *e *= factor);
    }
    /// Adds `factor * other` and combines uncertainties in quadrature,
    /// assuming the two are independent.
    pub fn accumulate(&mut self, other: &WaveformWithUncertainty<'_>, factor: f64) -> Result<(), WaveError> {
        let grid = self.wave.grid();
        ensure_aligned(grid, other.grid())?;
        let samples = self.wave.as_mut_slice();
        for (index, (y, err)) in samples.iter_mut().zip(self.errors.iter_mut()).enumerate() {
            let x = grid.coordinate_of(index);
            *y += factor * other.point_value(x);
            let added = factor * other.point_error(x);
            *err = (*err * *err + added * added).sqrt();
        }
        Ok(())
    }
}
impl Sampled for WaveformWithUncertainty<'_> {
    fn grid(&self) -> &Grid {
        self.wave.grid()
    }
    fn samples(&self) -> &[f64] {
        self.wave.as_slice()
    }
}
impl<'g> From<Waveform<'g>> for WaveformWithUncertainty<'g> {
    fn from(wave: Waveform<'g>) -> Self {
        let errors = vec![0.0; wave.len()];
        Self { wave, errors }
    }
}
impl AddAssign<f64> for WaveformWithUncertainty<'_> {
    fn add_assign(&mut self, offset: f64) {
        self.add_scalar(offset);
    }
}
impl MulAssign<f64> for WaveformWithUncertainty<'_> {
    fn mul_assign(&mut self, factor: f64) {
        self.scale(factor);
    }
}
