use crate::wave::interp;
use crate::wave::{Grid, PeakScan, WaveError};
/// Read-only queries over a sample channel laid on a [`Grid`].
///
/// Implementors only expose the grid and the samples; interpolation,
/// extrema, integrals and the peak scan are shared.
pub trait Sampled {
    fn grid(&self) -> &Grid;
    fn samples(&self) -> &[f64];
    /// Linear interpolation at `x`; beyond either end the boundary segment is
    /// extended, never clamped.
    fn point_value(&self, x: f64) -> f64 {
        interp::interpolate(self.grid(), self.samples(), x)
    }
    /// Maximum (`want_max`) or minimum of the interpolated waveform over the
    /// closed interval `[x_start, x_end]`.
    fn extremum(&self, x_start: f64, x_end: f64, want_max: bool) -> Result<f64, WaveError> {
        interp::extremum(self.grid(), self.samples(), x_start, x_end, want_max)
    }
    fn maximum(&self, x_start: f64, x_end: f64) -> Result<f64, WaveError> {
        self.extremum(x_start, x_end, true)
    }
    fn minimum(&self, x_start: f64, x_end: f64) -> Result<f64, WaveError> {
        self.extremum(x_start, x_end, false)
    }
    /// Trapezoidal integral over `[x_start, x_end]`. Unlike [`Sampled::extremum`],
    /// an inverted interval is not an error: it integrates to `0`.
    fn integral(&self, x_start: f64, x_end: f64) -> f64 {
        interp::integrate(self.grid(), self.samples(), x_start, x_end)
    }
    /// Scan for runs strictly above `threshold`. `x_skip` is a dead time
    /// after each rising edge; negative values count as zero.
    fn search_peak(&self, threshold: f64, x_skip: f64) -> PeakScan<'_> {
        PeakScan::new(self.grid(), self.samples(), threshold, x_skip)
    }
}
/// Fails when `other` starts more than one step (of `own`) away from `own`.
pub(crate) fn ensure_aligned(own: &Grid, other: &Grid) -> Result<(), WaveError> {
    let difference = other.front() - own.front();
    let offset_steps = difference / own.step();
    if offset_steps.abs() > 1.0 {
        log::warn!(
            "refusing to combine waveforms: origins differ by {difference} ({offset_steps:.3} steps)"
        );
        return Err(WaveError::GridMisaligned {
            offset_steps,
            difference,
        });
    }
    Ok(())
}
