use crate::wave::{Grid, Sampled, WaveError, WaveformWithUncertainty};
/// Running sum and sum of squares over repeated acquisitions on one grid.
///
/// `count` is the number of [`push`](Self::push) calls, regardless of how
/// many indices each call let through its predicate; [`write`](Self::write)
/// divides every index by that single count.
#[derive(Debug)]
pub struct WaveformAccumulator<'g> {
    grid: &'g Grid,
    count: usize,
    sum: Vec<f64>,
    sum_of_squares: Vec<f64>,
}
impl<'g> WaveformAccumulator<'g> {
    pub fn new(grid: &'g Grid) -> Self {
        Self {
            grid,
            count: 0,
            sum: vec![0.0; grid.size()],
            sum_of_squares: vec![0.0; grid.size()],
        }
    }
    pub fn grid(&self) -> &'g Grid {
        self.grid
    }
    pub fn count(&self) -> usize {
        self.count
    }
    /// Resamples `wave` onto this grid and adds every value for which
    /// `include(index, value)` holds.
    pub fn push<W, F>(&mut self, wave: &W, mut include: F)
    where
        W: Sampled + ?Sized,
        F: FnMut(usize, f64) -> bool,
    {
        let grid = self.grid;
        let slots = self.sum.iter_mut().zip(self.sum_of_squares.iter_mut());
        for (index, (sum, sum_sq)) in slots.enumerate() {
            let value = wave.point_value(grid.coordinate_of(index));
            if include(index, value) {
                *sum += value;
                *sum_sq += value * value;
            }
        }
        self.count += 1;
    }
    pub fn push_all<W: Sampled + ?Sized>(&mut self, wave: &W) {
        self.push(wave, |_, _| true);
    }
    /// Mean and Bessel-corrected standard deviation of everything pushed so
    /// far. Needs at least two pushes; the accumulator is left as is.
    pub fn write(&self) -> Result<WaveformWithUncertainty<'g>, WaveError> {
        if self.count < 2 {
            return Err(WaveError::InsufficientObservations { count: self.count });
        }
        let n = self.count as f64;
        let mut means = Vec::with_capacity(self.sum.len());
        let mut std_devs = Vec::with_capacity(self.sum.len());
        for (&sum, &sum_sq) in self.sum.iter().zip(&self.sum_of_squares) {
            let mean = sum / n;
            // Cancellation can push an exact zero slightly negative; NaN stays NaN.
            let variance = (sum_sq - n * mean * mean) / (n - 1.0);
            let variance = if variance < 0.0 { 0.0 } else { variance };
            means.push(mean);
            std_devs.push(variance.sqrt());
        }
        log::debug!(
            "accumulator snapshot over {} acquisitions ({} points)",
            self.count,
            self.grid.size()
        );
        WaveformWithUncertainty::from_parts(self.grid, means, std_devs)
    }
    /// Forgets every acquisition.
    pub fn clear(&mut self) {
        self.count = 0;
        self.sum.iter_mut().for_each(|v| *v = 0.0);
        self.sum_of_squares.iter_mut().for_each(|v| *v = 0.0);
    }
}
#[cfg(test)]
mod tests {
    use super::*;
    use crate::wave::Waveform;
    #[test]
    fn constant_acquisitions_converge() {
        let grid = Grid::new(0.0, 0.5, 6).unwrap();
        let wave = Waveform::from_samples(&grid, vec![5.0; 6]).unwrap();
        let mut acc = WaveformAccumulator::new(&grid);
        for _ in 0..10 {
            acc.push(&wave, |_, _| true);
        }
        assert_eq!(acc.count(), 10);
        let summary = acc.write().unwrap();
        assert_eq!(summary.waveform().as_slice(), &[5.0; 6]);
        assert_eq!(summary.errors(), &[0.0; 6]);
    }
    #[test]
    fn mean_and_sample_deviation() {
        let grid = Grid::new(0.0, 1.0, 2).unwrap();
        let mut acc = WaveformAccumulator::new(&grid);
        for values in [[1.0, 10.0], [2.0, 10.0], [3.0, 10.0], [6.0, 10.0]] {
            let wave = Waveform::from_samples(&grid, values.to_vec()).unwrap();
            acc.push_all(&wave);
        }
        let summary = acc.write().unwrap();
        assert_eq!(summary.at(0), Ok(3.0));
        assert_eq!(summary.at(1), Ok(10.0));
        // Sample variance of 1, 2, 3, 6 is 14 / 3.
        assert!((summary.error_at(0).unwrap() - (14.0f64 / 3.0).sqrt()).abs() < 1e-12);
        assert_eq!(summary.error_at(1), Ok(0.0));
    }
    #[test]
    fn write_needs_two_observations() {
        let grid = Grid::new(0.0, 1.0, 3).unwrap();
        let wave = Waveform::new(&grid);
        let mut acc = WaveformAccumulator::new(&grid);
        assert_eq!(
            acc.write(),
            Err(WaveError::InsufficientObservations { count: 0 })
        );
        acc.push_all(&wave);
        assert_eq!(
            acc.write(),
            Err(WaveError::InsufficientObservations { count: 1 })
        );
        acc.push_all(&wave);
        assert!(acc.write().is_ok());
    }
    #[test]
    fn write_is_repeatable_and_tracks_new_data() {
        let grid = Grid::new(0.0, 1.0, 2).unwrap();
        let mut acc = WaveformAccumulator::new(&grid);
        let low = Waveform::from_samples(&grid, vec![0.0, 0.0]).unwrap();
        let high = Waveform::from_samples(&grid, vec![4.0, 4.0]).unwrap();
        acc.push_all(&low);
        acc.push_all(&high);
        let first = acc.write().unwrap();
        assert_eq!(first, acc.write().unwrap());
        assert_eq!(first.at(0), Ok(2.0));
        acc.push_all(&high);
        acc.push_all(&high);
        assert_eq!(acc.write().unwrap().at(0), Ok(3.0));
        acc.clear();
        assert_eq!(acc.count(), 0);
        assert!(acc.write().is_err());
    }
    #[test]
    fn predicate_filters_per_index_but_count_is_global() {
        let grid = Grid::new(0.0, 1.0, 3).unwrap();
        let mut acc = WaveformAccumulator::new(&grid);
        let wave = Waveform::from_samples(&grid, vec![2.0, -2.0, 2.0]).unwrap();
        let mut seen = Vec::new();
        acc.push(&wave, |index, value| {
            seen.push(index);
            value > 0.0
        });
        acc.push(&wave, |_, value| value > 0.0);
        assert_eq!(seen, vec![0, 1, 2]);
        assert_eq!(acc.count(), 2);
        let summary = acc.write().unwrap();
        assert_eq!(summary.waveform().as_slice(), &[2.0, 0.0, 2.0]);
    }
    #[test]
    fn non_finite_observations_keep_nan_deviation() {
        let grid = Grid::new(0.0, 1.0, 2).unwrap();
        let mut acc = WaveformAccumulator::new(&grid);
        acc.push_all(&Waveform::from_samples(&grid, vec![1.0, f64::INFINITY]).unwrap());
        acc.push_all(&Waveform::from_samples(&grid, vec![f64::NAN, 2.0]).unwrap());
        let summary = acc.write().unwrap();
        assert!(summary.at(0).unwrap().is_nan());
        assert!(summary.error_at(0).unwrap().is_nan());
        assert!(summary.error_at(1).unwrap().is_nan());
    }
    #[test]
    fn push_resamples_onto_own_grid() {
        let grid = Grid::new(0.0, 1.0, 3).unwrap();
        let shifted = Grid::new(0.5, 1.0, 3).unwrap();
        // y = x on the shifted grid.
        let wave = Waveform::from_samples(&shifted, vec![0.5, 1.5, 2.5]).unwrap();
        let mut acc = WaveformAccumulator::new(&grid);
        acc.push_all(&wave);
        acc.push_all(&wave);
        let summary = acc.write().unwrap();
        assert_eq!(summary.waveform().as_slice(), &[0.0, 1.0, 2.0]);
    }
}
