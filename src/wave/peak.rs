use crate::wave::Grid;
/// One above-threshold excursion found by [`PeakScan`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Peak {
    /// Rising threshold crossing (or the grid front for a run that starts at
    /// the first sample).
    pub x_start: f64,
    /// Coordinate of the largest sample in the run.
    pub x_peak: f64,
    /// Falling threshold crossing.
    pub x_end: f64,
    pub peak_value: f64,
}
impl Peak {
    /// Distance between the two threshold crossings.
    pub fn width(&self) -> f64 {
        (self.x_end - self.x_start).abs()
    }
}
#[derive(Clone, Copy, Debug)]
struct Run {
    x_start: f64,
    peak_index: usize,
    peak_value: f64,
    last_above: usize,
}
/// Forward scan over a sample channel yielding one [`Peak`] per closed
/// above-threshold run.
///
/// A sample at or below the threshold only ends the current run once it lies
/// at least `x_skip` away from the run's start; closer dips are absorbed into
/// the run. A run still open at the last sample yields nothing.
#[derive(Clone, Debug)]
pub struct PeakScan<'a> {
    grid: &'a Grid,
    values: &'a [f64],
    threshold: f64,
    x_skip: f64,
    index: usize,
    run: Option<Run>,
}
impl<'a> PeakScan<'a> {
    pub(crate) fn new(grid: &'a Grid, values: &'a [f64], threshold: f64, x_skip: f64) -> Self {
        Self {
            grid,
            values,
            threshold,
            x_skip: x_skip.max(0.0),
            index: 0,
            run: None,
        }
    }
    /// Coordinate where the line through samples `lo` and `lo + 1` meets the
    /// threshold. The two samples must straddle it.
    fn crossing(&self, lo: usize) -> f64 {
        let y_lo = self.values[lo];
        let y_hi = self.values[lo + 1];
        self.grid.coordinate_of(lo + 1) - (y_hi - self.threshold) / (y_hi - y_lo) * self.grid.step()
    }
}
impl Iterator for PeakScan<'_> {
    type Item = Peak;
    fn next(&mut self) -> Option<Peak> {
        while self.index < self.values.len() {
            let index = self.index;
            self.index += 1;
            let y = self.values[index];
            if y > self.threshold {
                match self.run.as_mut() {
                    Some(run) => {
                        run.last_above = index;
                        if y > run.peak_value {
                            run.peak_index = index;
                            run.peak_value = y;
                        }
                    }
                    None => {
                        let x_start = if index == 0 {
                            self.grid.front()
                        } else {
                            self.crossing(index - 1)
                        };
                        self.run = Some(Run {
                            x_start,
                            peak_index: index,
                            peak_value: y,
                            last_above: index,
                        });
                    }
                }
                continue;
            }
            let Some(run) = self.run else {
                continue;
            };
            let x = self.grid.coordinate_of(index);
            if (x - run.x_start).abs() < self.x_skip {
                continue;
            }
            self.run = None;
            let peak = Peak {
                x_start: run.x_start,
                x_peak: self.grid.coordinate_of(run.peak_index),
                x_end: self.crossing(run.last_above),
                peak_value: run.peak_value,
            };
            log::trace!(
                "peak {:.4} at x={:.4} over [{:.4}, {:.4}]",
                peak.peak_value,
                peak.x_peak,
                peak.x_start,
                peak.x_end
            );
            return Some(peak);
        }
        None
    }
}
