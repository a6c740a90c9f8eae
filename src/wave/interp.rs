// Piecewise-linear evaluation shared by every sample channel (values and
// uncertainties alike). All helpers work in index space and assume
// `values.len() == grid.size()`.
use crate::wave::{Grid, WaveError};
/// Value at a fractional index. Outside `[0, len-1]` the first or last
/// segment is extended without clamping.
pub(crate) fn value_at_index(values: &[f64], i: f64) -> f64 {
    let size = values.len();
    if size == 1 {
        return values[0];
    }
    let last = (size - 1) as f64;
    if i == 0.0 {
        return values[0];
    }
    if i == last {
        return values[size - 1];
    }
    let (ratio, left) = if i < 0.0 {
        (1.0 - i, 0)
    } else if i > last {
        (last - i, size - 2)
    } else {
        let ratio = i.ceil() - i;
        let left = i.floor() as usize;
        if ratio == 0.0 {
            return values[left];
        }
        (ratio, left)
    };
    ratio * values[left] + (1.0 - ratio) * values[left + 1]
}
/// Value at coordinate `x`. A coordinate that is exactly a grid point
/// returns its sample, even when `index_of` lands an ulp off the index.
pub(crate) fn interpolate(grid: &Grid, values: &[f64], x: f64) -> f64 {
    let i = grid.index_of(x);
    let nearest = i.round();
    if nearest >= 0.0 && nearest < values.len() as f64 {
        let k = nearest as usize;
        if grid.coordinate_of(k) == x {
            return values[k];
        }
    }
    value_at_index(values, i)
}
/// `ceil(i)` as an index clamped into `0..=upper`.
fn ceil_index(i: f64, upper: usize) -> usize {
    clamp_index(i.ceil(), upper)
}
fn floor_index(i: f64, upper: usize) -> usize {
    clamp_index(i.floor(), upper)
}
fn clamp_index(i: f64, upper: usize) -> usize {
    if i <= 0.0 {
        0
    } else if i >= upper as f64 {
        upper
    } else {
        i as usize
    }
}
/// Index-space bounds of `[x_start, x_end]`, low end first. A negative step
/// maps the coordinate interval onto a descending index interval.
fn index_bounds(grid: &Grid, x_start: f64, x_end: f64) -> (f64, f64) {
    let a = grid.index_of(x_start);
    let b = grid.index_of(x_end);
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}
pub(crate) fn extremum(
    grid: &Grid,
    values: &[f64],
    x_start: f64,
    x_end: f64,
    want_max: bool,
) -> Result<f64, WaveError> {
    if x_start > x_end {
        return Err(WaveError::InvalidInterval {
            start: x_start,
            end: x_end,
        });
    }
    let pick = |a: f64, b: f64| if want_max { a.max(b) } else { a.min(b) };
    let (a, b) = index_bounds(grid, x_start, x_end);
    let lo = ceil_index(a, values.len());
    let hi = ceil_index(b, values.len());
    let mut best = pick(value_at_index(values, a), value_at_index(values, b));
    if lo < hi {
        best = values[lo..hi].iter().copied().fold(best, pick);
    }
    Ok(best)
}
/// Trapezoidal integral of the interpolated waveform over `[x_start, x_end]`.
/// Inverted intervals integrate to zero.
pub(crate) fn integrate(grid: &Grid, values: &[f64], x_start: f64, x_end: f64) -> f64 {
    if x_end <= x_start {
        return 0.0;
    }
    let (a, b) = index_bounds(grid, x_start, x_end);
    let last = values.len() - 1;
    let first_inner = ceil_index(a, last);
    let last_inner = floor_index(b, last);
    let y_first = values[first_inner];
    let y_last = values[last_inner];
    // Partial trapezoids from `a` up to the first inner sample and from the
    // last inner sample to `b`, each minus the half-weight the interior sum
    // below assigns to its end sample.
    let head = (value_at_index(values, a) + y_first) * (first_inner as f64 - a) / 2.0 - y_first / 2.0;
    let tail = (y_last + value_at_index(values, b)) * (b - last_inner as f64) / 2.0 - y_last / 2.0;
    let interior: f64 = if first_inner <= last_inner {
        values[first_inner..=last_inner].iter().sum()
    } else {
        0.0
    };
    (head + tail + interior) * grid.step().abs()
}
#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn single_sample_is_constant() {
        assert_eq!(value_at_index(&[3.5], -4.0), 3.5);
        assert_eq!(value_at_index(&[3.5], 7.25), 3.5);
        let grid = Grid::new(0.0, 1.0, 1).unwrap();
        assert_eq!(integrate(&grid, &[2.0], -1.0, 3.0), 8.0);
        assert_eq!(extremum(&grid, &[2.0], -1.0, 3.0, true), Ok(2.0));
    }
    #[test]
    fn grid_points_exact_on_decimal_steps() {
        for (front, step) in [(-3.0, 0.1), (0.0, 0.05), (1.0, 0.3)] {
            let grid = Grid::new(front, step, 50).unwrap();
            let values: Vec<f64> = (0..50).map(|k| (k * 13 % 50) as f64).collect();
            for (k, expected) in values.iter().enumerate() {
                assert_eq!(
                    interpolate(&grid, &values, grid.coordinate_of(k)),
                    *expected,
                    "front={front} step={step} index={k}"
                );
            }
        }
    }
    #[test]
    fn end_samples_ignore_non_finite_neighbours() {
        let values = [1.0, f64::INFINITY, f64::NAN, 4.0];
        assert_eq!(value_at_index(&values, 0.0), 1.0);
        assert_eq!(value_at_index(&values, 3.0), 4.0);
        let grid = Grid::new(0.0, 0.1, 4).unwrap();
        assert_eq!(interpolate(&grid, &values, 0.0), 1.0);
        assert_eq!(interpolate(&grid, &values, grid.coordinate_of(3)), 4.0);
    }
    #[test]
    fn clamp_index_saturates() {
        assert_eq!(clamp_index(-3.0, 4), 0);
        assert_eq!(clamp_index(2.0, 4), 2);
        assert_eq!(clamp_index(9.0, 4), 4);
    }
    #[test]
    fn integral_within_one_cell() {
        // y = x on [0, 1]: integral from 0.25 to 0.75 is 0.25.
        let grid = Grid::new(0.0, 1.0, 2).unwrap();
        let got = integrate(&grid, &[0.0, 1.0], 0.25, 0.75);
        assert!((got - 0.25).abs() < 1e-12);
    }
}
