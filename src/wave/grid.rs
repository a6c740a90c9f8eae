use crate::wave::WaveError;
/// Uniformly spaced coordinates `front + i * step` for `i` in `0..size`.
///
/// Waveforms borrow a grid instead of owning one, so a single grid can be
/// shared by every acquisition of a campaign.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Grid {
    front: f64,
    step: f64,
    size: usize,
}
impl Grid {
    pub fn new(front: f64, step: f64, size: usize) -> Result<Self, WaveError> {
        if size == 0 {
            return Err(WaveError::InvalidGrid("size must be positive".into()));
        }
        if !front.is_finite() {
            return Err(WaveError::InvalidGrid(format!(
                "front must be finite, got {front}"
            )));
        }
        if !step.is_finite() || step == 0.0 {
            return Err(WaveError::InvalidGrid(format!(
                "step must be finite and non-zero, got {step}"
            )));
        }
        Ok(Self { front, step, size })
    }
    /// Grid spanning `front..back`. With `with_end` the last point lands on
    /// `back`; otherwise `back` is one step past the last point.
    pub fn linspace(front: f64, back: f64, size: usize, with_end: bool) -> Result<Self, WaveError> {
        if size == 0 {
            return Err(WaveError::InvalidGrid("size must be positive".into()));
        }
        if front >= back {
            return Err(WaveError::InvalidGrid(format!(
                "front ({front}) must be less than back ({back})"
            )));
        }
        if with_end && size == 1 {
            return Err(WaveError::InvalidGrid(
                "an end-inclusive grid needs at least two points".into(),
            ));
        }
        let step = if with_end {
            (back - front) / (size - 1) as f64
        } else {
            (back - front) / size as f64
        };
        Self::new(front, step, size)
    }
    pub fn front(&self) -> f64 {
        self.front
    }
    pub fn step(&self) -> f64 {
        self.step
    }
    pub fn size(&self) -> usize {
        self.size
    }
    /// Coordinate of the last grid point.
    pub fn back(&self) -> f64 {
        self.coordinate_of(self.size - 1)
    }
    /// Coordinate of `index`; indices past the end follow the same line.
    pub fn coordinate_of(&self, index: usize) -> f64 {
        self.front + index as f64 * self.step
    }
    pub fn coordinate_at(&self, index: usize) -> Result<f64, WaveError> {
        if index >= self.size {
            return Err(WaveError::IndexOutOfRange {
                index,
                size: self.size,
            });
        }
        Ok(self.coordinate_of(index))
    }
    /// Fractional index of `x`. Not clamped.
    pub fn index_of(&self, x: f64) -> f64 {
        (x - self.front) / self.step
    }
    pub fn in_range(&self, x: f64) -> bool {
        let i = self.index_of(x);
        0.0 <= i && i <= (self.size - 1) as f64
    }
    pub fn coordinates(&self) -> impl Iterator<Item = f64> + '_ {
        (0..self.size).map(move |i| self.coordinate_of(i))
    }
    pub fn to_vec(&self) -> Vec<f64> {
        self.coordinates().collect()
    }
}
