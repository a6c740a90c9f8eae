use thiserror::Error;
#[derive(Debug, Error, Clone, PartialEq)]
pub enum WaveError {
    #[error("sample count mismatch: grid has {expected} points, got {actual}")]
    SizeMismatch { expected: usize, actual: usize },
    #[error("index {index} out of range for {size} samples")]
    IndexOutOfRange { index: usize, size: usize },
    #[error(
        "grids are too far apart to combine: origins differ by {difference} ({offset_steps} steps)"
    )]
    GridMisaligned { offset_steps: f64, difference: f64 },
    #[error("interval start {start} must not exceed end {end}")]
    InvalidInterval { start: f64, end: f64 },
    #[error("need at least two observations for a standard deviation, have {count}")]
    InsufficientObservations { count: usize },
    #[error("invalid grid: {0}")]
    InvalidGrid(String),
    #[error("invalid simulation settings: {0}")]
    Simulation(String),
}
