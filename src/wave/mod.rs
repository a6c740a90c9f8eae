// src/wave/mod.rs
pub mod accumulator;
pub mod error;
pub mod grid;
mod interp;
pub mod peak;
pub mod sampled;
pub mod uncertainty;
pub mod waveform;
pub use accumulator::WaveformAccumulator;
pub use error::WaveError;
pub use grid::Grid;
pub use peak::{Peak, PeakScan};
pub use sampled::Sampled;
pub use uncertainty::WaveformWithUncertainty;
pub use waveform::Waveform;
