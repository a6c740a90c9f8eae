//! Sampled waveforms on uniform grids.
//!
//! A [`Grid`] maps indices to evenly spaced coordinates. [`Waveform`] and
//! [`WaveformWithUncertainty`] borrow a grid and answer interpolation,
//! extremum, integral and peak queries through the [`Sampled`] trait.
//! [`WaveformAccumulator`] averages repeated acquisitions online, and the
//! [`acquisition`] module pumps a source of acquisitions into one.
pub mod acquisition;
pub mod config;
pub mod wave;
pub use acquisition::{AcquisitionSource, Campaign, ManualSource, SimulatedPulses};
pub use config::{CampaignConfig, GridConfig, PeakSearch, SimulationConfig};
pub use wave::{
    Grid, Peak, PeakScan, Sampled, WaveError, Waveform, WaveformAccumulator,
    WaveformWithUncertainty,
};
