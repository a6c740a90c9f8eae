use std::fs;
use std::path::Path;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use crate::wave::{Grid, WaveError};
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    pub front: f64,
    pub step: f64,
    pub size: usize,
}
impl GridConfig {
    pub fn build(&self) -> Result<Grid, WaveError> {
        Grid::new(self.front, self.step, self.size)
    }
}
impl Default for GridConfig {
    fn default() -> Self {
        // 0 .. 10 in 0.05 steps, both ends included.
        GridConfig {
            front: 0.0,
            step: 0.05,
            size: 201,
        }
    }
}
/// Threshold and dead time handed to the peak scan.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PeakSearch {
    pub threshold: f64,
    pub dead_time: f64,
}
impl PeakSearch {
    pub fn new(threshold: f64, dead_time: f64) -> Self {
        Self {
            threshold,
            dead_time: dead_time.max(0.0),
        }
    }
}
impl Default for PeakSearch {
    fn default() -> Self {
        PeakSearch {
            threshold: 0.5,
            dead_time: 0.0,
        }
    }
}
/// Gaussian pulse on a flat baseline, repeated with a jittered center and
/// white noise on every sample.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub acquisitions: usize,
    /// Fixed seed for reproducible runs; entropy when absent.
    pub seed: Option<u64>,
    pub amplitude: f64,
    pub center: f64,
    pub width: f64,
    /// Standard deviation of the pulse center between acquisitions.
    pub jitter: f64,
    pub baseline: f64,
    /// Standard deviation of the per-sample noise.
    pub noise: f64,
}
impl Default for SimulationConfig {
    fn default() -> Self {
        SimulationConfig {
            acquisitions: 100,
            seed: Some(1),
            amplitude: 1.0,
            center: 5.0,
            width: 0.4,
            jitter: 0.02,
            baseline: 0.0,
            noise: 0.05,
        }
    }
}
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CampaignConfig {
    pub grid: GridConfig,
    pub peaks: PeakSearch,
    pub simulation: SimulationConfig,
    /// Samples whose magnitude exceeds this are left out of the average.
    pub saturation: Option<f64>,
}
impl CampaignConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let mut config: CampaignConfig =
            serde_json::from_str(json).context("invalid campaign config")?;
        config.peaks = PeakSearch::new(config.peaks.threshold, config.peaks.dead_time);
        Ok(config)
    }
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        Self::from_json_str(&text).with_context(|| format!("in {}", path.display()))
    }
}
#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn empty_json_gives_defaults() {
        let config = CampaignConfig::from_json_str("{}").unwrap();
        assert_eq!(config, CampaignConfig::default());
        let grid = config.grid.build().unwrap();
        assert_eq!(grid.size(), 201);
        assert!((grid.back() - 10.0).abs() < 1e-9);
    }
    #[test]
    fn partial_sections_keep_remaining_defaults() {
        let config = CampaignConfig::from_json_str(
            r#"{ "grid": { "size": 11, "step": 1.0 },
                 "peaks": { "threshold": 2.0, "dead_time": -1.0 },
                 "simulation": { "noise": 0.0 },
                 "saturation": 3.5 }"#,
        )
        .unwrap();
        assert_eq!(
            config.grid,
            GridConfig {
                front: 0.0,
                step: 1.0,
                size: 11
            }
        );
        assert_eq!(config.peaks, PeakSearch::new(2.0, 0.0));
        assert_eq!(config.simulation.noise, 0.0);
        assert_eq!(config.simulation.acquisitions, 100);
        assert_eq!(config.saturation, Some(3.5));
    }
    #[test]
    fn bad_grid_and_bad_json_are_reported() {
        let config = CampaignConfig::from_json_str(r#"{ "grid": { "size": 0 } }"#).unwrap();
        assert!(matches!(config.grid.build(), Err(WaveError::InvalidGrid(_))));
        assert!(CampaignConfig::from_json_str("{ grid: ").is_err());
        assert!(CampaignConfig::load("/nonexistent/wavestat.json").is_err());
    }
}
