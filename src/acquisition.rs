use std::collections::VecDeque;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Normal};
use crate::config::SimulationConfig;
use crate::wave::{Grid, WaveError, Waveform, WaveformAccumulator, WaveformWithUncertainty};
/// Something that can produce one acquisition's samples on demand.
pub trait AcquisitionSource {
    /// Samples for `grid`, or `None` once the source is exhausted.
    fn next_acquisition(&mut self, grid: &Grid) -> Result<Option<Vec<f64>>, WaveError>;
}
/// Replays a fixed list of recorded acquisitions in order, then runs dry.
pub struct ManualSource {
    queue: VecDeque<Vec<f64>>,
}
impl ManualSource {
    pub fn new(acquisitions: impl IntoIterator<Item = Vec<f64>>) -> Self {
        Self {
            queue: acquisitions.into_iter().collect(),
        }
    }
}
impl AcquisitionSource for ManualSource {
    fn next_acquisition(&mut self, _grid: &Grid) -> Result<Option<Vec<f64>>, WaveError> {
        Ok(self.queue.pop_front())
    }
}
/// Endless stream of noisy Gaussian pulses.
pub struct SimulatedPulses {
    config: SimulationConfig,
    rng: StdRng,
    jitter: Normal<f64>,
    noise: Normal<f64>,
}
impl SimulatedPulses {
    pub fn new(config: SimulationConfig) -> Result<Self, WaveError> {
        if config.width.is_nan() || config.width <= 0.0 {
            return Err(WaveError::Simulation(format!(
                "pulse width must be positive, got {}",
                config.width
            )));
        }
        let jitter = Normal::new(0.0, config.jitter)
            .map_err(|e| WaveError::Simulation(format!("jitter: {e}")))?;
        let noise = Normal::new(0.0, config.noise)
            .map_err(|e| WaveError::Simulation(format!("noise: {e}")))?;
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Ok(Self {
            config,
            rng,
            jitter,
            noise,
        })
    }
}
impl AcquisitionSource for SimulatedPulses {
    fn next_acquisition(&mut self, grid: &Grid) -> Result<Option<Vec<f64>>, WaveError> {
        let cfg = &self.config;
        let center = cfg.center + self.jitter.sample(&mut self.rng);
        let samples = grid
            .coordinates()
            .map(|x| {
                let z = (x - center) / cfg.width;
                cfg.baseline + cfg.amplitude * (-0.5 * z * z).exp() + self.noise.sample(&mut self.rng)
            })
            .collect();
        Ok(Some(samples))
    }
}
/// Pumps a source into an accumulator over a shared grid.
pub struct Campaign<'g, S: AcquisitionSource> {
    source: S,
    accumulator: WaveformAccumulator<'g>,
    saturation: Option<f64>,
}
impl<'g, S: AcquisitionSource> Campaign<'g, S> {
    pub fn new(grid: &'g Grid, source: S) -> Self {
        Self {
            source,
            accumulator: WaveformAccumulator::new(grid),
            saturation: None,
        }
    }
    /// Leave samples with `|value| > limit` out of the running sums.
    pub fn with_saturation(mut self, limit: f64) -> Self {
        self.saturation = Some(limit);
        self
    }
    pub fn accumulator(&self) -> &WaveformAccumulator<'g> {
        &self.accumulator
    }
    /// Takes one acquisition from the source and accumulates it.
    pub fn pump_once(&mut self) -> Result<Option<Waveform<'g>>, WaveError> {
        let grid = self.accumulator.grid();
        let Some(samples) = self.source.next_acquisition(grid)? else {
            return Ok(None);
        };
        let wave = Waveform::from_samples(grid, samples)?;
        match self.saturation {
            Some(limit) => self.accumulator.push(&wave, |_, v| v.abs() <= limit),
            None => self.accumulator.push_all(&wave),
        }
        Ok(Some(wave))
    }
    /// Pumps until `limit` acquisitions were taken or the source runs dry.
    /// Returns how many were taken.
    pub fn run(&mut self, limit: usize) -> Result<usize, WaveError> {
        let mut taken = 0;
        while taken < limit {
            if self.pump_once()?.is_none() {
                break;
            }
            taken += 1;
        }
        log::debug!(
            "campaign took {taken} acquisitions ({} total)",
            self.accumulator.count()
        );
        Ok(taken)
    }
    pub fn summary(&self) -> Result<WaveformWithUncertainty<'g>, WaveError> {
        self.accumulator.write()
    }
}
