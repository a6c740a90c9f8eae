// src/main.rs
use anyhow::{Context, Result};
use wavestat::{Campaign, CampaignConfig, Sampled, SimulatedPulses};
// Usage: wavestat [config.json]
fn main() -> Result<()> {
    env_logger::init();
    let config = match std::env::args().nth(1) {
        Some(path) => CampaignConfig::load(&path)?,
        None => {
            log::info!("no config given, using built-in defaults");
            CampaignConfig::default()
        }
    };
    let grid = config.grid.build().context("bad grid settings")?;
    let source = SimulatedPulses::new(config.simulation.clone())?;
    let mut campaign = Campaign::new(&grid, source);
    if let Some(limit) = config.saturation {
        campaign = campaign.with_saturation(limit);
    }
    let taken = campaign.run(config.simulation.acquisitions)?;
    log::info!("accumulated {taken} acquisitions on {} points", grid.size());
    let summary = campaign
        .summary()
        .context("not enough acquisitions for a summary")?;
    let (lo, hi) = if grid.step() > 0.0 {
        (grid.front(), grid.back())
    } else {
        (grid.back(), grid.front())
    };
    println!("acquisitions : {taken}");
    println!("range        : [{lo:.4}, {hi:.4}]");
    println!("maximum      : {:.6}", summary.maximum(lo, hi)?);
    println!("minimum      : {:.6}", summary.minimum(lo, hi)?);
    println!("integral     : {:.6}", summary.integral(lo, hi));
    let peaks: Vec<_> = summary
        .search_peak(config.peaks.threshold, config.peaks.dead_time)
        .collect();
    println!(
        "peaks above {} (dead time {}): {}",
        config.peaks.threshold,
        config.peaks.dead_time,
        peaks.len()
    );
    for (n, peak) in peaks.iter().enumerate() {
        println!(
            "  #{n}: {:.6} +/- {:.6} at x={:.4}, crossings [{:.4}, {:.4}], area {:.6}",
            peak.peak_value,
            summary.point_error(peak.x_peak),
            peak.x_peak,
            peak.x_start,
            peak.x_end,
            summary.integral(peak.x_start.min(peak.x_end), peak.x_start.max(peak.x_end))
        );
    }
    Ok(())
}
