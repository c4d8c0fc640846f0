use std::fmt;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use log::{debug, info};

use crate::config::Config;
use crate::data::band::{select_band, BandSelection};
use crate::data::loader::{load_emissivity, load_wavelengths};
use crate::error::IsrfError;
use crate::habing::{habing_ratios, HabingSummary};
use crate::integrate::MIN_SAMPLES;

// ---------------------------------------------------------------------------
// Run report
// ---------------------------------------------------------------------------

/// Everything a run produced, independent of how it is displayed.
#[derive(Debug, Clone)]
pub struct HabingReport {
    /// Bands integrated for every cell.
    pub band: BandSelection,
    /// G/G0 per accepted emissivity row, in file order.
    pub ratios: Vec<f64>,
    /// Malformed emissivity lines dropped by the loader.
    pub skipped_emissivity_rows: usize,
    /// Malformed wavelength lines dropped by the loader.
    pub skipped_wavelength_rows: usize,
    /// Wall time of the whole run.
    pub elapsed: Duration,
}

impl HabingReport {
    pub fn summary(&self) -> Option<HabingSummary> {
        HabingSummary::from_ratios(&self.ratios)
    }
}

impl fmt::Display for HabingReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Habing band [{:.6}, {:.6}] µm – {} wavelength(s) integrated",
            self.band.lambda_min,
            self.band.lambda_max,
            self.band.len()
        )?;
        match self.summary() {
            Some(summary) => writeln!(f, "{summary}")?,
            None => writeln!(f, "  No emissivity rows")?,
        }
        if self.skipped_emissivity_rows + self.skipped_wavelength_rows > 0 {
            writeln!(
                f,
                "  Skipped rows: {} emissivity, {} wavelength",
                self.skipped_emissivity_rows, self.skipped_wavelength_rows
            )?;
        }
        writeln!(
            f,
            "  First 10 values: {:?}",
            self.ratios.iter().take(10).collect::<Vec<&f64>>()
        )?;
        write!(f, "Time it took for data to run is: {:.6} s", self.elapsed.as_secs_f64())
    }
}

// ---------------------------------------------------------------------------
// Pipeline
// ---------------------------------------------------------------------------

/// Load both tables, select the configured band and compute G/G0 per cell.
pub fn run(config: &Config) -> Result<HabingReport> {
    let start = Instant::now();

    let emissivity = load_emissivity(&config.emissivity_path)?;
    let wavelengths = load_wavelengths(&config.wavelength_path)?;
    info!(
        "Loaded {} emissivity row(s) and {} wavelength row(s)",
        emissivity.len(),
        wavelengths.len()
    );
    debug!(
        "Emissivity table, first {} row(s):\n{}",
        config.preview_rows,
        emissivity.preview(config.preview_rows)
    );
    debug!("Wavelength table:\n{}", wavelengths.preview(wavelengths.len()));

    let (lambda_min, lambda_max) = config.band_limits();
    info!(
        "Band {} – {} eV → [{lambda_min:.6}, {lambda_max:.6}] µm",
        config.band.min_ev, config.band.max_ev
    );

    let band = select_band(lambda_min, lambda_max, &wavelengths);
    if band.len() < MIN_SAMPLES {
        return Err(IsrfError::InsufficientSamples { found: band.len() }).with_context(|| {
            format!("[{lambda_min:.6}, {lambda_max:.6}] µm selects too few wavelength bands")
        });
    }
    debug!("Selected (wavelength, column): {:?}", band.iter().collect::<Vec<_>>());

    let ratios = habing_ratios(&emissivity, &band).with_context(|| {
        format!(
            "integrating {} band(s) from {}",
            band.len(),
            config.wavelength_path.display()
        )
    })?;

    Ok(HabingReport {
        band,
        ratios,
        skipped_emissivity_rows: emissivity.skipped_rows,
        skipped_wavelength_rows: wavelengths.skipped_rows,
        elapsed: start.elapsed(),
    })
}
