use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use structopt::StructOpt;
use thiserror::Error;

use crate::physics::{self, HABING_MAX_EV, HABING_MIN_EV};

pub const DEFAULT_EMISSIVITY_PATH: &str = "FB15N1024_gal5_z0_grid_radiationField_J.dat";
pub const DEFAULT_WAVELENGTH_PATH: &str = "FB15N1024_gal5_z0_grid_radiationField_wavelengths.dat";
pub const DEFAULT_PREVIEW_ROWS: usize = 10;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("energy band must satisfy 0 < min_ev < max_ev, got [{min_ev}, {max_ev}] eV")]
    EnergyRange { min_ev: f64, max_ev: f64 },
}

// ---------------------------------------------------------------------------
// Command line
// ---------------------------------------------------------------------------

#[derive(Debug, Default, StructOpt)]
#[structopt(
    name = "habing-isrf",
    about = "Interstellar radiation field in Habing units per grid cell"
)]
pub struct Opt {
    /// JSON configuration file
    #[structopt(short, long, parse(from_os_str))]
    pub config: Option<PathBuf>,
    /// Emissivity table (11 columns: cell id + 10 bands)
    #[structopt(short, long, parse(from_os_str))]
    pub emissivity: Option<PathBuf>,
    /// Wavelength table (4 columns, first is the wavelength in micron)
    #[structopt(short, long, parse(from_os_str))]
    pub wavelengths: Option<PathBuf>,
    /// Lower edge of the energy band [eV]
    #[structopt(long)]
    pub min_ev: Option<f64>,
    /// Upper edge of the energy band [eV]
    #[structopt(long)]
    pub max_ev: Option<f64>,
    /// Number of table rows logged at debug level
    #[structopt(long)]
    pub preview_rows: Option<usize>,
    /// Log at debug level unless RUST_LOG says otherwise
    #[structopt(short, long)]
    pub verbose: bool,
}

// ---------------------------------------------------------------------------
// Config
// ---------------------------------------------------------------------------

/// Photon energy band [eV].
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct EnergyBand {
    pub min_ev: f64,
    pub max_ev: f64,
}

impl Default for EnergyBand {
    fn default() -> Self {
        Self {
            min_ev: HABING_MIN_EV,
            max_ev: HABING_MAX_EV,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub emissivity_path: PathBuf,
    pub wavelength_path: PathBuf,
    pub band: EnergyBand,
    pub preview_rows: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            emissivity_path: PathBuf::from(DEFAULT_EMISSIVITY_PATH),
            wavelength_path: PathBuf::from(DEFAULT_WAVELENGTH_PATH),
            band: EnergyBand::default(),
            preview_rows: DEFAULT_PREVIEW_ROWS,
        }
    }
}

impl Config {
    /// Read a JSON configuration; missing fields keep their defaults.
    /// The band is checked by [`Config::from_opt`] once overrides are applied.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);

        let config: Config = serde_json::from_reader(reader)?;
        Ok(config)
    }

    /// Defaults, then the `--config` file if given, then command line overrides.
    pub fn from_opt(opt: &Opt) -> Result<Config, ConfigError> {
        let mut config = match &opt.config {
            Some(path) => Config::from_file(path)?,
            None => Config::default(),
        };

        if let Some(path) = &opt.emissivity {
            config.emissivity_path = path.clone();
        }
        if let Some(path) = &opt.wavelengths {
            config.wavelength_path = path.clone();
        }
        if let Some(min_ev) = opt.min_ev {
            config.band.min_ev = min_ev;
        }
        if let Some(max_ev) = opt.max_ev {
            config.band.max_ev = max_ev;
        }
        if let Some(rows) = opt.preview_rows {
            config.preview_rows = rows;
        }

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let EnergyBand { min_ev, max_ev } = self.band;
        if !(min_ev > 0.0 && min_ev < max_ev) {
            return Err(ConfigError::EnergyRange { min_ev, max_ev });
        }
        Ok(())
    }

    /// `(lambda_min, lambda_max)` in micrometres for the configured band.
    pub fn band_limits(&self) -> (f64, f64) {
        physics::band_limits(self.band.min_ev, self.band.max_ev)
    }
}
