//! Interstellar radiation field in Habing units.
//!
//! Per cell: pick the in-band emissivity samples, integrate them over
//! wavelength, then convert
//!
//! ```text
//!  u     = ∫J dλ · 4π / c      [J/m^3]
//!  G     = u / u_HAB
//!  G/G0  = G / G0
//! ```

use std::fmt;

use crate::data::band::BandSelection;
use crate::data::model::EmissivityTable;
use crate::error::IsrfError;
use crate::integrate::simpson;
use crate::physics::{C, G0, PI, U_HAB};

/// G/G0 for one emissivity row.
///
/// `row[band.columns()[k]]` is taken as the emissivity at
/// `band.wavelengths()[k]`.
pub fn habing_ratio(row: &[f64], band: &BandSelection) -> Result<f64, IsrfError> {
    let y = band
        .columns()
        .iter()
        .map(|&column| {
            row.get(column)
                .copied()
                .ok_or(IsrfError::ColumnOutOfRange {
                    column,
                    width: row.len(),
                })
        })
        .collect::<Result<Vec<f64>, _>>()?;

    let integrated_emissivity = simpson(&y, band.wavelengths())?;
    Ok(to_habing_units(integrated_emissivity))
}

/// G/G0 for every row of `table`, in row order.
pub fn habing_ratios(
    table: &EmissivityTable,
    band: &BandSelection,
) -> Result<Vec<f64>, IsrfError> {
    table.iter().map(|row| habing_ratio(row, band)).collect()
}

/// Convert a wavelength-integrated emissivity [W/m^2] to G/G0.
pub fn to_habing_units(integrated_emissivity: f64) -> f64 {
    let u = integrated_emissivity * 4.0 * PI / C;
    let g = u / U_HAB;
    g / G0
}

// ---------------------------------------------------------------------------
// HabingSummary
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HabingSummary {
    pub count: usize,
    pub min: f64,
    pub max: f64,
    pub mean: f64,
}

impl HabingSummary {
    /// `None` for an empty slice.
    pub fn from_ratios(ratios: &[f64]) -> Option<Self> {
        if ratios.is_empty() {
            return None;
        }
        let min = ratios.iter().copied().fold(f64::INFINITY, f64::min);
        let max = ratios.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let mean = ratios.iter().sum::<f64>() / ratios.len() as f64;
        Some(Self {
            count: ratios.len(),
            min,
            max,
            mean,
        })
    }
}

impl fmt::Display for HabingSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  Cells: {}", self.count)?;
        writeln!(f, "  Min:   {:.6e} G0", self.min)?;
        writeln!(f, "  Max:   {:.6e} G0", self.max)?;
        write!(f, "  Mean:  {:.6e} G0", self.mean)
    }
}
