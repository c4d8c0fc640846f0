use super::model::WavelengthTable;

// ---------------------------------------------------------------------------
// BandSelection – wavelengths inside a band and their emissivity columns
// ---------------------------------------------------------------------------

/// Wavelength bands that fall inside `[lambda_min, lambda_max]`, in table order.
///
/// `columns[k]` indexes the emissivity row sample measured at
/// `wavelengths[k]`. Emissivity column 0 holds the cell identifier, so the
/// wavelength table row `i` maps to emissivity column `i + 1`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BandSelection {
    pub lambda_min: f64,
    pub lambda_max: f64,
    wavelengths: Vec<f64>,
    columns: Vec<usize>,
}

impl BandSelection {
    /// Selected representative wavelengths [µm].
    pub fn wavelengths(&self) -> &[f64] {
        &self.wavelengths
    }

    /// Emissivity columns of the selected wavelengths.
    pub fn columns(&self) -> &[usize] {
        &self.columns
    }

    /// `(wavelength, column)` pairs in table order.
    pub fn iter(&self) -> impl Iterator<Item = (f64, usize)> + '_ {
        self.wavelengths
            .iter()
            .copied()
            .zip(self.columns.iter().copied())
    }

    pub fn len(&self) -> usize {
        self.wavelengths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.wavelengths.is_empty()
    }
}

/// Select the wavelength rows with `lambda_min <= w <= lambda_max`.
///
/// Both limits are inclusive. Rows keep their table order; nothing is sorted
/// or deduplicated. An empty selection is a valid result.
pub fn select_band(lambda_min: f64, lambda_max: f64, table: &WavelengthTable) -> BandSelection {
    let (wavelengths, columns): (Vec<f64>, Vec<usize>) = table
        .wavelengths()
        .enumerate()
        .filter(|&(_, w)| w >= lambda_min && w <= lambda_max)
        .map(|(i, w)| (w, i + 1))
        .unzip();

    BandSelection {
        lambda_min,
        lambda_max,
        wavelengths,
        columns,
    }
}
