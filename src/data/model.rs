use std::fmt;

/// Columns per emissivity row: a cell identifier followed by 10 spectral samples.
pub const EMISSIVITY_COLUMNS: usize = 11;
/// Columns per wavelength row; column 0 is the representative wavelength [µm].
pub const WAVELENGTH_COLUMNS: usize = 4;

// ---------------------------------------------------------------------------
// Table – fixed-width numeric rows
// ---------------------------------------------------------------------------

/// A parsed numeric table whose rows all have exactly `N` columns.
#[derive(Debug, Clone, PartialEq)]
pub struct Table<const N: usize> {
    /// Accepted rows, in file order.
    pub rows: Vec<[f64; N]>,
    /// Data lines dropped because they did not hold `N` numbers.
    pub skipped_rows: usize,
}

/// Angle-averaged emissivity per grid cell.
pub type EmissivityTable = Table<EMISSIVITY_COLUMNS>;

/// Spectral band definitions.
pub type WavelengthTable = Table<WAVELENGTH_COLUMNS>;

impl<const N: usize> Table<N> {
    pub fn new(rows: Vec<[f64; N]>) -> Self {
        Self {
            rows,
            skipped_rows: 0,
        }
    }

    /// Number of accepted rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, [f64; N]> {
        self.rows.iter()
    }

    /// Write the first `limit` rows in `%e` style, one row per line.
    pub fn preview(&self, limit: usize) -> TablePreview<'_, N> {
        TablePreview { table: self, limit }
    }
}

impl WavelengthTable {
    /// Representative wavelength [µm] of each band, in table order.
    pub fn wavelengths(&self) -> impl Iterator<Item = f64> + '_ {
        self.rows.iter().map(|row| row[0])
    }
}

impl<const N: usize> Default for Table<N> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

// ---------------------------------------------------------------------------
// TablePreview – diagnostic dump
// ---------------------------------------------------------------------------

pub struct TablePreview<'a, const N: usize> {
    table: &'a Table<N>,
    limit: usize,
}

impl<const N: usize> fmt::Display for TablePreview<'_, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.table.rows.iter().take(self.limit) {
            let line: Vec<String> = row.iter().map(|v| format!("{v:e}")).collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wavelengths_come_from_first_column() {
        let table = WavelengthTable::new(vec![
            [0.1, 0.09, 0.11, 0.02],
            [0.3, 0.29, 0.31, 0.02],
            [0.2, 0.19, 0.21, 0.02],
        ]);
        let w: Vec<f64> = table.wavelengths().collect();
        assert_eq!(w, vec![0.1, 0.3, 0.2]);
        assert_eq!(table.len(), 3);
        assert_eq!(table.skipped_rows, 0);
    }

    #[test]
    fn preview_stops_at_limit() {
        let table = Table::<2>::new(vec![[1.0, 2.0], [3.0, 4.0], [5.0, 6.0]]);
        let text = table.preview(2).to_string();
        assert_eq!(text, "1e0 2e0\n3e0 4e0\n");
        assert_eq!(table.preview(0).to_string(), "");
    }
}
