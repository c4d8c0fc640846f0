use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use anyhow::{Context, Result};
use log::{debug, warn};

use super::model::{EmissivityTable, Table, WavelengthTable};

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load the per-cell emissivity table (11 columns per row).
pub fn load_emissivity(path: &Path) -> Result<EmissivityTable> {
    load_table(path)
}

/// Load the wavelength reference table (4 columns per row).
pub fn load_wavelengths(path: &Path) -> Result<WavelengthTable> {
    load_table(path)
}

/// Load a fixed-width numeric table.  Dispatch by extension.
///
/// Supported formats:
/// * `.csv`  – comma-separated numbers, no header row
/// * others – whitespace-separated numbers (`.dat`, `.txt`, ...)
///
/// In both formats lines starting with `#` are comments. A row is accepted
/// when its first `N` fields are numbers; any fields after those are ignored.
/// Shorter rows, non-numeric fields and lines that are not valid UTF-8 are
/// dropped and counted in [`Table::skipped_rows`]; they never fail the load.
pub fn load_table<const N: usize>(path: &Path) -> Result<Table<N>> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let table = match ext.as_str() {
        "csv" => load_csv(path)?,
        _ => load_text(path)?,
    };

    if table.skipped_rows > 0 {
        warn!(
            "{}: skipped {} row(s) without {N} leading numeric fields",
            path.display(),
            table.skipped_rows
        );
    }
    debug!("{}: loaded {} row(s)", path.display(), table.len());

    Ok(table)
}

// ---------------------------------------------------------------------------
// Whitespace-delimited text loader
// ---------------------------------------------------------------------------

fn load_text<const N: usize>(path: &Path) -> Result<Table<N>> {
    let file =
        File::open(path).with_context(|| format!("opening table file {}", path.display()))?;
    let reader = BufReader::new(file);

    let mut table = Table::<N>::default();

    // Split on raw bytes: comment lines are skipped before any decoding.
    for (line_no, line) in reader.split(b'\n').enumerate() {
        let line = line
            .with_context(|| format!("{}: reading line {}", path.display(), line_no + 1))?;
        if line.first() == Some(&b'#') || line.iter().all(u8::is_ascii_whitespace) {
            continue;
        }
        let row = std::str::from_utf8(&line)
            .ok()
            .and_then(|text| parse_row::<N, _>(text.split_whitespace()));
        match row {
            Some(row) => table.rows.push(row),
            None => {
                debug!("{}:{}: malformed row dropped", path.display(), line_no + 1);
                table.skipped_rows += 1;
            }
        }
    }

    Ok(table)
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

fn load_csv<const N: usize>(path: &Path) -> Result<Table<N>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .comment(Some(b'#'))
        .flexible(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("opening CSV table {}", path.display()))?;

    let mut table = Table::<N>::default();

    for (row_no, result) in reader.byte_records().enumerate() {
        let record =
            result.with_context(|| format!("{}: CSV record {row_no}", path.display()))?;
        let fields: Option<Vec<&str>> = record
            .iter()
            .map(|field| std::str::from_utf8(field).ok())
            .collect();
        match fields.and_then(parse_row::<N, _>) {
            Some(row) => table.rows.push(row),
            None => {
                debug!("{}: CSV record {row_no} dropped", path.display());
                table.skipped_rows += 1;
            }
        }
    }

    Ok(table)
}

// -- helpers --

/// Parse the first `N` fields as floats, ignoring any that follow.
/// `None` when fewer than `N` fields are present or one does not parse.
fn parse_row<'a, const N: usize, I>(fields: I) -> Option<[f64; N]>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut row = [0.0; N];
    let mut fields = fields.into_iter();
    for slot in row.iter_mut() {
        *slot = fields.next()?.trim().parse::<f64>().ok()?;
    }
    Some(row)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{EMISSIVITY_COLUMNS, WAVELENGTH_COLUMNS};
    use std::io::Write;
    use tempfile::tempdir;

    fn write_bytes(dir: &Path, name: &str, content: &[u8]) -> std::path::PathBuf {
        let path = dir.join(name);
        let mut file = File::create(&path).unwrap();
        file.write_all(content).unwrap();
        path
    }

    fn write_file(dir: &Path, name: &str, content: &str) -> std::path::PathBuf {
        write_bytes(dir, name, content.as_bytes())
    }

    #[test]
    fn parse_row_reads_leading_fields() {
        assert_eq!(parse_row::<3, _>("1 2 3".split_whitespace()), Some([1.0, 2.0, 3.0]));
        assert_eq!(parse_row::<3, _>("1 2".split_whitespace()), None);
        assert_eq!(parse_row::<3, _>("1 x 3".split_whitespace()), None);
        // trailing fields are ignored, whatever they hold
        assert_eq!(parse_row::<3, _>("1 2 3 4".split_whitespace()), Some([1.0, 2.0, 3.0]));
        assert_eq!(
            parse_row::<3, _>("1 2 3 # cell 7".split_whitespace()),
            Some([1.0, 2.0, 3.0])
        );
        assert_eq!(parse_row::<3, _>("1 2 x 4".split_whitespace()), None);
        assert_eq!(
            parse_row::<2, _>("1.5e-3\t-2E4".split_whitespace()),
            Some([1.5e-3, -2e4])
        );
    }

    #[test]
    fn text_table_skips_comments_and_malformed_rows() {
        let dir = tempdir().unwrap();
        let path = write_file(
            dir.path(),
            "wavelengths.dat",
            "# lambda lo hi width\n\
             # units: micron\n\
             0.1 0.09 0.11 0.02\n\
             \n\
             0.2   0.19\t0.21 0.02\n\
             0.3 0.29 0.31\n\
             0.4 0.39 0.41 0.02 9.9\n\
             0.5 abc 0.51 0.02\n\
             0.6 0.59 0.61 0.02\n",
        );

        let table = load_wavelengths(&path).unwrap();
        assert_eq!(table.len(), 4);
        assert_eq!(table.skipped_rows, 2);
        let w: Vec<f64> = table.wavelengths().collect();
        assert_eq!(w, vec![0.1, 0.2, 0.4, 0.6]);
        assert_eq!(table.rows[1], [0.2, 0.19, 0.21, 0.02]);
        assert_eq!(table.rows[2], [0.4, 0.39, 0.41, 0.02]);
    }

    #[test]
    fn emissivity_rows_have_eleven_columns() {
        let dir = tempdir().unwrap();
        let good: Vec<String> = (0..EMISSIVITY_COLUMNS).map(|i| format!("{i}.0")).collect();
        let short: Vec<String> = (0..EMISSIVITY_COLUMNS - 1).map(|i| i.to_string()).collect();
        let content = format!(
            "# id J1 .. J10\n{}\n{}\n{}\n",
            good.join(" "),
            short.join(" "),
            good.join(" ")
        );
        let path = write_file(dir.path(), "J.dat", &content);

        let table = load_emissivity(&path).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.skipped_rows, 1);
        assert_eq!(table.rows[0][10], 10.0);
    }

    #[test]
    fn csv_extension_uses_csv_reader() {
        let dir = tempdir().unwrap();
        let path = write_file(
            dir.path(),
            "wavelengths.csv",
            "# lambda,lo,hi,width\n\
             0.1, 0.09, 0.11, 0.02\n\
             0.2,0.19,0.21\n\
             0.3,0.29,0.31,0.02,extra\n",
        );

        let table: Table<WAVELENGTH_COLUMNS> = load_table(&path).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.skipped_rows, 1);
        assert_eq!(table.rows[0], [0.1, 0.09, 0.11, 0.02]);
        assert_eq!(table.rows[1], [0.3, 0.29, 0.31, 0.02]);
    }

    #[test]
    fn extra_trailing_fields_keep_the_row() {
        let dir = tempdir().unwrap();
        let path = write_file(
            dir.path(),
            "w.dat",
            "0.1 0.09 0.11 0.02 7.0\n0.2 0.19 0.21 0.02\n",
        );
        let table = load_wavelengths(&path).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.skipped_rows, 0);
        assert_eq!(table.rows[0], [0.1, 0.09, 0.11, 0.02]);
    }

    #[test]
    fn latin1_bytes_do_not_fail_the_load() {
        let dir = tempdir().unwrap();
        // \xb5 is a Latin-1 micro sign, invalid as UTF-8
        let path = write_bytes(
            dir.path(),
            "w.dat",
            b"# lambda [\xb5m]\n0.1 0.09 0.11 0.02\n0.2 0.19 \xb5 0.02\n0.3 0.29 0.31 0.02\n",
        );
        let table = load_wavelengths(&path).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.skipped_rows, 1);
        let w: Vec<f64> = table.wavelengths().collect();
        assert_eq!(w, vec![0.1, 0.3]);

        let path = write_bytes(
            dir.path(),
            "w.csv",
            b"# lambda [\xb5m]\n0.1,0.09,0.11,0.02\n0.2,\xb5,0.21,0.02\n",
        );
        let table: Table<WAVELENGTH_COLUMNS> = load_table(&path).unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table.skipped_rows, 1);
    }

    #[test]
    fn crlf_line_endings_are_accepted() {
        let dir = tempdir().unwrap();
        let path = write_file(dir.path(), "w.dat", "# header\r\n0.1 0.09 0.11 0.02\r\n");
        let table = load_wavelengths(&path).unwrap();
        assert_eq!(table.rows, vec![[0.1, 0.09, 0.11, 0.02]]);
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("absent.dat");
        let err = load_wavelengths(&path).unwrap_err();
        assert!(format!("{err:#}").contains("absent.dat"));
    }

    #[test]
    fn comment_only_file_is_empty() {
        let dir = tempdir().unwrap();
        let path = write_file(dir.path(), "empty.dat", "# nothing here\n#\n");
        let table = load_wavelengths(&path).unwrap();
        assert!(table.is_empty());
        assert_eq!(table.skipped_rows, 0);
    }
}
