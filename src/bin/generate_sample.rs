use std::fs::File;
use std::io::{BufWriter, Write};

use anyhow::{Context, Result};

const N_CELLS: usize = 1000;
const N_BANDS: usize = 10;
const EMISSIVITY_PATH: &str = "sample_radiationField_J.dat";
const WAVELENGTH_PATH: &str = "sample_radiationField_wavelengths.dat";

/// Band centres [µm]: 0.07 → 0.25, step 0.02.
fn band_centres() -> Vec<f64> {
    (0..N_BANDS).map(|i| 0.07 + 0.02 * i as f64).collect()
}

/// Smooth UV continuum [W m^-2 µm^-1] peaking near 0.15 µm.
fn continuum(lambda: f64, amplitude: f64) -> f64 {
    amplitude * (-((lambda - 0.15) / 0.08).powi(2)).exp()
}

/// Seeded noise source so repeated runs write identical files.
struct CellNoise(u64);

impl CellNoise {
    /// Uniform in [0, 1), splitmix64 step.
    fn uniform(&mut self) -> f64 {
        self.0 = self.0.wrapping_add(0x9e37_79b9_7f4a_7c15);
        let mut z = self.0;
        z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
        z ^= z >> 31;
        (z >> 11) as f64 / (1u64 << 53) as f64
    }
}

fn write_wavelengths(centres: &[f64]) -> Result<()> {
    let file = File::create(WAVELENGTH_PATH)
        .with_context(|| format!("creating {WAVELENGTH_PATH}"))?;
    let mut out = BufWriter::new(file);

    writeln!(out, "# Radiation field wavelength bands")?;
    writeln!(out, "# lambda_centre lambda_min lambda_max width [micron]")?;
    for &lambda in centres {
        writeln!(
            out,
            "{:.6e} {:.6e} {:.6e} {:.6e}",
            lambda,
            lambda - 0.01,
            lambda + 0.01,
            0.02
        )?;
    }
    out.flush()?;
    Ok(())
}

fn write_emissivity(centres: &[f64], noise: &mut CellNoise) -> Result<()> {
    let file = File::create(EMISSIVITY_PATH)
        .with_context(|| format!("creating {EMISSIVITY_PATH}"))?;
    let mut out = BufWriter::new(file);

    writeln!(out, "# Angle-averaged emissivity per grid cell")?;
    writeln!(out, "# cell_id J(lambda_1) ... J(lambda_{N_BANDS}) [W m^-2 micron^-1]")?;
    for cell in 0..N_CELLS {
        // between 0.1 and 100 times a G/G0 ~ 1 field
        let amplitude = 2.0e-6 * 10f64.powf(3.0 * noise.uniform() - 1.0);
        let values: Vec<String> = centres
            .iter()
            .map(|&lambda| {
                let jitter = 1.0 + 0.05 * (2.0 * noise.uniform() - 1.0);
                format!("{:.6e}", continuum(lambda, amplitude) * jitter)
            })
            .collect();
        writeln!(out, "{cell} {}", values.join(" "))?;
    }
    out.flush()?;
    Ok(())
}

fn main() -> Result<()> {
    let mut noise = CellNoise(42);
    let centres = band_centres();

    write_wavelengths(&centres)?;
    write_emissivity(&centres, &mut noise)?;

    println!(
        "Wrote {N_CELLS} cells ({N_BANDS} bands each) to {EMISSIVITY_PATH} and {WAVELENGTH_PATH}"
    );
    Ok(())
}
