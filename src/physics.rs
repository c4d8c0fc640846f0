//! Physical constants and unit conversions.

/// Speed of light [m/s].
pub const C: f64 = 3e8;
/// Planck constant [eV s].
pub const PLANCK_EV_S: f64 = 4.1357e-15;
/// Habing energy density [J/m^3].
pub const U_HAB: f64 = 5.29e-15;
/// Habing parameter, unitless.
pub const G0: f64 = 1.69;
pub const PI: f64 = std::f64::consts::PI;

/// Lower edge of the Habing ultraviolet band [eV].
pub const HABING_MIN_EV: f64 = 6.0;
/// Upper edge of the Habing ultraviolet band [eV].
pub const HABING_MAX_EV: f64 = 13.6;

/// Photon wavelength in micrometres for a photon energy in eV.
pub fn ev_to_micron(energy_ev: f64) -> f64 {
    (PLANCK_EV_S * C / energy_ev) * 1e6
}

/// Wavelength limits `(lambda_min, lambda_max)` in micrometres of an energy band.
///
/// The higher energy maps to the shorter wavelength, so `max_ev` gives
/// `lambda_min`.
pub fn band_limits(min_ev: f64, max_ev: f64) -> (f64, f64) {
    (ev_to_micron(max_ev), ev_to_micron(min_ev))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn lower_energy_has_longer_wavelength() {
        assert!(ev_to_micron(6.0) > ev_to_micron(13.6));
        assert!(ev_to_micron(1.0) > ev_to_micron(2.0));
    }

    #[test]
    fn known_conversions() {
        // h c / 6 eV
        assert_relative_eq!(ev_to_micron(6.0), 0.206785, epsilon = 1e-9);
        assert_relative_eq!(ev_to_micron(13.6), 4.1357e-15 * 3e8 / 13.6 * 1e6);
    }

    #[test]
    fn habing_limits_are_ordered() {
        let (lambda_min, lambda_max) = band_limits(HABING_MIN_EV, HABING_MAX_EV);
        assert!(lambda_min < lambda_max);
        assert_relative_eq!(lambda_min, ev_to_micron(HABING_MAX_EV));
        assert_relative_eq!(lambda_max, ev_to_micron(HABING_MIN_EV));
        // roughly 91 nm to 207 nm
        assert!(lambda_min > 0.09 && lambda_min < 0.092);
        assert!(lambda_max > 0.206 && lambda_max < 0.207);
    }
}
