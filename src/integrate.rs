//! Composite Simpson integration over uniformly spaced samples.
//!
//! ```text
//!  odd n :  1/3 rule over y[0..n]
//!  even n:  1/3 rule over y[0..n-3]  +  3/8 rule over y[n-4..n]
//! ```
//!
//! The step is taken from the first two abscissas only; the spacing of the
//! remaining samples is assumed, not checked.

use crate::error::IsrfError;

/// Fewest samples the composite rule accepts.
pub const MIN_SAMPLES: usize = 4;

/// Integrate `y` sampled at `x` with Simpson's rule.
///
/// An odd sample count uses the 1/3 rule throughout. An even sample count
/// applies the 1/3 rule to the first `n - 3` samples and closes the last
/// three intervals with the 3/8 rule, so no sample is dropped.
pub fn simpson(y: &[f64], x: &[f64]) -> Result<f64, IsrfError> {
    let n = y.len();
    if x.len() != n {
        return Err(IsrfError::LengthMismatch { x: x.len(), y: n });
    }
    if n < MIN_SAMPLES {
        return Err(IsrfError::InsufficientSamples { found: n });
    }

    let step = x[1] - x[0];

    if n % 2 == 1 {
        let sum: f64 = y
            .iter()
            .enumerate()
            .map(|(i, &v)| simpson_weight(i, n - 1) * v)
            .sum();
        return Ok(sum * step / 3.0);
    }

    // 1/3 part: samples 0..=n-4 (n-4 intervals, an even count)
    let split = n - 3;
    let sum: f64 = y[..split]
        .iter()
        .enumerate()
        .map(|(i, &v)| simpson_weight(i, n - 4) * v)
        .sum();
    let one_third = sum * step / 3.0;

    // 3/8 part shares y[n-4] with the 1/3 part
    let tail = &y[split - 1..];
    let three_eighths = (tail[0] + 3.0 * tail[1] + 3.0 * tail[2] + tail[3]) * step * 3.0 / 8.0;

    Ok(one_third + three_eighths)
}

/// 1/3-rule weight of sample `i` in a run ending at index `last`.
fn simpson_weight(i: usize, last: usize) -> f64 {
    if i == 0 || i == last {
        1.0
    } else if i % 2 == 1 {
        4.0
    } else {
        2.0
    }
}
