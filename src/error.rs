use thiserror::Error;

/// Failures of the numerical core.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum IsrfError {
    /// Simpson integration needs at least four samples.
    #[error("Simpson integration needs at least 4 samples, got {found}")]
    InsufficientSamples { found: usize },

    #[error("abscissa has {x} samples but ordinate has {y}")]
    LengthMismatch { x: usize, y: usize },

    /// A band column points past the end of an emissivity row.
    #[error("band column {column} is outside an emissivity row of width {width}")]
    ColumnOutOfRange { column: usize, width: usize },
}
