//! Error types shared by every fallible boundary in the crate.

use std::path::PathBuf;

/// Errors the engine and its external collaborators (CSV ingestion, binary
/// model I/O, the CLI) can raise.
///
/// Purely numeric/algorithmic edge cases (FOIL gain on a degenerate split,
/// `log2_combination` out of domain) are not represented here — per the
/// error design, they are absorbed locally and surfaced as sentinel values
/// (`0.0` gain, `f64::NEG_INFINITY` description length) rather than as
/// `Err`.
#[derive(Debug, thiserror::Error)]
pub enum RipperError {
    /// The dataset path was not provided, does not exist, or could not be
    /// opened for reading.
    #[error("dataset not found at {0}")]
    MissingDataset(PathBuf),

    /// The model path was not provided, does not exist, or could not be
    /// opened for reading.
    #[error("model not found at {0}")]
    MissingModel(PathBuf),

    /// The CSV dataset has a malformed header or a row whose arity does not
    /// match the header.
    #[error("malformed dataset at line {line}: {reason}")]
    MalformedDataset { line: usize, reason: String },

    /// The binary model file is truncated or its length prefixes are
    /// inconsistent with the remaining bytes.
    #[error("malformed model: {0}")]
    MalformedModel(String),

    /// A catalog lookup (`type`/`values`) named an attribute never observed
    /// during training. Fatal during inference; cannot arise during
    /// training by construction.
    #[error("unknown attribute: {0}")]
    UnknownAttribute(String),

    /// An I/O failure that does not fit a more specific variant above.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, RipperError>;
