use thiserror::Error;

/// Errors raised while building or emitting a static-information block.
///
/// Construction errors ([`InvalidIdentifier`](GrfInfoError::InvalidIdentifier),
/// [`UnsupportedSettingType`](GrfInfoError::UnsupportedSettingType) and
/// [`ValueOutOfRange`](GrfInfoError::ValueOutOfRange)) signal malformed input
/// from an earlier compiler stage and are fatal at tree-build time.
/// [`SizeMismatch`](GrfInfoError::SizeMismatch) is an internal invariant
/// failure that aborts the block's emission. Nothing in this crate retries:
/// all operations are deterministic computations over already-resolved data.
#[derive(Error, Debug)]
pub enum GrfInfoError {
    /// A symbolic identifier code was not exactly four ASCII characters.
    #[error("Invalid identifier code: {0:?}")]
    InvalidIdentifier(String),

    /// A setting declared a type this encoder has no representation for.
    #[error("Unsupported setting type: {0:?}")]
    UnsupportedSettingType(String),

    /// A field value does not fit within the width of its wire field.
    #[error("Value {value} does not fit in the {field} field")]
    ValueOutOfRange { field: &'static str, value: u32 },

    /// A string-table key had no registered translations.
    ///
    /// May reflect a legitimate upstream omission, so it is surfaced as a
    /// distinct condition rather than folded into a construction error.
    #[error("No translations registered for string key: {0:?}")]
    MissingStrings(String),

    /// The bytes written for a block differ from its declared size.
    ///
    /// Declared sizes cannot be patched after the fact, so a divergence here
    /// would corrupt the framing of everything that follows in the output
    /// file.
    #[error("Block declared {declared} bytes but wrote {written}")]
    SizeMismatch { declared: usize, written: usize },

    /// The underlying output stream failed.
    #[error("Failed to write to the output stream: {0}")]
    Stream(std::io::Error),
}

impl From<std::io::Error> for GrfInfoError {
    fn from(value: std::io::Error) -> Self {
        GrfInfoError::Stream(value)
    }
}
