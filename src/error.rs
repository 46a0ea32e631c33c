use std::path::PathBuf;
use thiserror::Error;

/// The primary error type for all fallible operations in the `enercalc` library.
///
/// The calculators themselves are total functions over `f64`, so most variants describe
/// problems at the edges: reading inputs, loading indicator tables and turning a result
/// into something a client can consume.
#[derive(Error, Debug)]
pub enum CalcError {
    /// A submitted field was present but could not be read as a number.
    ///
    /// Absent or blank fields are not an error; they read as zero.
    #[error("Invalid value for {field}: '{value}'")]
    InvalidField {
        /// The name of the offending field.
        field: String,
        /// The raw text that failed to parse.
        value: String,
    },

    /// A calculated quantity is NaN or infinite, typically because a divisor such as
    /// `100 - moisture` or the total failure rate came out as zero.
    ///
    /// Such values have no JSON representation.
    #[error("Result '{name}' is not a finite number")]
    NonFinite {
        /// Dotted path of the offending quantity, e.g. `coefs.dry`.
        name: String,
    },

    /// An equipment count was supplied for a class that the indicator table does not define.
    #[error("Unknown equipment class: '{0}'")]
    UnknownEquipment(String),

    /// An indicator table entry carries a value the reliability model cannot use.
    #[error("Invalid indicator for '{key}': {reason}")]
    InvalidIndicator {
        /// The equipment key of the entry.
        key: String,
        /// Why the entry was rejected.
        reason: String,
    },

    /// An I/O error that occurred while attempting to read a data or configuration file.
    #[error("I/O error at path '{path}': {source}")]
    IoError {
        /// The path of the file that caused the I/O error.
        path: PathBuf,
        /// The underlying `std::io::Error`.
        #[source]
        source: std::io::Error,
    },

    /// Invalid TOML or a structural mismatch with the expected format.
    #[error("Failed to deserialize TOML: {0}")]
    DeserializationError(#[from] toml::de::Error),
}
