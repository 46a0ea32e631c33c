use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum CliError {
    /// Errors originating from the enercalc library.
    #[error("Calculation error: {0}")]
    Calculation(#[from] enercalc::CalcError),

    /// I/O errors associated with a specific file path.
    #[error("I/O error for '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// General I/O errors not tied to a specific file.
    #[error("I/O error: {0}")]
    GenericIo(#[from] std::io::Error),

    /// A `--count` argument that is not `KEY=N`.
    #[error("Invalid equipment count '{argument}': {details}")]
    CountParse { argument: String, details: String },

    /// Errors serialising a result to JSON.
    #[error("Failed to encode result: {0}")]
    Encode(#[from] serde_json::Error),

    /// Errors raised while starting or running the web server.
    #[error("Server error: {0}")]
    Server(#[from] enercalc::server::ServerError),

    /// Errors configuring logging.
    #[error("Logging setup failed: {0}")]
    Logging(#[from] enercalc::telemetry::InitError),
}
