use crate::error::CalcError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use std::net::SocketAddr;
use tracing::warn;

/// Failure of a single request, rendered as a plain-text response.
///
/// The messages are deliberately static; details go to the log only.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The body is not a decodable form.
    #[error("Error parsing form")]
    MalformedForm { details: String },

    /// A field is present but is not a number.
    #[error("Invalid value for {field}")]
    InvalidField { field: String },

    /// The result holds NaN or infinity and cannot be written as JSON.
    #[error("Failed to encode response")]
    Unencodable(#[source] CalcError),

    /// Any other library failure.
    #[error("Internal server error")]
    Internal(#[source] CalcError),
}

impl ApiError {
    pub fn malformed(details: impl Into<String>) -> Self {
        ApiError::MalformedForm {
            details: details.into(),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::MalformedForm { .. } | ApiError::InvalidField { .. } => {
                StatusCode::BAD_REQUEST
            }
            ApiError::Unencodable(_) | ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<CalcError> for ApiError {
    fn from(error: CalcError) -> Self {
        match error {
            CalcError::InvalidField { field, .. } => ApiError::InvalidField { field },
            error @ CalcError::NonFinite { .. } => ApiError::Unencodable(error),
            error => ApiError::Internal(error),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            ApiError::MalformedForm { details } => warn!(%details, "rejected form body"),
            ApiError::InvalidField { field } => warn!(%field, "rejected field value"),
            ApiError::Unencodable(source) | ApiError::Internal(source) => {
                warn!(error = %source, "evaluation failed")
            }
        }
        (self.status(), self.to_string()).into_response()
    }
}

/// Failure to start or run the server.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("Server terminated: {0}")]
    Serve(#[source] std::io::Error),

    #[error("Invalid server setup: {0}")]
    Setup(#[from] CalcError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_field_maps_to_bad_request() {
        let error = ApiError::from(CalcError::InvalidField {
            field: "carbon".to_string(),
            value: "lots".to_string(),
        });
        assert_eq!(error.status(), StatusCode::BAD_REQUEST);
        assert_eq!(error.to_string(), "Invalid value for carbon");
    }

    #[test]
    fn test_non_finite_maps_to_encoding_failure() {
        let error = ApiError::from(CalcError::NonFinite {
            name: "coefs.dry".to_string(),
        });
        assert_eq!(error.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(error.to_string(), "Failed to encode response");
    }

    #[test]
    fn test_other_library_errors_are_internal() {
        let error = ApiError::from(CalcError::UnknownEquipment("xQ".to_string()));
        assert!(matches!(error, ApiError::Internal(_)));
        assert_eq!(error.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
