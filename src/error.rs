use std::fmt;

use http::StatusCode;
use thiserror::Error;
pub use url::ParseError as UrlParseError;

/// Non-2xx HTTP statuses the pfSense API is known to return.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiStatus {
    BadRequest,
    Unauthorized,
    Forbidden,
    NotFound,
    MethodNotAllowed,
    NotAcceptable,
    Conflict,
    UnsupportedMediaType,
    UnprocessableEntity,
    FailedDependency,
    InternalServerError,
    ServiceUnavailable,
    /// Any status without a dedicated variant.
    Other(StatusCode),
}

impl ApiStatus {
    /// The HTTP status code this variant was mapped from.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiStatus::BadRequest => StatusCode::BAD_REQUEST,
            ApiStatus::Unauthorized => StatusCode::UNAUTHORIZED,
            ApiStatus::Forbidden => StatusCode::FORBIDDEN,
            ApiStatus::NotFound => StatusCode::NOT_FOUND,
            ApiStatus::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiStatus::NotAcceptable => StatusCode::NOT_ACCEPTABLE,
            ApiStatus::Conflict => StatusCode::CONFLICT,
            ApiStatus::UnsupportedMediaType => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            ApiStatus::UnprocessableEntity => StatusCode::UNPROCESSABLE_ENTITY,
            ApiStatus::FailedDependency => StatusCode::FAILED_DEPENDENCY,
            ApiStatus::InternalServerError => StatusCode::INTERNAL_SERVER_ERROR,
            ApiStatus::ServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
            ApiStatus::Other(status) => *status,
        }
    }
}

impl From<StatusCode> for ApiStatus {
    fn from(status: StatusCode) -> Self {
        match status {
            StatusCode::BAD_REQUEST => ApiStatus::BadRequest,
            StatusCode::UNAUTHORIZED => ApiStatus::Unauthorized,
            StatusCode::FORBIDDEN => ApiStatus::Forbidden,
            StatusCode::NOT_FOUND => ApiStatus::NotFound,
            StatusCode::METHOD_NOT_ALLOWED => ApiStatus::MethodNotAllowed,
            StatusCode::NOT_ACCEPTABLE => ApiStatus::NotAcceptable,
            StatusCode::CONFLICT => ApiStatus::Conflict,
            StatusCode::UNSUPPORTED_MEDIA_TYPE => ApiStatus::UnsupportedMediaType,
            StatusCode::UNPROCESSABLE_ENTITY => ApiStatus::UnprocessableEntity,
            StatusCode::FAILED_DEPENDENCY => ApiStatus::FailedDependency,
            StatusCode::INTERNAL_SERVER_ERROR => ApiStatus::InternalServerError,
            StatusCode::SERVICE_UNAVAILABLE => ApiStatus::ServiceUnavailable,
            other => ApiStatus::Other(other),
        }
    }
}

impl fmt::Display for ApiStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiStatus::Other(status) => {
                write!(f, "non 2xx response code received: {}", status.as_u16())
            }
            known => {
                let status = known.status_code();
                write!(
                    f,
                    "HTTP {}: {}",
                    status.as_u16(),
                    status.canonical_reason().unwrap_or("Unknown")
                )
            }
        }
    }
}

/// Error types for the pfSense API client.
#[derive(Error, Debug)]
pub enum PfSenseError {
    /// The API answered with a non-2xx status.
    ///
    /// `message` is taken from the response envelope when the error body
    /// could be parsed.
    #[error("{status}{}", .message.as_deref().map(|m| format!(": {m}")).unwrap_or_default())]
    Api {
        status: ApiStatus,
        message: Option<String>,
    },

    /// A successful response carried no `data` member.
    #[error("No data returned from API")]
    MissingData,

    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Error parsing URL.
    #[error("URL parse error: {0}")]
    UrlParseError(#[from] UrlParseError),

    /// The API endpoint/path string is invalid.
    #[error("Invalid endpoint: {0}")]
    InvalidEndpoint(String),

    /// Error serializing or deserializing JSON.
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    /// Invalid client configuration.
    #[error("Invalid configuration: {0}")]
    ConfigurationError(String),
}

impl PfSenseError {
    /// HTTP status of an [`PfSenseError::Api`] error.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            PfSenseError::Api { status, .. } => Some(status.status_code()),
            _ => None,
        }
    }

    /// Returns true if the API reported the resource as missing.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            PfSenseError::Api {
                status: ApiStatus::NotFound,
                ..
            }
        )
    }
}

/// Result type for pfSense API operations.
pub type PfSenseResult<T> = Result<T, PfSenseError>;

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn maps_known_statuses() {
        let cases = [
            (400, ApiStatus::BadRequest, "HTTP 400: Bad Request"),
            (401, ApiStatus::Unauthorized, "HTTP 401: Unauthorized"),
            (403, ApiStatus::Forbidden, "HTTP 403: Forbidden"),
            (404, ApiStatus::NotFound, "HTTP 404: Not Found"),
            (405, ApiStatus::MethodNotAllowed, "HTTP 405: Method Not Allowed"),
            (406, ApiStatus::NotAcceptable, "HTTP 406: Not Acceptable"),
            (409, ApiStatus::Conflict, "HTTP 409: Conflict"),
            (415, ApiStatus::UnsupportedMediaType, "HTTP 415: Unsupported Media Type"),
            (422, ApiStatus::UnprocessableEntity, "HTTP 422: Unprocessable Entity"),
            (424, ApiStatus::FailedDependency, "HTTP 424: Failed Dependency"),
            (500, ApiStatus::InternalServerError, "HTTP 500: Internal Server Error"),
            (503, ApiStatus::ServiceUnavailable, "HTTP 503: Service Unavailable"),
        ];

        for (code, expected, text) in cases {
            let status = StatusCode::from_u16(code).unwrap();
            let mapped = ApiStatus::from(status);
            assert_eq!(mapped, expected);
            assert_eq!(mapped.status_code(), status);
            assert_eq!(mapped.to_string(), text);
        }
    }

    #[test]
    fn unmapped_status_falls_back() {
        let status = StatusCode::IM_A_TEAPOT;
        let mapped = ApiStatus::from(status);
        assert_eq!(mapped, ApiStatus::Other(status));
        assert_eq!(mapped.to_string(), "non 2xx response code received: 418");
    }

    #[test]
    fn api_error_display_appends_message() {
        let err = PfSenseError::Api {
            status: ApiStatus::NotFound,
            message: Some("Object with ID `7` does not exist.".into()),
        };
        assert_eq!(
            err.to_string(),
            "HTTP 404: Not Found: Object with ID `7` does not exist."
        );
        assert!(err.is_not_found());
        assert_eq!(err.status(), Some(StatusCode::NOT_FOUND));

        let bare = PfSenseError::Api {
            status: ApiStatus::Conflict,
            message: None,
        };
        assert_eq!(bare.to_string(), "HTTP 409: Conflict");
        assert!(!bare.is_not_found());
    }
}
