//! Error types for comic_server

use axum::http::StatusCode;
use std::num::ParseIntError;
use thiserror::Error;

/// Unified error type for fetching and batching comics
#[derive(Debug, Error)]
pub enum ComicError {
    /// The HTTP client could not be constructed
    #[error("failed to build HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),
    /// A path token is not a non-negative integer
    #[error("malformed comic id {token:?}: {source}")]
    MalformedId {
        token: String,
        #[source]
        source: ParseIntError,
    },
    /// Transport could not reach the origin (includes request timeouts)
    #[error("error connecting to server for comic {id}: {source}")]
    Connect {
        id: u64,
        #[source]
        source: reqwest::Error,
    },
    /// Origin answered with a non-success HTTP status
    #[error("origin returned {status} for comic {id}")]
    Status { id: u64, status: reqwest::StatusCode },
    /// Response body could not be read
    #[error("could not read response for comic {id}: {source}")]
    Read {
        id: u64,
        #[source]
        source: reqwest::Error,
    },
    /// Response body is not the expected JSON shape
    #[error("could not decode response for comic {id}: {source}")]
    Decode {
        id: u64,
        #[source]
        source: serde_json::Error,
    },
    /// A fan-out task ended without delivering its result
    #[error("fetch task for comic {id} ended without a result")]
    TaskFailed { id: u64 },
}

impl ComicError {
    /// The comic id this error belongs to, if any
    pub fn id(&self) -> Option<u64> {
        match self {
            ComicError::MalformedId { .. } | ComicError::HttpClient(_) => None,
            ComicError::Connect { id, .. }
            | ComicError::Status { id, .. }
            | ComicError::Read { id, .. }
            | ComicError::Decode { id, .. }
            | ComicError::TaskFailed { id } => Some(*id),
        }
    }

    /// HTTP status the front door answers with for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ComicError::MalformedId { .. } => StatusCode::BAD_REQUEST,
            ComicError::Status { status, .. } if *status == reqwest::StatusCode::NOT_FOUND => {
                StatusCode::NOT_FOUND
            }
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Result alias for comic_server operations
pub type Result<T> = std::result::Result<T, ComicError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn malformed(token: &str) -> ComicError {
        let source = token.parse::<u64>().unwrap_err();
        ComicError::MalformedId {
            token: token.to_string(),
            source,
        }
    }

    #[test]
    fn test_malformed_id_maps_to_bad_request() {
        let err = malformed("abc");
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.id(), None);
        assert!(err.to_string().contains("\"abc\""));
    }

    #[test]
    fn test_origin_not_found_maps_to_not_found() {
        let err = ComicError::Status {
            id: 404,
            status: reqwest::StatusCode::NOT_FOUND,
        };
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(err.id(), Some(404));
    }

    #[test]
    fn test_other_failures_map_to_server_error() {
        let status = ComicError::Status {
            id: 7,
            status: reqwest::StatusCode::BAD_GATEWAY,
        };
        assert_eq!(status.status_code(), StatusCode::INTERNAL_SERVER_ERROR);

        let decode = ComicError::Decode {
            id: 8,
            source: serde_json::from_str::<serde_json::Value>("{").unwrap_err(),
        };
        assert_eq!(decode.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(decode.to_string().contains("comic 8"));

        let task = ComicError::TaskFailed { id: 9 };
        assert_eq!(task.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(task.id(), Some(9));
    }
}
