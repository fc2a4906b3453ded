use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;

use crate::storage::StorageError;

pub const NOT_FOUND_MESSAGE: &str = "No NodeBox dashboard versions found";
pub const FETCH_FAILED_MESSAGE: &str = "Error fetching NodeBox dashboard versions";

/// JSON body of every failure response.
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("no release keys matched under prefix `{0}`")]
    NoVersionsFound(String), // Contains the listing prefix

    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Storage details stay in the logs; callers only see the fixed message.
        let (status_code, message) = match &self {
            Self::NoVersionsFound(_) => {
                tracing::info!("{self}");
                (StatusCode::NOT_FOUND, NOT_FOUND_MESSAGE)
            }
            Self::Storage(_) => {
                tracing::error!("Generating response for AppError: {self:?}");
                (StatusCode::INTERNAL_SERVER_ERROR, FETCH_FAILED_MESSAGE)
            }
        };
        (status_code, Json(ErrorBody::new(message))).into_response()
    }
}
