use axum::{
    extract::rejection::{PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::database::DirectoryError;

/// Error returned by the JSON handlers, rendered as `{"detail": ...}`.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Directory(#[from] DirectoryError),
    #[error("Invalid path: {0}")]
    InvalidPath(String),
    #[error("Invalid query: {0}")]
    InvalidQuery(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Directory(DirectoryError::ActivityNotFound) => StatusCode::NOT_FOUND,
            ApiError::Directory(DirectoryError::ParticipantAlreadyEnrolled) => {
                StatusCode::BAD_REQUEST
            }
            ApiError::Directory(DirectoryError::ParticipantNotEnrolled) => StatusCode::NOT_FOUND,
            ApiError::InvalidPath(_) => StatusCode::BAD_REQUEST,
            ApiError::InvalidQuery(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::InvalidPath(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::InvalidQuery(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(json!({ "detail": self.to_string() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            ApiError::from(DirectoryError::ActivityNotFound).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::from(DirectoryError::ParticipantAlreadyEnrolled).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::from(DirectoryError::ParticipantNotEnrolled).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::InvalidPath("invalid utf-8".into()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::InvalidQuery("missing field `email`".into()).status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
    }

    #[test]
    fn test_directory_detail_is_bare_message() {
        let err = ApiError::from(DirectoryError::ActivityNotFound);
        assert_eq!(err.to_string(), "Activity not found");
    }
}
