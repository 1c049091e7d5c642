//! Error responses shared by the catalog handlers.

use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use catalog_core::{EntityError, RepositoryError, SearchError};
use serde::Serialize;
use thiserror::Error;
use tracing::error;

/// Error response
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Failure of an API request, mapped onto an HTTP status.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<RepositoryError> for ApiError {
    fn from(e: RepositoryError) -> Self {
        match e {
            RepositoryError::NotFound { .. } => ApiError::NotFound(e.to_string()),
            RepositoryError::Duplicate { .. } => ApiError::Conflict(e.to_string()),
            RepositoryError::Database(_) | RepositoryError::Serialization(_) => {
                ApiError::Internal(e.to_string())
            }
        }
    }
}

impl From<EntityError> for ApiError {
    fn from(e: EntityError) -> Self {
        ApiError::Validation(e.to_string())
    }
}

impl From<SearchError> for ApiError {
    fn from(e: SearchError) -> Self {
        ApiError::Validation(e.to_string())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::Validation(rejection.body_text())
    }
}

/// Well-formed JSON with the wrong shape is a validation failure; anything
/// that cannot be read as JSON at all is a bad request.
impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            JsonRejection::JsonDataError(_) => ApiError::Validation(rejection.body_text()),
            _ => ApiError::BadRequest(rejection.body_text()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!("Request failed: {}", self);
        }
        (
            status,
            Json(ErrorResponse {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::extract::Query;
    use axum::http::Uri;
    use serde::Deserialize;
    use uuid::Uuid;

    #[derive(Debug, Deserialize)]
    struct Paging {
        #[allow(dead_code)]
        page: Option<i64>,
    }

    #[derive(Debug, Deserialize)]
    struct Named {
        #[allow(dead_code)]
        name: String,
    }

    #[test]
    fn test_repository_errors_map_to_status() {
        let id = Uuid::new_v4();
        let cases = [
            (
                RepositoryError::NotFound { kind: "genre", id },
                StatusCode::NOT_FOUND,
            ),
            (
                RepositoryError::Duplicate { kind: "genre", id },
                StatusCode::CONFLICT,
            ),
            (
                RepositoryError::Database("disk I/O error".to_string()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (
                RepositoryError::Serialization("bad payload".to_string()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (error, expected) in cases {
            assert_eq!(ApiError::from(error).status(), expected);
        }
    }

    #[test]
    fn test_validation_errors_are_unprocessable() {
        let entity = ApiError::from(EntityError::Empty { field: "name" });
        assert_eq!(entity.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let search = ApiError::from(SearchError::InvalidPage(0));
        assert_eq!(search.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert!(search.to_string().contains("page"));
    }

    #[test]
    fn test_into_response_status() {
        let response = ApiError::NotFound("genre missing".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_query_rejections_are_unprocessable() {
        for raw in ["/?page=abc", "/?page=1.5"] {
            let uri: Uri = raw.parse().unwrap();
            let rejection = Query::<Paging>::try_from_uri(&uri).unwrap_err();
            let error = ApiError::from(rejection);
            assert_eq!(error.status(), StatusCode::UNPROCESSABLE_ENTITY);
            assert!(error.to_string().contains("page"));
        }
    }

    #[test]
    fn test_json_rejections_keep_their_class() {
        let missing_field = Json::<Named>::from_bytes(b"{}").unwrap_err();
        assert_eq!(
            ApiError::from(missing_field).status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );

        let malformed = Json::<Named>::from_bytes(b"{\"name\":").unwrap_err();
        assert_eq!(ApiError::from(malformed).status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_rejection_response_has_error_body() {
        use http_body_util::BodyExt;

        let uri: Uri = "/?page=abc".parse().unwrap();
        let rejection = Query::<Paging>::try_from_uri(&uri).unwrap_err();
        let response = ApiError::from(rejection).into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert!(body["error"].as_str().unwrap().contains("page"));
    }
}
