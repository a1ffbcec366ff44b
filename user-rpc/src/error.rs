use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;
use user_service::ServiceError;

pub type RpcResult<T> = Result<T, RpcError>;

pub const NOT_FOUND_MESSAGE: &str = "record not found";
pub const INVALID_DATA_MESSAGE: &str = "invalid data";

#[derive(Debug, Error)]
pub enum RpcError {
    #[error("record not found")]
    NotFound,

    #[error("invalid data: {}", .0.join("; "))]
    InvalidData(Vec<String>),

    #[error("invalid data: {0}")]
    MalformedBody(String),
}

impl RpcError {
    pub fn status(&self) -> StatusCode {
        match self {
            RpcError::NotFound => StatusCode::NOT_FOUND,
            RpcError::InvalidData(_) | RpcError::MalformedBody(_) => StatusCode::BAD_REQUEST,
        }
    }

    pub fn body(&self) -> ErrorBody {
        match self {
            RpcError::NotFound => ErrorBody {
                error: NOT_FOUND_MESSAGE.to_string(),
                details: None,
            },
            RpcError::InvalidData(details) => ErrorBody {
                error: INVALID_DATA_MESSAGE.to_string(),
                details: Some(details.clone()),
            },
            RpcError::MalformedBody(reason) => ErrorBody {
                error: INVALID_DATA_MESSAGE.to_string(),
                details: Some(vec![reason.clone()]),
            },
        }
    }
}

/// JSON error envelope: `{error}` or `{error, details}`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<String>>,
}

impl From<ServiceError> for RpcError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::NotFound => RpcError::NotFound,
            ServiceError::Validation(errors) => {
                RpcError::InvalidData(errors.iter().map(ToString::to_string).collect())
            }
        }
    }
}

impl IntoResponse for RpcError {
    fn into_response(self) -> Response {
        (self.status(), Json(self.body())).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use user_service::ValidationError;

    #[test]
    fn test_not_found_body() {
        let err = RpcError::from(ServiceError::NotFound);
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            serde_json::to_value(err.body()).unwrap(),
            serde_json::json!({ "error": "record not found" })
        );
    }

    #[test]
    fn test_validation_body_lists_details() {
        let err = RpcError::from(ServiceError::Validation(vec![ValidationError::new(
            "name is required",
            "nome",
        )]));
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            serde_json::to_value(err.body()).unwrap(),
            serde_json::json!({ "error": "invalid data", "details": ["name is required"] })
        );
    }

    #[test]
    fn test_malformed_body_is_bad_request() {
        let err = RpcError::MalformedBody("request body must be a JSON object".to_string());
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.body().details.unwrap().len(), 1);
    }
}
