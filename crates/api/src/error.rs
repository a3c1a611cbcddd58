#![forbid(unsafe_code)]

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use bk_core::ids::IdError;
use bk_storage::StoreError;
use serde::Serialize;

/// Error shape every endpoint returns. `retryable` tells the client whether
/// resending the same request can succeed (transient store failures) or is
/// pointless (missing rows, bad input).
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
    retryable: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ErrorBody<'a> {
    error: &'a str,
    retryable: bool,
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
            retryable: false,
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<IdError> for ApiError {
    fn from(value: IdError) -> Self {
        Self::bad_request(value.to_string())
    }
}

impl From<StoreError> for ApiError {
    fn from(value: StoreError) -> Self {
        let status = match &value {
            StoreError::UnknownWorkspace
            | StoreError::UnknownBoard
            | StoreError::UnknownColumn
            | StoreError::UnknownTask => StatusCode::NOT_FOUND,
            StoreError::WrongParentKind { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            StoreError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            StoreError::CorruptOrdering { .. } | StoreError::Io(_) | StoreError::Sql(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        if let StoreError::CorruptOrdering { parent_id, .. } = &value {
            // Never produced by a correct store; worth an operator's
            // attention immediately, not a retry.
            tracing::error!(parent_id = %parent_id, "ordering invariant violated");
        }
        Self {
            status,
            retryable: value.is_transient(),
            message: value.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            tracing::error!(status = %self.status, error = %self.message, "request failed");
        } else {
            tracing::debug!(status = %self.status, error = %self.message, "request rejected");
        }
        let body = Json(ErrorBody {
            error: &self.message,
            retryable: self.retryable,
        });
        (self.status, body).into_response()
    }
}
