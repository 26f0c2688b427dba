//! Translation of gateway errors into HTTP responses

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::GatewayError;

/// Error body returned by every failing route
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub detail: String,
}

/// Operation an error came from; picks the message prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Summarize,
    Retry,
    CustomizePrompt,
}

impl Operation {
    fn error_prefix(self) -> &'static str {
        match self {
            Operation::Summarize => "Error while generating summary",
            Operation::Retry => "Error while retrying summary",
            Operation::CustomizePrompt => "Error while updating custom prompt",
        }
    }
}

#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    detail: String,
}

impl ApiError {
    pub fn new(status: StatusCode, detail: impl Into<String>) -> Self {
        Self {
            status,
            detail: detail.into(),
        }
    }

    pub fn from_gateway(operation: Operation, err: GatewayError) -> Self {
        match err {
            GatewayError::NoPreviousPrompt => Self::new(StatusCode::BAD_REQUEST, err.to_string()),
            other => Self::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("{}: {}", operation.error_prefix(), other),
            ),
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn detail(&self) -> &str {
        &self.detail
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::new(StatusCode::UNPROCESSABLE_ENTITY, rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            detail: self.detail,
        };
        (self.status, Json(body)).into_response()
    }
}
