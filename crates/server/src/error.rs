use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use pathforge_api::ApiError;
use pathforge_completion::CompletionError;
use pathforge_core::PathError;

/// Unified API error type.
///
/// Produces `{"error": "<message>"}` JSON responses.
#[derive(Debug)]
pub struct ApiErr {
    status: StatusCode,
    message: String,
}

impl ApiErr {
    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: msg.into(),
        }
    }

    pub fn unauthorized(msg: impl Into<String>) -> Self {
        Self {
            status: StatusCode::UNAUTHORIZED,
            message: msg.into(),
        }
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: msg.into(),
        }
    }
}

// Extractor rejections keep axum's status and message but use our body.
impl From<PathRejection> for ApiErr {
    fn from(rejection: PathRejection) -> Self {
        Self {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl From<JsonRejection> for ApiErr {
    fn from(rejection: JsonRejection) -> Self {
        Self {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl IntoResponse for ApiErr {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(ApiError {
                error: self.message,
            }),
        )
            .into_response()
    }
}

/// Ways a generate request can end early.
#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    #[error(transparent)]
    Validation(#[from] PathError),

    #[error("missing API key, store one with POST /api/set-cookie")]
    MissingCredential,

    #[error("completion failed: {0}")]
    Upstream(#[from] CompletionError),
}

impl From<GenerateError> for ApiErr {
    fn from(err: GenerateError) -> Self {
        match err {
            GenerateError::Validation(e) => Self::bad_request(e.to_string()),
            GenerateError::MissingCredential => Self::unauthorized(err.to_string()),
            GenerateError::Upstream(ref e) => {
                tracing::error!("upstream completion failed: {e}");
                Self::internal(err.to_string())
            }
        }
    }
}
