/*
 * Responsibility
 * - アプリ共通の AppError 定義
 * - IntoResponse 実装 (HTTP status / plain text body)
 * - FetchError を upstream 由来の status に変換
 */
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::services::posts::FetchError;

pub const TAGS_REQUIRED: &str = "Tags parameter is required.";
pub const UPSTREAM_FAILED: &str = "API Failed";

#[derive(Debug, Error)]
pub enum AppError {
    #[error("tags parameter is missing or blank")]
    TagsRequired,
    #[error("upstream failed with {status}")]
    Upstream { status: StatusCode },
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::TagsRequired => StatusCode::BAD_REQUEST,
            AppError::Upstream { status } => *status,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let message = match &self {
            AppError::TagsRequired => TAGS_REQUIRED,
            AppError::Upstream { .. } => UPSTREAM_FAILED,
        };

        (self.status(), message).into_response()
    }
}

impl From<FetchError> for AppError {
    fn from(e: FetchError) -> Self {
        match e {
            FetchError::Status { status, .. } => AppError::Upstream { status },
            // No usable status from upstream: report it as a bad gateway
            FetchError::Transport { .. } | FetchError::Parse { .. } => AppError::Upstream {
                status: StatusCode::BAD_GATEWAY,
            },
        }
    }
}
