/*
 * Responsibility
 * - Path の {tags} を TagList として受ける
 * - 欠落・空白のみ・カンマのみは AppError::TagsRequired (upstream には一切触れない)
 */
use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

use crate::{error::AppError, services::posts::TagList};

impl<S> FromRequestParts<S> for TagList
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| AppError::TagsRequired)?;

        TagList::parse(&raw).ok_or(AppError::TagsRequired)
    }
}
