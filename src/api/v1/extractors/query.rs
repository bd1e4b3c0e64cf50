/*
 * Responsibility
 * - クエリ文字列を PostsQuery として受ける
 * - reject しない (不正・重複は PostsQuery::parse 側で吸収)
 */
use std::convert::Infallible;

use axum::{extract::FromRequestParts, http::request::Parts};

use crate::api::v1::dto::posts::PostsQuery;

impl<S> FromRequestParts<S> for PostsQuery
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(PostsQuery::parse(parts.uri.query()))
    }
}
