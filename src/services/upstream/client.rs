//! Transport seam for the upstream content API.
use async_trait::async_trait;
use axum::http::StatusCode;
use thiserror::Error;

pub type UpstreamResult<T> = Result<T, UpstreamError>;

/// Raw answer from the upstream, before any parsing.
#[derive(Debug, Clone)]
pub struct UpstreamResponse {
    pub status: StatusCode,
    pub body: Vec<u8>,
}

/// The request never produced a status (connect, TLS, reset, body read).
#[derive(Debug, Error)]
#[error("upstream transport error: {0}")]
pub struct UpstreamError(pub String);

/// Issues `GET <base>?tag=<tag>` against the posts endpoint.
///
/// Implementations are shared across requests behind an `Arc`, so they
/// must be `Send + Sync`. No retries and no timeout of their own.
#[async_trait]
pub trait UpstreamClient: Send + Sync + 'static {
    // Backend name (for logging).
    fn backend_name(&self) -> &'static str;

    async fn posts_by_tag(&self, tag: &str) -> UpstreamResult<UpstreamResponse>;
}
