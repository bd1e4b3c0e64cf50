/*
 * Responsibility
 * - tag 1 つにつき upstream を 1 回叩く
 * - body を Post に parse し、その tag を持つ post だけを残す
 * - 失敗は FetchError として tag 付きで返す (retry はしない)
 */
use std::sync::Arc;

use axum::http::StatusCode;
use thiserror::Error;

use super::model::{Post, parse_envelope};
use crate::services::upstream::UpstreamClient;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("upstream answered {status} for tag {tag:?}")]
    Status { tag: String, status: StatusCode },
    #[error("upstream unreachable for tag {tag:?}: {message}")]
    Transport { tag: String, message: String },
    #[error("malformed upstream body for tag {tag:?}")]
    Parse {
        tag: String,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Clone)]
pub struct PostFetcher {
    upstream: Arc<dyn UpstreamClient>,
}

impl PostFetcher {
    pub fn new(upstream: Arc<dyn UpstreamClient>) -> Self {
        Self { upstream }
    }

    pub async fn fetch(&self, tag: &str) -> Result<Vec<Post>, FetchError> {
        tracing::debug!(tag, backend = self.upstream.backend_name(), "fetching posts");

        let response = self.upstream.posts_by_tag(tag).await.map_err(|e| {
            tracing::warn!(tag, error = %e, "upstream request failed");
            FetchError::Transport {
                tag: tag.to_string(),
                message: e.0,
            }
        })?;

        if !response.status.is_success() {
            tracing::warn!(tag, status = %response.status, "upstream returned non-success status");
            return Err(FetchError::Status {
                tag: tag.to_string(),
                status: response.status,
            });
        }

        let envelope = parse_envelope(&response.body).map_err(|source| {
            tracing::warn!(tag, error = %source, "upstream body did not parse");
            FetchError::Parse {
                tag: tag.to_string(),
                source,
            }
        })?;

        let received = envelope.posts.len();
        let posts: Vec<Post> = envelope
            .posts
            .into_iter()
            .filter(|post| post.has_tag(tag))
            .collect();

        tracing::debug!(tag, received, kept = posts.len(), "posts fetched");
        Ok(posts)
    }
}
