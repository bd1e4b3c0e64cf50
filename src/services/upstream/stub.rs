//! In-memory upstream used by tests.
use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use axum::http::StatusCode;
use serde_json::{Value, json};

use super::client::{UpstreamClient, UpstreamError, UpstreamResponse, UpstreamResult};

enum Reply {
    Response(UpstreamResponse),
    Unreachable,
}

/// Answers per tag from a fixed table and records every tag it was asked
/// for. Unknown tags get an empty `posts` list.
#[derive(Default)]
pub struct StubUpstream {
    replies: HashMap<String, Reply>,
    calls: Mutex<Vec<String>>,
}

impl StubUpstream {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_posts(self, tag: &str, posts: Value) -> Self {
        let body = json!({ "posts": posts }).to_string();
        self.with_raw(tag, StatusCode::OK, body)
    }

    pub fn with_status(self, tag: &str, status: StatusCode) -> Self {
        self.with_raw(tag, status, r#"{"error":"boom"}"#)
    }

    pub fn with_raw(mut self, tag: &str, status: StatusCode, body: impl Into<String>) -> Self {
        let response = UpstreamResponse {
            status,
            body: body.into().into_bytes(),
        };
        self.replies.insert(tag.to_string(), Reply::Response(response));
        self
    }

    pub fn unreachable(mut self, tag: &str) -> Self {
        self.replies.insert(tag.to_string(), Reply::Unreachable);
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl UpstreamClient for StubUpstream {
    fn backend_name(&self) -> &'static str {
        "stub"
    }

    async fn posts_by_tag(&self, tag: &str) -> UpstreamResult<UpstreamResponse> {
        self.calls.lock().unwrap().push(tag.to_string());

        match self.replies.get(tag) {
            Some(Reply::Response(response)) => Ok(response.clone()),
            Some(Reply::Unreachable) => Err(UpstreamError("connection refused".into())),
            None => Ok(UpstreamResponse {
                status: StatusCode::OK,
                body: br#"{"posts":[]}"#.to_vec(),
            }),
        }
    }
}
