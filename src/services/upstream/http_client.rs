//! `reqwest`-backed upstream client.
use async_trait::async_trait;
use axum::http::StatusCode;
use url::Url;

use super::client::{UpstreamClient, UpstreamError, UpstreamResponse, UpstreamResult};

#[derive(Clone, Debug)]
pub struct ReqwestUpstream {
    http: reqwest::Client,
    base_url: Url,
}

impl ReqwestUpstream {
    pub fn new(base_url: Url) -> Result<Self, UpstreamError> {
        let http = reqwest::Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| UpstreamError(e.to_string()))?;

        Ok(Self { http, base_url })
    }

    fn url_for(&self, tag: &str) -> Url {
        let mut url = self.base_url.clone();
        url.query_pairs_mut().append_pair("tag", tag);
        url
    }
}

#[async_trait]
impl UpstreamClient for ReqwestUpstream {
    fn backend_name(&self) -> &'static str {
        "reqwest"
    }

    async fn posts_by_tag(&self, tag: &str) -> UpstreamResult<UpstreamResponse> {
        let response = self
            .http
            .get(self.url_for(tag))
            .send()
            .await
            .map_err(|e| UpstreamError(e.to_string()))?;

        let status = StatusCode::from_u16(response.status().as_u16())
            .map_err(|e| UpstreamError(e.to_string()))?;

        let body = response
            .bytes()
            .await
            .map_err(|e| UpstreamError(e.to_string()))?
            .to_vec();

        Ok(UpstreamResponse { status, body })
    }
}
