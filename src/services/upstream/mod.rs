pub mod client;
pub mod http_client;
#[cfg(test)]
pub mod stub;

pub use client::UpstreamClient;
pub use http_client::ReqwestUpstream;
