//! HTTP probe capability.

use std::time::Duration;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::Request;
use hyper_util::{
    client::legacy::{connect::HttpConnector, Client},
    rt::TokioExecutor,
};
use tokio::time;
use url::Url;

use crate::prober::outcome::ProbeReply;

/// Capability that checks whether an HTTP endpoint answers with a healthy
/// (2xx) status.
#[async_trait]
pub trait HttpProber: Send + Sync {
    /// One bounded GET request. Must return within `timeout` and must
    /// always carry a status, even on error.
    async fn probe(&self, url: &Url, headers: &[(String, String)], timeout: Duration) -> ProbeReply;
}

/// Real HTTP prober backed by a hyper client. The client is connection-level
/// only; redirects are not followed and the response body is not read.
pub struct HyperHttpProber {
    client: Client<HttpConnector, Body>,
}

impl HyperHttpProber {
    pub fn new() -> Self {
        let client = Client::builder(TokioExecutor::new()).build(HttpConnector::new());
        Self { client }
    }
}

impl Default for HyperHttpProber {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HttpProber for HyperHttpProber {
    async fn probe(&self, url: &Url, headers: &[(String, String)], timeout: Duration) -> ProbeReply {
        let mut builder = Request::builder()
            .method("GET")
            .uri(url.as_str())
            .header("user-agent", "service-prober/0.1");
        for (name, value) in headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        // Header shape is validated at config load, so this only fires for
        // URLs hyper's Uri rejects but url::Url accepted.
        let request = match builder.body(Body::empty()) {
            Ok(request) => request,
            Err(e) => return ProbeReply::unknown(format!("failed to build probe request: {}", e)),
        };

        match time::timeout(timeout, self.client.request(request)).await {
            Ok(Ok(response)) if response.status().is_success() => {
                ProbeReply::success(format!("HTTP probe returned {}", response.status()))
            }
            Ok(Ok(response)) => ProbeReply::failure(format!("unhealthy status {}", response.status())),
            Ok(Err(e)) => ProbeReply::unknown(e.to_string()),
            Err(_) => ProbeReply::unknown("request timed out"),
        }
    }
}
