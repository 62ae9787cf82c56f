//! TCP probe capability.

use std::time::Duration;

use async_trait::async_trait;
use tokio::net::TcpStream;
use tokio::time;

use crate::prober::outcome::ProbeReply;

/// Capability that checks whether a TCP endpoint accepts connections.
#[async_trait]
pub trait TcpProber: Send + Sync {
    /// One bounded connect attempt. Must return within `timeout` and must
    /// always carry a status, even on error.
    async fn probe(&self, host: &str, port: u16, timeout: Duration) -> ProbeReply;
}

/// Real TCP prober backed by tokio's connector.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioTcpProber;

#[async_trait]
impl TcpProber for TokioTcpProber {
    async fn probe(&self, host: &str, port: u16, timeout: Duration) -> ProbeReply {
        let addr = format!("{}:{}", host, port);
        match time::timeout(timeout, TcpStream::connect(&addr)).await {
            Ok(Ok(_stream)) => ProbeReply::success("connection established"),
            Ok(Err(e)) => ProbeReply::failure(e.to_string()),
            Err(_) => ProbeReply::failure("connection timed out"),
        }
    }
}
