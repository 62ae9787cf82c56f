//! Validated service descriptors.
//!
//! Immutable value objects produced by configuration validation. The
//! protocol tag is carried in the type, so the aggregator dispatches on the
//! variant rather than on config strings.

use std::time::Duration;
use url::Url;

/// One configured dependency to probe.
#[derive(Debug, Clone, PartialEq)]
pub enum ServiceDescriptor {
    Tcp(TcpService),
    Http(HttpService),
}

impl ServiceDescriptor {
    /// Service name, unique within a configuration; keys the diagnostics.
    pub fn name(&self) -> &str {
        match self {
            ServiceDescriptor::Tcp(s) => &s.name,
            ServiceDescriptor::Http(s) => &s.name,
        }
    }

    /// Per-probe deadline. Each probe carries its own bound; there is no
    /// round-level deadline on top.
    pub fn timeout(&self) -> Duration {
        match self {
            ServiceDescriptor::Tcp(s) => s.timeout,
            ServiceDescriptor::Http(s) => s.timeout,
        }
    }
}

/// A TCP dependency: healthy iff a connection can be established in time.
#[derive(Debug, Clone, PartialEq)]
pub struct TcpService {
    pub name: String,
    pub host: String,
    pub port: u16,
    pub timeout: Duration,
}

/// An HTTP dependency: healthy iff a 2xx response arrives in time.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpService {
    pub name: String,
    pub url: Url,
    /// Request headers sent with each probe, in configured order.
    pub headers: Vec<(String, String)>,
    pub timeout: Duration,
}

/// Ordered list of descriptors, immutable after configuration load and
/// shared read-only across concurrent probe rounds.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ServiceList {
    services: Vec<ServiceDescriptor>,
}

impl ServiceList {
    pub fn new(services: Vec<ServiceDescriptor>) -> Self {
        Self { services }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ServiceDescriptor> {
        self.services.iter()
    }

    pub fn len(&self) -> usize {
        self.services.len()
    }

    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }
}
