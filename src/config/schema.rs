//! Configuration schema definitions.
//!
//! Raw serde types mirroring the config file. Nothing here is trusted until
//! it has passed through [`crate::config::validation`]. All types derive
//! `Serialize` as well so a parsed configuration can be written back out.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Root of the configuration file.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct ProberConfig {
    /// Dependencies to probe, in declaration order.
    #[serde(default)]
    pub service: Vec<ServiceEntry>,
}

/// One dependency entry, tagged by its `protocol` field.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(tag = "protocol", rename_all = "lowercase")]
pub enum ServiceEntry {
    Tcp {
        /// Unique service name, used as the diagnostic key.
        name: String,

        /// Host to connect to (IP or DNS name).
        ip: String,

        /// TCP port.
        port: u16,

        /// Per-probe connect deadline, as a duration string (e.g. "15s").
        #[serde(with = "humantime_serde")]
        timeout: Duration,
    },
    Http {
        /// Unique service name, used as the diagnostic key.
        name: String,

        /// URL to issue the probe request against.
        url: String,

        /// Request headers sent with the probe, in declaration order.
        #[serde(default)]
        header: Vec<HeaderEntry>,

        /// Per-probe request deadline, as a duration string (e.g. "15s").
        #[serde(with = "humantime_serde")]
        timeout: Duration,
    },
}

impl ServiceEntry {
    pub fn name(&self) -> &str {
        match self {
            ServiceEntry::Tcp { name, .. } => name,
            ServiceEntry::Http { name, .. } => name,
        }
    }

    pub fn timeout(&self) -> Duration {
        match self {
            ServiceEntry::Tcp { timeout, .. } => *timeout,
            ServiceEntry::Http { timeout, .. } => *timeout,
        }
    }
}

/// One request header for an HTTP probe.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct HeaderEntry {
    pub name: String,
    pub value: String,
}
