//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Names are non-empty and unique (they key the diagnostics)
//! - Timeouts are positive, ports non-zero, hosts non-empty
//! - URLs and header names/values parse at load time, never in a probe round
//!
//! # Design Decisions
//! - Returns all validation errors, not just the first
//! - Pure function: ProberConfig → Result<ServiceList, Vec<ValidationError>>
//! - Successful validation yields the typed descriptor list the Aggregator
//!   owns for the rest of the process lifetime

use std::collections::HashSet;

use axum::http::header::{HeaderName, HeaderValue};
use thiserror::Error;
use url::Url;

use crate::config::schema::{ProberConfig, ServiceEntry};
use crate::prober::service::{HttpService, ServiceDescriptor, ServiceList, TcpService};

/// A single semantic problem with a configuration entry.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("service at index {0} has an empty name")]
    EmptyName(usize),

    #[error("duplicate service name {0:?}")]
    DuplicateName(String),

    #[error("service {0:?}: timeout must be greater than zero")]
    ZeroTimeout(String),

    #[error("service {0:?}: host must not be empty")]
    EmptyHost(String),

    #[error("service {0:?}: port must be non-zero")]
    ZeroPort(String),

    #[error("service {0:?}: invalid url {1:?}: {2}")]
    InvalidUrl(String, String, url::ParseError),

    #[error("service {0:?}: unsupported url scheme {1:?}, only \"http\" is probed")]
    UnsupportedScheme(String, String),

    #[error("service {0:?}: invalid header name {1:?}")]
    InvalidHeaderName(String, String),

    #[error("service {0:?}: invalid value for header {1:?}")]
    InvalidHeaderValue(String, String),
}

/// Validate a raw configuration and convert it into the typed service list.
pub fn validate_config(config: &ProberConfig) -> Result<ServiceList, Vec<ValidationError>> {
    let mut errors = Vec::new();
    let mut seen = HashSet::new();
    let mut services = Vec::with_capacity(config.service.len());

    for (index, entry) in config.service.iter().enumerate() {
        let name = entry.name();
        if name.is_empty() {
            errors.push(ValidationError::EmptyName(index));
        } else if !seen.insert(name.to_string()) {
            errors.push(ValidationError::DuplicateName(name.to_string()));
        }
        if entry.timeout().is_zero() {
            errors.push(ValidationError::ZeroTimeout(name.to_string()));
        }

        match entry {
            ServiceEntry::Tcp { name, ip, port, timeout } => {
                if ip.is_empty() {
                    errors.push(ValidationError::EmptyHost(name.clone()));
                }
                if *port == 0 {
                    errors.push(ValidationError::ZeroPort(name.clone()));
                }
                services.push(ServiceDescriptor::Tcp(TcpService {
                    name: name.clone(),
                    host: ip.clone(),
                    port: *port,
                    timeout: *timeout,
                }));
            }
            ServiceEntry::Http { name, url, header, timeout } => {
                for h in header {
                    if HeaderName::from_bytes(h.name.as_bytes()).is_err() {
                        errors.push(ValidationError::InvalidHeaderName(name.clone(), h.name.clone()));
                    }
                    if HeaderValue::from_str(&h.value).is_err() {
                        errors.push(ValidationError::InvalidHeaderValue(name.clone(), h.name.clone()));
                    }
                }
                match Url::parse(url) {
                    // The probe client speaks plain http; anything else must
                    // fail here, never during a probe round.
                    Ok(parsed) if parsed.scheme() != "http" => {
                        errors.push(ValidationError::UnsupportedScheme(
                            name.clone(),
                            parsed.scheme().to_string(),
                        ));
                    }
                    Ok(parsed) => services.push(ServiceDescriptor::Http(HttpService {
                        name: name.clone(),
                        url: parsed,
                        headers: header.iter().map(|h| (h.name.clone(), h.value.clone())).collect(),
                        timeout: *timeout,
                    })),
                    Err(e) => errors.push(ValidationError::InvalidUrl(name.clone(), url.clone(), e)),
                }
            }
        }
    }

    if errors.is_empty() {
        Ok(ServiceList::new(services))
    } else {
        Err(errors)
    }
}
