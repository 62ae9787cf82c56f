//! Aggregated liveness/readiness probing for service dependencies.
//!
//! Reads a declarative list of downstream TCP and HTTP dependencies, probes
//! all of them concurrently on each incoming health-check request, and
//! exposes one aggregated verdict over HTTP.
//!
//! # Architecture Overview
//!
//! ```text
//!   GET /liveness                ┌──────────────────────────────────┐
//!   ───────────────────────────▶ │  http::HttpServer                │
//!                                │      │                           │
//!                                │      ▼                           │
//!                                │  prober::Aggregator.run_round()  │
//!                                │      │ fan-out (one future per   │
//!                                │      │ descriptor, own timeout)  │
//!                                │      ├──▶ TcpProber  ──▶ dep     │
//!                                │      ├──▶ HttpProber ──▶ dep     │
//!                                │      │ fan-in (join_all)         │
//!                                │      ▼                           │
//!   200 "OK" / 503 + diagnostics │  AggregationResult               │
//!   ◀─────────────────────────── │                                  │
//!                                └──────────────────────────────────┘
//!
//!   config file (YAML/JSON) ──▶ config::loader ──▶ ServiceList (immutable,
//!   loaded once at startup; a bad config is fatal before serving starts)
//! ```

pub mod config;
pub mod http;
pub mod prober;

pub use config::loader::{load_config, ConfigError};
pub use http::HttpServer;
pub use prober::{AggregationResult, Aggregator, ServiceList};
