//! Probing subsystem.
//!
//! # Data Flow
//! ```text
//! Aggregator.run_round()  (aggregator.rs)
//!     → one future per ServiceDescriptor (service.rs)
//!     → dispatched by protocol tag to TcpProber (tcp.rs)
//!       or HttpProber (http.rs), each bounded by its own timeout
//!     → ProbeOutcome per descriptor (outcome.rs)
//!     → join_all barrier, classify, compose AggregationResult
//! ```
//!
//! # Design Decisions
//! - Capabilities are trait objects selected by the descriptor variant,
//!   never by string comparison inside the aggregator
//! - Every task returns its outcome through its own future; the join is
//!   the only synchronization point (no shared mutable state)
//! - No early cancellation: a failing probe does not abort its siblings
//! - Diagnostics keep the original descriptor order

pub mod aggregator;
pub mod http;
pub mod outcome;
pub mod service;
pub mod tcp;

pub use aggregator::Aggregator;
pub use http::{HttpProber, HyperHttpProber};
pub use outcome::{AggregationResult, ProbeOutcome, ProbeReply, ProbeStatus};
pub use service::{HttpService, ServiceDescriptor, ServiceList, TcpService};
pub use tcp::{TcpProber, TokioTcpProber};
