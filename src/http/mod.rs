//! HTTP exposition subsystem.
//!
//! # Data Flow
//! ```text
//! incoming request (/liveness or /readiness, any method)
//!     → server.rs handler
//!     → Aggregator.run_round()
//!     → 200 "OK" | 503 + concatenated diagnostics
//! ```
//!
//! # Design Decisions
//! - Explicit server object owning its own router and Aggregator reference;
//!   nothing is registered against a global mux
//! - Overlapping requests each trigger an independent round; there is no
//!   shared mutable state between rounds
//! - The method is deliberately not validated (matches existing callers)

pub mod server;

pub use server::{AppState, HttpServer};
