//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (YAML/JSON, selected by extension)
//!     → loader.rs (sniff format, parse & deserialize)
//!     → validation.rs (semantic checks, all errors collected)
//!     → ServiceList (validated, immutable)
//!     → owned by the Aggregator for the process lifetime
//! ```
//!
//! # Design Decisions
//! - Config is loaded exactly once at startup; there is no reload path
//! - Any configuration error is fatal before the server starts serving
//! - Validation separates syntactic (serde) from semantic checks
//! - Invalid addresses/URLs are rejected here, never during a probe round

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::{HeaderEntry, ProberConfig, ServiceEntry};
pub use validation::{validate_config, ValidationError};
