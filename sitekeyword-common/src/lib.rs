//! Shared plumbing for the sitekeyword crates.
//!
//! Currently this is the [`observability`] module: a single place that wires the
//! `tracing` subscriber so the CLI and the integration tests log the same way.
//!
//! ```rust
//! use sitekeyword_common::observability::{LogConfig, LogFormat};
//!
//! let cfg = LogConfig {
//!     format: LogFormat::Json,
//!     ..LogConfig::default()
//! };
//! assert_eq!(cfg.app_name, "sitekeyword");
//! ```

pub mod observability;

pub use observability::{init_logging, LogConfig, LogFormat};
