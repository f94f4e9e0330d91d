//! Diagnostic tracing for the directory.
//!
//! Structured logging built on the `tracing` ecosystem. Spans are emitted
//! around event handling, filtering, and storage operations; the subscriber
//! formats them to stderr so they never interleave with the rendered UI on
//! stdout.
//!
//! # Configuration
//!
//! Trace level is controlled via:
//! 1. `RUST_LOG` environment variable (highest priority)
//! 2. `trace_level` config option
//! 3. Default: `"info"`
//!
//! # Usage
//!
//! Initialize tracing early in startup:
//!
//! ```rust
//! use hostelfinder::observability::init_tracing;
//! use hostelfinder::Config;
//!
//! let config = Config::default();
//! init_tracing(&config);
//!
//! tracing::debug!("directory initialized");
//! ```

mod init;

pub use init::init_tracing;
