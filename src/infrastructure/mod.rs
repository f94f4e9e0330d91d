//! Infrastructure layer for filesystem and environment interactions.
//!
//! Utilities for resolving storage locations and user-supplied paths.

pub mod paths;

pub use paths::{expand_tilde, get_data_dir};
