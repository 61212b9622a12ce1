//! Filesystem abstraction for Solution Sanitizer
//!
//! Provides separator-agnostic path handling, safe I/O operations and
//! format-agnostic settings loading.

pub mod checksum;
pub mod config;
pub mod error;
pub mod io;
pub mod path;

pub use config::ConfigStore;
pub use error::{Error, Result};
pub use path::NormalizedPath;
