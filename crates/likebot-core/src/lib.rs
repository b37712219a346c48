//! Foundational low-level utilities shared across likebot crates.
//!
//! Provides the atomic file-write helper backing allowlist persistence and
//! the timestamp formatting used when rendering API key expiry data.

pub mod atomic_io;
pub mod time_utils;

pub use atomic_io::write_text_atomic;
pub use time_utils::format_expiry_timestamp;
