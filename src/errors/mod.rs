//! Centralized error handling for the PVR guide
//!
//! # Error Categories
//!
//! - **Not found**: unresolved channel or event tags, surfaced as `404`
//! - **Guide errors**: unreadable or inconsistent guide data at start-up
//! - **Configuration errors**: invalid settings such as an unknown timezone
//!
//! Unresolved recording statuses and malformed day offsets are not errors:
//! the former omit the status annotation, the latter degrade to defaults.

pub mod types;

pub use types::*;

/// Convenience type alias for Results using AppError
pub type AppResult<T> = Result<T, AppError>;

/// Convenience type alias for guide loading Results
pub type GuideResult<T> = Result<T, GuideError>;
