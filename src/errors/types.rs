//! Error type definitions for the PVR guide
//!
//! Page handlers only ever produce a complete document or a not-found
//! outcome, so the web-facing error type is deliberately small. Start-up
//! errors (configuration and guide loading) carry more detail.

use thiserror::Error;

/// Top-level application error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Resource not found errors
    #[error("Not found: {resource} with id {id}")]
    NotFound { resource: String, id: String },

    /// Guide loading errors
    #[error("Guide error: {0}")]
    Guide(#[from] GuideError),

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// Errors raised while loading guide data at start-up
#[derive(Error, Debug)]
pub enum GuideError {
    /// The guide file could not be read
    #[error("Failed to read guide file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The guide file is not valid JSON for the guide schema
    #[error("Failed to parse guide data: {0}")]
    Parse(#[from] serde_json::Error),

    /// An event or recording refers to a channel that does not exist
    #[error("Unknown channel {channel} referenced by {referrer}")]
    UnknownChannel { channel: u32, referrer: String },

    /// The configured display timezone is not a known IANA name
    #[error("Unknown timezone: {name}")]
    UnknownTimezone { name: String },
}

impl AppError {
    /// Create a not found error for a specific resource
    pub fn not_found<R: Into<String>, I: Into<String>>(resource: R, id: I) -> Self {
        Self::NotFound {
            resource: resource.into(),
            id: id.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}

impl GuideError {
    /// Create an unknown channel error
    pub fn unknown_channel<R: Into<String>>(channel: u32, referrer: R) -> Self {
        Self::UnknownChannel {
            channel,
            referrer: referrer.into(),
        }
    }
}
